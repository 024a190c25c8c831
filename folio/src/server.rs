use axum::{
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post, put},
    Router,
};
use folio_api::{ContentTypeRegistry, DefaultContentTypeRegistry};
use folio_infra::{
    AuthorRepository, BlogPageRepository, DatabaseManager, ImageRepository, PageRepository,
    SeaOrmAuthorRepository, SeaOrmBlogPageRepository, SeaOrmImageRepository,
    SeaOrmPageRepository, SeaOrmTagRepository,
};
use folio_service::content::{
    AuthorService, DefaultAuthorService,
    BlogPageService, DefaultBlogPageService,
    ImageService, DefaultImageService,
    PageService, DefaultPageService,
    TagService, DefaultTagService,
};
use folio_web::AppState;
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::error::Result;

/// 创建应用路由
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/api/v1alpha1/health", get(health_check))
        // 前台页面
        .route("/pages/*path", get(folio_web::render_page))
        .nest("/api/v1alpha1", api_routes())
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}

/// 管理API
fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/pages/index", post(folio_web::create_index_page))
        .route("/pages/tag-index", post(folio_web::create_tag_index_page))
        .route("/pages/:id", get(folio_web::get_page).delete(folio_web::delete_page))
        .route("/pages/:id/context", get(folio_web::get_page_context))
        .route("/pages/:id/publish", put(folio_web::publish_page))
        .route("/pages/:id/unpublish", put(folio_web::unpublish_page))
        .route("/blogpages", post(folio_web::create_blog_page))
        .route("/blogpages/:id", get(folio_web::get_blog_page).put(folio_web::update_blog_page).delete(folio_web::delete_blog_page))
        .route("/blogpages/:id/main-image", get(folio_web::get_main_image))
        .route("/authors", get(folio_web::list_authors).post(folio_web::create_author))
        .route("/authors/:id", get(folio_web::get_author).put(folio_web::update_author).delete(folio_web::delete_author))
        .route("/images", get(folio_web::list_images).post(folio_web::create_image))
        .route("/images/:id", get(folio_web::get_image).delete(folio_web::delete_image))
        .route("/tags", get(folio_web::list_tags))
        .route("/tags/:name/posts", get(folio_web::list_tag_posts))
        .route("/content-types", get(folio_web::list_content_types))
        .route("/content-types/:key", get(folio_web::get_content_type))
}

/// 健康检查端点
async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}

/// 注册所有内容类型
pub fn init_registry() -> Result<Arc<dyn ContentTypeRegistry>> {
    let mut registry = DefaultContentTypeRegistry::new();
    folio_domain::register_blog_types(&mut registry)?;
    Ok(Arc::new(registry))
}

/// 初始化应用状态
pub fn init_app_state(
    db_manager: &DatabaseManager,
    registry: Arc<dyn ContentTypeRegistry>,
) -> AppState {
    let db = db_manager.primary_db();

    let pages: Arc<dyn PageRepository> = Arc::new(SeaOrmPageRepository::new(db.clone()));
    let blog_pages: Arc<dyn BlogPageRepository> =
        Arc::new(SeaOrmBlogPageRepository::new(db.clone()));
    let authors: Arc<dyn AuthorRepository> = Arc::new(SeaOrmAuthorRepository::new(db.clone()));
    let images: Arc<dyn ImageRepository> = Arc::new(SeaOrmImageRepository::new(db.clone()));

    // 创建Page服务
    let page_service: Arc<dyn PageService> = Arc::new(DefaultPageService::new(
        pages.clone(),
        blog_pages.clone(),
        authors.clone(),
        images.clone(),
        registry.clone(),
    ));

    // 创建BlogPage服务
    let blog_page_service: Arc<dyn BlogPageService> = Arc::new(DefaultBlogPageService::new(
        pages,
        blog_pages.clone(),
        authors.clone(),
        images.clone(),
        registry.clone(),
    ));

    let author_service: Arc<dyn AuthorService> =
        Arc::new(DefaultAuthorService::new(authors, images.clone()));
    let image_service: Arc<dyn ImageService> = Arc::new(DefaultImageService::new(images));
    let tag_service: Arc<dyn TagService> = Arc::new(DefaultTagService::new(
        Arc::new(SeaOrmTagRepository::new(db)),
        blog_pages,
    ));

    AppState {
        page_service,
        blog_page_service,
        author_service,
        image_service,
        tag_service,
        registry,
    }
}
