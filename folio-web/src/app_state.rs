use folio_api::ContentTypeRegistry;
use folio_service::content::{
    AuthorService, BlogPageService, ImageService, PageService, TagService,
};
use std::sync::Arc;

/// 应用状态
/// 包含所有需要的服务实例
#[derive(Clone)]
pub struct AppState {
    pub page_service: Arc<dyn PageService>,
    pub blog_page_service: Arc<dyn BlogPageService>,
    pub author_service: Arc<dyn AuthorService>,
    pub image_service: Arc<dyn ImageService>,
    pub tag_service: Arc<dyn TagService>,
    pub registry: Arc<dyn ContentTypeRegistry>,
}
