//! 服务测试共用的内存数据库环境

use super::*;
use chrono::NaiveDate;
use folio_api::{ContentTypeRegistry, DefaultContentTypeRegistry};
use folio_domain::blog::block::Block;
use folio_domain::{register_blog_types, BlogIndexPage};
use folio_infra::{
    DatabaseManager, PageRepository, SeaOrmAuthorRepository, SeaOrmBlogPageRepository,
    SeaOrmImageRepository, SeaOrmPageRepository, SeaOrmTagRepository,
};
use std::sync::Arc;

pub(crate) struct Fixture {
    pub pages: DefaultPageService,
    pub posts: DefaultBlogPageService,
    pub authors: DefaultAuthorService,
    pub images: DefaultImageService,
    pub tags: DefaultTagService,
    pub page_repo: Arc<dyn PageRepository>,
}

impl Fixture {
    pub async fn new() -> Self {
        let manager = DatabaseManager::in_memory().await.unwrap();
        manager.migrate().await.unwrap();
        let db = manager.primary_db();

        let mut registry = DefaultContentTypeRegistry::new();
        register_blog_types(&mut registry).unwrap();
        let registry: Arc<dyn ContentTypeRegistry> = Arc::new(registry);

        let page_repo: Arc<dyn PageRepository> = Arc::new(SeaOrmPageRepository::new(db.clone()));
        let blog_repo = Arc::new(SeaOrmBlogPageRepository::new(db.clone()));
        let author_repo = Arc::new(SeaOrmAuthorRepository::new(db.clone()));
        let image_repo = Arc::new(SeaOrmImageRepository::new(db.clone()));
        let tag_repo = Arc::new(SeaOrmTagRepository::new(db));

        Self {
            pages: DefaultPageService::new(
                page_repo.clone(),
                blog_repo.clone(),
                author_repo.clone(),
                image_repo.clone(),
                registry.clone(),
            ),
            posts: DefaultBlogPageService::new(
                page_repo.clone(),
                blog_repo.clone(),
                author_repo.clone(),
                image_repo.clone(),
                registry,
            ),
            authors: DefaultAuthorService::new(author_repo, image_repo.clone()),
            images: DefaultImageService::new(image_repo),
            tags: DefaultTagService::new(tag_repo, blog_repo),
            page_repo,
        }
    }

    /// 在根下创建一个博客列表页
    pub async fn index(&self, title: &str) -> BlogIndexPage {
        self.pages
            .create_index_page(PageDraft {
                title: title.to_string(),
                intro: Some("<p>Latest posts</p>".to_string()),
                ..Default::default()
            })
            .await
            .unwrap()
    }
}

pub(crate) fn blog_request(parent_id: i32, title: &str) -> BlogPageRequest {
    BlogPageRequest {
        parent_id: Some(parent_id),
        title: title.to_string(),
        slug: None,
        date: NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
        intro: format!("Intro for {}", title),
        body: vec![Block::Paragraph(format!("<p>{}</p>", title))],
        tags: Vec::new(),
        authors: Vec::new(),
        gallery_images: Vec::new(),
    }
}
