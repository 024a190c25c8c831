use async_trait::async_trait;
use chrono::NaiveDate;
use folio_api::{ContentError, ContentModel, ContentTypeRegistry, Result};
use folio_domain::blog::block::{referenced_images, Block};
use folio_domain::{validate_model, BlogPage, BlogPageGalleryImage, Image, PageNode};
use folio_infra::{AuthorRepository, BlogPageRepository, ImageRepository, PageRepository};
use serde::Deserialize;
use std::sync::Arc;
use tracing::{info, warn};

use crate::content::{check_images, check_placement};

/// 创建或更新博客文章的请求
#[derive(Debug, Clone, Deserialize)]
pub struct BlogPageRequest {
    /// 更新时忽略，文章不能移动
    #[serde(rename = "parentId", default)]
    pub parent_id: Option<i32>,
    pub title: String,
    #[serde(default)]
    pub slug: Option<String>,
    pub date: NaiveDate,
    pub intro: String,
    #[serde(default)]
    pub body: Vec<Block>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub authors: Vec<i32>,
    /// 按给定顺序保存
    #[serde(rename = "galleryImages", default)]
    pub gallery_images: Vec<BlogPageGalleryImage>,
}

impl BlogPageRequest {
    fn into_page(self, parent_id: Option<i32>) -> BlogPage {
        let mut page = BlogPage {
            page: PageNode::draft(parent_id, self.title, self.slug, BlogPage::content_type()),
            date: self.date,
            intro: self.intro,
            body: self.body,
            tags: self.tags.iter().map(|t| t.trim().to_string()).collect(),
            authors: self.authors,
            gallery_images: self.gallery_images,
        };
        page.renumber_gallery();
        page
    }
}

/// BlogPage服务trait
#[async_trait]
pub trait BlogPageService: Send + Sync {
    async fn create(&self, request: BlogPageRequest) -> Result<BlogPage>;
    async fn update(&self, id: i32, request: BlogPageRequest) -> Result<BlogPage>;
    async fn get(&self, id: i32) -> Result<BlogPage>;
    async fn delete(&self, id: i32) -> Result<()>;
    /// 图库中第一张图片，没有图库时返回None
    async fn main_image(&self, id: i32) -> Result<Option<Image>>;
}

pub struct DefaultBlogPageService {
    pages: Arc<dyn PageRepository>,
    blog_pages: Arc<dyn BlogPageRepository>,
    authors: Arc<dyn AuthorRepository>,
    images: Arc<dyn ImageRepository>,
    registry: Arc<dyn ContentTypeRegistry>,
}

impl DefaultBlogPageService {
    pub fn new(
        pages: Arc<dyn PageRepository>,
        blog_pages: Arc<dyn BlogPageRepository>,
        authors: Arc<dyn AuthorRepository>,
        images: Arc<dyn ImageRepository>,
        registry: Arc<dyn ContentTypeRegistry>,
    ) -> Self {
        Self {
            pages,
            blog_pages,
            authors,
            images,
            registry,
        }
    }

    /// 保存前的全部检查，任何一项失败都不会写入数据
    async fn check(&self, page: &BlogPage, exclude: Option<i32>) -> Result<()> {
        if let Err(err) = validate_model(page) {
            warn!(title = %page.page.title, error = %err, "Rejected blog page");
            return Err(err);
        }

        check_placement(
            self.pages.as_ref(),
            self.registry.as_ref(),
            &page.page.content_type,
            page.page.parent_id,
            &page.page.slug,
            exclude,
        )
        .await?;

        let author_ids = page.author_ids();
        let found = self.authors.find_many(&author_ids).await?;
        if found.len() != author_ids.len() {
            let unknown: Vec<String> = author_ids
                .iter()
                .filter(|id| !found.iter().any(|a| a.id == **id))
                .map(i32::to_string)
                .collect();
            return Err(ContentError::Validation(format!(
                "unknown author ids: {}",
                unknown.join(", ")
            )));
        }

        let mut image_ids = referenced_images(&page.body);
        image_ids.extend(page.gallery_images.iter().map(|item| item.image_id));
        check_images(self.images.as_ref(), &image_ids).await
    }
}

#[async_trait]
impl BlogPageService for DefaultBlogPageService {
    async fn create(&self, request: BlogPageRequest) -> Result<BlogPage> {
        let parent_id = request.parent_id;
        let page = request.into_page(parent_id);
        self.check(&page, None).await?;

        let page = self.blog_pages.insert(page).await?;
        info!(page_id = page.page.id, slug = %page.page.slug, "Created blog page");
        Ok(page)
    }

    async fn update(&self, id: i32, request: BlogPageRequest) -> Result<BlogPage> {
        let existing = self.get(id).await?;

        let mut page = request.into_page(existing.page.parent_id);
        page.page.id = id;
        page.page.live = existing.page.live;
        page.page.first_published_at = existing.page.first_published_at;
        page.page.last_published_at = existing.page.last_published_at;
        self.check(&page, Some(id)).await?;

        let page = self.blog_pages.update(page).await?;
        info!(page_id = id, "Updated blog page");
        Ok(page)
    }

    async fn get(&self, id: i32) -> Result<BlogPage> {
        self.blog_pages
            .find(id)
            .await?
            .ok_or_else(|| ContentError::not_found("blog page", id))
    }

    async fn delete(&self, id: i32) -> Result<()> {
        // 只删除博客文章，其他类型的页面走页面服务
        self.get(id).await?;
        self.pages.delete(id).await?;
        info!(page_id = id, "Deleted blog page");
        Ok(())
    }

    async fn main_image(&self, id: i32) -> Result<Option<Image>> {
        let page = self.get(id).await?;
        match page.main_image() {
            Some(image_id) => self.images.find(image_id).await,
            None => Ok(None),
        }
    }
}
