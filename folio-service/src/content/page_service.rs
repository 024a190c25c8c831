use async_trait::async_trait;
use chrono::Utc;
use folio_api::{ContentError, ContentModel, ContentTypeRegistry, Context, PageRequest, Result};
use folio_domain::blog::constant;
use folio_domain::{
    validate_model, BlogIndexPage, BlogPage, BlogTagIndexPage, PageNode, SpecificPage,
};
use folio_infra::{AuthorRepository, BlogPageRepository, ImageRepository, PageRepository};
use serde::Deserialize;
use std::sync::Arc;
use tracing::{debug, info};

use crate::content::check_placement;

/// 创建列表页的请求
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PageDraft {
    #[serde(rename = "parentId", default)]
    pub parent_id: Option<i32>,
    pub title: String,
    /// 为空时由标题生成
    #[serde(default)]
    pub slug: Option<String>,
    /// 只对BlogIndexPage有效
    #[serde(default)]
    pub intro: Option<String>,
}

/// Page服务trait，负责页面树的生命周期和上下文构建
#[async_trait]
pub trait PageService: Send + Sync {
    async fn create_index_page(&self, draft: PageDraft) -> Result<BlogIndexPage>;
    async fn create_tag_index_page(&self, draft: PageDraft) -> Result<BlogTagIndexPage>;
    async fn get(&self, id: i32) -> Result<SpecificPage>;
    async fn publish(&self, id: i32) -> Result<PageNode>;
    async fn unpublish(&self, id: i32) -> Result<PageNode>;
    /// 删除页面及其所有子页面
    async fn delete(&self, id: i32) -> Result<()>;
    /// 按slug路径逐级查找已发布页面，例如 `/blog/my-post/`
    async fn find_by_path(&self, path: &str) -> Result<SpecificPage>;
    async fn get_context(&self, id: i32, request: &PageRequest) -> Result<Context>;
}

pub struct DefaultPageService {
    pages: Arc<dyn PageRepository>,
    blog_pages: Arc<dyn BlogPageRepository>,
    authors: Arc<dyn AuthorRepository>,
    images: Arc<dyn ImageRepository>,
    registry: Arc<dyn ContentTypeRegistry>,
}

impl DefaultPageService {
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

    async fn draft_node<M: ContentModel>(&self, draft: &PageDraft) -> Result<PageNode> {
        let node = PageNode::draft(
            draft.parent_id,
            draft.title.clone(),
            draft.slug.clone(),
            M::content_type(),
        );
        validate_model(&node)?;
        check_placement(
            self.pages.as_ref(),
            self.registry.as_ref(),
            &node.content_type,
            node.parent_id,
            &node.slug,
            None,
        )
        .await?;
        Ok(node)
    }

    /// 按节点的内容类型加载具体页面
    async fn specific(&self, node: PageNode) -> Result<SpecificPage> {
        let id = node.id;
        let content_type = node.content_type;
        let found = if content_type == BlogIndexPage::content_type() {
            self.pages.find_index_page(id).await?.map(SpecificPage::BlogIndex)
        } else if content_type == BlogPage::content_type() {
            self.blog_pages.find(id).await?.map(SpecificPage::Blog)
        } else if content_type == BlogTagIndexPage::content_type() {
            self.pages.find_tag_index_page(id).await?.map(SpecificPage::BlogTagIndex)
        } else {
            return Err(ContentError::NotFound(format!(
                "page model for content type {}",
                content_type
            )));
        };
        found.ok_or_else(|| ContentError::not_found("page", id))
    }

    async fn node(&self, id: i32) -> Result<PageNode> {
        self.pages
            .find_node(id)
            .await?
            .ok_or_else(|| ContentError::not_found("page", id))
    }

    fn base_context<T: serde::Serialize>(page: &T, request: &PageRequest) -> Result<Context> {
        let mut context = Context::new();
        context.insert(constant::CONTEXT_PAGE, page)?;
        context.insert(constant::CONTEXT_REQUEST, request)?;
        Ok(context)
    }

    /// 已发布的子文章，最新发布的在前
    async fn index_context(&self, page: &BlogIndexPage, request: &PageRequest) -> Result<Context> {
        let children = self.pages.live_children(page.page.id).await?;
        let ids: Vec<i32> = children.iter().map(|node| node.id).collect();
        let blogpages = self.blog_pages.find_many(&ids).await?;

        let mut context = Self::base_context(page, request)?;
        context.insert(constant::CONTEXT_BLOGPAGES, &blogpages)?;
        Ok(context)
    }

    /// 全站带有 `tag` 参数指定标签的文章，没有参数时为空
    async fn tag_index_context(
        &self,
        page: &BlogTagIndexPage,
        request: &PageRequest,
    ) -> Result<Context> {
        let tag = request.query_param(constant::TAG_QUERY_PARAM);
        let blogpages = match tag {
            Some(name) => self.blog_pages.find_by_tag(name).await?,
            None => Vec::new(),
        };

        let mut context = Self::base_context(page, request)?;
        context.insert(constant::CONTEXT_TAG, &tag)?;
        context.insert(constant::CONTEXT_BLOGPAGES, &blogpages)?;
        Ok(context)
    }

    async fn blog_context(&self, page: &BlogPage, request: &PageRequest) -> Result<Context> {
        let main_image = match page.main_image() {
            Some(id) => self.images.find(id).await?,
            None => None,
        };
        let authors = self.authors.find_many(&page.author_ids()).await?;

        let mut context = Self::base_context(page, request)?;
        context.insert(constant::CONTEXT_MAIN_IMAGE, &main_image)?;
        context.insert(constant::CONTEXT_AUTHORS, &authors)?;
        context.insert(constant::CONTEXT_TAGS, &page.tag_names())?;
        Ok(context)
    }

    async fn set_live(&self, id: i32, live: bool) -> Result<PageNode> {
        let mut node = self.node(id).await?;
        if live {
            node.publish(Utc::now());
        } else {
            node.unpublish();
        }
        self.pages.save_node(&node).await?;
        info!(page_id = id, live, "Changed page live state");
        Ok(node)
    }
}

#[async_trait]
impl PageService for DefaultPageService {
    async fn create_index_page(&self, draft: PageDraft) -> Result<BlogIndexPage> {
        let node = self.draft_node::<BlogIndexPage>(&draft).await?;
        let page = self
            .pages
            .insert_index_page(BlogIndexPage::new(node, draft.intro))
            .await?;
        info!(page_id = page.page.id, slug = %page.page.slug, "Created blog index page");
        Ok(page)
    }

    async fn create_tag_index_page(&self, draft: PageDraft) -> Result<BlogTagIndexPage> {
        let node = self.draft_node::<BlogTagIndexPage>(&draft).await?;
        let page = self
            .pages
            .insert_tag_index_page(BlogTagIndexPage { page: node })
            .await?;
        info!(page_id = page.page.id, slug = %page.page.slug, "Created blog tag index page");
        Ok(page)
    }

    async fn get(&self, id: i32) -> Result<SpecificPage> {
        let node = self.node(id).await?;
        self.specific(node).await
    }

    async fn publish(&self, id: i32) -> Result<PageNode> {
        self.set_live(id, true).await
    }

    async fn unpublish(&self, id: i32) -> Result<PageNode> {
        self.set_live(id, false).await
    }

    async fn delete(&self, id: i32) -> Result<()> {
        if !self.pages.delete(id).await? {
            return Err(ContentError::not_found("page", id));
        }
        info!(page_id = id, "Deleted page");
        Ok(())
    }

    async fn find_by_path(&self, path: &str) -> Result<SpecificPage> {
        let mut current: Option<PageNode> = None;
        for segment in path.split('/').filter(|s| !s.is_empty()) {
            let parent_id = current.as_ref().map(|node| node.id);
            let child = self
                .pages
                .find_child_by_slug(parent_id, segment)
                .await?
                .filter(|node| node.live);
            match child {
                Some(node) => current = Some(node),
                None => return Err(ContentError::not_found("page", path)),
            }
        }

        let node = current.ok_or_else(|| ContentError::not_found("page", path))?;
        debug!(page_id = node.id, path, "Resolved page path");
        self.specific(node).await
    }

    async fn get_context(&self, id: i32, request: &PageRequest) -> Result<Context> {
        let page = self.get(id).await?;
        debug!(page_id = id, path = %request.path, "Building page context");
        match &page {
            SpecificPage::BlogIndex(index) => self.index_context(index, request).await,
            SpecificPage::BlogTagIndex(tags) => self.tag_index_context(tags, request).await,
            SpecificPage::Blog(post) => self.blog_context(post, request).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::test_support::{blog_request, Fixture};
    use crate::content::{AuthorService, BlogPageService, ImageService};
    use folio_domain::{Author, BlogPageGalleryImage, Image};
    use serde_json::json;

    fn titles(context: &Context) -> Vec<String> {
        context
            .get("blogpages")
            .and_then(|v| v.as_array())
            .map(|pages| {
                pages
                    .iter()
                    .filter_map(|p| p["title"].as_str().map(str::to_string))
                    .collect()
            })
            .unwrap_or_default()
    }

    #[tokio::test]
    async fn test_index_context_lists_live_children_newest_first() {
        let fx = Fixture::new().await;
        let index = fx.index("Blog").await;

        fx.posts.create(blog_request(index.page.id, "A")).await.unwrap();
        let b = fx.posts.create(blog_request(index.page.id, "B")).await.unwrap();
        let c = fx.posts.create(blog_request(index.page.id, "C")).await.unwrap();
        fx.pages.publish(b.page.id).await.unwrap();
        tokio::time::sleep(std::time::Duration::from_millis(5)).await;
        fx.pages.publish(c.page.id).await.unwrap();

        let context = fx
            .pages
            .get_context(index.page.id, &PageRequest::new("/blog/"))
            .await
            .unwrap();
        assert_eq!(titles(&context), vec!["C", "B"]);
        assert_eq!(context.get("page").unwrap()["title"], json!("Blog"));
    }

    #[tokio::test]
    async fn test_index_context_empty() {
        let fx = Fixture::new().await;
        let index = fx.index("Blog").await;

        let context = fx
            .pages
            .get_context(index.page.id, &PageRequest::new("/blog/"))
            .await
            .unwrap();
        assert_eq!(context.get("blogpages"), Some(&json!([])));
    }

    #[tokio::test]
    async fn test_tag_index_context_filters_by_tag() {
        let fx = Fixture::new().await;
        let index = fx.index("Blog").await;
        let tags = fx
            .pages
            .create_tag_index_page(PageDraft {
                title: "Tags".to_string(),
                ..Default::default()
            })
            .await
            .unwrap();

        let mut tagged = blog_request(index.page.id, "Tagged");
        tagged.tags = vec!["django".to_string()];
        fx.posts.create(tagged).await.unwrap();
        let mut other = blog_request(index.page.id, "Other");
        other.tags = vec!["wagtail".to_string()];
        fx.posts.create(other).await.unwrap();

        let request = PageRequest::new("/tags/").with_query("tag", "django");
        let context = fx.pages.get_context(tags.page.id, &request).await.unwrap();
        // 草稿文章同样会出现在标签页中
        assert_eq!(titles(&context), vec!["Tagged"]);
        assert_eq!(context.get("tag"), Some(&json!("django")));
    }

    #[tokio::test]
    async fn test_tag_index_context_without_tag_is_empty() {
        let fx = Fixture::new().await;
        let index = fx.index("Blog").await;
        let tags = fx
            .pages
            .create_tag_index_page(PageDraft {
                title: "Tags".to_string(),
                ..Default::default()
            })
            .await
            .unwrap();
        let mut tagged = blog_request(index.page.id, "Tagged");
        tagged.tags = vec!["django".to_string()];
        fx.posts.create(tagged).await.unwrap();

        let context = fx
            .pages
            .get_context(tags.page.id, &PageRequest::new("/tags/"))
            .await
            .unwrap();
        assert_eq!(context.get("blogpages"), Some(&json!([])));
        assert_eq!(context.get("tag"), Some(&json!(null)));
    }

    #[tokio::test]
    async fn test_blog_context_includes_main_image_and_authors() {
        let fx = Fixture::new().await;
        let index = fx.index("Blog").await;
        let img1 = fx.images.create(Image::new("one", "1.jpg")).await.unwrap();
        let img2 = fx.images.create(Image::new("two", "2.jpg")).await.unwrap();
        let author = fx.authors.create(Author::new("Ada", None)).await.unwrap();

        let mut request = blog_request(index.page.id, "Post");
        request.authors = vec![author.id];
        request.tags = vec!["rust".to_string()];
        request.gallery_images = vec![
            BlogPageGalleryImage::new(img1.id, None),
            BlogPageGalleryImage::new(img2.id, None),
        ];
        let post = fx.posts.create(request).await.unwrap();

        let context = fx
            .pages
            .get_context(post.page.id, &PageRequest::new("/blog/post/"))
            .await
            .unwrap();
        assert_eq!(context.get("main_image").unwrap()["id"], json!(img1.id));
        assert_eq!(context.get("authors").unwrap()[0]["name"], json!("Ada"));
        assert_eq!(context.get("tags"), Some(&json!(["rust"])));
    }

    #[tokio::test]
    async fn test_publish_sets_first_published_once() {
        let fx = Fixture::new().await;
        let index = fx.index("Blog").await;

        let first = fx.pages.publish(index.page.id).await.unwrap();
        assert!(first.live);
        let first_at = first.first_published_at;
        assert!(first_at.is_some());

        let hidden = fx.pages.unpublish(index.page.id).await.unwrap();
        assert!(!hidden.live);

        let again = fx.pages.publish(index.page.id).await.unwrap();
        assert_eq!(again.first_published_at, first_at);
        assert!(again.last_published_at >= first_at);
    }

    #[tokio::test]
    async fn test_find_by_path_only_live_pages() {
        let fx = Fixture::new().await;
        let index = fx.index("Blog").await;
        let post = fx.posts.create(blog_request(index.page.id, "My Post")).await.unwrap();

        assert!(matches!(
            fx.pages.find_by_path("/blog/my-post/").await,
            Err(ContentError::NotFound(_))
        ));

        fx.pages.publish(index.page.id).await.unwrap();
        fx.pages.publish(post.page.id).await.unwrap();
        match fx.pages.find_by_path("/blog/my-post/").await.unwrap() {
            SpecificPage::Blog(found) => assert_eq!(found.page.id, post.page.id),
            other => panic!("unexpected page {:?}", other),
        }
        assert!(matches!(
            fx.pages.find_by_path("blog").await.unwrap(),
            SpecificPage::BlogIndex(_)
        ));
        assert!(fx.pages.find_by_path("/").await.is_err());
    }

    #[tokio::test]
    async fn test_index_page_rejects_duplicate_root_slug() {
        let fx = Fixture::new().await;
        fx.index("Blog").await;

        let result = fx
            .pages
            .create_index_page(PageDraft {
                title: "Blog".to_string(),
                ..Default::default()
            })
            .await;
        assert!(matches!(result, Err(ContentError::Validation(_))));
    }

    #[tokio::test]
    async fn test_index_page_under_missing_parent() {
        let fx = Fixture::new().await;
        let result = fx
            .pages
            .create_index_page(PageDraft {
                parent_id: Some(404),
                title: "Blog".to_string(),
                ..Default::default()
            })
            .await;
        assert!(matches!(result, Err(ContentError::InvalidParent(_))));
    }

    #[tokio::test]
    async fn test_delete_page_cascades_to_children() {
        let fx = Fixture::new().await;
        let index = fx.index("Blog").await;
        let post = fx.posts.create(blog_request(index.page.id, "Post")).await.unwrap();

        fx.pages.delete(index.page.id).await.unwrap();
        assert!(matches!(fx.pages.get(post.page.id).await, Err(ContentError::NotFound(_))));
        assert!(matches!(
            fx.pages.delete(index.page.id).await,
            Err(ContentError::NotFound(_))
        ));
    }
}
