use async_trait::async_trait;
use folio_api::Result;
use folio_domain::{BlogPage, Tag};
use folio_infra::{BlogPageRepository, TagRepository};
use std::sync::Arc;
use tracing::debug;

/// Tag服务trait，标签随文章保存自动创建
#[async_trait]
pub trait TagService: Send + Sync {
    async fn list(&self) -> Result<Vec<Tag>>;
    /// 带有该标签的所有文章，不区分发布状态
    async fn posts(&self, name: &str) -> Result<Vec<BlogPage>>;
}

pub struct DefaultTagService {
    tags: Arc<dyn TagRepository>,
    blog_pages: Arc<dyn BlogPageRepository>,
}

impl DefaultTagService {
    pub fn new(tags: Arc<dyn TagRepository>, blog_pages: Arc<dyn BlogPageRepository>) -> Self {
        Self { tags, blog_pages }
    }
}

#[async_trait]
impl TagService for DefaultTagService {
    async fn list(&self) -> Result<Vec<Tag>> {
        self.tags.list().await
    }

    async fn posts(&self, name: &str) -> Result<Vec<BlogPage>> {
        // 标签不存在时不必再联表查询
        if self.tags.find_by_name(name).await?.is_none() {
            debug!(tag = %name, "Unknown tag");
            return Ok(Vec::new());
        }
        self.blog_pages.find_by_tag(name).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::test_support::{blog_request, Fixture};
    use crate::content::BlogPageService;

    #[tokio::test]
    async fn test_tags_created_on_save() {
        let fx = Fixture::new().await;
        let index = fx.index("Blog").await;

        let mut request = blog_request(index.page.id, "Post");
        request.tags = vec!["Web Dev".to_string()];
        let post = fx.posts.create(request).await.unwrap();

        let tags = fx.tags.list().await.unwrap();
        assert_eq!(tags.len(), 1);
        assert_eq!(tags[0].name, "Web Dev");
        assert_eq!(tags[0].slug, "web-dev");

        let posts = fx.tags.posts("Web Dev").await.unwrap();
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].page.id, post.page.id);
        assert!(fx.tags.posts("web-dev").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_posts_for_unknown_tag_is_empty() {
        let fx = Fixture::new().await;
        let index = fx.index("Blog").await;

        let mut request = blog_request(index.page.id, "Post");
        request.tags = vec!["django".to_string()];
        fx.posts.create(request).await.unwrap();

        assert!(fx.tags.posts("missing").await.unwrap().is_empty());
        assert!(fx.tags.posts("").await.unwrap().is_empty());
        assert_eq!(fx.tags.posts("django").await.unwrap().len(), 1);
    }
}
