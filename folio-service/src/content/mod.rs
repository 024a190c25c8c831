pub mod page_service;
pub mod blog_page_service;
pub mod author_service;
pub mod image_service;
pub mod tag_service;

#[cfg(test)]
pub(crate) mod test_support;

pub use page_service::{PageService, DefaultPageService, PageDraft};
pub use blog_page_service::{BlogPageService, DefaultBlogPageService, BlogPageRequest};
pub use author_service::{AuthorService, DefaultAuthorService};
pub use image_service::{ImageService, DefaultImageService};
pub use tag_service::{TagService, DefaultTagService};

use folio_api::{ContentError, ContentTypeKey, ContentTypeRegistry, Result};
use folio_infra::{ImageRepository, PageRepository};

/// 检查页面能否放在指定父页面下，并且同级slug不重复
///
/// `exclude` 是正在更新的页面自身，不参与slug冲突检查
pub(crate) async fn check_placement(
    pages: &dyn PageRepository,
    registry: &dyn ContentTypeRegistry,
    child: &ContentTypeKey,
    parent_id: Option<i32>,
    slug: &str,
    exclude: Option<i32>,
) -> Result<()> {
    let parent_type = match parent_id {
        Some(id) => {
            let parent = pages
                .find_node(id)
                .await?
                .ok_or_else(|| ContentError::InvalidParent(format!("parent page {} does not exist", id)))?;
            Some(parent.content_type)
        }
        None => None,
    };

    if !registry.can_create_at(child, parent_type.as_ref()) {
        let parent = parent_type
            .map(|key| key.to_string())
            .unwrap_or_else(|| "the root".to_string());
        tracing::warn!(child = %child, parent = %parent, "Rejected page placement");
        return Err(ContentError::InvalidParent(format!(
            "{} cannot be created under {}",
            child, parent
        )));
    }

    if let Some(sibling) = pages.find_child_by_slug(parent_id, slug).await? {
        if Some(sibling.id) != exclude {
            return Err(ContentError::Validation(format!(
                "slug '{}' is already in use by a sibling page",
                slug
            )));
        }
    }
    Ok(())
}

/// 所有引用的图片都必须存在
pub(crate) async fn check_images(images: &dyn ImageRepository, ids: &[i32]) -> Result<()> {
    let missing = images.missing(ids).await?;
    if missing.is_empty() {
        return Ok(());
    }
    let ids: Vec<String> = missing.iter().map(i32::to_string).collect();
    Err(ContentError::Validation(format!(
        "unknown image ids: {}",
        ids.join(", ")
    )))
}
