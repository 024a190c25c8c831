pub mod author;
pub mod block;
pub mod index_page;
pub mod page;
pub mod tag;
pub mod tag_index_page;

pub use author::Author;
pub use block::Block;
pub use index_page::BlogIndexPage;
pub use page::{BlogPage, BlogPageGalleryImage};
pub use tag::Tag;
pub use tag_index_page::BlogTagIndexPage;

use folio_api::{
    ContentKind, ContentModel, ContentTypeDefinition, ContentTypeRegistry, Panel, Result,
};

/// 博客相关的常量
pub mod constant {
    pub const APP_LABEL: &str = "blog";

    pub const BLOG_INDEX_PAGE: &str = "BlogIndexPage";
    pub const BLOG_PAGE: &str = "BlogPage";
    pub const BLOG_TAG_INDEX_PAGE: &str = "BlogTagIndexPage";
    pub const BLOG_PAGE_GALLERY_IMAGE: &str = "BlogPageGalleryImage";
    pub const AUTHOR: &str = "Author";

    /// 上下文键
    pub const CONTEXT_PAGE: &str = "page";
    pub const CONTEXT_BLOGPAGES: &str = "blogpages";
    pub const CONTEXT_TAG: &str = "tag";
    pub const CONTEXT_REQUEST: &str = "request";
    pub const CONTEXT_MAIN_IMAGE: &str = "main_image";
    pub const CONTEXT_AUTHORS: &str = "authors";
    pub const CONTEXT_TAGS: &str = "tags";

    /// 标签页读取的查询参数
    pub const TAG_QUERY_PARAM: &str = "tag";

    pub const TAG_NAME_MAX_LENGTH: usize = 100;
}

/// 在注册表中登记博客的所有内容类型
pub fn register_blog_types(registry: &mut dyn ContentTypeRegistry) -> Result<()> {
    registry.register(
        ContentTypeDefinition::of::<BlogIndexPage>(ContentKind::Page, "blog index page")
            .with_fields(&["title", "slug", "intro"])
            .with_panels(vec![Panel::field("intro")])
            .with_subpage_types(vec![BlogPage::content_type()]),
    )?;

    registry.register(
        ContentTypeDefinition::of::<BlogPage>(ContentKind::Page, "blog page")
            .with_fields(&[
                "title",
                "slug",
                "date",
                "intro",
                "body",
                "tags",
                "authors",
                "gallery_images",
            ])
            .with_search_fields(&["intro", "body"])
            .with_panels(vec![
                Panel::multi_field(
                    "Blog information",
                    vec![Panel::field("date"), Panel::field("authors"), Panel::field("tags")],
                ),
                Panel::field("intro"),
                Panel::field("body"),
                Panel::inline("gallery_images", "Gallery images"),
            ])
            .with_parent_page_types(vec![BlogIndexPage::content_type()]),
    )?;

    registry.register(
        ContentTypeDefinition::of::<BlogTagIndexPage>(ContentKind::Page, "blog tag index page")
            .with_fields(&["title", "slug"]),
    )?;

    registry.register(
        ContentTypeDefinition::of::<BlogPageGalleryImage>(
            ContentKind::Orderable,
            "blog page gallery image",
        )
        .with_fields(&["image", "caption"])
        .with_panels(vec![Panel::field("image"), Panel::field("caption")]),
    )?;

    registry.register(
        ContentTypeDefinition::of::<Author>(ContentKind::Snippet, "author")
            .with_verbose_name_plural("Authors")
            .with_fields(&["name", "author_image"])
            .with_panels(vec![Panel::field("name"), Panel::field("author_image")]),
    )?;

    Ok(())
}
