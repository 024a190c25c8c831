//! 数据库实体，与 folio-migration 中的表一一对应

pub mod author;
pub mod blog_index_page;
pub mod blog_page;
pub mod blog_page_author;
pub mod blog_page_gallery_image;
pub mod blog_page_tag;
pub mod blog_tag_index_page;
pub mod image;
pub mod page;
pub mod tag;
