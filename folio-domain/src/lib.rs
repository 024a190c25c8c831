pub mod blog;
pub mod image;
pub mod page;

pub use blog::{
    register_blog_types,
    Author, Block, BlogIndexPage, BlogPage, BlogPageGalleryImage, BlogTagIndexPage, Tag,
};
pub use image::Image;
pub use page::{PageNode, SpecificPage};

use folio_api::{ContentError, Result};
use validator::Validate;

/// 保存前校验，将validator的错误转换为ContentError
pub fn validate_model<T: Validate>(model: &T) -> Result<()> {
    model
        .validate()
        .map_err(|errors| ContentError::Validation(errors.to_string()))
}
