pub mod author;
pub mod blog_page;
pub mod image;
pub mod page;
pub mod tag;

pub use author::{AuthorRepository, SeaOrmAuthorRepository};
pub use blog_page::{BlogPageRepository, SeaOrmBlogPageRepository};
pub use image::{ImageRepository, SeaOrmImageRepository};
pub use page::{PageRepository, SeaOrmPageRepository};
pub use tag::{SeaOrmTagRepository, TagRepository};

use folio_api::ContentError;
use sea_orm::DbErr;

pub(crate) fn db_err(err: DbErr) -> ContentError {
    ContentError::Database(err.to_string())
}
