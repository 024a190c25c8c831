pub mod entity;
pub mod manager;
pub mod repository;

#[cfg(test)]
mod tests;

pub use manager::DatabaseManager;
pub use repository::{
    AuthorRepository, BlogPageRepository, ImageRepository, PageRepository, TagRepository,
    SeaOrmAuthorRepository, SeaOrmBlogPageRepository, SeaOrmImageRepository,
    SeaOrmPageRepository, SeaOrmTagRepository,
};
