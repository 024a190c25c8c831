pub mod database;

pub use database::{
    AuthorRepository, BlogPageRepository, DatabaseManager, ImageRepository, PageRepository,
    SeaOrmAuthorRepository, SeaOrmBlogPageRepository, SeaOrmImageRepository,
    SeaOrmPageRepository, SeaOrmTagRepository, TagRepository,
};
