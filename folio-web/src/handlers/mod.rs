pub mod pages;
pub mod blog_pages;
pub mod authors;
pub mod images;
pub mod tags;
pub mod content_types;

pub use pages::*;
pub use blog_pages::*;
pub use authors::*;
pub use images::*;
pub use tags::*;
pub use content_types::*;
