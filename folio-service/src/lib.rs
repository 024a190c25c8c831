pub mod content;

pub use content::{
    PageService, DefaultPageService, PageDraft,
    BlogPageService, DefaultBlogPageService, BlogPageRequest,
    AuthorService, DefaultAuthorService,
    ImageService, DefaultImageService,
    TagService, DefaultTagService,
};
