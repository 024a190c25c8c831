pub mod content_type;
pub mod context;
pub mod error;

pub use content_type::{
    ContentKind, ContentModel, ContentTypeKey, ListOptions, ListResult,
};
pub use content_type::panel::Panel;
pub use content_type::registry::{
    ContentTypeDefinition, ContentTypeRegistry, DefaultContentTypeRegistry,
};

pub use context::{Context, PageRequest};
pub use error::{ContentError, Result};
