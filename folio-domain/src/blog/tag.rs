use serde::{Deserialize, Serialize};

/// Tag 标签词条，通过名称关联到文章
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    pub id: i32,
    pub name: String,
    pub slug: String,
}

impl Tag {
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        let slug = slug::slugify(&name);
        Self { id: 0, name, slug }
    }
}
