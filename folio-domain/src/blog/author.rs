use super::constant;
use folio_api::{ContentModel, ContentTypeKey};
use serde::{Deserialize, Serialize};
use std::fmt;
use validator::Validate;

/// Author 可复用的作者片段，被多篇文章引用
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct Author {
    #[serde(default)]
    pub id: i32,

    #[validate(length(min = 1, max = 255))]
    pub name: String,

    /// 头像，图片被删除时置空
    #[serde(rename = "authorImage")]
    pub author_image: Option<i32>,
}

impl ContentModel for Author {
    fn content_type() -> ContentTypeKey {
        ContentTypeKey::new(constant::APP_LABEL, constant::AUTHOR)
    }
}

impl Author {
    pub fn new(name: impl Into<String>, author_image: Option<i32>) -> Self {
        Self {
            id: 0,
            name: name.into(),
            author_image,
        }
    }
}

impl fmt::Display for Author {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
