use super::constant;
use crate::page::PageNode;
use folio_api::{ContentModel, ContentTypeKey};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// BlogIndexPage 博客列表页，子页面为博客文章
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct BlogIndexPage {
    #[serde(flatten)]
    #[validate(nested)]
    pub page: PageNode,

    /// 富文本简介
    pub intro: Option<String>,
}

impl ContentModel for BlogIndexPage {
    fn content_type() -> ContentTypeKey {
        ContentTypeKey::new(constant::APP_LABEL, constant::BLOG_INDEX_PAGE)
    }
}

impl BlogIndexPage {
    pub fn new(page: PageNode, intro: Option<String>) -> Self {
        Self { page, intro }
    }
}
