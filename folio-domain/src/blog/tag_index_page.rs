use super::constant;
use crate::page::PageNode;
use folio_api::{ContentModel, ContentTypeKey};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// BlogTagIndexPage 按标签筛选文章的列表页，没有额外字段
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct BlogTagIndexPage {
    #[serde(flatten)]
    #[validate(nested)]
    pub page: PageNode,
}

impl ContentModel for BlogTagIndexPage {
    fn content_type() -> ContentTypeKey {
        ContentTypeKey::new(constant::APP_LABEL, constant::BLOG_TAG_INDEX_PAGE)
    }
}
