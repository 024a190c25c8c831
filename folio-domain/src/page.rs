use crate::blog::{BlogIndexPage, BlogPage, BlogTagIndexPage};
use chrono::{DateTime, Utc};
use folio_api::ContentTypeKey;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// PageNode 页面树中的一个节点，保存所有页面类型共有的字段
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct PageNode {
    #[serde(default)]
    pub id: i32,

    #[serde(rename = "parentId")]
    pub parent_id: Option<i32>,

    #[validate(length(min = 1, max = 255))]
    pub title: String,

    #[validate(length(min = 1, max = 255), custom(function = "validate_slug"))]
    pub slug: String,

    #[serde(rename = "contentType")]
    pub content_type: ContentTypeKey,

    /// 是否已发布（公开可见）
    #[serde(default)]
    pub live: bool,

    #[serde(rename = "firstPublishedAt")]
    pub first_published_at: Option<DateTime<Utc>>,

    #[serde(rename = "lastPublishedAt")]
    pub last_published_at: Option<DateTime<Utc>>,
}

impl PageNode {
    /// 创建草稿节点，slug为空时由标题生成
    pub fn draft(
        parent_id: Option<i32>,
        title: impl Into<String>,
        slug: Option<String>,
        content_type: ContentTypeKey,
    ) -> Self {
        let title = title.into();
        let slug = slug
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| slug::slugify(&title));
        Self {
            id: 0,
            parent_id,
            title,
            slug,
            content_type,
            live: false,
            first_published_at: None,
            last_published_at: None,
        }
    }

    /// 发布页面：首次发布时间只记录一次
    pub fn publish(&mut self, now: DateTime<Utc>) {
        self.live = true;
        if self.first_published_at.is_none() {
            self.first_published_at = Some(now);
        }
        self.last_published_at = Some(now);
    }

    /// 取消发布，保留发布时间
    pub fn unpublish(&mut self) {
        self.live = false;
    }
}

fn validate_slug(slug: &str) -> Result<(), ValidationError> {
    let valid = slug
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' || c == '_');
    if valid {
        Ok(())
    } else {
        Err(ValidationError::new("slug"))
    }
}

/// SpecificPage 页面的具体类型，按内容类型分派上下文构建
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SpecificPage {
    BlogIndex(BlogIndexPage),
    Blog(BlogPage),
    BlogTagIndex(BlogTagIndexPage),
}

impl SpecificPage {
    pub fn node(&self) -> &PageNode {
        match self {
            Self::BlogIndex(page) => &page.page,
            Self::Blog(page) => &page.page,
            Self::BlogTagIndex(page) => &page.page,
        }
    }
}
