pub mod panel;
pub mod registry;

use crate::error::ContentError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// ContentTypeKey 表示内容类型的应用标签和模型名，例如 `blog.BlogPage`
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ContentTypeKey {
    pub app_label: String,
    pub model: String,
}

impl ContentTypeKey {
    pub fn new(app_label: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            app_label: app_label.into(),
            model: model.into(),
        }
    }
}

impl fmt::Display for ContentTypeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.app_label, self.model)
    }
}

impl FromStr for ContentTypeKey {
    type Err = ContentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once('.') {
            Some((app_label, model)) if !app_label.is_empty() && !model.is_empty() => {
                Ok(Self::new(app_label, model))
            }
            _ => Err(ContentError::Validation(format!(
                "invalid content type key: {}",
                s
            ))),
        }
    }
}

impl TryFrom<String> for ContentTypeKey {
    type Error = ContentError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ContentTypeKey> for String {
    fn from(key: ContentTypeKey) -> Self {
        key.to_string()
    }
}

/// ContentKind 区分页面树中的页面、可复用的片段和有序子对象
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentKind {
    Page,
    Snippet,
    Orderable,
}

/// ContentModel trait 是所有内容模型的基础trait
pub trait ContentModel: Send + Sync {
    fn content_type() -> ContentTypeKey
    where
        Self: Sized;
}

/// ListOptions 用于分页查询
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListOptions {
    pub page: Option<u64>,
    pub size: Option<u64>,
}

impl ListOptions {
    pub const DEFAULT_SIZE: u64 = 20;

    pub fn page(&self) -> u64 {
        self.page.unwrap_or(0)
    }

    /// 每页数量，0会被当作默认值
    pub fn size(&self) -> u64 {
        match self.size {
            Some(size) if size > 0 => size,
            _ => Self::DEFAULT_SIZE,
        }
    }
}

/// ListResult 包含查询结果
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListResult<T> {
    pub items: Vec<T>,
    pub total: u64,
    pub page: u64,
    pub size: u64,
}

impl<T> ListResult<T> {
    pub fn new(items: Vec<T>, total: u64, page: u64, size: u64) -> Self {
        Self {
            items,
            total,
            page,
            size,
        }
    }
}
