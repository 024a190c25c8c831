use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use validator::ValidationError;

pub const HEADING_MAX_LENGTH: usize = 255;

/// Block 正文中的一个内容块，类型标签随值一起保存
///
/// 序列化形式为 `{"type": "heading", "value": "..."}`，正文是这些块的有序数组。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum Block {
    /// 短标题文本
    Heading(String),
    /// 富文本段落（HTML片段）
    Paragraph(String),
    /// 图片引用
    Image(i32),
    /// 引用块
    Quote(String),
    /// 外部媒体地址
    Embed(String),
}

impl Block {
    pub fn image_id(&self) -> Option<i32> {
        match self {
            Self::Image(id) => Some(*id),
            _ => None,
        }
    }

    /// 块级别的校验
    pub fn check(&self) -> Result<(), ValidationError> {
        match self {
            Self::Heading(text) if text.chars().count() > HEADING_MAX_LENGTH => Err(error(
                "heading_too_long",
                format!("heading exceeds {} characters", HEADING_MAX_LENGTH),
            )),
            Self::Embed(raw) => match url::Url::parse(raw) {
                Ok(url) if matches!(url.scheme(), "http" | "https") => Ok(()),
                _ => Err(error("embed_url", format!("'{}' is not an http(s) URL", raw))),
            },
            _ => Ok(()),
        }
    }
}

fn error(code: &'static str, message: String) -> ValidationError {
    let mut err = ValidationError::new(code);
    err.message = Some(Cow::from(message));
    err
}

/// 正文中引用到的所有图片
pub fn referenced_images(body: &[Block]) -> Vec<i32> {
    body.iter().filter_map(Block::image_id).collect()
}
