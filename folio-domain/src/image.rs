use serde::{Deserialize, Serialize};
use validator::Validate;

/// Image 外部管理的图片资源，这里只保存引用信息
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct Image {
    #[serde(default)]
    pub id: i32,

    #[validate(length(min = 1, max = 255))]
    pub title: String,

    /// 存储路径或URL，由资源子系统解析
    #[validate(length(min = 1, max = 255))]
    pub file: String,
}

impl Image {
    pub fn new(title: impl Into<String>, file: impl Into<String>) -> Self {
        Self {
            id: 0,
            title: title.into(),
            file: file.into(),
        }
    }
}
