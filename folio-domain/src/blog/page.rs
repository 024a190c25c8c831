use super::block::Block;
use super::constant;
use crate::page::PageNode;
use chrono::NaiveDate;
use folio_api::{ContentModel, ContentTypeKey};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use validator::{Validate, ValidationError};

/// BlogPage 单篇博客文章
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct BlogPage {
    #[serde(flatten)]
    #[validate(nested)]
    pub page: PageNode,

    /// 文章日期
    pub date: NaiveDate,

    #[validate(length(min = 1, max = 250))]
    pub intro: String,

    #[serde(default)]
    #[validate(custom(function = "validate_body"))]
    pub body: Vec<Block>,

    /// 标签名称
    #[serde(default)]
    #[validate(custom(function = "validate_tags"))]
    pub tags: Vec<String>,

    /// 作者ID
    #[serde(default)]
    pub authors: Vec<i32>,

    #[serde(rename = "galleryImages", default)]
    #[validate(nested)]
    pub gallery_images: Vec<BlogPageGalleryImage>,
}

impl ContentModel for BlogPage {
    fn content_type() -> ContentTypeKey {
        ContentTypeKey::new(constant::APP_LABEL, constant::BLOG_PAGE)
    }
}

impl BlogPage {
    /// 第一张图库图片（按排序位置），没有图库时返回None
    pub fn main_image(&self) -> Option<i32> {
        self.gallery_images
            .iter()
            .min_by_key(|item| item.sort_order)
            .map(|item| item.image_id)
    }

    /// 去重后的标签名称，保持原有顺序
    pub fn tag_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::with_capacity(self.tags.len());
        for tag in &self.tags {
            if !names.contains(&tag.as_str()) {
                names.push(tag);
            }
        }
        names
    }

    /// 去重后的作者ID，保持原有顺序
    pub fn author_ids(&self) -> Vec<i32> {
        let mut ids = Vec::with_capacity(self.authors.len());
        for id in &self.authors {
            if !ids.contains(id) {
                ids.push(*id);
            }
        }
        ids
    }

    /// 按给定顺序重新编号图库排序位置
    pub fn renumber_gallery(&mut self) {
        for (position, item) in self.gallery_images.iter_mut().enumerate() {
            item.sort_order = position as i32;
        }
    }
}

/// BlogPageGalleryImage 文章图库中的一张图片，按sort_order排序
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct BlogPageGalleryImage {
    #[serde(default)]
    pub id: i32,

    #[serde(rename = "imageId")]
    pub image_id: i32,

    #[validate(length(max = 250))]
    pub caption: Option<String>,

    #[serde(rename = "sortOrder", default)]
    pub sort_order: i32,
}

impl ContentModel for BlogPageGalleryImage {
    fn content_type() -> ContentTypeKey {
        ContentTypeKey::new(constant::APP_LABEL, constant::BLOG_PAGE_GALLERY_IMAGE)
    }
}

impl BlogPageGalleryImage {
    pub fn new(image_id: i32, caption: Option<String>) -> Self {
        Self {
            id: 0,
            image_id,
            caption,
            sort_order: 0,
        }
    }
}

fn validate_body(body: &[Block]) -> Result<(), ValidationError> {
    body.iter().try_for_each(Block::check)
}

fn validate_tags(tags: &[String]) -> Result<(), ValidationError> {
    for tag in tags {
        let length = tag.trim().chars().count();
        if length == 0 || length > constant::TAG_NAME_MAX_LENGTH {
            let mut err = ValidationError::new("tag_name");
            err.message = Some(Cow::from(format!(
                "tag names must be 1 to {} characters",
                constant::TAG_NAME_MAX_LENGTH
            )));
            return Err(err);
        }
    }
    Ok(())
}
