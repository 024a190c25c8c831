use async_trait::async_trait;
use folio_api::{ContentError, ListOptions, ListResult, Result};
use folio_domain::{validate_model, Image};
use folio_infra::ImageRepository;
use std::sync::Arc;
use tracing::info;

/// Image服务trait
#[async_trait]
pub trait ImageService: Send + Sync {
    async fn create(&self, image: Image) -> Result<Image>;
    async fn get(&self, id: i32) -> Result<Image>;
    async fn list(&self, options: ListOptions) -> Result<ListResult<Image>>;
    /// 删除图片，图库条目随之删除，作者头像被置空
    async fn delete(&self, id: i32) -> Result<()>;
}

pub struct DefaultImageService {
    images: Arc<dyn ImageRepository>,
}

impl DefaultImageService {
    pub fn new(images: Arc<dyn ImageRepository>) -> Self {
        Self { images }
    }
}

#[async_trait]
impl ImageService for DefaultImageService {
    async fn create(&self, mut image: Image) -> Result<Image> {
        image.id = 0;
        validate_model(&image)?;
        let image = self.images.insert(image).await?;
        info!(image_id = image.id, "Created image");
        Ok(image)
    }

    async fn get(&self, id: i32) -> Result<Image> {
        self.images
            .find(id)
            .await?
            .ok_or_else(|| ContentError::not_found("image", id))
    }

    async fn list(&self, options: ListOptions) -> Result<ListResult<Image>> {
        self.images.list(options).await
    }

    async fn delete(&self, id: i32) -> Result<()> {
        if !self.images.delete(id).await? {
            return Err(ContentError::not_found("image", id));
        }
        info!(image_id = id, "Deleted image");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::test_support::Fixture;

    #[tokio::test]
    async fn test_image_lifecycle() {
        let fx = Fixture::new().await;
        let image = fx.images.create(Image::new("Sunset", "sunset.jpg")).await.unwrap();
        assert_eq!(fx.images.get(image.id).await.unwrap(), image);

        let listed = fx.images.list(ListOptions::default()).await.unwrap();
        assert_eq!(listed.items, vec![image.clone()]);

        fx.images.delete(image.id).await.unwrap();
        assert!(matches!(fx.images.get(image.id).await, Err(ContentError::NotFound(_))));
        assert!(matches!(fx.images.delete(image.id).await, Err(ContentError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_image_requires_file() {
        let fx = Fixture::new().await;
        assert!(matches!(
            fx.images.create(Image::new("Sunset", "")).await,
            Err(ContentError::Validation(_))
        ));
    }
}
