use async_trait::async_trait;
use folio_api::{ContentError, ListOptions, ListResult, Result};
use folio_domain::{validate_model, Author};
use folio_infra::{AuthorRepository, ImageRepository};
use std::sync::Arc;
use tracing::info;

use crate::content::check_images;

/// Author服务trait
#[async_trait]
pub trait AuthorService: Send + Sync {
    async fn create(&self, author: Author) -> Result<Author>;
    async fn update(&self, id: i32, author: Author) -> Result<Author>;
    async fn get(&self, id: i32) -> Result<Author>;
    async fn list(&self, options: ListOptions) -> Result<ListResult<Author>>;
    async fn delete(&self, id: i32) -> Result<()>;
}

pub struct DefaultAuthorService {
    authors: Arc<dyn AuthorRepository>,
    images: Arc<dyn ImageRepository>,
}

impl DefaultAuthorService {
    pub fn new(authors: Arc<dyn AuthorRepository>, images: Arc<dyn ImageRepository>) -> Self {
        Self { authors, images }
    }

    async fn check(&self, author: &Author) -> Result<()> {
        validate_model(author)?;
        if let Some(image_id) = author.author_image {
            check_images(self.images.as_ref(), &[image_id]).await?;
        }
        Ok(())
    }
}

#[async_trait]
impl AuthorService for DefaultAuthorService {
    async fn create(&self, mut author: Author) -> Result<Author> {
        author.id = 0;
        self.check(&author).await?;
        let author = self.authors.insert(author).await?;
        info!(author_id = author.id, author = %author, "Created author");
        Ok(author)
    }

    async fn update(&self, id: i32, mut author: Author) -> Result<Author> {
        author.id = id;
        self.check(&author).await?;
        let author = self.authors.update(author).await?;
        info!(author_id = id, "Updated author");
        Ok(author)
    }

    async fn get(&self, id: i32) -> Result<Author> {
        self.authors
            .find(id)
            .await?
            .ok_or_else(|| ContentError::not_found("author", id))
    }

    async fn list(&self, options: ListOptions) -> Result<ListResult<Author>> {
        self.authors.list(options).await
    }

    async fn delete(&self, id: i32) -> Result<()> {
        if !self.authors.delete(id).await? {
            return Err(ContentError::not_found("author", id));
        }
        info!(author_id = id, "Deleted author");
        Ok(())
    }
}
