use super::db_err;
use crate::database::entity::author;
use async_trait::async_trait;
use folio_api::{ContentError, ListOptions, ListResult, Result};
use folio_domain::Author;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, Set, Unchanged,
};
use std::collections::HashMap;
use std::sync::Arc;

/// AuthorRepository 作者片段的数据访问
#[async_trait]
pub trait AuthorRepository: Send + Sync {
    async fn insert(&self, author: Author) -> Result<Author>;
    async fn update(&self, author: Author) -> Result<Author>;
    async fn find(&self, id: i32) -> Result<Option<Author>>;
    /// 按给定ID顺序返回，不存在的ID被忽略
    async fn find_many(&self, ids: &[i32]) -> Result<Vec<Author>>;
    async fn list(&self, options: ListOptions) -> Result<ListResult<Author>>;
    async fn delete(&self, id: i32) -> Result<bool>;
}

/// SeaOrmAuthorRepository 使用Sea-ORM实现的Repository
pub struct SeaOrmAuthorRepository {
    db: Arc<DatabaseConnection>,
}

impl SeaOrmAuthorRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl AuthorRepository for SeaOrmAuthorRepository {
    async fn insert(&self, author: Author) -> Result<Author> {
        let model = author::ActiveModel {
            id: sea_orm::NotSet,
            name: Set(author.name),
            author_image_id: Set(author.author_image),
        }
        .insert(&*self.db)
        .await
        .map_err(db_err)?;

        Ok(model.into())
    }

    async fn update(&self, author: Author) -> Result<Author> {
        if self.find(author.id).await?.is_none() {
            return Err(ContentError::not_found("author", author.id));
        }

        let model = author::ActiveModel {
            id: Unchanged(author.id),
            name: Set(author.name),
            author_image_id: Set(author.author_image),
        }
        .update(&*self.db)
        .await
        .map_err(db_err)?;

        Ok(model.into())
    }

    async fn find(&self, id: i32) -> Result<Option<Author>> {
        let model = author::Entity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(db_err)?;
        Ok(model.map(Into::into))
    }

    async fn find_many(&self, ids: &[i32]) -> Result<Vec<Author>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let mut found: HashMap<i32, Author> = author::Entity::find()
            .filter(author::Column::Id.is_in(ids.iter().copied()))
            .all(&*self.db)
            .await
            .map_err(db_err)?
            .into_iter()
            .map(|model| (model.id, model.into()))
            .collect();

        Ok(ids.iter().filter_map(|id| found.remove(id)).collect())
    }

    async fn list(&self, options: ListOptions) -> Result<ListResult<Author>> {
        let page = options.page();
        let size = options.size();

        let paginator = author::Entity::find()
            .order_by_asc(author::Column::Name)
            .order_by_asc(author::Column::Id)
            .paginate(&*self.db, size);
        let total = paginator.num_items().await.map_err(db_err)?;
        let items = paginator
            .fetch_page(page)
            .await
            .map_err(db_err)?
            .into_iter()
            .map(Into::into)
            .collect();

        Ok(ListResult::new(items, total, page, size))
    }

    async fn delete(&self, id: i32) -> Result<bool> {
        let result = author::Entity::delete_by_id(id)
            .exec(&*self.db)
            .await
            .map_err(db_err)?;
        Ok(result.rows_affected > 0)
    }
}
