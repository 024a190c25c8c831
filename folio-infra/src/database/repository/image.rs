use super::db_err;
use crate::database::entity::image;
use async_trait::async_trait;
use folio_api::{ListOptions, ListResult, Result};
use folio_domain::Image;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect, Set,
};
use std::sync::Arc;

/// ImageRepository 图片资源的数据访问
#[async_trait]
pub trait ImageRepository: Send + Sync {
    async fn insert(&self, image: Image) -> Result<Image>;
    async fn find(&self, id: i32) -> Result<Option<Image>>;
    async fn list(&self, options: ListOptions) -> Result<ListResult<Image>>;
    /// 返回 `ids` 中不存在的图片ID
    async fn missing(&self, ids: &[i32]) -> Result<Vec<i32>>;
    /// 删除图片；图库条目随之删除，作者头像引用被置空
    async fn delete(&self, id: i32) -> Result<bool>;
}

/// SeaOrmImageRepository 使用Sea-ORM实现的Repository
pub struct SeaOrmImageRepository {
    db: Arc<DatabaseConnection>,
}

impl SeaOrmImageRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ImageRepository for SeaOrmImageRepository {
    async fn insert(&self, image: Image) -> Result<Image> {
        let model = image::ActiveModel {
            id: sea_orm::NotSet,
            title: Set(image.title),
            file: Set(image.file),
        }
        .insert(&*self.db)
        .await
        .map_err(db_err)?;

        Ok(model.into())
    }

    async fn find(&self, id: i32) -> Result<Option<Image>> {
        let model = image::Entity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(db_err)?;
        Ok(model.map(Into::into))
    }

    async fn list(&self, options: ListOptions) -> Result<ListResult<Image>> {
        let page = options.page();
        let size = options.size();

        let paginator = image::Entity::find()
            .order_by_asc(image::Column::Id)
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

    async fn missing(&self, ids: &[i32]) -> Result<Vec<i32>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let existing: Vec<i32> = image::Entity::find()
            .select_only()
            .column(image::Column::Id)
            .filter(image::Column::Id.is_in(ids.iter().copied()))
            .into_tuple()
            .all(&*self.db)
            .await
            .map_err(db_err)?;

        let mut missing: Vec<i32> = ids
            .iter()
            .copied()
            .filter(|id| !existing.contains(id))
            .collect();
        missing.sort_unstable();
        missing.dedup();
        Ok(missing)
    }

    async fn delete(&self, id: i32) -> Result<bool> {
        let result = image::Entity::delete_by_id(id)
            .exec(&*self.db)
            .await
            .map_err(db_err)?;
        Ok(result.rows_affected > 0)
    }
}
