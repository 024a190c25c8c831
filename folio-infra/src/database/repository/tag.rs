use super::db_err;
use crate::database::entity::tag;
use async_trait::async_trait;
use folio_api::Result;
use folio_domain::Tag;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};
use std::sync::Arc;

/// TagRepository 标签词条的数据访问，标签在保存文章时按需创建
#[async_trait]
pub trait TagRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<Tag>>;
    async fn find_by_name(&self, name: &str) -> Result<Option<Tag>>;
}

/// SeaOrmTagRepository 使用Sea-ORM实现的Repository
pub struct SeaOrmTagRepository {
    db: Arc<DatabaseConnection>,
}

impl SeaOrmTagRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl TagRepository for SeaOrmTagRepository {
    async fn list(&self) -> Result<Vec<Tag>> {
        let models = tag::Entity::find()
            .order_by_asc(tag::Column::Name)
            .all(&*self.db)
            .await
            .map_err(db_err)?;
        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Tag>> {
        let model = tag::Entity::find()
            .filter(tag::Column::Name.eq(name))
            .one(&*self.db)
            .await
            .map_err(db_err)?;
        Ok(model.map(Into::into))
    }
}
