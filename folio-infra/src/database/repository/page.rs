use super::db_err;
use crate::database::entity::{blog_index_page, blog_tag_index_page, page};
use async_trait::async_trait;
use folio_api::{ContentError, Result};
use folio_domain::{BlogIndexPage, BlogTagIndexPage, PageNode};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder, Set, TransactionTrait, Unchanged,
};
use std::sync::Arc;

/// PageRepository 页面树及列表页的数据访问
#[async_trait]
pub trait PageRepository: Send + Sync {
    async fn insert_index_page(&self, page: BlogIndexPage) -> Result<BlogIndexPage>;
    async fn insert_tag_index_page(&self, page: BlogTagIndexPage) -> Result<BlogTagIndexPage>;
    async fn find_node(&self, id: i32) -> Result<Option<PageNode>>;
    /// `parent_id` 为None时在根页面中查找
    async fn find_child_by_slug(&self, parent_id: Option<i32>, slug: &str) -> Result<Option<PageNode>>;
    async fn find_index_page(&self, id: i32) -> Result<Option<BlogIndexPage>>;
    async fn find_tag_index_page(&self, id: i32) -> Result<Option<BlogTagIndexPage>>;
    /// 已发布的子页面，按首次发布时间倒序
    async fn live_children(&self, parent_id: i32) -> Result<Vec<PageNode>>;
    async fn save_node(&self, node: &PageNode) -> Result<()>;
    /// 删除页面及其子树，返回是否存在
    async fn delete(&self, id: i32) -> Result<bool>;
}

/// SeaOrmPageRepository 使用Sea-ORM实现的Repository
pub struct SeaOrmPageRepository {
    db: Arc<DatabaseConnection>,
}

impl SeaOrmPageRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

pub(crate) async fn insert_node<C: ConnectionTrait>(db: &C, node: &PageNode) -> Result<PageNode> {
    let model = page::ActiveModel {
        id: sea_orm::NotSet,
        parent_id: Set(node.parent_id),
        title: Set(node.title.clone()),
        slug: Set(node.slug.clone()),
        content_type: Set(node.content_type.to_string()),
        live: Set(node.live),
        first_published_at: Set(node.first_published_at),
        last_published_at: Set(node.last_published_at),
    }
    .insert(db)
    .await
    .map_err(db_err)?;

    model.into_node()
}

pub(crate) async fn update_node<C: ConnectionTrait>(db: &C, node: &PageNode) -> Result<()> {
    let exists = page::Entity::find_by_id(node.id)
        .one(db)
        .await
        .map_err(db_err)?
        .is_some();
    if !exists {
        return Err(ContentError::not_found("page", node.id));
    }

    page::ActiveModel {
        id: Unchanged(node.id),
        parent_id: Set(node.parent_id),
        title: Set(node.title.clone()),
        slug: Set(node.slug.clone()),
        content_type: Set(node.content_type.to_string()),
        live: Set(node.live),
        first_published_at: Set(node.first_published_at),
        last_published_at: Set(node.last_published_at),
    }
    .update(db)
    .await
    .map_err(db_err)?;
    Ok(())
}

#[async_trait]
impl PageRepository for SeaOrmPageRepository {
    async fn insert_index_page(&self, mut page: BlogIndexPage) -> Result<BlogIndexPage> {
        let txn = self.db.begin().await.map_err(db_err)?;
        page.page = insert_node(&txn, &page.page).await?;

        blog_index_page::ActiveModel {
            page_id: Set(page.page.id),
            intro: Set(page.intro.clone()),
        }
        .insert(&txn)
        .await
        .map_err(db_err)?;

        txn.commit().await.map_err(db_err)?;
        tracing::debug!(page_id = page.page.id, "Inserted blog index page");
        Ok(page)
    }

    async fn insert_tag_index_page(&self, mut page: BlogTagIndexPage) -> Result<BlogTagIndexPage> {
        let txn = self.db.begin().await.map_err(db_err)?;
        page.page = insert_node(&txn, &page.page).await?;

        blog_tag_index_page::ActiveModel {
            page_id: Set(page.page.id),
        }
        .insert(&txn)
        .await
        .map_err(db_err)?;

        txn.commit().await.map_err(db_err)?;
        tracing::debug!(page_id = page.page.id, "Inserted blog tag index page");
        Ok(page)
    }

    async fn find_node(&self, id: i32) -> Result<Option<PageNode>> {
        page::Entity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(db_err)?
            .map(page::Model::into_node)
            .transpose()
    }

    async fn find_child_by_slug(&self, parent_id: Option<i32>, slug: &str) -> Result<Option<PageNode>> {
        let parent_filter = match parent_id {
            Some(id) => page::Column::ParentId.eq(id),
            None => page::Column::ParentId.is_null(),
        };

        page::Entity::find()
            .filter(parent_filter)
            .filter(page::Column::Slug.eq(slug))
            .one(&*self.db)
            .await
            .map_err(db_err)?
            .map(page::Model::into_node)
            .transpose()
    }

    async fn find_index_page(&self, id: i32) -> Result<Option<BlogIndexPage>> {
        let found = blog_index_page::Entity::find_by_id(id)
            .find_also_related(page::Entity)
            .one(&*self.db)
            .await
            .map_err(db_err)?;

        match found {
            Some((row, Some(node))) => Ok(Some(BlogIndexPage::new(node.into_node()?, row.intro))),
            _ => Ok(None),
        }
    }

    async fn find_tag_index_page(&self, id: i32) -> Result<Option<BlogTagIndexPage>> {
        let found = blog_tag_index_page::Entity::find_by_id(id)
            .find_also_related(page::Entity)
            .one(&*self.db)
            .await
            .map_err(db_err)?;

        match found {
            Some((_, Some(node))) => Ok(Some(BlogTagIndexPage {
                page: node.into_node()?,
            })),
            _ => Ok(None),
        }
    }

    async fn live_children(&self, parent_id: i32) -> Result<Vec<PageNode>> {
        page::Entity::find()
            .filter(page::Column::ParentId.eq(parent_id))
            .filter(page::Column::Live.eq(true))
            .order_by_desc(page::Column::FirstPublishedAt)
            .order_by_desc(page::Column::Id)
            .all(&*self.db)
            .await
            .map_err(db_err)?
            .into_iter()
            .map(page::Model::into_node)
            .collect()
    }

    async fn save_node(&self, node: &PageNode) -> Result<()> {
        update_node(&*self.db, node).await
    }

    async fn delete(&self, id: i32) -> Result<bool> {
        let result = page::Entity::delete_by_id(id)
            .exec(&*self.db)
            .await
            .map_err(db_err)?;
        Ok(result.rows_affected > 0)
    }
}
