use super::db_err;
use super::page::{insert_node, update_node};
use crate::database::entity::{
    blog_page, blog_page_author, blog_page_gallery_image, blog_page_tag, page, tag,
};
use async_trait::async_trait;
use folio_api::{ContentError, Result};
use folio_domain::{BlogPage, BlogPageGalleryImage, PageNode, Tag};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait, JoinType,
    QueryFilter, QueryOrder, QuerySelect, RelationTrait, Set, TransactionTrait, Unchanged,
};
use std::collections::HashMap;
use std::sync::Arc;

/// BlogPageRepository 博客文章及其标签、作者、图库的数据访问
#[async_trait]
pub trait BlogPageRepository: Send + Sync {
    async fn insert(&self, page: BlogPage) -> Result<BlogPage>;
    async fn update(&self, page: BlogPage) -> Result<BlogPage>;
    async fn find(&self, id: i32) -> Result<Option<BlogPage>>;
    /// 按给定ID顺序返回，不存在的ID被忽略
    async fn find_many(&self, ids: &[i32]) -> Result<Vec<BlogPage>>;
    /// 全站中带有该标签名的文章，按主键排序
    async fn find_by_tag(&self, tag_name: &str) -> Result<Vec<BlogPage>>;
}

/// SeaOrmBlogPageRepository 使用Sea-ORM实现的Repository
pub struct SeaOrmBlogPageRepository {
    db: Arc<DatabaseConnection>,
}

impl SeaOrmBlogPageRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    async fn fetch(&self, id: i32) -> Result<BlogPage> {
        load(&*self.db, &[id])
            .await?
            .pop()
            .ok_or_else(|| ContentError::not_found("blog page", id))
    }
}

async fn get_or_create_tag<C: ConnectionTrait>(db: &C, name: &str) -> Result<tag::Model> {
    let existing = tag::Entity::find()
        .filter(tag::Column::Name.eq(name))
        .one(db)
        .await
        .map_err(db_err)?;
    if let Some(model) = existing {
        return Ok(model);
    }

    let new_tag = Tag::new(name);
    tag::ActiveModel {
        id: sea_orm::NotSet,
        name: Set(new_tag.name),
        slug: Set(new_tag.slug),
    }
    .insert(db)
    .await
    .map_err(db_err)
}

/// 重写文章的标签、作者和图库关联
async fn write_relations<C: ConnectionTrait>(db: &C, page: &BlogPage) -> Result<()> {
    let page_id = page.page.id;

    blog_page_tag::Entity::delete_many()
        .filter(blog_page_tag::Column::ContentObjectId.eq(page_id))
        .exec(db)
        .await
        .map_err(db_err)?;
    let mut tag_rows = Vec::new();
    for name in page.tag_names() {
        let tag = get_or_create_tag(db, name).await?;
        tag_rows.push(blog_page_tag::ActiveModel {
            id: sea_orm::NotSet,
            content_object_id: Set(page_id),
            tag_id: Set(tag.id),
        });
    }
    if !tag_rows.is_empty() {
        blog_page_tag::Entity::insert_many(tag_rows)
            .exec_without_returning(db)
            .await
            .map_err(db_err)?;
    }

    blog_page_author::Entity::delete_many()
        .filter(blog_page_author::Column::BlogPageId.eq(page_id))
        .exec(db)
        .await
        .map_err(db_err)?;
    let author_rows: Vec<_> = page
        .author_ids()
        .into_iter()
        .enumerate()
        .map(|(position, author_id)| blog_page_author::ActiveModel {
            blog_page_id: Set(page_id),
            author_id: Set(author_id),
            sort_order: Set(position as i32),
        })
        .collect();
    if !author_rows.is_empty() {
        blog_page_author::Entity::insert_many(author_rows)
            .exec_without_returning(db)
            .await
            .map_err(db_err)?;
    }

    blog_page_gallery_image::Entity::delete_many()
        .filter(blog_page_gallery_image::Column::PageId.eq(page_id))
        .exec(db)
        .await
        .map_err(db_err)?;
    let gallery_rows: Vec<_> = page
        .gallery_images
        .iter()
        .map(|item| blog_page_gallery_image::ActiveModel {
            id: sea_orm::NotSet,
            page_id: Set(page_id),
            image_id: Set(item.image_id),
            caption: Set(item.caption.clone()),
            sort_order: Set(item.sort_order),
        })
        .collect();
    if !gallery_rows.is_empty() {
        blog_page_gallery_image::Entity::insert_many(gallery_rows)
            .exec_without_returning(db)
            .await
            .map_err(db_err)?;
    }

    Ok(())
}

/// 批量加载文章，结果按 `ids` 的顺序排列
async fn load<C: ConnectionTrait>(db: &C, ids: &[i32]) -> Result<Vec<BlogPage>> {
    if ids.is_empty() {
        return Ok(Vec::new());
    }

    let mut nodes: HashMap<i32, PageNode> = HashMap::new();
    for model in page::Entity::find()
        .filter(page::Column::Id.is_in(ids.iter().copied()))
        .all(db)
        .await
        .map_err(db_err)?
    {
        nodes.insert(model.id, model.into_node()?);
    }

    let mut rows: HashMap<i32, blog_page::Model> = blog_page::Entity::find()
        .filter(blog_page::Column::PageId.is_in(ids.iter().copied()))
        .all(db)
        .await
        .map_err(db_err)?
        .into_iter()
        .map(|row| (row.page_id, row))
        .collect();

    let mut tags: HashMap<i32, Vec<String>> = HashMap::new();
    for (link, tag) in blog_page_tag::Entity::find()
        .find_also_related(tag::Entity)
        .filter(blog_page_tag::Column::ContentObjectId.is_in(ids.iter().copied()))
        .order_by_asc(blog_page_tag::Column::Id)
        .all(db)
        .await
        .map_err(db_err)?
    {
        if let Some(tag) = tag {
            tags.entry(link.content_object_id).or_default().push(tag.name);
        }
    }

    let mut authors: HashMap<i32, Vec<i32>> = HashMap::new();
    for link in blog_page_author::Entity::find()
        .filter(blog_page_author::Column::BlogPageId.is_in(ids.iter().copied()))
        .order_by_asc(blog_page_author::Column::SortOrder)
        .all(db)
        .await
        .map_err(db_err)?
    {
        authors.entry(link.blog_page_id).or_default().push(link.author_id);
    }

    let mut gallery: HashMap<i32, Vec<BlogPageGalleryImage>> = HashMap::new();
    for item in blog_page_gallery_image::Entity::find()
        .filter(blog_page_gallery_image::Column::PageId.is_in(ids.iter().copied()))
        .order_by_asc(blog_page_gallery_image::Column::SortOrder)
        .order_by_asc(blog_page_gallery_image::Column::Id)
        .all(db)
        .await
        .map_err(db_err)?
    {
        gallery.entry(item.page_id).or_default().push(item.into());
    }

    let mut pages = Vec::with_capacity(ids.len());
    for id in ids {
        let (Some(node), Some(row)) = (nodes.remove(id), rows.remove(id)) else {
            continue;
        };
        pages.push(BlogPage {
            page: node,
            date: row.date,
            intro: row.intro,
            body: serde_json::from_str(&row.body)?,
            tags: tags.remove(id).unwrap_or_default(),
            authors: authors.remove(id).unwrap_or_default(),
            gallery_images: gallery.remove(id).unwrap_or_default(),
        });
    }
    Ok(pages)
}

#[async_trait]
impl BlogPageRepository for SeaOrmBlogPageRepository {
    async fn insert(&self, mut page: BlogPage) -> Result<BlogPage> {
        let txn = self.db.begin().await.map_err(db_err)?;
        page.page = insert_node(&txn, &page.page).await?;

        blog_page::ActiveModel {
            page_id: Set(page.page.id),
            date: Set(page.date),
            intro: Set(page.intro.clone()),
            body: Set(serde_json::to_string(&page.body)?),
        }
        .insert(&txn)
        .await
        .map_err(db_err)?;

        write_relations(&txn, &page).await?;
        txn.commit().await.map_err(db_err)?;

        tracing::debug!(page_id = page.page.id, "Inserted blog page");
        self.fetch(page.page.id).await
    }

    async fn update(&self, page: BlogPage) -> Result<BlogPage> {
        let id = page.page.id;
        let txn = self.db.begin().await.map_err(db_err)?;
        update_node(&txn, &page.page).await?;

        blog_page::ActiveModel {
            page_id: Unchanged(id),
            date: Set(page.date),
            intro: Set(page.intro.clone()),
            body: Set(serde_json::to_string(&page.body)?),
        }
        .update(&txn)
        .await
        .map_err(db_err)?;

        write_relations(&txn, &page).await?;
        txn.commit().await.map_err(db_err)?;

        tracing::debug!(page_id = id, "Updated blog page");
        self.fetch(id).await
    }

    async fn find(&self, id: i32) -> Result<Option<BlogPage>> {
        Ok(load(&*self.db, &[id]).await?.pop())
    }

    async fn find_many(&self, ids: &[i32]) -> Result<Vec<BlogPage>> {
        load(&*self.db, ids).await
    }

    async fn find_by_tag(&self, tag_name: &str) -> Result<Vec<BlogPage>> {
        let mut ids: Vec<i32> = blog_page_tag::Entity::find()
            .select_only()
            .column(blog_page_tag::Column::ContentObjectId)
            .join(JoinType::InnerJoin, blog_page_tag::Relation::Tag.def())
            .filter(tag::Column::Name.eq(tag_name))
            .order_by_asc(blog_page_tag::Column::ContentObjectId)
            .into_tuple()
            .all(&*self.db)
            .await
            .map_err(db_err)?;
        ids.dedup();

        load(&*self.db, &ids).await
    }
}
