use folio_api::Result as ContentResult;
use folio_domain::PageNode;
use sea_orm::entity::prelude::*;

/// 页面树节点
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "page")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub parent_id: Option<i32>,
    pub title: String,
    pub slug: String,
    /// `app_label.Model` 形式的内容类型
    pub content_type: String,
    pub live: bool,
    pub first_published_at: Option<DateTimeUtc>,
    pub last_published_at: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "Entity",
        from = "Column::ParentId",
        to = "Column::Id",
        on_delete = "Cascade"
    )]
    Parent,
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_node(self) -> ContentResult<PageNode> {
        Ok(PageNode {
            id: self.id,
            parent_id: self.parent_id,
            title: self.title,
            slug: self.slug,
            content_type: self.content_type.parse()?,
            live: self.live,
            first_published_at: self.first_published_at,
            last_published_at: self.last_published_at,
        })
    }
}
