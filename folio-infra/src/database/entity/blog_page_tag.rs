use sea_orm::entity::prelude::*;

/// 文章与标签的关联，文章删除时级联删除
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "blog_page_tag")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub content_object_id: i32,
    pub tag_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::blog_page::Entity",
        from = "Column::ContentObjectId",
        to = "super::blog_page::Column::PageId",
        on_delete = "Cascade"
    )]
    BlogPage,
    #[sea_orm(
        belongs_to = "super::tag::Entity",
        from = "Column::TagId",
        to = "super::tag::Column::Id",
        on_delete = "Cascade"
    )]
    Tag,
}

impl Related<super::blog_page::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BlogPage.def()
    }
}

impl Related<super::tag::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Tag.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
