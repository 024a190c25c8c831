use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "blog_page")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub page_id: i32,
    pub date: Date,
    pub intro: String,
    /// 正文块的JSON数组
    #[sea_orm(column_type = "Text")]
    pub body: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::page::Entity",
        from = "Column::PageId",
        to = "super::page::Column::Id",
        on_delete = "Cascade"
    )]
    Page,
    #[sea_orm(has_many = "super::blog_page_tag::Entity")]
    Tags,
    #[sea_orm(has_many = "super::blog_page_gallery_image::Entity")]
    GalleryImages,
}

impl Related<super::page::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Page.def()
    }
}

impl Related<super::blog_page_tag::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Tags.def()
    }
}

impl Related<super::blog_page_gallery_image::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::GalleryImages.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
