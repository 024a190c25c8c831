use sea_orm::entity::prelude::*;

/// 文章图库条目，按sort_order排序
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "blog_page_gallery_image")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub page_id: i32,
    pub image_id: i32,
    pub caption: Option<String>,
    pub sort_order: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::blog_page::Entity",
        from = "Column::PageId",
        to = "super::blog_page::Column::PageId",
        on_delete = "Cascade"
    )]
    BlogPage,
    #[sea_orm(
        belongs_to = "super::image::Entity",
        from = "Column::ImageId",
        to = "super::image::Column::Id",
        on_delete = "Cascade"
    )]
    Image,
}

impl Related<super::blog_page::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BlogPage.def()
    }
}

impl Related<super::image::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Image.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for folio_domain::BlogPageGalleryImage {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            image_id: model.image_id,
            caption: model.caption,
            sort_order: model.sort_order,
        }
    }
}
