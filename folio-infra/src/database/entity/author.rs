use sea_orm::entity::prelude::*;

/// 作者片段，头像图片删除时置空
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "author")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub author_image_id: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::image::Entity",
        from = "Column::AuthorImageId",
        to = "super::image::Column::Id",
        on_delete = "SetNull"
    )]
    AuthorImage,
}

impl Related<super::image::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AuthorImage.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for folio_domain::Author {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            author_image: model.author_image_id,
        }
    }
}
