use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "tag")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub name: String,
    pub slug: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::blog_page_tag::Entity")]
    BlogPageTags,
}

impl Related<super::blog_page_tag::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BlogPageTags.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for folio_domain::Tag {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            slug: model.slug,
        }
    }
}
