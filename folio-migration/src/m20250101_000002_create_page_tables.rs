use sea_orm_migration::prelude::*;

pub struct Migration;

impl MigrationName for Migration {
    fn name(&self) -> &str {
        "m20250101_000002_create_page_tables"
    }
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Page::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Page::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Page::ParentId).integer().null())
                    .col(ColumnDef::new(Page::Title).string_len(255).not_null())
                    .col(ColumnDef::new(Page::Slug).string_len(255).not_null())
                    .col(ColumnDef::new(Page::ContentType).string_len(100).not_null())
                    .col(ColumnDef::new(Page::Live).boolean().not_null().default(false))
                    .col(ColumnDef::new(Page::FirstPublishedAt).timestamp_with_time_zone().null())
                    .col(ColumnDef::new(Page::LastPublishedAt).timestamp_with_time_zone().null())
                    // 删除父页面时删除整棵子树
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-page-parent_id")
                            .from(Page::Table, Page::ParentId)
                            .to(Page::Table, Page::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx-page-parent_id-slug")
                    .table(Page::Table)
                    .col(Page::ParentId)
                    .col(Page::Slug)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(BlogIndexPage::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(BlogIndexPage::PageId)
                            .integer()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(BlogIndexPage::Intro).text().null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-blog_index_page-page_id")
                            .from(BlogIndexPage::Table, BlogIndexPage::PageId)
                            .to(Page::Table, Page::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(BlogTagIndexPage::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(BlogTagIndexPage::PageId)
                            .integer()
                            .not_null()
                            .primary_key(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-blog_tag_index_page-page_id")
                            .from(BlogTagIndexPage::Table, BlogTagIndexPage::PageId)
                            .to(Page::Table, Page::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(BlogTagIndexPage::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(BlogIndexPage::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Page::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Page {
    Table,
    Id,
    ParentId,
    Title,
    Slug,
    ContentType,
    Live,
    FirstPublishedAt,
    LastPublishedAt,
}

#[derive(DeriveIden)]
enum BlogIndexPage {
    Table,
    PageId,
    Intro,
}

#[derive(DeriveIden)]
enum BlogTagIndexPage {
    Table,
    PageId,
}
