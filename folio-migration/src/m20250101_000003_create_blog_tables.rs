use sea_orm_migration::prelude::*;

pub struct Migration;

impl MigrationName for Migration {
    fn name(&self) -> &str {
        "m20250101_000003_create_blog_tables"
    }
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(BlogPage::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(BlogPage::PageId)
                            .integer()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(BlogPage::Date).date().not_null())
                    .col(ColumnDef::new(BlogPage::Intro).string_len(250).not_null())
                    .col(ColumnDef::new(BlogPage::Body).text().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-blog_page-page_id")
                            .from(BlogPage::Table, BlogPage::PageId)
                            .to(Page::Table, Page::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Tag::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Tag::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Tag::Name).string_len(100).not_null().unique_key())
                    .col(ColumnDef::new(Tag::Slug).string_len(100).not_null())
                    .to_owned(),
            )
            .await?;

        // 文章删除时标签关联随之删除，标签本身保留
        manager
            .create_table(
                Table::create()
                    .table(BlogPageTag::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(BlogPageTag::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(BlogPageTag::ContentObjectId).integer().not_null())
                    .col(ColumnDef::new(BlogPageTag::TagId).integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-blog_page_tag-content_object_id")
                            .from(BlogPageTag::Table, BlogPageTag::ContentObjectId)
                            .to(BlogPage::Table, BlogPage::PageId)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-blog_page_tag-tag_id")
                            .from(BlogPageTag::Table, BlogPageTag::TagId)
                            .to(Tag::Table, Tag::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx-blog_page_tag-content_object_id-tag_id")
                    .table(BlogPageTag::Table)
                    .col(BlogPageTag::ContentObjectId)
                    .col(BlogPageTag::TagId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // 头像图片删除时只置空引用
        manager
            .create_table(
                Table::create()
                    .table(Author::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Author::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Author::Name).string_len(255).not_null())
                    .col(ColumnDef::new(Author::AuthorImageId).integer().null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-author-author_image_id")
                            .from(Author::Table, Author::AuthorImageId)
                            .to(Image::Table, Image::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(BlogPageAuthor::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(BlogPageAuthor::BlogPageId).integer().not_null())
                    .col(ColumnDef::new(BlogPageAuthor::AuthorId).integer().not_null())
                    .col(ColumnDef::new(BlogPageAuthor::SortOrder).integer().not_null().default(0))
                    .primary_key(
                        Index::create()
                            .col(BlogPageAuthor::BlogPageId)
                            .col(BlogPageAuthor::AuthorId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-blog_page_author-blog_page_id")
                            .from(BlogPageAuthor::Table, BlogPageAuthor::BlogPageId)
                            .to(BlogPage::Table, BlogPage::PageId)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-blog_page_author-author_id")
                            .from(BlogPageAuthor::Table, BlogPageAuthor::AuthorId)
                            .to(Author::Table, Author::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 图库条目随文章或图片一起删除
        manager
            .create_table(
                Table::create()
                    .table(BlogPageGalleryImage::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(BlogPageGalleryImage::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(BlogPageGalleryImage::PageId).integer().not_null())
                    .col(ColumnDef::new(BlogPageGalleryImage::ImageId).integer().not_null())
                    .col(ColumnDef::new(BlogPageGalleryImage::Caption).string_len(250).null())
                    .col(ColumnDef::new(BlogPageGalleryImage::SortOrder).integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-blog_page_gallery_image-page_id")
                            .from(BlogPageGalleryImage::Table, BlogPageGalleryImage::PageId)
                            .to(BlogPage::Table, BlogPage::PageId)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-blog_page_gallery_image-image_id")
                            .from(BlogPageGalleryImage::Table, BlogPageGalleryImage::ImageId)
                            .to(Image::Table, Image::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(BlogPageGalleryImage::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(BlogPageAuthor::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Author::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(BlogPageTag::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Tag::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(BlogPage::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Page {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Image {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum BlogPage {
    Table,
    PageId,
    Date,
    Intro,
    Body,
}

#[derive(DeriveIden)]
enum Tag {
    Table,
    Id,
    Name,
    Slug,
}

#[derive(DeriveIden)]
enum BlogPageTag {
    Table,
    Id,
    ContentObjectId,
    TagId,
}

#[derive(DeriveIden)]
enum Author {
    Table,
    Id,
    Name,
    AuthorImageId,
}

#[derive(DeriveIden)]
enum BlogPageAuthor {
    Table,
    BlogPageId,
    AuthorId,
    SortOrder,
}

#[derive(DeriveIden)]
enum BlogPageGalleryImage {
    Table,
    Id,
    PageId,
    ImageId,
    Caption,
    SortOrder,
}
