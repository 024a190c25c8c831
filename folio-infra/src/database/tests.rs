//! 仓储层集成测试，使用迁移后的内存SQLite

#[cfg(test)]
mod integration_tests {
    use crate::database::entity::{blog_page, blog_page_gallery_image, blog_page_tag, page, tag};
    use crate::database::*;
    use chrono::{NaiveDate, TimeZone, Utc};
    use folio_api::{ContentModel, ListOptions};
    use folio_domain::{
        Author, Block, BlogIndexPage, BlogPage, BlogPageGalleryImage, BlogTagIndexPage, Image,
        PageNode,
    };
    use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter};

    struct Repos {
        manager: DatabaseManager,
        pages: SeaOrmPageRepository,
        blog_pages: SeaOrmBlogPageRepository,
        authors: SeaOrmAuthorRepository,
        images: SeaOrmImageRepository,
        tags: SeaOrmTagRepository,
    }

    async fn setup() -> Repos {
        let manager = DatabaseManager::in_memory().await.unwrap();
        manager.migrate().await.unwrap();
        let db = manager.primary_db();
        Repos {
            pages: SeaOrmPageRepository::new(db.clone()),
            blog_pages: SeaOrmBlogPageRepository::new(db.clone()),
            authors: SeaOrmAuthorRepository::new(db.clone()),
            images: SeaOrmImageRepository::new(db.clone()),
            tags: SeaOrmTagRepository::new(db),
            manager,
        }
    }

    async fn index_page(repos: &Repos) -> BlogIndexPage {
        let node = PageNode::draft(None, "Blog", None, BlogIndexPage::content_type());
        repos
            .pages
            .insert_index_page(BlogIndexPage::new(node, Some("<p>Welcome</p>".to_string())))
            .await
            .unwrap()
    }

    fn blog_page(parent_id: i32, title: &str) -> BlogPage {
        BlogPage {
            page: PageNode::draft(Some(parent_id), title, None, BlogPage::content_type()),
            date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            intro: format!("About {}", title),
            body: vec![
                Block::Heading(title.to_string()),
                Block::Paragraph("<p>text</p>".to_string()),
            ],
            tags: vec![],
            authors: vec![],
            gallery_images: vec![],
        }
    }

    #[tokio::test]
    async fn test_insert_and_find_index_page() {
        let repos = setup().await;
        let index = index_page(&repos).await;
        assert!(index.page.id > 0);

        let found = repos.pages.find_index_page(index.page.id).await.unwrap().unwrap();
        assert_eq!(found.page.slug, "blog");
        assert_eq!(found.intro.as_deref(), Some("<p>Welcome</p>"));

        let node = repos.pages.find_child_by_slug(None, "blog").await.unwrap().unwrap();
        assert_eq!(node.id, index.page.id);
        assert!(repos.pages.find_tag_index_page(index.page.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_blog_page_round_trip() {
        let repos = setup().await;
        let index = index_page(&repos).await;
        let image = repos.images.insert(Image::new("cover", "cover.jpg")).await.unwrap();
        let author = repos.authors.insert(Author::new("Ada", None)).await.unwrap();

        let mut page = blog_page(index.page.id, "First");
        page.tags = vec!["rust".to_string(), "django".to_string()];
        page.authors = vec![author.id];
        page.gallery_images = vec![BlogPageGalleryImage::new(image.id, Some("cover".to_string()))];
        page.body.push(Block::Image(image.id));

        let saved = repos.blog_pages.insert(page).await.unwrap();
        let found = repos.blog_pages.find(saved.page.id).await.unwrap().unwrap();
        assert_eq!(found.tags, vec!["rust", "django"]);
        assert_eq!(found.authors, vec![author.id]);
        assert_eq!(found.gallery_images.len(), 1);
        assert_eq!(found.main_image(), Some(image.id));
        assert_eq!(found.body.len(), 3);
        assert_eq!(found.body[2], Block::Image(image.id));

        let tags = repos.tags.list().await.unwrap();
        let names: Vec<_> = tags.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["django", "rust"]);
    }

    #[tokio::test]
    async fn test_update_rewrites_relations() {
        let repos = setup().await;
        let index = index_page(&repos).await;
        let img1 = repos.images.insert(Image::new("one", "1.jpg")).await.unwrap();
        let img2 = repos.images.insert(Image::new("two", "2.jpg")).await.unwrap();

        let mut page = blog_page(index.page.id, "Post");
        page.tags = vec!["a".to_string()];
        page.gallery_images = vec![BlogPageGalleryImage::new(img1.id, None)];
        let mut saved = repos.blog_pages.insert(page).await.unwrap();

        saved.tags = vec!["b".to_string()];
        saved.gallery_images = vec![
            BlogPageGalleryImage::new(img2.id, None),
            BlogPageGalleryImage::new(img1.id, None),
        ];
        saved.renumber_gallery();
        saved.intro = "Changed".to_string();
        let updated = repos.blog_pages.update(saved).await.unwrap();

        assert_eq!(updated.intro, "Changed");
        assert_eq!(updated.tags, vec!["b"]);
        assert_eq!(updated.main_image(), Some(img2.id));
        // 旧标签仍然存在，只是不再关联
        assert!(repos.tags.find_by_name("a").await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_live_children_ordered_by_first_published_desc() {
        let repos = setup().await;
        let index = index_page(&repos).await;
        let t1 = Utc.with_ymd_and_hms(2024, 1, 1, 8, 0, 0).unwrap();
        let t2 = Utc.with_ymd_and_hms(2024, 2, 1, 8, 0, 0).unwrap();

        let draft = repos.blog_pages.insert(blog_page(index.page.id, "A")).await.unwrap();
        let mut b = repos.blog_pages.insert(blog_page(index.page.id, "B")).await.unwrap();
        let mut c = repos.blog_pages.insert(blog_page(index.page.id, "C")).await.unwrap();
        b.page.publish(t1);
        c.page.publish(t2);
        repos.pages.save_node(&b.page).await.unwrap();
        repos.pages.save_node(&c.page).await.unwrap();

        let children = repos.pages.live_children(index.page.id).await.unwrap();
        let ids: Vec<_> = children.iter().map(|n| n.id).collect();
        assert_eq!(ids, vec![c.page.id, b.page.id]);
        assert!(!ids.contains(&draft.page.id));
    }

    #[tokio::test]
    async fn test_find_by_tag() {
        let repos = setup().await;
        let index = index_page(&repos).await;

        let mut tagged = blog_page(index.page.id, "Tagged");
        tagged.tags = vec!["django".to_string()];
        let tagged = repos.blog_pages.insert(tagged).await.unwrap();
        let mut other = blog_page(index.page.id, "Other");
        other.tags = vec!["rust".to_string()];
        repos.blog_pages.insert(other).await.unwrap();

        let found = repos.blog_pages.find_by_tag("django").await.unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].page.id, tagged.page.id);

        assert!(repos.blog_pages.find_by_tag("Django").await.unwrap().is_empty());
        assert!(repos.blog_pages.find_by_tag("missing").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_delete_image_nulls_author_and_drops_gallery() {
        let repos = setup().await;
        let index = index_page(&repos).await;
        let image = repos.images.insert(Image::new("avatar", "a.jpg")).await.unwrap();
        let author = repos.authors.insert(Author::new("Ada", Some(image.id))).await.unwrap();

        let mut page = blog_page(index.page.id, "Post");
        page.gallery_images = vec![BlogPageGalleryImage::new(image.id, None)];
        let page = repos.blog_pages.insert(page).await.unwrap();

        assert!(repos.images.delete(image.id).await.unwrap());

        let author = repos.authors.find(author.id).await.unwrap().unwrap();
        assert_eq!(author.name, "Ada");
        assert_eq!(author.author_image, None);

        let page = repos.blog_pages.find(page.page.id).await.unwrap().unwrap();
        assert!(page.gallery_images.is_empty());
        assert_eq!(page.main_image(), None);
    }

    #[tokio::test]
    async fn test_gallery_rows_relate_to_owning_page() {
        let repos = setup().await;
        let index = index_page(&repos).await;
        let img1 = repos.images.insert(Image::new("one", "1.jpg")).await.unwrap();
        let img2 = repos.images.insert(Image::new("two", "2.jpg")).await.unwrap();

        let mut post = blog_page(index.page.id, "Gallery");
        post.gallery_images = vec![
            BlogPageGalleryImage::new(img1.id, None),
            BlogPageGalleryImage::new(img2.id, None),
        ];
        post.renumber_gallery();
        let saved = repos.blog_pages.insert(post).await.unwrap();

        let db = repos.manager.primary_db();
        let rows = blog_page_gallery_image::Entity::find()
            .find_also_related(blog_page::Entity)
            .all(&*db)
            .await
            .unwrap();
        assert_eq!(rows.len(), 2);
        for (_, owner) in &rows {
            assert_eq!(owner.as_ref().map(|p| p.page_id), Some(saved.page.id));
        }

        let with_gallery = blog_page::Entity::find_by_id(saved.page.id)
            .find_with_related(blog_page_gallery_image::Entity)
            .all(&*db)
            .await
            .unwrap();
        assert_eq!(with_gallery.len(), 1);
        assert_eq!(with_gallery[0].1.len(), 2);

        let node = page::Entity::find_by_id(saved.page.id)
            .one(&*db)
            .await
            .unwrap()
            .unwrap()
            .into_node()
            .unwrap();
        assert_eq!(node.slug, "gallery");
        assert_eq!(node.content_type, BlogPage::content_type());
    }

    #[tokio::test]
    async fn test_delete_blog_page_cascades_relations() {
        let repos = setup().await;
        let index = index_page(&repos).await;
        let image = repos.images.insert(Image::new("img", "i.jpg")).await.unwrap();

        let mut page = blog_page(index.page.id, "Doomed");
        page.tags = vec!["rust".to_string()];
        page.gallery_images = vec![BlogPageGalleryImage::new(image.id, None)];
        let page = repos.blog_pages.insert(page).await.unwrap();

        assert!(repos.pages.delete(page.page.id).await.unwrap());
        assert!(!repos.pages.delete(page.page.id).await.unwrap());

        let db = repos.manager.primary_db();
        let tag_links = blog_page_tag::Entity::find()
            .filter(blog_page_tag::Column::ContentObjectId.eq(page.page.id))
            .count(&*db)
            .await
            .unwrap();
        let gallery = blog_page_gallery_image::Entity::find()
            .filter(blog_page_gallery_image::Column::PageId.eq(page.page.id))
            .count(&*db)
            .await
            .unwrap();
        assert_eq!(tag_links, 0);
        assert_eq!(gallery, 0);

        // 标签和图片本身不受影响
        assert_eq!(tag::Entity::find().count(&*db).await.unwrap(), 1);
        assert!(repos.images.find(image.id).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_delete_index_removes_subtree() {
        let repos = setup().await;
        let index = index_page(&repos).await;
        let page = repos.blog_pages.insert(blog_page(index.page.id, "Child")).await.unwrap();

        assert!(repos.pages.delete(index.page.id).await.unwrap());
        assert!(repos.pages.find_node(page.page.id).await.unwrap().is_none());
        assert!(repos.blog_pages.find(page.page.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_tag_index_page_and_missing_images() {
        let repos = setup().await;
        let node = PageNode::draft(None, "Tags", None, BlogTagIndexPage::content_type());
        let tags = repos
            .pages
            .insert_tag_index_page(BlogTagIndexPage { page: node })
            .await
            .unwrap();
        assert!(repos.pages.find_tag_index_page(tags.page.id).await.unwrap().is_some());

        let image = repos.images.insert(Image::new("img", "i.jpg")).await.unwrap();
        let missing = repos.images.missing(&[image.id, 999, 999]).await.unwrap();
        assert_eq!(missing, vec![999]);
    }

    #[tokio::test]
    async fn test_author_list_and_find_many() {
        let repos = setup().await;
        let bob = repos.authors.insert(Author::new("Bob", None)).await.unwrap();
        let ada = repos.authors.insert(Author::new("Ada", None)).await.unwrap();

        let listed = repos.authors.list(ListOptions::default()).await.unwrap();
        assert_eq!(listed.total, 2);
        assert_eq!(listed.items[0].name, "Ada");

        let many = repos.authors.find_many(&[bob.id, 42, ada.id]).await.unwrap();
        let names: Vec<_> = many.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, vec!["Bob", "Ada"]);

        assert!(repos.authors.delete(bob.id).await.unwrap());
        assert!(repos.authors.find(bob.id).await.unwrap().is_none());
    }
}
