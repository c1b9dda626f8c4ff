use jiff::Span;
use payloads::requests::{SetPublished, UpdateBlogPost};
use reqwest::StatusCode;
use test_helpers::{
    assert_status_code, blog_post_a, blog_post_b, spawn_app,
    unknown_blog_post_id,
};

#[tokio::test]
async fn create_read_update_delete_blog_post() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let post = app.create_test_blog_post().await?;
    assert_eq!(post.published_at, None);

    let req = UpdateBlogPost {
        blog_post_id: post.blog_post_id,
        post_details: payloads::BlogPost {
            title: "Hidden Waterfalls of North Bali".into(),
            slug: "hidden-waterfalls-of-north-bali".into(),
            ..blog_post_a()
        },
    };
    let updated = app.client.update_blog_post(&req).await?;
    assert_eq!(updated.post_details, req.post_details);

    let posts = app.client.list_blog_posts().await?;
    assert_eq!(posts.len(), 1);
    assert_eq!(posts[0].post_details.slug, "hidden-waterfalls-of-north-bali");

    app.client.delete_blog_post(&post.blog_post_id).await?;
    assert!(
        app.client
            .get_blog_post(&post.blog_post_id)
            .await
            .unwrap_err()
            .to_string()
            .contains("Blog post not found")
    );

    Ok(())
}

#[tokio::test]
async fn posts_are_listed_newest_first() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.create_blog_post(&blog_post_a()).await?;
    app.time_source.advance(Span::new().minutes(1));
    app.create_blog_post(&blog_post_b()).await?;

    let titles: Vec<_> = app
        .client
        .list_blog_posts()
        .await?
        .into_iter()
        .map(|p| p.post_details.title)
        .collect();
    assert_eq!(
        titles,
        vec!["A Morning at the Ubud Market", "Hidden Waterfalls of Bali"]
    );

    Ok(())
}

#[tokio::test]
async fn published_at_is_set_on_create_when_published() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let post = app.create_blog_post(&blog_post_b()).await?;
    assert!(post.is_published());
    assert_eq!(post.published_at, Some(app.time_source.now()));

    Ok(())
}

#[tokio::test]
async fn published_at_is_set_once() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let post = app.create_test_blog_post().await?;
    let id = post.blog_post_id;

    app.time_source.advance(Span::new().hours(1));
    let first_published_at = app.time_source.now();
    let published = app
        .client
        .set_blog_post_published(&SetPublished {
            blog_post_id: id,
            is_published: true,
        })
        .await?;
    assert!(published.is_published());
    assert_eq!(published.published_at, Some(first_published_at));
    // the rest of the post is untouched
    assert_eq!(published.post_details.title, post.post_details.title);

    // unpublishing keeps the timestamp
    app.time_source.advance(Span::new().hours(1));
    let unpublished = app
        .client
        .set_blog_post_published(&SetPublished {
            blog_post_id: id,
            is_published: false,
        })
        .await?;
    assert!(!unpublished.is_published());
    assert_eq!(unpublished.published_at, Some(first_published_at));

    // republishing through a full update does not recompute it
    app.time_source.advance(Span::new().hours(1));
    let republished = app
        .client
        .update_blog_post(&UpdateBlogPost {
            blog_post_id: id,
            post_details: payloads::BlogPost {
                is_published: true,
                ..blog_post_a()
            },
        })
        .await?;
    assert_eq!(republished.published_at, Some(first_published_at));
    assert_eq!(republished.updated_at, app.time_source.now());

    Ok(())
}

#[tokio::test]
async fn title_and_slug_are_required() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let no_title = payloads::BlogPost {
        title: String::new(),
        ..blog_post_a()
    };
    assert_status_code(
        app.client.create_blog_post(&no_title).await,
        StatusCode::BAD_REQUEST,
    );

    let no_slug = payloads::BlogPost {
        slug: " ".into(),
        ..blog_post_a()
    };
    assert_status_code(
        app.client.create_blog_post(&no_slug).await,
        StatusCode::BAD_REQUEST,
    );

    assert!(app.client.list_blog_posts().await?.is_empty());
    Ok(())
}

#[tokio::test]
async fn duplicate_slug_is_rejected() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.create_test_blog_post().await?;

    let duplicate = payloads::BlogPost {
        title: "Another title".into(),
        ..blog_post_a()
    };
    let result = app.client.create_blog_post(&duplicate).await;
    assert!(
        result
            .as_ref()
            .unwrap_err()
            .to_string()
            .contains("slug already exists")
    );
    assert_status_code(result, StatusCode::BAD_REQUEST);

    Ok(())
}

#[tokio::test]
async fn missing_posts_are_not_found() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let id = unknown_blog_post_id();

    assert_status_code(
        app.client.delete_blog_post(&id).await,
        StatusCode::NOT_FOUND,
    );
    assert_status_code(
        app.client
            .set_blog_post_published(&SetPublished {
                blog_post_id: id,
                is_published: true,
            })
            .await,
        StatusCode::NOT_FOUND,
    );

    Ok(())
}
