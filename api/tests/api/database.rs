//! Behavior when the store is not fully provisioned.
//!
//! Though api::store defines its own level of API interface, most tests are
//! at the http route level.

use api::store::{self, StoreError};
use payloads::forms::listing::load_error_message;
use test_helpers::{assert_missing_collection, blog_post_a, spawn_app};

#[tokio::test]
async fn missing_blog_table_is_reported() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.drop_table("blog_posts").await?;

    let result = app.client.list_blog_posts().await;
    let message = load_error_message(
        "Blog posts",
        result.as_ref().err().expect("listing should fail"),
    );
    assert_eq!(
        message,
        "Blog posts table does not exist. Please run migration."
    );
    assert_missing_collection(result);
    assert_missing_collection(app.client.create_blog_post(&blog_post_a()).await);

    // other collections are unaffected
    assert!(app.client.list_villas().await?.is_empty());

    Ok(())
}

#[tokio::test]
async fn missing_villa_table_is_reported() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.drop_table("villas").await?;

    assert_missing_collection(app.client.list_villas().await);
    assert_missing_collection(app.client.dashboard_stats().await);

    Ok(())
}

#[tokio::test]
async fn store_maps_missing_table() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.drop_table("experiences").await?;

    let result = store::list_experiences(&app.db_pool).await;
    assert!(matches!(result, Err(StoreError::MissingCollection(_))));

    Ok(())
}
