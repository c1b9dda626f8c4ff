use jiff::Timestamp;
use jiff_sqlx::{Timestamp as SqlxTs, ToSqlx};
use sqlx::{FromRow, PgPool};

use payloads::{BlogCategory, BlogPostId, OptionalTimestamp, requests, responses};

use super::{StoreError, or_not_found};
use crate::time::TimeSource;

#[derive(Debug, Clone, FromRow)]
pub struct BlogPost {
    pub id: BlogPostId,
    pub title: String,
    pub slug: String,
    pub excerpt: String,
    pub content: String,
    pub category: BlogCategory,
    pub author: String,
    pub image_url: Option<String>,
    pub is_published: bool,
    #[sqlx(try_from = "OptionalTimestamp")]
    pub published_at: Option<Timestamp>,
    #[sqlx(try_from = "SqlxTs")]
    pub created_at: Timestamp,
    #[sqlx(try_from = "SqlxTs")]
    pub updated_at: Timestamp,
}

impl From<BlogPost> for responses::BlogPost {
    fn from(post: BlogPost) -> Self {
        Self {
            blog_post_id: post.id,
            post_details: payloads::BlogPost {
                title: post.title,
                slug: post.slug,
                excerpt: post.excerpt,
                content: post.content,
                category: post.category,
                author: post.author,
                image_url: post.image_url,
                is_published: post.is_published,
            },
            published_at: post.published_at,
            created_at: post.created_at,
            updated_at: post.updated_at,
        }
    }
}

/// The slug is the only unique column.
fn slug_conflict(e: StoreError) -> StoreError {
    match e {
        StoreError::NotUnique(_) => StoreError::SlugNotUnique,
        e => e,
    }
}

/// `published_at` is only set when the post is first published.
pub async fn create_blog_post(
    details: &payloads::BlogPost,
    pool: &PgPool,
    time_source: &TimeSource,
) -> Result<BlogPost, StoreError> {
    details.validate()?;
    let post = sqlx::query_as::<_, BlogPost>(
        "INSERT INTO blog_posts (
            title,
            slug,
            excerpt,
            content,
            category,
            author,
            image_url,
            is_published,
            published_at,
            created_at,
            updated_at
        ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8,
            CASE WHEN $8 THEN $9 ELSE NULL END, $9, $9)
        RETURNING *",
    )
    .bind(&details.title)
    .bind(&details.slug)
    .bind(&details.excerpt)
    .bind(&details.content)
    .bind(details.category)
    .bind(&details.author)
    .bind(&details.image_url)
    .bind(details.is_published)
    .bind(time_source.now().to_sqlx())
    .fetch_one(pool)
    .await
    .map_err(|e| slug_conflict(e.into()))?;
    Ok(post)
}

/// All posts, newest first.
pub async fn list_blog_posts(
    pool: &PgPool,
) -> Result<Vec<responses::BlogPost>, StoreError> {
    let posts = sqlx::query_as::<_, BlogPost>(
        "SELECT * FROM blog_posts ORDER BY created_at DESC",
    )
    .fetch_all(pool)
    .await?;
    Ok(posts.into_iter().map(Into::into).collect())
}

pub async fn get_blog_post(
    blog_post_id: &BlogPostId,
    pool: &PgPool,
) -> Result<responses::BlogPost, StoreError> {
    let post =
        sqlx::query_as::<_, BlogPost>("SELECT * FROM blog_posts WHERE id = $1")
            .bind(blog_post_id)
            .fetch_one(pool)
            .await
            .map_err(or_not_found(StoreError::BlogPostNotFound))?;
    Ok(post.into())
}

pub async fn update_blog_post(
    update: &requests::UpdateBlogPost,
    pool: &PgPool,
    time_source: &TimeSource,
) -> Result<responses::BlogPost, StoreError> {
    let details = &update.post_details;
    details.validate()?;
    let post = sqlx::query_as::<_, BlogPost>(
        "UPDATE blog_posts SET
            title = $1,
            slug = $2,
            excerpt = $3,
            content = $4,
            category = $5,
            author = $6,
            image_url = $7,
            is_published = $8,
            published_at = CASE
                WHEN $8 AND published_at IS NULL THEN $9
                ELSE published_at
            END,
            updated_at = $9
        WHERE id = $10
        RETURNING *",
    )
    .bind(&details.title)
    .bind(&details.slug)
    .bind(&details.excerpt)
    .bind(&details.content)
    .bind(details.category)
    .bind(&details.author)
    .bind(&details.image_url)
    .bind(details.is_published)
    .bind(time_source.now().to_sqlx())
    .bind(update.blog_post_id)
    .fetch_one(pool)
    .await
    .map_err(|e| slug_conflict(or_not_found(StoreError::BlogPostNotFound)(e)))?;
    Ok(post.into())
}

/// Flip only the publish flag, leaving the rest of the post untouched.
pub async fn set_blog_post_published(
    request: &requests::SetPublished,
    pool: &PgPool,
    time_source: &TimeSource,
) -> Result<responses::BlogPost, StoreError> {
    let post = sqlx::query_as::<_, BlogPost>(
        "UPDATE blog_posts SET
            is_published = $1,
            published_at = CASE
                WHEN $1 AND published_at IS NULL THEN $2
                ELSE published_at
            END,
            updated_at = $2
        WHERE id = $3
        RETURNING *",
    )
    .bind(request.is_published)
    .bind(time_source.now().to_sqlx())
    .bind(request.blog_post_id)
    .fetch_one(pool)
    .await
    .map_err(or_not_found(StoreError::BlogPostNotFound))?;
    Ok(post.into())
}

pub async fn delete_blog_post(
    blog_post_id: &BlogPostId,
    pool: &PgPool,
) -> Result<(), StoreError> {
    let result = sqlx::query("DELETE FROM blog_posts WHERE id = $1")
        .bind(blog_post_id)
        .execute(pool)
        .await?;
    if result.rows_affected() == 0 {
        return Err(StoreError::BlogPostNotFound);
    }
    Ok(())
}
