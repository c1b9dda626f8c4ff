use actix_web::{HttpResponse, get, post, web};
use sqlx::PgPool;

use crate::{store, time::TimeSource};

use super::APIError;

#[tracing::instrument(skip(pool), ret)]
#[get("/blog_posts")]
pub async fn list_blog_posts(
    pool: web::Data<PgPool>,
) -> Result<HttpResponse, APIError> {
    let posts = store::list_blog_posts(&pool).await?;
    Ok(HttpResponse::Ok().json(posts))
}

#[tracing::instrument(skip(pool, time_source), ret)]
#[post("/create_blog_post")]
pub async fn create_blog_post(
    details: web::Json<payloads::BlogPost>,
    pool: web::Data<PgPool>,
    time_source: web::Data<TimeSource>,
) -> Result<HttpResponse, APIError> {
    let post = store::create_blog_post(&details, &pool, &time_source).await?;
    Ok(HttpResponse::Ok().json(post.id))
}

#[tracing::instrument(skip(pool), ret)]
#[post("/get_blog_post")]
pub async fn get_blog_post(
    blog_post_id: web::Json<payloads::BlogPostId>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse, APIError> {
    let post = store::get_blog_post(&blog_post_id, &pool).await?;
    Ok(HttpResponse::Ok().json(post))
}

#[tracing::instrument(skip(pool, time_source), ret)]
#[post("/update_blog_post")]
pub async fn update_blog_post(
    details: web::Json<payloads::requests::UpdateBlogPost>,
    pool: web::Data<PgPool>,
    time_source: web::Data<TimeSource>,
) -> Result<HttpResponse, APIError> {
    let post = store::update_blog_post(&details, &pool, &time_source).await?;
    Ok(HttpResponse::Ok().json(post))
}

#[tracing::instrument(skip(pool, time_source), ret)]
#[post("/set_blog_post_published")]
pub async fn set_blog_post_published(
    details: web::Json<payloads::requests::SetPublished>,
    pool: web::Data<PgPool>,
    time_source: web::Data<TimeSource>,
) -> Result<HttpResponse, APIError> {
    let post =
        store::set_blog_post_published(&details, &pool, &time_source).await?;
    Ok(HttpResponse::Ok().json(post))
}

#[tracing::instrument(skip(pool), ret)]
#[post("/delete_blog_post")]
pub async fn delete_blog_post(
    blog_post_id: web::Json<payloads::BlogPostId>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse, APIError> {
    store::delete_blog_post(&blog_post_id, &pool).await?;
    Ok(HttpResponse::Ok().finish())
}
