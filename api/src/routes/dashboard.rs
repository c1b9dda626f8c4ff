use actix_web::{HttpResponse, get, web};
use sqlx::PgPool;

use crate::{store, time::TimeSource};

use super::APIError;

#[tracing::instrument(skip(pool), ret)]
#[get("/bookings")]
pub async fn list_bookings(
    pool: web::Data<PgPool>,
) -> Result<HttpResponse, APIError> {
    let bookings = store::list_bookings(&pool).await?;
    Ok(HttpResponse::Ok().json(bookings))
}

#[tracing::instrument(skip(pool), ret)]
#[get("/experiences")]
pub async fn list_experiences(
    pool: web::Data<PgPool>,
) -> Result<HttpResponse, APIError> {
    let experiences = store::list_experiences(&pool).await?;
    Ok(HttpResponse::Ok().json(experiences))
}

#[tracing::instrument(skip(pool, time_source), ret)]
#[get("/dashboard_stats")]
pub async fn dashboard_stats(
    pool: web::Data<PgPool>,
    time_source: web::Data<TimeSource>,
) -> Result<HttpResponse, APIError> {
    let stats = store::dashboard_stats(&pool, &time_source).await?;
    Ok(HttpResponse::Ok().json(stats))
}
