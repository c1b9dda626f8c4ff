use actix_web::{HttpResponse, get, post, web};
use sqlx::PgPool;

use crate::{store, time::TimeSource};

use super::APIError;

#[tracing::instrument(skip(pool), ret)]
#[get("/villas")]
pub async fn list_villas(
    pool: web::Data<PgPool>,
) -> Result<HttpResponse, APIError> {
    let villas = store::list_villas(&pool).await?;
    Ok(HttpResponse::Ok().json(villas))
}

#[tracing::instrument(skip(pool, time_source), ret)]
#[post("/create_villa")]
pub async fn create_villa(
    details: web::Json<payloads::Villa>,
    pool: web::Data<PgPool>,
    time_source: web::Data<TimeSource>,
) -> Result<HttpResponse, APIError> {
    let villa = store::create_villa(&details, &pool, &time_source).await?;
    Ok(HttpResponse::Ok().json(villa.id))
}

#[tracing::instrument(skip(pool), ret)]
#[post("/get_villa")]
pub async fn get_villa(
    villa_id: web::Json<payloads::VillaId>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse, APIError> {
    let villa = store::get_villa(&villa_id, &pool).await?;
    Ok(HttpResponse::Ok().json(villa))
}

#[tracing::instrument(skip(pool, time_source), ret)]
#[post("/update_villa")]
pub async fn update_villa(
    details: web::Json<payloads::requests::UpdateVilla>,
    pool: web::Data<PgPool>,
    time_source: web::Data<TimeSource>,
) -> Result<HttpResponse, APIError> {
    let villa = store::update_villa(&details, &pool, &time_source).await?;
    Ok(HttpResponse::Ok().json(villa))
}

#[tracing::instrument(skip(pool), ret)]
#[post("/delete_villa")]
pub async fn delete_villa(
    villa_id: web::Json<payloads::VillaId>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse, APIError> {
    store::delete_villa(&villa_id, &pool).await?;
    Ok(HttpResponse::Ok().finish())
}
