use jiff::Timestamp;
use jiff_sqlx::{Timestamp as SqlxTs, ToSqlx};
use rust_decimal::Decimal;
use sqlx::{FromRow, PgPool, types::Json};

use payloads::{
    AmenitiesDetail, HouseRules, ProximityItem, SleepingItem, VillaId,
    responses,
};

use super::{StoreError, or_not_found};
use crate::time::TimeSource;

/// A complete villa row.
#[derive(Debug, Clone, FromRow)]
pub struct Villa {
    pub id: VillaId,
    pub name: String,
    pub description: String,
    pub price_per_night: Decimal,
    pub bedrooms: i32,
    pub guests: i32,
    pub bathrooms: i32,
    pub levels: i32,
    pub pantry: i32,
    pub land_area: f64,
    pub building_area: f64,
    pub pool_area: f64,
    pub latitude: f64,
    pub longitude: f64,
    pub image_url: String,
    pub images: Vec<String>,
    pub features: Vec<String>,
    pub house_rules: Json<HouseRules>,
    pub amenities_detail: Option<Json<AmenitiesDetail>>,
    pub proximity_list: Option<Json<Vec<ProximityItem>>>,
    pub sleeping_arrangements: Option<Json<Vec<SleepingItem>>>,
    #[sqlx(try_from = "SqlxTs")]
    pub created_at: Timestamp,
    #[sqlx(try_from = "SqlxTs")]
    pub updated_at: Timestamp,
}

impl From<Villa> for payloads::Villa {
    fn from(villa: Villa) -> Self {
        Self {
            name: villa.name,
            description: villa.description,
            price_per_night: villa.price_per_night,
            bedrooms: villa.bedrooms,
            guests: villa.guests,
            bathrooms: villa.bathrooms,
            levels: villa.levels,
            pantry: villa.pantry,
            land_area: villa.land_area,
            building_area: villa.building_area,
            pool_area: villa.pool_area,
            latitude: villa.latitude,
            longitude: villa.longitude,
            image_url: villa.image_url,
            images: villa.images,
            features: villa.features,
            house_rules: villa.house_rules.0,
            amenities_detail: villa.amenities_detail.map(|j| j.0),
            proximity_list: villa.proximity_list.map(|j| j.0),
            sleeping_arrangements: villa.sleeping_arrangements.map(|j| j.0),
        }
    }
}

impl From<Villa> for responses::Villa {
    fn from(villa: Villa) -> Self {
        Self {
            villa_id: villa.id,
            created_at: villa.created_at,
            updated_at: villa.updated_at,
            villa_details: villa.into(),
        }
    }
}

/// Normalize and validate submitted details before they are written.
fn prepare(details: &payloads::Villa) -> Result<payloads::Villa, StoreError> {
    let mut details = details.clone();
    details.normalize();
    details.validate()?;
    Ok(details)
}

pub async fn create_villa(
    details: &payloads::Villa,
    pool: &PgPool,
    time_source: &TimeSource,
) -> Result<Villa, StoreError> {
    let details = prepare(details)?;
    let villa = sqlx::query_as::<_, Villa>(
        "INSERT INTO villas (
            name,
            description,
            price_per_night,
            bedrooms,
            guests,
            bathrooms,
            levels,
            pantry,
            land_area,
            building_area,
            pool_area,
            latitude,
            longitude,
            image_url,
            images,
            features,
            house_rules,
            amenities_detail,
            proximity_list,
            sleeping_arrangements,
            created_at,
            updated_at
        ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13,
            $14, $15, $16, $17, $18, $19, $20, $21, $21) RETURNING *",
    )
    .bind(&details.name)
    .bind(&details.description)
    .bind(details.price_per_night)
    .bind(details.bedrooms)
    .bind(details.guests)
    .bind(details.bathrooms)
    .bind(details.levels)
    .bind(details.pantry)
    .bind(details.land_area)
    .bind(details.building_area)
    .bind(details.pool_area)
    .bind(details.latitude)
    .bind(details.longitude)
    .bind(&details.image_url)
    .bind(&details.images)
    .bind(&details.features)
    .bind(Json(&details.house_rules))
    .bind(details.amenities_detail.as_ref().map(Json))
    .bind(details.proximity_list.as_ref().map(Json))
    .bind(details.sleeping_arrangements.as_ref().map(Json))
    .bind(time_source.now().to_sqlx())
    .fetch_one(pool)
    .await?;
    Ok(villa)
}

/// All villas, newest first.
pub async fn list_villas(
    pool: &PgPool,
) -> Result<Vec<responses::Villa>, StoreError> {
    let villas = sqlx::query_as::<_, Villa>(
        "SELECT * FROM villas ORDER BY created_at DESC",
    )
    .fetch_all(pool)
    .await?;
    Ok(villas.into_iter().map(Into::into).collect())
}

pub async fn get_villa(
    villa_id: &VillaId,
    pool: &PgPool,
) -> Result<responses::Villa, StoreError> {
    let villa = sqlx::query_as::<_, Villa>("SELECT * FROM villas WHERE id = $1")
        .bind(villa_id)
        .fetch_one(pool)
        .await
        .map_err(or_not_found(StoreError::VillaNotFound))?;
    Ok(villa.into())
}

/// Replace every field of a villa. Last write wins.
pub async fn update_villa(
    update: &payloads::requests::UpdateVilla,
    pool: &PgPool,
    time_source: &TimeSource,
) -> Result<responses::Villa, StoreError> {
    let details = prepare(&update.villa_details)?;
    let villa = sqlx::query_as::<_, Villa>(
        "UPDATE villas SET
            name = $1,
            description = $2,
            price_per_night = $3,
            bedrooms = $4,
            guests = $5,
            bathrooms = $6,
            levels = $7,
            pantry = $8,
            land_area = $9,
            building_area = $10,
            pool_area = $11,
            latitude = $12,
            longitude = $13,
            image_url = $14,
            images = $15,
            features = $16,
            house_rules = $17,
            amenities_detail = $18,
            proximity_list = $19,
            sleeping_arrangements = $20,
            updated_at = $21
        WHERE id = $22
        RETURNING *",
    )
    .bind(&details.name)
    .bind(&details.description)
    .bind(details.price_per_night)
    .bind(details.bedrooms)
    .bind(details.guests)
    .bind(details.bathrooms)
    .bind(details.levels)
    .bind(details.pantry)
    .bind(details.land_area)
    .bind(details.building_area)
    .bind(details.pool_area)
    .bind(details.latitude)
    .bind(details.longitude)
    .bind(&details.image_url)
    .bind(&details.images)
    .bind(&details.features)
    .bind(Json(&details.house_rules))
    .bind(details.amenities_detail.as_ref().map(Json))
    .bind(details.proximity_list.as_ref().map(Json))
    .bind(details.sleeping_arrangements.as_ref().map(Json))
    .bind(time_source.now().to_sqlx())
    .bind(update.villa_id)
    .fetch_one(pool)
    .await
    .map_err(or_not_found(StoreError::VillaNotFound))?;
    Ok(villa.into())
}

/// Immediate and irreversible; bookings for the villa go with it.
pub async fn delete_villa(
    villa_id: &VillaId,
    pool: &PgPool,
) -> Result<(), StoreError> {
    let result = sqlx::query("DELETE FROM villas WHERE id = $1")
        .bind(villa_id)
        .execute(pool)
        .await?;
    if result.rows_affected() == 0 {
        return Err(StoreError::VillaNotFound);
    }
    Ok(())
}
