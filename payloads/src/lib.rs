pub mod api_client;
pub mod forms;
pub mod requests;
pub mod responses;

use std::collections::BTreeMap;

use derive_more::{Display, FromStr};
#[cfg(feature = "use-sqlx")]
use jiff_sqlx::Timestamp as SqlxTs;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub use api_client::{APIClient, ClientError};

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Display,
    FromStr,
    Serialize,
    Deserialize,
)]
#[cfg_attr(feature = "use-sqlx", derive(sqlx::Type, sqlx::FromRow))]
#[cfg_attr(feature = "use-sqlx", sqlx(transparent))]
pub struct VillaId(pub Uuid);

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Display,
    FromStr,
    Serialize,
    Deserialize,
)]
#[cfg_attr(feature = "use-sqlx", derive(sqlx::Type, sqlx::FromRow))]
#[cfg_attr(feature = "use-sqlx", sqlx(transparent))]
pub struct BlogPostId(pub Uuid);

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize,
)]
#[cfg_attr(feature = "use-sqlx", derive(sqlx::Type, sqlx::FromRow))]
#[cfg_attr(feature = "use-sqlx", sqlx(transparent))]
pub struct BookingId(pub Uuid);

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize,
)]
#[cfg_attr(feature = "use-sqlx", derive(sqlx::Type, sqlx::FromRow))]
#[cfg_attr(feature = "use-sqlx", sqlx(transparent))]
pub struct ExperienceId(pub Uuid);

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize,
)]
pub struct AdminUserId(pub Uuid);

/// Nullable timestamp column, for use with `#[sqlx(try_from = ...)]`.
#[cfg(feature = "use-sqlx")]
#[derive(sqlx::Type)]
#[sqlx(transparent)]
pub struct OptionalTimestamp(Option<SqlxTs>);

#[cfg(feature = "use-sqlx")]
impl From<OptionalTimestamp> for Option<jiff::Timestamp> {
    fn from(x: OptionalTimestamp) -> Option<jiff::Timestamp> {
        x.0.map(|x| x.to_jiff())
    }
}

/// House rules are always stored with a villa, unlike the other nested
/// structures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HouseRules {
    /// Time of day, as produced by a time input (e.g. "14:00").
    pub check_in: String,
    pub check_out: String,
    /// Free text range, e.g. "22:00 - 07:00".
    pub quiet_hours: String,
    pub parties: bool,
    pub smoking: bool,
    pub pets: bool,
    pub max_guests: i32,
}

impl Default for HouseRules {
    fn default() -> Self {
        Self {
            check_in: "14:00".into(),
            check_out: "11:00".into(),
            quiet_hours: "22:00 - 07:00".into(),
            parties: false,
            smoking: false,
            pets: false,
            max_guests: 4,
        }
    }
}

/// Amenity items grouped by category name. A category is only ever stored
/// with at least one item.
pub type AmenitiesDetail = BTreeMap<String, Vec<String>>;

/// A nearby place and a human description of how far it is.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProximityItem {
    pub name: String,
    /// e.g. "15 min drive"
    pub distance: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SleepingItem {
    pub room: String,
    pub bed: String,
    pub view: String,
}

/// Villa details as submitted by the admin form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Villa {
    pub name: String,
    pub description: String,
    /// Nightly price in IDR.
    pub price_per_night: Decimal,
    pub bedrooms: i32,
    pub guests: i32,
    pub bathrooms: i32,
    pub levels: i32,
    pub pantry: i32,
    /// Areas in square meters.
    pub land_area: f64,
    pub building_area: f64,
    pub pool_area: f64,
    pub latitude: f64,
    pub longitude: f64,
    /// Main image.
    pub image_url: String,
    /// Gallery images, in display order.
    pub images: Vec<String>,
    pub features: Vec<String>,
    pub house_rules: HouseRules,
    pub amenities_detail: Option<AmenitiesDetail>,
    pub proximity_list: Option<Vec<ProximityItem>>,
    pub sleeping_arrangements: Option<Vec<SleepingItem>>,
}

impl Villa {
    /// Bring nested structures into their persisted shape: no empty amenity
    /// categories, no nameless proximity entries, no roomless sleeping
    /// entries, and `None` instead of an empty collection.
    pub fn normalize(&mut self) {
        self.images.retain(|url| !url.is_empty());

        let mut features: Vec<String> = Vec::with_capacity(self.features.len());
        for feature in self.features.drain(..) {
            let feature = feature.trim().to_string();
            if !feature.is_empty() && !features.contains(&feature) {
                features.push(feature);
            }
        }
        self.features = features;

        self.amenities_detail = self.amenities_detail.take().and_then(|mut a| {
            a.retain(|_, items| {
                items.retain(|item| !item.trim().is_empty());
                !items.is_empty()
            });
            (!a.is_empty()).then_some(a)
        });
        self.proximity_list = self
            .proximity_list
            .take()
            .and_then(forms::entries::retain_filled);
        self.sleeping_arrangements = self
            .sleeping_arrangements
            .take()
            .and_then(forms::entries::retain_filled);
    }
}

#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Display,
    Serialize,
    Deserialize,
)]
#[cfg_attr(feature = "use-sqlx", derive(sqlx::Type))]
#[cfg_attr(
    feature = "use-sqlx",
    sqlx(type_name = "blog_category", rename_all = "lowercase")
)]
pub enum BlogCategory {
    #[default]
    Travel,
    Culture,
    Wellness,
    Food,
    Design,
    Guide,
}

impl BlogCategory {
    pub const ALL: [BlogCategory; 6] = [
        Self::Travel,
        Self::Culture,
        Self::Wellness,
        Self::Food,
        Self::Design,
        Self::Guide,
    ];

    /// Parse the display name used in the category select.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.to_string() == name)
    }
}

/// Blog post details as submitted by the admin form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlogPost {
    pub title: String,
    pub slug: String,
    pub excerpt: String,
    /// Markdown body.
    pub content: String,
    pub category: BlogCategory,
    pub author: String,
    pub image_url: Option<String>,
    pub is_published: bool,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Display, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "use-sqlx", derive(sqlx::Type))]
#[cfg_attr(
    feature = "use-sqlx",
    sqlx(type_name = "booking_status", rename_all = "snake_case")
)]
pub enum BookingStatus {
    Pending,
    Confirmed,
    Cancelled,
    Completed,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Display, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum AdminRole {
    Admin,
    SuperAdmin,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminUser {
    pub id: AdminUserId,
    pub email: String,
    pub role: AdminRole,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_nested_structures_are_null_on_the_wire() {
        let villa = Villa {
            name: "Villa Kecil".into(),
            description: String::new(),
            price_per_night: Decimal::new(950000, 0),
            bedrooms: 1,
            guests: 2,
            bathrooms: 1,
            levels: 1,
            pantry: 0,
            land_area: 0.0,
            building_area: 0.0,
            pool_area: 0.0,
            latitude: -8.5,
            longitude: 115.2,
            image_url: String::new(),
            images: Vec::new(),
            features: Vec::new(),
            house_rules: HouseRules::default(),
            amenities_detail: None,
            proximity_list: None,
            sleeping_arrangements: None,
        };
        let json = serde_json::to_value(&villa).unwrap();
        assert!(json["amenities_detail"].is_null());
        assert!(json["proximity_list"].is_null());
        assert!(json["sleeping_arrangements"].is_null());
        assert_eq!(json["house_rules"]["check_in"], "14:00");
    }

    #[test]
    fn booking_status_uses_snake_case() {
        assert_eq!(
            serde_json::to_string(&BookingStatus::Confirmed).unwrap(),
            "\"confirmed\""
        );
        let status: BookingStatus =
            serde_json::from_str("\"cancelled\"").unwrap();
        assert_eq!(status, BookingStatus::Cancelled);
    }
}
