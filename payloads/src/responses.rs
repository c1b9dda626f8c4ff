use jiff::{Timestamp, civil::Date};
#[cfg(feature = "use-sqlx")]
use jiff_sqlx::Timestamp as SqlxTs;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{BlogPostId, BookingId, BookingStatus, ExperienceId, VillaId};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Villa {
    pub villa_id: VillaId,
    pub villa_details: crate::Villa,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlogPost {
    pub blog_post_id: BlogPostId,
    pub post_details: crate::BlogPost,
    /// Set the first time the post is saved as published.
    pub published_at: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl BlogPost {
    pub fn is_published(&self) -> bool {
        self.post_details.is_published
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "use-sqlx", derive(sqlx::FromRow))]
pub struct Booking {
    pub id: BookingId,
    pub villa_id: VillaId,
    #[cfg_attr(feature = "use-sqlx", sqlx(try_from = "jiff_sqlx::Date"))]
    pub start_date: Date,
    #[cfg_attr(feature = "use-sqlx", sqlx(try_from = "jiff_sqlx::Date"))]
    pub end_date: Date,
    pub total_price: Decimal,
    pub status: BookingStatus,
    pub guest_name: String,
    pub guest_email: String,
    pub guest_whatsapp: String,
    pub special_request: Option<String>,
    #[cfg_attr(feature = "use-sqlx", sqlx(try_from = "SqlxTs"))]
    pub created_at: Timestamp,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "use-sqlx", derive(sqlx::FromRow))]
pub struct Experience {
    pub id: ExperienceId,
    pub title: String,
    pub description: String,
    pub image_url: String,
    #[cfg_attr(feature = "use-sqlx", sqlx(try_from = "SqlxTs"))]
    pub created_at: Timestamp,
}

/// Headline numbers for the dashboard overview.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardStats {
    /// Sum over confirmed and completed bookings.
    pub total_revenue: Decimal,
    pub total_bookings: i64,
    /// Percentage of villas occupied today, 0-100.
    pub occupancy_rate: f64,
    /// Confirmed bookings in progress today.
    pub active_guests: i64,
}
