use jiff_sqlx::ToSqlx;
use rust_decimal::Decimal;
use sqlx::{FromRow, PgPool};

use payloads::responses::{self, Booking, Experience};

use super::StoreError;
use crate::time::TimeSource;

/// All bookings, newest first.
pub async fn list_bookings(pool: &PgPool) -> Result<Vec<Booking>, StoreError> {
    let bookings = sqlx::query_as::<_, Booking>(
        "SELECT * FROM bookings ORDER BY created_at DESC",
    )
    .fetch_all(pool)
    .await?;
    Ok(bookings)
}

/// All experiences, newest first.
pub async fn list_experiences(
    pool: &PgPool,
) -> Result<Vec<Experience>, StoreError> {
    let experiences = sqlx::query_as::<_, Experience>(
        "SELECT * FROM experiences ORDER BY created_at DESC",
    )
    .fetch_all(pool)
    .await?;
    Ok(experiences)
}

#[derive(Debug, Clone, FromRow)]
struct BookingTotals {
    total_revenue: Decimal,
    total_bookings: i64,
    active_guests: i64,
    occupied_villas: i64,
}

/// Headline numbers as of the time source's current business day.
///
/// A booking is in progress from its start date up to, but not including,
/// its end date.
pub async fn dashboard_stats(
    pool: &PgPool,
    time_source: &TimeSource,
) -> Result<responses::DashboardStats, StoreError> {
    let today = time_source.today().to_sqlx();
    let totals = sqlx::query_as::<_, BookingTotals>(
        "SELECT
            COALESCE(
                SUM(total_price) FILTER (
                    WHERE status IN ('confirmed', 'completed')
                ),
                0
            ) AS total_revenue,
            COUNT(*) AS total_bookings,
            COUNT(*) FILTER (
                WHERE status = 'confirmed'
                AND start_date <= $1 AND end_date > $1
            ) AS active_guests,
            COUNT(DISTINCT villa_id) FILTER (
                WHERE status = 'confirmed'
                AND start_date <= $1 AND end_date > $1
            ) AS occupied_villas
        FROM bookings",
    )
    .bind(today)
    .fetch_one(pool)
    .await?;

    let villa_count =
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM villas")
            .fetch_one(pool)
            .await?;

    Ok(responses::DashboardStats {
        total_revenue: totals.total_revenue,
        total_bookings: totals.total_bookings,
        occupancy_rate: occupancy_rate(totals.occupied_villas, villa_count),
        active_guests: totals.active_guests,
    })
}

/// Percentage of villas occupied, 0 when there are no villas.
fn occupancy_rate(occupied: i64, villas: i64) -> f64 {
    if villas == 0 {
        return 0.0;
    }
    occupied as f64 / villas as f64 * 100.0
}

#[cfg(test)]
mod tests {
    use super::occupancy_rate;

    #[test]
    fn occupancy() {
        assert_eq!(occupancy_rate(0, 0), 0.0);
        assert_eq!(occupancy_rate(1, 4), 25.0);
        assert_eq!(occupancy_rate(3, 3), 100.0);
    }
}
