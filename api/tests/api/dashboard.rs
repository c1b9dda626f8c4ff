use jiff::ToSpan;
use payloads::BookingStatus;
use rust_decimal::{Decimal, dec};
use test_helpers::{BookingSeed, spawn_app};

fn booking(
    app: &test_helpers::TestApp,
    start: i32,
    end: i32,
    status: BookingStatus,
    total_price: Decimal,
) -> anyhow::Result<BookingSeed> {
    let today = app.time_source.today();
    Ok(BookingSeed {
        start_date: today.checked_add(start.days())?,
        end_date: today.checked_add(end.days())?,
        total_price,
        status,
        guest_name: "Komang Ayu".into(),
        special_request: None,
    })
}

#[tokio::test]
async fn stats_with_no_data() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let stats = app.client.dashboard_stats().await?;
    assert_eq!(stats.total_revenue, Decimal::ZERO);
    assert_eq!(stats.total_bookings, 0);
    assert_eq!(stats.active_guests, 0);
    assert_eq!(stats.occupancy_rate, 0.0);

    Ok(())
}

#[tokio::test]
async fn stats_count_revenue_and_current_stays() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let villa_a = app.create_test_villa().await?;
    let details_b = payloads::Villa {
        name: "Villa Dua".into(),
        ..test_helpers::villa_details_a()
    };
    app.client.create_villa(&details_b).await?;

    let seeds = [
        // in progress today
        booking(&app, -1, 2, BookingStatus::Confirmed, dec!(300))?,
        // checks out today
        booking(&app, -3, 0, BookingStatus::Confirmed, dec!(200))?,
        booking(&app, -10, -5, BookingStatus::Completed, dec!(500))?,
        booking(&app, 0, 3, BookingStatus::Pending, dec!(700))?,
        booking(&app, 0, 3, BookingStatus::Cancelled, dec!(900))?,
    ];
    for seed in &seeds {
        app.insert_booking(&villa_a.villa_id, seed).await?;
    }

    let stats = app.client.dashboard_stats().await?;
    assert_eq!(stats.total_revenue, dec!(1000));
    assert_eq!(stats.total_bookings, 5);
    assert_eq!(stats.active_guests, 1);
    assert_eq!(stats.occupancy_rate, 50.0);

    Ok(())
}

#[tokio::test]
async fn bookings_and_experiences_are_listed_newest_first()
-> anyhow::Result<()> {
    let app = spawn_app().await;
    let villa = app.create_test_villa().await?;

    let first = booking(&app, 1, 3, BookingStatus::Pending, dec!(100))?;
    app.insert_booking(&villa.villa_id, &first).await?;
    app.time_source.advance(1.hour());
    let second = booking(&app, 5, 6, BookingStatus::Confirmed, dec!(50))?;
    app.insert_booking(&villa.villa_id, &second).await?;

    let bookings = app.client.list_bookings().await?;
    assert_eq!(bookings.len(), 2);
    assert_eq!(bookings[0].start_date, second.start_date);
    assert_eq!(bookings[0].status, BookingStatus::Confirmed);
    assert_eq!(bookings[1].total_price, dec!(100));

    app.insert_experience("Rice terrace walk", "Two hours").await?;
    app.time_source.advance(1.hour());
    app.insert_experience("Batik workshop", "Half day").await?;
    let titles: Vec<_> = app
        .client
        .list_experiences()
        .await?
        .into_iter()
        .map(|e| e.title)
        .collect();
    assert_eq!(titles, vec!["Batik workshop", "Rice terrace walk"]);

    Ok(())
}

#[tokio::test]
async fn deleting_a_villa_removes_its_bookings() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let villa = app.create_test_villa().await?;
    let seed = booking(&app, 0, 2, BookingStatus::Confirmed, dec!(10))?;
    app.insert_booking(&villa.villa_id, &seed).await?;

    app.client.delete_villa(&villa.villa_id).await?;
    assert!(app.client.list_bookings().await?.is_empty());

    Ok(())
}
