//! Development server for the villa admin UI
//!
//! This binary creates a persistent API server seeded with villas, blog
//! posts, bookings and experiences. Records are created with mocked time so
//! list ordering is predictable, then the clock follows real time.
//!
//! Usage: cargo run -p dev-server

use anyhow::Result;
use jiff::Timestamp;
use std::time::Duration;
use test_helpers::mock::DevDataset;
use tokio::time::interval;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    let _ = dotenvy::dotenv();

    let subscriber = api::telemetry::get_subscriber("info".into());
    api::telemetry::init_subscriber(subscriber)?;

    info!("🚀 Starting villa admin development server");

    let app = test_helpers::spawn_app().await;

    info!("✅ API server running on http://127.0.0.1:{}", app.port);

    info!("📊 Setting up development data...");
    let dataset = DevDataset::create(&app).await?;

    start_time_sync_task(&app);
    info!("✅ Time sync active - mock time will follow real time");

    info!("🎯 Development server ready!");
    info!("   API: http://127.0.0.1:{}", app.port);
    info!(
        "   UI:  cd ui && BACKEND_URL=http://127.0.0.1:{} trunk serve",
        app.port
    );
    info!("");
    dataset.print_summary();
    info!("");
    info!("👋 Press Ctrl+C to shutdown");

    tokio::signal::ctrl_c().await?;
    info!("🛑 Shutting down development server");
    Ok(())
}

/// Keep the mocked time source in step with real time once seeding is done.
fn start_time_sync_task(app: &test_helpers::TestApp) {
    let time_source = app.time_source.clone();

    tokio::spawn(async move {
        let mut interval = interval(Duration::from_secs(1));
        loop {
            interval.tick().await;
            time_source.set(Timestamp::now());
        }
    });
}
