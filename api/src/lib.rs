pub mod routes;
pub mod store;
pub mod telemetry;
pub mod time;

use actix_cors::Cors;
use actix_web::dev::Server;
use actix_web::{App, HttpServer, web};
use anyhow::Context;
use sqlx::PgPool;
use std::net::TcpListener;

use crate::time::TimeSource;

/// Build the server, but not await it.
///
/// Returns the port that the server has bound to by modifying the config.
pub async fn build(
    config: &mut Config,
    time_source: TimeSource,
) -> std::io::Result<Server> {
    let db_pool = PgPool::connect(&config.database_url)
        .await
        .map_err(std::io::Error::other)?;
    let db_pool = web::Data::new(db_pool);
    let time_source = web::Data::new(time_source);

    let allowed_origins = config.allowed_origins.clone();

    // OS assigns the port if binding to 0
    let listener = TcpListener::bind(format!("{}:{}", config.ip, config.port))?;
    config.port = listener.local_addr()?.port();
    tracing::info!(ip = %config.ip, port = config.port, "listening");
    let server = HttpServer::new(move || {
        App::new()
            .wrap(cors(&allowed_origins))
            .service(routes::api_services())
            .app_data(db_pool.clone())
            .app_data(time_source.clone())
    })
    .listen(listener)?
    .run();
    Ok(server)
}

fn cors(allowed_origins: &[String]) -> Cors {
    let cors = Cors::default().allow_any_method().allow_any_header();
    if allowed_origins.iter().any(|origin| origin == "*") {
        return cors.allow_any_origin();
    }
    allowed_origins
        .iter()
        .fold(cors, |cors, origin| cors.allowed_origin(origin))
}

pub struct Config {
    pub database_url: String,
    /// set to "0.0.0.0" for public access, "127.0.0.1" for local dev
    pub ip: String,
    /// set to 0 to get an os-assigned port
    pub port: u16,
    /// List of allowed CORS origins. Use "*" to allow any origin (development only)
    pub allowed_origins: Vec<String>,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        use std::env::var;

        let allowed_origins = parse_origins(
            &var("ALLOWED_ORIGINS").unwrap_or_else(|_| "*".to_string()),
        );
        let port = var("PORT").context("PORT must be set")?;

        Ok(Config {
            database_url: var("DATABASE_URL")
                .context("DATABASE_URL must be set")?,
            ip: var("IP_ADDRESS").context("IP_ADDRESS must be set")?,
            port: port
                .parse()
                .with_context(|| format!("invalid PORT {port:?}"))?,
            allowed_origins,
        })
    }
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::parse_origins;

    #[test]
    fn origins_are_trimmed_and_blank_entries_dropped() {
        assert_eq!(
            parse_origins("https://admin.example.com, ,http://localhost:8080"),
            vec!["https://admin.example.com", "http://localhost:8080"]
        );
        assert_eq!(parse_origins("*"), vec!["*"]);
    }
}
