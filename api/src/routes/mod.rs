pub mod blog;
pub mod dashboard;
pub mod villa;

use actix_web::{
    HttpResponse, Responder, ResponseError, body::BoxBody,
    dev::HttpServiceFactory, get, web,
};

use crate::{store::StoreError, telemetry::log_error};

pub fn api_services() -> impl HttpServiceFactory {
    web::scope("/api")
        .service(health_check)
        .service(blog::list_blog_posts)
        .service(blog::create_blog_post)
        .service(blog::get_blog_post)
        .service(blog::update_blog_post)
        .service(blog::set_blog_post_published)
        .service(blog::delete_blog_post)
        .service(villa::list_villas)
        .service(villa::create_villa)
        .service(villa::get_villa)
        .service(villa::update_villa)
        .service(villa::delete_villa)
        .service(dashboard::list_bookings)
        .service(dashboard::list_experiences)
        .service(dashboard::dashboard_stats)
}

#[get("/health_check")]
pub async fn health_check() -> impl Responder {
    HttpResponse::Ok().body("healthy")
}

#[derive(Debug, thiserror::Error)]
pub enum APIError {
    #[error("Bad request")]
    BadRequest(#[source] anyhow::Error),
    #[error("Not found")]
    NotFound(#[source] anyhow::Error),
    /// The table behind a collection has not been created.
    #[error("Not provisioned")]
    MissingCollection(#[source] anyhow::Error),
    #[error("Something went wrong")]
    UnexpectedError(#[from] anyhow::Error),
}

impl ResponseError for APIError {
    fn error_response(&self) -> HttpResponse<BoxBody> {
        match self {
            Self::BadRequest(e) => {
                HttpResponse::BadRequest().body(format!("{self}: {e}"))
            }
            Self::NotFound(e) => {
                HttpResponse::NotFound().body(format!("{self}: {e}"))
            }
            Self::MissingCollection(e) => {
                HttpResponse::ServiceUnavailable().body(format!("{self}: {e}"))
            }
            Self::UnexpectedError(e) => {
                log_error(e);
                HttpResponse::InternalServerError().body(self.to_string())
            }
        }
    }
}

impl From<StoreError> for APIError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::VillaNotFound => APIError::NotFound(e.into()),
            StoreError::BlogPostNotFound => APIError::NotFound(e.into()),
            StoreError::MissingCollection(_) => {
                APIError::MissingCollection(e.into())
            }
            StoreError::Database(_) => APIError::UnexpectedError(e.into()),
            StoreError::UnexpectedError(_) => {
                APIError::UnexpectedError(e.into())
            }
            _ => APIError::BadRequest(e.into()),
        }
    }
}
