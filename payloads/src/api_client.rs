use crate::{BlogPost, BlogPostId, Villa, VillaId, requests, responses};
use reqwest::StatusCode;
use serde::Serialize;

type ReqwestResult = Result<reqwest::Response, reqwest::Error>;

/// An API client for interfacing with the backend.
pub struct APIClient {
    pub address: String,
    pub inner_client: reqwest::Client,
}

/// Helper methods for http actions
impl APIClient {
    fn format_url(&self, path: &str) -> String {
        format!("{}/api/{path}", &self.address)
    }

    async fn post(&self, path: &str, body: &impl Serialize) -> ReqwestResult {
        let request = self.inner_client.post(self.format_url(path)).json(body);

        #[cfg(target_arch = "wasm32")]
        let request = request.fetch_credentials_include();

        request.send().await
    }

    async fn empty_get(&self, path: &str) -> ReqwestResult {
        let request = self.inner_client.get(self.format_url(path));

        #[cfg(target_arch = "wasm32")]
        let request = request.fetch_credentials_include();

        request.send().await
    }
}

/// Methods on the backend API
impl APIClient {
    pub async fn health_check(&self) -> Result<(), ClientError> {
        let response = self.empty_get("health_check").await?;
        ok_empty(response).await
    }

    /// All blog posts, newest first.
    pub async fn list_blog_posts(
        &self,
    ) -> Result<Vec<responses::BlogPost>, ClientError> {
        let response = self.empty_get("blog_posts").await?;
        ok_body(response).await
    }

    pub async fn create_blog_post(
        &self,
        details: &BlogPost,
    ) -> Result<BlogPostId, ClientError> {
        let response = self.post("create_blog_post", details).await?;
        ok_body(response).await
    }

    pub async fn get_blog_post(
        &self,
        blog_post_id: &BlogPostId,
    ) -> Result<responses::BlogPost, ClientError> {
        let response = self.post("get_blog_post", blog_post_id).await?;
        ok_body(response).await
    }

    pub async fn update_blog_post(
        &self,
        details: &requests::UpdateBlogPost,
    ) -> Result<responses::BlogPost, ClientError> {
        let response = self.post("update_blog_post", details).await?;
        ok_body(response).await
    }

    pub async fn set_blog_post_published(
        &self,
        details: &requests::SetPublished,
    ) -> Result<responses::BlogPost, ClientError> {
        let response = self.post("set_blog_post_published", details).await?;
        ok_body(response).await
    }

    pub async fn delete_blog_post(
        &self,
        blog_post_id: &BlogPostId,
    ) -> Result<(), ClientError> {
        let response = self.post("delete_blog_post", blog_post_id).await?;
        ok_empty(response).await
    }

    /// All villas, newest first.
    pub async fn list_villas(
        &self,
    ) -> Result<Vec<responses::Villa>, ClientError> {
        let response = self.empty_get("villas").await?;
        ok_body(response).await
    }

    pub async fn create_villa(
        &self,
        details: &Villa,
    ) -> Result<VillaId, ClientError> {
        let response = self.post("create_villa", details).await?;
        ok_body(response).await
    }

    pub async fn get_villa(
        &self,
        villa_id: &VillaId,
    ) -> Result<responses::Villa, ClientError> {
        let response = self.post("get_villa", villa_id).await?;
        ok_body(response).await
    }

    pub async fn update_villa(
        &self,
        details: &requests::UpdateVilla,
    ) -> Result<responses::Villa, ClientError> {
        let response = self.post("update_villa", details).await?;
        ok_body(response).await
    }

    pub async fn delete_villa(
        &self,
        villa_id: &VillaId,
    ) -> Result<(), ClientError> {
        let response = self.post("delete_villa", villa_id).await?;
        ok_empty(response).await
    }

    pub async fn list_bookings(
        &self,
    ) -> Result<Vec<responses::Booking>, ClientError> {
        let response = self.empty_get("bookings").await?;
        ok_body(response).await
    }

    pub async fn list_experiences(
        &self,
    ) -> Result<Vec<responses::Experience>, ClientError> {
        let response = self.empty_get("experiences").await?;
        ok_body(response).await
    }

    pub async fn dashboard_stats(
        &self,
    ) -> Result<responses::DashboardStats, ClientError> {
        let response = self.empty_get("dashboard_stats").await?;
        ok_body(response).await
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// An unhandled API error to display, containing response text.
    #[error("{1}")]
    APIError(StatusCode, String),
    /// The backing table has not been created yet.
    #[error("{0}")]
    MissingCollection(String),
    #[error("Network error. Please check your connection.")]
    Network(#[from] reqwest::Error),
}

impl ClientError {
    pub fn is_missing_collection(&self) -> bool {
        matches!(self, Self::MissingCollection(_))
    }
}

async fn error_from_response(response: reqwest::Response) -> ClientError {
    let status = response.status();
    let text = match response.text().await {
        Ok(text) => text,
        Err(e) => return ClientError::Network(e),
    };
    if status == StatusCode::SERVICE_UNAVAILABLE {
        ClientError::MissingCollection(text)
    } else {
        ClientError::APIError(status, text)
    }
}

/// Deserialize a successful request into the desired type, or return an
/// appropriate error.
pub async fn ok_body<T: serde::de::DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, ClientError> {
    if !response.status().is_success() {
        return Err(error_from_response(response).await);
    }
    Ok(response.json::<T>().await?)
}

/// Check that an empty response is OK, returning a ClientError if not.
pub async fn ok_empty(response: reqwest::Response) -> Result<(), ClientError> {
    if !response.status().is_success() {
        return Err(error_from_response(response).await);
    }
    Ok(())
}
