//! HTTP transport for the OTD backend API
//!
//! Thin wrapper around `reqwest` that joins paths onto the configured base
//! URL, attaches the session bearer token, and maps failures into `ApiError`.

use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::{de::DeserializeOwned, Serialize};
use std::collections::HashMap;
use std::time::Duration;
use url::Url;

use crate::{
    config::ApiConfig,
    error::{ApiError, ApiResult},
    session::Session,
};

#[derive(Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
    session: Session,
}

impl ApiClient {
    pub fn new(config: &ApiConfig, session: Session) -> ApiResult<Self> {
        let base_url = config.base_url.trim_end_matches('/').to_string();
        // Validate the base URL up front so every later join is infallible
        Url::parse(&base_url)
            .map_err(|e| ApiError::InvalidUrl(format!("api.base_url: {}", e)))?;

        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()?;

        Ok(Self {
            http,
            base_url,
            session,
        })
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Absolute endpoint URL for an API path
    ///
    /// A leading slash is optional; trailing slashes are preserved because the
    /// backend routes `/user_admin/` and `/user_admin/{id}/` with them.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        let response = self.dispatch(self.http.get(self.endpoint(path))).await?;
        Self::decode(response).await
    }

    pub async fn post_json<B, T>(&self, path: &str, body: &B) -> ApiResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self
            .dispatch(self.http.post(self.endpoint(path)).json(body))
            .await?;
        Self::decode(response).await
    }

    pub async fn put_json<B, T>(&self, path: &str, body: &B) -> ApiResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self
            .dispatch(self.http.put(self.endpoint(path)).json(body))
            .await?;
        Self::decode(response).await
    }

    pub async fn patch_json<B, T>(&self, path: &str, body: &B) -> ApiResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self
            .dispatch(self.http.patch(self.endpoint(path)).json(body))
            .await?;
        Self::decode(response).await
    }

    /// DELETE an entity; the response body (if any) is discarded
    pub async fn delete(&self, path: &str) -> ApiResult<()> {
        self.dispatch(self.http.delete(self.endpoint(path))).await?;
        Ok(())
    }

    /// Raw PUT to an absolute URL outside the API surface (presigned storage
    /// upload); no bearer token is attached
    pub async fn put_external(
        &self,
        url: &str,
        headers: &HashMap<String, String>,
        body: Vec<u8>,
    ) -> ApiResult<()> {
        let mut builder = self.http.put(url).body(body);
        for (name, value) in headers {
            builder = builder.header(name, value);
        }

        let response = builder.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                status,
                message: "upload rejected by storage".to_string(),
            });
        }
        Ok(())
    }

    async fn dispatch(&self, builder: RequestBuilder) -> ApiResult<Response> {
        let builder = match self.session.token() {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        };

        let response = builder.send().await?;
        let status = response.status();

        if status == StatusCode::UNAUTHORIZED {
            // Invalidate the shared session; the UI reacts by forcing a login
            self.session.clear();
            return Err(ApiError::Unauthorized);
        }

        if !status.is_success() {
            let message = Self::extract_detail(response).await;
            tracing::debug!(%status, %message, "API call failed");
            return Err(ApiError::Status { status, message });
        }

        Ok(response)
    }

    /// Best-effort extraction of the backend's `{"detail": "..."}` message
    async fn extract_detail(response: Response) -> String {
        match response.json::<serde_json::Value>().await {
            Ok(body) => body
                .get("detail")
                .and_then(|v| v.as_str())
                .map(str::to_string)
                .unwrap_or_else(|| body.to_string()),
            Err(_) => String::new(),
        }
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> ApiResult<T> {
        let bytes = response.bytes().await?;
        serde_json::from_slice(&bytes).map_err(|e| ApiError::Decode(e.to_string()))
    }
}
