//! Media upload service (presign-then-PUT against object storage)

use crate::{
    error::ApiResult,
    http::ApiClient,
    models::{DeleteMediaRequest, DeleteMediaResponse, PresignUploadRequest, PresignedUpload},
};

#[derive(Clone)]
pub struct MediaService {
    api: ApiClient,
}

impl MediaService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// Ask the backend for a presigned upload slot
    pub async fn presign(
        &self,
        filename: &str,
        content_type: &str,
        folder: Option<&str>,
        file_size: Option<u64>,
    ) -> ApiResult<PresignedUpload> {
        let request = PresignUploadRequest {
            filename: filename.to_string(),
            content_type: content_type.to_string(),
            folder: folder.map(str::to_string),
            file_size,
        };
        self.api.post_json("/media/presign-upload", &request).await
    }

    /// Full two-step upload: presign, then PUT the bytes straight to storage
    /// with the headers the signature requires. Returns the ticket so callers
    /// can store `file_key` / `public_url` on the listing.
    pub async fn upload(
        &self,
        filename: &str,
        content_type: &str,
        folder: Option<&str>,
        bytes: Vec<u8>,
    ) -> ApiResult<PresignedUpload> {
        let ticket = self
            .presign(filename, content_type, folder, Some(bytes.len() as u64))
            .await?;

        self.api
            .put_external(&ticket.upload_url, &ticket.required_headers, bytes)
            .await?;

        tracing::info!(file_key = %ticket.file_key, "media uploaded");
        Ok(ticket)
    }

    /// Remove an object from storage by key
    pub async fn delete(&self, key: &str) -> ApiResult<DeleteMediaResponse> {
        let request = DeleteMediaRequest {
            key: key.to_string(),
        };
        self.api.post_json("/media/delete", &request).await
    }
}
