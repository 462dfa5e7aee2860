//! Media presign models (camelCase wire format)

use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use std::collections::HashMap;

/// Request body for `/media/presign-upload`
#[skip_serializing_none]
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PresignUploadRequest {
    pub filename: String,
    pub content_type: String,
    pub folder: Option<String>,
    pub file_size: Option<u64>,
}

/// Presigned upload ticket: PUT the bytes to `upload_url` with
/// `required_headers` attached, then reference the object by `file_key`
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PresignedUpload {
    pub upload_url: String,
    pub file_key: String,
    pub public_url: String,
    pub required_headers: HashMap<String, String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct DeleteMediaRequest {
    pub key: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DeleteMediaResponse {
    pub success: bool,
}
