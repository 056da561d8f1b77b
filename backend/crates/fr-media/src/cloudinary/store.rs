use crate::{
    CloudinaryCredentials, MediaError, MediaStore, MediaUpload, Result as MediaErrorResult,
    UploadedMedia, sign_params,
};

use std::collections::BTreeMap;
use std::panic::Location;
use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use error_location::ErrorLocation;
use log::{debug, error, info};
use reqwest::multipart::{Form, Part};
use serde::Deserialize;

pub const CLOUDINARY_API_BASE: &str = "https://api.cloudinary.com";

/// Large videos take a while to land.
const UPLOAD_TIMEOUT: Duration = Duration::from_secs(300);

#[derive(Deserialize)]
struct UploadResponse {
    secure_url: String,
    public_id: String,
}

#[derive(Deserialize)]
struct ErrorBody {
    error: ErrorDetail,
}

#[derive(Deserialize)]
struct ErrorDetail {
    message: String,
}

/// Media store backed by Cloudinary's signed upload API
pub struct CloudinaryStore {
    credentials: CloudinaryCredentials,
    api_base: String,
    client: reqwest::Client,
}

impl CloudinaryStore {
    #[track_caller]
    pub fn new(credentials: CloudinaryCredentials, api_base: &str) -> MediaErrorResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(UPLOAD_TIMEOUT)
            .build()
            .map_err(MediaError::from_reqwest)?;

        Ok(Self {
            credentials,
            api_base: api_base.trim_end_matches('/').to_string(),
            client,
        })
    }

    #[track_caller]
    pub fn from_url(cloudinary_url: &str, api_base: &str) -> MediaErrorResult<Self> {
        Self::new(CloudinaryCredentials::from_url(cloudinary_url)?, api_base)
    }

    fn upload_url(&self, upload: &MediaUpload) -> String {
        format!(
            "{}/v1_1/{}/{}/upload",
            self.api_base,
            self.credentials.cloud_name,
            upload.resource_type.as_str()
        )
    }

    fn signed_params(&self, upload: &MediaUpload, timestamp: i64) -> BTreeMap<&'static str, String> {
        let mut params = BTreeMap::new();
        params.insert("timestamp", timestamp.to_string());
        if let Some(folder) = &upload.folder {
            params.insert("folder", folder.clone());
        }
        if let Some(public_id) = &upload.public_id {
            params.insert("public_id", public_id.clone());
        }
        if upload.overwrite {
            params.insert("overwrite", "true".to_string());
        }
        params
    }
}

#[async_trait]
impl MediaStore for CloudinaryStore {
    async fn upload(&self, upload: MediaUpload) -> MediaErrorResult<UploadedMedia> {
        let url = self.upload_url(&upload);
        let params = self.signed_params(&upload, Utc::now().timestamp());
        let signature = sign_params(&params, &self.credentials.api_secret);

        debug!(
            "Uploading {} ({} bytes) to {}",
            upload.filename,
            upload.bytes.len(),
            url
        );

        let mut form = Form::new()
            .text("api_key", self.credentials.api_key.clone())
            .text("signature", signature);
        for (key, value) in params {
            form = form.text(key, value);
        }
        let file = Part::bytes(upload.bytes.to_vec()).file_name(upload.filename.clone());
        form = form.part("file", file);

        let response = self
            .client
            .post(&url)
            .multipart(form)
            .send()
            .await
            .map_err(MediaError::from_reqwest)?;

        let status = response.status();
        let body = response.bytes().await.map_err(MediaError::from_reqwest)?;

        if !status.is_success() {
            let message = serde_json::from_slice::<ErrorBody>(&body)
                .map(|b| b.error.message)
                .unwrap_or_else(|_| String::from_utf8_lossy(&body).into_owned());
            error!("Media upload of {} rejected: {} {}", upload.filename, status, message);
            return Err(MediaError::Rejected {
                status: status.as_u16(),
                message,
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let uploaded: UploadResponse =
            serde_json::from_slice(&body).map_err(|e| MediaError::MalformedResponse {
                message: e.to_string(),
                location: ErrorLocation::from(Location::caller()),
            })?;

        info!("Stored {} as {}", upload.filename, uploaded.public_id);

        Ok(UploadedMedia {
            secure_url: uploaded.secure_url,
            public_id: uploaded.public_id,
        })
    }
}
