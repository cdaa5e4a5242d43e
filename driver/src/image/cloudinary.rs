use error_stack::Report;
use reqwest::multipart::{Form, Part};
use serde::Deserialize;

use kernel::interface::image::{DestructUploadImage, ImageStorage, UploadImage};
use kernel::prelude::entity::{AssetId, Picture};
use kernel::KernelError;

use crate::env;
use crate::error::{ConvertError, DriverError};

static CLOUDINARY_NAME: &str = "CLOUDINARY_NAME";
static CLOUDINARY_UPLOAD_PRESET: &str = "CLOUDINARY_UPLOAD_PRESET";
static CLOUDINARY_API_KEY: &str = "CLOUDINARY_API_KEY";
static CLOUDINARY_API_SECRET: &str = "CLOUDINARY_API_SECRET";

/// Explicit gateway configuration, injected at construction time.
#[derive(Debug, Clone)]
pub struct CloudinaryConfig {
    pub cloud_name: String,
    pub upload_preset: String,
    pub api_key: String,
    pub api_secret: String,
}

impl CloudinaryConfig {
    pub fn from_env() -> Result<Self, DriverError> {
        Ok(Self {
            cloud_name: env(CLOUDINARY_NAME)?,
            upload_preset: env(CLOUDINARY_UPLOAD_PRESET)?,
            api_key: env(CLOUDINARY_API_KEY)?,
            api_secret: env(CLOUDINARY_API_SECRET)?,
        })
    }
}

pub struct CloudinaryImageStorage {
    client: reqwest::Client,
    config: CloudinaryConfig,
}

impl CloudinaryImageStorage {
    pub fn new(config: CloudinaryConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    fn upload_url(&self) -> String {
        format!(
            "https://api.cloudinary.com/v1_1/{}/image/upload",
            self.config.cloud_name
        )
    }

    fn destroy_url(&self) -> String {
        format!(
            "https://api.cloudinary.com/v1_1/{}/resources/image/upload",
            self.config.cloud_name
        )
    }
}

#[derive(Debug, Deserialize)]
struct UploadResponse {
    public_id: String,
    secure_url: String,
}

#[async_trait::async_trait]
impl ImageStorage for CloudinaryImageStorage {
    /// Unsigned upload against a preset; the response carries the asset id
    /// needed for later destruction.
    async fn upload(
        &self,
        image: UploadImage,
        folder: &str,
    ) -> error_stack::Result<Picture, KernelError> {
        let DestructUploadImage { file_name, bytes } = image.into_destruct();
        let form = Form::new()
            .text("upload_preset", self.config.upload_preset.clone())
            .text("folder", folder.to_string())
            .part("file", Part::bytes(bytes).file_name(file_name));

        let response = self
            .client
            .post(self.upload_url())
            .multipart(form)
            .send()
            .await
            .convert_error()?
            .error_for_status()
            .convert_error()?
            .json::<UploadResponse>()
            .await
            .convert_error()?;

        Ok(Picture::new(
            AssetId::new(response.public_id),
            response.secure_url,
        ))
    }

    async fn destroy(&self, asset_id: &AssetId) -> error_stack::Result<(), KernelError> {
        self.client
            .delete(self.destroy_url())
            .basic_auth(&self.config.api_key, Some(&self.config.api_secret))
            .query(&[("public_ids[]", asset_id.as_ref().as_str())])
            .send()
            .await
            .convert_error()?
            .error_for_status()
            .convert_error()?;
        Ok(())
    }
}

impl<T> ConvertError for Result<T, reqwest::Error> {
    type Ok = T;
    fn convert_error(self) -> error_stack::Result<T, KernelError> {
        self.map_err(|error| {
            if error.is_timeout() {
                Report::from(error).change_context(KernelError::Timeout)
            } else {
                Report::from(error).change_context(KernelError::Internal)
            }
        })
    }
}
