use destructure::Destructure;
use vodca::References;

use crate::entity::{AssetId, Picture};
use crate::KernelError;

/// Raw file received from a client, before it reaches the image storage.
#[derive(Debug, Clone, References, Destructure)]
pub struct UploadImage {
    file_name: String,
    bytes: Vec<u8>,
}

impl UploadImage {
    pub fn new(file_name: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            file_name: file_name.into(),
            bytes: bytes.into(),
        }
    }
}

/// Remote asset store. Uploads return a stable identifier plus a public URL;
/// destroy is keyed by that identifier.
#[async_trait::async_trait]
pub trait ImageStorage: 'static + Sync + Send {
    async fn upload(
        &self,
        image: UploadImage,
        folder: &str,
    ) -> error_stack::Result<Picture, KernelError>;
    async fn destroy(&self, asset_id: &AssetId) -> error_stack::Result<(), KernelError>;
}

pub trait DependOnImageStorage: 'static + Sync + Send {
    type ImageStorage: ImageStorage;
    fn image_storage(&self) -> &Self::ImageStorage;
}
