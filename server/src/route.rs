use axum::extract::Multipart;
use error_stack::Report;

use kernel::interface::image::UploadImage;
use kernel::KernelError;

use crate::error::ErrorStatus;

mod booking;
mod chat;
mod hostel;
mod room;

pub use self::{booking::*, chat::*, hostel::*, room::*};

/// Drains every file part of a multipart body into upload payloads.
pub(crate) async fn read_images(mut multipart: Multipart) -> Result<Vec<UploadImage>, ErrorStatus> {
    let mut images = Vec::new();
    loop {
        let field = multipart.next_field().await.map_err(|_| {
            ErrorStatus::from(Report::new(KernelError::Validation(
                "Invalid image upload payload".to_string(),
            )))
        })?;
        let Some(field) = field else {
            break;
        };
        let file_name = field.file_name().unwrap_or("picture").to_string();
        let bytes = field.bytes().await.map_err(|_| {
            ErrorStatus::from(Report::new(KernelError::Validation(
                "Invalid image upload payload".to_string(),
            )))
        })?;
        images.push(UploadImage::new(file_name, bytes.to_vec()));
    }
    Ok(images)
}
