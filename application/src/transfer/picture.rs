use kernel::prelude::entity::Picture;

#[derive(Debug, Clone)]
pub struct PictureDto {
    pub asset_id: String,
    pub url: String,
}

impl From<Picture> for PictureDto {
    fn from(value: Picture) -> Self {
        Self {
            asset_id: value.asset_id().as_ref().clone(),
            url: value.url().clone(),
        }
    }
}
