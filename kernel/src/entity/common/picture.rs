use serde::{Deserialize, Serialize};
use vodca::{AsRefln, Fromln, References};

/// Identifier assigned by the image storage, required to destroy the asset later.
#[derive(Debug, Clone, Eq, PartialEq, Hash, Fromln, AsRefln, Serialize, Deserialize)]
pub struct AssetId(String);

impl AssetId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

#[derive(Debug, Clone, Eq, PartialEq, References, Serialize, Deserialize)]
pub struct Picture {
    asset_id: AssetId,
    url: String,
}

impl Picture {
    pub fn new(asset_id: AssetId, url: impl Into<String>) -> Self {
        Self {
            asset_id,
            url: url.into(),
        }
    }
}

#[derive(Debug, Clone, Eq, PartialEq, Default, Fromln, AsRefln, Serialize, Deserialize)]
pub struct Pictures(Vec<Picture>);

impl Pictures {
    pub fn new(pictures: impl Into<Vec<Picture>>) -> Self {
        Self(pictures.into())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
