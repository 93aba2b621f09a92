//! Local persistent cache.
//!
//! A small JSON document that plays the part of browser local storage: the
//! last-known discount mapping and an optional catalog background image.

use std::{
    io::ErrorKind,
    path::{Path, PathBuf},
};

use base64::{Engine, engine::general_purpose::STANDARD};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;
use vitrina::discounts::DiscountMapping;

/// Default cache location.
pub const DEFAULT_STORE_PATH: &str = ".vitrina-store.json";

#[derive(Debug, Error)]
pub enum LocalStoreError {
    #[error("failed to write local store")]
    Write(#[source] std::io::Error),

    #[error("failed to encode local store")]
    Encode(#[source] serde_json::Error),

    #[error("failed to read background image")]
    ReadImage(#[source] std::io::Error),

    #[error("{0} is not an image file")]
    NotAnImage(PathBuf),
}

/// Everything the cache holds.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LocalState {
    /// Mirrored discount mapping.
    #[serde(rename = "productDiscounts", default)]
    pub product_discounts: DiscountMapping,

    /// Background image as a `data:` URL.
    #[serde(
        rename = "catalogBackground",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub catalog_background: Option<String>,
}

#[derive(Debug, Clone)]
pub struct LocalStore {
    path: PathBuf,
}

impl LocalStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the cache. Anything unreadable degrades to an empty state.
    pub async fn load(&self) -> LocalState {
        let contents = match tokio::fs::read_to_string(&self.path).await {
            Ok(contents) => contents,
            Err(error) if error.kind() == ErrorKind::NotFound => return LocalState::default(),
            Err(error) => {
                warn!(path = %self.path.display(), %error, "could not read local store");

                return LocalState::default();
            }
        };

        serde_json::from_str(&contents).unwrap_or_else(|error| {
            warn!(path = %self.path.display(), %error, "local store is corrupt, ignoring it");

            LocalState::default()
        })
    }

    /// Persist the whole cache.
    ///
    /// # Errors
    ///
    /// Returns an error if the state cannot be encoded or written.
    pub async fn save(&self, state: &LocalState) -> Result<(), LocalStoreError> {
        let json = serde_json::to_vec_pretty(state).map_err(LocalStoreError::Encode)?;

        tokio::fs::write(&self.path, json)
            .await
            .map_err(LocalStoreError::Write)
    }

    /// Last-known discount mapping.
    pub async fn discounts(&self) -> DiscountMapping {
        self.load().await.product_discounts
    }

    /// Replace the cached discount mapping, keeping the background.
    ///
    /// # Errors
    ///
    /// Returns an error if the cache cannot be written.
    pub async fn save_discounts(&self, discounts: DiscountMapping) -> Result<(), LocalStoreError> {
        let mut state = self.load().await;

        state.product_discounts = discounts;

        self.save(&state).await
    }

    /// Set or clear the background image, keeping the discounts.
    ///
    /// # Errors
    ///
    /// Returns an error if the cache cannot be written.
    pub async fn set_background(&self, data_url: Option<String>) -> Result<(), LocalStoreError> {
        let mut state = self.load().await;

        state.catalog_background = data_url;

        self.save(&state).await
    }
}

/// Read an image file into a base64 `data:` URL.
///
/// # Errors
///
/// Returns an error if the file is not a recognised image type or cannot be read.
pub async fn image_data_url(path: &Path) -> Result<String, LocalStoreError> {
    let mime = image_mime_type(path).ok_or_else(|| LocalStoreError::NotAnImage(path.to_owned()))?;

    let bytes = tokio::fs::read(path)
        .await
        .map_err(LocalStoreError::ReadImage)?;

    Ok(format!("data:{mime};base64,{}", STANDARD.encode(bytes)))
}

fn image_mime_type(path: &Path) -> Option<&'static str> {
    let extension = path.extension()?.to_str()?.to_ascii_lowercase();

    match extension.as_str() {
        "png" => Some("image/png"),
        "jpg" | "jpeg" => Some("image/jpeg"),
        "gif" => Some("image/gif"),
        "webp" => Some("image/webp"),
        "svg" => Some("image/svg+xml"),
        "bmp" => Some("image/bmp"),
        "avif" => Some("image/avif"),
        "ico" => Some("image/x-icon"),
        _ => None,
    }
}
