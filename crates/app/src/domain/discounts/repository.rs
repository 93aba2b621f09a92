//! Discounts Repository

use std::{
    io::ErrorKind,
    path::{Path, PathBuf},
};

use serde_json::Value;
use vitrina::discounts::DiscountMapping;

use crate::domain::discounts::errors::DiscountsServiceError;

/// A single pretty-printed JSON document on disk.
#[derive(Debug, Clone)]
pub(crate) struct FileDiscountsRepository {
    path: PathBuf,
}

impl FileDiscountsRepository {
    #[must_use]
    pub(crate) fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub(crate) fn path(&self) -> &Path {
        &self.path
    }

    /// Missing and blank files read as an empty mapping.
    pub(crate) async fn read(&self) -> Result<DiscountMapping, DiscountsServiceError> {
        let contents = match tokio::fs::read_to_string(&self.path).await {
            Ok(contents) => contents,
            Err(error) if error.kind() == ErrorKind::NotFound => {
                return Ok(DiscountMapping::new());
            }
            Err(error) => return Err(DiscountsServiceError::Read(error)),
        };

        if contents.trim().is_empty() {
            return Ok(DiscountMapping::new());
        }

        let value: Value =
            serde_json::from_str(&contents).map_err(DiscountsServiceError::Parse)?;

        DiscountMapping::from_value(value).map_err(|_err| DiscountsServiceError::NotAnObject)
    }

    /// Replace the stored document through a sibling temporary file.
    pub(crate) async fn write(&self, mapping: &DiscountMapping) -> Result<(), DiscountsServiceError> {
        let json = serde_json::to_vec_pretty(mapping).map_err(DiscountsServiceError::Encode)?;

        let staging = self.staging_path();

        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(DiscountsServiceError::Write)?;
        }

        tokio::fs::write(&staging, json)
            .await
            .map_err(DiscountsServiceError::Write)?;

        tokio::fs::rename(&staging, &self.path)
            .await
            .map_err(DiscountsServiceError::Write)
    }

    fn staging_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(ToOwned::to_owned)
            .unwrap_or_default();

        name.push(".tmp");

        self.path.with_file_name(name)
    }
}
