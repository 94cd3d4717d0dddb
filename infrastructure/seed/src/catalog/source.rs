use std::path::PathBuf;

use async_trait::async_trait;

use business::domain::catalog::repository::{CatalogPayload, CatalogSource};
use business::domain::errors::RepositoryError;

use super::entity::CatalogEntity;

const SHOP_SEED: &str = include_str!("../../seeds/shop.json");
const TOOLKIT_SEED: &str = include_str!("../../seeds/toolkit.json");

enum SeedLocation {
    Embedded(&'static str),
    File(PathBuf),
}

/// Catalog source backed by a JSON payload, either compiled in or read from disk.
pub struct JsonCatalogSource {
    name: String,
    location: SeedLocation,
}

impl JsonCatalogSource {
    /// Products of the demo shop.
    pub fn shop() -> Self {
        Self {
            name: "shop".to_string(),
            location: SeedLocation::Embedded(SHOP_SEED),
        }
    }

    /// Subjects of the academic toolkit.
    pub fn toolkit() -> Self {
        Self {
            name: "toolkit".to_string(),
            location: SeedLocation::Embedded(TOOLKIT_SEED),
        }
    }

    pub fn from_path(name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            location: SeedLocation::File(path.into()),
        }
    }

    /// Uses `path` when given, otherwise `fallback`.
    pub fn from_optional_path(fallback: Self, path: Option<PathBuf>) -> Self {
        match path {
            Some(path) => Self::from_path(fallback.name, path),
            None => fallback,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    fn parse(&self, raw: &str) -> Result<CatalogPayload, RepositoryError> {
        let entity: CatalogEntity = serde_json::from_str(raw).map_err(|err| {
            tracing::error!(catalog = %self.name, error = %err, "Catalog seed is not valid JSON");
            RepositoryError::Malformed
        })?;
        entity.into_payload()
    }
}

#[async_trait]
impl CatalogSource for JsonCatalogSource {
    async fn load(&self) -> Result<CatalogPayload, RepositoryError> {
        let payload = match &self.location {
            SeedLocation::Embedded(raw) => self.parse(raw)?,
            SeedLocation::File(path) => {
                let raw = tokio::fs::read_to_string(path).await.map_err(|err| {
                    tracing::error!(
                        catalog = %self.name,
                        path = %path.display(),
                        error = %err,
                        "Catalog seed file could not be read"
                    );
                    RepositoryError::Unavailable
                })?;
                self.parse(&raw)?
            }
        };

        tracing::debug!(
            catalog = %self.name,
            items = payload.items.len(),
            "Catalog payload loaded"
        );
        Ok(payload)
    }
}
