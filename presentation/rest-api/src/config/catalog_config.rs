use std::path::PathBuf;

/// Optional overrides for the compiled-in catalog seeds.
///
/// Environment variables:
/// - SHOP_CATALOG_PATH: JSON payload for the shop catalog
/// - TOOLKIT_CATALOG_PATH: JSON payload for the toolkit catalog
#[derive(Debug, Clone, Default)]
pub struct CatalogConfig {
    pub shop_path: Option<PathBuf>,
    pub toolkit_path: Option<PathBuf>,
}

impl CatalogConfig {
    pub fn from_env() -> Self {
        Self {
            shop_path: path_var("SHOP_CATALOG_PATH"),
            toolkit_path: path_var("TOOLKIT_CATALOG_PATH"),
        }
    }
}

fn path_var(key: &str) -> Option<PathBuf> {
    std::env::var(key)
        .ok()
        .filter(|value| !value.trim().is_empty())
        .map(PathBuf::from)
}
