use serde::{Deserialize, Serialize};

/// External practice site listed next to the toolkit subjects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodingPlatform {
    pub name: String,
    pub url: String,
    pub description: String,
    /// Display label such as "50M+"
    pub users: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResourceFormat {
    #[serde(rename = "PDF")]
    Pdf,
    Video,
}

impl std::fmt::Display for ResourceFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ResourceFormat::Pdf => write!(f, "PDF"),
            ResourceFormat::Video => write!(f, "Video"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecentResource {
    pub title: String,
    pub format: ResourceFormat,
    /// Relative age as shown to readers, e.g. "2 days ago"
    pub added: String,
}

/// Read-only listings that accompany a catalog. Empty for the shop.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogDirectory {
    pub platforms: Vec<CodingPlatform>,
    pub recently_added: Vec<RecentResource>,
}

impl CatalogDirectory {
    pub fn is_empty(&self) -> bool {
        self.platforms.is_empty() && self.recently_added.is_empty()
    }
}
