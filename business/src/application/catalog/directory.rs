use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::catalog::directory::CatalogDirectory;
use crate::domain::catalog::errors::CatalogError;
use crate::domain::catalog::store::CatalogStore;
use crate::domain::catalog::use_cases::directory::GetCatalogDirectoryUseCase;
use crate::domain::logger::Logger;

pub struct GetCatalogDirectoryUseCaseImpl {
    pub catalog: Arc<CatalogStore>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetCatalogDirectoryUseCase for GetCatalogDirectoryUseCaseImpl {
    async fn execute(&self) -> Result<CatalogDirectory, CatalogError> {
        let directory = self.catalog.directory().clone();
        self.logger.debug(&format!(
            "Catalog directory: {} platforms, {} recent resources",
            directory.platforms.len(),
            directory.recently_added.len()
        ));
        Ok(directory)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::directory::{RecentResource, ResourceFormat};
    use mockall::mock;

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    #[tokio::test]
    async fn should_return_recent_resources_in_payload_order() {
        let mut logger = MockLog::new();
        logger.expect_debug().times(1).returning(|_| ());
        let recent = |title: &str, format, added: &str| RecentResource {
            title: title.to_string(),
            format,
            added: added.to_string(),
        };
        let catalog = CatalogStore::new(vec![], vec![]).unwrap().with_directory(CatalogDirectory {
            platforms: vec![],
            recently_added: vec![
                recent("Java Collections Framework Guide", ResourceFormat::Pdf, "2 days ago"),
                recent("React Hooks Tutorial", ResourceFormat::Video, "1 week ago"),
            ],
        });

        let use_case = GetCatalogDirectoryUseCaseImpl {
            catalog: Arc::new(catalog),
            logger: Arc::new(logger),
        };

        let directory = use_case.execute().await.unwrap();

        assert_eq!(directory.recently_added.len(), 2);
        assert_eq!(directory.recently_added[0].format, ResourceFormat::Pdf);
        assert_eq!(directory.recently_added[1].title, "React Hooks Tutorial");
    }
}
