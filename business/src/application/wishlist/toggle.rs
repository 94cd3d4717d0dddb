use std::sync::{Arc, PoisonError};

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::wishlist::errors::WishlistError;
use crate::domain::wishlist::model::SharedWishlist;
use crate::domain::wishlist::use_cases::toggle::{
    ToggleWishlistParams, ToggleWishlistUseCase, WishlistToggle,
};

pub struct ToggleWishlistUseCaseImpl {
    pub wishlist: SharedWishlist,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ToggleWishlistUseCase for ToggleWishlistUseCaseImpl {
    async fn execute(
        &self,
        params: ToggleWishlistParams,
    ) -> Result<WishlistToggle, WishlistError> {
        let mut wishlist = self
            .wishlist
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        let present = wishlist.toggle(params.item_id).inspect_err(|err| {
            self.logger.warn(&format!(
                "Rejected wishlist toggle of item {}: {}",
                params.item_id, err
            ))
        })?;

        self.logger.info(&format!(
            "Item {} {} wishlist",
            params.item_id,
            if present { "added to" } else { "removed from" }
        ));
        Ok(WishlistToggle {
            item_id: params.item_id,
            present,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::model::{Item, ItemKind, NewItemProps};
    use crate::domain::catalog::store::CatalogStore;
    use crate::domain::catalog::value_objects::{Category, ItemId};
    use crate::domain::notifier::{Notification, Notifier};
    use crate::domain::wishlist::model::Wishlist;
    use mockall::mock;
    use std::sync::Mutex;

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    struct Discard;

    impl Notifier for Discard {
        fn notify(&self, _notification: Notification) {}
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    fn use_case() -> ToggleWishlistUseCaseImpl {
        let item = Item::new(NewItemProps {
            id: ItemId::new(2),
            name: "Smart Fitness Watch".to_string(),
            category: Category::new("Electronics"),
            description: None,
            price: None,
            rating: Some(4.8),
            stock: 8,
            kind: ItemKind::Product {
                original_price: None,
                reviews: 89,
                on_sale: false,
            },
        })
        .unwrap();
        let catalog = Arc::new(CatalogStore::new(vec![], vec![item]).unwrap());
        ToggleWishlistUseCaseImpl {
            wishlist: Arc::new(Mutex::new(Wishlist::new(catalog, Arc::new(Discard)))),
            logger: mock_logger(),
        }
    }

    #[tokio::test]
    async fn should_flip_membership_each_call() {
        let use_case = use_case();
        let params = || ToggleWishlistParams {
            item_id: ItemId::new(2),
        };

        let first = use_case.execute(params()).await.unwrap();
        let second = use_case.execute(params()).await.unwrap();

        assert!(first.present);
        assert!(!second.present);
        assert!(use_case.wishlist.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn should_reject_unknown_item() {
        let use_case = use_case();

        let result = use_case
            .execute(ToggleWishlistParams {
                item_id: ItemId::new(3),
            })
            .await;

        assert_eq!(
            result.unwrap_err(),
            WishlistError::UnknownItem(ItemId::new(3))
        );
    }
}
