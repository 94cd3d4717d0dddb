use std::sync::{Arc, PoisonError};

use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::SharedCartLedger;
use crate::domain::cart::summary::CartSummary;
use crate::domain::cart::use_cases::remove::{RemoveFromCartParams, RemoveFromCartUseCase};
use crate::domain::logger::Logger;

pub struct RemoveFromCartUseCaseImpl {
    pub ledger: SharedCartLedger,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl RemoveFromCartUseCase for RemoveFromCartUseCaseImpl {
    async fn execute(&self, params: RemoveFromCartParams) -> Result<CartSummary, CartError> {
        self.logger
            .info(&format!("Removing item {} from cart", params.item_id));

        let mut ledger = self.ledger.lock().unwrap_or_else(PoisonError::into_inner);
        let removed = ledger.remove(params.item_id)?;
        if !removed {
            self.logger.debug(&format!(
                "Item {} was not in the cart, nothing removed",
                params.item_id
            ));
        }

        Ok(CartSummary::from_ledger(&ledger))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::cart::model::CartLedger;
    use crate::domain::catalog::model::{Item, ItemKind, NewItemProps};
    use crate::domain::catalog::store::CatalogStore;
    use crate::domain::catalog::value_objects::{Category, ItemId};
    use crate::domain::notifier::{Notification, Notifier};
    use bigdecimal::BigDecimal;
    use mockall::mock;
    use std::str::FromStr;
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

    fn shared_ledger() -> SharedCartLedger {
        let item = Item::new(NewItemProps {
            id: ItemId::new(5),
            name: "Vintage Leather Backpack".to_string(),
            category: Category::new("Fashion"),
            description: None,
            price: Some(BigDecimal::from_str("89.99").unwrap()),
            rating: Some(4.4),
            stock: 12,
            kind: ItemKind::Product {
                original_price: None,
                reviews: 78,
                on_sale: false,
            },
        })
        .unwrap();
        let catalog = Arc::new(CatalogStore::new(vec![], vec![item]).unwrap());
        Arc::new(Mutex::new(CartLedger::new(catalog, Arc::new(Discard))))
    }

    #[tokio::test]
    async fn should_remove_existing_entry() {
        let ledger = shared_ledger();
        ledger.lock().unwrap().add(ItemId::new(5)).unwrap();
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());

        let use_case = RemoveFromCartUseCaseImpl {
            ledger,
            logger: Arc::new(logger),
        };

        let summary = use_case
            .execute(RemoveFromCartParams {
                item_id: ItemId::new(5),
            })
            .await
            .unwrap();

        assert!(summary.lines.is_empty());
    }

    #[tokio::test]
    async fn should_be_noop_when_entry_absent() {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_debug().times(1).returning(|_| ());

        let use_case = RemoveFromCartUseCaseImpl {
            ledger: shared_ledger(),
            logger: Arc::new(logger),
        };

        let result = use_case
            .execute(RemoveFromCartParams {
                item_id: ItemId::new(5),
            })
            .await;

        assert!(result.is_ok());
        assert_eq!(result.unwrap().item_count, 0);
    }

    #[tokio::test]
    async fn should_reject_unknown_item() {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());

        let use_case = RemoveFromCartUseCaseImpl {
            ledger: shared_ledger(),
            logger: Arc::new(logger),
        };

        let result = use_case
            .execute(RemoveFromCartParams {
                item_id: ItemId::new(8),
            })
            .await;

        assert_eq!(
            result.unwrap_err(),
            CartError::UnknownItem(ItemId::new(8))
        );
    }
}
