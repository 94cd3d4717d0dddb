use std::sync::{Arc, PoisonError};

use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::SharedCartLedger;
use crate::domain::cart::summary::CartSummary;
use crate::domain::cart::use_cases::set_quantity::{
    SetCartQuantityParams, SetCartQuantityUseCase,
};
use crate::domain::logger::Logger;

pub struct SetCartQuantityUseCaseImpl {
    pub ledger: SharedCartLedger,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl SetCartQuantityUseCase for SetCartQuantityUseCaseImpl {
    async fn execute(&self, params: SetCartQuantityParams) -> Result<CartSummary, CartError> {
        self.logger.info(&format!(
            "Setting quantity of item {} to {}",
            params.item_id, params.quantity
        ));

        let mut ledger = self.ledger.lock().unwrap_or_else(PoisonError::into_inner);
        if let Err(err) = ledger.set_quantity(params.item_id, params.quantity) {
            self.logger.warn(&format!(
                "Rejected quantity {} for item {}: {}",
                params.quantity, params.item_id, err
            ));
            return Err(err);
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

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    fn use_case() -> SetCartQuantityUseCaseImpl {
        let item = Item::new(NewItemProps {
            id: ItemId::new(6),
            name: "Yoga Mat Pro".to_string(),
            category: Category::new("Sports"),
            description: None,
            price: Some(BigDecimal::from_str("49.99").unwrap()),
            rating: Some(4.9),
            stock: 20,
            kind: ItemKind::Product {
                original_price: None,
                reviews: 245,
                on_sale: false,
            },
        })
        .unwrap();
        let catalog = Arc::new(CatalogStore::new(vec![], vec![item]).unwrap());
        SetCartQuantityUseCaseImpl {
            ledger: Arc::new(Mutex::new(CartLedger::new(catalog, Arc::new(Discard)))),
            logger: mock_logger(),
        }
    }

    #[tokio::test]
    async fn should_set_quantity_creating_entry() {
        let use_case = use_case();

        let summary = use_case
            .execute(SetCartQuantityParams {
                item_id: ItemId::new(6),
                quantity: 5,
            })
            .await
            .unwrap();

        assert_eq!(summary.item_count, 5);
        assert_eq!(summary.total, BigDecimal::from_str("249.95").unwrap());
    }

    #[tokio::test]
    async fn should_remove_entry_when_quantity_zero() {
        let use_case = use_case();
        use_case
            .execute(SetCartQuantityParams {
                item_id: ItemId::new(6),
                quantity: 2,
            })
            .await
            .unwrap();

        let summary = use_case
            .execute(SetCartQuantityParams {
                item_id: ItemId::new(6),
                quantity: 0,
            })
            .await
            .unwrap();

        assert!(summary.lines.is_empty());
        assert_eq!(summary.item_count, 0);
    }

    #[tokio::test]
    async fn should_reject_negative_quantity() {
        let use_case = use_case();

        let result = use_case
            .execute(SetCartQuantityParams {
                item_id: ItemId::new(6),
                quantity: -1,
            })
            .await;

        assert_eq!(result.unwrap_err(), CartError::InvalidQuantity(-1));
    }
}
