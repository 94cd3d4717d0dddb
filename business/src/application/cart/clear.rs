use std::sync::{Arc, PoisonError};

use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::SharedCartLedger;
use crate::domain::cart::use_cases::clear::ClearCartUseCase;
use crate::domain::logger::Logger;

pub struct ClearCartUseCaseImpl {
    pub ledger: SharedCartLedger,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ClearCartUseCase for ClearCartUseCaseImpl {
    async fn execute(&self) -> Result<usize, CartError> {
        self.logger.info("Clearing cart");
        let dropped = self
            .ledger
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
        self.logger
            .info(&format!("Cart cleared: {} entries removed", dropped));
        Ok(dropped)
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

    mock! {
        pub Notify {}

        impl Notifier for Notify {
            fn notify(&self, notification: Notification);
        }
    }

    #[tokio::test]
    async fn should_drop_all_entries_and_notify_once() {
        let item = Item::new(NewItemProps {
            id: ItemId::new(1),
            name: "Smart Fitness Watch".to_string(),
            category: Category::new("Electronics"),
            description: None,
            price: Some(BigDecimal::from(200)),
            rating: None,
            stock: 8,
            kind: ItemKind::Product {
                original_price: None,
                reviews: 89,
                on_sale: false,
            },
        })
        .unwrap();
        let catalog = Arc::new(CatalogStore::new(vec![], vec![item]).unwrap());
        let mut notifier = MockNotify::new();
        notifier
            .expect_notify()
            .withf(|n| n.title == "Added to Cart")
            .returning(|_| ());
        notifier
            .expect_notify()
            .withf(|n| n.title == "Cart Cleared")
            .times(1)
            .returning(|_| ());
        let ledger = Arc::new(Mutex::new(CartLedger::new(catalog, Arc::new(notifier))));
        ledger.lock().unwrap().add(ItemId::new(1)).unwrap();
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());

        let use_case = ClearCartUseCaseImpl {
            ledger: Arc::clone(&ledger),
            logger: Arc::new(logger),
        };

        assert_eq!(use_case.execute().await.unwrap(), 1);
        assert_eq!(use_case.execute().await.unwrap(), 0);
        assert!(ledger.lock().unwrap().is_empty());
    }
}
