use std::sync::{Arc, PoisonError};

use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::SharedCartLedger;
use crate::domain::cart::summary::CartSummary;
use crate::domain::cart::use_cases::get::GetCartUseCase;
use crate::domain::logger::Logger;

pub struct GetCartUseCaseImpl {
    pub ledger: SharedCartLedger,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetCartUseCase for GetCartUseCaseImpl {
    async fn execute(&self) -> Result<CartSummary, CartError> {
        let ledger = self.ledger.lock().unwrap_or_else(PoisonError::into_inner);
        let summary = CartSummary::from_ledger(&ledger);
        self.logger.debug(&format!(
            "Cart has {} distinct items, {} units",
            summary.distinct_items(),
            summary.item_count
        ));
        Ok(summary)
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
    use num_traits::Zero;
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

    fn use_case() -> GetCartUseCaseImpl {
        let items = [("1", "79.99"), ("2", "199.99")]
            .into_iter()
            .map(|(id, price)| {
                Item::new(NewItemProps {
                    id: ItemId::new(id.parse().unwrap()),
                    name: format!("Gadget {}", id),
                    category: Category::new("Electronics"),
                    description: None,
                    price: Some(BigDecimal::from_str(price).unwrap()),
                    rating: None,
                    stock: 8,
                    kind: ItemKind::Product {
                        original_price: None,
                        reviews: 0,
                        on_sale: false,
                    },
                })
                .unwrap()
            })
            .collect();
        let catalog = Arc::new(CatalogStore::new(vec![], items).unwrap());
        let mut logger = MockLog::new();
        logger.expect_debug().returning(|_| ());

        GetCartUseCaseImpl {
            ledger: Arc::new(Mutex::new(CartLedger::new(catalog, Arc::new(Discard)))),
            logger: Arc::new(logger),
        }
    }

    #[tokio::test]
    async fn should_return_empty_summary_for_new_session() {
        let use_case = use_case();

        let summary = use_case.execute().await.unwrap();

        assert!(summary.lines.is_empty());
        assert_eq!(summary.total, BigDecimal::zero());
        assert_eq!(summary.item_count, 0);
    }

    #[tokio::test]
    async fn should_reflect_ledger_contents() {
        let use_case = use_case();
        {
            let mut ledger = use_case.ledger.lock().unwrap();
            ledger.add(ItemId::new(2)).unwrap();
            ledger.set_quantity(ItemId::new(1), 3).unwrap();
        }

        let summary = use_case.execute().await.unwrap();

        let names: Vec<&str> = summary.lines.iter().map(|l| l.name.as_str()).collect();
        assert_eq!(names, vec!["Gadget 2", "Gadget 1"]);
        assert_eq!(summary.total, BigDecimal::from_str("439.96").unwrap());
        assert_eq!(summary.item_count, 4);
    }
}
