use std::sync::{Arc, PoisonError};

use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::SharedCartLedger;
use crate::domain::cart::summary::CartSummary;
use crate::domain::cart::use_cases::add::{AddToCartParams, AddToCartUseCase};
use crate::domain::logger::Logger;

pub struct AddToCartUseCaseImpl {
    pub ledger: SharedCartLedger,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl AddToCartUseCase for AddToCartUseCaseImpl {
    async fn execute(&self, params: AddToCartParams) -> Result<CartSummary, CartError> {
        self.logger
            .info(&format!("Adding item {} to cart", params.item_id));

        let mut ledger = self.ledger.lock().unwrap_or_else(PoisonError::into_inner);
        match ledger.add(params.item_id) {
            Ok(quantity) => {
                self.logger.info(&format!(
                    "Item {} now in cart with quantity {}",
                    params.item_id, quantity
                ));
                Ok(CartSummary::from_ledger(&ledger))
            }
            Err(err) => {
                self.logger.warn(&format!(
                    "Rejected add of item {}: {}",
                    params.item_id, err
                ));
                Err(err)
            }
        }
    }
}
