use std::sync::{Arc, Mutex};

use emailjs::client::EmailJsClient;
use emailjs::contact_sender::EmailJsContactSender;
use emailjs::disabled::DisabledContactSender;
use logger::TracingLogger;
use notifier::queue::QueuedNotifier;
use seed::catalog::source::JsonCatalogSource;

use business::application::cart::add::AddToCartUseCaseImpl;
use business::application::cart::clear::ClearCartUseCaseImpl;
use business::application::cart::get::GetCartUseCaseImpl;
use business::application::cart::remove::RemoveFromCartUseCaseImpl;
use business::application::cart::set_quantity::SetCartQuantityUseCaseImpl;
use business::application::catalog::directory::GetCatalogDirectoryUseCaseImpl;
use business::application::catalog::filter::FilterCatalogUseCaseImpl;
use business::application::catalog::get_by_id::GetItemByIdUseCaseImpl;
use business::application::catalog::list_categories::ListCategoriesUseCaseImpl;
use business::application::contact::submit::SubmitContactMessageUseCaseImpl;
use business::application::wishlist::get::GetWishlistUseCaseImpl;
use business::application::wishlist::toggle::ToggleWishlistUseCaseImpl;
use business::domain::cart::model::CartLedger;
use business::domain::catalog::repository::CatalogSource;
use business::domain::catalog::store::CatalogStore;
use business::domain::contact::services::ContactMessageSender;
use business::domain::logger::Logger;
use business::domain::wishlist::model::Wishlist;

use crate::api::catalog::routes::CatalogHandlers;
use crate::config::app_config::AppConfig;

pub struct DependencyContainer {
    pub health_api: crate::api::health::routes::Api,
    pub shop_api: crate::api::catalog::routes::ShopApi,
    pub toolkit_api: crate::api::catalog::routes::ToolkitApi,
    pub cart_api: crate::api::cart::routes::CartApi,
    pub wishlist_api: crate::api::wishlist::routes::WishlistApi,
    pub contact_api: crate::api::contact::routes::ContactApi,
    pub notification_api: crate::api::notifications::routes::NotificationApi,
}

impl DependencyContainer {
    pub async fn new(config: &AppConfig) -> anyhow::Result<Self> {
        let logger: Arc<dyn Logger> = Arc::new(TracingLogger);
        let health_api = crate::api::health::routes::Api::new();

        // Infrastructure adapters
        let notifications = Arc::new(QueuedNotifier::new(config.notifications.capacity));

        let shop_source = JsonCatalogSource::from_optional_path(
            JsonCatalogSource::shop(),
            config.catalog.shop_path.clone(),
        );
        let toolkit_source = JsonCatalogSource::from_optional_path(
            JsonCatalogSource::toolkit(),
            config.catalog.toolkit_path.clone(),
        );
        let shop = Arc::new(load_catalog(&shop_source).await?);
        let toolkit = Arc::new(load_catalog(&toolkit_source).await?);

        let sender: Arc<dyn ContactMessageSender> = match &config.emailjs {
            Some(account) => Arc::new(EmailJsContactSender::new(
                EmailJsClient::new(),
                account.clone(),
            )),
            None => {
                logger.warn("EmailJS is not configured, the contact form is disabled");
                Arc::new(DisabledContactSender)
            }
        };

        // Session state
        let ledger = Arc::new(Mutex::new(CartLedger::new(
            shop.clone(),
            notifications.clone(),
        )));
        let wishlist = Arc::new(Mutex::new(Wishlist::new(
            shop.clone(),
            notifications.clone(),
        )));

        // Catalog use cases
        let shop_api = crate::api::catalog::routes::ShopApi::new(catalog_handlers(
            shop,
            logger.clone(),
        ));
        let toolkit_directory_use_case = Arc::new(GetCatalogDirectoryUseCaseImpl {
            catalog: toolkit.clone(),
            logger: logger.clone(),
        });
        let toolkit_api = crate::api::catalog::routes::ToolkitApi::new(
            catalog_handlers(toolkit, logger.clone()),
            toolkit_directory_use_case,
        );

        // Cart use cases
        let get_cart_use_case = Arc::new(GetCartUseCaseImpl {
            ledger: ledger.clone(),
            logger: logger.clone(),
        });
        let add_to_cart_use_case = Arc::new(AddToCartUseCaseImpl {
            ledger: ledger.clone(),
            logger: logger.clone(),
        });
        let set_quantity_use_case = Arc::new(SetCartQuantityUseCaseImpl {
            ledger: ledger.clone(),
            logger: logger.clone(),
        });
        let remove_from_cart_use_case = Arc::new(RemoveFromCartUseCaseImpl {
            ledger: ledger.clone(),
            logger: logger.clone(),
        });
        let clear_cart_use_case = Arc::new(ClearCartUseCaseImpl {
            ledger,
            logger: logger.clone(),
        });

        // Wishlist use cases
        let get_wishlist_use_case = Arc::new(GetWishlistUseCaseImpl {
            wishlist: wishlist.clone(),
            logger: logger.clone(),
        });
        let toggle_wishlist_use_case = Arc::new(ToggleWishlistUseCaseImpl {
            wishlist,
            logger: logger.clone(),
        });

        // Contact use case
        let submit_contact_use_case = Arc::new(SubmitContactMessageUseCaseImpl {
            sender,
            notifier: notifications.clone(),
            logger,
        });

        let cart_api = crate::api::cart::routes::CartApi::new(
            get_cart_use_case,
            add_to_cart_use_case,
            set_quantity_use_case,
            remove_from_cart_use_case,
            clear_cart_use_case,
        );

        let wishlist_api = crate::api::wishlist::routes::WishlistApi::new(
            get_wishlist_use_case,
            toggle_wishlist_use_case,
        );

        let contact_api = crate::api::contact::routes::ContactApi::new(submit_contact_use_case);

        let notification_api =
            crate::api::notifications::routes::NotificationApi::new(notifications);

        Ok(Self {
            health_api,
            shop_api,
            toolkit_api,
            cart_api,
            wishlist_api,
            contact_api,
            notification_api,
        })
    }
}

async fn load_catalog(source: &JsonCatalogSource) -> anyhow::Result<CatalogStore> {
    let payload = source.load().await?;
    let store = CatalogStore::from_payload(payload)?;
    tracing::info!(
        catalog = source.name(),
        items = store.len(),
        categories = store.categories().len(),
        "Catalog loaded"
    );
    Ok(store)
}

fn catalog_handlers(catalog: Arc<CatalogStore>, logger: Arc<dyn Logger>) -> CatalogHandlers {
    CatalogHandlers::new(
        Arc::new(FilterCatalogUseCaseImpl {
            catalog: catalog.clone(),
            logger: logger.clone(),
        }),
        Arc::new(GetItemByIdUseCaseImpl {
            catalog: catalog.clone(),
            logger: logger.clone(),
        }),
        Arc::new(ListCategoriesUseCaseImpl { catalog, logger }),
    )
}
