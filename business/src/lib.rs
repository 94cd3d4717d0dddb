pub mod application {
    pub mod catalog {
        pub mod directory;
        pub mod filter;
        pub mod get_by_id;
        pub mod list_categories;
    }
    pub mod cart {
        pub mod add;
        pub mod clear;
        pub mod get;
        pub mod remove;
        pub mod set_quantity;
    }
    pub mod contact {
        pub mod submit;
    }
    pub mod wishlist {
        pub mod get;
        pub mod toggle;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod notifier;
    pub mod catalog {
        pub mod directory;
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod store;
        pub mod value_objects;
        pub mod use_cases {
            pub mod directory;
            pub mod filter;
            pub mod get_by_id;
            pub mod list_categories;
        }
    }
    pub mod cart {
        pub mod errors;
        pub mod model;
        pub mod summary;
        pub mod use_cases {
            pub mod add;
            pub mod clear;
            pub mod get;
            pub mod remove;
            pub mod set_quantity;
        }
    }
    pub mod contact {
        pub mod errors;
        pub mod model;
        pub mod services;
        pub mod use_cases {
            pub mod submit;
        }
    }
    pub mod wishlist {
        pub mod errors;
        pub mod model;
        pub mod use_cases {
            pub mod get;
            pub mod toggle;
        }
    }
}
