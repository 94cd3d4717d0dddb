pub mod client;
pub mod contact_sender;
pub mod disabled;
