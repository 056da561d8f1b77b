pub mod credentials;
pub mod signature;
pub mod store;
