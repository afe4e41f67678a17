pub mod metadata_store;
pub mod parameter_service;
pub mod secret_service;

pub use metadata_store::*;
pub use parameter_service::*;
pub use secret_service::*;
