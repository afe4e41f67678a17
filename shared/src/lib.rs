pub mod models;
pub mod services;
pub mod errors;
pub mod naming;
pub mod notifier;

pub use models::*;
pub use services::*;
pub use errors::*;
pub use naming::*;
pub use notifier::*;
