pub mod crm;
pub mod health;
pub mod oauth;

pub use crm::*;
pub use health::*;
pub use oauth::*;
