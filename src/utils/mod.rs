pub mod error;
pub mod logging;

pub use error::*;
pub use hubspot::transport::truncate_safe;
