pub mod request_id;
pub mod error_handling;

pub use request_id::*;
pub use error_handling::*;
