pub mod error;
pub mod gateway;
pub mod models;

pub use error::{GatewayError, GatewayErrorKind, GatewayOperation};
pub use gateway::{stream_url, LibraryClient};
pub use models::*;
