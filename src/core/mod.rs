pub mod error;
pub mod response;

pub use error::{AppError, Result};
pub use response::ApiResponse;
