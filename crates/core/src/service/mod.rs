mod error;
mod traits;

pub use error::{ApiError, Result};
pub use traits::ProfileService;
