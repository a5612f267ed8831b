mod error;
mod keys;
mod serialization;
mod traits;

pub use error::{CacheError, Result};
pub use keys::{managed_restaurant_key, month_orders_amount_key};
pub use serialization::{decode, encode};
pub use traits::{CacheEvent, CachedValue, QueryCache};
