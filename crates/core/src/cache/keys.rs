/// Returns the cache key for the restaurant managed by the signed-in user.
///
/// The store profile editor reads and optimistically writes this key.
pub fn managed_restaurant_key() -> String {
    "managed-restaurant".to_string()
}

/// Returns the cache key for the month orders amount dashboard metric.
pub fn month_orders_amount_key() -> String {
    "metrics:month-orders-amount".to_string()
}
