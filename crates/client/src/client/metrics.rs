//! Dashboard metric operations.

use manageshop_core::restaurant::MonthOrdersAmount;

use super::ManageShopClient;
use crate::error::Result;

impl ManageShopClient {
    /// Get the number of orders this month and the change from last month.
    pub async fn month_orders_amount(&self) -> Result<MonthOrdersAmount> {
        let response = self
            .client
            .get(self.url("/metrics/month-orders-amount"))
            .send()
            .await?;
        self.handle_response(response).await
    }
}
