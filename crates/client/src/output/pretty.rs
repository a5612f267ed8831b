//! Pretty output formatting.

use manageshop_core::restaurant::{ManagedRestaurant, MonthOrdersAmount};

/// Format the managed restaurant for display.
pub fn format_restaurant(restaurant: &ManagedRestaurant) -> String {
    let mut output = format!("{}\n  ID: {}", restaurant.name, restaurant.id);
    match &restaurant.description {
        Some(desc) => output.push_str(&format!("\n  Description: {}", desc)),
        None => output.push_str("\n  Description: (none)"),
    }
    if let Some(manager_id) = &restaurant.manager_id {
        output.push_str(&format!("\n  Manager: {}", manager_id));
    }
    if let Some(updated_at) = &restaurant.updated_at {
        output.push_str(&format!("\n  Updated: {}", updated_at.format("%Y-%m-%d %H:%M")));
    }
    output
}

/// Format the month orders amount card.
pub fn format_month_orders_amount(metric: &MonthOrdersAmount) -> String {
    format!(
        "Orders (month)\n  {}\n  {} compared to last month",
        metric.amount,
        metric.diff_label()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_restaurant_with_description() {
        let restaurant = ManagedRestaurant::new("r-1", "Cafe A")
            .with_description("Best coffee")
            .with_manager("m-1");
        assert_eq!(
            format_restaurant(&restaurant),
            "Cafe A\n  ID: r-1\n  Description: Best coffee\n  Manager: m-1"
        );
    }

    #[test]
    fn test_format_restaurant_without_description() {
        let restaurant = ManagedRestaurant::new("r-1", "Cafe A");
        assert_eq!(
            format_restaurant(&restaurant),
            "Cafe A\n  ID: r-1\n  Description: (none)"
        );
    }

    #[test]
    fn test_format_month_orders_amount() {
        let metric = MonthOrdersAmount {
            amount: 120,
            diff_from_last_month: -2.5,
        };
        assert_eq!(
            format_month_orders_amount(&metric),
            "Orders (month)\n  120\n  -2.5% compared to last month"
        );
    }
}
