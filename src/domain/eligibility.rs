use chrono::{DateTime, Duration, Utc};

use super::errors::DomainError;
use super::returns::{OrderView, ReturnLineInput};

/// Orders older than this many days cannot be returned through self-service.
pub const RETURN_WINDOW_DAYS: i64 = 90;

/// Why a submission was refused. First rule violation wins; a single
/// ineligible line voids the whole request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    OutsideReturnWindow,
    ItemNotFound { order_item_id: i64 },
    IneligibleCategory { product_name: String },
    QuantityExceedsPurchase { product_name: String },
}

impl From<Rejection> for DomainError {
    fn from(r: Rejection) -> Self {
        match r {
            Rejection::OutsideReturnWindow => {
                DomainError::Ineligible("Order is outside return policy timeframe".to_string())
            }
            Rejection::ItemNotFound { .. } => DomainError::NotFound("Order item"),
            Rejection::IneligibleCategory { product_name } => DomainError::Ineligible(format!(
                "Item is not eligible for self-service return: {product_name}"
            )),
            Rejection::QuantityExceedsPurchase { product_name } => DomainError::Ineligible(
                format!("Return quantity exceeds purchased quantity for item: {product_name}"),
            ),
        }
    }
}

/// Decide whether the requested lines may be returned against `order`.
///
/// Pure and fail-fast, rules in fixed order: the 90-day window on the order,
/// then per line existence, large/hazardous category, and quantity against
/// the purchased amount. The quantity check is per submission only; prior
/// approved returns on the same order item are not aggregated.
pub fn validate(
    order: &OrderView,
    requested: &[ReturnLineInput],
    now: DateTime<Utc>,
) -> Result<(), Rejection> {
    let cutoff = now - Duration::days(RETURN_WINDOW_DAYS);
    if order.order_date < cutoff {
        return Err(Rejection::OutsideReturnWindow);
    }

    for line in requested {
        let item = order
            .items
            .iter()
            .find(|i| i.id == line.order_item_id)
            .ok_or(Rejection::ItemNotFound {
                order_item_id: line.order_item_id,
            })?;

        if item.is_large_item || item.is_hazardous {
            return Err(Rejection::IneligibleCategory {
                product_name: item.product_name.clone(),
            });
        }

        if line.quantity_to_return > item.quantity {
            return Err(Rejection::QuantityExceedsPurchase {
                product_name: item.product_name.clone(),
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::returns::OrderItemView;
    use bigdecimal::BigDecimal;
    use chrono::Duration;
    use std::str::FromStr;

    fn item(id: i64, quantity: i32, large: bool, hazardous: bool) -> OrderItemView {
        OrderItemView {
            id,
            product_id: format!("PROD{id:03}"),
            product_name: format!("Product {id}"),
            quantity,
            unit_price: BigDecimal::from_str("19.99").unwrap(),
            is_large_item: large,
            is_hazardous: hazardous,
        }
    }

    fn order(age_days: i64, items: Vec<OrderItemView>) -> OrderView {
        OrderView {
            id: 1,
            order_number: "ORD-2024-001".to_string(),
            customer_id: 1,
            status: "COMPLETED".to_string(),
            order_date: Utc::now() - Duration::days(age_days),
            items,
        }
    }

    fn line(order_item_id: i64, quantity: i32) -> ReturnLineInput {
        ReturnLineInput {
            order_item_id,
            quantity_to_return: quantity,
            condition: None,
            notes: None,
        }
    }

    #[test]
    fn eligible_order_passes() {
        let order = order(5, vec![item(1, 2, false, false)]);
        assert_eq!(validate(&order, &[line(1, 1)], Utc::now()), Ok(()));
    }

    #[test]
    fn order_outside_window_is_rejected() {
        let order = order(95, vec![item(1, 2, false, false)]);
        assert_eq!(
            validate(&order, &[line(1, 1)], Utc::now()),
            Err(Rejection::OutsideReturnWindow)
        );
    }

    #[test]
    fn window_rejection_wins_over_item_rules() {
        // An old order is refused before any per-line rule runs, even when a
        // line is also ineligible on category grounds.
        let order = order(120, vec![item(1, 1, true, false)]);
        assert_eq!(
            validate(&order, &[line(1, 5)], Utc::now()),
            Err(Rejection::OutsideReturnWindow)
        );
    }

    #[test]
    fn unknown_order_item_is_rejected() {
        let order = order(5, vec![item(1, 2, false, false)]);
        assert_eq!(
            validate(&order, &[line(99, 1)], Utc::now()),
            Err(Rejection::ItemNotFound { order_item_id: 99 })
        );
    }

    #[test]
    fn large_item_is_rejected() {
        let order = order(5, vec![item(1, 1, true, false)]);
        let err = validate(&order, &[line(1, 1)], Utc::now()).unwrap_err();
        assert!(matches!(err, Rejection::IneligibleCategory { .. }));
    }

    #[test]
    fn hazardous_item_is_rejected() {
        let order = order(5, vec![item(1, 1, false, true)]);
        let err = validate(&order, &[line(1, 1)], Utc::now()).unwrap_err();
        assert!(matches!(err, Rejection::IneligibleCategory { .. }));
    }

    #[test]
    fn excess_quantity_is_rejected() {
        let order = order(5, vec![item(1, 2, false, false)]);
        let err = validate(&order, &[line(1, 3)], Utc::now()).unwrap_err();
        assert!(matches!(err, Rejection::QuantityExceedsPurchase { .. }));
    }

    #[test]
    fn one_bad_line_voids_the_request() {
        let order = order(5, vec![item(1, 2, false, false), item(2, 1, false, true)]);
        let err = validate(&order, &[line(1, 1), line(2, 1)], Utc::now()).unwrap_err();
        assert!(matches!(err, Rejection::IneligibleCategory { .. }));
    }

    #[test]
    fn category_checked_before_quantity() {
        let order = order(5, vec![item(1, 1, true, false)]);
        // Both category and quantity violated; category rule fires first.
        let err = validate(&order, &[line(1, 5)], Utc::now()).unwrap_err();
        assert!(matches!(err, Rejection::IneligibleCategory { .. }));
    }

    #[test]
    fn rejection_messages_match_policy_wording() {
        let err: DomainError = Rejection::OutsideReturnWindow.into();
        assert!(err.to_string().contains("return policy timeframe"));

        let err: DomainError = Rejection::IneligibleCategory {
            product_name: "Lawn Mower".to_string(),
        }
        .into();
        assert!(err
            .to_string()
            .contains("not eligible for self-service return: Lawn Mower"));

        let err: DomainError = Rejection::QuantityExceedsPurchase {
            product_name: "Safety Glasses".to_string(),
        }
        .into();
        assert!(err
            .to_string()
            .contains("Return quantity exceeds purchased quantity"));
    }
}
