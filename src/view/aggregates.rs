use crate::models::InventoryItem;
use serde::Serialize;

/// Number of entries shown in the "top items" chart.
pub const TOP_ITEMS: usize = 5;

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct TopItem {
    pub name: String,
    pub value: f64,
}

pub fn total_value(items: &[InventoryItem]) -> f64 {
    items.iter().map(InventoryItem::value).sum()
}

/// The `n` most valuable items, most valuable first. Equal values are ordered by id.
pub fn top_items(items: &[InventoryItem], n: usize) -> Vec<TopItem> {
    let mut ranked: Vec<&InventoryItem> = items.iter().collect();
    ranked.sort_by(|a, b| b.value().total_cmp(&a.value()).then_with(|| a.id.cmp(&b.id)));

    ranked
        .into_iter()
        .take(n)
        .map(|item| TopItem {
            name: item.name.clone(),
            value: item.value(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use uuid::Uuid;

    fn item(name: &str, quantity: i64, price: f64) -> InventoryItem {
        InventoryItem {
            id: Uuid::new_v4(),
            name: name.to_owned(),
            description: String::new(),
            quantity,
            price,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn total_value_of_nothing_is_zero() {
        assert_eq!(total_value(&[]), 0.0);
    }

    #[test]
    fn total_value_sums_quantity_times_price() {
        let items = vec![item("a", 2, 3.0), item("b", 1, 5.0)];
        assert_eq!(total_value(&items), 11.0);
    }

    #[test]
    fn total_value_counts_negative_entries() {
        let items = vec![item("a", 2, 3.0), item("refund", -1, 5.0)];
        assert_eq!(total_value(&items), 1.0);
    }

    #[test]
    fn top_items_of_nothing_is_empty() {
        assert!(top_items(&[], TOP_ITEMS).is_empty());
    }

    #[test]
    fn top_items_keeps_five_most_valuable_in_order() {
        let items = vec![
            item("a", 1, 1.0),
            item("b", 10, 1.0),
            item("c", 3, 1.0),
            item("d", 2, 4.0),
            item("e", 7, 1.0),
            item("f", 1, 6.0),
            item("g", 5, 1.0),
        ];

        let top = top_items(&items, TOP_ITEMS);
        let names: Vec<&str> = top.iter().map(|t| t.name.as_str()).collect();

        assert_eq!(names, vec!["b", "d", "e", "f", "g"]);
        assert_eq!(top[0].value, 10.0);
        assert!(top.windows(2).all(|w| w[0].value >= w[1].value));
    }

    #[test]
    fn top_items_breaks_ties_by_id() {
        let mut first = item("first", 2, 2.0);
        let mut second = item("second", 4, 1.0);
        first.id = Uuid::from_u128(1);
        second.id = Uuid::from_u128(2);

        let top = top_items(&[second, first], TOP_ITEMS);
        let names: Vec<&str> = top.iter().map(|t| t.name.as_str()).collect();

        assert_eq!(names, vec!["first", "second"]);
    }

    #[test]
    fn top_items_does_not_reorder_input() {
        let items = vec![item("low", 1, 1.0), item("high", 9, 9.0)];
        top_items(&items, TOP_ITEMS);
        assert_eq!(items[0].name, "low");
    }
}
