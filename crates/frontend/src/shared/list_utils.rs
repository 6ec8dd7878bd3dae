/// List helpers shared by catalog and back-office tables (search, sort).
use std::cmp::Ordering;

/// Types that can be matched against a free-text search box.
pub trait Searchable {
    fn matches_filter(&self, filter: &str) -> bool;
}

/// Types sortable by a named column.
pub trait Sortable {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering;
}

/// Sort a list in place by the given field.
pub fn sort_list<T: Sortable>(items: &mut [T], field: &str, ascending: bool) {
    items.sort_by(|a, b| {
        let cmp = a.compare_by_field(b, field);
        if ascending {
            cmp
        } else {
            cmp.reverse()
        }
    });
}

/// Keep only items matching the filter. Filters shorter than 2 characters
/// are treated as "no filter" to avoid flashing huge result churn per
/// keystroke.
pub fn filter_list<T: Searchable + Clone>(items: Vec<T>, filter: &str) -> Vec<T> {
    if filter.trim().len() < 2 {
        return items;
    }
    items
        .into_iter()
        .filter(|item| item.matches_filter(filter))
        .collect()
}

/// Sort indicator for a column header.
pub fn get_sort_indicator(current_field: &str, field: &str, ascending: bool) -> &'static str {
    if current_field == field {
        if ascending {
            " ▲"
        } else {
            " ▼"
        }
    } else {
        " ⇅"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    struct Row {
        name: String,
        price: f64,
    }

    impl Searchable for Row {
        fn matches_filter(&self, filter: &str) -> bool {
            self.name.to_lowercase().contains(&filter.to_lowercase())
        }
    }

    impl Sortable for Row {
        fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
            match field {
                "price" => self
                    .price
                    .partial_cmp(&other.price)
                    .unwrap_or(Ordering::Equal),
                _ => self.name.cmp(&other.name),
            }
        }
    }

    fn rows() -> Vec<Row> {
        vec![
            Row { name: "Denim jacket".into(), price: 40.0 },
            Row { name: "Leather boots".into(), price: 25.0 },
            Row { name: "Wool coat".into(), price: 80.0 },
        ]
    }

    #[test]
    fn test_sort_descending() {
        let mut items = rows();
        sort_list(&mut items, "price", false);
        assert_eq!(items[0].name, "Wool coat");
        assert_eq!(items[2].name, "Leather boots");
    }

    #[test]
    fn test_filter_short_query_is_noop() {
        assert_eq!(filter_list(rows(), "d").len(), 3);
        assert_eq!(filter_list(rows(), "denim").len(), 1);
    }
}
