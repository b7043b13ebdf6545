//! Case-insensitive substring filtering over already-fetched rows.

/// A row that can be matched against a free-text filter.
pub trait Searchable {
    /// The displayed string fields the filter looks at. `None` counts as an
    /// empty string.
    fn search_fields(&self) -> Vec<Option<&str>>;
}

/// Whether any search field of `item` contains `term`, ignoring case.
/// An empty term matches every row.
pub fn matches_term<T: Searchable + ?Sized>(item: &T, term: &str) -> bool {
    let needle = term.to_lowercase();
    item.search_fields()
        .into_iter()
        .any(|field| field.unwrap_or("").to_lowercase().contains(&needle))
}

/// Rows of `items` matching `term`, in their original order.
pub fn filter_items<'a, T: Searchable>(items: &'a [T], term: &str) -> Vec<&'a T> {
    items.iter().filter(|item| matches_term(*item, term)).collect()
}

/// Pick the empty-table message depending on whether a filter is active.
pub fn empty_state_message<'a>(term: &str, when_filtered: &'a str, when_unfiltered: &'a str) -> &'a str {
    if term.is_empty() {
        when_unfiltered
    } else {
        when_filtered
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Row {
        name: &'static str,
        code: Option<&'static str>,
    }

    impl Searchable for Row {
        fn search_fields(&self) -> Vec<Option<&str>> {
            vec![Some(self.name), self.code]
        }
    }

    fn rows() -> Vec<Row> {
        vec![
            Row { name: "Juan Pérez", code: Some("SKY-001") },
            Row { name: "María López", code: None },
            Row { name: "Pedro Vaca", code: Some("sky-777") },
        ]
    }

    #[test]
    fn match_ignores_case() {
        let rows = rows();
        let hits = filter_items(&rows, "SKY");
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].name, "Juan Pérez");
        assert_eq!(hits[1].name, "Pedro Vaca");
    }

    #[test]
    fn empty_term_matches_all() {
        let rows = rows();
        assert_eq!(filter_items(&rows, "").len(), 3);
    }

    #[test]
    fn missing_field_counts_as_empty() {
        let rows = rows();
        let hits = filter_items(&rows, "lópez");
        assert_eq!(hits.len(), 1);
    }

    #[test]
    fn empty_state_depends_on_term() {
        assert_eq!(empty_state_message("", "none found", "no rows"), "no rows");
        assert_eq!(empty_state_message("x", "none found", "no rows"), "none found");
    }
}
