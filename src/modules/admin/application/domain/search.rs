use super::entity::AdminEntity;

/// Case-insensitive substring match of `query` against the entity's
/// searchable fields. An empty query keeps everything, in order.
pub fn filter<'a, E: AdminEntity>(items: &'a [E], query: &str) -> Vec<&'a E> {
    let needle = query.to_lowercase();
    if needle.is_empty() {
        return items.iter().collect();
    }

    items
        .iter()
        .filter(|item| {
            item.search_fields()
                .iter()
                .any(|field| field.to_lowercase().contains(&needle))
        })
        .collect()
}

/// Filtered and put in the entity's display order.
pub fn display<'a, E: AdminEntity>(items: &'a [E], query: &str) -> Vec<&'a E> {
    let mut shown = filter(items, query);
    E::display_order(&mut shown);
    shown
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::support::fixtures::{note, notes};

    fn titles<'a>(items: &[&'a crate::tests::support::fixtures::Note]) -> Vec<&'a str> {
        items.iter().map(|n| n.title.as_str()).collect()
    }

    #[test]
    fn empty_query_keeps_everything_in_order() {
        let items = notes();
        assert_eq!(titles(&filter(&items, "")), vec!["Alpha", "Beta", "Gamma"]);
    }

    #[test]
    fn match_ignores_case() {
        let items = notes();
        assert_eq!(titles(&filter(&items, "GAM")), vec!["Gamma"]);
        assert_eq!(titles(&filter(&items, "a")), vec!["Alpha", "Beta", "Gamma"]);
    }

    #[test]
    fn no_match_is_empty_and_list_untouched() {
        let items = vec![note("1", "Alpha")];
        assert!(filter(&items, "zeta").is_empty());
        assert_eq!(items, vec![note("1", "Alpha")]);
    }

    #[test]
    fn filtering_twice_changes_nothing() {
        let items = notes();
        for query in ["", "a", "ET", "zeta"] {
            let once: Vec<_> = filter(&items, query).into_iter().cloned().collect();
            let twice = filter(&once, query);
            assert_eq!(titles(&twice), titles(&filter(&items, query)), "{query:?}");
        }
    }
}
