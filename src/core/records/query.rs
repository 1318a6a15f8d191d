//! Pure derivations over the view state: filtering, paging and the choice
//! of which rows the table body shows.

use super::model::Record;
use super::pagination::PageSize;
use super::state::ViewState;

/// Records whose name contains `query`, ignoring case, in original order.
pub fn filter_records<'a>(records: &'a [Record], query: &str) -> Vec<&'a Record> {
    records.iter().filter(|r| r.name_contains(query)).collect()
}

/// The slice of `records` shown on `page`, clipped to the list bounds.
pub fn page_slice(records: &[Record], page: usize, page_size: PageSize) -> &[Record] {
    match page_size {
        PageSize::All => records,
        PageSize::Rows(n) => {
            let start = page.saturating_mul(n).min(records.len());
            let end = start.saturating_add(n).min(records.len());
            &records[start..end]
        }
    }
}

/// What the table body displays.
#[derive(Debug, PartialEq)]
pub enum TableBody<'a> {
    /// Fetch in flight; a single progress row.
    Loading,
    /// Query active: every match, pagination ignored.
    Filtered(Vec<&'a Record>),
    /// No query: one page of the full list.
    Paged(&'a [Record]),
}

impl<'a> TableBody<'a> {
    /// Rows in display order. Empty while loading.
    pub fn rows(&self) -> Vec<&'a Record> {
        match self {
            TableBody::Loading => Vec::new(),
            TableBody::Filtered(rows) => rows.clone(),
            TableBody::Paged(rows) => rows.iter().collect(),
        }
    }
}

/// Select the body mode: loading first, then query emptiness.
pub fn table_body(state: &ViewState) -> TableBody<'_> {
    if state.is_loading() {
        TableBody::Loading
    } else if !state.query().is_empty() {
        TableBody::Filtered(filter_records(state.records(), state.query()))
    } else {
        TableBody::Paged(page_slice(state.records(), state.page(), state.page_size()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seven() -> Vec<Record> {
        [
            "Bulbasaur",
            "Ivysaur",
            "Venusaur",
            "Charmander",
            "Charmeleon",
            "Charizard",
            "Squirtle",
        ]
        .iter()
        .enumerate()
        .map(|(i, name)| Record::new(i as i64 + 1, *name, &["Normal"], [10; 6]))
        .collect()
    }

    #[test]
    fn test_filter_matches_case_insensitive_in_order() {
        let records = seven();
        let names: Vec<&str> = filter_records(&records, "CHAR")
            .iter()
            .map(|r| r.name.as_str())
            .collect();
        assert_eq!(names, ["Charmander", "Charmeleon", "Charizard"]);
    }

    #[test]
    fn test_filter_empty_query_matches_everything() {
        let records = seven();
        assert_eq!(filter_records(&records, "").len(), 7);
    }

    #[test]
    fn test_second_page_of_seven() {
        let records = seven();
        let page = page_slice(&records, 1, PageSize::Rows(5));
        assert_eq!(page.len(), 2);
        assert_eq!(page[0].name, "Charizard");
        assert_eq!(page[1].name, "Squirtle");
    }

    #[test]
    fn test_page_past_end_is_empty() {
        let records = seven();
        assert!(page_slice(&records, 2, PageSize::Rows(5)).is_empty());
        assert!(page_slice(&records, usize::MAX, PageSize::Rows(25)).is_empty());
    }

    #[test]
    fn test_page_size_all_ignores_page() {
        let records = seven();
        assert_eq!(page_slice(&records, 3, PageSize::All).len(), 7);
    }

    #[test]
    fn test_body_loading_wins() {
        let mut state = ViewState::new();
        state.set_list(seven());
        state.set_query("char");
        state.set_loading(true);
        assert_eq!(table_body(&state), TableBody::Loading);
        assert!(table_body(&state).rows().is_empty());
    }

    #[test]
    fn test_body_filtered_ignores_pagination() {
        let mut state = ViewState::new();
        state.set_list(seven());
        state.set_page(1);
        state.set_query("saur");
        let rows = table_body(&state).rows().len();
        assert_eq!(rows, 3);
    }

    #[test]
    fn test_body_rows_outlive_body() {
        let mut state = ViewState::new();
        state.set_list(seven());
        let rows = table_body(&state).rows();
        assert_eq!(rows.len(), 5);
        assert_eq!(rows[4].name, "Charmeleon");
    }

    #[test]
    fn test_body_paged_without_query() {
        let mut state = ViewState::new();
        state.set_list(seven());
        state.set_page(1);
        match table_body(&state) {
            TableBody::Paged(rows) => assert_eq!(rows.len(), 2),
            other => panic!("expected paged body, got {other:?}"),
        }
    }

    #[test]
    fn test_pikachu_scenario() {
        let mut state = ViewState::new();
        state.set_list(vec![Record::new(1, "Pikachu", &["Electric"], [35, 55, 40, 50, 50, 90])]);
        state.set_query("pika");
        let rows = table_body(&state).rows();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].total(), Some(320.0));
    }
}
