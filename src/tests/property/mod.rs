//! Property-based tests using proptest.

mod pagination_props;
mod record_query_props;
