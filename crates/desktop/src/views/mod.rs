pub mod listing_view;
pub mod query_view;
