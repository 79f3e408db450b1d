pub mod query_worker;
