pub mod constants;
pub mod subprocess;
