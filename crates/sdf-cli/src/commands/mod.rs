pub mod build;
pub mod dispatch;
pub mod enrich;
pub mod extract;
pub mod extract_all;
pub mod schema;
