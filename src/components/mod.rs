pub mod button;
pub mod footer;
pub mod header;
pub mod output_box;
pub mod query_box;
