pub mod query;
pub mod row;

pub use query::fetch_rows;
pub use row::map_row;
