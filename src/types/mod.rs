pub mod dataset;
pub mod partition;
pub mod row;
pub mod search_result;
pub mod year;
