pub mod batch;
pub mod curves;
pub mod score;
