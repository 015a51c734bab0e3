pub mod demo;
pub mod query;
pub mod stats;
