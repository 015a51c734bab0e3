//! brickset: a read-only repository of LEGO sets
//!
//! This crate loads a Brickset JSON export into memory once and
//! answers aggregate queries over it: counting, filtering, grouping
//! and partitioning the sets.

pub mod core;
pub mod storage;
pub mod ql;
pub mod demo;
pub mod lego_set_repository;

pub use crate::core::lego_set::{LegoSet, PackagingType};
pub use crate::core::repository::Repository;
pub use crate::core::errors::{Result, RepositoryError};
pub use crate::lego_set_repository::{LegoSetRepository, DEFAULT_RESOURCE};
pub use crate::ql::{Query, QueryResult};
pub use crate::storage::{JsonRepository, MemoryRepository};
