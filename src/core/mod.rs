pub mod errors;
pub mod lego_set;
pub mod repository;


pub use errors::{Result, RepositoryError};
pub use lego_set::{LegoSet, PackagingType};
pub use repository::Repository;
