pub mod memory;
pub mod json;

pub use memory::MemoryRepository;
pub use json::{JsonRepository, bundled, load_json, resources_dir};
