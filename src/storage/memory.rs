//! In-memory repository for brickset
//!
//! This module provides a repository backed by a plain vector,
//! used for fixtures and for collections built in code.

use crate::core::repository::Repository;

/// A repository holding its records in memory
#[derive(Debug, Clone, PartialEq)]
pub struct MemoryRepository<T> {
    /// Records in insertion order
    records: Vec<T>,
}

impl<T> MemoryRepository<T> {
    /// Create a new empty repository
    pub fn new() -> Self {
        MemoryRepository {
            records: Vec::new(),
        }
    }

    /// Take the records back out
    pub fn into_inner(self) -> Vec<T> {
        self.records
    }
}

impl<T> Default for MemoryRepository<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<Vec<T>> for MemoryRepository<T> {
    fn from(records: Vec<T>) -> Self {
        MemoryRepository { records }
    }
}

impl<T> FromIterator<T> for MemoryRepository<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        MemoryRepository {
            records: iter.into_iter().collect(),
        }
    }
}

impl<T: Send + Sync> Repository<T> for MemoryRepository<T> {
    fn get_all(&self) -> &[T] {
        &self.records
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_repository_keeps_order_and_duplicates() {
        let repo: MemoryRepository<&str> = vec!["b", "a", "b"].into();

        assert_eq!(repo.get_all(), &["b", "a", "b"]);
        assert_eq!(repo.count(), 3);
        assert!(!repo.is_empty());
    }

    #[test]
    fn test_empty_memory_repository() {
        let repo: MemoryRepository<u32> = MemoryRepository::new();

        assert!(repo.is_empty());
        assert_eq!(repo.count(), 0);

        let collected: MemoryRepository<u32> = (1..=3).collect();
        assert_eq!(collected.into_inner(), vec![1, 2, 3]);
    }
}
