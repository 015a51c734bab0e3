/// Trait defining the single capability a record source offers:
/// handing out the whole, fully loaded collection in document order.
pub trait Repository<T>: Send + Sync {
    /// Get every record, in load order
    fn get_all(&self) -> &[T];

    /// Count the number of records
    fn count(&self) -> usize {
        self.get_all().len()
    }

    /// Check if the collection holds no record at all
    fn is_empty(&self) -> bool {
        self.get_all().is_empty()
    }
}
