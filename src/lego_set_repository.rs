//! Query engine over a loaded collection of LEGO sets
//!
//! Every query is a pure pass over the full collection. Nothing is
//! cached between calls and the collection is never modified.

use std::collections::{BTreeMap, BTreeSet};
use std::io::{self, Write};
use std::path::Path as StdPath;

use crate::core::errors::Result;
use crate::core::lego_set::{LegoSet, PackagingType};
use crate::core::repository::Repository;
use crate::storage::{JsonRepository, MemoryRepository};

/// Resource loaded when no data file is given
pub const DEFAULT_RESOURCE: &str = "brickset.json";

/// Read-only repository of LEGO sets answering aggregate queries
pub struct LegoSetRepository {
    repository: Box<dyn Repository<LegoSet>>,
}

impl LegoSetRepository {
    /// Load the bundled `brickset.json` resource
    pub fn new() -> Result<Self> {
        Self::from_resource(DEFAULT_RESOURCE)
    }

    /// Load a named resource, see [`JsonRepository::from_resource`]
    pub fn from_resource(name: &str) -> Result<Self> {
        Ok(Self::with_repository(JsonRepository::from_resource(name)?))
    }

    /// Load the JSON document at the given path
    pub fn open<P: AsRef<StdPath>>(path: P) -> Result<Self> {
        Ok(Self::with_repository(JsonRepository::open(path)?))
    }

    /// Wrap records that are already in memory
    pub fn in_memory(sets: Vec<LegoSet>) -> Self {
        Self::with_repository(MemoryRepository::from(sets))
    }

    /// Wrap any record source
    pub fn with_repository<R: Repository<LegoSet> + 'static>(repository: R) -> Self {
        LegoSetRepository {
            repository: Box::new(repository),
        }
    }

    /// All sets, in load order
    pub fn get_all(&self) -> &[LegoSet] {
        self.repository.get_all()
    }

    /// Number of sets in the collection
    pub fn len(&self) -> usize {
        self.repository.count()
    }

    pub fn is_empty(&self) -> bool {
        self.repository.is_empty()
    }

    /// Count the sets carrying the given tag
    ///
    /// Sets without a tag list never match.
    pub fn count_lego_sets_with_tag(&self, tag: &str) -> u64 {
        self.get_all()
            .iter()
            .filter(|set| set.has_tag(tag))
            .count() as u64
    }

    /// Check if at least one set is named exactly `name`
    ///
    /// `None` only matches sets without a name.
    pub fn name_exists(&self, name: Option<&str>) -> bool {
        self.get_all()
            .iter()
            .any(|set| set.name.as_deref() == name)
    }

    /// Every distinct tag, in descending lexicographic order
    pub fn tags_in_reverse_order(&self) -> Vec<String> {
        self.get_all()
            .iter()
            .filter_map(|set| set.tags.as_ref())
            .flatten()
            .map(String::as_str)
            .collect::<BTreeSet<&str>>()
            .into_iter()
            .rev()
            .map(str::to_string)
            .collect()
    }

    /// Write every distinct tag, one per line, in descending order
    pub fn print_tags_in_reverse_order<W: Write>(&self, out: &mut W) -> io::Result<()> {
        for tag in self.tags_in_reverse_order() {
            writeln!(out, "{}", tag)?;
        }
        Ok(())
    }

    /// Sum of the piece counts of all sets, as text
    pub fn sum_of_pieces(&self) -> String {
        self.get_all()
            .iter()
            .map(|set| u64::from(set.pieces))
            .sum::<u64>()
            .to_string()
    }

    /// Split the distinct piece counts around a threshold
    ///
    /// `true` holds the counts strictly greater than `threshold`, `false`
    /// the others. Both keys are always present and both lists ascend.
    pub fn pieces_bigger_than(&self, threshold: i64) -> BTreeMap<bool, Vec<u32>> {
        let (bigger, rest): (Vec<u32>, Vec<u32>) = self
            .get_all()
            .iter()
            .map(|set| set.pieces)
            .collect::<BTreeSet<u32>>()
            .into_iter()
            .partition(|&pieces| i64::from(pieces) > threshold);

        BTreeMap::from([(true, bigger), (false, rest)])
    }

    /// Number of sets per packaging type, sets without one are skipped
    pub fn collect_packaging_type(&self) -> BTreeMap<PackagingType, u64> {
        self.get_all()
            .iter()
            .filter_map(|set| set.packaging_type)
            .fold(BTreeMap::new(), |mut counts, packaging| {
                *counts.entry(packaging).or_insert(0) += 1;
                counts
            })
    }
}

impl std::fmt::Debug for LegoSetRepository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LegoSetRepository")
            .field("sets", &self.len())
            .finish()
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// The two-set collection used throughout the query tests
    pub(crate) fn sample_repository() -> LegoSetRepository {
        LegoSetRepository::in_memory(vec![
            LegoSet::new("1", 200)
                .with_name("Heart Box")
                .with_tags(["Microscale", "Holiday"])
                .with_packaging_type(PackagingType::Box),
            LegoSet::new("2", 300)
                .with_name("Tiny Car")
                .with_tags(["Microscale"]),
        ])
    }

    fn mixed_repository() -> LegoSetRepository {
        LegoSetRepository::in_memory(vec![
            LegoSet::new("10", 52).with_tags(["Space", "Microscale"]).with_packaging_type(PackagingType::Polybag),
            LegoSet::new("11", 1483).with_name("The White House").with_tags(["Microscale", "Landmark"]),
            LegoSet::new("12", 52).with_name("Lloyd").with_tags(Vec::<String>::new()).with_packaging_type(PackagingType::FoilPack),
            LegoSet::new("13", 0).with_name("Frame").with_packaging_type(PackagingType::Polybag),
            LegoSet::new("11", 1483).with_name("The White House").with_tags(["Microscale", "Landmark"]),
            LegoSet::new("14", 250).with_name("microscale").with_tags(["microscale"]).with_packaging_type(PackagingType::Box),
        ])
    }

    #[test]
    fn test_sample_scenario() {
        let repo = sample_repository();

        assert_eq!(repo.count_lego_sets_with_tag("Microscale"), 2);
        assert!(!repo.name_exists(Some("Heart")));
        assert_eq!(repo.tags_in_reverse_order(), vec!["Microscale", "Holiday"]);
        assert_eq!(repo.sum_of_pieces(), "500");
        assert_eq!(
            repo.pieces_bigger_than(250),
            BTreeMap::from([(true, vec![300]), (false, vec![200])])
        );
        assert_eq!(repo.collect_packaging_type(), BTreeMap::from([(PackagingType::Box, 1)]));
    }

    #[test]
    fn test_empty_collection() {
        let repo = LegoSetRepository::in_memory(Vec::new());
        let mut out = Vec::new();
        repo.print_tags_in_reverse_order(&mut out).unwrap();

        assert!(repo.is_empty());
        assert_eq!(repo.count_lego_sets_with_tag("Microscale"), 0);
        assert!(!repo.name_exists(Some("Heart")));
        assert!(!repo.name_exists(None));
        assert!(out.is_empty());
        assert_eq!(repo.sum_of_pieces(), "0");
        assert_eq!(
            repo.pieces_bigger_than(250),
            BTreeMap::from([(true, vec![]), (false, vec![])])
        );
        assert!(repo.collect_packaging_type().is_empty());
    }

    #[test]
    fn test_count_by_tag() {
        let repo = mixed_repository();

        assert_eq!(repo.count_lego_sets_with_tag("Microscale"), 3);
        assert_eq!(repo.count_lego_sets_with_tag("microscale"), 1);
        assert_eq!(repo.count_lego_sets_with_tag("Landmark"), 2);
        assert_eq!(repo.count_lego_sets_with_tag("Castle"), 0);
        assert_eq!(repo.count_lego_sets_with_tag(""), 0);

        for set in repo.get_all() {
            for tag in set.tags.iter().flatten() {
                assert!(repo.count_lego_sets_with_tag(tag) >= 1);
            }
        }
    }

    #[test]
    fn test_name_exists_is_exact_and_null_safe() {
        let repo = mixed_repository();

        assert!(repo.name_exists(Some("The White House")));
        assert!(!repo.name_exists(Some("White House")));
        assert!(!repo.name_exists(Some("the white house")));
        assert!(repo.name_exists(None));
        assert!(!sample_repository().name_exists(None));
    }

    #[test]
    fn test_tags_descending_are_distinct_and_complete() {
        let repo = mixed_repository();
        let tags = repo.tags_in_reverse_order();

        assert_eq!(tags, vec!["microscale", "Space", "Microscale", "Landmark"]);
        assert!(tags.windows(2).all(|pair| pair[0] > pair[1]));

        let union: BTreeSet<String> = repo
            .get_all()
            .iter()
            .filter_map(|set| set.tags.clone())
            .flatten()
            .collect();
        assert_eq!(tags.into_iter().collect::<BTreeSet<_>>(), union);
    }

    #[test]
    fn test_print_tags_writes_one_per_line() {
        let mut out = Vec::new();
        sample_repository().print_tags_in_reverse_order(&mut out).unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), "Microscale\nHoliday\n");

        let untagged = LegoSetRepository::in_memory(vec![LegoSet::new("1", 3), LegoSet::new("2", 4).with_tags(Vec::<String>::new())]);
        let mut out = Vec::new();
        untagged.print_tags_in_reverse_order(&mut out).unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn test_sum_of_pieces() {
        assert_eq!(mixed_repository().sum_of_pieces(), "3320");
        assert_eq!(LegoSetRepository::in_memory(vec![LegoSet::new("1", 42)]).sum_of_pieces(), "42");

        let huge = LegoSetRepository::in_memory(vec![LegoSet::new("1", u32::MAX), LegoSet::new("2", u32::MAX)]);
        assert_eq!(huge.sum_of_pieces(), (2 * u64::from(u32::MAX)).to_string());
    }

    #[test]
    fn test_null_piece_count_contributes_nothing() {
        let sets: JsonRepository<LegoSet> =
            r#"[{"number":"1","name":"Frame","pieces":null},{"number":"2","pieces":42}]"#.parse().unwrap();
        let repo = LegoSetRepository::with_repository(sets);

        assert_eq!(repo.len(), 2);
        assert_eq!(repo.sum_of_pieces(), "42");
        assert_eq!(repo.pieces_bigger_than(0), BTreeMap::from([(true, vec![42]), (false, vec![0])]));
    }

    #[test]
    fn test_partition_by_threshold() {
        let repo = mixed_repository();

        assert_eq!(
            repo.pieces_bigger_than(250),
            BTreeMap::from([(true, vec![1483]), (false, vec![0, 52, 250])])
        );
        assert_eq!(
            repo.pieces_bigger_than(-1),
            BTreeMap::from([(true, vec![0, 52, 250, 1483]), (false, vec![])])
        );
        assert_eq!(
            repo.pieces_bigger_than(i64::MAX),
            BTreeMap::from([(true, vec![]), (false, vec![0, 52, 250, 1483])])
        );

        for threshold in [-5, 0, 51, 52, 53, 1000, 2000] {
            let partition = repo.pieces_bigger_than(threshold);
            assert_eq!(partition.len(), 2);
            assert!(partition[&true].iter().all(|&p| i64::from(p) > threshold));
            assert!(partition[&false].iter().all(|&p| i64::from(p) <= threshold));

            let mut merged: Vec<u32> = partition[&false].clone();
            merged.extend(&partition[&true]);
            assert_eq!(merged, vec![0, 52, 250, 1483]);
        }
    }

    #[test]
    fn test_packaging_type_frequency() {
        let repo = mixed_repository();
        let counts = repo.collect_packaging_type();

        assert_eq!(
            counts,
            BTreeMap::from([
                (PackagingType::Box, 1),
                (PackagingType::FoilPack, 1),
                (PackagingType::Polybag, 2),
            ])
        );

        let with_packaging = repo.get_all().iter().filter(|s| s.packaging_type.is_some()).count() as u64;
        assert_eq!(counts.values().sum::<u64>(), with_packaging);
        assert!(counts.values().all(|&count| count >= 1));
    }

    #[test]
    fn test_queries_leave_collection_untouched() {
        let repo = mixed_repository();
        let before = repo.get_all().to_vec();

        repo.count_lego_sets_with_tag("Microscale");
        repo.tags_in_reverse_order();
        repo.pieces_bigger_than(10);
        repo.collect_packaging_type();

        assert_eq!(repo.get_all(), before.as_slice());
        assert_eq!(repo.len(), 6);
    }

    #[test]
    fn test_bundled_collection() {
        let repo = LegoSetRepository::new().unwrap();

        assert_eq!(repo.count_lego_sets_with_tag("Microscale"), 4);
        assert!(!repo.name_exists(Some("Heart")));
        assert!(repo.name_exists(Some("Heart Box")));
        assert_eq!(repo.sum_of_pieces(), "2954");
        assert_eq!(repo.pieces_bigger_than(250)[&true], vec![264, 500, 1483]);
    }
}
