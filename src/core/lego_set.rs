//! Record module for brickset
//!
//! This module defines the LegoSet record as it appears in the
//! Brickset JSON export, and the PackagingType enumeration.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use serde::{Deserialize, Deserializer, Serialize};

/// Errors that can occur when parsing a packaging type
#[derive(Error, Debug, PartialEq)]
pub enum PackagingTypeError {
    #[error("Unknown packaging type: {0}")]
    Unknown(String),
}

/// How a set is boxed or bagged
///
/// Variants are ordered by declaration, which is the order grouped
/// results are reported in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum PackagingType {
    #[serde(rename = "Blister pack")]
    BlisterPack,
    #[serde(rename = "Box")]
    Box,
    #[serde(rename = "Box with backing card")]
    BoxWithBackingCard,
    #[serde(rename = "Bucket")]
    Bucket,
    #[serde(rename = "Canister")]
    Canister,
    #[serde(rename = "Foil pack")]
    FoilPack,
    #[serde(rename = "None (loose parts)")]
    LooseParts,
    #[serde(rename = "Not specified")]
    NotSpecified,
    #[serde(rename = "Other")]
    Other,
    #[serde(rename = "Plastic box")]
    PlasticBox,
    #[serde(rename = "Polybag")]
    Polybag,
    #[serde(rename = "Tub")]
    Tub,
    #[serde(rename = "Zip-lock bag")]
    ZipLockBag,
    #[serde(rename = "Unknown")]
    Unknown,
}

impl PackagingType {
    /// Every packaging type, in declaration order
    pub const ALL: [PackagingType; 14] = [
        PackagingType::BlisterPack,
        PackagingType::Box,
        PackagingType::BoxWithBackingCard,
        PackagingType::Bucket,
        PackagingType::Canister,
        PackagingType::FoilPack,
        PackagingType::LooseParts,
        PackagingType::NotSpecified,
        PackagingType::Other,
        PackagingType::PlasticBox,
        PackagingType::Polybag,
        PackagingType::Tub,
        PackagingType::ZipLockBag,
        PackagingType::Unknown,
    ];

    /// The name Brickset uses for this packaging type
    pub fn display_name(&self) -> &'static str {
        match self {
            PackagingType::BlisterPack => "Blister pack",
            PackagingType::Box => "Box",
            PackagingType::BoxWithBackingCard => "Box with backing card",
            PackagingType::Bucket => "Bucket",
            PackagingType::Canister => "Canister",
            PackagingType::FoilPack => "Foil pack",
            PackagingType::LooseParts => "None (loose parts)",
            PackagingType::NotSpecified => "Not specified",
            PackagingType::Other => "Other",
            PackagingType::PlasticBox => "Plastic box",
            PackagingType::Polybag => "Polybag",
            PackagingType::Tub => "Tub",
            PackagingType::ZipLockBag => "Zip-lock bag",
            PackagingType::Unknown => "Unknown",
        }
    }

    /// Upper snake case identifier, e.g. `BOX_WITH_BACKING_CARD`
    pub fn identifier(&self) -> &'static str {
        match self {
            PackagingType::BlisterPack => "BLISTER_PACK",
            PackagingType::Box => "BOX",
            PackagingType::BoxWithBackingCard => "BOX_WITH_BACKING_CARD",
            PackagingType::Bucket => "BUCKET",
            PackagingType::Canister => "CANISTER",
            PackagingType::FoilPack => "FOIL_PACK",
            PackagingType::LooseParts => "NONE",
            PackagingType::NotSpecified => "NOT_SPECIFIED",
            PackagingType::Other => "OTHER",
            PackagingType::PlasticBox => "PLASTIC_BOX",
            PackagingType::Polybag => "POLYBAG",
            PackagingType::Tub => "TUB",
            PackagingType::ZipLockBag => "ZIP_LOCK_BAG",
            PackagingType::Unknown => "UNKNOWN",
        }
    }
}

impl fmt::Display for PackagingType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for PackagingType {
    type Err = PackagingTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        PackagingType::ALL
            .iter()
            .copied()
            .find(|p| p.display_name().eq_ignore_ascii_case(s) || p.identifier() == s)
            .ok_or_else(|| PackagingTypeError::Unknown(s.to_string()))
    }
}

fn null_as_zero<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u32, D::Error> {
    Option::<u32>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// One LEGO set entry from the Brickset export
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LegoSet {
    /// Set number, e.g. `40460-1`
    pub number: String,
    pub name: Option<String>,
    pub year: Option<u16>,
    pub theme: Option<String>,
    pub subtheme: Option<String>,
    pub theme_group: Option<String>,
    pub category: Option<String>,
    pub packaging_type: Option<PackagingType>,
    pub availability: Option<String>,
    /// `None` means the set carries no tag list at all, which is not the
    /// same thing as an empty one
    pub tags: Option<BTreeSet<String>>,
    pub minifigs: Option<u32>,
    /// A null count loads as 0
    #[serde(alias = "pieceCount", deserialize_with = "null_as_zero")]
    pub pieces: u32,
    pub rating: Option<f64>,
}

impl LegoSet {
    /// Create a set with a number and a piece count, every optional field unset
    pub fn new<S: Into<String>>(number: S, pieces: u32) -> Self {
        LegoSet {
            number: number.into(),
            pieces,
            ..Default::default()
        }
    }

    pub fn with_name<S: Into<String>>(mut self, name: S) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = Some(tags.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_packaging_type(mut self, packaging_type: PackagingType) -> Self {
        self.packaging_type = Some(packaging_type);
        self
    }

    /// Check if the set carries the given tag (exact, case-sensitive)
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.as_ref().is_some_and(|tags| tags.contains(tag))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_packaging_type_parsing() {
        assert_eq!(PackagingType::from_str("Box").unwrap(), PackagingType::Box);
        assert_eq!(PackagingType::from_str("box with backing card").unwrap(), PackagingType::BoxWithBackingCard);
        assert_eq!(PackagingType::from_str("ZIP_LOCK_BAG").unwrap(), PackagingType::ZipLockBag);
        assert_eq!(PackagingType::from_str("None (loose parts)").unwrap(), PackagingType::LooseParts);
        assert_eq!(
            PackagingType::from_str("Crate"),
            Err(PackagingTypeError::Unknown("Crate".to_string()))
        );
    }

    #[test]
    fn test_packaging_type_display_matches_json() {
        for packaging in PackagingType::ALL {
            let json = serde_json::to_string(&packaging).unwrap();
            assert_eq!(json, format!("\"{}\"", packaging));
        }
    }

    #[test]
    fn test_lego_set_deserialization() {
        let json = r#"{
            "number": "40460-1",
            "name": "Roses",
            "year": 2021,
            "theme": "Seasonal",
            "themeGroup": "Miscellaneous",
            "packagingType": "Box",
            "tags": ["Flowers", "Valentine's Day"],
            "pieces": 120,
            "barcodeEAN": "5702016914245"
        }"#;

        let set: LegoSet = serde_json::from_str(json).unwrap();
        assert_eq!(set.number, "40460-1");
        assert_eq!(set.name.as_deref(), Some("Roses"));
        assert_eq!(set.theme_group.as_deref(), Some("Miscellaneous"));
        assert_eq!(set.packaging_type, Some(PackagingType::Box));
        assert_eq!(set.pieces, 120);
        assert!(set.has_tag("Flowers"));
        assert!(!set.has_tag("flowers"));
        assert_eq!(set.subtheme, None);
    }

    #[test]
    fn test_null_and_missing_fields() {
        let set: LegoSet = serde_json::from_str(r#"{"name": null, "tags": null, "pieceCount": 7}"#).unwrap();
        assert_eq!(set.name, None);
        assert_eq!(set.tags, None);
        assert_eq!(set.packaging_type, None);
        assert_eq!(set.pieces, 7);
        assert!(!set.has_tag("Microscale"));

        let set: LegoSet = serde_json::from_str(r#"{"tags": []}"#).unwrap();
        assert_eq!(set.tags, Some(BTreeSet::new()));
        assert_eq!(set.pieces, 0);
    }

    #[test]
    fn test_null_pieces_load_as_zero() {
        let set: LegoSet = serde_json::from_str(r#"{"number": "1", "pieces": null}"#).unwrap();
        assert_eq!(set.pieces, 0);

        let set: LegoSet = serde_json::from_str(r#"{"pieceCount": null}"#).unwrap();
        assert_eq!(set.pieces, 0);

        assert!(serde_json::from_str::<LegoSet>(r#"{"pieces": -3}"#).is_err());
        assert!(serde_json::from_str::<LegoSet>(r#"{"pieces": "12"}"#).is_err());
    }
}
