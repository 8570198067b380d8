//! # marina-types: Core types for the marina boat registry
//!
//! This crate contains the record model shared across the workspace:
//! - Boat records ([`Boat`])
//! - Location payloads ([`Location`], [`LocationKind`])
//! - Billing rates ([`Rates`])
//! - Case-insensitive name ordering ([`compare_names`], [`names_equal`])

use std::cmp::Ordering;
use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};

// ============================================================================
// Limits
// ============================================================================

/// Maximum number of boats the registry holds by default.
pub const MAX_BOATS: usize = 120;

/// Maximum number of characters kept from a boat name.
pub const MAX_NAME_LEN: usize = 127;

/// Maximum number of characters kept from a trailer license tag.
pub const MAX_TAG_LEN: usize = 9;

/// Highest slip number in the marina.
pub const MAX_SLIP_NUMBER: i32 = 85;

/// Highest dry storage space number.
pub const MAX_STORAGE_SPACE: i32 = 50;

// ============================================================================
// Location
// ============================================================================

/// The four places a boat can be kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LocationKind {
    /// In-water mooring slip.
    Slip,
    /// Dry bay for boats under repair.
    Land,
    /// On the owner's road trailer.
    Trailer,
    /// General dry storage space.
    Storage,
}

impl LocationKind {
    /// All kinds, in billing-table order.
    pub const ALL: [LocationKind; 4] = [
        LocationKind::Slip,
        LocationKind::Land,
        LocationKind::Trailer,
        LocationKind::Storage,
    ];

    /// Returns the lowercase keyword used in data files.
    pub fn as_str(&self) -> &'static str {
        match self {
            LocationKind::Slip => "slip",
            LocationKind::Land => "land",
            LocationKind::Trailer => "trailer",
            LocationKind::Storage => "storage",
        }
    }

    /// Parses a location keyword, ignoring ASCII case.
    ///
    /// Older data files spell the trailer keyword `trailor`; that spelling is
    /// still accepted here but never produced by [`LocationKind::as_str`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use marina_types::LocationKind;
    /// assert_eq!(LocationKind::parse("SLIP"), Some(LocationKind::Slip));
    /// assert_eq!(LocationKind::parse("trailor"), Some(LocationKind::Trailer));
    /// assert_eq!(LocationKind::parse("dock"), None);
    /// ```
    pub fn parse(keyword: &str) -> Option<Self> {
        if keyword.eq_ignore_ascii_case("trailor") {
            return Some(LocationKind::Trailer);
        }
        Self::ALL
            .into_iter()
            .find(|kind| keyword.eq_ignore_ascii_case(kind.as_str()))
    }
}

impl Display for LocationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returns the display name for a possibly-unknown location kind.
///
/// `None` maps to `"unknown"`. With a closed enum this only happens when a
/// caller failed to resolve a keyword.
pub fn location_kind_name(kind: Option<LocationKind>) -> &'static str {
    kind.map_or("unknown", |k| k.as_str())
}

/// Where a boat is kept, with the payload that identifies the exact spot.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Location {
    /// Slip number, nominally `1..=85`.
    Slip { number: i32 },
    /// Bay letter, nominally `A..=Z`.
    Land { bay: char },
    /// Trailer license tag.
    Trailer { tag: String },
    /// Storage space number, nominally `1..=50`.
    Storage { space: i32 },
}

impl Location {
    /// Returns the kind tag of this location.
    pub fn kind(&self) -> LocationKind {
        match self {
            Location::Slip { .. } => LocationKind::Slip,
            Location::Land { .. } => LocationKind::Land,
            Location::Trailer { .. } => LocationKind::Trailer,
            Location::Storage { .. } => LocationKind::Storage,
        }
    }

    /// Returns true if the payload lies inside the marina's nominal ranges.
    ///
    /// Out-of-range payloads are stored as-is; this only lets callers flag them.
    pub fn is_in_range(&self) -> bool {
        match self {
            Location::Slip { number } => (1..=MAX_SLIP_NUMBER).contains(number),
            Location::Land { bay } => bay.is_ascii_uppercase(),
            Location::Trailer { tag } => !tag.is_empty() && tag.chars().count() <= MAX_TAG_LEN,
            Location::Storage { space } => (1..=MAX_STORAGE_SPACE).contains(space),
        }
    }
}

impl Display for Location {
    /// Renders the payload in its natural textual form.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Location::Slip { number } => write!(f, "{number}"),
            Location::Land { bay } => write!(f, "{bay}"),
            Location::Trailer { tag } => f.write_str(tag),
            Location::Storage { space } => write!(f, "{space}"),
        }
    }
}

// ============================================================================
// Boat
// ============================================================================

/// One inventory record.
#[derive(Debug, Clone, PartialEq)]
pub struct Boat {
    /// Case-insensitive registry key.
    pub name: String,
    /// Length in feet.
    pub length: f64,
    /// Where the boat is kept.
    pub location: Location,
    /// Outstanding balance in dollars.
    pub amount_owed: f64,
}

impl Boat {
    pub fn new(name: impl Into<String>, length: f64, location: Location, amount_owed: f64) -> Self {
        Self {
            name: name.into(),
            length,
            location,
            amount_owed,
        }
    }

    /// Returns the location kind of this boat.
    pub fn kind(&self) -> LocationKind {
        self.location.kind()
    }
}

// ============================================================================
// Billing
// ============================================================================

/// Monthly per-foot billing rates, one per location kind.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Rates {
    pub slip: f64,
    pub land: f64,
    pub trailer: f64,
    pub storage: f64,
}

impl Default for Rates {
    fn default() -> Self {
        Self {
            slip: 12.50,
            land: 14.00,
            trailer: 25.00,
            storage: 11.20,
        }
    }
}

impl Rates {
    /// Returns the per-foot monthly rate for a location kind.
    pub fn rate(&self, kind: LocationKind) -> f64 {
        match kind {
            LocationKind::Slip => self.slip,
            LocationKind::Land => self.land,
            LocationKind::Trailer => self.trailer,
            LocationKind::Storage => self.storage,
        }
    }

    /// Returns one month's charge for a boat: `length * rate(kind)`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use marina_types::{Boat, Location, Rates};
    /// let boat = Boat::new("Alice", 40.0, Location::Slip { number: 12 }, 0.0);
    /// assert_eq!(Rates::default().monthly_charge(&boat), 500.0);
    /// ```
    pub fn monthly_charge(&self, boat: &Boat) -> f64 {
        boat.length * self.rate(boat.kind())
    }
}

// ============================================================================
// Name ordering
// ============================================================================

/// Compares two boat names ignoring ASCII case, byte by byte.
pub fn compare_names(a: &str, b: &str) -> Ordering {
    a.bytes()
        .map(|c| c.to_ascii_lowercase())
        .cmp(b.bytes().map(|c| c.to_ascii_lowercase()))
}

/// Returns true if two boat names are equal ignoring ASCII case.
pub fn names_equal(a: &str, b: &str) -> bool {
    a.eq_ignore_ascii_case(b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("slip", LocationKind::Slip; "slip")]
    #[test_case("Land", LocationKind::Land; "mixed case land")]
    #[test_case("TRAILER", LocationKind::Trailer; "upper trailer")]
    #[test_case("trailor", LocationKind::Trailer; "legacy trailer spelling")]
    #[test_case("storage", LocationKind::Storage; "storage")]
    fn parse_accepts_known_keywords(keyword: &str, expected: LocationKind) {
        assert_eq!(LocationKind::parse(keyword), Some(expected));
    }

    #[test_case(""; "empty")]
    #[test_case("dock"; "unknown word")]
    #[test_case(" slip"; "leading space")]
    fn parse_rejects_unknown_keywords(keyword: &str) {
        assert_eq!(LocationKind::parse(keyword), None);
    }

    #[test]
    fn kind_names_are_lowercase_keywords() {
        let names: Vec<_> = LocationKind::ALL.iter().map(LocationKind::as_str).collect();
        assert_eq!(names, ["slip", "land", "trailer", "storage"]);
        assert_eq!(location_kind_name(None), "unknown");
        assert_eq!(location_kind_name(Some(LocationKind::Land)), "land");
    }

    #[test]
    fn location_reports_its_kind() {
        assert_eq!(Location::Slip { number: 3 }.kind(), LocationKind::Slip);
        assert_eq!(Location::Land { bay: 'C' }.kind(), LocationKind::Land);
        assert_eq!(
            Location::Trailer { tag: "ABC123".into() }.kind(),
            LocationKind::Trailer
        );
        assert_eq!(Location::Storage { space: 7 }.kind(), LocationKind::Storage);
    }

    #[test_case(Location::Slip { number: 1 }, true; "first slip")]
    #[test_case(Location::Slip { number: 85 }, true; "last slip")]
    #[test_case(Location::Slip { number: 86 }, false; "slip past end")]
    #[test_case(Location::Slip { number: 0 }, false; "slip zero")]
    #[test_case(Location::Land { bay: 'Z' }, true; "bay z")]
    #[test_case(Location::Land { bay: 'z' }, false; "lowercase bay")]
    #[test_case(Location::Storage { space: 50 }, true; "last storage")]
    #[test_case(Location::Storage { space: 51 }, false; "storage past end")]
    fn range_checks(location: Location, expected: bool) {
        assert_eq!(location.is_in_range(), expected);
    }

    #[test]
    fn default_rates_match_price_list() {
        let rates = Rates::default();
        assert_eq!(rates.rate(LocationKind::Slip), 12.50);
        assert_eq!(rates.rate(LocationKind::Land), 14.00);
        assert_eq!(rates.rate(LocationKind::Trailer), 25.00);
        assert_eq!(rates.rate(LocationKind::Storage), 11.20);
    }

    #[test]
    fn monthly_charge_scales_with_length() {
        let rates = Rates::default();
        let boat = Boat::new("Sea Breeze", 20.0, Location::Trailer { tag: "XYZ".into() }, 0.0);
        assert_eq!(rates.monthly_charge(&boat), 500.0);
    }

    #[test]
    fn names_compare_without_case() {
        assert_eq!(compare_names("alice", "Bob"), Ordering::Less);
        assert_eq!(compare_names("BOB", "bob"), Ordering::Equal);
        assert_eq!(compare_names("Zed", "adam"), Ordering::Greater);
        assert_eq!(compare_names("Sea", "Seabird"), Ordering::Less);
        assert!(names_equal("Wind Dancer", "WIND dancer"));
        assert!(!names_equal("Wind", "Windy"));
    }
}
