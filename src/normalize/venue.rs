use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::constants;

static DEFAULT_VENUES: Lazy<VenueMap> = Lazy::new(|| {
    VenueMap::from_pairs(
        constants::default_venue_table()
            .into_iter()
            .map(|(raw, place)| (raw.to_string(), place.to_string())),
    )
});

/// Exact-match substitution table from a raw location to a display place.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct VenueMap {
    places: HashMap<String, String>,
}

impl VenueMap {
    pub fn from_pairs(pairs: impl IntoIterator<Item = (String, String)>) -> Self {
        Self {
            places: pairs.into_iter().collect(),
        }
    }

    /// The festival table the spreadsheet was written against
    pub fn builtin() -> Self {
        DEFAULT_VENUES.clone()
    }

    /// Register or replace a mapping
    pub fn insert(&mut self, raw: impl Into<String>, place: impl Into<String>) {
        self.places.insert(raw.into(), place.into());
    }

    /// Trim the location and substitute it if it is a known venue
    pub fn resolve<'a>(&'a self, raw: &'a str) -> &'a str {
        let location = raw.trim();
        self.places
            .get(location)
            .map(|p| p.as_str())
            .unwrap_or(location)
    }

    pub fn len(&self) -> usize {
        self.places.len()
    }

    pub fn is_empty(&self) -> bool {
        self.places.is_empty()
    }
}
