//! Per-symbol result map.

use serde::{Serialize, Serializer};
use std::collections::HashMap;
use std::collections::hash_map;

use crate::types::Symbol;

/// Results of a batch request, keyed by the caller's symbols.
///
/// Every requested symbol has an entry. A symbol the provider had nothing for
/// maps to `None` rather than failing the batch. Iteration order is
/// unspecified.
#[derive(Clone, Debug, PartialEq)]
pub struct BySymbol<T> {
    entries: HashMap<Symbol, Option<T>>,
}

impl<T> Default for BySymbol<T> {
    fn default() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }
}

impl<T> BySymbol<T> {
    /// Creates an empty map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty map with room for `capacity` symbols.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: HashMap::with_capacity(capacity),
        }
    }

    /// Records the result for `symbol`, replacing any previous entry.
    pub fn insert(&mut self, symbol: Symbol, value: Option<T>) {
        self.entries.insert(symbol, value);
    }

    /// Returns the value for `symbol`, or `None` if it is missing or empty.
    #[must_use]
    pub fn get(&self, symbol: &str) -> Option<&T> {
        self.entries.get(symbol).and_then(Option::as_ref)
    }

    /// Returns true if `symbol` has an entry, empty or not.
    #[must_use]
    pub fn contains_symbol(&self, symbol: &str) -> bool {
        self.entries.contains_key(symbol)
    }

    /// Removes and returns the value for `symbol`.
    pub fn remove(&mut self, symbol: &str) -> Option<T> {
        self.entries.remove(symbol).flatten()
    }

    /// Number of symbols, including empty entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the map has no symbols.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns an iterator over the symbols.
    pub fn symbols(&self) -> hash_map::Keys<'_, Symbol, Option<T>> {
        self.entries.keys()
    }

    /// Returns an iterator over symbols and their (possibly empty) values.
    pub fn iter(&self) -> impl Iterator<Item = (&Symbol, Option<&T>)> {
        self.entries.iter().map(|(s, v)| (s, v.as_ref()))
    }

    /// Symbols that came back empty.
    pub fn missing(&self) -> impl Iterator<Item = &Symbol> {
        self.entries
            .iter()
            .filter(|(_, v)| v.is_none())
            .map(|(s, _)| s)
    }

    /// Returns the only value when the map holds exactly one symbol.
    ///
    /// Convenient for clients built from a single ticker.
    #[must_use]
    pub fn into_single(self) -> Option<T> {
        if self.entries.len() != 1 {
            return None;
        }
        self.entries.into_values().next().flatten()
    }

    /// Maps every present value, keeping empty entries empty.
    #[must_use]
    pub fn map<U>(self, mut f: impl FnMut(T) -> U) -> BySymbol<U> {
        BySymbol {
            entries: self
                .entries
                .into_iter()
                .map(|(s, v)| (s, v.map(&mut f)))
                .collect(),
        }
    }

    /// Maps every present value to an optional one.
    #[must_use]
    pub fn and_then<U>(self, mut f: impl FnMut(T) -> Option<U>) -> BySymbol<U> {
        BySymbol {
            entries: self
                .entries
                .into_iter()
                .map(|(s, v)| (s, v.and_then(&mut f)))
                .collect(),
        }
    }
}

impl<T> IntoIterator for BySymbol<T> {
    type Item = (Symbol, Option<T>);
    type IntoIter = hash_map::IntoIter<Symbol, Option<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<T> FromIterator<(Symbol, Option<T>)> for BySymbol<T> {
    fn from_iter<I: IntoIterator<Item = (Symbol, Option<T>)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl<T: Serialize> Serialize for BySymbol<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(&self.entries)
    }
}
