//! Geographic lookup for node codes.
//!
//! The graph model resolves node names against a [`Gazetteer`]: a keyed store
//! mapping short language codes to coordinates. Absent codes are a normal
//! outcome, not an error. [`MemoryGazetteer`] is the in-memory
//! implementation, seeded either programmatically or from a flat file of
//! whitespace-separated `code latitude longitude` lines.

use std::io::{self, BufRead};

use indexmap::IndexMap;
use log::{debug, info};

/// Coordinates held for a single code.
///
/// Either axis may be missing; incomplete entries exist so that a later
/// import can fill them in, and so that per-statement overrides can complete
/// them at graph-population time.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Location {
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

/// Keyed coordinate lookup.
pub trait Gazetteer {
    /// Returns the location for a code, or `None` when the code is unknown.
    fn lookup(&self, code: &str) -> Option<Location>;
}

/// Insertion-ordered in-memory gazetteer.
#[derive(Debug, Clone, Default)]
pub struct MemoryGazetteer {
    entries: IndexMap<String, Location>,
}

impl MemoryGazetteer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces the location for a code.
    ///
    /// Overwrites any coordinates previously held for the code, matching the
    /// import semantics of the flat-file loader.
    pub fn insert(&mut self, code: impl Into<String>, location: Location) {
        self.entries.insert(code.into(), location);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Loads a gazetteer from lines of whitespace-separated
    /// `code latitude longitude`.
    ///
    /// Lines that do not conform (wrong field count, unparseable numbers)
    /// are skipped; blank lines are ignored.
    ///
    /// # Errors
    ///
    /// Returns an error only when reading from the underlying source fails.
    pub fn from_reader(reader: impl BufRead) -> io::Result<Self> {
        let mut gazetteer = Self::new();

        for line in reader.lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }

            let mut items = line.split_whitespace();
            let fields = (items.next(), items.next(), items.next(), items.next());
            let (Some(code), Some(latitude), Some(longitude), None) = fields else {
                debug!(line; "Skipped incomprehensible line");
                continue;
            };
            let (Ok(latitude), Ok(longitude)) = (latitude.parse(), longitude.parse()) else {
                debug!(line; "Skipped incomprehensible line");
                continue;
            };

            gazetteer.insert(
                code,
                Location {
                    latitude: Some(latitude),
                    longitude: Some(longitude),
                },
            );
        }

        info!(entries = gazetteer.len(); "Gazetteer loaded");
        Ok(gazetteer)
    }
}

impl Gazetteer for MemoryGazetteer {
    fn lookup(&self, code: &str) -> Option<Location> {
        self.entries.get(code).copied()
    }
}
