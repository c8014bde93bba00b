//! Print job catalog.
//!
//! A [`Catalog`] is an immutable, ordered list of [`Item`] records. Items are
//! referenced everywhere else in the crate by their position in the catalog
//! (a stable `usize` index), never by name — duplicate names are permitted.
//!
//! Catalogs are either built in memory with [`Catalog::from_items`] or loaded
//! from a UTF-8 CSV file with a header row via [`Catalog::from_csv_path`].
//! The CSV headers follow the upstream dataset's Portuguese field names
//! (`nome`, `qtd_filamento`, `tempo`, `cor`, `preco_kg`).

use serde::{Deserialize, Serialize};
use std::io::Read;
use std::path::Path;

/// One 3D print model in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// Display name of the model.
    #[serde(rename = "nome")]
    pub name: String,

    /// Filament consumed by one print, in grams.
    #[serde(rename = "qtd_filamento")]
    pub mass_g: f64,

    /// Print duration in hours.
    #[serde(rename = "tempo")]
    pub print_hours: f64,

    /// Filament color.
    #[serde(rename = "cor")]
    pub color: String,

    /// Filament price per kilogram, in currency units.
    #[serde(rename = "preco_kg")]
    pub price_per_kg: f64,
}

impl Item {
    /// Creates an item from its attributes.
    pub fn new(
        name: impl Into<String>,
        mass_g: f64,
        print_hours: f64,
        color: impl Into<String>,
        price_per_kg: f64,
    ) -> Self {
        Self {
            name: name.into(),
            mass_g,
            print_hours,
            color: color.into(),
            price_per_kg,
        }
    }

    /// Filament cost of one print: grams times price per gram.
    pub fn filament_cost(&self) -> f64 {
        self.mass_g * (self.price_per_kg / 1000.0)
    }
}

/// Errors raised while loading a catalog.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// The catalog file could not be opened or read.
    #[error("failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),

    /// A record could not be parsed (missing column, non-numeric field, ...).
    #[error("malformed catalog record: {0}")]
    Malformed(#[from] csv::Error),
}

/// Immutable ordered collection of print models.
///
/// Indices into the catalog are the unit of reference for the whole crate:
/// an [`Individual`](crate::ga::Individual) is a set of catalog indices, and
/// the [`Evaluator`](crate::fitness::Evaluator) resolves them back to items.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    items: Vec<Item>,
}

impl Catalog {
    /// Wraps a list of items as a catalog.
    pub fn from_items(items: Vec<Item>) -> Self {
        Self { items }
    }

    /// Loads a catalog from a CSV file with a header row.
    pub fn from_csv_path(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let file = std::fs::File::open(path)?;
        Self::from_csv_reader(file)
    }

    /// Loads a catalog from any CSV source with a header row.
    pub fn from_csv_reader<R: Read>(reader: R) -> Result<Self, CatalogError> {
        let mut csv_reader = csv::Reader::from_reader(reader);
        let mut items = Vec::new();
        for record in csv_reader.deserialize() {
            let item: Item = record?;
            items.push(item);
        }
        Ok(Self { items })
    }

    /// Number of items in the catalog.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the catalog holds no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the item at `index`.
    ///
    /// # Panics
    /// Panics if `index` is out of range. An out-of-range index inside an
    /// individual is an operator bug, not a recoverable condition.
    pub fn item(&self, index: usize) -> &Item {
        &self.items[index]
    }

    /// Iterates over the items in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &Item> {
        self.items.iter()
    }
}
