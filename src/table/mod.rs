//! The periodic-table registry: the single source of truth mapping atomic
//! numbers and symbols to [`Element`] values.
//!
//! A [`PeriodicTable`] holds 118 fixed slots indexed by `number - 1` plus a
//! symbol index, and is populated once from an element dataset (the embedded
//! reference data, custom TOML text, or a file — see [`dataset`]). After
//! population it is read-only: lookups take `&self` and mutation requires
//! `&mut self`, so shared concurrent reads are safe by construction.

use std::collections::HashMap;
use std::sync::OnceLock;

use log::{debug, warn};

use crate::model::element::Element;

pub mod dataset;
pub mod error;

pub use dataset::{ElementRecord, load_dataset, read_dataset_file};
pub use error::{DatasetError, ElementNotDefined};

/// Number of known elements; fixed slot capacity of the table.
pub const ELEMENT_COUNT: usize = 118;

static DEFAULT_TABLE: OnceLock<PeriodicTable> = OnceLock::new();

/// Lookup target for [`PeriodicTable::get`]: an atomic number or an element
/// symbol. Anything else does not convert and fails to compile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selector<'a> {
    Number(u8),
    Symbol(&'a str),
}

impl From<u8> for Selector<'static> {
    fn from(number: u8) -> Self {
        Selector::Number(number)
    }
}

impl<'a> From<&'a str> for Selector<'a> {
    fn from(symbol: &'a str) -> Self {
        Selector::Symbol(symbol)
    }
}

/// Registry of [`Element`] values with atomic-number and symbol lookup.
///
/// Invariant: a populated slot at index `i` holds an element with
/// `number() == i + 1`, and the symbol index agrees with slot contents after
/// every [`PeriodicTable::add_element`] call.
#[derive(Debug, Clone)]
pub struct PeriodicTable {
    slots: Vec<Option<Element>>,
    symbol_index: HashMap<String, usize>,
}

impl PeriodicTable {
    /// An empty table: [`ELEMENT_COUNT`] unpopulated slots. Partial
    /// population is a valid transient state; unpopulated slots answer
    /// lookups with [`ElementNotDefined`].
    pub fn new() -> Self {
        Self {
            slots: vec![None; ELEMENT_COUNT],
            symbol_index: HashMap::new(),
        }
    }

    /// Populates a table by applying [`PeriodicTable::add_element`] to each
    /// record in dataset order. The first bad record aborts construction.
    pub fn from_records<I>(records: I) -> Result<Self, DatasetError>
    where
        I: IntoIterator<Item = ElementRecord>,
    {
        let mut table = Self::new();
        let mut count = 0usize;
        for record in records {
            table.add_element(&record)?;
            count += 1;
        }
        debug!("populated periodic table from {count} records");
        Ok(table)
    }

    /// Reads a dataset file in full and populates a table from it. The file
    /// is a scoped acquisition: nothing is held open after construction.
    pub fn from_dataset_file(path: impl AsRef<std::path::Path>) -> Result<Self, DatasetError> {
        Self::from_records(read_dataset_file(path)?)
    }

    /// Constructs the record's element and stores it at slot `number - 1`,
    /// updating the symbol index. Overwrites any existing occupant
    /// (last-write-wins) and unregisters the occupant's symbol so the index
    /// stays consistent with slot contents.
    pub fn add_element(&mut self, record: &ElementRecord) -> Result<(), DatasetError> {
        if record.number == 0 || usize::from(record.number) > ELEMENT_COUNT {
            return Err(DatasetError::NumberOutOfRange {
                number: record.number,
                symbol: record.symbol.clone(),
            });
        }

        let index = usize::from(record.number - 1);
        if let Some(previous) = self.slots[index].take() {
            warn!(
                "overwriting element {} at slot {index}: '{}' replaces '{}'",
                record.number,
                record.symbol,
                previous.symbol()
            );
            self.symbol_index.remove(previous.symbol());
        }

        self.symbol_index.insert(record.symbol.clone(), index);
        self.slots[index] = Some(Element::new(
            record.number,
            record.name.clone(),
            record.symbol.clone(),
            record.mass,
        ));
        Ok(())
    }

    /// Looks up an element by atomic number or symbol.
    ///
    /// Fails with [`ElementNotDefined`] when the number is outside
    /// `1..=118`, the slot for an in-range number holds no element, or the
    /// symbol is not indexed.
    pub fn get<'a>(&self, target: impl Into<Selector<'a>>) -> Result<&Element, ElementNotDefined> {
        match target.into() {
            Selector::Number(number) => usize::from(number)
                .checked_sub(1)
                .filter(|&index| index < ELEMENT_COUNT)
                .and_then(|index| self.slots[index].as_ref())
                .ok_or(ElementNotDefined::Number(number)),
            Selector::Symbol(symbol) => self
                .symbol_index
                .get(symbol)
                .and_then(|&index| self.slots[index].as_ref())
                .ok_or_else(|| ElementNotDefined::Symbol(symbol.to_string())),
        }
    }

    /// Number of populated slots.
    pub fn populated_count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }
}

impl Default for PeriodicTable {
    fn default() -> Self {
        Self::new()
    }
}

/// The process-wide table built once from the embedded reference dataset.
///
/// Lookups against the returned reference are safe to share across threads.
/// Tests and callers that inject their own data construct a table through
/// [`PeriodicTable::from_records`] instead.
pub fn default_table() -> &'static PeriodicTable {
    DEFAULT_TABLE.get_or_init(|| {
        let records = load_dataset(None)
            .expect("Failed to parse embedded element dataset. This is a library bug.");
        PeriodicTable::from_records(records)
            .expect("Failed to populate periodic table from embedded dataset. This is a library bug.")
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(number: u8, name: &str, symbol: &str, mass: f64) -> ElementRecord {
        ElementRecord {
            number,
            name: name.to_string(),
            symbol: symbol.to_string(),
            mass,
        }
    }

    fn small_table() -> PeriodicTable {
        PeriodicTable::from_records([
            record(1, "Hydrogen", "H", 1.008),
            record(8, "Oxygen", "O", 15.999),
        ])
        .unwrap()
    }

    #[test]
    fn default_table_is_fully_populated() {
        let table = default_table();
        assert_eq!(table.populated_count(), ELEMENT_COUNT);
        for number in 1..=118u8 {
            assert_eq!(table.get(number).unwrap().number(), number);
        }
    }

    #[test]
    fn default_table_resolves_every_dataset_symbol() {
        let table = default_table();
        for dataset_record in load_dataset(None).unwrap() {
            let element = table.get(dataset_record.symbol.as_str()).unwrap();
            assert_eq!(element.symbol(), dataset_record.symbol);
            assert_eq!(element.number(), dataset_record.number);
        }
    }

    #[test]
    fn number_and_symbol_lookups_return_the_same_element() {
        let table = small_table();
        assert_eq!(table.get(1).unwrap(), table.get("H").unwrap());
        assert_eq!(table.get(8).unwrap(), table.get("O").unwrap());
    }

    #[test]
    fn lookup_by_number_returns_the_slot_contents() {
        let table = small_table();
        let oxygen = table.get(8).unwrap();
        assert_eq!(oxygen.number(), 8);
        assert_eq!(oxygen.name(), "Oxygen");
        assert_eq!(oxygen.mass(), 15.999);
    }

    #[test]
    fn out_of_range_numbers_are_not_defined() {
        let table = small_table();
        assert_eq!(table.get(0).unwrap_err(), ElementNotDefined::Number(0));
        assert_eq!(table.get(119).unwrap_err(), ElementNotDefined::Number(119));
    }

    #[test]
    fn unpopulated_slot_behaves_like_out_of_range() {
        let table = small_table();
        assert_eq!(table.get(2).unwrap_err(), ElementNotDefined::Number(2));
    }

    #[test]
    fn unknown_symbol_is_not_defined() {
        let table = small_table();
        assert_eq!(
            table.get("Zz").unwrap_err(),
            ElementNotDefined::Symbol("Zz".to_string())
        );
    }

    #[test]
    fn empty_table_rejects_every_lookup() {
        let table = PeriodicTable::new();
        assert_eq!(table.populated_count(), 0);
        assert!(table.get(1).is_err());
        assert!(table.get("H").is_err());
    }

    #[test]
    fn add_element_patches_a_slot_and_keeps_the_symbol_index_consistent() {
        let mut table = small_table();
        table
            .add_element(&record(1, "Deuterium", "D", 2.014))
            .unwrap();

        let patched = table.get(1).unwrap();
        assert_eq!(patched.symbol(), "D");
        assert_eq!(table.get("D").unwrap().number(), 1);
        // The replaced occupant's symbol no longer resolves.
        assert_eq!(
            table.get("H").unwrap_err(),
            ElementNotDefined::Symbol("H".to_string())
        );
    }

    #[test]
    fn add_element_rejects_numbers_outside_the_table() {
        let mut table = PeriodicTable::new();
        let result = table.add_element(&record(0, "Neutronium", "Nu", 1.0));
        assert!(matches!(
            result,
            Err(DatasetError::NumberOutOfRange { number: 0, .. })
        ));
    }

    #[test]
    fn from_dataset_file_reads_and_populates_in_one_step() {
        let path = std::env::temp_dir().join("mol_calc_table_from_file_test.toml");
        std::fs::write(
            &path,
            "[[elements]]\nnumber = 2\nname = \"Helium\"\nsymbol = \"He\"\nmass = 4.0026\n",
        )
        .unwrap();

        let table = PeriodicTable::from_dataset_file(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(table.populated_count(), 1);
        assert_eq!(table.get("He").unwrap().number(), 2);
    }

    #[test]
    fn from_records_propagates_the_first_bad_record() {
        let result = PeriodicTable::from_records([
            record(1, "Hydrogen", "H", 1.008),
            record(0, "Neutronium", "Nu", 1.0),
        ]);
        assert!(matches!(
            result,
            Err(DatasetError::NumberOutOfRange { number: 0, .. })
        ));
    }
}
