use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::Add;

use super::molecule::Molecule;

/// A single periodic-table entry: atomic number, full name, symbol, and
/// atomic mass in amu.
///
/// Elements are immutable once constructed and compare by identity — two
/// elements are equal iff their atomic numbers match. The registry
/// ([`crate::table::PeriodicTable`]) is responsible for constructing valid
/// entries; this type performs no range validation of its own.
#[derive(Debug, Clone)]
pub struct Element {
    number: u8,
    name: String,
    symbol: String,
    mass: f64,
}

impl Element {
    pub fn new(number: u8, name: impl Into<String>, symbol: impl Into<String>, mass: f64) -> Self {
        Self {
            number,
            name: name.into(),
            symbol: symbol.into(),
            mass,
        }
    }

    /// Atomic number, the element's primary key.
    #[inline]
    pub fn number(&self) -> u8 {
        self.number
    }

    /// Full element name, e.g. `"Hydrogen"`.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Element symbol, e.g. `"H"`.
    #[inline]
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Atomic mass in amu.
    #[inline]
    pub fn mass(&self) -> f64 {
        self.mass
    }
}

impl PartialEq for Element {
    fn eq(&self, other: &Self) -> bool {
        self.number == other.number
    }
}

impl Eq for Element {}

impl Hash for Element {
    // Hashed over (number, symbol). Registry population keeps one symbol per
    // atomic number, so this never disagrees with the number-only equality
    // for elements sharing a map.
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.number.hash(state);
        self.symbol.hash(state);
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.symbol)
    }
}

impl Add for Element {
    type Output = Molecule;

    /// Seeds a molecule from two elements, each at quantity 1. Equal
    /// operands merge into a single entry of quantity 2, so `H + H` is H₂.
    fn add(self, other: Element) -> Molecule {
        Molecule::from_entries(vec![(self, 1), (other, 1)])
    }
}
