use std::collections::HashMap;
use std::fmt;
use std::ops::Add;

use thiserror::Error;

use super::element::Element;

/// Ideal gas constant in L·atm/(mol·K).
pub const GAS_CONSTANT: f64 = 0.082;

/// Standard temperature in Kelvin.
pub const STANDARD_TEMPERATURE: f64 = 273.15;

/// Standard pressure in atm.
pub const STANDARD_PRESSURE: f64 = 1.0;

/// Reference volume in litres for pressure calculations.
pub const STANDARD_VOLUME: f64 = 1.0;

/// Molar volume in L/mol at standard temperature and pressure, precomputed
/// from `STANDARD_TEMPERATURE * GAS_CONSTANT / STANDARD_PRESSURE`.
pub const STANDARD_MOLAR_VOLUME: f64 = 22.3983;

/// Errors raised when constructing a [`Molecule`] from a composition.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoleculeError {
    /// The composition holds no entries: at least one element is required.
    #[error("molecule composition is empty: at least one element is required")]
    EmptyComposition,

    /// An entry carries quantity zero; composition quantities must be
    /// positive integers.
    #[error("zero quantity for element '{0}': composition quantities must be positive")]
    ZeroQuantity(String),
}

/// A fixed chemical composition: an insertion-ordered mapping from
/// [`Element`] to a positive quantity, with molar mass and per-element mass
/// fractions derived at construction.
///
/// Every constructor produces an immutable snapshot. Combining molecules
/// ([`Molecule::add_molecule`]) never mutates an operand; it builds a new
/// molecule with both derived values recomputed from the merged composition.
#[derive(Debug, Clone)]
pub struct Molecule {
    /// Composition in insertion order.
    entries: Vec<(Element, u32)>,
    /// Element identity -> position in `entries`.
    index: HashMap<Element, usize>,
    molar_mass: f64,
    element_percentage: Vec<f64>,
}

impl Molecule {
    /// Builds a molecule from an ordered sequence of `(element, quantity)`
    /// pairs. Entries with equal elements (same atomic number) merge by
    /// summing their quantities.
    pub fn new(
        composition: impl IntoIterator<Item = (Element, u32)>,
    ) -> Result<Self, MoleculeError> {
        let raw: Vec<(Element, u32)> = composition.into_iter().collect();
        if raw.is_empty() {
            return Err(MoleculeError::EmptyComposition);
        }
        if let Some((element, _)) = raw.iter().find(|(_, quantity)| *quantity == 0) {
            return Err(MoleculeError::ZeroQuantity(element.symbol().to_string()));
        }
        Ok(Self::from_entries(raw))
    }

    /// Merges the raw entries and computes the derived values. Callers
    /// guarantee the entries are non-empty with positive quantities.
    pub(crate) fn from_entries(raw: Vec<(Element, u32)>) -> Self {
        let mut entries: Vec<(Element, u32)> = Vec::with_capacity(raw.len());
        let mut index: HashMap<Element, usize> = HashMap::with_capacity(raw.len());

        for (element, quantity) in raw {
            match index.get(&element) {
                Some(&position) => entries[position].1 += quantity,
                None => {
                    index.insert(element.clone(), entries.len());
                    entries.push((element, quantity));
                }
            }
        }

        let molar_mass = summed_elemental_mass(&entries);
        let element_percentage = entries
            .iter()
            .map(|(element, quantity)| element.mass() * f64::from(*quantity) / molar_mass)
            .collect();

        Self {
            entries,
            index,
            molar_mass,
            element_percentage,
        }
    }

    /// Number of distinct elements in the composition.
    #[inline]
    pub fn element_count(&self) -> usize {
        self.entries.len()
    }

    /// Composition entries in insertion order.
    pub fn elements(&self) -> impl Iterator<Item = (&Element, u32)> {
        self.entries.iter().map(|(element, quantity)| (element, *quantity))
    }

    /// Quantity of the given element, or `None` if it is not part of the
    /// composition.
    pub fn quantity_of(&self, element: &Element) -> Option<u32> {
        self.index.get(element).map(|&position| self.entries[position].1)
    }

    /// Mass of one mole in g/mol: the sum of each entry's atomic mass times
    /// its quantity.
    #[inline]
    pub fn molar_mass(&self) -> f64 {
        self.molar_mass
    }

    /// Per-entry mass fraction of the molar mass, in composition order.
    /// The fractions sum to 1 within floating-point tolerance.
    #[inline]
    pub fn element_percentage(&self) -> &[f64] {
        &self.element_percentage
    }

    /// Total elemental mass divided by `mol` (`mass = n × M` inverted, with
    /// `mol` as the divisor). [`Molecule::molar_mass`] is this function
    /// evaluated at `mol = 1`.
    pub fn calculate_mass(&self, mol: f64) -> f64 {
        summed_elemental_mass(&self.entries) / mol
    }

    /// Moles in a sample of the given mass in grams: `n = a / M`.
    pub fn calculate_mol(&self, mass: f64) -> f64 {
        mass / self.molar_mass
    }

    /// Ideal-gas volume in litres for `mol` moles: `v = n·R·T / P`, with
    /// temperature in Kelvin and pressure in atm. At standard conditions the
    /// precomputed [`STANDARD_MOLAR_VOLUME`] factor is used directly.
    pub fn calculate_volume(&self, mol: f64, temperature: f64, pressure: f64) -> f64 {
        let factor = if temperature == STANDARD_TEMPERATURE && pressure == STANDARD_PRESSURE {
            STANDARD_MOLAR_VOLUME
        } else {
            temperature * GAS_CONSTANT / pressure
        };
        mol * factor
    }

    /// [`Molecule::calculate_volume`] at standard temperature and pressure.
    pub fn calculate_volume_stp(&self, mol: f64) -> f64 {
        self.calculate_volume(mol, STANDARD_TEMPERATURE, STANDARD_PRESSURE)
    }

    /// Ideal-gas pressure in atm for `mol` moles: `P = n·R·T / v`, with
    /// temperature in Kelvin and volume in litres. Same standard-condition
    /// shortcut as [`Molecule::calculate_volume`].
    pub fn calculate_pressure(&self, mol: f64, temperature: f64, volume: f64) -> f64 {
        let factor = if temperature == STANDARD_TEMPERATURE && volume == STANDARD_VOLUME {
            STANDARD_MOLAR_VOLUME
        } else {
            temperature * GAS_CONSTANT / volume
        };
        mol * factor
    }

    /// [`Molecule::calculate_pressure`] at standard temperature in a 1 L
    /// reference volume.
    pub fn calculate_pressure_stp(&self, mol: f64) -> f64 {
        self.calculate_pressure(mol, STANDARD_TEMPERATURE, STANDARD_VOLUME)
    }

    /// Combines two compositions into a new molecule, e.g. H₂ with SO₄ to
    /// make H₂SO₄. Quantities of elements present in both merge by summing;
    /// elements only in `other` are appended after `self`'s entries, in
    /// `other`'s order. Neither operand is mutated.
    pub fn add_molecule(&self, other: &Molecule) -> Molecule {
        let mut merged = self.entries.clone();
        merged.extend(other.entries.iter().cloned());
        Molecule::from_entries(merged)
    }
}

impl Add for &Molecule {
    type Output = Molecule;

    fn add(self, other: &Molecule) -> Molecule {
        self.add_molecule(other)
    }
}

/// Renders the literal formula in composition order, e.g. `H2O` for
/// `{H: 2, O: 1}`. Quantity 1 is left implicit.
impl fmt::Display for Molecule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (element, quantity) in &self.entries {
            f.write_str(element.symbol())?;
            if *quantity > 1 {
                write!(f, "{quantity}")?;
            }
        }
        Ok(())
    }
}

fn summed_elemental_mass(entries: &[(Element, u32)]) -> f64 {
    entries
        .iter()
        .map(|(element, quantity)| element.mass() * f64::from(*quantity))
        .sum()
}
