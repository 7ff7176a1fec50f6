//! A small, pure Rust library for everyday chemistry calculations: chemical
//! elements, molecules, molar mass, percentage composition, mole conversions,
//! and ideal-gas-law volume and pressure.
//!
//! # Features
//!
//! - **Periodic table** — A 118-slot element registry populated from a
//!   reference dataset, with lookup by atomic number or symbol
//! - **Molecules** — Insertion-ordered element/quantity compositions with
//!   molar mass and per-element mass fractions derived at construction
//! - **Gas law** — Volume and pressure from the ideal gas law with the
//!   fixed atm/Kelvin/litre convention (`R = 0.082 L·atm/(mol·K)`)
//! - **Composition algebra** — Seed compounds with `Element + Element` and
//!   combine molecules with merge-on-add semantics
//!
//! # Quick Start
//!
//! ```
//! use mol_calc::{Molecule, default_table};
//!
//! let table = default_table();
//!
//! // Water: two hydrogens, one oxygen
//! let hydrogen = table.get("H")?;
//! let oxygen = table.get(8)?;
//! let water = Molecule::new([(hydrogen.clone(), 2), (oxygen.clone(), 1)])?;
//!
//! assert!((water.molar_mass() - 18.015).abs() < 1e-9);
//! assert_eq!(water.to_string(), "H2O");
//!
//! // One mole of gas at standard temperature and pressure
//! assert_eq!(water.calculate_volume_stp(1.0), 22.3983);
//!
//! // 36.03 g of water is two moles
//! let mol = water.calculate_mol(water.calculate_mass(0.5));
//! assert!((mol - 2.0).abs() < 1e-9);
//!
//! // Element addition seeds a molecule; molecule addition merges quantities
//! let hydroxide = hydrogen.clone() + oxygen.clone();
//! assert!((hydroxide.molar_mass() - 17.007).abs() < 1e-9);
//! let peroxide = hydroxide.add_molecule(&(hydrogen.clone() + oxygen.clone()));
//! assert_eq!(peroxide.to_string(), "H2O2");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! # Module Organization
//!
//! - [`table`] — The periodic-table registry and element dataset loading
//!
//! # Data Types
//!
//! - [`Element`] — Immutable periodic-table entry; equality by atomic number
//! - [`Molecule`] — Fixed composition with derived physical quantities
//! - [`PeriodicTable`] — Element registry with number/symbol lookup
//! - [`ElementRecord`] — One dataset record (number, name, symbol, mass)
//! - [`Selector`] — Lookup target: atomic number or symbol
//!
//! # Errors
//!
//! - [`ElementNotDefined`] — Table lookup misses
//! - [`DatasetError`] — Dataset read/parse and population failures
//! - [`MoleculeError`] — Composition invariant violations

mod model;

pub mod table;

pub use model::element::Element;
pub use model::molecule::{
    GAS_CONSTANT, Molecule, MoleculeError, STANDARD_MOLAR_VOLUME, STANDARD_PRESSURE,
    STANDARD_TEMPERATURE, STANDARD_VOLUME,
};

pub use table::{
    DatasetError, ELEMENT_COUNT, ElementNotDefined, ElementRecord, PeriodicTable, Selector,
    default_table, load_dataset, read_dataset_file,
};
