//! Core value types for chemical computation.
//!
//! - [`element`] – Immutable periodic-table entries with identity equality.
//! - [`molecule`] – Element/quantity compositions and the physical
//!   quantities derived from them (molar mass, mass fractions, ideal-gas
//!   volume and pressure).
//!
//! The data model intentionally separates the element values themselves from
//! the registry that owns them ([`crate::table`]): elements are plain
//! immutable data, while the table is the single source of truth that
//! constructs them from the reference dataset.

pub mod element;
pub mod molecule;
