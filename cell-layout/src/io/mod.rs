mod export;
mod import;

/// External (serializable) representations of all layout related entities.
pub mod ext_repr;

/// Tab-separated export of matrices, for spreadsheet tooling
pub mod tsv;

/// Exports a solution out of the library.
pub use export::export;

/// Imports an instance into the library.
pub use import::import;
