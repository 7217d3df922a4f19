//! mutasi-ingest: page text reconstruction, issuer classification and the
//! statement parsers that turn reconstructed text into transactions.

pub mod check;
pub mod extract;
pub mod layout;
pub mod parsers;
pub mod pipeline;
pub mod profile;
pub mod registry;
pub mod segment;
pub mod source;

#[cfg(test)]
mod test_support;

pub use check::{BalanceMismatch, running_balance_mismatches};
pub use layout::{DocumentText, assemble_document, reconstruct_document, reconstruct_page};
pub use pipeline::{ExtractOptions, Extraction, Extractor};
pub use registry::{Registry, RegistryError};
pub use source::{FragmentDump, PageSource, Pages, SourceError, load_pages};
