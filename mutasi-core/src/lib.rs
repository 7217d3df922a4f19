//! mutasi-core: shared statement types and the locale-aware amount normalizer

pub mod currency;
pub mod error;
pub mod fragment;
pub mod issuer;
pub mod transaction;

pub use currency::{SeparatorPolicy, normalize, normalize_with};
pub use error::UnknownNameError;
pub use fragment::PositionedFragment;
pub use issuer::IssuerVariant;
pub use transaction::{Transaction, TransactionBlock};
