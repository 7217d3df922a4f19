use mutasi_core::IssuerVariant;

use crate::layout::DocumentText;
use crate::pipeline::{Extraction, Extractor};
use crate::registry::Registry;

/// Parse `doc` as `variant` with the default registry and number policy.
pub fn extract_with(variant: IssuerVariant, doc: &DocumentText) -> Extraction {
    let extractor = Extractor::new(Registry::new().expect("built-in profiles compile"));
    extractor.extract_as(doc.clone(), variant)
}
