//! Classification, segmentation and extraction wired together.

use log::{info, warn};
use mutasi_core::{IssuerVariant, PositionedFragment, SeparatorPolicy, Transaction, normalize_with};
use serde::Serialize;

use crate::check::running_balance_mismatches;
use crate::extract::extract_blocks;
use crate::layout::{DocumentText, reconstruct_document};
use crate::registry::{CompiledProfile, Registry};
use crate::segment::segment;

#[derive(Debug, Clone, Copy, Default)]
pub struct ExtractOptions {
    /// Overrides every profile's own separator policy when set.
    pub number_policy: Option<SeparatorPolicy>,
}

/// Result of parsing one statement.
#[derive(Debug, Clone, Serialize)]
pub struct Extraction {
    /// `None` when no fingerprint matched.
    pub issuer: Option<IssuerVariant>,
    /// Every issuer whose fingerprint was found, in priority order.
    pub matched: Vec<IssuerVariant>,
    pub transactions: Vec<Transaction>,
    pub blocks_segmented: usize,
    pub blocks_dropped: usize,
    pub warnings: Vec<String>,
    #[serde(skip)]
    pub raw_text: DocumentText,
}

impl Extraction {
    fn unsupported(raw_text: DocumentText, matched: Vec<IssuerVariant>) -> Self {
        Self {
            issuer: None,
            matched,
            transactions: Vec::new(),
            blocks_segmented: 0,
            blocks_dropped: 0,
            warnings: vec!["statement format not recognized; no supported issuer fingerprint found".into()],
            raw_text,
        }
    }

    pub fn is_supported(&self) -> bool {
        self.issuer.is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    pub fn total_credit(&self) -> f64 {
        self.transactions.iter().map(|t| t.credit).sum()
    }

    pub fn total_debit(&self) -> f64 {
        self.transactions.iter().map(|t| t.debit).sum()
    }
}

pub struct Extractor {
    registry: Registry,
    options: ExtractOptions,
}

impl Extractor {
    pub fn new(registry: Registry) -> Self {
        Self::with_options(registry, ExtractOptions::default())
    }

    pub fn with_options(registry: Registry, options: ExtractOptions) -> Self {
        Self { registry, options }
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn extract_pages(&self, pages: &[Vec<PositionedFragment>]) -> Extraction {
        self.extract(reconstruct_document(pages))
    }

    /// Classify by fingerprint, then parse. Unsupported documents yield no
    /// transactions rather than an error.
    pub fn extract(&self, doc: DocumentText) -> Extraction {
        let matched = self.registry.fingerprint_matches(&doc);
        let Some(profile) = self.registry.classify(&doc) else {
            warn!("no supported issuer fingerprint found");
            return Extraction::unsupported(doc, matched);
        };
        info!("classified statement as {}", profile.variant().bank_name());

        let mut warnings = Vec::new();
        if matched.len() > 1 {
            let all = matched.iter().map(|v| v.key()).collect::<Vec<_>>().join(", ");
            let note = format!("fingerprints of several issuers found ({all}); parsed as {}", profile.variant());
            warn!("{note}");
            warnings.push(note);
        }
        self.run(profile, doc, matched, warnings)
    }

    /// Parse with a fixed issuer, skipping classification.
    pub fn extract_as(&self, doc: DocumentText, variant: IssuerVariant) -> Extraction {
        let matched = self.registry.fingerprint_matches(&doc);
        match self.registry.get(variant) {
            Some(profile) => self.run(profile, doc, matched, Vec::new()),
            None => Extraction::unsupported(doc, matched),
        }
    }

    fn run(
        &self,
        profile: &CompiledProfile,
        doc: DocumentText,
        matched: Vec<IssuerVariant>,
        mut warnings: Vec<String>,
    ) -> Extraction {
        let variant = profile.variant();
        let policy = self.options.number_policy.unwrap_or(profile.profile().number_policy);

        let blocks = segment(profile, &doc);
        let blocks_segmented = blocks.len();
        let opening = profile.opening_balance(&doc).map(|raw| normalize_with(raw, policy));

        let outcome = extract_blocks(profile, blocks, policy, opening);
        warnings.extend(outcome.warnings);

        if profile.profile().amount.reports_balance() {
            for mismatch in running_balance_mismatches(&outcome.transactions) {
                warn!("{variant}: {mismatch}");
                warnings.push(mismatch.to_string());
            }
        }
        if outcome.transactions.is_empty() {
            warnings.push(format!("no transactions extracted from {variant} statement; inspect the raw text"));
        }

        info!(
            "{variant}: {} transactions from {} blocks ({} dropped)",
            outcome.transactions.len(),
            blocks_segmented,
            outcome.dropped
        );

        Extraction {
            issuer: Some(variant),
            matched,
            transactions: outcome.transactions,
            blocks_segmented,
            blocks_dropped: outcome.dropped,
            warnings,
            raw_text: doc,
        }
    }
}
