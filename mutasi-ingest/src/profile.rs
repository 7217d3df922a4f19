//! Issuer profiles: every layout detail of a statement format kept as data.
//!
//! Patterns are plain regex strings here and compiled once by
//! [`crate::registry::Registry`]. Adding an issuer means adding a profile in
//! `parsers/` and a variant to [`IssuerVariant`]; nothing else changes.

use mutasi_core::{IssuerVariant, SeparatorPolicy};

/// What opens the transaction-bearing region of a statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionStart {
    /// The first date-anchor line opens the section.
    FirstAnchor,
    /// A line starting with one of these markers opens (or re-opens) the
    /// section; the marker line itself is not part of any block.
    Markers(&'static [&'static str]),
}

/// How a block's amounts are read. Each variant carries its tail-anchored pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AmountStrategy {
    /// Groups: 1 = signed amount (`+1.000,00` / `-250.00`), 2 = balance.
    SignedPair(&'static str),
    /// Groups: 1 = sign, 2 = amount. No running balance on the statement.
    SignedOnly(&'static str),
    /// Groups: 1 = debit, 2 = credit, 3 = balance.
    TripleColumn(&'static str),
    /// Group 1 = balance; the amount is the change from the previous row.
    BalanceDelta(&'static str),
}

impl AmountStrategy {
    pub fn pattern(&self) -> &'static str {
        match self {
            AmountStrategy::SignedPair(p)
            | AmountStrategy::SignedOnly(p)
            | AmountStrategy::TripleColumn(p)
            | AmountStrategy::BalanceDelta(p) => p,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            AmountStrategy::SignedPair(_) => "signed-pair",
            AmountStrategy::SignedOnly(_) => "signed-only",
            AmountStrategy::TripleColumn(_) => "triple-column",
            AmountStrategy::BalanceDelta(_) => "balance-delta",
        }
    }

    pub fn reports_balance(&self) -> bool {
        !matches!(self, AmountStrategy::SignedOnly(_))
    }
}

/// Where the amount pattern is searched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorScope {
    /// Only the date line; continuation lines are pure description.
    FirstLine,
    /// All block lines joined with spaces.
    Joined,
}

#[derive(Debug, Clone, Copy)]
pub struct IssuerProfile {
    pub variant: IssuerVariant,
    /// Any one of these substrings on any line identifies the issuer.
    pub fingerprints: &'static [&'static str],
    pub section_start: SectionStart,
    /// Prefixes of lines that close the section.
    pub section_end: &'static [&'static str],
    /// Stop reading at the first end marker instead of waiting for a new start marker.
    pub end_is_final: bool,
    /// Substrings marking page furniture and boilerplate.
    pub noise_contains: &'static [&'static str],
    /// Whole-line noise patterns such as page counters.
    pub noise_patterns: &'static [&'static str],
    /// Must be anchored with `^`; group 1 is the date as printed.
    pub date_anchor: &'static str,
    pub amount: AmountStrategy,
    pub amount_scope: AnchorScope,
    /// Removed from descriptions (timestamps, teller IDs, channel codes).
    pub scrub: &'static [&'static str],
    /// Group 1 = balance carried in before the first row.
    pub opening_balance: Option<&'static str>,
    /// The statement lists the most recent row first.
    pub reverse_output: bool,
    pub number_policy: SeparatorPolicy,
}
