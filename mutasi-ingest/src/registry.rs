//! Compiled issuer profiles and statement classification.

use mutasi_core::IssuerVariant;
use regex::{Captures, Match, Regex};
use thiserror::Error;

use crate::layout::DocumentText;
use crate::parsers;
use crate::profile::{IssuerProfile, SectionStart};

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("invalid {field} pattern for {issuer}: {source}")]
    Pattern {
        issuer: IssuerVariant,
        field: &'static str,
        #[source]
        source: regex::Error,
    },

    #[error("issuer {0} listed twice in priority order")]
    DuplicatePriority(IssuerVariant),
}

/// An [`IssuerProfile`] with its patterns compiled: the predicates the
/// segmenter and field extractor run against each line.
#[derive(Debug)]
pub struct CompiledProfile {
    profile: &'static IssuerProfile,
    date_anchor: Regex,
    amount: Regex,
    noise: Vec<Regex>,
    scrub: Vec<Regex>,
    opening_balance: Option<Regex>,
}

fn compile(issuer: IssuerVariant, field: &'static str, pattern: &str) -> Result<Regex, RegistryError> {
    Regex::new(pattern).map_err(|source| RegistryError::Pattern {
        issuer,
        field,
        source,
    })
}

impl CompiledProfile {
    pub fn compile(profile: &'static IssuerProfile) -> Result<Self, RegistryError> {
        let issuer = profile.variant;
        Ok(Self {
            profile,
            date_anchor: compile(issuer, "date anchor", profile.date_anchor)?,
            amount: compile(issuer, "amount", profile.amount.pattern())?,
            noise: profile
                .noise_patterns
                .iter()
                .map(|p| compile(issuer, "noise", p))
                .collect::<Result<_, _>>()?,
            scrub: profile
                .scrub
                .iter()
                .map(|p| compile(issuer, "scrub", p))
                .collect::<Result<_, _>>()?,
            opening_balance: profile
                .opening_balance
                .map(|p| compile(issuer, "opening balance", p))
                .transpose()?,
        })
    }

    pub fn profile(&self) -> &'static IssuerProfile {
        self.profile
    }

    pub fn variant(&self) -> IssuerVariant {
        self.profile.variant
    }

    pub fn matches_fingerprint(&self, line: &str) -> bool {
        self.profile.fingerprints.iter().any(|fp| line.contains(fp))
    }

    pub fn opens_on_anchor(&self) -> bool {
        self.profile.section_start == SectionStart::FirstAnchor
    }

    pub fn is_section_start(&self, line: &str) -> bool {
        match self.profile.section_start {
            SectionStart::FirstAnchor => false,
            SectionStart::Markers(markers) => markers.iter().any(|m| line.starts_with(m)),
        }
    }

    pub fn is_section_end(&self, line: &str) -> bool {
        self.profile.section_end.iter().any(|m| line.starts_with(m))
    }

    pub fn is_noise(&self, line: &str) -> bool {
        self.profile.noise_contains.iter().any(|n| line.contains(n))
            || self.noise.iter().any(|re| re.is_match(line))
    }

    /// The date token at the start of `line`, if any.
    pub fn date_anchor<'t>(&self, line: &'t str) -> Option<Match<'t>> {
        self.date_anchor.captures(line).and_then(|c| c.get(1))
    }

    pub fn amount_captures<'t>(&self, text: &'t str) -> Option<Captures<'t>> {
        self.amount.captures(text)
    }

    /// Remove timestamps and administrative tokens.
    pub fn scrub(&self, text: &str) -> String {
        self.scrub
            .iter()
            .fold(text.to_string(), |acc, re| re.replace_all(&acc, " ").into_owned())
    }

    /// Raw opening-balance literal, from the first line that carries one.
    pub fn opening_balance<'t>(&self, doc: &'t DocumentText) -> Option<&'t str> {
        let re = self.opening_balance.as_ref()?;
        doc.lines()
            .map(str::trim)
            .find_map(|line| re.captures(line).and_then(|c| c.get(1)))
            .map(|m| m.as_str())
    }
}

/// Every supported issuer, compiled once, in classification priority order.
#[derive(Debug)]
pub struct Registry {
    profiles: Vec<CompiledProfile>,
}

impl Registry {
    /// Default priority: [`IssuerVariant::ALL`].
    pub fn new() -> Result<Self, RegistryError> {
        Self::with_priority(&IssuerVariant::ALL)
    }

    /// Issuers missing from `priority` keep their default relative order after it.
    pub fn with_priority(priority: &[IssuerVariant]) -> Result<Self, RegistryError> {
        let mut order: Vec<IssuerVariant> = Vec::with_capacity(IssuerVariant::ALL.len());
        for variant in priority {
            if order.contains(variant) {
                return Err(RegistryError::DuplicatePriority(*variant));
            }
            order.push(*variant);
        }
        for variant in IssuerVariant::ALL {
            if !order.contains(&variant) {
                order.push(variant);
            }
        }

        let profiles = order
            .into_iter()
            .map(|v| CompiledProfile::compile(parsers::profile(v)))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { profiles })
    }

    pub fn profiles(&self) -> &[CompiledProfile] {
        &self.profiles
    }

    pub fn priority(&self) -> Vec<IssuerVariant> {
        self.profiles.iter().map(CompiledProfile::variant).collect()
    }

    pub fn get(&self, variant: IssuerVariant) -> Option<&CompiledProfile> {
        self.profiles.iter().find(|p| p.variant() == variant)
    }

    /// Every issuer whose fingerprint appears somewhere in the document, in priority order.
    pub fn fingerprint_matches(&self, doc: &DocumentText) -> Vec<IssuerVariant> {
        self.profiles
            .iter()
            .filter(|p| doc.lines().any(|line| p.matches_fingerprint(line)))
            .map(CompiledProfile::variant)
            .collect()
    }

    /// First issuer in priority order whose fingerprint appears; `None` if unsupported.
    pub fn classify(&self, doc: &DocumentText) -> Option<&CompiledProfile> {
        self.profiles
            .iter()
            .find(|p| doc.lines().any(|line| p.matches_fingerprint(line)))
    }
}
