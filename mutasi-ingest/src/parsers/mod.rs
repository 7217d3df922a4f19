//! Issuer-specific statement profiles.

pub mod bni;
pub mod bri;
pub mod jenius;
pub mod mandiri;
pub mod seabank;

use mutasi_core::IssuerVariant;

use crate::profile::IssuerProfile;

pub fn profile(variant: IssuerVariant) -> &'static IssuerProfile {
    match variant {
        IssuerVariant::Bni => &bni::PROFILE,
        IssuerVariant::Bri => &bri::PROFILE,
        IssuerVariant::Mandiri => &mandiri::PROFILE,
        IssuerVariant::Seabank => &seabank::PROFILE,
        IssuerVariant::Jenius => &jenius::PROFILE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_table_is_consistent() {
        for variant in IssuerVariant::ALL {
            let p = profile(variant);
            assert_eq!(p.variant, variant);
            assert!(!p.fingerprints.is_empty(), "{variant} has no fingerprint");
            assert!(p.date_anchor.starts_with('^'), "{variant} date anchor not anchored");
            assert!(p.amount.pattern().ends_with('$'), "{variant} amount not tail-anchored");
        }
    }

    #[test]
    fn test_fingerprints_are_disjoint() {
        for a in IssuerVariant::ALL {
            for b in IssuerVariant::ALL.into_iter().filter(|b| *b != a) {
                for fp in profile(a).fingerprints {
                    assert!(
                        !profile(b).fingerprints.iter().any(|other| other.contains(fp)),
                        "{a} fingerprint '{fp}' overlaps {b}"
                    );
                }
            }
        }
    }
}
