//! Bank Mandiri "Rekening Koran" statement.
//!
//! Expected reconstructed text:
//!   Tanggal  Keterangan                Debit         Kredit        Saldo
//!   Saldo Awal 5.000.000,00
//!   02/01/2024 SETORAN TUNAI                        1.000.000,00  6.000.000,00
//!   05/01/2024 TRANSFER KE
//!   BUDI SANTOSO                                                  4.500.000,00
//!
//! Debit and credit share one x-range after reconstruction and a wrapped
//! row may lose its amount column entirely, so the amount is inferred from
//! the change in running balance, starting at "Saldo Awal".

use mutasi_core::{IssuerVariant, SeparatorPolicy};

use crate::profile::{AmountStrategy, AnchorScope, IssuerProfile, SectionStart};

pub const PROFILE: IssuerProfile = IssuerProfile {
    variant: IssuerVariant::Mandiri,
    fingerprints: &["PT Bank Mandiri (Persero) Tbk"],
    section_start: SectionStart::Markers(&["Saldo Awal"]),
    section_end: &["Saldo Akhir"],
    end_is_final: true,
    noise_contains: &[
        "PT Bank Mandiri (Persero) Tbk",
        "Rekening Koran",
        "Tanggal Keterangan",
        "Lembaga Penjamin Simpanan",
    ],
    noise_patterns: &[r"^(?:Halaman\s+)?\d+\s+(?:dari|of)\s+\d+$"],
    date_anchor: r"^(\d{2}/\d{2}/\d{4})",
    amount: AmountStrategy::BalanceDelta(r"([\d.]+,\d{2})$"),
    amount_scope: AnchorScope::Joined,
    // leftover debit/credit column, time of day
    scrub: &[r"(?:\s+[\d.]+,\d{2})+\s*$", r"\b\d{2}:\d{2}(?::\d{2})?\b"],
    opening_balance: Some(r"^Saldo Awal\s*:?\s*([\d.]+,\d{2})"),
    reverse_output: false,
    number_policy: SeparatorPolicy::CommaDecimal,
};
