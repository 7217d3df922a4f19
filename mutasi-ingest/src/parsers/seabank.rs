//! SeaBank account history statement.
//!
//! Rows are printed most recent first:
//!   Tanggal Transaksi  Keterangan                     Nominal    Saldo
//!   10 Feb 2024 19:45 Bunga Tabungan                  +1.250     1.201.250
//!   08 Feb 2024 12:30 Transfer Keluar ke ANDI         -300.000   1.200.000
//!
//! Whole rupiah with `.` grouping, so a single `.` is never a decimal point.

use mutasi_core::{IssuerVariant, SeparatorPolicy};

use crate::profile::{AmountStrategy, AnchorScope, IssuerProfile, SectionStart};

pub const PROFILE: IssuerProfile = IssuerProfile {
    variant: IssuerVariant::Seabank,
    fingerprints: &["PT Bank Seabank Indonesia"],
    section_start: SectionStart::Markers(&["Tanggal Transaksi"]),
    section_end: &["Catatan:"],
    end_is_final: false,
    noise_contains: &[
        "PT Bank Seabank Indonesia",
        "Rekening Tabungan",
        "terdaftar dan diawasi oleh Otoritas Jasa Keuangan",
    ],
    noise_patterns: &[r"^\d+ (?:dari|of) \d+$"],
    date_anchor: r"^(\d{2} (?:Jan|Feb|Mar|Apr|Mei|Jun|Jul|Agu|Sep|Okt|Nov|Des) \d{4})",
    amount: AmountStrategy::SignedPair(r"([+-][\d.,]+)\s+([\d.,]+)$"),
    amount_scope: AnchorScope::Joined,
    scrub: &[r"\b\d{2}:\d{2}\b"],
    opening_balance: None,
    reverse_output: true,
    number_policy: SeparatorPolicy::CommaDecimal,
};
