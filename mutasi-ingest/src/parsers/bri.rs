//! BRI (Bank Rakyat Indonesia) "Laporan Transaksi Finansial" statement.
//!
//! Expected reconstructed text:
//!   Transaction Date  Transaction Description  Teller ID  Debet  Kredit  Saldo
//!   01/02/24 08:15:30 TRANSFER DARI ANDI 8888888 0.00 1,500,000.00 6,500,000.00
//!
//! Debit, credit and balance are separate columns at the end of the date
//! line. The header repeats on every page and the table is followed by an
//! "Opening Balance" summary row, so the section can close and re-open.

use mutasi_core::{IssuerVariant, SeparatorPolicy};

use crate::profile::{AmountStrategy, AnchorScope, IssuerProfile, SectionStart};

pub const PROFILE: IssuerProfile = IssuerProfile {
    variant: IssuerVariant::Bri,
    fingerprints: &["LAPORAN TRANSAKSI FINANSIAL"],
    section_start: SectionStart::Markers(&["Transaction Date"]),
    section_end: &["Opening Balance"],
    end_is_final: false,
    noise_contains: &["LAPORAN TRANSAKSI FINANSIAL", "Tanggal Transaksi Uraian Transaksi"],
    noise_patterns: &[r"^(?:Page\s+|Halaman\s+)?\d+\s+(?:of|dari)\s+\d+$"],
    date_anchor: r"^(\d{2}/\d{2}/\d{2})",
    amount: AmountStrategy::TripleColumn(r"([\d.,]+)\s+([\d.,]+)\s+([\d.,]+)$"),
    amount_scope: AnchorScope::FirstLine,
    // time of day, 7-digit teller id
    scrub: &[r"\b\d{2}:\d{2}:\d{2}\b", r"\b\d{7}\b"],
    opening_balance: None,
    reverse_output: false,
    number_policy: SeparatorPolicy::DigitCount,
};
