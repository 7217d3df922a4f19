//! BNI (Bank Negara Indonesia) "Laporan Mutasi Rekening" statement.
//!
//! Expected reconstructed text:
//!   Tanggal & Waktu   Rincian Transaksi                 Nominal (IDR)    Saldo (IDR)
//!   01 Jan 2024       TRANSFER DARI BUDI
//!   08:15:02 WIB                                      +1.000.000,00   6.000.000,00
//!
//! The signed nominal says credit (`+`) or debit (`-`); the last figure is the
//! running balance. A row often wraps, so amounts are searched in the joined block.

use mutasi_core::{IssuerVariant, SeparatorPolicy};

use crate::profile::{AmountStrategy, AnchorScope, IssuerProfile, SectionStart};

pub const PROFILE: IssuerProfile = IssuerProfile {
    variant: IssuerVariant::Bni,
    fingerprints: &["PT Bank Negara Indonesia"],
    section_start: SectionStart::FirstAnchor,
    section_end: &["Saldo Akhir", "Informasi Lainnya"],
    end_is_final: true,
    noise_contains: &[
        "PT Bank Negara Indonesia",
        "Laporan Mutasi Rekening",
        "Periode:",
        "Tanggal & Waktu",
        "berizin dan diawasi oleh Otoritas Jasa Keuangan",
        "peserta penjaminan Lembaga Penjamin Simpanan",
    ],
    noise_patterns: &[r"^\d+ dari \d+$"],
    date_anchor: r"^(\d{2} (?:Jan|Feb|Mar|Apr|Mei|Jun|Jul|Ags|Agu|Sep|Okt|Nov|Des) \d{4})",
    amount: AmountStrategy::SignedPair(r"([+-][\d.,]+)\s+([\d.,]+)$"),
    amount_scope: AnchorScope::Joined,
    scrub: &[r"\d{2}:\d{2}:\d{2} WIB"],
    opening_balance: None,
    reverse_output: false,
    number_policy: SeparatorPolicy::DigitCount,
};
