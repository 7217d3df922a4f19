//! Jenius (SMBC Indonesia) transaction history.
//!
//!   Tanggal & Waktu  Rincian Transaksi                         Jumlah
//!   05 Jan 2024 14:22 Pembayaran QRIS
//!   KOPI KENANGAN Ref: QR88211                                 - 35.000
//!
//! Only a signed amount is printed; there is no running balance.

use mutasi_core::{IssuerVariant, SeparatorPolicy};

use crate::profile::{AmountStrategy, AnchorScope, IssuerProfile, SectionStart};

pub const PROFILE: IssuerProfile = IssuerProfile {
    variant: IssuerVariant::Jenius,
    fingerprints: &["PT Bank SMBC Indonesia Tbk"],
    section_start: SectionStart::Markers(&["Riwayat Transaksi"]),
    section_end: &["Total Transaksi"],
    end_is_final: true,
    noise_contains: &[
        "PT Bank SMBC Indonesia Tbk",
        "Tanggal & Waktu",
        "terdaftar dan diawasi oleh Otoritas Jasa Keuangan",
    ],
    noise_patterns: &[r"^\d+ (?:dari|of) \d+$"],
    date_anchor: r"^(\d{1,2} (?:Jan|Feb|Mar|Apr|Mei|May|Jun|Jul|Agu|Aug|Sep|Okt|Oct|Nov|Des|Dec) \d{4})",
    amount: AmountStrategy::SignedOnly(r"([+-])\s?([\d.,]+)$"),
    amount_scope: AnchorScope::Joined,
    scrub: &[r"\b\d{2}:\d{2}\b", r"\bRef:\s*\S+"],
    opening_balance: None,
    reverse_output: false,
    number_policy: SeparatorPolicy::CommaDecimal,
};

#[cfg(test)]
mod tests {
    use crate::layout::DocumentText;
    use crate::test_support::extract_with;
    use mutasi_core::IssuerVariant;

    const STATEMENT: &str = "\
PT Bank SMBC Indonesia Tbk
Riwayat Transaksi
Tanggal & Waktu Rincian Transaksi Jumlah
05 Jan 2024 14:22 Pembayaran QRIS
KOPI KENANGAN Ref: QR88211 - 35.000
6 Jan 2024 09:10 Terima Uang dari BUDI + 1.500.000
Total Transaksi
07 Jan 2024 10:00 SESUDAH TOTAL - 1
";

    #[test]
    fn test_signed_amount_without_balance() {
        let out = extract_with(IssuerVariant::Jenius, &DocumentText::from(STATEMENT));
        let t = &out.transactions;
        assert_eq!(t.len(), 2);

        assert_eq!(t[0].date, "05 Jan 2024");
        assert_eq!(t[0].description, "Pembayaran QRIS KOPI KENANGAN");
        assert_eq!(t[0].debit, 35_000.0);
        assert_eq!(t[0].credit, 0.0);
        assert_eq!(t[0].balance, 0.0);

        assert_eq!(t[1].date, "6 Jan 2024");
        assert_eq!(t[1].description, "Terima Uang dari BUDI");
        assert_eq!(t[1].credit, 1_500_000.0);
        assert_eq!(t[1].balance, 0.0);

        // no balance column, nothing to cross-check
        assert!(out.warnings.is_empty(), "{:?}", out.warnings);
    }
}
