//! Flat export record and its column headers.

use mutasi_core::{Transaction, UnknownNameError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One exported line. Field order is column order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Row {
    pub date: String,
    pub description: String,
    pub credit: f64,
    pub debit: f64,
    pub balance: f64,
}

impl From<&Transaction> for Row {
    fn from(t: &Transaction) -> Self {
        Row {
            date: t.date.clone(),
            description: t.description.clone(),
            credit: t.credit,
            debit: t.debit,
            balance: t.balance,
        }
    }
}

impl Row {
    pub fn from_transactions(transactions: &[Transaction]) -> Vec<Row> {
        transactions.iter().map(Row::from).collect()
    }
}

/// Column header language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Labels {
    #[default]
    #[serde(rename = "en")]
    English,
    #[serde(rename = "id")]
    Indonesian,
}

impl Labels {
    pub const ALL: [Labels; 2] = [Labels::English, Labels::Indonesian];

    pub fn key(&self) -> &'static str {
        match self {
            Labels::English => "en",
            Labels::Indonesian => "id",
        }
    }

    pub fn headers(&self) -> [&'static str; 5] {
        match self {
            Labels::English => ["date", "description", "credit", "debit", "balance"],
            Labels::Indonesian => ["Tanggal", "Transaksi", "Pemasukan", "Pengeluaran", "Saldo"],
        }
    }
}

impl fmt::Display for Labels {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Labels {
    type Err = UnknownNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" | "english" => Ok(Labels::English),
            "id" | "indonesian" => Ok(Labels::Indonesian),
            _ => Err(UnknownNameError::new("label set", s, &["en", "id"])),
        }
    }
}
