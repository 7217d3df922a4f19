//! Transaction records produced by the statement parsers.

use serde::{Deserialize, Serialize};

/// Normalized output of the statement parsers (bank-agnostic).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Date exactly as the issuer prints it; never reparsed.
    pub date: String,
    pub description: String,
    /// Money in, always >= 0.
    pub credit: f64,
    /// Money out, always >= 0.
    pub debit: f64,
    /// Running balance after this row; 0.0 when the issuer does not print one.
    pub balance: f64,
}

impl Transaction {
    /// Signed effect on the balance (credit positive).
    pub fn net(&self) -> f64 {
        self.credit - self.debit
    }

    pub fn is_credit(&self) -> bool {
        self.credit > 0.0
    }

    pub fn is_debit(&self) -> bool {
        self.debit > 0.0
    }
}

/// Raw trimmed lines attributed to one transaction, first line carrying the date anchor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionBlock {
    lines: Vec<String>,
}

impl TransactionBlock {
    pub fn new(first_line: impl Into<String>) -> Self {
        Self {
            lines: vec![first_line.into()],
        }
    }

    pub fn push(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    pub fn first_line(&self) -> &str {
        // a block is never empty: it is created from its anchor line
        self.lines.first().map(String::as_str).unwrap_or("")
    }

    pub fn continuation(&self) -> &[String] {
        self.lines.get(1..).unwrap_or(&[])
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// All lines joined with single spaces.
    pub fn joined(&self) -> String {
        self.lines.join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_block_join_and_continuation() {
        let mut block = TransactionBlock::new("05/01/2024 TRANSFER KE");
        block.push("BUDI SANTOSO 4.500.000,00");
        assert_eq!(block.first_line(), "05/01/2024 TRANSFER KE");
        assert_eq!(block.continuation(), ["BUDI SANTOSO 4.500.000,00".to_string()]);
        assert_eq!(block.joined(), "05/01/2024 TRANSFER KE BUDI SANTOSO 4.500.000,00");
    }

    #[test]
    fn test_net_and_direction() {
        let t = Transaction {
            date: "01 Jan 2024".into(),
            description: "GAJI".into(),
            credit: 250.0,
            debit: 0.0,
            balance: 1250.0,
        };
        assert_eq!(t.net(), 250.0);
        assert!(t.is_credit());
        assert!(!t.is_debit());
    }

    #[test]
    fn test_serializes_fixed_field_names() {
        let t = Transaction {
            date: "01/02/24".into(),
            description: "PAYMENT".into(),
            credit: 0.0,
            debit: 500.0,
            balance: 4500.0,
        };
        let v = serde_json::to_value(&t).unwrap();
        let keys: Vec<_> = v.as_object().unwrap().keys().cloned().collect();
        assert_eq!(keys.len(), 5);
        for k in ["date", "description", "credit", "debit", "balance"] {
            assert!(keys.iter().any(|key| key == k), "missing {k}");
        }
    }
}
