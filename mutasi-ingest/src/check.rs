//! Running-balance cross-check over extracted transactions.

use std::fmt;

use mutasi_core::Transaction;

use crate::extract::BALANCE_EPSILON;

#[derive(Debug, Clone, PartialEq)]
pub struct BalanceMismatch {
    /// Position of the offending row in the transaction list.
    pub index: usize,
    pub date: String,
    /// Previous balance plus this row's net amount.
    pub expected: f64,
    pub reported: f64,
}

impl fmt::Display for BalanceMismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "balance mismatch at row {} ({}): statement shows {:.2}, running balance gives {:.2}",
            self.index, self.date, self.reported, self.expected
        )
    }
}

/// Rows whose reported balance does not follow from the previous row.
/// Only meaningful for issuers that print a balance column.
pub fn running_balance_mismatches(transactions: &[Transaction]) -> Vec<BalanceMismatch> {
    transactions
        .windows(2)
        .enumerate()
        .filter_map(|(i, pair)| {
            let expected = pair[0].balance + pair[1].net();
            ((pair[1].balance - expected).abs() >= BALANCE_EPSILON).then(|| BalanceMismatch {
                index: i + 1,
                date: pair[1].date.clone(),
                expected,
                reported: pair[1].balance,
            })
        })
        .collect()
}
