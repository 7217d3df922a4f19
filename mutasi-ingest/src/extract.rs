//! Field extraction: one transaction per block, or none.

use log::{debug, warn};
use mutasi_core::{SeparatorPolicy, Transaction, TransactionBlock, normalize_with};

use crate::profile::{AmountStrategy, AnchorScope};
use crate::registry::CompiledProfile;

/// Tolerance for balance arithmetic; differences below one cent are noise.
pub const BALANCE_EPSILON: f64 = 0.01;

#[derive(Debug, Default)]
pub struct ExtractOutcome {
    pub transactions: Vec<Transaction>,
    /// Blocks without a date or amount anchor.
    pub dropped: usize,
    pub warnings: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Amounts {
    credit: f64,
    debit: f64,
    balance: f64,
}

impl Amounts {
    fn signed(value: f64, balance: f64) -> Self {
        if value < 0.0 {
            Amounts { credit: 0.0, debit: -value, balance }
        } else {
            Amounts { credit: value, debit: 0.0, balance }
        }
    }

    fn from_delta(delta: f64, balance: f64) -> Self {
        let delta = round_cents(delta);
        if delta.abs() < BALANCE_EPSILON {
            Amounts { credit: 0.0, debit: 0.0, balance }
        } else {
            Amounts::signed(delta, balance)
        }
    }
}

fn round_cents(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

/// Extract every block in statement order. Statements printed most recent
/// first are walked oldest first, so output is always chronological and
/// balance deltas run forward in time.
pub fn extract_blocks(
    profile: &CompiledProfile,
    mut blocks: Vec<TransactionBlock>,
    policy: SeparatorPolicy,
    opening_balance: Option<f64>,
) -> ExtractOutcome {
    if profile.profile().reverse_output {
        blocks.reverse();
    }

    let mut out = ExtractOutcome::default();
    let mut previous = opening_balance;

    for block in &blocks {
        match extract_block(profile, block, policy, previous) {
            Some((txn, note)) => {
                if let Some(note) = note {
                    warn!("{}: {}", profile.variant(), note);
                    out.warnings.push(note);
                }
                previous = Some(txn.balance);
                out.transactions.push(txn);
            }
            None => {
                debug!("{}: dropped block '{}'", profile.variant(), block.joined());
                out.dropped += 1;
            }
        }
    }

    out
}

/// `previous` is the balance before this block, used by the balance-delta strategy.
fn extract_block(
    profile: &CompiledProfile,
    block: &TransactionBlock,
    policy: SeparatorPolicy,
    previous: Option<f64>,
) -> Option<(Transaction, Option<String>)> {
    let first = block.first_line();
    let date = profile.date_anchor(first)?;

    let scope = match profile.profile().amount_scope {
        AnchorScope::FirstLine => first.to_string(),
        AnchorScope::Joined => block.joined(),
    };
    let caps = profile.amount_captures(&scope)?;
    let anchor = caps.get(0)?;
    // both spans index `scope`, which begins with the date line
    if anchor.start() < date.end() {
        return None;
    }

    let num = |i: usize| caps.get(i).map_or(0.0, |m| normalize_with(m.as_str(), policy));
    let mut note = None;

    let amounts = match profile.profile().amount {
        AmountStrategy::SignedPair(_) => Amounts::signed(num(1), num(2)),
        AmountStrategy::SignedOnly(_) => {
            let value = num(2).abs();
            let negative = caps.get(1).is_some_and(|m| m.as_str() == "-");
            Amounts::signed(if negative { -value } else { value }, 0.0)
        }
        AmountStrategy::TripleColumn(_) => Amounts {
            debit: num(1).abs(),
            credit: num(2).abs(),
            balance: num(3),
        },
        AmountStrategy::BalanceDelta(_) => {
            let balance = num(1);
            match previous {
                Some(prev) => Amounts::from_delta(balance - prev, balance),
                None => {
                    note = Some(format!(
                        "no opening balance found; row dated {} seeds the running balance with a zero amount",
                        date.as_str()
                    ));
                    Amounts { credit: 0.0, debit: 0.0, balance }
                }
            }
        }
    };

    let mut rest = String::with_capacity(scope.len());
    rest.push_str(&scope[date.end()..anchor.start()]);
    rest.push(' ');
    rest.push_str(&scope[anchor.end()..]);
    if profile.profile().amount_scope == AnchorScope::FirstLine {
        for line in block.continuation() {
            rest.push(' ');
            rest.push_str(line);
        }
    }
    let description = profile
        .scrub(&rest)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");

    let txn = Transaction {
        date: date.as_str().to_string(),
        description,
        credit: amounts.credit,
        debit: amounts.debit,
        balance: amounts.balance,
    };
    Some((txn, note))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::Registry;
    use mutasi_core::IssuerVariant;

    fn block(lines: &[&str]) -> TransactionBlock {
        let mut b = TransactionBlock::new(lines[0]);
        for l in &lines[1..] {
            b.push(*l);
        }
        b
    }

    #[test]
    fn test_delta_rounding_and_epsilon() {
        assert_eq!(Amounts::from_delta(0.004, 10.0).credit, 0.0);
        assert_eq!(Amounts::from_delta(-0.004, 10.0).debit, 0.0);
        let a = Amounts::from_delta(100.10000000001, 10.0);
        assert_eq!(a.credit, 100.1);
        let a = Amounts::from_delta(-2.5, 7.5);
        assert_eq!((a.credit, a.debit, a.balance), (0.0, 2.5, 7.5));
    }

    #[test]
    fn test_date_only_block_dropped() {
        let reg = Registry::new().unwrap();
        let bni = reg.get(IssuerVariant::Bni).unwrap();
        let out = extract_blocks(
            bni,
            vec![block(&["01 Jan 2024 TANDA TANGAN"]), block(&["NO DATE +1,00 1,00"])],
            SeparatorPolicy::DigitCount,
            None,
        );
        assert!(out.transactions.is_empty());
        assert_eq!(out.dropped, 2);
    }

    #[test]
    fn test_first_line_scope_keeps_continuation_as_description() {
        let reg = Registry::new().unwrap();
        let bri = reg.get(IssuerVariant::Bri).unwrap();
        let out = extract_blocks(
            bri,
            vec![block(&["01/02/24 10:00:00 TRF 1234567 0.00 25.00 125.00", "REF 99"])],
            SeparatorPolicy::DigitCount,
            None,
        );
        let t = &out.transactions[0];
        assert_eq!(t.description, "TRF REF 99");
        assert_eq!((t.debit, t.credit, t.balance), (0.0, 25.0, 125.0));
    }

    #[test]
    fn test_policy_is_applied_to_every_token() {
        let reg = Registry::new().unwrap();
        let bni = reg.get(IssuerVariant::Bni).unwrap();
        let blocks = vec![block(&["01 Jan 2024 BUNGA +1.500 2.500"])];

        let digit = extract_blocks(bni, blocks.clone(), SeparatorPolicy::DigitCount, None);
        assert_eq!(digit.transactions[0].credit, 1500.0);
        assert_eq!(digit.transactions[0].balance, 2500.0);

        let dot = extract_blocks(bni, blocks, SeparatorPolicy::DotDecimal, None);
        assert_eq!(dot.transactions[0].credit, 1.5);
        assert_eq!(dot.transactions[0].balance, 2.5);
    }

    #[test]
    fn test_balance_delta_chain() {
        let reg = Registry::new().unwrap();
        let mandiri = reg.get(IssuerVariant::Mandiri).unwrap();
        let out = extract_blocks(
            mandiri,
            vec![
                block(&["01/03/2024 GAJI 10.000.000,50"]),
                block(&["02/03/2024 BELANJA", "SUPERMARKET 9.750.000,25"]),
            ],
            SeparatorPolicy::CommaDecimal,
            Some(0.5),
        );
        let t = &out.transactions;
        assert_eq!(t[0].credit, 10_000_000.0);
        assert_eq!(t[1].debit, 250_000.25);
        assert_eq!(t[1].description, "BELANJA SUPERMARKET");
        let mut prev = 0.5;
        for txn in t {
            assert!((txn.balance - prev - txn.net()).abs() < BALANCE_EPSILON);
            prev = txn.balance;
        }
    }
}
