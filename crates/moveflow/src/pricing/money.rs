//! Currency helpers for the fare pipeline.
//!
//! All published amounts are whole currency units; every intermediate value
//! that reaches a line item passes through [`round_money`] at exactly the
//! point the tariff defines, so repeated calculations reproduce totals
//! bit-for-bit.

use rust_decimal::prelude::*;
use rust_decimal::Decimal;

/// Round to whole currency units using round-half-up.
///
/// Half-up (away from zero at the midpoint) matches the published tariff:
/// `49.5` becomes `50`, `287.5` becomes `288`, `16.5` becomes `17`.
pub fn round_money(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}

/// Percentage label for a fractional rate, e.g. `0.15` renders as `15%`.
pub(crate) fn rate_percent(rate: Decimal) -> String {
    format!("{}%", (rate * Decimal::ONE_HUNDRED).normalize())
}
