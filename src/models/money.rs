use rust_decimal::{Decimal, RoundingStrategy};

pub const CURRENCY_SYMBOL: &str = "₹";

/// Formats an amount as rupees with exactly two decimals and no grouping.
///
/// Rounds half away from zero, so `99.995` becomes `₹100.00`.
pub fn format_currency(amount: Decimal) -> String {
    let mut rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(2);
    format!("{CURRENCY_SYMBOL}{rounded}")
}
