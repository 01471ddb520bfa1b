use std::{fmt, ops::Neg};

use serde::{Deserialize, Serialize};

/// Signed money amount represented as **integer cents** (minor units).
///
/// Every amount in the engine (initial balances, transaction amounts, goal
/// targets, projected balances) uses this type, so summing thousands of
/// recurring movements never drifts the way floating point would.
///
/// The value is signed:
/// - positive = income / balance above zero
/// - negative = expense / overdraft
///
/// The engine is currency-agnostic: the unit is whatever single currency the
/// account uses.
///
/// # Examples
///
/// ```rust
/// use engine::MoneyCents;
///
/// let amount = MoneyCents::new(12_34);
/// assert_eq!(amount.cents(), 1234);
/// assert_eq!(amount.to_string(), "12.34");
/// assert_eq!((-amount).to_string(), "-12.34");
/// ```
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
#[repr(transparent)]
pub struct MoneyCents(i64);

impl MoneyCents {
    pub const ZERO: MoneyCents = MoneyCents(0);

    /// Largest amount a single transaction or goal may carry (one trillion
    /// units). Keeps a horizon's worth of occurrences far from `i64` limits.
    pub const MAX_AMOUNT: MoneyCents = MoneyCents(100_000_000_000_000);

    /// Creates a new amount from integer cents.
    #[must_use]
    pub const fn new(cents: i64) -> Self {
        Self(cents)
    }

    /// Returns the raw value in cents.
    #[must_use]
    pub const fn cents(self) -> i64 {
        self.0
    }

    /// Returns `true` if the amount is within `1..=MAX_AMOUNT`.
    #[must_use]
    pub const fn is_valid_amount(self) -> bool {
        self.0 > 0 && self.0 <= Self::MAX_AMOUNT.0
    }

    /// Checked addition (returns `None` on overflow).
    #[must_use]
    pub fn checked_add(self, rhs: MoneyCents) -> Option<MoneyCents> {
        self.0.checked_add(rhs.0).map(MoneyCents)
    }
}

impl fmt::Display for MoneyCents {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        write!(f, "{sign}{}.{:02}", abs / 100, abs % 100)
    }
}

impl Neg for MoneyCents {
    type Output = MoneyCents;

    fn neg(self) -> Self::Output {
        MoneyCents(-self.0)
    }
}
