//! Revenue share policy.
//!
//! Creators keep 80% of premium content revenue and the platform keeps the
//! rest. Shares are computed in cents; the platform takes the rounding
//! remainder so both shares always add up to the price.

use serde::Serialize;

use crate::domain::foundation::Money;

/// Percentage of a premium price paid out to its creator.
pub const CREATOR_SHARE_PERCENT: u64 = 80;

/// Percentage of a premium price retained by the platform.
pub const PLATFORM_SHARE_PERCENT: u64 = 100 - CREATOR_SHARE_PERCENT;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RevenueSplit {
    pub creator: Money,
    pub platform: Money,
}

impl RevenueSplit {
    pub fn of(price: Money) -> Self {
        let creator = price.percent(CREATOR_SHARE_PERCENT);
        Self {
            creator,
            platform: price - creator,
        }
    }

    pub fn total(&self) -> Money {
        self.creator + self.platform
    }
}
