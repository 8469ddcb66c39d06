//! Mining Package Entity

use chrono::{DateTime, Utc};
use kernel::id::PackageId;
use rust_decimal::{Decimal, RoundingStrategy};

/// A purchasable mining package in the catalog
#[derive(Debug, Clone)]
pub struct MiningPackage {
    pub package_id: PackageId,
    pub name: String,
    pub price: Decimal,
    pub daily_profit: Decimal,
    pub daily_return_percentage: Decimal,
    pub duration_days: i32,
    /// `price + daily_profit * duration_days`; computed at creation,
    /// never client-supplied
    pub total_return: Decimal,
    pub is_popular: bool,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

/// Raw package fields as an admin submitted them
#[derive(Debug, Clone)]
pub struct PackageDraft {
    pub name: String,
    pub price: Decimal,
    pub daily_profit: Decimal,
    pub daily_return_percentage: Decimal,
    pub duration_days: i32,
    pub is_popular: bool,
}

/// A validated package ready to be stored (id and timestamp are
/// store-assigned)
#[derive(Debug, Clone)]
pub struct NewPackage {
    pub name: String,
    pub price: Decimal,
    pub daily_profit: Decimal,
    pub daily_return_percentage: Decimal,
    pub duration_days: i32,
    pub total_return: Decimal,
    pub is_popular: bool,
}

impl PackageDraft {
    /// Validate the draft and compute the total return
    ///
    /// Every field must be present and positive: a blank name, a
    /// non-positive money field or a non-positive duration all reject the
    /// whole draft. Money fields are canonicalized to 2 decimal places.
    pub fn build(&self) -> Option<NewPackage> {
        let name = self.name.trim();
        if name.is_empty()
            || self.price <= Decimal::ZERO
            || self.daily_profit <= Decimal::ZERO
            || self.daily_return_percentage <= Decimal::ZERO
            || self.duration_days <= 0
        {
            return None;
        }

        let price = canonical_money(self.price);
        let daily_profit = canonical_money(self.daily_profit);
        let total_return = canonical_money(price + daily_profit * Decimal::from(self.duration_days));

        Some(NewPackage {
            name: name.to_string(),
            price,
            daily_profit,
            daily_return_percentage: canonical_money(self.daily_return_percentage),
            duration_days: self.duration_days,
            total_return,
            is_popular: self.is_popular,
        })
    }
}

fn canonical_money(value: Decimal) -> Decimal {
    let mut canonical = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    canonical.rescale(2);
    canonical
}

// ============================================================================
// Tests
// ============================================================================
