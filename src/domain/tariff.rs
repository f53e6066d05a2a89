use super::money::Cents;
use crate::error::{PaymentError, Result};
use serde::Deserialize;
use std::collections::BTreeSet;

/// The legal coin table and the money-to-time conversion rate of a station.
///
/// Every `price` minor units buy `minutes` of parking; partial prices buy
/// nothing (`floor(inserted / price) * minutes`).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "RawTariff")]
pub struct Tariff {
    coins: BTreeSet<u32>,
    price: u32,
    minutes: u32,
}

/// Unvalidated tariff as it appears in a JSON file.
#[derive(Debug, Deserialize)]
struct RawTariff {
    coins: Vec<u32>,
    price: u32,
    minutes: u32,
}

impl Tariff {
    pub fn new(coins: impl IntoIterator<Item = u32>, price: u32, minutes: u32) -> Result<Self> {
        let coins: BTreeSet<u32> = coins.into_iter().collect();
        if coins.is_empty() {
            return Err(PaymentError::InvalidTariff(
                "At least one legal coin is required".to_string(),
            ));
        }
        if coins.contains(&0) {
            return Err(PaymentError::InvalidTariff(
                "Coin denominations must be positive".to_string(),
            ));
        }
        if price == 0 {
            return Err(PaymentError::InvalidTariff(
                "Price must be positive".to_string(),
            ));
        }
        Ok(Self {
            coins,
            price,
            minutes,
        })
    }

    pub fn is_legal(&self, coin: u32) -> bool {
        self.coins.contains(&coin)
    }

    /// Minutes of parking bought by `amount`, or `None` if they do not fit in a `u64`.
    pub fn minutes_for(&self, amount: Cents) -> Option<u64> {
        (amount.value() / u64::from(self.price)).checked_mul(u64::from(self.minutes))
    }

    pub fn coins(&self) -> impl Iterator<Item = u32> + '_ {
        self.coins.iter().copied()
    }
}

impl Default for Tariff {
    /// Nickels, dimes and quarters; 5 cents buy 2 minutes.
    fn default() -> Self {
        Self {
            coins: BTreeSet::from([5, 10, 25]),
            price: 5,
            minutes: 2,
        }
    }
}

impl TryFrom<RawTariff> for Tariff {
    type Error = PaymentError;

    fn try_from(raw: RawTariff) -> std::result::Result<Self, Self::Error> {
        Self::new(raw.coins, raw.price, raw.minutes)
    }
}
