use super::money::Cents;
use std::collections::BTreeMap;
use std::fmt;

/// Count of each coin denomination inserted during a transaction.
///
/// Only denominations that were actually inserted have an entry; there are
/// never zero counts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CoinTally {
    counts: BTreeMap<u32, u64>,
}

impl CoinTally {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, coin: u32) {
        *self.counts.entry(coin).or_insert(0) += 1;
    }

    pub fn count(&self, coin: u32) -> u64 {
        self.counts.get(&coin).copied().unwrap_or(0)
    }

    /// Sum of `denomination * count` over all entries.
    pub fn total(&self) -> Cents {
        self.counts
            .iter()
            .map(|(coin, count)| Cents(u64::from(*coin).saturating_mul(*count)))
            .fold(Cents::ZERO, Cents::saturating_add)
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Iterates `(denomination, count)` pairs in ascending denomination order.
    pub fn iter(&self) -> impl Iterator<Item = (u32, u64)> + '_ {
        self.counts.iter().map(|(coin, count)| (*coin, *count))
    }

    pub fn into_map(self) -> BTreeMap<u32, u64> {
        self.counts
    }
}

impl fmt::Display for CoinTally {
    /// Renders as `5x1 10x2`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (coin, count) in self.iter() {
            if !first {
                f.write_str(" ")?;
            }
            write!(f, "{}x{}", coin, count)?;
            first = false;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tally_counts_and_total() {
        let mut tally = CoinTally::new();
        tally.add(10);
        tally.add(10);
        tally.add(5);

        assert_eq!(tally.count(10), 2);
        assert_eq!(tally.count(5), 1);
        assert_eq!(tally.count(25), 0);
        assert_eq!(tally.total(), Cents(25));
    }

    #[test]
    fn test_tally_has_no_zero_entries() {
        let mut tally = CoinTally::new();
        assert!(tally.is_empty());
        tally.add(25);

        let map = tally.into_map();
        assert_eq!(map, BTreeMap::from([(25, 1)]));
        assert!(!map.contains_key(&5));
    }

    #[test]
    fn test_tally_display() {
        let mut tally = CoinTally::new();
        tally.add(25);
        tally.add(5);
        tally.add(10);
        tally.add(10);
        assert_eq!(tally.to_string(), "5x1 10x2 25x1");
        assert_eq!(CoinTally::new().to_string(), "");
    }
}
