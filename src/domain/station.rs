use super::event::{Action, EventOutcome, StationEvent};
use super::money::Cents;
use super::receipt::Receipt;
use super::tally::CoinTally;
use super::tariff::Tariff;
use crate::error::{PaymentError, Result};
use tracing::{debug, warn};

/// The money and time accumulated since the last reset.
///
/// `time_bought` and `coins` are always consistent with `inserted`; the whole
/// value is replaced on every change.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PendingTransaction {
    inserted: Cents,
    time_bought: u64,
    coins: CoinTally,
}

impl PendingTransaction {
    /// The transaction with `coin` added, or `None` if the amount or the
    /// minutes it buys no longer fit in a `u64`.
    fn accept(&self, coin: u32, tariff: &Tariff) -> Option<Self> {
        let inserted = self.inserted.checked_add(Cents::from(coin))?;
        let time_bought = tariff.minutes_for(inserted)?;
        let mut coins = self.coins.clone();
        coins.add(coin);
        Some(Self {
            inserted,
            time_bought,
            coins,
        })
    }

    pub fn inserted(&self) -> Cents {
        self.inserted
    }

    pub fn time_bought(&self) -> u64 {
        self.time_bought
    }

    pub fn coins(&self) -> &CoinTally {
        &self.coins
    }
}

/// What emptying the till does to a transaction that is still accepting coins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PendingOnEmpty {
    /// Drop the pending coins along with the till (historical behavior).
    #[default]
    Discard,
    /// Leave the pending transaction untouched.
    Keep,
}

/// A single parking pay station.
///
/// Accepts coins, shows the parking time they buy, and either issues a
/// `Receipt` (purchase) or hands the coins back (cancel). Completed purchases
/// accumulate in the till until it is emptied.
#[derive(Debug, Clone, Default)]
pub struct PayStation {
    tariff: Tariff,
    pending_on_empty: PendingOnEmpty,
    current: PendingTransaction,
    till: Cents,
}

impl PayStation {
    /// Creates an idle station with the default tariff.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tariff(tariff: Tariff) -> Self {
        Self {
            tariff,
            ..Self::default()
        }
    }

    pub fn with_pending_on_empty(mut self, policy: PendingOnEmpty) -> Self {
        self.pending_on_empty = policy;
        self
    }

    /// Accepts a coin, or rejects it leaving the station unchanged.
    ///
    /// Fails with `InvalidCoin` for a denomination outside the tariff and with
    /// `AmountOverflow` when the coin would push the pending amount, the
    /// displayed minutes or the till past `u64::MAX`.
    pub fn insert_coin(&mut self, value: u32) -> Result<()> {
        if !self.tariff.is_legal(value) {
            warn!(coin = value, "rejected illegal coin");
            return Err(PaymentError::InvalidCoin(value));
        }
        let accepted = self
            .current
            .accept(value, &self.tariff)
            .filter(|next| self.till.checked_add(next.inserted).is_some())
            .ok_or_else(|| {
                warn!(coin = value, "rejected coin overflowing station counters");
                PaymentError::AmountOverflow(value)
            })?;
        self.current = accepted;
        debug!(
            coin = value,
            inserted = self.current.inserted.value(),
            display = self.current.time_bought,
            "coin accepted"
        );
        Ok(())
    }

    /// Minutes of parking bought so far in the current transaction.
    pub fn read_display(&self) -> u64 {
        self.current.time_bought
    }

    /// Completes the transaction. A purchase with nothing inserted yields a
    /// zero-minute receipt.
    pub fn purchase(&mut self) -> Receipt {
        let completed = self.reset();
        // Cannot saturate: insert_coin keeps till + inserted within u64.
        self.till = self.till.saturating_add(completed.inserted);
        debug!(
            minutes = completed.time_bought,
            paid = completed.inserted.value(),
            till = self.till.value(),
            "purchase completed"
        );
        Receipt::new(completed.time_bought)
    }

    /// Aborts the transaction and returns the inserted coins.
    pub fn cancel(&mut self) -> CoinTally {
        let cancelled = self.reset();
        debug!(refund = %cancelled.coins, "transaction cancelled");
        cancelled.coins
    }

    /// Returns the till contents and zeroes it.
    pub fn empty_till(&mut self) -> Cents {
        let earned = std::mem::take(&mut self.till);
        if self.pending_on_empty == PendingOnEmpty::Discard {
            let discarded = self.reset();
            if !discarded.coins.is_empty() {
                warn!(
                    discarded = discarded.inserted.value(),
                    "pending coins discarded while emptying till"
                );
            }
        }
        debug!(earned = earned.value(), "till emptied");
        earned
    }

    /// Applies one hardware event and reports the display as it stands
    /// right after the operation.
    pub fn apply(&mut self, event: &StationEvent) -> Result<EventOutcome> {
        let outcome = match event.action {
            Action::Insert => {
                let coin = event
                    .coin
                    .ok_or_else(|| PaymentError::InvalidEvent("Insert missing coin".to_string()))?;
                self.insert_coin(coin)?;
                EventOutcome::new(Action::Insert, self.read_display())
            }
            Action::Display => EventOutcome::new(Action::Display, self.read_display()),
            Action::Purchase => {
                let receipt = self.purchase();
                EventOutcome {
                    minutes: Some(receipt.minutes_purchased()),
                    ..EventOutcome::new(Action::Purchase, self.read_display())
                }
            }
            Action::Cancel => {
                let returned = self.cancel();
                EventOutcome {
                    returned: Some(returned.to_string()),
                    ..EventOutcome::new(Action::Cancel, self.read_display())
                }
            }
            Action::Empty => {
                let earned = self.empty_till();
                EventOutcome {
                    till: Some(earned.to_major()),
                    ..EventOutcome::new(Action::Empty, self.read_display())
                }
            }
        };
        Ok(outcome)
    }

    pub fn tariff(&self) -> &Tariff {
        &self.tariff
    }

    pub fn pending(&self) -> &PendingTransaction {
        &self.current
    }

    pub fn pending_amount(&self) -> Cents {
        self.current.inserted
    }

    /// Profit collected since the last empty, without emptying.
    pub fn till(&self) -> Cents {
        self.till
    }

    pub fn is_accepting(&self) -> bool {
        self.current.inserted > Cents::ZERO
    }

    fn reset(&mut self) -> PendingTransaction {
        std::mem::take(&mut self.current)
    }
}
