use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone, Copy)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    Insert,
    Display,
    Purchase,
    Cancel,
    Empty,
}

/// One interaction with the station, as recorded by the coin and button hardware.
#[derive(Debug, Deserialize, PartialEq, Eq, Clone)]
pub struct StationEvent {
    pub action: Action,
    /// Denomination for `insert`; ignored by every other action.
    pub coin: Option<u32>,
}

impl StationEvent {
    pub fn insert(coin: u32) -> Self {
        Self {
            action: Action::Insert,
            coin: Some(coin),
        }
    }

    pub fn new(action: Action) -> Self {
        Self { action, coin: None }
    }
}

/// What a single event did, as reported back to the caller.
#[derive(Debug, Serialize, PartialEq, Clone)]
pub struct EventOutcome {
    pub action: Action,
    /// Display reading right after the event.
    pub display: u64,
    /// Minutes on the receipt, for purchases.
    pub minutes: Option<u64>,
    /// Coins handed back, for cancellations.
    pub returned: Option<String>,
    /// Emptied till in major units, for till collection.
    pub till: Option<Decimal>,
}

impl EventOutcome {
    pub(crate) fn new(action: Action, display: u64) -> Self {
        Self {
            action,
            display,
            minutes: None,
            returned: None,
            till: None,
        }
    }
}
