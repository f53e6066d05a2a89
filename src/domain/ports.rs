use super::event::{EventOutcome, StationEvent};
use super::money::Cents;
use super::receipt::Receipt;
use super::tally::CoinTally;
use crate::error::Result;
use async_trait::async_trait;

/// Access to one pay station that may be shared between several callers
/// (coin acceptor, buttons, till collection).
#[async_trait]
pub trait StationPort: Send + Sync {
    async fn insert_coin(&self, value: u32) -> Result<()>;
    async fn read_display(&self) -> u64;
    async fn purchase(&self) -> Receipt;
    async fn cancel(&self) -> CoinTally;
    async fn empty_till(&self) -> Cents;
    /// Applies one event and reads the display without letting another
    /// caller in between.
    async fn apply(&self, event: StationEvent) -> Result<EventOutcome>;
}

pub type StationPortBox = Box<dyn StationPort>;
