use crate::domain::event::{EventOutcome, StationEvent};
use crate::domain::money::Cents;
use crate::domain::ports::StationPort;
use crate::domain::receipt::Receipt;
use crate::domain::station::PayStation;
use crate::domain::tally::CoinTally;
use crate::error::Result;
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::Mutex;

/// A thread-safe handle to a single pay station.
///
/// Uses `Arc<Mutex<PayStation>>` so the transaction and the till are guarded
/// by one lock; each operation runs to completion before the next starts.
/// `Clone` shares the same station.
#[derive(Default, Clone)]
pub struct SharedPayStation {
    station: Arc<Mutex<PayStation>>,
}

impl SharedPayStation {
    /// Creates a handle to a fresh station with the default tariff.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of the station state at this instant.
    pub async fn snapshot(&self) -> PayStation {
        self.station.lock().await.clone()
    }
}

impl From<PayStation> for SharedPayStation {
    fn from(station: PayStation) -> Self {
        Self {
            station: Arc::new(Mutex::new(station)),
        }
    }
}

#[async_trait]
impl StationPort for SharedPayStation {
    async fn insert_coin(&self, value: u32) -> Result<()> {
        let mut station = self.station.lock().await;
        station.insert_coin(value)
    }

    async fn read_display(&self) -> u64 {
        let station = self.station.lock().await;
        station.read_display()
    }

    async fn purchase(&self) -> Receipt {
        let mut station = self.station.lock().await;
        station.purchase()
    }

    async fn cancel(&self) -> CoinTally {
        let mut station = self.station.lock().await;
        station.cancel()
    }

    async fn empty_till(&self) -> Cents {
        let mut station = self.station.lock().await;
        station.empty_till()
    }

    async fn apply(&self, event: StationEvent) -> Result<EventOutcome> {
        let mut station = self.station.lock().await;
        station.apply(&event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::tariff::Tariff;
    use crate::error::PaymentError;

    #[tokio::test]
    async fn test_shared_station_operations() {
        let station = SharedPayStation::new();
        station.insert_coin(10).await.unwrap();
        station.insert_coin(25).await.unwrap();
        assert_eq!(station.read_display().await, 14);

        let receipt = station.purchase().await;
        assert_eq!(receipt.minutes_purchased(), 14);
        assert_eq!(station.empty_till().await, Cents(35));
    }

    #[tokio::test]
    async fn test_clones_share_one_station() {
        let station = SharedPayStation::from(PayStation::with_tariff(
            Tariff::new([50], 50, 15).unwrap(),
        ));
        let other = station.clone();

        station.insert_coin(50).await.unwrap();
        assert_eq!(other.read_display().await, 15);
        assert!(matches!(
            other.insert_coin(5).await,
            Err(PaymentError::InvalidCoin(5))
        ));

        let snapshot = other.snapshot().await;
        assert_eq!(snapshot.pending_amount(), Cents(50));
    }
}
