use crate::domain::event::{EventOutcome, StationEvent};
use crate::domain::ports::StationPortBox;
use crate::error::Result;
use tracing::debug;

/// Drives a pay station from a stream of hardware events.
///
/// `StationEngine` owns the station port and applies each event in order,
/// awaiting the station before accepting the next event. Each event is applied
/// as one step on the port, so the reported display belongs to that event even
/// when other holders of the same station are active.
pub struct StationEngine {
    station: StationPortBox,
}

impl StationEngine {
    /// Creates a new `StationEngine` over the given station.
    pub fn new(station: StationPortBox) -> Self {
        Self { station }
    }

    /// Applies one event to the station.
    ///
    /// Fails with `InvalidEvent` for an insert without a coin and with
    /// `InvalidCoin` for an illegal denomination; the station is unchanged
    /// in both cases.
    pub async fn process_event(&self, event: StationEvent) -> Result<EventOutcome> {
        let outcome = self.station.apply(event).await?;
        debug!(?outcome, "event processed");
        Ok(outcome)
    }

    /// Consumes the engine and hands back the station.
    pub fn into_station(self) -> StationPortBox {
        self.station
    }
}
