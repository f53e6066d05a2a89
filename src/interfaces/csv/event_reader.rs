use crate::domain::event::StationEvent;
use crate::error::{PaymentError, Result};
use std::io::Read;

/// Reads station events from a CSV source with an `action, coin` header.
///
/// Whitespace is trimmed and rows may omit the trailing coin column.
pub struct EventReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> EventReader<R> {
    /// Creates a new `EventReader` from any `Read` source (e.g., File, Stdin).
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    /// Returns an iterator that lazily reads and deserializes events.
    pub fn events(self) -> impl Iterator<Item = Result<StationEvent>> {
        self.reader
            .into_deserialize()
            .map(|result| result.map_err(PaymentError::from))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::event::Action;

    #[test]
    fn test_reader_valid_stream() {
        let data = "action, coin\ninsert, 5\ninsert, 10\npurchase";
        let reader = EventReader::new(data.as_bytes());
        let results: Vec<Result<StationEvent>> = reader.events().collect();

        assert_eq!(results.len(), 3);
        let first = results[0].as_ref().unwrap();
        assert_eq!(first.action, Action::Insert);
        assert_eq!(first.coin, Some(5));
        let last = results[2].as_ref().unwrap();
        assert_eq!(last.action, Action::Purchase);
        assert_eq!(last.coin, None);
    }

    #[test]
    fn test_reader_malformed_line() {
        let data = "action, coin\nrefund, 5\ninsert, dime\ncancel,";
        let reader = EventReader::new(data.as_bytes());
        let results: Vec<Result<StationEvent>> = reader.events().collect();

        assert!(results[0].is_err());
        assert!(results[1].is_err());
        assert!(results[2].is_ok());
    }
}
