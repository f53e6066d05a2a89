use crate::domain::event::EventOutcome;
use crate::error::Result;
use std::io::Write;

const HEADER: [&str; 5] = ["action", "display", "minutes", "returned", "till"];

/// Writes event outcomes as CSV rows under an
/// `action,display,minutes,returned,till` header.
pub struct OutcomeWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> OutcomeWriter<W> {
    /// Creates the writer and emits the header right away, so a session with
    /// no outcomes still produces a valid CSV document.
    pub fn new(sink: W) -> Result<Self> {
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(sink);
        writer.write_record(HEADER)?;
        Ok(Self { writer })
    }

    pub fn write_outcome(&mut self, outcome: &EventOutcome) -> Result<()> {
        self.writer.serialize(outcome)?;
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
