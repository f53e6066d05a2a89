use crate::domain::tariff::Tariff;
use crate::error::Result;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Loads a tariff from a JSON file such as
/// `{"coins": [5, 10, 25], "price": 5, "minutes": 2}`.
pub fn load_tariff<P: AsRef<Path>>(path: P) -> Result<Tariff> {
    let file = File::open(path)?;
    read_tariff(BufReader::new(file))
}

pub fn read_tariff<R: Read>(source: R) -> Result<Tariff> {
    Ok(serde_json::from_reader(source)?)
}
