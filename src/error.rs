use thiserror::Error;

#[derive(Error, Debug)]
pub enum PaymentError {
    #[error("Invalid coin: {0}")]
    InvalidCoin(u32),
    #[error("Coin {0} would overflow the station's counters")]
    AmountOverflow(u32),
    #[error("Invalid tariff: {0}")]
    InvalidTariff(String),
    #[error("Invalid event: {0}")]
    InvalidEvent(String),
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, PaymentError>;
