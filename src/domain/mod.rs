//! Domain layer: the pay station state machine and the values it works with.

pub mod event;
pub mod money;
pub mod ports;
pub mod receipt;
pub mod station;
pub mod tally;
pub mod tariff;
