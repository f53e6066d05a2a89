//! Application layer containing the event orchestration.
//!
//! This module defines the `StationEngine` which acts as the primary entry point
//! for replaying hardware events against a pay station. It talks to the station
//! only through the `StationPort` trait, so a shared, lock-guarded station can be
//! driven from several tasks.

pub mod engine;
