//! Domain models and request/response types

pub mod calculator;
pub mod enums;
pub mod equipment;
pub mod expertise;
pub mod registry;
pub mod schedule;
pub mod specialist;
pub mod td_report;
