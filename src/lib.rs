//! Aureo Index: a body-composition score, its rank tier and tier color,
//! computed from a snapshot of body measurements.

pub mod config;
pub mod logging;
pub mod output;
pub mod scoring;
