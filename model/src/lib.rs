//! The purpose of the model crate is to hold everything about the climate
//! dashboard that does not need a browser: the readings served by the
//! sensor endpoint, how a polling cycle's outcome is rendered into the
//! dashboard's text fields, and the loop that issues polling cycles. The
//! frontend supplies the HTTP transport and the timer.

pub mod config;
pub mod dashboard;
pub mod poll;
pub mod reading;
