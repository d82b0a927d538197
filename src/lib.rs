//! # StarWatch
//!
//! Terminal dashboard for Starlink dish telemetry.
//!
//! A background poll loop reads the dish status over gRPC every few seconds,
//! derives alignment/obstruction metrics, optionally appends a CSV row, and
//! hands the result to the ratatui front end through a channel.

pub mod app;
pub mod cli;
pub mod core;
pub mod screens;
pub mod utils;
