//! Shared test harness modules for the Porto CLI.
#![expect(
    clippy::panic,
    reason = "Tests assert panic branches to surface unexpected CLI outcomes"
)]

use super::*;

mod directions_steps;
mod helpers;
