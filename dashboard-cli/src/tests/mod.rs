//! Shared test harness modules for the dashboard CLI.
#![expect(
    clippy::expect_used,
    reason = "tests should fail fast when fixtures cannot be prepared"
)]

use super::*;

mod helpers;
mod steps;
