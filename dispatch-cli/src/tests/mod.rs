//! Shared test harness modules for the campus dispatch CLI.

use super::*;

mod helpers;
