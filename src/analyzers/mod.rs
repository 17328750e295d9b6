//! Descriptive statistics over a filtered trip dataset.
//!
//! Each statistic is a [`Serialize`] + [`Display`](fmt::Display) type built by
//! a `from_dataset` constructor, and [`report`] prints it with timing.

pub mod duration;
pub mod stations;
pub mod time;
pub mod types;
pub mod users;
pub mod utility;

use anyhow::Result;
use serde::Serialize;
use std::fmt;
use std::io::Write;
use std::time::Instant;

use crate::output::{RULE, elapsed_line, log_json};

/// Shown instead of statistics when no trip survived the filters.
pub const NO_MATCHING_TRIPS: &str = "No trips match the selected filters.";

/// Computes one statistic and writes it to `out` under a heading, followed by
/// the time it took.
pub fn report<W, S>(out: &mut W, title: &str, compute: impl FnOnce() -> Option<S>) -> Result<()>
where
    W: Write,
    S: Serialize + fmt::Display,
{
    writeln!(out, "\nCalculating {title}...\n")?;
    let started = Instant::now();

    match compute() {
        Some(stats) => {
            log_json(&stats)?;
            writeln!(out, "{stats}")?;
        }
        None => writeln!(out, "{NO_MATCHING_TRIPS}")?,
    }

    writeln!(out, "\n{}", elapsed_line(started))?;
    writeln!(out, "{RULE}")?;
    Ok(())
}
