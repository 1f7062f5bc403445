//! Export Google Chrome's browsing history to a static HTML report.
//!
//! The pipeline is linear: locate the history database, snapshot it into a
//! private temporary directory, read the `urls` table from the snapshot,
//! then group the visits by local calendar date and render them as a single
//! self-contained HTML document.

pub mod cli;
pub mod escape;
pub mod extract;
pub mod locator;
pub mod logging;
pub mod report;
pub mod snapshot;
pub mod timefmt;
