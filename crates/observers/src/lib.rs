//! Consumers for secant iteration records.
//!
//! Each consumer subscribes to the record stream through the [`Observer`]
//! trait and owns its own output timing; none of them affects the iteration
//! beyond an optional early stop.
//!
//! # Modules
//!
//! - [`traits`] — Capability traits shared by record observers
//!   ([`HasRelativeError`], [`CanStopEarly`])
//! - [`table`] — [`TableObserver`], a fixed-decimal text table written to any
//!   [`std::io::Write`]
//! - [`curve`] — sampling a function over the plot window around the
//!   starting estimates
//!
//! # Features
//!
//! - `plot` — Enables [`SecantPlot`] for viewing the curve and secant steps in
//!   an egui window. This feature adds dependencies on `eframe` and
//!   `egui_plot`.
//!
//! [`Observer`]: secant_core::Observer
//! [`HasRelativeError`]: traits::HasRelativeError
//! [`CanStopEarly`]: traits::CanStopEarly
//! [`TableObserver`]: table::TableObserver

pub mod curve;
pub mod table;
pub mod traits;

#[cfg(feature = "plot")]
mod plot;

#[cfg(feature = "plot")]
pub use plot::{SecantPlot, ShowConfig};
