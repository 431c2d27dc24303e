// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Complexity limits (thresholds in clippy.toml)
#![deny(clippy::cognitive_complexity)]
#![deny(clippy::too_many_lines)]
#![deny(clippy::excessive_nesting)]
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Pick-and-highlight selection over a flat map of placemarks.
//!
//! A [`scene::Scene`] holds base imagery layers and placemark layers. Input
//! events are routed to one [`selection::SelectionTracker`] per interaction
//! stream (click and hover). Each tracker picks at the event position, keeps
//! exactly the latest qualifying pick highlighted, and notifies the
//! [`panel::InfoPanel`] when a pick holds more objects than its threshold.
//!
//! # Key entry points
//!
//! - [`engine::PlacemarkEngine`] - the composed scene and interaction loop
//! - [`selection::SelectionTracker`] - the per-stream highlight state machine
//! - [`picking::PickingService`] - screen-point picking, implemented by the
//!   scene over a flat longitude/latitude viewport
//! - [`options::Options`] - TOML-backed configuration (sites, thresholds,
//!   placemark styling, input routing)

pub mod engine;
pub mod error;
pub mod geo;
pub mod input;
pub mod options;
pub mod panel;
pub mod picking;
pub mod scene;
pub mod selection;
pub mod style;
