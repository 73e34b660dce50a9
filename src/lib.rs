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
// Function signature hygiene
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

//! Client-side interaction layer for a single-page portfolio.
//!
//! Folio drives a deck of project cards that drift idly and lean towards
//! the pointer, a tabbed project modal, per-root image carousels, a grouped
//! lightbox viewer, and theme/palette switching persisted across sessions.
//!
//! # Key entry points
//!
//! - [`engine::FolioEngine`] - the application context owning every
//!   controller; feed it [`input::InputEvent`]s or
//!   [`engine::FolioCommand`]s and apply the returned
//!   [`engine::FolioEffect`]s
//! - [`motion::MotionLoop`] - the per-frame drift + magnet animation step
//! - [`options::Options`] - tuned constants with TOML preset support
//!
//! # Architecture
//!
//! Every controller is a plain state machine with no knowledge of the
//! document. The host (the `web` module in the browser, the preview binary
//! natively) translates raw events into [`input::InputEvent`]s, answers
//! geometry queries through [`engine::Viewport`], calls
//! [`engine::FolioEngine::tick`] once per animation frame and writes the
//! resulting transforms and effects back to its presentation layer.

pub mod deck;
pub mod engine;
pub mod error;
pub mod gallery;
pub mod input;
pub mod modal;
pub mod motion;
pub mod options;
pub mod theme;
pub mod util;
#[cfg(feature = "web")]
pub mod web;

pub use engine::{FolioCommand, FolioEffect, FolioEngine};
pub use error::FolioError;
