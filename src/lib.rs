//! M-Pesa Dashboard - FY2021-FY2025 performance in the terminal
//!
//! This library provides the data, routing and rendering for a small
//! dashboard over Safaricom M-Pesa metrics. Two static tables feed three
//! views; each view is a renderer that draws metric cards, charts and
//! tables onto an injected `Surface`.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `data`: The embedded financial and merchant tables, cached on first use
//! - `view`: The closed set of views and the renderer lookup table
//! - `views`: One renderer per view
//! - `surface`: The rendering interface and its card/chart/table specs
//! - `display`: Plain-text surface and formatting helpers
//! - `tui`: Interactive ratatui front end
//! - `cli`: Command handlers for `show` and `export`
//! - `export`: CSV, JSON and YAML writers
//! - `config`, `logging`, `error`: Paths, settings, tracing setup and errors
//!
//! # Example
//!
//! ```rust
//! use mpesa_dashboard::display::TextSurface;
//! use mpesa_dashboard::view::{route, View};
//!
//! let mut surface = TextSurface::new();
//! route(View::MerchantEcosystem, mpesa_dashboard::data::load(), &mut surface);
//! assert!(surface.as_str().contains("37.4% vs FY24"));
//! ```

pub mod cli;
pub mod config;
pub mod data;
pub mod display;
pub mod error;
pub mod export;
pub mod logging;
pub mod metrics;
pub mod surface;
pub mod tui;
pub mod view;
pub mod views;

pub use error::{DashboardError, DashboardResult};
