//! View renderers
//!
//! Each renderer is a pure function of the datasets: same input, same
//! sequence of surface calls.

pub mod executive;
pub mod merchant;
pub mod usage;
