//! Tableau layout.
//!
//! ## Key Types
//!
//! - `GridSpec`: item aspect ratio, minimum width and border
//! - `GridPacker`: sizes a grid of items to fit a container
//! - `GridLayout`: the chosen item width, grid shape and scroll flag
//!
//! The packer knows nothing about cards; it only needs the number of items
//! the engine's tableau currently holds.

pub mod grid;

pub use grid::{compute_layout, GridLayout, GridPacker, GridSpec};
