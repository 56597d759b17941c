//! # chalkboard - Worked Algorithm Demos
//!
//! Three independent, self-contained demos: a depth-first walk over a fixed
//! directed graph, an in-place selection sort over a fixed list of numbers,
//! and a bspwm-style binary space partition layout over a fixed set of
//! windows. Each prints its result to stdout and exits.

pub mod bsp;
pub mod cli;
pub mod cli_handlers;
pub mod error;
pub mod graph;
pub mod sorting;

pub use bsp::{BspLayout, Rect};
pub use error::{DemoError, Result};
pub use graph::Graph;
