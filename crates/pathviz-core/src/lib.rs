//! **pathviz-core** — grid model and geometry for the pathviz search
//! visualizer.
//!
//! This crate provides the value types shared across the *pathviz*
//! workspace: integer geometry primitives and the [`GridModel`] that a host
//! mutates between search runs (placing walls and the start/end markers) and
//! paints with the overlays a finished run produces.

pub mod geom;
pub mod grid;

pub use geom::{Point, Range};
pub use grid::{CellKind, GridModel};
