//! **waypath-core**: geometry primitives shared by the waypath crates.
//!
//! Grid searches key their nodes by [`Point`]; volumetric flood fills use
//! [`Point3`]. [`Range`] describes rectangular grid bounds.

pub mod geom;

pub use geom::{Point, Point3, Range, RangeIter};
