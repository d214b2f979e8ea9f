//!
//! # Coverage
//!
//! Coverage describes which pixels a drawable touches, and by how much. It's produced by the geometry stage as
//! a run-length encoded list of spans (`Rle`), one or more per scanline, each with an anti-aliasing coverage
//! value. Solid rectangles can skip this and use `Coverage::Rect` instead.
//!
//! Coverage lists are immutable once they're generated: clipping produces a new list.
//!

mod span;
mod rle;
mod coverage;

pub use span::*;
pub use rle::*;
pub use coverage::*;
