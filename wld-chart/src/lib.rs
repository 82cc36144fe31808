//! Presentation metadata derived from a finished chart point sequence:
//! per-segment color classes, Y-axis scaling, and horizontal layout.

pub mod scale;
pub mod segments;
