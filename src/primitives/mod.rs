//! Value types shared by the locators and the engine.
//!
//! - `Range`: half-open interval `[begin, end)` over sequence indices
//! - `Overlap`: a matched pair of same-length ranges, one per sequence
//!
//! Both are `Copy`. The engine passes them by value instead of reusing
//! mutable scratch objects across recursion levels.

pub mod overlap;
pub mod range;

pub use overlap::Overlap;
pub use range::Range;
