//! Core vector arithmetic.
//!
//! - [`onehot::OneHot`]: unit vectors identified by their active index
//! - [`radix::MixedRadix`]: positional index arithmetic for composite domains

pub mod onehot;
pub mod radix;
