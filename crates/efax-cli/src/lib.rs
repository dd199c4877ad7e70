//! Library components of the `efax-clean` binary.

pub mod logging;
pub mod pipeline;
pub mod summary;
