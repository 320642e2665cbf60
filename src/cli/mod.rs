//! Command implementations behind the `toptracks` binary.

mod serve;

pub use serve::serve;
