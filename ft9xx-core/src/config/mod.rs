//! Configuration types
//!
//! Board configuration, optionally persisted as a version byte followed by
//! postcard binary data.

pub mod board;

pub use board::*;
