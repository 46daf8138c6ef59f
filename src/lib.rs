//! IronFly — a small thrust-and-shoot arcade game.
//!
//! The simulation core lives in the library so it can be exercised without
//! a terminal: `entities` holds the pure data types, `compute` the pure
//! transition functions, `config` the immutable tunables.  The binary adds
//! terminal I/O on top.

pub mod compute;
pub mod config;
pub mod entities;
