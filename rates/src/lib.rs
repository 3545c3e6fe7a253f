//! The rate table, conversions and persistence behind the Dinar Desk calculator.
//!
//! Nothing in this crate touches the UI. All state transitions are plain
//! functions over plain data so they can be exercised without a renderer.

pub mod convert;
pub mod currency;
pub mod format;
pub mod input;
pub mod keypad;
pub mod persist;
pub mod prefs;
pub mod rate_map;
pub mod store;
