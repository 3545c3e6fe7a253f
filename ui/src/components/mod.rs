//! Shared building blocks for the calculator and rates screens.
pub mod amount;
pub mod amount_field;
pub mod currency_chooser;
pub mod keypad;
pub mod pico;
