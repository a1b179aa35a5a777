//! Busy indicators for the terminal

pub mod spinner;

pub use spinner::BusySpinner;
