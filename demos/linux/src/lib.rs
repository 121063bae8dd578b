//! Linux demo applications for the [`tcs34725`] driver crate.
//!
//! The `color_poll` binary polls a TCS34725 on an I2C bus at a fixed
//! cadence, printing the four raw channels plus the derived color
//! temperature and luminosity, and drives the LED control pin on the
//! sensor board.

pub mod controller;
pub mod opts;

pub use controller::{Reading, Tcs, TcsError};
