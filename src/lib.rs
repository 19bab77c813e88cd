#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

//! Maximum-power-point-tracking firmware for a self-powered solar energy
//! harvester.
//!
//! A small board charges a 5 F supercapacitor from a solar cell through a
//! buck-style inductor converter driven by a power FET. This crate is the
//! control law that runs on the microcontroller: once per tick it samples
//! the supply rail and the converter's sense node, hill-climbs a 42-entry
//! discrete duty-cycle table to track the cell's maximum power point, and
//! enforces an upper charge limit on the capacitor.
//!
//! Everything device-specific — clock/watchdog/ADC/timer register setup,
//! GPIO pin configuration, the indicator LED drive, the PWM timer itself —
//! is kept outside this crate behind the [`Platform`] trait, so the control
//! law is a plain, deterministic, fully testable function of `(vcc, sensor)`
//! sequences. See [`Controller::tick`] for the decision procedure.

mod controller;
mod state;
pub mod tables;

pub mod platform;

pub use controller::Controller;
pub use platform::{Platform, TickPeriod};
pub use state::ControllerState;
