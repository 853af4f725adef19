//! Driver for the Bosch BMP280 pressure and temperature sensor.
//!
//! Built on the blocking `embedded-hal` 1.0 I2C and delay traits, and `no_std`.
//!
//! A [`Bmp280`] loads the factory calibration when it is constructed. Raw samples are read
//! with [`Bmp280::read_raw_temperature`] and [`Bmp280::read_raw_pressure`], and temperatures are
//! compensated with the datasheet's integer formula.
//!
//! ```rust
//! # use embedded_hal::i2c::I2c;
//! use bmp280_rs::{Bmp280, Bmp280Result, SdoPinState};
//! use bmp280_rs::config::{Configuration, Preset};
//! use bmp280_rs::diagnostics::NoDiagnostics;
//!
//! # fn demo<I: I2c>(i2c: I) -> Bmp280Result<(), I::Error> {
//! let config = Configuration::from_preset(Preset::HandheldDynamic);
//! let mut device = Bmp280::with_configuration(i2c, SdoPinState::High, config, NoDiagnostics)?;
//!
//! let raw = device.read_raw_temperature()?;
//! let temperature = device.compensate_temperature(raw);
//! println!("{:.2} °C (t_fine = {})", temperature.celsius(), temperature.t_fine());
//! # Ok(())
//! # }
//! ```
//!
//! In forced mode every raw read starts a new conversion, so use
//! [`Bmp280::wait_for_measurement`] before the next read to pick up its result.
//!
//! ## Features
//! - `log`: `diagnostics::LogDiagnostics` prints calibration and readings with `log::debug!`
//! - `defmt`: `defmt::Format` for the public types, and `diagnostics::DefmtDiagnostics`
//! - `uom`: `Temperature::uom` converts to a `ThermodynamicTemperature`
#![cfg_attr(not(test), no_std)]

pub mod bus;
pub mod calibration;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod register;
mod bmp280;

#[cfg(test)]
mod testing;

pub use crate::bmp280::{Bmp280, Bmp280I2c, SdoPinState, DEFAULT_ADDRESS};
pub use crate::calibration::{CalibrationData, Temperature};
pub use crate::error::{Bmp280Error, Bmp280Result};
