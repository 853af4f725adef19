//! Errors that can occur when using the BMP280 device.
//!
//! This module provides an error type that encapsulates all possible errors that can occur during communication with BMP280.
//! It is generic over the underlying bus error type.

use crate::register::InvalidRegisterField;

/// This represents all possible errors that can occur when using the BMP280 device.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Bmp280Error<BusError> {
    /// An error has occurred in the I2C driver. It is passed through untouched and never retried.
    Bus(BusError),

    /// The driver was constructed with a power mode other than sleep (0), forced (2) or normal (3).
    ///
    /// Carries the rejected value. No bus transaction took place.
    InvalidConfiguration(u8),

    /// Reading from a register returned a reserved bit pattern. This should not happen in normal circumstances.
    ///
    /// Could possibly indicate a bug in the driver, or less likely, a faulty chip or interference.
    UnexpectedRegisterData(InvalidRegisterField),

    /// The device kept reporting a running conversion for longer than allowed.
    Timeout,
}

impl<BusError> From<InvalidRegisterField> for Bmp280Error<BusError> {
    fn from(field: InvalidRegisterField) -> Self {
        Bmp280Error::UnexpectedRegisterData(field)
    }
}

/// Type alias used to simplify return types throughout the driver
pub type Bmp280Result<T, BusError> = Result<T, Bmp280Error<BusError>>;
