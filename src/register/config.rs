//! ### CONFIG - Rate, filter and interface options (`0xF5`, 1 byte, R/W)
//!
//! Controls the standby time between conversions in normal mode (bits 7..5),
//! the IIR filter time constant (bits 4..2) and the 3-wire SPI interface (bit 0).
//! Writes in normal mode may be ignored by the device, so change this register in sleep mode.
//!
//! ### Examples
//! ```rust,no_run
//! # use bmp280_rs::{Bmp280, Bmp280Result};
//! # use bmp280_rs::bus::Bus;
//! # fn demo<B: Bus>(mut device: Bmp280<B>) -> Bmp280Result<(), B::Error> {
//! use bmp280_rs::register::config::{ConfigFields, IirFilter, StandbyTime};
//!
//! device.set_standby_config(&ConfigFields {
//!     standby: StandbyTime::Ms500,
//!     filter: IirFilter::X4,
//!     spi3w_en: false,
//! })?;
//! # Ok(()) }
//! ```
#![doc(alias = "CONFIG")]
use crate::register::{InvalidRegisterField, Readable, Reg, Writable};

/// Marker type for the CONFIG (0xF5) register
pub struct Config;
impl Reg for Config { const ADDR: u8 = 0xF5; }

/// The payload for the CONFIG (0xF5) register.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ConfigFields {
    /// Inactive period between two conversions in normal mode.
    pub standby: StandbyTime,
    /// IIR filter applied to the pressure and temperature results.
    pub filter: IirFilter,
    /// Enables the 3-wire SPI interface. Leave disabled on I2C.
    pub spi3w_en: bool,
}

impl Default for ConfigFields {
    fn default() -> Self {
        Self {
            standby: StandbyTime::Ms0_5,
            filter: IirFilter::Off,
            spi3w_en: false,
        }
    }
}

impl Readable for Config {
    type Out = ConfigFields;

    fn decode(b: &[u8]) -> Result<Self::Out, InvalidRegisterField> {
        Ok(ConfigFields {
            standby: StandbyTime::from((b[0] >> 5) & 0b111),
            filter: IirFilter::from((b[0] >> 2) & 0b111),
            spi3w_en: b[0] & 0b1 != 0,
        })
    }
}

impl Writable for Config {
    type In = ConfigFields;

    fn encode(v: &Self::In, out: &mut [u8]) {
        let standby: u8 = v.standby.into();
        let filter: u8 = v.filter.into();
        out[0] = (standby << 5) | (filter << 2) | v.spi3w_en as u8;
    }
}

/// Standby time t_sb in normal mode.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StandbyTime {
    Ms0_5,
    Ms62_5,
    Ms125,
    Ms250,
    Ms500,
    Ms1000,
    Ms2000,
    Ms4000,
}

impl From<u8> for StandbyTime {
    fn from(field: u8) -> Self {
        match field & 0b111 {
            0b000 => StandbyTime::Ms0_5,
            0b001 => StandbyTime::Ms62_5,
            0b010 => StandbyTime::Ms125,
            0b011 => StandbyTime::Ms250,
            0b100 => StandbyTime::Ms500,
            0b101 => StandbyTime::Ms1000,
            0b110 => StandbyTime::Ms2000,
            _ => StandbyTime::Ms4000,
        }
    }
}

impl From<StandbyTime> for u8 {
    fn from(standby: StandbyTime) -> Self {
        match standby {
            StandbyTime::Ms0_5 => 0b000,
            StandbyTime::Ms62_5 => 0b001,
            StandbyTime::Ms125 => 0b010,
            StandbyTime::Ms250 => 0b011,
            StandbyTime::Ms500 => 0b100,
            StandbyTime::Ms1000 => 0b101,
            StandbyTime::Ms2000 => 0b110,
            StandbyTime::Ms4000 => 0b111,
        }
    }
}

/// IIR filter coefficient.
///
/// The device treats every value above 0b100 as a coefficient of 16.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum IirFilter {
    Off,
    X2,
    X4,
    X8,
    X16,
}

impl From<u8> for IirFilter {
    fn from(field: u8) -> Self {
        match field & 0b111 {
            0b000 => IirFilter::Off,
            0b001 => IirFilter::X2,
            0b010 => IirFilter::X4,
            0b011 => IirFilter::X8,
            _ => IirFilter::X16,
        }
    }
}

impl From<IirFilter> for u8 {
    fn from(filter: IirFilter) -> Self {
        match filter {
            IirFilter::Off => 0b000,
            IirFilter::X2 => 0b001,
            IirFilter::X4 => 0b010,
            IirFilter::X8 => 0b011,
            IirFilter::X16 => 0b100,
        }
    }
}
