//! ### ID - Chip identification number (`0xD0`, 1 byte, R)
//!
//! Contains the chip identification code, which is always 0x58 for a BMP280.
//! It can be read as soon as the device finished its power-on reset.
//!
//! ### Examples
//! ```rust,no_run
//! # use bmp280_rs::{Bmp280, Bmp280Result};
//! # use bmp280_rs::bus::Bus;
//! # fn demo<B: Bus>(mut device: Bmp280<B>) -> Bmp280Result<(), B::Error> {
//! use bmp280_rs::register::chip_id::ChipId;
//!
//! let id = device.read::<ChipId>()?;
//! assert_eq!(id, 0x58);
//! # Ok(()) }
//! ```
#![doc(alias = "ID")]
use crate::register::{InvalidRegisterField, Readable, Reg};

/// The value of the ID register on every BMP280.
pub const BMP280_CHIP_ID: u8 = 0x58;

/// Marker struct for the ID (0xD0) register
///
/// - **Length:** 1 byte
/// - **Access:** Read-only
///
/// Used with [`Bmp280::read::<ChipId>()`](crate::Bmp280::read) or the convenience method
/// [`Bmp280::read_chip_id`](crate::Bmp280::read_chip_id).
pub struct ChipId;
impl Reg for ChipId { const ADDR: u8 = 0xD0; }

impl Readable for ChipId {
    type Out = u8;
    fn decode(b: &[u8]) -> Result<Self::Out, InvalidRegisterField> {
        Ok(b[0])
    }
}
