//! ### PRESS / TEMP - Raw conversion results (`0xF7` - `0xFC`, 1 byte each, R)
//!
//! Each result is spread over three registers: MSB, LSB and XLSB. The driver reads
//! them one at a time and assembles them with [`assemble`]. Note that this is the raw
//! uncompensated data, so for temperature [`Bmp280::read_temperature()`](crate::Bmp280::read_temperature)
//! is what most users want.
use crate::register::{InvalidRegisterField, Readable, Reg};

macro_rules! data_register {
    ($(#[$doc:meta])* $name:ident, $addr:literal) => {
        $(#[$doc])*
        ///
        /// - **Length:** 1 byte
        /// - **Access:** Read-only
        pub struct $name;
        impl Reg for $name { const ADDR: u8 = $addr; }

        impl Readable for $name {
            type Out = u8;
            fn decode(b: &[u8]) -> Result<Self::Out, InvalidRegisterField> {
                Ok(b[0])
            }
        }
    };
}

data_register!(
    /// Marker struct for the PRESS_MSB (0xF7) register
    PressMsb, 0xF7
);
data_register!(
    /// Marker struct for the PRESS_LSB (0xF8) register
    PressLsb, 0xF8
);
data_register!(
    /// Marker struct for the PRESS_XLSB (0xF9) register
    PressXlsb, 0xF9
);
data_register!(
    /// Marker struct for the TEMP_MSB (0xFA) register
    TempMsb, 0xFA
);
data_register!(
    /// Marker struct for the TEMP_LSB (0xFB) register
    TempLsb, 0xFB
);
data_register!(
    /// Marker struct for the TEMP_XLSB (0xFC) register
    TempXlsb, 0xFC
);

/// Joins the MSB, LSB and XLSB registers into one 24-bit value.
pub fn assemble(msb: u8, lsb: u8, xlsb: u8) -> u32 {
    u32::from_be_bytes([0, msb, lsb, xlsb])
}
