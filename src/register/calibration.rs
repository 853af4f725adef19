//! ### CALIB00 - CALIB23 - Compensation words (`0x88` - `0x9F`, 2 bytes each, R)
//!
//! Twelve factory-trimmed 16-bit words stored little-endian in NVM. `dig_T1` and
//! `dig_P1` are unsigned, the rest are two's complement.
//!
//! They are loaded once by the driver constructor, see [`CalibrationData`](crate::calibration::CalibrationData).
use crate::register::{InvalidRegisterField, Readable, Reg};

macro_rules! calibration_word {
    ($(#[$doc:meta])* $name:ident, $addr:literal, $ty:ty) => {
        $(#[$doc])*
        pub struct $name;
        impl Reg for $name { const ADDR: u8 = $addr; }

        impl Readable for $name {
            type Out = $ty;
            const N: usize = 2;
            fn decode(b: &[u8]) -> Result<Self::Out, InvalidRegisterField> {
                Ok(<$ty>::from_le_bytes([b[0], b[1]]))
            }
        }
    };
}

calibration_word!(
    /// dig_T1 (0x88), unsigned
    DigT1, 0x88, u16
);
calibration_word!(
    /// dig_T2 (0x8A), signed
    DigT2, 0x8A, i16
);
calibration_word!(
    /// dig_T3 (0x8C), signed
    DigT3, 0x8C, i16
);
calibration_word!(
    /// dig_P1 (0x8E), unsigned
    DigP1, 0x8E, u16
);
calibration_word!(DigP2, 0x90, i16);
calibration_word!(DigP3, 0x92, i16);
calibration_word!(DigP4, 0x94, i16);
calibration_word!(DigP5, 0x96, i16);
calibration_word!(DigP6, 0x98, i16);
calibration_word!(DigP7, 0x9A, i16);
calibration_word!(DigP8, 0x9C, i16);
calibration_word!(DigP9, 0x9E, i16);
