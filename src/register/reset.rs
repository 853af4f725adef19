//! ### RESET - Soft reset (`0xE0`, 1 byte, W)
//!
//! Writing 0xB6 resets the device using the complete power-on-reset procedure.
//! Any other value has no effect. The register always reads back as 0x00.
//!
//! See also: [`Bmp280::soft_reset()`](crate::Bmp280::soft_reset)
#![doc(alias = "RESET")]
use crate::register::{Reg, Writable};

/// Marker type for the RESET (0xE0) register
pub struct Reset;
impl Reg for Reset { const ADDR: u8 = 0xE0; }

/// The payload for the RESET (0xE0) register.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum ResetCmd {
    /// Power-on-reset the device. Calibration NVM is not affected.
    SoftReset,
}

impl From<ResetCmd> for u8 {
    fn from(cmd: ResetCmd) -> Self {
        match cmd {
            ResetCmd::SoftReset => 0xB6,
        }
    }
}

impl Writable for Reset {
    type In = ResetCmd;
    fn encode(v: &Self::In, out: &mut [u8]) {
        out[0] = (*v).into();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reset_encode() {
        let mut buffer = [0u8; 1];
        Reset::encode(&ResetCmd::SoftReset, &mut buffer);
        assert_eq!([0xB6], buffer);
    }
}
