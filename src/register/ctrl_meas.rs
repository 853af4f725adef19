//! ### CTRL_MEAS - Measurement control (`0xF4`, 1 byte, R/W)
//!
//! Holds the temperature oversampling (bits 7..5), the pressure oversampling
//! (bits 4..2) and the power mode (bits 1..0). Writing this register in forced
//! mode starts a new conversion of both pressure and temperature.
//!
//! ### Examples
//! ```rust,no_run
//! # use bmp280_rs::{Bmp280, Bmp280Result};
//! # use bmp280_rs::bus::Bus;
//! # fn demo<B: Bus>(mut device: Bmp280<B>) -> Bmp280Result<(), B::Error> {
//! use bmp280_rs::register::ctrl_meas::{CtrlMeas, CtrlMeasCfg, Oversampling, PowerMode};
//!
//! let current = device.read::<CtrlMeas>()?;
//! println!("{:?}", current.mode);
//!
//! device.write::<CtrlMeas>(&CtrlMeasCfg {
//!     osrs_t: Oversampling::X2,
//!     osrs_p: Oversampling::X16,
//!     mode: PowerMode::Normal,
//! })?;
//! # Ok(()) }
//! ```
#![doc(alias = "CTRL_MEAS")]
use crate::register::{InvalidRegisterField, Readable, Reg, UnexpectedValue, Writable};

/// Marker type for the CTRL_MEAS (0xF4) register
pub struct CtrlMeas;
impl Reg for CtrlMeas { const ADDR: u8 = 0xF4; }

/// The payload for the CTRL_MEAS (0xF4) register.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CtrlMeasCfg {
    pub osrs_t: Oversampling,
    pub osrs_p: Oversampling,
    pub mode: PowerMode,
}

impl CtrlMeasCfg {
    /// The raw control byte: `mode | osrs_p << 2 | osrs_t << 5`.
    pub fn bits(&self) -> u8 {
        let mode: u8 = self.mode.into();
        let osrs_p: u8 = self.osrs_p.into();
        let osrs_t: u8 = self.osrs_t.into();
        mode | (osrs_p << 2) | (osrs_t << 5)
    }
}

impl Readable for CtrlMeas {
    type Out = CtrlMeasCfg;

    fn decode(b: &[u8]) -> Result<Self::Out, InvalidRegisterField> {
        Ok(CtrlMeasCfg {
            osrs_t: Oversampling::try_from((b[0] >> 5) & 0b111)
                .map_err(|e| InvalidRegisterField::new(Self::ADDR, e.0, 5))?,
            osrs_p: Oversampling::try_from((b[0] >> 2) & 0b111)
                .map_err(|e| InvalidRegisterField::new(Self::ADDR, e.0, 2))?,
            mode: PowerMode::from_bits(b[0] & 0b11),
        })
    }
}

impl Writable for CtrlMeas {
    type In = CtrlMeasCfg;

    fn encode(v: &Self::In, out: &mut [u8]) {
        out[0] = v.bits();
    }
}

/// Oversampling setting shared by the temperature and pressure channels.
///
/// Higher oversampling lowers the noise at the cost of a longer conversion.
/// [`Oversampling::Skip`] disables the channel; its data registers then hold 0x80000.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Oversampling {
    Skip,
    X1,
    X2,
    X4,
    X8,
    X16,
}

impl Oversampling {
    /// Number of ADC samples averaged per conversion.
    pub fn factor(self) -> u32 {
        match self {
            Oversampling::Skip => 0,
            Oversampling::X1 => 1,
            Oversampling::X2 => 2,
            Oversampling::X4 => 4,
            Oversampling::X8 => 8,
            Oversampling::X16 => 16,
        }
    }
}

impl TryFrom<u8> for Oversampling {
    type Error = UnexpectedValue;
    fn try_from(field: u8) -> Result<Self, Self::Error> {
        match field {
            0b000 => Ok(Oversampling::Skip),
            0b001 => Ok(Oversampling::X1),
            0b010 => Ok(Oversampling::X2),
            0b011 => Ok(Oversampling::X4),
            0b100 => Ok(Oversampling::X8),
            0b111 => Ok(Oversampling::X16),
            other => Err(UnexpectedValue(other)),
        }
    }
}

impl From<Oversampling> for u8 {
    fn from(oversampling: Oversampling) -> Self {
        match oversampling {
            Oversampling::Skip => 0b000,
            Oversampling::X1 => 0b001,
            Oversampling::X2 => 0b010,
            Oversampling::X4 => 0b011,
            Oversampling::X8 => 0b100,
            Oversampling::X16 => 0b111,
        }
    }
}

/// Power mode (mode[1:0] in CTRL_MEAS).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PowerMode {
    /// No conversions. This is the mode after power-on-reset.
    Sleep,
    /// A single conversion, after which the device returns to [`PowerMode::Sleep`].
    Forced,
    /// Conversions run continuously, separated by the configured standby time.
    Normal,
}

impl PowerMode {
    /// Decodes the mode bits read back from the device, where both 01 and 10 mean forced.
    pub(crate) fn from_bits(field: u8) -> Self {
        match field & 0b11 {
            0b00 => PowerMode::Sleep,
            0b01 | 0b10 => PowerMode::Forced,
            _ => PowerMode::Normal,
        }
    }
}

/// Accepts only the three encodings the driver writes: sleep=0, forced=2, normal=3.
impl TryFrom<u8> for PowerMode {
    type Error = UnexpectedValue;
    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(PowerMode::Sleep),
            2 => Ok(PowerMode::Forced),
            3 => Ok(PowerMode::Normal),
            other => Err(UnexpectedValue(other)),
        }
    }
}

impl From<PowerMode> for u8 {
    fn from(mode: PowerMode) -> Self {
        match mode {
            PowerMode::Sleep => 0b00,
            PowerMode::Forced => 0b10,
            PowerMode::Normal => 0b11,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ctrl_meas_encode() {
        let mut buffer = [0u8; 1];
        CtrlMeas::encode(&CtrlMeasCfg {
            osrs_t: Oversampling::X1,
            osrs_p: Oversampling::X4,
            mode: PowerMode::Normal,
        }, &mut buffer);
        assert_eq!([0x2F], buffer);
        assert_eq!(3 | (3 << 2) | (1 << 5), buffer[0]);

        CtrlMeas::encode(&CtrlMeasCfg {
            osrs_t: Oversampling::Skip,
            osrs_p: Oversampling::Skip,
            mode: PowerMode::Sleep,
        }, &mut buffer);
        assert_eq!([0x00], buffer);

        CtrlMeas::encode(&CtrlMeasCfg {
            osrs_t: Oversampling::X16,
            osrs_p: Oversampling::X16,
            mode: PowerMode::Forced,
        }, &mut buffer);
        assert_eq!([0b1111_1110], buffer);
    }

    #[test]
    fn ctrl_meas_decode() {
        let reg = CtrlMeas::decode(&[0x2F]).unwrap();
        assert_eq!(Oversampling::X1, reg.osrs_t);
        assert_eq!(Oversampling::X4, reg.osrs_p);
        assert_eq!(PowerMode::Normal, reg.mode);

        let reg = CtrlMeas::decode(&[0b0100_0101]).unwrap();
        assert_eq!(Oversampling::X2, reg.osrs_t);
        assert_eq!(Oversampling::X1, reg.osrs_p);
        assert_eq!(PowerMode::Forced, reg.mode);
    }

    #[test]
    fn ctrl_meas_decode_reserved_oversampling() {
        let err = CtrlMeas::decode(&[0b1010_0000]).unwrap_err();
        assert_eq!(InvalidRegisterField::new(0xF4, 0b101, 5), err);

        let err = CtrlMeas::decode(&[0b0011_1000]).unwrap_err();
        assert_eq!(InvalidRegisterField::new(0xF4, 0b110, 2), err);
    }

    #[test]
    fn power_mode_from_raw_value() {
        assert_eq!(Ok(PowerMode::Sleep), PowerMode::try_from(0));
        assert_eq!(Ok(PowerMode::Forced), PowerMode::try_from(2));
        assert_eq!(Ok(PowerMode::Normal), PowerMode::try_from(3));
        assert_eq!(Err(UnexpectedValue(1)), PowerMode::try_from(1));
        assert_eq!(Err(UnexpectedValue(99)), PowerMode::try_from(99));
    }

    #[test]
    fn oversampling_is_not_contiguous() {
        assert_eq!(7u8, Oversampling::X16.into());
        assert_eq!(Err(UnexpectedValue(5)), Oversampling::try_from(5));
        assert_eq!(Err(UnexpectedValue(6)), Oversampling::try_from(6));
        assert_eq!(Ok(Oversampling::X16), Oversampling::try_from(7));
    }
}
