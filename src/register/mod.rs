pub mod calibration;
pub mod chip_id;
pub mod config;
pub mod ctrl_meas;
pub mod data;
pub mod reset;
pub mod status;

/// A register held a bit pattern the datasheet marks as reserved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct InvalidRegisterField {
    pub register: u8,
    pub value: u8,
    pub bit_offset: u8,
}

impl InvalidRegisterField {
    pub fn new(register: u8, value: u8, bit_offset: u8) -> Self {
        Self { register, value, bit_offset }
    }
}

/// A raw field value that does not map onto any variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnexpectedValue(pub u8);

pub trait Reg { const ADDR: u8; }

pub trait Readable: Reg {
    type Out;
    const N: usize = 1;
    fn decode(b: &[u8]) -> Result<Self::Out, InvalidRegisterField>;
}

pub trait Writable: Reg {
    type In;
    const N: usize = 1;
    fn encode(v: &Self::In, out: &mut [u8]);
}
