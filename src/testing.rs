use crate::bus::{Bus, MAX_REG_BYTES};
use crate::calibration::CalibrationData;
use crate::error::{Bmp280Error, Bmp280Result};
use crate::register::calibration::{
    DigP1, DigP2, DigP3, DigP4, DigP5, DigP6, DigP7, DigP8, DigP9, DigT1, DigT2, DigT3,
};
use crate::register::{Readable, Writable};
use embedded_hal::delay::DelayNs;
use heapless::{LinearMap, Vec};

#[derive(Debug)]
enum RegisterValue {
    Data { bytes: [u8; MAX_REG_BYTES], len: usize },
    DontCare,
    Fail,
}

/// One register access as seen by the bus.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Transaction {
    Read { addr: u8, len: usize },
    Write { addr: u8, value: u8 },
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct FakeBusError;

/// Register-level stand-in for the I2C bus.
///
/// Reads are answered from canned responses keyed by register address, writes are
/// stored so they can be read back, and every access is logged in order.
pub struct FakeBus<const N: usize> {
    regs: LinearMap<u8, RegisterValue, N>,
    log: Vec<Transaction, 64>,
    scratch: [u8; MAX_REG_BYTES],
}

#[derive(Default)]
pub struct FakeDelay {
    pub elapsed_ns: u64,
}

impl DelayNs for FakeDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.elapsed_ns += u64::from(ns);
    }
}

impl<const N: usize> FakeBus<N> {
    pub fn new() -> Self {
        FakeBus {
            regs: LinearMap::new(),
            log: Vec::new(),
            scratch: [0u8; MAX_REG_BYTES],
        }
    }

    pub fn with_response<R: Readable>(&mut self, data: &[u8]) {
        let mut bytes = [0u8; MAX_REG_BYTES];
        bytes[..data.len()].copy_from_slice(data);
        self.regs
            .insert(R::ADDR, RegisterValue::Data { bytes, len: data.len() })
            .unwrap();
    }

    pub fn with_any_response<R: Readable>(&mut self) {
        self.regs.insert(R::ADDR, RegisterValue::DontCare).unwrap();
    }

    /// Makes every access to `R` fail with [`FakeBusError`].
    pub fn fail_on<R: Readable>(&mut self) {
        self.regs.insert(R::ADDR, RegisterValue::Fail).unwrap();
    }

    pub fn with_calibration(&mut self, calibration: &CalibrationData) {
        self.with_response::<DigT1>(&calibration.dig_t1.to_le_bytes());
        self.with_response::<DigT2>(&calibration.dig_t2.to_le_bytes());
        self.with_response::<DigT3>(&calibration.dig_t3.to_le_bytes());
        self.with_response::<DigP1>(&calibration.dig_p1.to_le_bytes());
        self.with_response::<DigP2>(&calibration.dig_p2.to_le_bytes());
        self.with_response::<DigP3>(&calibration.dig_p3.to_le_bytes());
        self.with_response::<DigP4>(&calibration.dig_p4.to_le_bytes());
        self.with_response::<DigP5>(&calibration.dig_p5.to_le_bytes());
        self.with_response::<DigP6>(&calibration.dig_p6.to_le_bytes());
        self.with_response::<DigP7>(&calibration.dig_p7.to_le_bytes());
        self.with_response::<DigP8>(&calibration.dig_p8.to_le_bytes());
        self.with_response::<DigP9>(&calibration.dig_p9.to_le_bytes());
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.log
    }

    pub fn clear_transactions(&mut self) {
        self.log.clear();
    }
}

impl<const N: usize> Bus for FakeBus<N> {
    type Error = FakeBusError;

    fn read<R: Readable>(&mut self) -> Bmp280Result<R::Out, Self::Error> {
        self.log
            .push(Transaction::Read { addr: R::ADDR, len: R::N })
            .unwrap();

        if let Some(value) = self.regs.get(&R::ADDR) {
            match value {
                RegisterValue::Data { bytes, len } => {
                    if *len == R::N {
                        return Ok(R::decode(&bytes[..R::N])?);
                    }
                }
                RegisterValue::DontCare => {
                    return Ok(R::decode(&self.scratch[..R::N])?);
                }
                RegisterValue::Fail => return Err(Bmp280Error::Bus(FakeBusError)),
            }
        }

        panic!("No mocked value for register 0x{:x} and length {}", R::ADDR, R::N)
    }

    fn write<W: Writable>(&mut self, v: &W::In) -> Bmp280Result<(), Self::Error> {
        let mut bytes = [0u8; MAX_REG_BYTES];
        W::encode(v, &mut bytes[..W::N]);
        self.log
            .push(Transaction::Write { addr: W::ADDR, value: bytes[0] })
            .unwrap();

        if let Some(RegisterValue::Fail) = self.regs.get(&W::ADDR) {
            return Err(Bmp280Error::Bus(FakeBusError));
        }

        self.regs
            .insert(W::ADDR, RegisterValue::Data { bytes, len: W::N })
            .unwrap();
        Ok(())
    }
}
