//! The transport between the driver and the device.
//!
//! [`Bus`] reads and writes typed register markers from [`crate::register`]. One call is one
//! bus transaction. [`I2c`] implements it on top of any `embedded_hal::i2c::I2c`.
use crate::error::{Bmp280Error, Bmp280Result};
use crate::register::{Readable, Writable};
use embedded_hal::i2c::SevenBitAddress;

/// Largest register block the driver transfers in one transaction.
pub(crate) const MAX_REG_BYTES: usize = 2;

pub trait Bus {
    type Error;

    fn read<R: Readable>(&mut self) -> Bmp280Result<R::Out, Self::Error>;

    fn write<W: Writable>(&mut self, v: &W::In) -> Bmp280Result<(), Self::Error>;
}

impl<B: Bus + ?Sized> Bus for &mut B {
    type Error = B::Error;

    fn read<R: Readable>(&mut self) -> Bmp280Result<R::Out, Self::Error> {
        (**self).read::<R>()
    }

    fn write<W: Writable>(&mut self, v: &W::In) -> Bmp280Result<(), Self::Error> {
        (**self).write::<W>(v)
    }
}

pub struct I2c<I2cType> {
    i2c: I2cType,
    address: SevenBitAddress,
}

impl<I2cType> I2c<I2cType>
where
    I2cType: embedded_hal::i2c::I2c,
{
    pub(crate) fn new(i2c: I2cType, address: SevenBitAddress) -> Self {
        Self { i2c, address }
    }

    pub(crate) fn release(self) -> I2cType {
        self.i2c
    }
}

impl<I2cType> Bus for I2c<I2cType>
where
    I2cType: embedded_hal::i2c::I2c,
{
    type Error = I2cType::Error;

    fn read<R: Readable>(&mut self) -> Bmp280Result<R::Out, Self::Error> {
        let mut buffer = [0u8; MAX_REG_BYTES];
        let data = &mut buffer[..R::N];
        self.i2c
            .write_read(self.address, &[R::ADDR], data)
            .map_err(Bmp280Error::Bus)?;

        Ok(R::decode(data)?)
    }

    fn write<W: Writable>(&mut self, v: &W::In) -> Bmp280Result<(), Self::Error> {
        let mut buffer = [0u8; MAX_REG_BYTES + 1];
        buffer[0] = W::ADDR;
        W::encode(v, &mut buffer[1..=W::N]);
        self.i2c
            .write(self.address, &buffer[..=W::N])
            .map_err(Bmp280Error::Bus)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::register::calibration::{DigT1, DigT3};
    use crate::register::ctrl_meas::{CtrlMeas, CtrlMeasCfg, Oversampling, PowerMode};
    use embedded_hal_mock::eh1::i2c::{Mock, Transaction};
    use std::vec;

    #[test]
    fn i2c_read_calibration_word() {
        let expectations = [
            Transaction::write_read(0x77, vec![0x88], vec![0x70, 0x6B]),
            Transaction::write_read(0x77, vec![0x8C], vec![0x18, 0xFC]),
        ];
        let mut bus = I2c::new(Mock::new(&expectations), 0x77);

        assert_eq!(27504, bus.read::<DigT1>().unwrap());
        assert_eq!(-1000, bus.read::<DigT3>().unwrap());

        bus.release().done();
    }

    #[test]
    fn i2c_write_control_byte() {
        let expectations = [Transaction::write(0x76, vec![0xF4, 0x2F])];
        let mut bus = I2c::new(Mock::new(&expectations), 0x76);

        bus.write::<CtrlMeas>(&CtrlMeasCfg {
            osrs_t: Oversampling::X1,
            osrs_p: Oversampling::X4,
            mode: PowerMode::Normal,
        })
        .unwrap();

        bus.release().done();
    }

    #[test]
    fn i2c_read_reports_reserved_bits() {
        let expectations = [Transaction::write_read(0x77, vec![0xF4], vec![0b1010_0011])];
        let mut bus = I2c::new(Mock::new(&expectations), 0x77);

        let err = bus.read::<CtrlMeas>().unwrap_err();
        assert!(matches!(err, Bmp280Error::UnexpectedRegisterData(field) if field.register == 0xF4));

        bus.release().done();
    }
}
