//! BMP280 calibration coefficients and temperature compensation.
//!
//! The coefficients are loaded from registers 0x88 - 0x9F (datasheet BST-BMP280-DS001,
//! section 3.11.2) and applied with the integer reference formula of section 3.11.3.
use crate::bus::Bus;
use crate::error::Bmp280Result;
use crate::register::calibration::{
    DigP1, DigP2, DigP3, DigP4, DigP5, DigP6, DigP7, DigP8, DigP9, DigT1, DigT2, DigT3,
};

/// Factory-trimmed calibration coefficients (dig_T* and dig_P*).
///
/// The pressure words are kept so the full set can be inspected, but only the
/// temperature words are consumed by this driver.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CalibrationData {
    pub dig_t1: u16,
    pub dig_t2: i16,
    pub dig_t3: i16,
    pub dig_p1: u16,
    pub dig_p2: i16,
    pub dig_p3: i16,
    pub dig_p4: i16,
    pub dig_p5: i16,
    pub dig_p6: i16,
    pub dig_p7: i16,
    pub dig_p8: i16,
    pub dig_p9: i16,
}

impl CalibrationData {
    /// Reads the twelve calibration words, one register per transaction, in address order.
    pub(crate) fn load<B: Bus>(bus: &mut B) -> Bmp280Result<Self, B::Error> {
        Ok(Self {
            dig_t1: bus.read::<DigT1>()?,
            dig_t2: bus.read::<DigT2>()?,
            dig_t3: bus.read::<DigT3>()?,
            dig_p1: bus.read::<DigP1>()?,
            dig_p2: bus.read::<DigP2>()?,
            dig_p3: bus.read::<DigP3>()?,
            dig_p4: bus.read::<DigP4>()?,
            dig_p5: bus.read::<DigP5>()?,
            dig_p6: bus.read::<DigP6>()?,
            dig_p7: bus.read::<DigP7>()?,
            dig_p8: bus.read::<DigP8>()?,
            dig_p9: bus.read::<DigP9>()?,
        })
    }

    /// The coefficients of the worked example in the datasheet (section 3.12).
    ///
    /// Handy for checking the arithmetic without a device: a raw temperature of
    /// 519888 compensates to 25.08 °C.
    pub const fn datasheet() -> Self {
        Self {
            dig_t1: 27504,
            dig_t2: 26435,
            dig_t3: -1000,
            dig_p1: 36477,
            dig_p2: -10685,
            dig_p3: 3024,
            dig_p4: 2855,
            dig_p5: 140,
            dig_p6: -7,
            dig_p7: 15500,
            dig_p8: -14500,
            dig_p9: 6000,
        }
    }

    /// Compensates a raw 20-bit temperature sample (adc_T).
    ///
    /// Integer-only until the very last division. Intermediates are `i64` so the
    /// products cannot overflow, and `>>` on signed integers is an arithmetic shift,
    /// which rounds towards negative infinity exactly like the datasheet code.
    ///
    /// ```
    /// use bmp280_rs::calibration::CalibrationData;
    ///
    /// let temperature = CalibrationData::datasheet().compensate_temperature(519888);
    /// assert_eq!(2508, temperature.centi_celsius());
    /// assert_eq!(128422, temperature.t_fine());
    /// ```
    pub fn compensate_temperature(&self, adc_t: u32) -> Temperature {
        let adc_t = i64::from(adc_t);
        let t1 = i64::from(self.dig_t1);
        let t2 = i64::from(self.dig_t2);
        let t3 = i64::from(self.dig_t3);

        let var1 = (((adc_t >> 3) - (t1 << 1)) * t2) >> 11;
        let delta = (adc_t >> 4) - t1;
        let var2 = (((delta * delta) >> 12) * t3) >> 14;

        let t_fine = var1 + var2;

        Temperature {
            t_fine,
            centi_celsius: (t_fine * 5 + 128) >> 8,
        }
    }
}

/// A compensated temperature together with the fine temperature it was derived from.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Temperature {
    t_fine: i64,
    centi_celsius: i64,
}

impl Temperature {
    /// The fine temperature accumulator, which is also the input to pressure compensation.
    pub fn t_fine(&self) -> i64 {
        self.t_fine
    }

    /// Temperature in hundredths of a degree Celsius, e.g. 2508 = 25.08 °C.
    pub fn centi_celsius(&self) -> i64 {
        self.centi_celsius
    }

    pub fn celsius(&self) -> f32 {
        self.centi_celsius as f32 / 100.0
    }

    #[cfg(feature = "uom")]
    pub fn uom(&self) -> uom::si::f32::ThermodynamicTemperature {
        uom::si::thermodynamic_temperature::ThermodynamicTemperature::new::<uom::si::thermodynamic_temperature::degree_celsius>(self.celsius())
    }
}
