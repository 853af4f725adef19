use crate::bus::{Bus, I2c};
use crate::calibration::{CalibrationData, Temperature};
use crate::config::Configuration;
use crate::diagnostics::{Diagnostics, NoDiagnostics};
use crate::error::{Bmp280Error, Bmp280Result};
use crate::register::chip_id::{ChipId, BMP280_CHIP_ID};
use crate::register::config::{Config, ConfigFields};
use crate::register::ctrl_meas::{CtrlMeas, CtrlMeasCfg, Oversampling, PowerMode};
use crate::register::data::{self, PressLsb, PressMsb, PressXlsb, TempLsb, TempMsb, TempXlsb};
use crate::register::reset::{Reset, ResetCmd};
use crate::register::status::{Status, StatusFlags};
use crate::register::{Readable, Writable};
use embedded_hal::delay::DelayNs;
use embedded_hal::i2c::SevenBitAddress;

/// I2C address used when SDO is tied to VDDIO.
pub const DEFAULT_ADDRESS: SevenBitAddress = 0x77;

/// Type alias for a Bmp280 chip communicating over I2C
pub type Bmp280I2c<T, D = NoDiagnostics> = Bmp280<I2c<T>, D>;

/// Main Bmp280 driver struct
///
/// A driver only exists once its calibration has been loaded, so every compensation
/// works on real coefficients.
///
/// The driver is not synchronized. Writing CTRL_MEAS and reading the data registers
/// back is one logical transaction, so sharing a device between threads needs an
/// external lock around each read.
pub struct Bmp280<B, D = NoDiagnostics> {
    bus: B,
    config: Configuration,
    calibration: CalibrationData,
    diagnostics: D,
}

impl<T> Bmp280I2c<T>
where
    T: embedded_hal::i2c::I2c,
{
    /// Constructs a new Bmp280 driver instance that communicates over I2C.
    ///
    /// `mode` is the raw power mode: sleep = 0, forced = 2, normal = 3. Oversampling starts at
    /// x1 for temperature and x4 for pressure.
    ///
    /// This function will:
    /// - Reject any other `mode` with [`Bmp280Error::InvalidConfiguration`] before touching the bus
    /// - Load calibration coefficients from NVM (twelve register reads, nothing is written)
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use embedded_hal::i2c::I2c;
    /// # use bmp280_rs::Bmp280Result;
    /// use bmp280_rs::{Bmp280, DEFAULT_ADDRESS};
    /// # fn demo<I: I2c>(i2c: I) -> Bmp280Result<(), I::Error> {
    ///
    /// let mut device = Bmp280::new_i2c(i2c, DEFAULT_ADDRESS, 3)?;
    /// let raw = device.read_raw_temperature()?;
    /// println!("{} °C", device.compensate_temperature(raw).celsius());
    /// # Ok(())
    /// # }
    /// ```
    pub fn new_i2c<A: Into<SevenBitAddress>>(
        i2c: T,
        address: A,
        mode: u8,
    ) -> Bmp280Result<Self, T::Error> {
        Self::with_raw_mode(I2c::new(i2c, address.into()), mode, NoDiagnostics)
    }
}

impl<T, D> Bmp280I2c<T, D>
where
    T: embedded_hal::i2c::I2c,
    D: Diagnostics,
{
    /// Constructs a new Bmp280 driver instance with a typed configuration and a diagnostics sink.
    ///
    /// Like [`Bmp280::new_i2c`] this only loads the calibration; the configuration is written
    /// with the next raw read.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use embedded_hal::i2c::I2c;
    /// # use bmp280_rs::Bmp280Result;
    /// use bmp280_rs::{Bmp280, SdoPinState};
    /// use bmp280_rs::config::Configuration;
    /// use bmp280_rs::diagnostics::NoDiagnostics;
    /// use bmp280_rs::register::ctrl_meas::{Oversampling, PowerMode};
    /// # fn demo<I: I2c>(i2c: I) -> Bmp280Result<(), I::Error> {
    ///
    /// let config = Configuration::default()
    ///     .power_mode(PowerMode::Forced)
    ///     .temperature_oversampling(Oversampling::X2);
    /// let device = Bmp280::with_configuration(i2c, SdoPinState::Low, config, NoDiagnostics)?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_configuration<A: Into<SevenBitAddress>>(
        i2c: T,
        address: A,
        config: Configuration,
        diagnostics: D,
    ) -> Bmp280Result<Self, T::Error> {
        Self::new(I2c::new(i2c, address.into()), config, diagnostics)
    }

    /// Destroys the driver and hands back the I2C peripheral.
    pub fn release(self) -> T {
        self.bus.release()
    }
}

impl<B, D> Bmp280<B, D>
where
    B: Bus,
    D: Diagnostics,
{
    /// Validates a raw power mode, then constructs the driver with default oversampling.
    pub(crate) fn with_raw_mode(bus: B, mode: u8, diagnostics: D) -> Bmp280Result<Self, B::Error> {
        let mode = PowerMode::try_from(mode)
            .map_err(|e| Bmp280Error::InvalidConfiguration(e.0))?;

        Self::new(bus, Configuration::default().power_mode(mode), diagnostics)
    }

    /// Creates a new instance of the Bmp280 driver struct, loading the calibration coefficients.
    pub(crate) fn new(mut bus: B, config: Configuration, mut diagnostics: D) -> Bmp280Result<Self, B::Error> {
        let calibration = CalibrationData::load(&mut bus)?;
        diagnostics.calibration_loaded(&calibration);

        Ok(Bmp280 {
            bus,
            config,
            calibration,
            diagnostics,
        })
    }

    /// Read a register using a **typed marker** from [`crate::register`].
    ///
    /// This is the low-level entry point; the convenience methods are easier to discover.
    ///
    /// # Examples
    /// ```rust,no_run
    /// # use bmp280_rs::{register, Bmp280, Bmp280Result};
    /// # use bmp280_rs::bus::Bus;
    /// # fn demo<B: Bus>(mut device: Bmp280<B>) -> Bmp280Result<(), B::Error> {
    /// let id: u8 = device.read::<register::chip_id::ChipId>()?;
    /// assert_eq!(id, 0x58);
    /// # Ok(()) }
    /// ```
    pub fn read<R: Readable>(&mut self) -> Bmp280Result<R::Out, B::Error> {
        self.bus.read::<R>()
    }

    /// Write a register using a **typed marker** from [`crate::register`].
    ///
    /// This performs a direct write. Note that the raw reads rewrite CTRL_MEAS from the stored
    /// [`Configuration`], so use [`set_configuration`](Self::set_configuration) to change it for good.
    pub fn write<W: Writable>(&mut self, v: &W::In) -> Bmp280Result<(), B::Error> {
        self.bus.write::<W>(v)
    }

    /// The configuration used for the next control byte.
    pub fn configuration(&self) -> &Configuration {
        &self.config
    }

    /// Replaces the stored configuration. Nothing is written until the next raw read.
    pub fn set_configuration(&mut self, config: Configuration) {
        self.config = config;
    }

    /// The calibration coefficients loaded at construction.
    pub fn calibration(&self) -> &CalibrationData {
        &self.calibration
    }

    /// Reads the ID (0xD0) register.
    pub fn read_chip_id(&mut self) -> Bmp280Result<u8, B::Error> {
        let id = self.bus.read::<ChipId>()?;
        self.diagnostics.chip_id(id);

        Ok(id)
    }

    /// Determines if a BMP280 answers by comparing the ID (0xD0) register against 0x58.
    pub fn is_connected(&mut self) -> Bmp280Result<bool, B::Error> {
        Ok(self.read_chip_id()? == BMP280_CHIP_ID)
    }

    /// Triggers a soft reset and waits the 2 ms start-up time (datasheet table 2).
    ///
    /// All registers go back to their reset values, so the device ends up in sleep mode.
    /// Calibration NVM is untouched and the stored configuration is rewritten by the next raw read.
    pub fn soft_reset<Dl: DelayNs>(&mut self, delay: &mut Dl) -> Bmp280Result<(), B::Error> {
        self.bus.write::<Reset>(&ResetCmd::SoftReset)?;
        delay.delay_ms(2);

        Ok(())
    }

    /// Returns the flags of the STATUS (0xF3) register.
    pub fn status(&mut self) -> Bmp280Result<StatusFlags, B::Error> {
        self.bus.read::<Status>()
    }

    /// Polls STATUS until no conversion is running, sleeping 1 ms between polls.
    ///
    /// The raw reads never wait on their own. Call this between triggering a forced
    /// conversion and reading the results, or sleep for [`max_measurement_time_us`](Self::max_measurement_time_us).
    ///
    /// Returns [`Bmp280Error::Timeout`] if the device is still measuring after `max_polls` polls.
    pub fn wait_for_measurement<Dl: DelayNs>(&mut self, delay: &mut Dl, max_polls: u32) -> Bmp280Result<(), B::Error> {
        for _ in 0..max_polls {
            if !self.status()?.measuring() {
                return Ok(());
            }

            delay.delay_ms(1);
        }

        Err(Bmp280Error::Timeout)
    }

    /// Returns the maximum measurement time in microseconds for the stored configuration.
    pub fn max_measurement_time_us(&self) -> u32 {
        calculate_maximum_measurement_time(self.config.osrs_t(), self.config.osrs_p())
    }

    /// Reads CTRL_MEAS (0xF4) back from the device.
    pub fn read_control(&mut self) -> Bmp280Result<CtrlMeasCfg, B::Error> {
        self.bus.read::<CtrlMeas>()
    }

    /// Returns the standby time, IIR filter and interface settings from CONFIG (0xF5).
    pub fn standby_config(&mut self) -> Bmp280Result<ConfigFields, B::Error> {
        self.bus.read::<Config>()
    }

    /// Writes standby time, IIR filter and interface settings to CONFIG (0xF5).
    ///
    /// The device may ignore this write in normal mode.
    pub fn set_standby_config(&mut self, config: &ConfigFields) -> Bmp280Result<(), B::Error> {
        self.bus.write::<Config>(config)
    }

    /// Writes the control byte built from the stored configuration.
    ///
    /// In forced mode this starts a conversion of both pressure and temperature.
    fn write_control(&mut self) -> Bmp280Result<(), B::Error> {
        let ctrl_meas = self.config.ctrl_meas();
        self.bus.write::<CtrlMeas>(&ctrl_meas)
    }

    /// Reads the raw (uncompensated) temperature.
    ///
    /// Writes the control byte, then reads TEMP_MSB, TEMP_LSB and TEMP_XLSB one register at a
    /// time. There is no wait in between, see [`wait_for_measurement`](Self::wait_for_measurement).
    pub fn read_raw_temperature(&mut self) -> Bmp280Result<u32, B::Error> {
        self.write_control()?;

        let msb = self.bus.read::<TempMsb>()?;
        let lsb = self.bus.read::<TempLsb>()?;
        let xlsb = self.bus.read::<TempXlsb>()?;
        let raw = data::assemble(msb, lsb, xlsb) >> 4;

        self.diagnostics.raw_temperature(raw);
        Ok(raw)
    }

    /// Reads the raw (uncompensated) pressure.
    ///
    /// Same sequence as [`read_raw_temperature`](Self::read_raw_temperature) on PRESS_MSB,
    /// PRESS_LSB and PRESS_XLSB, except that the result is shifted right by `8 - mode`, with
    /// mode as its register value (sleep 0, forced 2, normal 3).
    pub fn read_raw_pressure(&mut self) -> Bmp280Result<u32, B::Error> {
        self.write_control()?;

        let msb = self.bus.read::<PressMsb>()?;
        let lsb = self.bus.read::<PressLsb>()?;
        let xlsb = self.bus.read::<PressXlsb>()?;
        let mode: u8 = self.config.mode().into();
        let raw = data::assemble(msb, lsb, xlsb) >> (8 - mode);

        self.diagnostics.raw_pressure(raw);
        Ok(raw)
    }

    /// Compensates a raw temperature with the loaded calibration.
    ///
    /// See [`CalibrationData::compensate_temperature`].
    pub fn compensate_temperature(&mut self, adc_t: u32) -> Temperature {
        let temperature = self.calibration.compensate_temperature(adc_t);
        self.diagnostics.temperature_compensated(adc_t, &temperature);

        temperature
    }

    /// Reads and compensates one temperature sample.
    pub fn read_temperature(&mut self) -> Bmp280Result<Temperature, B::Error> {
        let raw = self.read_raw_temperature()?;

        Ok(self.compensate_temperature(raw))
    }
}

/// Calculates the maximum measurement time in microseconds.
///
/// Datasheet section 3.8.1: `t = 1.25 + 2.3 * osrs_t + (2.3 * osrs_p + 0.575)` ms, where a
/// skipped channel contributes nothing.
fn calculate_maximum_measurement_time(temperature_oversampling: Oversampling, pressure_oversampling: Oversampling) -> u32 {
    let temperature = 2300 * temperature_oversampling.factor();
    let pressure = match pressure_oversampling {
        Oversampling::Skip => 0,
        p => 2300 * p.factor() + 575,
    };

    1250 + temperature + pressure
}

/// This enum should reflect the physical state of the SDO pin. This is used to determine the I2C address
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum SdoPinState {
    /// SDO is pulled high by connection to VDDIO
    High,
    /// SDO is pulled low by connection to GND
    Low,
}

impl From<SdoPinState> for SevenBitAddress {
    fn from(state: SdoPinState) -> Self {
        match state {
            SdoPinState::High => DEFAULT_ADDRESS,
            SdoPinState::Low => 0x76,
        }
    }
}
