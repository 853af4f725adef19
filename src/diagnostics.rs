//! Debug output hooks.
//!
//! The driver reports what it reads and computes to a [`Diagnostics`] sink it owns, instead of
//! writing to a global logger. Every hook has an empty default, so a sink only implements what it
//! cares about. [`NoDiagnostics`] discards everything; enable the `log` or `defmt` feature for a
//! sink that forwards to those frameworks.
use crate::calibration::{CalibrationData, Temperature};

pub trait Diagnostics {
    /// Called once, right after the calibration words were read.
    fn calibration_loaded(&mut self, _calibration: &CalibrationData) {}

    fn chip_id(&mut self, _id: u8) {}

    fn raw_temperature(&mut self, _raw: u32) {}

    fn raw_pressure(&mut self, _raw: u32) {}

    fn temperature_compensated(&mut self, _adc_t: u32, _temperature: &Temperature) {}
}

/// Sink that drops every event.
#[derive(Copy, Clone, Debug, Default)]
pub struct NoDiagnostics;

impl Diagnostics for NoDiagnostics {}

impl<D: Diagnostics + ?Sized> Diagnostics for &mut D {
    fn calibration_loaded(&mut self, calibration: &CalibrationData) {
        (**self).calibration_loaded(calibration)
    }

    fn chip_id(&mut self, id: u8) {
        (**self).chip_id(id)
    }

    fn raw_temperature(&mut self, raw: u32) {
        (**self).raw_temperature(raw)
    }

    fn raw_pressure(&mut self, raw: u32) {
        (**self).raw_pressure(raw)
    }

    fn temperature_compensated(&mut self, adc_t: u32, temperature: &Temperature) {
        (**self).temperature_compensated(adc_t, temperature)
    }
}

/// Forwards every event to `log::debug!`.
#[cfg(feature = "log")]
#[derive(Copy, Clone, Debug, Default)]
pub struct LogDiagnostics;

#[cfg(feature = "log")]
impl Diagnostics for LogDiagnostics {
    fn calibration_loaded(&mut self, c: &CalibrationData) {
        log::debug!("T1 = {:6}", c.dig_t1);
        log::debug!("T2 = {:6}", c.dig_t2);
        log::debug!("T3 = {:6}", c.dig_t3);
        log::debug!("P1 = {:6}", c.dig_p1);
        log::debug!("P2 = {:6}", c.dig_p2);
        log::debug!("P3 = {:6}", c.dig_p3);
        log::debug!("P4 = {:6}", c.dig_p4);
        log::debug!("P5 = {:6}", c.dig_p5);
        log::debug!("P6 = {:6}", c.dig_p6);
        log::debug!("P7 = {:6}", c.dig_p7);
        log::debug!("P8 = {:6}", c.dig_p8);
        log::debug!("P9 = {:6}", c.dig_p9);
    }

    fn chip_id(&mut self, id: u8) {
        log::debug!("Chip Id 0x{:X} ({})", id, id);
    }

    fn raw_temperature(&mut self, raw: u32) {
        log::debug!("Raw temperature 0x{:04X} ({})", raw & 0xFFFF, raw);
    }

    fn raw_pressure(&mut self, raw: u32) {
        log::debug!("Raw pressure 0x{:04X} ({})", raw & 0xFFFF, raw);
    }

    fn temperature_compensated(&mut self, adc_t: u32, temperature: &Temperature) {
        log::debug!(
            "adc_T = {} t_fine = {} T = {:.2}",
            adc_t,
            temperature.t_fine(),
            temperature.celsius()
        );
    }
}

/// Forwards every event to `defmt::debug!`.
#[cfg(feature = "defmt")]
#[derive(Copy, Clone, Debug, Default)]
pub struct DefmtDiagnostics;

#[cfg(feature = "defmt")]
impl Diagnostics for DefmtDiagnostics {
    fn calibration_loaded(&mut self, calibration: &CalibrationData) {
        defmt::debug!("Calibration {}", calibration);
    }

    fn chip_id(&mut self, id: u8) {
        defmt::debug!("Chip Id {=u8:#x}", id);
    }

    fn raw_temperature(&mut self, raw: u32) {
        defmt::debug!("Raw temperature {=u32}", raw);
    }

    fn raw_pressure(&mut self, raw: u32) {
        defmt::debug!("Raw pressure {=u32}", raw);
    }

    fn temperature_compensated(&mut self, adc_t: u32, temperature: &Temperature) {
        defmt::debug!("adc_T = {=u32} {}", adc_t, temperature);
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// Counts the events it receives and keeps the last values.
    #[derive(Default)]
    pub(crate) struct RecordingDiagnostics {
        pub calibration: Option<CalibrationData>,
        pub chip_id: Option<u8>,
        pub raw_temperatures: usize,
        pub raw_pressures: usize,
        pub last_raw: Option<u32>,
        pub compensated: Option<Temperature>,
    }

    impl Diagnostics for RecordingDiagnostics {
        fn calibration_loaded(&mut self, calibration: &CalibrationData) {
            self.calibration = Some(*calibration);
        }

        fn chip_id(&mut self, id: u8) {
            self.chip_id = Some(id);
        }

        fn raw_temperature(&mut self, raw: u32) {
            self.raw_temperatures += 1;
            self.last_raw = Some(raw);
        }

        fn raw_pressure(&mut self, raw: u32) {
            self.raw_pressures += 1;
            self.last_raw = Some(raw);
        }

        fn temperature_compensated(&mut self, _adc_t: u32, temperature: &Temperature) {
            self.compensated = Some(*temperature);
        }
    }

    #[test]
    fn mutable_reference_forwards_events() {
        fn emit<D: Diagnostics>(mut sink: D) {
            sink.chip_id(0x58);
            sink.raw_temperature(519888);
            sink.calibration_loaded(&CalibrationData::datasheet());
        }

        let mut recorder = RecordingDiagnostics::default();
        emit(&mut recorder);

        assert_eq!(Some(0x58), recorder.chip_id);
        assert_eq!(1, recorder.raw_temperatures);
        assert_eq!(Some(519888), recorder.last_raw);
        assert_eq!(Some(CalibrationData::datasheet()), recorder.calibration);
    }

    #[test]
    fn no_diagnostics_accepts_everything() {
        let mut sink = NoDiagnostics;
        let temperature = CalibrationData::datasheet().compensate_temperature(519888);
        sink.calibration_loaded(&CalibrationData::datasheet());
        sink.temperature_compensated(519888, &temperature);
    }
}
