use crate::register::ctrl_meas::{CtrlMeasCfg, Oversampling, PowerMode};

/// Sampling settings written to CTRL_MEAS before every raw read.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Configuration {
    pub(crate) mode: PowerMode,
    pub(crate) temperature_oversampling: Oversampling,
    pub(crate) pressure_oversampling: Oversampling,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            mode: PowerMode::Normal,
            temperature_oversampling: Oversampling::X1,
            pressure_oversampling: Oversampling::X4,
        }
    }
}

impl Configuration {
    pub fn power_mode(mut self, power_mode: PowerMode) -> Self {
        self.mode = power_mode;

        self
    }

    pub fn temperature_oversampling(mut self, temperature_oversampling: Oversampling) -> Self {
        self.temperature_oversampling = temperature_oversampling;

        self
    }

    /// Sets the pressure oversampling.
    /// Pressure is converted together with temperature, so this also lengthens temperature reads.
    pub fn pressure_oversampling(mut self, pressure_oversampling: Oversampling) -> Self {
        self.pressure_oversampling = pressure_oversampling;

        self
    }

    pub fn mode(&self) -> PowerMode {
        self.mode
    }

    pub fn osrs_t(&self) -> Oversampling {
        self.temperature_oversampling
    }

    pub fn osrs_p(&self) -> Oversampling {
        self.pressure_oversampling
    }

    /// The CTRL_MEAS payload for this configuration.
    pub fn ctrl_meas(&self) -> CtrlMeasCfg {
        CtrlMeasCfg {
            osrs_t: self.temperature_oversampling,
            osrs_p: self.pressure_oversampling,
            mode: self.mode,
        }
    }

    pub fn from_preset(p: Preset) -> Self {
        match p {
            Preset::WeatherMonitoring => Configuration::default()
                .power_mode(PowerMode::Forced)
                .pressure_oversampling(Oversampling::X1),
            Preset::HandheldLowPower => Configuration::default()
                .temperature_oversampling(Oversampling::X2)
                .pressure_oversampling(Oversampling::X16),
            Preset::HandheldDynamic => Configuration::default(),
            Preset::Elevator => Configuration::default(),
            Preset::DropDetection => Configuration::default()
                .pressure_oversampling(Oversampling::X2),
            Preset::IndoorNavigation => Configuration::default()
                .temperature_oversampling(Oversampling::X2)
                .pressure_oversampling(Oversampling::X16),
        }
    }
}

/// Oversampling and mode recommendations from the datasheet (section 3.4, table 7).
///
/// The presets only cover CTRL_MEAS; pair them with the matching filter and standby time via
/// [`Bmp280::set_standby_config`](crate::Bmp280::set_standby_config).
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Preset {
    HandheldLowPower,
    HandheldDynamic,
    WeatherMonitoring,
    Elevator,
    DropDetection,
    IndoorNavigation,
}
