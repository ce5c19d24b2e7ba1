/// Unit scale selected by `G20`.
pub const INCH_SCALE: f64 = 2.6;
/// Unit scale selected by `G21`, the power-on default.
pub const MM_SCALE: f64 = 1.0;

/// Per-axis factors converting scaled input units to controller steps.
#[derive(Debug, PartialEq, Clone, Copy)]
pub struct StepConfig {
    pub x_step: f64,
    pub y_step: f64,
}
impl Default for StepConfig {
    fn default() -> Self {
        Self {
            x_step: 100.,
            y_step: 10.,
        }
    }
}

/// The machine state as seen by the controller after every executed line.
///
/// `x` and `y` are absolute positions already expressed in controller steps.
#[derive(Debug, PartialEq, Clone, Copy)]
pub struct MachineState {
    pub x: f64,
    pub y: f64,
    pub units_scale: f64,
    pub x_step: f64,
    pub y_step: f64,
    /// Last `V` value, unscaled.
    pub velocity: f64,
    /// Last `A` value, unscaled.
    pub acceleration: f64,
    pub relative: bool,
    pub tool_on: bool,
}

impl MachineState {
    pub fn new(config: StepConfig) -> Self {
        Self {
            x: 0.,
            y: 0.,
            units_scale: MM_SCALE,
            x_step: config.x_step,
            y_step: config.y_step,
            velocity: 0.,
            acceleration: 0.,
            relative: false,
            tool_on: false,
        }
    }

    pub fn step_config(&self) -> StepConfig {
        StepConfig {
            x_step: self.x_step,
            y_step: self.y_step,
        }
    }

    /// No validation is done on `factor`.
    pub fn set_unit_scale(&mut self, factor: f64) {
        self.units_scale = factor;
    }

    pub fn set_positioning_mode(&mut self, relative: bool) {
        self.relative = relative;
    }
}

impl Default for MachineState {
    fn default() -> Self {
        Self::new(StepConfig::default())
    }
}
