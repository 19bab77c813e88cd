//! The tick handler: one wake/measure/decide/actuate cycle per invocation.

use crate::platform::Platform;
use crate::state::ControllerState;
use crate::tables::{Threshold, FIRST_STATE, INTERVAL, LOG_COUNT, LOG_ENERGY, STATES};

/// Owns the MPPT controller state and drives it one tick at a time.
///
/// There is exactly one of these per device; it is held by the firmware's
/// main loop (or a test) and passed by exclusive reference into [`tick`],
/// which is the only thing that ever mutates it.
///
/// [`tick`]: Controller::tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, defmt::Format)]
pub struct Controller {
    state: ControllerState,
}

impl Default for Controller {
    fn default() -> Self {
        Self::new()
    }
}

impl Controller {
    /// A freshly power-on controller. The state is stateless across resets,
    /// so this is the only way a `Controller` comes into existence.
    pub const fn new() -> Self {
        Controller {
            state: ControllerState::Off,
        }
    }

    /// The current controller state, for logging or inspection.
    pub fn state(&self) -> ControllerState {
        self.state
    }

    /// Run one wake/measure/decide/actuate cycle against `platform`.
    pub fn tick<P: Platform>(&mut self, platform: &mut P) {
        let vcc = platform.measure_vcc();
        let sensor = platform.measure_sensor();

        if vcc > Threshold::VCC_CUTOFF {
            platform.indicator(true);
            platform.stop_pwm();
            self.state = ControllerState::Off;
            return;
        } else if vcc > Threshold::VCC_INDICATOR {
            platform.indicator(true);
        } else {
            platform.indicator(false);
        }

        let was_off = self.state.is_off();

        if was_off {
            if sensor < Threshold::SENSOR_DARK {
                return;
            }
            self.state = ControllerState::Running {
                index: FIRST_STATE,
                up: false,
                last_energy: 0,
            };
        } else {
            let index = self.state.index().expect("checked not-off above");
            if sensor < Threshold::SENSOR_DARK {
                self.state = ControllerState::stepped_down(index, 4);
            } else if sensor > Threshold::SENSOR_SATURATED {
                self.state = ControllerState::stepped_up(index, 4);
            } else {
                self.state = self.hill_climb(index, sensor);
            }
        }

        match self.state {
            ControllerState::Off => platform.stop_pwm(),
            ControllerState::Running { index, .. } => {
                platform.set_pwm(INTERVAL[index as usize] - 1, was_off);
            }
        }
    }

    /// The perturb-and-observe step: reverse direction whenever the last
    /// step reduced the objective, otherwise keep climbing.
    ///
    /// Both directions reduce to the same accept/reject shape — "accept"
    /// means climb (index+1, clamped, up=true); "reject" means descend
    /// (index-1, or `Off` if index was already 0, up=false) — they differ
    /// only in which comparison counts as acceptance.
    fn hill_climb(&self, index: u8, sensor: u16) -> ControllerState {
        let (up, last_energy) = match self.state {
            ControllerState::Running {
                up, last_energy, ..
            } => (up, last_energy),
            ControllerState::Off => unreachable!("caller checked not-off"),
        };

        debug_assert!((64..=255).contains(&sensor));
        let bucket = (sensor >> 1) as usize - 32;
        let energy = (LOG_ENERGY[bucket] + LOG_COUNT[index as usize]) as i16;

        let accept = if up {
            energy > last_energy
        } else {
            energy < last_energy
        };

        if accept {
            let next_index = (index + 1).min(STATES as u8 - 1);
            ControllerState::Running {
                index: next_index,
                up: true,
                last_energy: energy,
            }
        } else {
            match index.checked_sub(1) {
                Some(next_index) => ControllerState::Running {
                    index: next_index,
                    up: false,
                    last_energy: energy,
                },
                None => ControllerState::Off,
            }
        }
    }
}
