//! The controller's state, tagged rather than sentinel-encoded.
//!
//! The original firmware shares the value domain of `state` between `-1`
//! (off) and `0..41` (running), leaving `up`/`last_energy` undefined — but
//! still readable — while off. Here that's a type-level distinction: `up`
//! and `last_energy` simply don't exist outside [`ControllerState::Running`].

use crate::tables::STATES;

/// Controller state. `Off` carries no duty-cycle index; `Running` carries
/// the index plus the hill-climb's direction and last objective value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, defmt::Format)]
pub enum ControllerState {
    /// No PWM is generated; no energy is pushed into the capacitor.
    Off,
    /// PWM is active at `INTERVAL[index]`.
    Running {
        /// Duty-cycle table index, always in `0..STATES`.
        index: u8,
        /// Direction of the last hill-climb step; `true` = increasing.
        up: bool,
        /// Most recent log-domain objective value, or a reset sentinel.
        last_energy: i16,
    },
}

impl ControllerState {
    /// `true` iff this is [`ControllerState::Off`].
    pub fn is_off(&self) -> bool {
        matches!(self, ControllerState::Off)
    }

    /// The active duty-cycle index, if running.
    pub fn index(&self) -> Option<u8> {
        match *self {
            ControllerState::Off => None,
            ControllerState::Running { index, .. } => Some(index),
        }
    }

    /// Move the index down by `step`, clamping transitions below 0 to `Off`
    /// rather than an out-of-range index. Used by the darkness fast-path.
    pub(crate) fn stepped_down(index: u8, step: u8) -> ControllerState {
        match index.checked_sub(step) {
            Some(new_index) => ControllerState::Running {
                index: new_index,
                up: false,
                last_energy: 0,
            },
            None => ControllerState::Off,
        }
    }

    /// Move the index up by `step`, clamped to the top of the table. Used by
    /// the saturation fast-path.
    pub(crate) fn stepped_up(index: u8, step: u8) -> ControllerState {
        let new_index = index.saturating_add(step).min(STATES as u8 - 1);
        ControllerState::Running {
            index: new_index,
            up: true,
            last_energy: i16::MAX,
        }
    }
}
