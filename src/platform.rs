//! The boundary between the MPPT control law and the device it runs on.
//!
//! Everything register-level — clock/watchdog/ADC/timer setup, GPIO pin
//! configuration, the indicator LED drive, the physical switching PWM
//! generation — lives on the other side of this trait. The controller only
//! ever sees the six operations below.

/// Which clock is producing tick interrupts. Reported for observability only
/// (logging, host tooling); the controller's decisions do not depend on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, defmt::Format)]
pub enum TickPeriod {
    /// 1000 ms tick, derived from the 32768 Hz crystal.
    Crystal1000Ms,
    /// 250 ms tick, derived from the internal low-frequency oscillator
    /// fallback when no crystal is fitted.
    FallbackOscillator250Ms,
}

/// Narrow hardware contract required by [`crate::Controller::tick`].
///
/// Platform operations do not fail: an ADC read always returns some 10-bit
/// value, even a glitched one, and the control law is designed to absorb
/// that rather than reject it. A concrete implementation talking to real
/// silicon is free to retry or escalate on its own terms before returning a
/// value here; that policy belongs to the implementation, not this trait.
pub trait Platform {
    /// Sample the supply rail, returning a 10-bit ADC reading against the
    /// same reference used by [`Platform::measure_sensor`].
    fn measure_vcc(&mut self) -> u16;

    /// Sample the converter's sense node. Always issued immediately after
    /// [`Platform::measure_vcc`] within the same tick.
    fn measure_sensor(&mut self) -> u16;

    /// Program the PWM timer for a repetition period of `period_ticks + 1`
    /// auxiliary-clock ticks, with a fixed one-tick high pulse per period.
    ///
    /// `restart` is true exactly on the transition out of `Off`: the timer
    /// must restart with its counter cleared so the new period takes effect
    /// immediately, rather than at whatever point a previously-stopped
    /// counter happened to be at.
    fn set_pwm(&mut self, period_ticks: u16, restart: bool);

    /// Halt the timer and force the PWM output low.
    fn stop_pwm(&mut self);

    /// Drive the status indicator. Used to signal the over-voltage
    /// condition; has no effect on control.
    fn indicator(&mut self, on: bool);

    /// Enter low-power mode until the next tick interrupt, returning which
    /// clock produced it.
    fn sleep_until_next_tick(&mut self) -> TickPeriod;
}
