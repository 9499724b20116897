//! Power state controller
//!
//! Owns the authoritative brightness record and the backlight actuator.
//! "What brightness the user wants" (`manual_percent`) is kept apart from
//! "whether the screen may show it" (`is_dimmed`): changing the former never
//! wakes a dimmed screen, and waking restores it exactly.

use super::machine::PowerState;
use super::timeout::SuspendTimeout;
use crate::config::BacklightConfig;
use crate::traits::BacklightActuator;

/// Authoritative brightness record
///
/// While `is_dimmed` the physical duty is 0 regardless of `manual_percent`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BacklightState {
    /// User-selected brightness (0-100%)
    pub manual_percent: u8,
    /// Backlight currently forced off
    pub is_dimmed: bool,
}

impl BacklightState {
    /// Current state machine state
    pub fn power_state(&self) -> PowerState {
        if self.is_dimmed {
            PowerState::Dimmed
        } else {
            PowerState::Awake
        }
    }

    /// Brightness actually shown on the panel (0-100%)
    pub fn physical_percent(&self) -> u8 {
        if self.is_dimmed {
            0
        } else {
            self.manual_percent
        }
    }
}

/// Result of one controller evaluation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PowerTransition {
    /// State unchanged
    None,
    /// Awake -> Dimmed
    Dimmed,
    /// Dimmed -> Awake
    Woke,
}

/// Scale a 0-100% brightness onto `0..=max_duty`
pub fn duty_for_percent(percent: u8, max_duty: u16) -> u16 {
    (percent.min(100) as u32 * max_duty as u32 / 100) as u16
}

/// Backlight power controller
pub struct PowerController<B> {
    backlight: B,
    state: BacklightState,
    timeout: SuspendTimeout,
    /// Duty last accepted by the actuator, `None` after a failed write
    applied_duty: Option<u16>,
}

impl<B: BacklightActuator> PowerController<B> {
    /// Create a new controller, starting awake at the configured brightness
    ///
    /// The backlight is driven to the default level immediately.
    pub fn new(backlight: B, config: &BacklightConfig) -> Self {
        let mut controller = Self {
            backlight,
            state: BacklightState {
                manual_percent: config.default_percent.min(100),
                is_dimmed: false,
            },
            timeout: SuspendTimeout::from_index(config.default_timeout_index),
            applied_duty: None,
        };
        controller.sync();
        controller
    }

    /// Get the brightness record
    pub fn state(&self) -> BacklightState {
        self.state
    }

    /// Get the current state machine state
    pub fn power_state(&self) -> PowerState {
        self.state.power_state()
    }

    /// Get the active suspend timeout
    pub fn timeout(&self) -> SuspendTimeout {
        self.timeout
    }

    /// Duty last accepted by the actuator
    pub fn applied_duty(&self) -> Option<u16> {
        self.applied_duty
    }

    /// Get access to the underlying actuator
    pub fn backlight(&self) -> &B {
        &self.backlight
    }

    /// Set the user's brightness (slider)
    ///
    /// Always recorded; only pushed to the backlight while awake, and only
    /// when the actuator is not already at that level, since the UI re-sends
    /// the slider value every tick.
    pub fn set_manual_brightness(&mut self, percent: i32) {
        self.state.manual_percent = percent.clamp(0, 100) as u8;

        if !self.state.is_dimmed {
            self.sync();
        }
    }

    /// Select the suspend timeout by dropdown index
    ///
    /// Takes effect on the next [`evaluate`](Self::evaluate); unmapped
    /// indices disable suspension.
    pub fn set_timeout(&mut self, index: i32) {
        let timeout = SuspendTimeout::from_index(index);

        #[cfg(feature = "defmt")]
        if timeout != self.timeout {
            defmt::info!("suspend timeout index {} -> {}", index, timeout);
        }

        self.timeout = timeout;
    }

    /// Evaluate the state machine for the current inactivity duration
    ///
    /// Call once per tick. A transition only commits once the actuator
    /// accepts the new duty; otherwise it is retried on the next call.
    pub fn evaluate(&mut self, inactive_ms: u32) -> PowerTransition {
        let current = self.state.power_state();
        let next = current.next(self.timeout, inactive_ms);

        match (current, next) {
            (PowerState::Awake, PowerState::Dimmed) => {
                if !self.push(0) {
                    return PowerTransition::None;
                }
                self.state.is_dimmed = true;

                #[cfg(feature = "defmt")]
                defmt::info!(
                    "backlight dimmed after {} ms idle ({})",
                    inactive_ms,
                    self.timeout
                );

                PowerTransition::Dimmed
            }
            (PowerState::Dimmed, PowerState::Awake) => {
                let duty = duty_for_percent(self.state.manual_percent, self.backlight.max_duty());
                if !self.push(duty) {
                    return PowerTransition::None;
                }
                self.state.is_dimmed = false;

                #[cfg(feature = "defmt")]
                defmt::info!("backlight woke at {}%", self.state.manual_percent);

                PowerTransition::Woke
            }
            _ => {
                self.sync();
                PowerTransition::None
            }
        }
    }

    /// Re-push the physical level if the actuator is not known to hold it
    fn sync(&mut self) {
        let duty = duty_for_percent(self.state.physical_percent(), self.backlight.max_duty());
        if self.applied_duty != Some(duty) {
            self.push(duty);
        }
    }

    fn push(&mut self, duty: u16) -> bool {
        match self.backlight.set_duty(duty) {
            Ok(()) => {
                self.applied_duty = Some(duty);
                true
            }
            Err(_) => {
                self.applied_duty = None;

                #[cfg(feature = "defmt")]
                defmt::warn!("backlight duty update failed ({})", duty);

                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    /// 10-bit PWM channel recording the last duty written
    struct MockBacklight {
        duty: Option<u16>,
        writes: u32,
        /// Reject this many upcoming writes
        fail_next: u32,
    }

    impl MockBacklight {
        fn new() -> Self {
            Self {
                duty: None,
                writes: 0,
                fail_next: 0,
            }
        }
    }

    impl BacklightActuator for MockBacklight {
        type Error = ();

        fn max_duty(&self) -> u16 {
            1023
        }

        fn set_duty(&mut self, duty: u16) -> Result<(), ()> {
            self.writes += 1;
            if self.fail_next > 0 {
                self.fail_next -= 1;
                return Err(());
            }
            self.duty = Some(duty);
            Ok(())
        }
    }

    fn controller() -> PowerController<MockBacklight> {
        PowerController::new(MockBacklight::new(), &BacklightConfig::default())
    }

    fn duty(c: &PowerController<MockBacklight>) -> Option<u16> {
        c.backlight().duty
    }

    #[test]
    fn test_starts_awake_at_full_brightness() {
        let c = controller();
        assert_eq!(c.power_state(), PowerState::Awake);
        assert_eq!(c.state().manual_percent, 100);
        assert_eq!(c.timeout(), SuspendTimeout::After(15_000));
        assert_eq!(duty(&c), Some(1023));
    }

    #[test]
    fn test_duty_mapping() {
        assert_eq!(duty_for_percent(0, 1023), 0);
        assert_eq!(duty_for_percent(50, 1023), 511);
        assert_eq!(duty_for_percent(100, 1023), 1023);
        assert_eq!(duty_for_percent(250, 1023), 1023);
    }

    #[test]
    fn test_dims_after_timeout() {
        let mut c = controller();

        assert_eq!(c.evaluate(15_000), PowerTransition::None);
        assert_eq!(c.evaluate(15_001), PowerTransition::Dimmed);
        assert!(c.state().is_dimmed);
        assert_eq!(c.state().manual_percent, 100);
        assert_eq!(duty(&c), Some(0));
    }

    #[test]
    fn test_wakes_on_input() {
        let mut c = controller();
        c.set_manual_brightness(40);
        c.evaluate(20_000);

        assert_eq!(c.evaluate(0), PowerTransition::Woke);
        assert_eq!(c.power_state(), PowerState::Awake);
        assert_eq!(duty(&c), Some(duty_for_percent(40, 1023)));
    }

    #[test]
    fn test_hysteresis_idempotent_below_timeout() {
        let mut c = controller();
        let writes = c.backlight().writes;

        for _ in 0..100 {
            assert_eq!(c.evaluate(10_000), PowerTransition::None);
        }
        assert_eq!(c.power_state(), PowerState::Awake);
        assert_eq!(c.backlight().writes, writes);
    }

    #[test]
    fn test_hysteresis_converges_above_timeout() {
        let mut c = controller();

        assert_eq!(c.evaluate(30_000), PowerTransition::Dimmed);
        let writes = c.backlight().writes;
        for _ in 0..100 {
            assert_eq!(c.evaluate(30_000), PowerTransition::None);
        }
        assert_eq!(c.power_state(), PowerState::Dimmed);
        assert_eq!(c.backlight().writes, writes);
    }

    #[test]
    fn test_brightness_change_while_dimmed_does_not_wake() {
        let mut c = controller();
        c.evaluate(20_000);
        let writes = c.backlight().writes;

        c.set_manual_brightness(25);

        assert!(c.state().is_dimmed);
        assert_eq!(c.state().manual_percent, 25);
        assert_eq!(duty(&c), Some(0));
        assert_eq!(c.backlight().writes, writes);
    }

    #[test]
    fn test_brightness_set_while_dimmed_restored_on_wake() {
        let mut c = controller();
        c.set_manual_brightness(80);
        c.evaluate(20_000);

        c.set_manual_brightness(30);
        c.evaluate(0);

        assert_eq!(duty(&c), Some(duty_for_percent(30, 1023)));
    }

    #[test]
    fn test_brightness_pushed_immediately_when_awake() {
        let mut c = controller();
        c.set_manual_brightness(60);
        assert_eq!(duty(&c), Some(duty_for_percent(60, 1023)));
    }

    #[test]
    fn test_unchanged_brightness_not_rewritten() {
        let mut c = controller();
        c.set_manual_brightness(60);
        let writes = c.backlight().writes;

        for _ in 0..10 {
            c.set_manual_brightness(60);
        }
        assert_eq!(c.backlight().writes, writes);
    }

    #[test]
    fn test_brightness_clamped() {
        let mut c = controller();
        c.set_manual_brightness(-20);
        assert_eq!(c.state().manual_percent, 0);
        c.set_manual_brightness(400);
        assert_eq!(c.state().manual_percent, 100);
    }

    #[test]
    fn test_set_timeout_has_no_immediate_effect() {
        let mut c = controller();
        c.evaluate(20_000);

        c.set_timeout(5);
        assert!(c.state().is_dimmed);

        assert_eq!(c.evaluate(u32::MAX), PowerTransition::Woke);
    }

    #[test]
    fn test_invalid_timeout_index_disables_and_wakes() {
        let mut c = controller();
        c.evaluate(20_000);

        c.set_timeout(42);
        assert_eq!(c.timeout(), SuspendTimeout::Disabled);
        assert_eq!(c.evaluate(1_000_000), PowerTransition::Woke);
        assert_eq!(c.evaluate(1_000_000), PowerTransition::None);
    }

    #[test]
    fn test_longer_timeout_wakes_dimmed_screen() {
        let mut c = controller();
        c.evaluate(20_000);

        // 20 s idle is within the 30 s timeout
        c.set_timeout(1);
        assert_eq!(c.evaluate(20_000), PowerTransition::Woke);
    }

    #[test]
    fn test_dim_retried_after_actuator_failure() {
        let mut c = controller();
        c.backlight.fail_next = 1;

        // Rejected write leaves the screen awake and lit
        assert_eq!(c.evaluate(20_000), PowerTransition::None);
        assert!(!c.state().is_dimmed);
        assert_eq!(duty(&c), Some(1023));

        assert_eq!(c.evaluate(20_000), PowerTransition::Dimmed);
        for _ in 0..10 {
            assert_eq!(c.evaluate(20_000), PowerTransition::None);
            assert!(c.state().is_dimmed);
            assert_eq!(duty(&c), Some(0));
        }
    }

    #[test]
    fn test_wake_retried_after_actuator_failure() {
        let mut c = controller();
        c.evaluate(20_000);
        c.backlight.fail_next = 1;

        assert_eq!(c.evaluate(0), PowerTransition::None);
        assert!(c.state().is_dimmed);
        assert_eq!(duty(&c), Some(0));

        assert_eq!(c.evaluate(0), PowerTransition::Woke);
        assert_eq!(duty(&c), Some(1023));
    }

    #[test]
    fn test_brightness_retried_after_actuator_failure() {
        let mut c = controller();
        c.backlight.fail_next = 1;

        c.set_manual_brightness(40);
        assert_eq!(c.state().manual_percent, 40);
        assert_eq!(duty(&c), Some(1023));
        assert_eq!(c.applied_duty(), None);

        // The UI re-sends the same slider value on the next tick
        c.set_manual_brightness(40);
        assert_eq!(duty(&c), Some(duty_for_percent(40, 1023)));
        assert_eq!(c.applied_duty(), duty(&c));
    }

    #[test]
    fn test_failed_start_level_retried_on_evaluate() {
        let mut backlight = MockBacklight::new();
        backlight.fail_next = 1;
        let mut c = PowerController::new(backlight, &BacklightConfig::default());
        assert_eq!(duty(&c), None);

        assert_eq!(c.evaluate(0), PowerTransition::None);
        assert_eq!(duty(&c), Some(1023));
    }

    proptest! {
        #[test]
        fn prop_physical_duty_matches_state(
            steps in proptest::collection::vec((0i32..=100, 0i32..8, 0u32..400_000), 1..40)
        ) {
            let mut c = controller();
            for (percent, index, idle) in steps {
                c.set_timeout(index);
                c.set_manual_brightness(percent);
                c.evaluate(idle);

                let state = c.state();
                let expected = duty_for_percent(state.physical_percent(), 1023);
                prop_assert_eq!(duty(&c), Some(expected));
                prop_assert_eq!(state.manual_percent as i32, percent);
            }
        }
    }
}
