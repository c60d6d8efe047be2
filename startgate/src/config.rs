use anyhow::{anyhow, bail};

pub const DEBOUNCE_MS: u32 = 20;
pub const PULSE_ON_MS: u32 = 500;
pub const COOLDOWN_MS: u32 = 5000;

/// Minimum share of each fire cycle the solenoid must spend de-energized, in percent.
pub const MIN_OFF_PERCENT: u32 = 90;

const _: () = assert!(
    (COOLDOWN_MS as u64) * 100 >= (COOLDOWN_MS as u64 + PULSE_ON_MS as u64) * MIN_OFF_PERCENT as u64
);

/// Dwell durations used by the gate controller, fixed for the life of the process.
#[derive(Copy, Clone, Eq, PartialEq, Debug, serde::Serialize)]
pub struct GateTiming {
    pub debounce_ms: u32,
    pub pulse_on_ms: u32,
    pub cooldown_ms: u32,
}

impl Default for GateTiming {
    fn default() -> Self {
        GateTiming {
            debounce_ms: DEBOUNCE_MS,
            pulse_on_ms: PULSE_ON_MS,
            cooldown_ms: COOLDOWN_MS,
        }
    }
}

impl GateTiming {
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.debounce_ms == 0 {
            bail!("debounce must be at least 1ms");
        }

        if self.pulse_on_ms == 0 {
            bail!("pulse must be at least 1ms");
        }

        let on = self.pulse_on_ms as u64;
        let off = self.cooldown_ms as u64;

        if off * 100 < (on + off) * MIN_OFF_PERCENT as u64 {
            bail!(
                "duty cycle too high: {}ms on, {}ms cooldown (at most {}% on-time)",
                self.pulse_on_ms,
                self.cooldown_ms,
                100 - MIN_OFF_PERCENT
            );
        }

        Ok(())
    }

    /// Share of a fire cycle spent energized, in percent.
    pub fn duty_cycle_percent(&self) -> f32 {
        let on = self.pulse_on_ms as f32;
        let off = self.cooldown_ms as f32;
        100.0 * on / (on + off)
    }

    fn try_from_str(s: &str) -> anyhow::Result<Self> {
        let mut iter = s.split_terminator(':');
        let mut next = |name: &str| -> anyhow::Result<u32> {
            let field = iter.next().ok_or_else(|| anyhow!("missing {name}"))?;
            field
                .trim()
                .parse()
                .map_err(|e| anyhow!("invalid {name} {field:?}: {e}"))
        };

        let timing = GateTiming {
            debounce_ms: next("debounce")?,
            pulse_on_ms: next("pulse")?,
            cooldown_ms: next("cooldown")?,
        };

        if iter.next().is_some() {
            bail!("too many fields in {s:?}");
        }

        timing.validate()?;
        Ok(timing)
    }

    /// Timing from `STARTGATE_TIMING` (`debounce:pulse:cooldown`) set at build time.
    pub fn from_env_var() -> anyhow::Result<Self> {
        if let Some(s) = option_env!("STARTGATE_TIMING") {
            GateTiming::try_from_str(s)
        } else {
            Err(anyhow!("STARTGATE_TIMING not set"))
        }
    }
}
