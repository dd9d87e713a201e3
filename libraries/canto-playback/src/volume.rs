//! Volume control
//!
//! Volume is a linear level in `0.0..=1.0`, handed to the engine as is.
//! Mute is not a separate flag: a muted player simply has level 0.

/// Clamped volume level
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Volume {
    level: f64,
}

impl Volume {
    /// Create a volume, clamping `level` into range
    pub fn new(level: f64) -> Self {
        Self {
            level: Self::clamp(level),
        }
    }

    /// Set the level and return the value actually applied
    pub fn set_level(&mut self, level: f64) -> f64 {
        self.level = Self::clamp(level);
        self.level
    }

    /// Current level (0.0-1.0)
    pub fn level(&self) -> f64 {
        self.level
    }

    /// Whether the level is zero
    pub fn is_muted(&self) -> bool {
        self.level <= 0.0
    }

    /// Level a mute toggle should switch to
    ///
    /// Audible volume mutes to 0; silence restores `unmute_level`.
    pub fn toggled(&self, unmute_level: f64) -> f64 {
        if self.is_muted() {
            Self::clamp(unmute_level)
        } else {
            0.0
        }
    }

    /// NaN maps to silence
    fn clamp(level: f64) -> f64 {
        if level.is_nan() {
            0.0
        } else {
            level.clamp(0.0, 1.0)
        }
    }
}

impl Default for Volume {
    fn default() -> Self {
        Self::new(crate::types::DEFAULT_VOLUME)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_volume() {
        let vol = Volume::new(0.8);
        assert_eq!(vol.level(), 0.8);
        assert!(!vol.is_muted());
        assert_eq!(Volume::default().level(), 0.7);
    }

    #[test]
    fn set_level_clamps() {
        let mut vol = Volume::new(0.5);

        assert_eq!(vol.set_level(1.5), 1.0);
        assert_eq!(vol.set_level(-0.2), 0.0);
        assert_eq!(vol.set_level(f64::NAN), 0.0);
        assert_eq!(vol.set_level(0.25), 0.25);
        assert_eq!(vol.level(), 0.25);
    }

    #[test]
    fn toggled_mutes_then_restores() {
        let vol = Volume::new(0.4);
        assert_eq!(vol.toggled(0.7), 0.0);

        let muted = Volume::new(0.0);
        assert!(muted.is_muted());
        assert_eq!(muted.toggled(0.7), 0.7);
    }
}
