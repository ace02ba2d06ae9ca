use crate::core::forcefield::harmonic_bond::MAX_FORCE_GROUP;
use thiserror::Error;

pub const ALL_GROUPS: u32 = u32::MAX;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ConfigError {
    #[error("Force group {0} is out of range (must be between 0 and 31)")]
    InvalidForceGroup(u8),
    #[error("The force group mask selects no groups")]
    EmptyGroupMask,
}

/// Controls what a `Context` computes on each evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EvaluationConfig {
    /// Bit mask of force groups to include; bit `g` selects group `g`.
    pub groups: u32,
    /// Whether per-particle forces are returned along with the energy.
    pub include_forces: bool,
}

impl Default for EvaluationConfig {
    fn default() -> Self {
        Self {
            groups: ALL_GROUPS,
            include_forces: true,
        }
    }
}

impl EvaluationConfig {
    #[inline]
    pub fn includes_group(&self, group: u8) -> bool {
        group <= MAX_FORCE_GROUP && self.groups & (1u32 << group) != 0
    }
}

#[derive(Default)]
pub struct EvaluationConfigBuilder {
    groups: Option<u32>,
    selected: Vec<u8>,
    include_forces: Option<bool>,
}

impl EvaluationConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn groups(mut self, mask: u32) -> Self {
        self.groups = Some(mask);
        self
    }
    pub fn only_group(mut self, group: u8) -> Self {
        self.selected.push(group);
        self
    }
    pub fn include_forces(mut self, include: bool) -> Self {
        self.include_forces = Some(include);
        self
    }

    /// Builds the configuration.
    ///
    /// Groups added with `only_group` are combined into one mask and take
    /// precedence over a mask given with `groups`.
    pub fn build(self) -> Result<EvaluationConfig, ConfigError> {
        let groups = if self.selected.is_empty() {
            self.groups.unwrap_or(ALL_GROUPS)
        } else {
            let mut mask = 0u32;
            for group in self.selected {
                if group > MAX_FORCE_GROUP {
                    return Err(ConfigError::InvalidForceGroup(group));
                }
                mask |= 1u32 << group;
            }
            mask
        };
        if groups == 0 {
            return Err(ConfigError::EmptyGroupMask);
        }

        Ok(EvaluationConfig {
            groups,
            include_forces: self.include_forces.unwrap_or(true),
        })
    }
}
