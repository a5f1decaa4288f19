//! Solver settings
//!
//! Every field has a default, so a TOML file only needs the keys it wants to
//! change.

use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct YamamotoConfig {
    /// Hard cap on predictor steps.
    pub max_steps: usize,
    /// The path is followed until lambda is at or below this value.
    pub lambda_floor: f64,
    /// Euclidean length of every predictor step (profile and lambda parts).
    pub step_size: f64,
    /// Status sink cadence in steps. A cancellation request takes effect
    /// within `report_interval - 1` steps; 0 disables reporting and polling.
    pub report_interval: usize,
    /// Payoff gap, relative to the largest absolute payoff, below which two
    /// strategies count as tied when the initial ranking is built.
    pub tie_tolerance: f64,
    /// How far lambda may exceed 1, or a probability drop below 0, before
    /// the run fails with `Infeasible`.
    pub feasibility_tolerance: f64,
}

impl Default for YamamotoConfig {
    fn default() -> Self {
        YamamotoConfig {
            max_steps: 50_000,
            lambda_floor: 0.01,
            step_size: 1e-3,
            report_interval: 25,
            tie_tolerance: 1e-10,
            feasibility_tolerance: 1e-3,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config: YamamotoConfig = toml::from_str("max_steps = 100\nstep_size = 0.01\n").unwrap();
        assert_eq!(config.max_steps, 100);
        assert_eq!(config.step_size, 0.01);
        assert_eq!(config.report_interval, 25);
        assert_eq!(config.lambda_floor, 0.01);
        assert_eq!(config.feasibility_tolerance, 1e-3);
    }

    #[test]
    fn test_empty_toml_is_default() {
        let config: YamamotoConfig = toml::from_str("").unwrap();
        assert_eq!(config, YamamotoConfig::default());
    }
}
