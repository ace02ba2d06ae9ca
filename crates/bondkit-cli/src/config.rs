use crate::cli::EvaluateArgs;
use crate::error::{CliError, Result};
use bondkit::engine::config::{EvaluationConfig, EvaluationConfigBuilder};
use bondkit::engine::error::EngineError;
use nalgebra::Vector3;
use serde::Deserialize;
use std::path::Path;
use tracing::debug;

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
struct PartialSystemConfig {
    #[serde(rename = "box")]
    box_lengths: Option<[f64; 3]>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
struct PartialEvaluationConfig {
    groups: Option<Vec<u8>>,
    #[serde(rename = "include-forces")]
    include_forces: Option<bool>,
}

/// The `evaluate` configuration file, with every field optional.
#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
pub struct PartialEvaluateConfig {
    system: Option<PartialSystemConfig>,
    evaluation: Option<PartialEvaluationConfig>,
}

/// Settings for one `evaluate` run after file values and CLI arguments are merged.
#[derive(Debug, Clone, PartialEq)]
pub struct EvaluateSettings {
    pub periodic_box: Option<Vector3<f64>>,
    pub evaluation: EvaluationConfig,
}

impl PartialEvaluateConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Loading configuration from file: {:?}", path);
        let content = std::fs::read_to_string(path).map_err(|e| CliError::FileParsing {
            path: path.to_path_buf(),
            source: e.into(),
        })?;
        toml::from_str(&content).map_err(|e| CliError::FileParsing {
            path: path.to_path_buf(),
            source: e.into(),
        })
    }

    /// Command-line values take precedence over the file.
    pub fn merge_with_cli(self, args: &EvaluateArgs) -> Result<EvaluateSettings> {
        let system = self.system.unwrap_or_default();
        let evaluation = self.evaluation.unwrap_or_default();

        let periodic_box = match args.box_lengths.or(system.box_lengths) {
            Some(lengths) if lengths.iter().any(|&l| !(l > 0.0)) => {
                return Err(CliError::Config(format!(
                    "Box lengths must be positive, got {:?}.",
                    lengths
                )));
            }
            Some(lengths) => Some(Vector3::from(lengths)),
            None => None,
        };

        let groups = if args.groups.is_empty() {
            evaluation.groups.unwrap_or_default()
        } else {
            args.groups.clone()
        };

        let include_forces = if args.no_forces {
            false
        } else {
            evaluation.include_forces.unwrap_or(true)
        };

        let builder = groups.into_iter().fold(
            EvaluationConfigBuilder::new().include_forces(include_forces),
            |builder, group| builder.only_group(group),
        );
        let evaluation = builder.build().map_err(EngineError::from)?;

        debug!(
            "Merged evaluation settings: box = {:?}, groups = {:#010x}, include_forces = {}",
            periodic_box, evaluation.groups, evaluation.include_forces
        );

        Ok(EvaluateSettings {
            periodic_box,
            evaluation,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{Cli, Commands};
    use bondkit::engine::config::ConfigError;
    use clap::Parser;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn write_config_file(dir: &TempDir, content: &str) -> PathBuf {
        let path = dir.path().join("evaluate.toml");
        fs::write(&path, content).unwrap();
        path
    }

    fn parse_evaluate_args(extra: &[&str]) -> EvaluateArgs {
        let mut args = vec!["bondkit", "evaluate", "-p", "bonds.toml", "-x", "traj.xyz"];
        args.extend_from_slice(extra);
        match Cli::parse_from(args).command {
            Commands::Evaluate(args) => args,
            _ => panic!("Expected 'evaluate' subcommand"),
        }
    }

    #[test]
    fn defaults_apply_without_file_or_overrides() {
        let settings = PartialEvaluateConfig::default()
            .merge_with_cli(&parse_evaluate_args(&[]))
            .unwrap();
        assert_eq!(settings.periodic_box, None);
        assert_eq!(settings.evaluation, EvaluationConfig::default());
    }

    #[test]
    fn file_values_are_loaded() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config_file(
            &dir,
            r#"
            [system]
            box = [3.0, 4.0, 5.0]

            [evaluation]
            groups = [0, 2]
            include-forces = false
            "#,
        );

        let settings = PartialEvaluateConfig::from_file(&path)
            .unwrap()
            .merge_with_cli(&parse_evaluate_args(&[]))
            .unwrap();

        assert_eq!(settings.periodic_box, Some(Vector3::new(3.0, 4.0, 5.0)));
        assert_eq!(settings.evaluation.groups, 0b101);
        assert!(!settings.evaluation.include_forces);
    }

    #[test]
    fn cli_args_override_file_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config_file(
            &dir,
            r#"
            [system]
            box = [3.0, 3.0, 3.0]

            [evaluation]
            groups = [0]
            "#,
        );
        let args = parse_evaluate_args(&["--box", "6,6,6", "-g", "1", "-g", "4", "--no-forces"]);

        let settings = PartialEvaluateConfig::from_file(&path)
            .unwrap()
            .merge_with_cli(&args)
            .unwrap();

        assert_eq!(settings.periodic_box, Some(Vector3::new(6.0, 6.0, 6.0)));
        assert_eq!(settings.evaluation.groups, (1 << 1) | (1 << 4));
        assert!(!settings.evaluation.include_forces);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config_file(&dir, "[evaluation]\nforces = true\n");
        let result = PartialEvaluateConfig::from_file(&path);
        assert!(matches!(result, Err(CliError::FileParsing { .. })));
    }

    #[test]
    fn missing_config_file_error_names_the_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.toml");
        let result = PartialEvaluateConfig::from_file(&path);
        assert!(matches!(
            &result,
            Err(CliError::FileParsing { path: p, .. }) if *p == path
        ));
        let message = result.unwrap_err().to_string();
        assert!(message.contains("missing.toml"));
    }

    #[test]
    fn out_of_range_group_is_a_config_error() {
        let result =
            PartialEvaluateConfig::default().merge_with_cli(&parse_evaluate_args(&["-g", "32"]));
        assert!(matches!(
            result,
            Err(CliError::Engine(EngineError::Config {
                source: ConfigError::InvalidForceGroup(32)
            }))
        ));
    }

    #[test]
    fn non_positive_box_from_file_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config_file(&dir, "[system]\nbox = [3.0, 0.0, 3.0]\n");
        let result = PartialEvaluateConfig::from_file(&path)
            .unwrap()
            .merge_with_cli(&parse_evaluate_args(&[]));
        assert!(matches!(result, Err(CliError::Config(_))));
    }
}
