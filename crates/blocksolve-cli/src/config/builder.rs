use super::defaults::DefaultsConfig;
use super::file::FileConfig;
use super::models::AppConfig;
use crate::cli::SolveArgs;
use crate::error::{CliError, Result};
use crate::utils::parser::{self, SetValue};
use blocksolve::core::io::traits::MalformedLinePolicy;
use blocksolve::engine::config as core_config;
use tracing::debug;

pub fn build_config(args: &SolveArgs) -> Result<AppConfig> {
    let defaults = DefaultsConfig::default();

    let file_config = if let Some(config_path) = &args.config {
        FileConfig::from_file(config_path)?
    } else {
        FileConfig::default()
    };

    let mut file_config = apply_set_values(file_config, &args.set_values)?;
    debug!("Effective file configuration: {:?}", &file_config);

    let discovery_file = file_config.discovery.take().unwrap_or_default();
    let min_overlap = args
        .min_overlap
        .or(discovery_file.min_overlap)
        .unwrap_or(defaults.min_overlap);

    let absorption_file = file_config.absorption.take().unwrap_or_default();
    let absorption_enabled = if args.no_absorption {
        false
    } else {
        absorption_file
            .enabled
            .unwrap_or(defaults.absorption_enabled)
    };

    let output_file = file_config.output.take().unwrap_or_default();
    let weight_headers = args.weight_headers
        || output_file
            .weight_headers
            .unwrap_or(defaults.weight_headers);

    let on_malformed = if args.skip_malformed {
        MalformedLinePolicy::Skip
    } else {
        file_config.on_malformed.unwrap_or(defaults.on_malformed)
    };

    let core_config = core_config::SolveConfigBuilder::new()
        .min_overlap(min_overlap)
        .absorption_enabled(absorption_enabled)
        .weight_headers(weight_headers)
        .on_malformed(on_malformed)
        .build()
        .map_err(|e| CliError::Config(e.to_string()))?;

    Ok(AppConfig {
        input_path: args.input.clone(),
        output_path: args.output.clone(),
        core_config,
    })
}

fn apply_set_values(mut config: FileConfig, set_values: &[String]) -> Result<FileConfig> {
    for kv_pair in set_values {
        let value =
            parser::parse_set_value(kv_pair).map_err(|e| CliError::Argument(e.to_string()))?;
        match value {
            SetValue::MinOverlap(n) => {
                config
                    .discovery
                    .get_or_insert_with(Default::default)
                    .min_overlap = Some(n);
            }
            SetValue::AbsorptionEnabled(enabled) => {
                config
                    .absorption
                    .get_or_insert_with(Default::default)
                    .enabled = Some(enabled);
            }
            SetValue::WeightHeaders(enabled) => {
                config
                    .output
                    .get_or_insert_with(Default::default)
                    .weight_headers = Some(enabled);
            }
            SetValue::OnMalformed(policy) => {
                config.on_malformed = Some(policy);
            }
        }
    }
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::tempdir;

    fn base_solve_args() -> SolveArgs {
        SolveArgs {
            input: PathBuf::from("input.txt"),
            output: None,
            config: None,
            min_overlap: None,
            no_absorption: false,
            skip_malformed: false,
            weight_headers: false,
            set_values: vec![],
        }
    }

    #[test]
    fn build_config_with_no_overrides_uses_defaults() {
        let app = build_config(&base_solve_args()).expect("build ok");
        let defaults = DefaultsConfig::default();

        assert_eq!(app.input_path, PathBuf::from("input.txt"));
        assert!(app.output_path.is_none());
        assert_eq!(app.core_config.discovery.min_overlap, defaults.min_overlap);
        assert_eq!(
            app.core_config.absorption.enabled,
            defaults.absorption_enabled
        );
        assert_eq!(app.core_config.output.weight_headers, defaults.weight_headers);
        assert_eq!(app.core_config.on_malformed, defaults.on_malformed);
    }

    #[test]
    fn file_values_override_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("blocksolve.toml");
        fs::write(
            &path,
            "on-malformed = \"skip\"\n[discovery]\nmin-overlap = 4\n[absorption]\nenabled = false\n",
        )
        .unwrap();

        let mut args = base_solve_args();
        args.config = Some(path);
        let cfg = build_config(&args).unwrap().core_config;

        assert_eq!(cfg.discovery.min_overlap, 4);
        assert!(!cfg.absorption.enabled);
        assert_eq!(cfg.on_malformed, MalformedLinePolicy::Skip);
    }

    #[test]
    fn set_values_override_file_and_flags_override_set_values() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("blocksolve.toml");
        fs::write(&path, "[discovery]\nmin-overlap = 4\n").unwrap();

        let mut args = base_solve_args();
        args.config = Some(path);
        args.set_values = vec!["discovery.min-overlap=5".to_string()];
        assert_eq!(
            build_config(&args).unwrap().core_config.discovery.min_overlap,
            5
        );

        args.min_overlap = Some(6);
        assert_eq!(
            build_config(&args).unwrap().core_config.discovery.min_overlap,
            6
        );
    }

    #[test]
    fn boolean_flags_override_file_values() {
        let mut args = base_solve_args();
        args.set_values = vec![
            "absorption.enabled=true".to_string(),
            "on-malformed=abort".to_string(),
        ];
        args.no_absorption = true;
        args.skip_malformed = true;
        args.weight_headers = true;

        let cfg = build_config(&args).unwrap().core_config;
        assert!(!cfg.absorption.enabled);
        assert!(cfg.output.weight_headers);
        assert_eq!(cfg.on_malformed, MalformedLinePolicy::Skip);
    }

    #[test]
    fn zero_min_overlap_is_a_config_error() {
        let mut args = base_solve_args();
        args.min_overlap = Some(0);
        assert!(matches!(build_config(&args), Err(CliError::Config(_))));
    }

    #[test]
    fn bad_set_value_is_an_argument_error() {
        let mut args = base_solve_args();
        args.set_values = vec!["discovery.min-overlap".to_string()];
        assert!(matches!(build_config(&args), Err(CliError::Argument(_))));
    }
}
