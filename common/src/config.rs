use std::{env, format, string::String, string::ToString};

use config::{
    builder::DefaultState, Config, ConfigBuilder, ConfigError, Environment, File, FileFormat,
    FileStoredFormat,
};

use crate::{log_debug, log_warn};

pub const CONFIG_STR: &str = "CONFIG_STR";
pub const CONFIG_STR_FORMAT: &str = "CONFIG_STR_FMT";

/// Loads the layered configuration, later sources overriding earlier ones:
/// 1. whatever `config_builder` sets up (usually defaults),
/// 2. the file `file_name.*` found in the closest ancestor directory (optional),
/// 3. an inline string in `<env_prefix>_CONFIG_STR` with its format in
///    `<env_prefix>_CONFIG_STR_FMT`,
/// 4. environment variables `<env_prefix>_<KEY>`, with `__` separating nested keys.
pub fn load_config(
    file_name: &str,
    env_prefix: &str,
    config_builder: impl FnOnce(
        ConfigBuilder<DefaultState>,
    ) -> Result<ConfigBuilder<DefaultState>, ConfigError>,
) -> Result<Config, ConfigError> {
    let mut builder = config_builder(Config::builder())?;

    let file_path = crate::utils::search_current_ancestor_dirs_for(file_name)
        .map(|p| p.to_string_lossy().to_string())
        .unwrap_or_else(|| file_name.to_string());
    log_debug!("Looking for configuration file at {}", file_path);
    builder = builder.add_source(File::with_name(&file_path).required(false));

    if let Some((str, format)) = inline_config(env_prefix) {
        match try_parse_format(&format) {
            Ok(format) => builder = builder.add_source(File::from_str(str.as_str(), format)),
            Err(format) => log_warn!("Unknown format for config string: {}", format),
        }
    }

    builder = builder.add_source(
        Environment::with_prefix(env_prefix)
            .prefix_separator("_")
            .separator("__"),
    );

    builder
        .build()
        .inspect(|c| log_debug!("Loaded raw configurations: {:?}", c))
}

fn inline_config(env_prefix: &str) -> Option<(String, String)> {
    Option::zip(
        env::var(format!("{env_prefix}_{CONFIG_STR}")).ok(),
        env::var(format!("{env_prefix}_{CONFIG_STR_FORMAT}")).ok(),
    )
}

fn try_parse_format(format: &str) -> Result<FileFormat, &str> {
    use FileFormat::*;
    let all_formats = [Toml, Json, Json5, Yaml, Ron, Ini];
    all_formats
        .into_iter()
        .find(|f| f.file_extensions().contains(&format))
        .ok_or(format)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, serde::Deserialize)]
    struct Sample {
        width: u32,
        name: String,
    }

    #[test]
    fn defaults_survive_when_nothing_else_is_set() {
        let config = load_config("utoscmn_test_no_such_file", "UTOSCMN_TEST_A", |b| {
            b.set_default("width", 16)?.set_default("name", "plain")
        })
        .unwrap();
        let sample: Sample = config.try_deserialize().unwrap();
        assert_eq!(sample.width, 16);
        assert_eq!(sample.name, "plain");
    }

    #[test]
    fn inline_string_overrides_defaults() {
        env::set_var("UTOSCMN_TEST_B_CONFIG_STR", "width = 64");
        env::set_var("UTOSCMN_TEST_B_CONFIG_STR_FMT", "toml");
        let config = load_config("utoscmn_test_no_such_file", "UTOSCMN_TEST_B", |b| {
            b.set_default("width", 8)?.set_default("name", "inline")
        })
        .unwrap();
        let sample: Sample = config.try_deserialize().unwrap();
        assert_eq!(sample.width, 64);
        assert_eq!(sample.name, "inline");
    }

    #[test]
    fn formats_are_looked_up_by_extension() {
        assert_eq!(try_parse_format("toml").ok(), Some(FileFormat::Toml));
        assert_eq!(try_parse_format("xml"), Err("xml"));
    }
}
