use crate::args::Cli;
use crate::types::{LogLevel, RenderFormat};
use anyhow::{Context, Result, bail};
use serde::Deserialize;
use std::fmt;
use std::path::{Path, PathBuf};

pub const MIN_MODULUS: u32 = 2;
pub const MIN_SIZE: usize = 16;

/// Resolve the config file path based on priority:
/// 1. Explicit `--config` path (with tilde expansion)
/// 2. PASCALTRI_CONFIG environment variable (with tilde expansion)
/// 3. `<config_dir>/pascaltri/config.toml`
///
/// Returns `None` when no config directory can be determined; the run then
/// uses built-in defaults.
pub fn resolve_config_path(explicit_path: Option<&Path>) -> Option<ConfigSource> {
    if let Some(path) = explicit_path {
        return Some(ConfigSource::Explicit(expand_tilde(&path.to_string_lossy())));
    }

    if let Ok(env_path) = std::env::var("PASCALTRI_CONFIG")
        && !env_path.is_empty()
    {
        return Some(ConfigSource::Implicit(expand_tilde(&env_path)));
    }

    dirs::config_dir()
        .map(|dir| ConfigSource::Implicit(dir.join("pascaltri").join("config.toml")))
}

/// Where the config path came from. A missing file is only an error when
/// the user named it on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    Explicit(PathBuf),
    Implicit(PathBuf),
}

impl ConfigSource {
    pub fn path(&self) -> &Path {
        match self {
            ConfigSource::Explicit(path) | ConfigSource::Implicit(path) => path,
        }
    }

    pub fn load(&self) -> Result<Config> {
        if let ConfigSource::Explicit(path) = self
            && !path.exists()
        {
            bail!("Config file not found: {}", path.display());
        }
        Config::load_from(self.path())
    }
}

/// Expand tilde (~) in paths to the user's home directory
fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = std::env::var_os("HOME")
    {
        return PathBuf::from(home).join(stripped);
    }
    PathBuf::from(path)
}

/// Defaults read from `config.toml`. Every key is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub format: Option<RenderFormat>,
    #[serde(default)]
    pub log_level: Option<LogLevel>,
}

impl Config {
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        Ok(config)
    }
}

/// Fully resolved run settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    pub modulus: u32,
    pub width: usize,
    pub format: RenderFormat,
    pub log_level: LogLevel,
}

impl Settings {
    /// Merge flags over the config file over built-in defaults, clamping
    /// modulus and size into range. Every clamp is reported back.
    pub fn resolve(cli: &Cli, config: &Config) -> (Self, Vec<Adjustment>) {
        let mut adjustments = Vec::new();

        let (modulus, adjusted) = clamp_modulus(cli.modulus);
        adjustments.extend(adjusted);
        let (width, adjusted) = clamp_size(cli.size);
        adjustments.extend(adjusted);

        let settings = Self {
            modulus,
            width,
            format: cli.format.or(config.format).unwrap_or_default(),
            log_level: cli.log_level.or(config.log_level).unwrap_or_default(),
        };

        (settings, adjustments)
    }
}

/// A requested value replaced by the nearest usable one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Adjustment {
    pub field: &'static str,
    pub requested: i64,
    pub applied: u64,
}

impl fmt::Display for Adjustment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} is out of range; using {}",
            self.field, self.requested, self.applied
        )
    }
}

pub fn clamp_modulus(requested: i64) -> (u32, Option<Adjustment>) {
    let applied = requested.clamp(i64::from(MIN_MODULUS), i64::from(u32::MAX)) as u32;
    (applied, adjustment("modulus", requested, u64::from(applied)))
}

pub fn clamp_size(requested: i64) -> (usize, Option<Adjustment>) {
    let applied = usize::try_from(requested)
        .unwrap_or(MIN_SIZE)
        .max(MIN_SIZE);
    (applied, adjustment("size", requested, applied as u64))
}

fn adjustment(field: &'static str, requested: i64, applied: u64) -> Option<Adjustment> {
    (i128::from(requested) != i128::from(applied)).then_some(Adjustment {
        field,
        requested,
        applied,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use tempfile::TempDir;

    fn cli(args: &[&str]) -> Cli {
        let mut argv = vec!["pascaltri"];
        argv.extend_from_slice(args);
        Cli::try_parse_from(argv).unwrap()
    }

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.format, None);
        assert_eq!(config.log_level, None);
    }

    #[test]
    fn test_load_missing_file_yields_default() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config = Config::load_from(&temp_dir.path().join("absent.toml"))?;
        assert_eq!(config, Config::default());
        Ok(())
    }

    #[test]
    fn test_load_reads_format_and_level() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let path = temp_dir.path().join("config.toml");
        std::fs::write(&path, "format = \"pyramid\"\nlog_level = \"debug\"\n")?;

        let config = Config::load_from(&path)?;
        assert_eq!(config.format, Some(RenderFormat::Pyramid));
        assert_eq!(config.log_level, Some(LogLevel::Debug));
        Ok(())
    }

    #[test]
    fn test_load_rejects_unknown_keys() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let path = temp_dir.path().join("config.toml");
        std::fs::write(&path, "colour = \"red\"\n")?;

        let err = Config::load_from(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
        Ok(())
    }

    #[test]
    fn test_explicit_missing_config_is_an_error() {
        let source = ConfigSource::Explicit(PathBuf::from("/nonexistent/pascaltri.toml"));
        assert!(source.load().is_err());

        let source = ConfigSource::Implicit(PathBuf::from("/nonexistent/pascaltri.toml"));
        assert_eq!(source.load().unwrap(), Config::default());
    }

    #[test]
    fn test_clamps_below_minimums() {
        let (settings, adjustments) = Settings::resolve(&cli(&["1", "5"]), &Config::default());
        assert_eq!(settings.modulus, 2);
        assert_eq!(settings.width, 16);
        assert_eq!(adjustments.len(), 2);
        assert_eq!(adjustments[0].to_string(), "modulus 1 is out of range; using 2");
        assert_eq!(adjustments[1].to_string(), "size 5 is out of range; using 16");
    }

    #[test]
    fn test_negative_values_clamp_without_failure() {
        let (settings, _) = Settings::resolve(&cli(&["-7", "-100"]), &Config::default());
        assert_eq!(settings.modulus, MIN_MODULUS);
        assert_eq!(settings.width, MIN_SIZE);
    }

    #[test]
    fn test_in_range_values_are_untouched() {
        let (settings, adjustments) = Settings::resolve(&cli(&["5", "32"]), &Config::default());
        assert_eq!(settings.modulus, 5);
        assert_eq!(settings.width, 32);
        assert!(adjustments.is_empty());
    }

    #[test]
    fn test_oversized_modulus_saturates() {
        let (modulus, adjustment) = clamp_modulus(i64::from(u32::MAX) + 10);
        assert_eq!(modulus, u32::MAX);
        assert!(adjustment.is_some());
    }

    #[test]
    fn test_flags_override_config_over_defaults() {
        let config = Config {
            format: Some(RenderFormat::Pyramid),
            log_level: Some(LogLevel::Info),
        };

        let (settings, _) = Settings::resolve(&cli(&["2", "16"]), &config);
        assert_eq!(settings.format, RenderFormat::Pyramid);
        assert_eq!(settings.log_level, LogLevel::Info);

        let (settings, _) = Settings::resolve(
            &cli(&["2", "16", "--format", "plain", "--log-level", "error"]),
            &config,
        );
        assert_eq!(settings.format, RenderFormat::Plain);
        assert_eq!(settings.log_level, LogLevel::Error);

        let (settings, _) = Settings::resolve(&cli(&["2", "16"]), &Config::default());
        assert_eq!(settings.format, RenderFormat::Bitmap);
        assert_eq!(settings.log_level, LogLevel::Warn);
    }

    #[test]
    fn test_explicit_path_wins() {
        let source = resolve_config_path(Some(Path::new("/tmp/custom.toml")));
        assert_eq!(
            source,
            Some(ConfigSource::Explicit(PathBuf::from("/tmp/custom.toml")))
        );
    }
}
