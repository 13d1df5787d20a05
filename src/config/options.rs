//! every single available configuration option and its type is listed in this file
use {
    crate::{
        config::validate::{Validate, format_validation_errors},
        export::ExportFormat,
        palette::PaletteMode,
    },
    color_eyre::{
        Section, SectionExt,
        eyre::{Context, OptionExt, Result, eyre},
    },
    config::{Config, ConfigBuilder},
    schemars::JsonSchema,
    serde::{Deserialize, Serialize},
    smart_default::SmartDefault,
    std::path::{Path, PathBuf},
    tracing::info,
};

/// the file name searched for in the config dir and the working directory
pub const CONFIG_FILE_NAME: &str = "palettecss.toml";

/// prefix of environment variable overrides (`PALETTECSS__DISPLAY__COLORED=false`)
pub const ENV_PREFIX: &str = "PALETTECSS";

/// Settings for palette generation
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema, SmartDefault)]
#[schemars(default)]
pub struct GeneratorCfg {
    /// Which variants a shuffle may produce (random, dark, light)
    #[default(Some(PaletteMode::Random))]
    pub mode: Option<PaletteMode>,

    /// Seed for the random number generator
    ///
    /// Leave unset to get a different palette on every shuffle
    #[default(None)]
    pub seed: Option<u64>,
}

/// Settings for exporting themes
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema, SmartDefault)]
#[schemars(default)]
pub struct ExportCfg {
    /// The default export format (css, json)
    #[default(Some(ExportFormat::Css))]
    pub format: Option<ExportFormat>,
}

/// Settings for terminal previews
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema, SmartDefault)]
#[schemars(default)]
pub struct DisplayCfg {
    /// Draw colors with 24-bit ANSI escape codes
    #[default(Some(true))]
    pub colored: Option<bool>,

    #[schemars(range(min = 1, max = 32))]
    /// Width of the color blocks in swatch listings
    #[default(Some(4))]
    pub swatch_width: Option<usize>,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, JsonSchema, SmartDefault)]
#[serde(rename_all = "lowercase")]
/// The format to log in
pub enum LoggingFormat {
    /// Use the compact output format
    #[default]
    Compact,

    /// Use an excessively pretty output format
    Pretty,
}

/// Settings for logging
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema, SmartDefault)]
#[schemars(default)]
pub struct LoggingConfig {
    /// Enable logging
    #[default(Some(true))]
    pub enable: Option<bool>,

    /// The max level to log at
    #[default(Some("warn".to_string()))]
    pub level: Option<String>,

    /// The output format of log messages
    #[default(Some(LoggingFormat::Compact))]
    pub format: Option<LoggingFormat>,

    /// Enable ANSI escape codes for colors and stuff
    #[default(Some(true))]
    pub ansi: Option<bool>,

    /// Display event targets in log messages
    #[default(Some(false))]
    pub event_targets: Option<bool>,

    /// Display line numbers in log messages
    #[default(Some(false))]
    pub line_numbers: Option<bool>,
}

/// palettecss configuration options
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema, SmartDefault)]
#[schemars(default)]
pub struct PaletteCss {
    /// Configuration file version (do not modify manually)
    #[default(Some(1))]
    pub version: Option<u32>,

    /// Palette generation settings
    #[default(Some(GeneratorCfg::default()))]
    pub generator: Option<GeneratorCfg>,

    /// Export settings
    #[default(Some(ExportCfg::default()))]
    pub export: Option<ExportCfg>,

    /// Preview settings
    #[default(Some(DisplayCfg::default()))]
    pub display: Option<DisplayCfg>,

    /// Logging settings
    #[default(Some(LoggingConfig::default()))]
    pub logging: Option<LoggingConfig>,
}

impl PaletteCss {
    /// load config from default locations
    ///
    /// load prio: env > local > global > defaults
    pub fn load() -> Result<Self> {
        let global_config_path = Self::global_config_path()?;
        let defaults = Self::load_defaults()?;
        let local_config = Self::find_local_config()?;

        let cfg = Self::load_from(&defaults, &global_config_path, local_config.as_deref())?;

        if !global_config_path.exists() {
            Self::create_default_config(&global_config_path, &defaults)?;
        }

        Ok(cfg)
    }

    /// layer the global file, the local file and the environment over `defaults`, then validate
    fn load_from(defaults: &PaletteCss, global: &Path, local: Option<&Path>) -> Result<Self> {
        let mut builder = Self::create_builder(defaults)?
            .add_source(config::File::from(global).required(false));

        if let Some(local) = local {
            builder = builder.add_source(config::File::from(local).required(false));
        }

        builder = builder.add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder.build().wrap_err("Failed to build configuration")?;
        let cfg: PaletteCss = settings
            .try_deserialize::<PaletteCss>()
            .wrap_err("Failed to deserialize configuration")?;

        cfg.run_validation()?;
        info!("Configuration validation successful");

        Ok(cfg)
    }

    /// get the global config file path
    pub fn global_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_eyre("Unable to determine system config directory")
            .suggestion("Ensure XDG_CONFIG_HOME or HOME environment variables are set")
            .suggestion("On Windows, APPDATA should be set")?;

        Ok(config_dir.join(CONFIG_FILE_NAME))
    }

    /// load default config from embedded default config file
    pub fn load_defaults() -> Result<Self> {
        toml::from_str(include_str!("../../resources/palettecss.default.toml"))
            .wrap_err("Failed to parse embedded default configuration")
            .note("This is a bug - the embedded defaults are malformed")
    }

    /// create a config builder with defaults
    fn create_builder(defaults: &PaletteCss) -> Result<ConfigBuilder<config::builder::DefaultState>> {
        let config_source = Config::try_from(defaults)
            .wrap_err("Failed to convert default PaletteCss struct to config source")?;

        Ok(Config::builder().add_source(config_source))
    }

    /// run validation and return a pretty error if it fails
    pub fn run_validation(&self) -> Result<()> {
        self.validate()
            .map_err(|errors| eyre!(format_validation_errors(&errors)))
            .wrap_err("config validation failed")
            .suggestion("Check your palettecss.toml for invalid values")
            .suggestion("Run with default config to see valid options")
    }

    /// find the local config file
    fn find_local_config() -> Result<Option<PathBuf>> {
        let curr_dir = std::env::current_dir()
            .wrap_err("Failed to get current working directory")
            .suggestion("Ensure the current directory exists and is accessible")?;

        Ok(find_config_in(&curr_dir))
    }

    /// create the default config file
    fn create_default_config(path: &Path, defaults: &PaletteCss) -> Result<()> {
        let config_dir = path
            .parent()
            .ok_or_eyre("Unable to determine parent directory of config path")?;

        std::fs::create_dir_all(config_dir)
            .wrap_err("Failed to create config directory")
            .with_section(|| format!("{}", config_dir.display()).header("Directory:"))?;

        defaults
            .save_to_file(path)
            .wrap_err("Failed to write default configuration file")?;

        info!("Wrote default configuration to {}", path.display());
        Ok(())
    }

    /// save config to a file
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let toml_str =
            toml::to_string_pretty(self).wrap_err("Failed to serialize config to TOML")?;

        std::fs::write(path, &toml_str)
            .wrap_err_with(|| format!("Failed to write config file: {}", path.display()))
            .with_section(|| path.display().to_string().header("File path"))
            .with_section(|| format!("{} bytes", toml_str.len()).header("Content size:"))?;

        Ok(())
    }
}

/// the nearest config file in `dir` or one of its ancestors
fn find_config_in(dir: &Path) -> Option<PathBuf> {
    dir.ancestors()
        .map(|ancestor| ancestor.join(CONFIG_FILE_NAME))
        .find(|path| path.exists())
}
