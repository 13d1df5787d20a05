//! cli stuff
use {
    crate::{
        config::options::PaletteCss,
        error::Result,
        export::ExportFormat,
        palette::{PaletteGenerator, PaletteMode},
        theme::{ThemePatch, ThemeStore},
        utils::write_to_file,
    },
    clap::{Args, Parser, Subcommand},
    color_eyre::eyre::Context,
    rand::{Rng, SeedableRng, rngs::StdRng},
    schemars::generate::SchemaSettings,
    std::path::PathBuf,
    tracing::info,
};

/// the CLI
#[derive(Parser, Debug)]
#[command(name = "palettecss", version, about = "Generate, edit and export CSS color themes")]
pub struct Cli {
    /// What to do (defaults to `edit`)
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Save instead of printing
    #[arg(long)]
    pub save: bool,

    /// Generate a JSON schemafile based on the defaults
    #[arg(short = 's', long)]
    pub gen_schema: bool,

    /// Generate the default config file
    #[arg(short = 'd', long)]
    pub gen_default: bool,

    /// Generate both the schema and the default config file
    #[arg(short = 'a', long)]
    pub gen_all: bool,
}

/// the subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Edit a theme interactively
    Edit {
        #[command(flatten)]
        /// how to build the starting theme
        theme: ThemeArgs,
    },

    /// Print or save a theme as CSS variables or JSON
    Export {
        /// The output format (defaults to `export.format`)
        #[arg(short, long, value_enum)]
        format: Option<ExportFormat>,

        /// Write to this file instead of stdout
        #[arg(short, long, value_name = "PATH")]
        output: Option<PathBuf>,

        #[command(flatten)]
        /// how to build the theme
        theme: ThemeArgs,
    },

    /// Draw a sample card with the theme's colors
    Preview {
        #[command(flatten)]
        /// how to build the theme
        theme: ThemeArgs,
    },

    /// List every token of the theme
    Show {
        #[command(flatten)]
        /// how to build the theme
        theme: ThemeArgs,
    },
}

impl Commands {
    /// the theme arguments of any subcommand
    pub fn theme_args(&self) -> &ThemeArgs {
        match self {
            Self::Edit { theme }
            | Self::Export { theme, .. }
            | Self::Preview { theme }
            | Self::Show { theme } => theme,
        }
    }
}

impl Default for Commands {
    fn default() -> Self {
        Self::Edit {
            theme: ThemeArgs::default(),
        }
    }
}

/// arguments that build the starting theme
///
/// applied in order: `--shuffle`, `--from-json`, then every `--set`
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct ThemeArgs {
    /// Start from a generated palette instead of the defaults
    #[arg(long)]
    pub shuffle: bool,

    /// Seed for palette generation (defaults to `generator.seed`)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Palette variant (defaults to `generator.mode`)
    #[arg(long, value_enum)]
    pub mode: Option<PaletteMode>,

    /// Override a token, may be repeated
    #[arg(long = "set", value_name = "KEY=VALUE")]
    pub set: Vec<String>,

    /// Apply the tokens of a JSON export
    #[arg(long, value_name = "PATH")]
    pub from_json: Option<PathBuf>,
}

impl ThemeArgs {
    /// build the store these arguments describe
    ///
    /// # Errors
    ///
    /// returns an error if the JSON file can't be read or parsed
    /// returns an error if an assignment is malformed
    pub fn build_store<R: Rng + ?Sized>(
        &self,
        generator: &PaletteGenerator,
        rng: &mut R,
    ) -> Result<ThemeStore> {
        let mut store = ThemeStore::new();

        if self.shuffle {
            store.shuffle(generator, rng);
        }

        if let Some(path) = &self.from_json {
            let json = std::fs::read_to_string(path)
                .wrap_err_with(|| format!("failed to read {}", path.display()))?;
            store.merge(&ThemePatch::from_json(&json)?);
        }

        if !self.set.is_empty() {
            store.merge(&ThemePatch::from_assignments(&self.set)?);
        }

        Ok(store)
    }
}

/// make the random number generator for a run
///
/// a seed gives reproducible palettes, otherwise it's seeded from the OS
pub fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_rng(&mut rand::rng()),
    }
}

impl Cli {
    /// handle the config generation flags
    ///
    /// returns whether any of them were given
    ///
    /// # Errors
    ///
    /// returns an error if it fails to generate and/or save the json schema
    /// returns an error if it fails to generate and/or save the default config
    pub fn run_generators(&self) -> Result<bool> {
        if self.gen_schema || self.gen_all {
            Self::gen_schema(self.save)?;
        }

        if self.gen_default || self.gen_all {
            Self::gen_defaults(self.save)?;
        }

        Ok(self.gen_default || self.gen_all || self.gen_schema)
    }

    /// generate/save the config schema
    ///
    /// # Errors
    ///
    /// returns an error if it fails to convert the schema to a JSON string
    /// returns an error if it fails to save the schema to `resources/palettecss.schema.json`
    pub fn gen_schema(save: bool) -> Result<()> {
        let schema_str = Self::schema()?;

        if save {
            write_to_file("resources/palettecss.schema.json", &schema_str)?;
            info!("Saved config schema");
        } else {
            println!("{}", schema_str);
        }

        Ok(())
    }

    /// generate/save the default config file
    ///
    /// # Errors
    ///
    /// returns an error if it fails to convert the default config to TOML
    /// returns an error if it fails to save the default config to `resources/palettecss.default.toml`
    pub fn gen_defaults(save: bool) -> Result<()> {
        let defaults = toml::to_string_pretty(&PaletteCss::default())?;

        if save {
            write_to_file("resources/palettecss.default.toml", &defaults)?;
            info!("Saved default config");
        } else {
            println!("{}", defaults);
        }

        Ok(())
    }

    /// the JSON schema of the config file
    fn schema() -> Result<String> {
        let settings = SchemaSettings::draft2020_12().for_serialize();
        let generator = settings.into_generator();
        let schema = generator.into_root_schema_for::<PaletteCss>();

        Ok(serde_json::to_string_pretty(&schema)?)
    }
}
