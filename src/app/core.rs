//! the core app
use {
    super::{
        cli::{Cli, Commands, ThemeArgs, make_rng},
        logging,
        session::Session,
    },
    crate::{
        config::instance::init_config,
        display::preview::Preview,
        error::Result,
        export::ExportFormat,
        getopt, opt_and,
        palette::PaletteGenerator,
        theme::{Theme, ThemeStore},
        utils::write_to_file,
    },
    clap::Parser,
    rand::rngs::StdRng,
    std::{
        io::{self, IsTerminal, Write},
        path::PathBuf,
    },
    tracing::{info, warn},
};

/// the prompt shown by the editor on a terminal
const PROMPT: &str = "palettecss> ";

/// the palettecss app
pub struct PaletteApp {
    /// what to run
    command: Commands,
}

impl PaletteApp {
    /// initialize palettecss
    ///
    /// - 1. installs the miette error handler hook
    /// - 2. parses the cli arguments
    /// - 3. loads the config files, keeping the defaults if they're invalid
    /// - 4. sets up logging and reports a config that failed to load
    /// - 5. handles the config generation flags, exiting if any were given
    ///
    /// # Errors
    ///
    /// returns an error if the miette hook fails to install
    /// returns an error if it fails to setup logging
    /// returns an error if the config generation flags fail
    pub fn init() -> Result<Self> {
        miette::set_hook(Box::new(|_| {
            Box::new(
                miette::MietteHandlerOpts::new()
                    .terminal_links(true)
                    .unicode(true)
                    .context_lines(3)
                    .tab_width(4)
                    .build(),
            )
        }))?;

        let cli = Cli::parse();
        let config_error = init_config().err();

        opt_and!(logging.enable, logging::setup()?);

        if let Some(e) = config_error {
            warn!("Using the default configuration: {:?}", e);
        }

        if cli.run_generators()? {
            std::process::exit(0);
        }

        info!(
            "Starting {} v{}",
            env!("CARGO_PKG_NAME"),
            env!("CARGO_PKG_VERSION")
        );

        Ok(Self {
            command: cli.command.unwrap_or_default(),
        })
    }

    /// run the chosen command
    ///
    /// # Errors
    ///
    /// returns an error if the command fails
    pub fn run(self) -> Result<()> {
        let args = self.command.theme_args();
        let (store, rng) = Self::build_theme(args)?;

        match &self.command {
            Commands::Edit { theme } => Self::edit(store, rng, theme),
            Commands::Export { format, output, .. } => {
                Self::export(&store, format.unwrap_or(getopt!(export.format)), output.as_ref())
            }
            Commands::Preview { .. } => Self::print(&Self::preview(&store.current()).sample()),
            Commands::Show { .. } => Self::print(&Self::preview(&store.current()).swatches()),
        }
    }

    /// the generator configured by the cli and the config file
    fn generator(args: &ThemeArgs) -> PaletteGenerator {
        PaletteGenerator::new(args.mode.unwrap_or(getopt!(generator.mode)))
    }

    /// build the starting theme and the rng used afterwards
    fn build_theme(args: &ThemeArgs) -> Result<(ThemeStore, StdRng)> {
        let mut rng = make_rng(args.seed.or(getopt!(raw generator.seed)));
        let store = args.build_store(&Self::generator(args), &mut rng)?;

        Ok((store, rng))
    }

    /// whether previews should be colored
    fn colored() -> bool {
        getopt!(display.colored) && io::stdout().is_terminal()
    }

    /// a preview of `theme` with the configured display settings
    fn preview(theme: &Theme) -> Preview<'_> {
        Preview::new(theme)
            .colored(Self::colored())
            .swatch_width(getopt!(display.swatch_width))
    }

    /// write text to stdout
    fn print(text: &str) -> Result<()> {
        let mut stdout = io::stdout().lock();
        stdout.write_all(text.as_bytes())?;
        stdout.flush()?;

        Ok(())
    }

    /// export the theme to stdout or a file
    fn export(store: &ThemeStore, format: ExportFormat, output: Option<&PathBuf>) -> Result<()> {
        let mut text = format.render(&store.current())?;
        if !text.ends_with('\n') {
            text.push('\n');
        }

        match output {
            Some(path) => {
                write_to_file(path, &text)?;
                info!("Exported {} theme to {}", format, path.display());
                Ok(())
            }
            None => Self::print(&text),
        }
    }

    /// run the interactive editor on stdin/stdout
    fn edit(store: ThemeStore, rng: StdRng, args: &ThemeArgs) -> Result<()> {
        let stdin = io::stdin();
        let interactive = stdin.is_terminal();

        let mut session = Session::new(store, rng)
            .generator(Self::generator(args))
            .export_format(getopt!(export.format))
            .colored(Self::colored())
            .swatch_width(getopt!(display.swatch_width));

        if interactive {
            println!("palettecss editor, type `help` for the list of commands");
            session = session.prompt(PROMPT);
        }

        session.run(stdin.lock(), io::stdout().lock())
    }
}
