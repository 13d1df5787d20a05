//! the interactive editing session
use {
    crate::{
        display::preview::Preview,
        error::{PaletteError, Result},
        export::ExportFormat,
        palette::{PaletteGenerator, PaletteMode},
        theme::{Theme, ThemePatch, ThemeStore, Token, TokenGroup},
    },
    rand::Rng,
    std::io::{BufRead, Write},
    tracing::{debug, info},
};

/// the command reference printed by `help`
const HELP: &str = "\
commands:
  shuffle [random|dark|light]  generate a new palette
  set <token> <value>          change one token
  <token>=<value>              same as set
  get <token>                  print one token
  show                         list every token
  preview                      draw a sample card
  export [css|json]            print the theme
  reset                        go back to the defaults
  help                         show this message
  quit | exit                  leave the editor
";

/// one line of editor input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// generate and merge a palette, optionally overriding the mode
    Shuffle(Option<PaletteMode>),
    /// change a single token
    Set(Token, String),
    /// print a single token
    Get(Token),
    /// list every token
    Show,
    /// draw the sample card
    Preview,
    /// print the theme, optionally overriding the format
    Export(Option<ExportFormat>),
    /// go back to the default theme
    Reset,
    /// print the command reference
    Help,
    /// end the session
    Quit,
}

impl Command {
    /// parse one line of input
    ///
    /// blank lines and lines starting with `#` give `Ok(None)`
    pub fn parse(line: &str) -> Result<Option<Self>> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(None);
        }

        let (word, rest) = line
            .split_once(char::is_whitespace)
            .map_or((line, ""), |(w, r)| (w, r.trim()));

        let command = match word.to_lowercase().as_str() {
            "shuffle" => Self::Shuffle(optional(rest)?),
            "set" => {
                let (key, value) = rest
                    .split_once(char::is_whitespace)
                    .map_or((rest, ""), |(k, v)| (k, v.trim()));
                if key.is_empty() {
                    return Err(usage("set <token> <value>"));
                }
                Self::Set(key.parse()?, value.to_string())
            }
            "get" if rest.is_empty() => return Err(usage("get <token>")),
            "get" => Self::Get(rest.parse()?),
            "show" => Self::Show,
            "preview" => Self::Preview,
            "export" => Self::Export(optional(rest)?),
            "reset" => Self::Reset,
            "help" | "?" => Self::Help,
            "quit" | "exit" => Self::Quit,
            _ if line.contains('=') => {
                let (token, value) = ThemePatch::parse_assignment(line)?;
                Self::Set(token, value)
            }
            _ => {
                return Err(PaletteError::InvalidCommand(format!(
                    "unknown command `{}` (run `help` to list the available commands)",
                    word
                )));
            }
        };

        Ok(Some(command))
    }
}

/// parse an optional argument
fn optional<T>(arg: &str) -> Result<Option<T>>
where
    T: std::str::FromStr<Err = PaletteError>,
{
    if arg.is_empty() {
        Ok(None)
    } else {
        arg.parse().map(Some)
    }
}

/// a usage error
fn usage(form: &str) -> PaletteError {
    PaletteError::InvalidCommand(format!("usage: {}", form))
}

/// an editing session over a [`ThemeStore`]
#[derive(Debug)]
pub struct Session<R> {
    /// the theme being edited
    store: ThemeStore,
    /// the generator used by `shuffle`
    generator: PaletteGenerator,
    /// randomness for `shuffle`
    rng: R,
    /// format used by a bare `export`
    export_format: ExportFormat,
    /// whether previews are colored
    colored: bool,
    /// width of swatch blocks
    swatch_width: usize,
    /// printed before reading each line
    prompt: Option<String>,
}

impl<R: Rng> Session<R> {
    /// start a session
    pub fn new(store: ThemeStore, rng: R) -> Self {
        Self {
            store,
            generator: PaletteGenerator::default(),
            rng,
            export_format: ExportFormat::default(),
            colored: true,
            swatch_width: 4,
            prompt: None,
        }
    }

    /// set the generator used by `shuffle`
    pub fn generator(mut self, generator: PaletteGenerator) -> Self {
        self.generator = generator;
        self
    }

    /// set the format used by a bare `export`
    pub fn export_format(mut self, format: ExportFormat) -> Self {
        self.export_format = format;
        self
    }

    /// turn colored previews on or off
    pub fn colored(mut self, colored: bool) -> Self {
        self.colored = colored;
        self
    }

    /// set the width of swatch blocks
    pub fn swatch_width(mut self, width: usize) -> Self {
        self.swatch_width = width;
        self
    }

    /// print `prompt` before every line
    pub fn prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = Some(prompt.into());
        self
    }

    /// the store being edited
    pub fn store(&self) -> &ThemeStore {
        &self.store
    }

    /// end the session, keeping the store
    pub fn into_store(self) -> ThemeStore {
        self.store
    }

    /// a preview of `theme` with the session's display settings
    fn preview<'t>(&self, theme: &'t Theme) -> Preview<'t> {
        Preview::new(theme)
            .colored(self.colored)
            .swatch_width(self.swatch_width)
    }

    /// run one command
    ///
    /// returns `false` once the session should end
    pub fn execute<W: Write>(&mut self, command: Command, out: &mut W) -> Result<bool> {
        debug!(?command, "executing command");

        match command {
            Command::Shuffle(mode) => {
                let generator = mode.map_or(self.generator, PaletteGenerator::new);
                self.store.shuffle(&generator, &mut self.rng);
                writeln!(out, "shuffled colors ({})", generator.mode())?;
            }
            Command::Set(token, value) => {
                let theme = self.store.merge(&ThemePatch::new().with(token, value));
                writeln!(out, "{} = {}", token, theme.get(token))?;
            }
            Command::Get(token) => {
                writeln!(out, "{}", self.store.current().get(token))?;
            }
            Command::Show => {
                let theme = self.store.current();
                write!(out, "{}", self.preview(&theme).swatches())?;
            }
            Command::Preview => {
                let theme = self.store.current();
                write!(out, "{}", self.preview(&theme).sample())?;
            }
            Command::Export(format) => {
                let text = format
                    .unwrap_or(self.export_format)
                    .render(&self.store.current())?;
                out.write_all(text.as_bytes())?;
                if !text.ends_with('\n') {
                    writeln!(out)?;
                }
            }
            Command::Reset => {
                self.store.reset();
                writeln!(out, "theme reset to defaults")?;
            }
            Command::Help => {
                write!(out, "{}", HELP)?;
                writeln!(out, "tokens:")?;
                for group in TokenGroup::ALL {
                    let names: Vec<&str> = group.tokens().map(|t| t.name()).collect();
                    writeln!(out, "  {:<11} {}", group.title(), names.join(", "))?;
                }
            }
            Command::Quit => return Ok(false),
        }

        Ok(true)
    }

    /// read commands until the input ends or `quit` is given
    ///
    /// a failing command is reported on `output` and the session goes on
    ///
    /// # Errors
    ///
    /// returns an error if reading `input` or writing `output` fails
    pub fn run<I: BufRead, W: Write>(&mut self, mut input: I, mut output: W) -> Result<()> {
        info!("Starting editing session");
        let mut line = Vec::new();

        loop {
            if let Some(prompt) = &self.prompt {
                write!(output, "{}", prompt)?;
                output.flush()?;
            }

            line.clear();
            if input.read_until(b'\n', &mut line)? == 0 {
                break;
            }

            let parsed = std::str::from_utf8(&line)
                .map_err(|_| PaletteError::InvalidCommand("line is not valid UTF-8".to_string()))
                .and_then(Command::parse);

            let keep_going = match parsed {
                Ok(None) => true,
                Ok(Some(command)) => match self.execute(command, &mut output) {
                    Ok(keep_going) => keep_going,
                    Err(e) => {
                        writeln!(output, "error: {}", e)?;
                        true
                    }
                },
                Err(e) => {
                    writeln!(output, "error: {}", e)?;
                    true
                }
            };

            if !keep_going {
                break;
            }
        }

        info!(revision = self.store.revision(), "Editing session finished");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use {
        super::*,
        rand::{SeedableRng, rngs::StdRng},
        std::io::Cursor,
    };

    fn session() -> Session<StdRng> {
        Session::new(ThemeStore::new(), StdRng::seed_from_u64(42)).colored(false)
    }

    fn run(session: &mut Session<StdRng>, script: &str) -> String {
        let mut out = Vec::new();
        session.run(Cursor::new(script), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!(Command::parse("   ").unwrap(), None);
        assert_eq!(Command::parse("# a comment").unwrap(), None);
        assert_eq!(
            Command::parse("shuffle dark").unwrap(),
            Some(Command::Shuffle(Some(PaletteMode::Dark)))
        );
        assert_eq!(
            Command::parse("SHUFFLE").unwrap(),
            Some(Command::Shuffle(None))
        );
        assert_eq!(
            Command::parse("set shadowColor rgba(0, 0, 0, 0.5)").unwrap(),
            Some(Command::Set(
                Token::ShadowColor,
                "rgba(0, 0, 0, 0.5)".to_string()
            ))
        );
        assert_eq!(
            Command::parse("bg-primary = #123456").unwrap(),
            Some(Command::Set(Token::BgPrimary, "#123456".to_string()))
        );
        assert_eq!(
            Command::parse("export json").unwrap(),
            Some(Command::Export(Some(ExportFormat::Json)))
        );
        assert_eq!(Command::parse("exit").unwrap(), Some(Command::Quit));
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(
            Command::parse("paint it black"),
            Err(PaletteError::InvalidCommand(_))
        ));
        assert!(matches!(
            Command::parse("get fgPrimary"),
            Err(PaletteError::UnknownToken(_))
        ));
        assert!(matches!(
            Command::parse("shuffle dim"),
            Err(PaletteError::UnknownVariant { .. })
        ));
        assert_eq!(
            Command::parse("get").unwrap_err().to_string(),
            "usage: get <token>"
        );
    }

    #[test]
    fn test_set_and_get() {
        let mut session = session();
        let out = run(&mut session, "set textPrimary #111111\nmargin=3\nget margin\n");

        assert_eq!(out, "textPrimary = #111111\nmargin = 3\n3\n");

        let theme = session.store().current();
        let mut expected = Theme::default();
        expected.set(Token::TextPrimary, "#111111");
        expected.set(Token::Margin, "3");
        assert_eq!(*theme, expected);
        assert_eq!(session.store().revision(), 2);
    }

    #[test]
    fn test_errors_do_not_end_the_session() {
        let mut session = session();
        let out = run(&mut session, "get nope\nget info\n");

        assert_eq!(
            out,
            "error: unknown token `nope` (run `help` to list the available tokens)\n#4299E1\n"
        );
    }

    #[test]
    fn test_invalid_utf8_line_is_reported() {
        let mut session = session();
        let mut out = Vec::new();
        session
            .run(Cursor::new(b"set margin \xff\xfe\nget margin\n".to_vec()), &mut out)
            .unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "error: line is not valid UTF-8\n1\n"
        );
        assert_eq!(session.store().revision(), 0);
    }

    #[test]
    fn test_quit_stops_reading() {
        let mut session = session();
        let out = run(&mut session, "margin=2\nquit\nmargin=5\n");

        assert_eq!(out, "margin = 2\n");
        assert_eq!(session.store().current().margin, "2");
    }

    #[test]
    fn test_shuffle_dark_then_reset() {
        let mut session = session();
        let out = run(&mut session, "shuffle dark\nget bgPrimary\nreset\nget bgPrimary\n");

        assert_eq!(
            out,
            "shuffled colors (dark)\n#1a1a1a\ntheme reset to defaults\n#FFFFFF\n"
        );
    }

    #[test]
    fn test_export_formats() {
        let mut session = session().export_format(ExportFormat::Json);
        let out = run(&mut session, "export\nexport css\n");

        let theme = Theme::default();
        assert_eq!(
            out,
            format!("{}\n{}", theme.to_json().unwrap(), theme.to_css_vars())
        );
    }

    #[test]
    fn test_show_preview_and_help() {
        let mut session = session();
        let out = run(&mut session, "show\npreview\nhelp\n");

        assert!(out.contains("Text Primary"));
        assert!(out.contains("Color Theme Preview"));
        assert!(out.contains("shuffle [random|dark|light]"));
        assert!(out.contains("borderRadius, margin, padding"));
        assert!(!out.contains("error:"));
    }

    #[test]
    fn test_prompt_is_printed() {
        let mut session = session().prompt("> ");
        let out = run(&mut session, "get margin\n");

        assert_eq!(out, "> 1\n> ");
    }
}
