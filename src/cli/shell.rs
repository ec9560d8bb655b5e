use std::{
    env,
    io::{self, BufRead, Write},
};

use crate::cli::io::LineReader;
use crate::cli::output::{apply_color_preference, MessageKind, Styler};
use crate::cli::strings;
use crate::cli::tasks::{run_date_task, run_document_task};
use crate::clock::{Clock, SystemClock};
use crate::config::ConfigManager;
use crate::document::DisplayLocale;
use crate::errors::CliError;

/// Task picked from the start menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskChoice {
    Dates,
    Documents,
    Invalid,
}

impl TaskChoice {
    /// Only the integers 1 and 2 select a task; anything else, numeric or
    /// not, is an invalid choice rather than an error.
    pub fn parse(raw: &str) -> Self {
        match raw.trim().parse::<i32>() {
            Ok(1) => TaskChoice::Dates,
            Ok(2) => TaskChoice::Documents,
            _ => TaskChoice::Invalid,
        }
    }
}

/// One pass through the menu and the selected task.
pub struct Session<R, W, C> {
    input: LineReader<R>,
    output: W,
    clock: C,
    styler: Styler,
    locale: DisplayLocale,
}

impl<R, W, C> Session<R, W, C>
where
    R: BufRead,
    W: Write,
    C: Clock,
{
    pub fn new(input: R, output: W, clock: C) -> Self {
        Self {
            input: LineReader::new(input),
            output,
            clock,
            styler: Styler::plain(),
            locale: DisplayLocale::default(),
        }
    }

    pub fn with_styler(mut self, styler: Styler) -> Self {
        self.styler = styler;
        self
    }

    pub fn with_locale(mut self, locale: DisplayLocale) -> Self {
        self.locale = locale;
        self
    }

    /// Prints the menu, reads the selector and runs the matching task.
    pub fn run(&mut self) -> Result<TaskChoice, CliError> {
        self.print_menu()?;
        let choice = TaskChoice::parse(&self.input.next_line()?);
        tracing::debug!(?choice, "menu selection");

        match choice {
            TaskChoice::Dates => {
                run_date_task(&mut self.input, &mut self.output, &self.styler)?;
            }
            TaskChoice::Documents => {
                let now = self.clock.now();
                run_document_task(&mut self.output, &self.styler, &self.locale, now)?;
            }
            TaskChoice::Invalid => {
                writeln!(
                    self.output,
                    "{}",
                    self.styler.paint(MessageKind::Warning, strings::INVALID_CHOICE)
                )?;
            }
        }
        self.output.flush()?;
        Ok(choice)
    }

    pub fn into_output(self) -> W {
        self.output
    }

    fn print_menu(&mut self) -> Result<(), CliError> {
        let styler = self.styler;
        writeln!(self.output, "{}", styler.paint(MessageKind::Heading, strings::MENU_TITLE))?;
        writeln!(self.output, "{}", strings::MENU_DATES)?;
        writeln!(self.output, "{}", strings::MENU_DOCUMENTS)?;
        Ok(())
    }
}

/// Runs the CLI against the process stdin/stdout with the user's preferences.
pub fn run_cli() -> Result<TaskChoice, CliError> {
    let manager = ConfigManager::from_env();
    let config = manager.load()?;
    crate::init(config.log_filter.as_deref());
    tracing::info!(config = %manager.path().display(), "datebook started");

    let color = config.ui_color_enabled && env::var_os("NO_COLOR").is_none();
    apply_color_preference(color);

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(stdin.lock(), stdout.lock(), SystemClock)
        .with_styler(Styler::new(color))
        .with_locale(config.display);
    session.run()
}
