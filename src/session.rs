//! Interactive session: UI state, background export and sinks.
//!
//! A session plays the part of the application screen. It owns the palette
//! pair, the selection state and the export worker, and reacts to one
//! command per input line.

use crate::clipboard::ClipboardSink;
use crate::config::{ExportOptions, EXPORT_TIMEOUT_SECS};
use crate::error::{ExportError, Result};
use crate::generator::{render_preview, swatch_copy_text, ColorFormat, PreviewStyle};
use crate::model::{ColorRole, Mode, PalettePair, SurfaceKind};
use crate::state::{SavedState, Screen, UiState};
use crate::worker::{ExportWorker, RequestId};
use std::io::{BufRead, Write};
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};

const HELP: &str = "\
commands:
  format <name>          select float | srgb | hex | int (or a format key)
  mode light|dark        select the previewed palette
  toggle                 switch between light and dark
  screen preview|export  select the screen shown by `show`
  show                   print the current screen
  copy                   copy the exported theme to the clipboard
  copy-role <role>       copy one swatch and its content color
  share <path>           write the exported theme to a file
  save <path>            save the selection state
  restore <path>         restore a saved selection state
  state                  print the selection state
  help                   print this help
  quit                   leave the session";

/// One session command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Format(ColorFormat),
    Mode(Mode),
    Toggle,
    Screen(Screen),
    Show,
    Copy,
    CopyRole(ColorRole),
    Share(PathBuf),
    Save(PathBuf),
    Restore(PathBuf),
    State,
    Help,
    Quit,
}

impl FromStr for Command {
    type Err = ExportError;

    fn from_str(line: &str) -> Result<Self> {
        let unknown = || ExportError::UnknownCommand {
            command: line.trim().to_string(),
        };
        // The argument is the rest of the line, so paths may contain spaces
        let mut parts = line.trim().splitn(2, char::is_whitespace);
        let name = parts.next().filter(|name| !name.is_empty()).ok_or_else(unknown)?;
        let argument = parts.next().map(str::trim).filter(|arg| !arg.is_empty());

        let command = match (name, argument) {
            ("format", Some(value)) => Command::Format(ColorFormat::from_alias(value)?),
            ("mode", Some("light")) => Command::Mode(Mode::Light),
            ("mode", Some("dark")) => Command::Mode(Mode::Dark),
            ("toggle", None) => Command::Toggle,
            ("screen", Some("preview")) => Command::Screen(Screen::Preview),
            ("screen", Some("export")) => Command::Screen(Screen::Export),
            ("show", None) => Command::Show,
            ("copy", None) => Command::Copy,
            ("copy-role", Some(role)) => Command::CopyRole(role.parse()?),
            ("share", Some(path)) => Command::Share(PathBuf::from(path)),
            ("save", Some(path)) => Command::Save(PathBuf::from(path)),
            ("restore", Some(path)) => Command::Restore(PathBuf::from(path)),
            ("state", None) => Command::State,
            ("help", None) => Command::Help,
            ("quit", None) | ("exit", None) => Command::Quit,
            _ => return Err(unknown()),
        };
        Ok(command)
    }
}

/// Whether the session keeps reading commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// An interactive export session.
pub struct Session<C: ClipboardSink> {
    pair: Arc<PalettePair>,
    state: UiState,
    surfaces: Option<SurfaceKind>,
    preview_style: PreviewStyle,
    clipboard: C,
    worker: ExportWorker,
    /// Newest export text received from the worker.
    export: Option<(RequestId, String)>,
}

impl<C: ClipboardSink> Session<C> {
    /// Start a session and queue the first export.
    pub fn new(pair: PalettePair, state: UiState, clipboard: C) -> Result<Self> {
        let session = Self {
            pair: Arc::new(pair),
            state,
            surfaces: Some(SurfaceKind::ElevatedLevels),
            preview_style: PreviewStyle::default(),
            clipboard,
            worker: ExportWorker::new()?,
            export: None,
        };
        session.request_export()?;
        Ok(session)
    }

    /// Replace the derived surface block of exports.
    pub fn with_surfaces(mut self, surfaces: Option<SurfaceKind>) -> Result<Self> {
        self.surfaces = surfaces;
        self.request_export()?;
        Ok(self)
    }

    pub fn with_preview_style(mut self, style: PreviewStyle) -> Self {
        self.preview_style = style;
        self
    }

    pub fn state(&self) -> &UiState {
        &self.state
    }

    pub fn clipboard(&self) -> &C {
        &self.clipboard
    }

    fn options(&self) -> ExportOptions {
        ExportOptions::new(self.state.format).with_surfaces(self.surfaces)
    }

    fn request_export(&self) -> Result<RequestId> {
        self.worker.request(Arc::clone(&self.pair), self.options())
    }

    /// Export text for the current selection, waiting for the worker if needed.
    pub fn export_text(&mut self) -> Result<String> {
        if let Some(outcome) = self.worker.poll() {
            self.export = Some((outcome.id, outcome.result?));
        }

        let latest = self.worker.latest_id();
        if let Some((id, text)) = &self.export {
            if *id == latest {
                return Ok(text.clone());
            }
        }

        let timeout = Duration::from_secs(EXPORT_TIMEOUT_SECS);
        match self.worker.wait_latest(timeout)? {
            Some(outcome) => {
                let text = outcome.result?;
                self.export = Some((outcome.id, text.clone()));
                Ok(text)
            }
            None => Err(ExportError::ExportTimeout {
                seconds: EXPORT_TIMEOUT_SECS,
            }),
        }
    }

    /// Apply one command, writing user-facing output to `out`.
    pub fn execute(&mut self, command: Command, out: &mut impl Write) -> Result<Flow> {
        debug!(?command, "executing");
        match command {
            Command::Format(format) => {
                self.state.format = format;
                self.request_export()?;
                writeln!(out, "format: {}", format)?;
            }
            Command::Mode(mode) => {
                self.state.dark = mode.is_dark();
                writeln!(out, "mode: {}", mode)?;
            }
            Command::Toggle => {
                self.state.dark = self.state.mode().toggled().is_dark();
                writeln!(out, "mode: {}", self.state.mode())?;
            }
            Command::Screen(screen) => {
                self.state.screen = screen;
                writeln!(out, "screen: {}", screen.label())?;
            }
            Command::Show => match self.state.screen {
                Screen::Preview => {
                    let table = render_preview(&self.pair, self.state.mode(), &self.preview_style);
                    write!(out, "{}", table)?;
                }
                Screen::Export => {
                    let text = self.export_text()?;
                    write!(out, "{}", text)?;
                }
            },
            Command::Copy => {
                let text = self.export_text()?;
                self.clipboard.set_text(&text)?;
                writeln!(out, "copied {} lines", text.lines().count())?;
            }
            Command::CopyRole(role) => {
                let text = swatch_copy_text(self.pair.get(self.state.mode()), role);
                self.clipboard.set_text(&text)?;
                write!(out, "{}", text)?;
            }
            Command::Share(path) => {
                let text = self.export_text()?;
                std::fs::write(&path, text)?;
                writeln!(out, "shared to {}", path.display())?;
            }
            Command::Save(path) => {
                self.state.save().write_to(&path)?;
                writeln!(out, "saved state to {}", path.display())?;
            }
            Command::Restore(path) => {
                let saved = SavedState::read_from(&path)?;
                if let Err(err) = UiState::restore(&saved) {
                    writeln!(out, "restore failed ({}), using defaults", err)?;
                }
                self.state = UiState::restore_or_default(&saved, self.state.dark);
                self.request_export()?;
                self.write_state(out)?;
            }
            Command::State => self.write_state(out)?,
            Command::Help => writeln!(out, "{}", HELP)?,
            Command::Quit => return Ok(Flow::Quit),
        }
        Ok(Flow::Continue)
    }

    fn write_state(&self, out: &mut impl Write) -> Result<()> {
        writeln!(
            out,
            "format={} screen={} mode={}",
            self.state.format,
            self.state.screen.label(),
            self.state.mode()
        )?;
        Ok(())
    }

    /// Read commands line by line until `quit` or end of input.
    ///
    /// Command failures are reported on `out` and do not end the session.
    pub fn run(&mut self, input: impl BufRead, mut out: impl Write) -> Result<()> {
        info!("Session started, type `help` for commands");
        for line in input.lines() {
            let line = line?;
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let outcome = line
                .parse::<Command>()
                .and_then(|command| self.execute(command, &mut out));
            match outcome {
                Ok(Flow::Quit) => break,
                Ok(Flow::Continue) => {}
                Err(err) => {
                    warn!("{}", err);
                    writeln!(out, "error: {}", err)?;
                }
            }
            out.flush()?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clipboard::MemoryClipboard;
    use crate::generator::assemble;
    use crate::model::baseline_pair;
    use pretty_assertions::assert_eq;

    fn session() -> Session<MemoryClipboard> {
        Session::new(baseline_pair(), UiState::new(false), MemoryClipboard::default()).unwrap()
    }

    fn run(session: &mut Session<MemoryClipboard>, script: &str) -> String {
        let mut out = Vec::new();
        session.run(script.as_bytes(), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!(
            "format hex".parse::<Command>().unwrap(),
            Command::Format(ColorFormat::IntegerComponentsHex)
        );
        assert_eq!(
            "copy-role surfaceDim".parse::<Command>().unwrap(),
            Command::CopyRole(ColorRole::SurfaceDim)
        );
        assert_eq!("exit".parse::<Command>().unwrap(), Command::Quit);
        assert!(matches!(
            "mode sepia".parse::<Command>(),
            Err(ExportError::UnknownCommand { .. })
        ));
        assert!(matches!(
            "format hsl".parse::<Command>(),
            Err(ExportError::UnknownColorFormat { .. })
        ));
        assert!("show now".parse::<Command>().is_err());
        assert!("copy-role primary onPrimary".parse::<Command>().is_err());
        assert!("   ".parse::<Command>().is_err());
    }

    #[test]
    fn test_path_arguments_keep_spaces() {
        assert_eq!(
            "share  My Themes/Theme.kt ".parse::<Command>().unwrap(),
            Command::Share(PathBuf::from("My Themes/Theme.kt"))
        );
        assert_eq!(
            "restore saved state.json".parse::<Command>().unwrap(),
            Command::Restore(PathBuf::from("saved state.json"))
        );
        assert!(matches!(
            "save".parse::<Command>(),
            Err(ExportError::UnknownCommand { .. })
        ));
    }

    #[test]
    fn test_save_to_path_with_spaces() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("saved state.json");
        let mut session = session();
        run(&mut session, &format!("format hex
save {}
", path.display()));

        let saved = SavedState::read_from(&path).unwrap();
        assert_eq!(saved.get("colorFormat"), Some("IntegerComponentsHex"));
    }

    #[test]
    fn test_export_follows_format_changes() {
        let mut session = session();
        run(&mut session, "format float\nformat int\n");
        assert_eq!(
            session.export_text().unwrap(),
            assemble(&baseline_pair(), ColorFormat::IntegerComponents)
        );
    }

    #[test]
    fn test_show_export_screen() {
        let mut session = session();
        let output = run(&mut session, "screen export\nformat hex\nshow\n");
        assert!(output.contains("val light = lightColorScheme(\n"));
        assert!(output.contains("    primary = Color(red = 0x67, green = 0x50, blue = 0xA4),\n"));
    }

    #[test]
    fn test_show_preview_uses_mode() {
        let mut session = session();
        let output = run(&mut session, "toggle\nshow\n");
        assert!(output.contains("mode: dark"));
        assert!(output.contains("Color roles (dark)"));
    }

    #[test]
    fn test_copy_and_copy_role() {
        let mut session = session();
        run(&mut session, "copy\n");
        assert_eq!(
            session.clipboard().content.as_deref(),
            Some(assemble(&baseline_pair(), ColorFormat::SrgbInteger).as_str())
        );

        run(&mut session, "mode dark\ncopy-role primary\n");
        assert_eq!(
            session.clipboard().content.as_deref(),
            Some("Primary: #D0BCFF\nOn Primary: #381E72\n")
        );
    }

    #[test]
    fn test_errors_do_not_end_session() {
        let mut session = session();
        let output = run(&mut session, "frobnicate\nformat hsl\nstate\n");
        assert!(output.contains("error: Unknown command: frobnicate"));
        assert!(output.contains("error: Unknown ColorFormat type 'hsl'"));
        assert!(output.contains("format=SRGBInteger screen=Preview mode=light"));
    }

    #[test]
    fn test_save_and_restore() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.json");
        let script = format!(
            "format float\nscreen export\ntoggle\nsave {0}\nformat int\nrestore {0}\n",
            path.display()
        );

        let mut session = session();
        let output = run(&mut session, &script);
        assert!(output.ends_with("format=FloatComponents screen=Export mode=dark\n"));
        assert_eq!(session.state().format, ColorFormat::FloatComponents);
    }

    #[test]
    fn test_restore_unknown_format_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.json");
        let mut saved = UiState::new(true).save();
        saved.insert("colorFormat", "Oklch");
        saved.write_to(&path).unwrap();

        let mut session = session();
        let output = run(&mut session, &format!("format hex\nrestore {}\n", path.display()));
        assert!(output.contains("restore failed (Unknown ColorFormat type 'Oklch')"));
        assert_eq!(*session.state(), UiState::new(false));
    }

    #[test]
    fn test_share_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Theme.kt");
        let mut session = session();
        run(&mut session, &format!("share {}\nquit\nshow\n", path.display()));
        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            assemble(&baseline_pair(), ColorFormat::SrgbInteger)
        );
    }
}
