//! theme-export - CLI tool to export Material You palettes as Compose themes.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use dynamic_theme_export::clipboard::{ClipboardSink, MemoryClipboard, SystemClipboard};
use dynamic_theme_export::parser::to_palette_document;
use dynamic_theme_export::{
    generate_theme, load_palette, render_preview, swatch_copy_text, validate_palette_pair,
    ColorFormat, ColorRole, ExportError, ExportOptions, ExportTarget, Mode, PalettePair,
    PreviewStyle, Session, SurfaceKind, UiState,
};

/// Export Material You dynamic color palettes as Jetpack Compose color schemes.
#[derive(Parser, Debug)]
#[command(name = "theme-export")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate the theme file for both color schemes
    Export {
        #[command(flatten)]
        palette: PaletteArg,

        /// Color literal format: float, srgb, hex, int
        #[arg(short, long, default_value = "srgb", value_parser = parse_format)]
        format: ColorFormat,

        /// Derived surfaces appended as comments
        #[arg(short, long, value_enum, default_value_t = Surfaces::Levels)]
        surfaces: Surfaces,

        /// Theme file kind
        #[arg(short, long, value_enum, default_value_t = Target::Compose)]
        target: Target,

        /// Output file path (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Also copy the theme file to the clipboard
        #[arg(long)]
        copy: bool,
    },

    /// Print the color roles of one scheme
    Preview {
        #[command(flatten)]
        palette: PaletteArg,

        /// Show the dark scheme
        #[arg(long)]
        dark: bool,

        /// Paint color swatches (truecolor terminals)
        #[arg(long)]
        swatches: bool,
    },

    /// Copy one role and its content color as hex
    CopyRole {
        /// Role name, e.g. primaryContainer
        role: ColorRole,

        #[command(flatten)]
        palette: PaletteArg,

        /// Use the dark scheme
        #[arg(long)]
        dark: bool,

        /// Print only, don't touch the clipboard
        #[arg(long)]
        no_clipboard: bool,
    },

    /// Validate a palette document
    Validate {
        #[command(flatten)]
        palette: PaletteArg,
    },

    /// Print the palette pair as a JSON document
    Dump {
        #[command(flatten)]
        palette: PaletteArg,
    },

    /// Interactive session reading commands from stdin
    Session {
        #[command(flatten)]
        palette: PaletteArg,

        /// Start in dark mode
        #[arg(long)]
        dark: bool,

        /// Saved state file, restored at start and written on exit
        #[arg(long)]
        state: Option<PathBuf>,
    },
}

#[derive(Args, Debug)]
struct PaletteArg {
    /// Palette document (JSON); the baseline scheme is used when omitted
    #[arg(short, long)]
    palette: Option<PathBuf>,
}

fn parse_format(value: &str) -> std::result::Result<ColorFormat, String> {
    ColorFormat::from_alias(value).map_err(|err| err.to_string())
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Surfaces {
    /// surfaceLevel1..5
    Levels,
    /// tintedSurfaceContainer*
    Tinted,
    #[value(name = "none")]
    Omit,
}

impl Surfaces {
    fn kind(self) -> Option<SurfaceKind> {
        match self {
            Surfaces::Levels => Some(SurfaceKind::ElevatedLevels),
            Surfaces::Tinted => Some(SurfaceKind::TintedContainers),
            Surfaces::Omit => None,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Target {
    Compose,
    /// Not implemented yet
    Views,
}

impl From<Target> for ExportTarget {
    fn from(target: Target) -> Self {
        match target {
            Target::Compose => ExportTarget::Compose,
            Target::Views => ExportTarget::Views,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize logging, on stderr so stdout only carries output
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{:#}", err);
            let code = err
                .downcast_ref::<ExportError>()
                .map_or(1, ExportError::code_value);
            ExitCode::from(code as u8)
        }
    }
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::Export {
            palette,
            format,
            surfaces,
            target,
            output,
            copy,
        } => {
            let pair = load(&palette)?;
            report_validation(&pair);

            let options = ExportOptions::new(format)
                .with_surfaces(surfaces.kind())
                .with_target(target.into());
            let theme = generate_theme(&pair, &options)?;

            match &output {
                Some(path) => {
                    std::fs::write(path, &theme)
                        .with_context(|| format!("Failed to write {}", path.display()))?;
                    info!("Generated: {}", path.display());
                }
                None => print!("{}", theme),
            }

            if copy {
                SystemClipboard::new()?.set_text(&theme)?;
                info!("Copied theme to the clipboard");
            }
        }

        Command::Preview {
            palette,
            dark,
            swatches,
        } => {
            let pair = load(&palette)?;
            let style = PreviewStyle { swatches };
            print!("{}", render_preview(&pair, Mode::from_dark(dark), &style));
        }

        Command::CopyRole {
            role,
            palette,
            dark,
            no_clipboard,
        } => {
            let pair = load(&palette)?;
            let text = swatch_copy_text(pair.get(Mode::from_dark(dark)), role);
            print!("{}", text);
            if !no_clipboard {
                SystemClipboard::new()?.set_text(&text)?;
            }
        }

        Command::Validate { palette } => {
            let pair = load(&palette)?;
            if !report_validation(&pair) {
                anyhow::bail!("Validation failed");
            }
            info!("Validation passed");
        }

        Command::Dump { palette } => {
            let pair = load(&palette)?;
            println!("{}", to_palette_document(&pair)?);
        }

        Command::Session {
            palette,
            dark,
            state,
        } => {
            let pair = load(&palette)?;
            let ui_state = match state.as_deref() {
                Some(path) => UiState::load_or_default(path, dark),
                None => UiState::new(dark),
            };

            let session_state = match SystemClipboard::new() {
                Ok(clipboard) => run_session(pair, ui_state, clipboard)?,
                Err(err) => {
                    warn!("{}, copies stay in memory", err);
                    run_session(pair, ui_state, MemoryClipboard::default())?
                }
            };

            if let Some(path) = &state {
                session_state
                    .save()
                    .write_to(path)
                    .with_context(|| format!("Failed to write {}", path.display()))?;
            }
        }
    }

    Ok(())
}

fn load(palette: &PaletteArg) -> Result<PalettePair> {
    let pair = load_palette(palette.palette.as_deref()).with_context(|| match &palette.palette {
        Some(path) => format!("Failed to load {}", path.display()),
        None => "Failed to load the baseline scheme".to_string(),
    })?;
    Ok(pair)
}

/// Log validation findings, returning whether the palette passed.
fn report_validation(pair: &PalettePair) -> bool {
    let validation = validate_palette_pair(pair);

    for warning in &validation.warnings {
        warn!("{}", warning);
    }

    for err in &validation.errors {
        error!("{}", err);
    }

    validation.passed
}

fn run_session<C: ClipboardSink>(
    pair: PalettePair,
    state: UiState,
    clipboard: C,
) -> Result<UiState> {
    let mut session = Session::new(pair, state, clipboard)?;
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    session.run(stdin.lock(), &mut stdout)?;
    stdout.flush()?;
    Ok(*session.state())
}
