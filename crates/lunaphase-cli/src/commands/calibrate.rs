use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Args;
use lunaphase_core::batch::{export_all, ExportOptions};
use lunaphase_core::config::CalibrationConfig;
use lunaphase_core::error::LunaError;
use lunaphase_core::io::image_io::save_png;
use lunaphase_core::session::{CalibrationSession, ParamChange, Preview, PreviewObserver};
use tracing::warn;

use super::args::CalibrationArgs;
use super::export::print_export_summary;
use crate::progress::BarReporter;
use crate::summary::{print_measurement, print_settings, print_state, Styles};

#[derive(Args)]
pub struct CalibrateArgs {
    /// Directory of source frames
    pub dir: PathBuf,

    #[command(flatten)]
    pub calibration: CalibrationArgs,

    /// Rewrite this PNG with the annotated preview after every change
    #[arg(long)]
    pub preview: Option<PathBuf>,
}

/// Keeps a PNG on disk in sync with the latest preview, for an auto-reloading viewer.
struct PreviewFile {
    path: PathBuf,
}

impl PreviewObserver for PreviewFile {
    fn on_preview(&self, preview: &Preview) {
        if let Err(e) = save_png(&preview.image, &self.path) {
            warn!(path = %self.path.display(), error = %e, "Failed to write preview");
        }
    }
}

#[derive(Debug, PartialEq)]
enum Command {
    Next,
    Previous,
    Goto(usize),
    Change(ParamChange),
    Show,
    Export { dir: PathBuf, annotate: bool },
    Help,
    Quit,
    Nothing,
}

const HELP: &str = "\
  n | next                 next frame
  p | prev                 previous frame
  g | goto <index>         jump to frame
  t | threshold <0-255>    brightness threshold
  r | radius <px>          mask radius
  o | offset <x> <y>       mask center offset
  c | crop <1-100>         output crop percent
  s | show                 print current parameters
  e | export <dir> [annotate]
  h | help
  q | quit";

pub fn run(args: &CalibrateArgs) -> Result<()> {
    let config = args.calibration.resolve()?;
    print_settings("Lunaphase Calibrate", &config);

    let mut session = CalibrationSession::new(&config)?;
    if let Some(ref path) = args.preview {
        session = session.with_observer(Arc::new(PreviewFile { path: path.clone() }));
    }
    let count = session
        .load_directory(&args.dir)
        .with_context(|| format!("Failed to load {}", args.dir.display()))?;
    println!("  {count} frame(s) loaded. Type 'help' for commands.\n");
    report(session.refresh());

    let stdin = io::stdin();
    prompt()?;
    for line in stdin.lock().lines() {
        let line = line?;
        match parse_command(&line) {
            Ok(Command::Quit) => break,
            Ok(command) => execute(&mut session, &config, command),
            Err(msg) => println!("  {}", Styles::new().bad.apply_to(msg)),
        }
        prompt()?;
    }

    Ok(())
}

fn prompt() -> Result<()> {
    print!("> ");
    io::stdout().flush()?;
    Ok(())
}

fn execute(session: &mut CalibrationSession, config: &CalibrationConfig, command: Command) {
    match command {
        Command::Next => {
            let (index, total) = (session.state().index, session.frame_count());
            let target = (index + 1).min(total.saturating_sub(1));
            report_with_hint(session.next(), |e| skip_hint(e, target, total, true));
        }
        Command::Previous => {
            let (index, total) = (session.state().index, session.frame_count());
            let target = index.saturating_sub(1);
            report_with_hint(session.previous(), |e| skip_hint(e, target, total, false));
        }
        Command::Goto(index) => report(session.set_index(index)),
        Command::Change(change) => report(session.apply(change)),
        Command::Show => print_state(session.state()),
        Command::Export { dir, annotate } => {
            if let Err(e) = export(session, config, &dir, annotate) {
                println!("  {}", Styles::new().bad.apply_to(format!("Export failed: {e:#}")));
            }
        }
        Command::Help => println!("{HELP}"),
        Command::Quit | Command::Nothing => {}
    }
}

/// Export the loaded directory with the parameters currently on screen.
fn export(
    session: &CalibrationSession,
    config: &CalibrationConfig,
    output_dir: &Path,
    annotate: bool,
) -> Result<()> {
    let input = session.directory().ok_or(LunaError::NoDirectoryLoaded)?;
    let options = ExportOptions {
        naming: config.naming,
        annotate,
        ..ExportOptions::for_session(session, output_dir)
    };
    let reporter = BarReporter::new("Exporting")?;
    let summary = export_all(input, &session.frozen_state(), &options, &reporter)?;
    print_export_summary(&summary, &options);
    Ok(())
}

fn report(result: lunaphase_core::error::Result<&Preview>) {
    report_with_hint(result, |_| None);
}

fn report_with_hint(
    result: lunaphase_core::error::Result<&Preview>,
    hint: impl FnOnce(&LunaError) -> Option<String>,
) {
    match result {
        Ok(preview) => print_measurement(&preview.frame, &preview.measurement),
        Err(e) => {
            let styles = Styles::new();
            println!(
                "  {} {}",
                styles.bad.apply_to(e.to_string()),
                styles.label.apply_to("(previous preview kept)")
            );
            if let Some(hint) = hint(&e) {
                println!("  {}", styles.label.apply_to(hint));
            }
        }
    }
}

/// Stepping keeps landing on an unreadable frame, since a failed step leaves
/// the active index where it was. Point at the frame beyond it.
fn skip_hint(error: &LunaError, failed: usize, total: usize, forward: bool) -> Option<String> {
    let unreadable = matches!(
        error,
        LunaError::FrameLoad { .. }
            | LunaError::ImageError(_)
            | LunaError::Io(_)
            | LunaError::InvalidDimensions { .. }
    );
    if !unreadable {
        return None;
    }
    let beyond = if forward {
        failed.checked_add(1).filter(|&i| i < total)
    } else {
        failed.checked_sub(1)
    };
    beyond.map(|i| format!("frame {failed} is unreadable; 'goto {i}' to step over it"))
}

fn parse_command(line: &str) -> std::result::Result<Command, String> {
    let mut parts = line.split_whitespace();
    let Some(word) = parts.next() else {
        return Ok(Command::Nothing);
    };
    let rest: Vec<&str> = parts.collect();

    let int = |i: usize| -> std::result::Result<i64, String> {
        let raw = rest.get(i).ok_or_else(|| format!("'{word}' needs a value"))?;
        raw.parse::<i64>()
            .map_err(|_| format!("'{raw}' is not an integer"))
    };

    let command = match word.to_ascii_lowercase().as_str() {
        "n" | "next" => Command::Next,
        "p" | "prev" | "previous" => Command::Previous,
        "g" | "goto" => {
            let index = int(0)?;
            Command::Goto(usize::try_from(index).map_err(|_| "index must be >= 0".to_string())?)
        }
        "t" | "threshold" => Command::Change(ParamChange::Threshold(int(0)?)),
        "r" | "radius" => Command::Change(ParamChange::Radius(int(0)?)),
        "o" | "offset" => Command::Change(ParamChange::CenterOffset(int(0)?, int(1)?)),
        "c" | "crop" => Command::Change(ParamChange::CropPercent(int(0)?)),
        "s" | "show" => Command::Show,
        "e" | "export" => {
            let dir = rest.first().ok_or("'export' needs an output directory")?;
            Command::Export {
                dir: PathBuf::from(dir),
                annotate: rest.get(1) == Some(&"annotate"),
            }
        }
        "h" | "help" | "?" => Command::Help,
        "q" | "quit" | "exit" => Command::Quit,
        other => return Err(format!("Unknown command '{other}' (try 'help')")),
    };
    Ok(command)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_navigation() {
        assert_eq!(parse_command("n"), Ok(Command::Next));
        assert_eq!(parse_command("  PREV "), Ok(Command::Previous));
        assert_eq!(parse_command("goto 12"), Ok(Command::Goto(12)));
        assert_eq!(parse_command(""), Ok(Command::Nothing));
    }

    #[test]
    fn test_parse_parameter_changes() {
        assert_eq!(
            parse_command("t 140"),
            Ok(Command::Change(ParamChange::Threshold(140)))
        );
        assert_eq!(
            parse_command("offset -3 7"),
            Ok(Command::Change(ParamChange::CenterOffset(-3, 7)))
        );
        assert_eq!(
            parse_command("crop 80"),
            Ok(Command::Change(ParamChange::CropPercent(80)))
        );
    }

    #[test]
    fn test_parse_export() {
        assert_eq!(
            parse_command("export out annotate"),
            Ok(Command::Export {
                dir: PathBuf::from("out"),
                annotate: true
            })
        );
    }

    #[test]
    fn test_skip_hint_points_past_unreadable_frame() {
        let unreadable = || LunaError::Io(io::Error::other("truncated"));

        let forward = skip_hint(&unreadable(), 3, 10, true).unwrap();
        assert!(forward.contains("goto 4"), "got {forward}");
        let backward = skip_hint(&unreadable(), 3, 10, false).unwrap();
        assert!(backward.contains("goto 2"), "got {backward}");
    }

    #[test]
    fn test_skip_hint_only_when_a_frame_lies_beyond() {
        let unreadable = || LunaError::Io(io::Error::other("truncated"));

        assert_eq!(skip_hint(&unreadable(), 9, 10, true), None);
        assert_eq!(skip_hint(&unreadable(), 0, 10, false), None);
        assert_eq!(skip_hint(&LunaError::NoDirectoryLoaded, 3, 10, true), None);
        assert_eq!(
            skip_hint(&LunaError::InvalidParameter("radius".into()), 3, 10, true),
            None
        );
    }

    #[test]
    fn test_parse_errors() {
        assert!(parse_command("radius").is_err());
        assert!(parse_command("radius big").is_err());
        assert!(parse_command("goto -1").is_err());
        assert!(parse_command("offset 1").is_err());
        assert!(parse_command("dance").is_err());
    }
}
