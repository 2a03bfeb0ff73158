//! Diary entrypoint.
//!
//! Replays a keystroke script (or loads a saved entry) into a fresh
//! `LineBuffer` and prints either the faded view a renderer would draw or the
//! `full_text` blob a submission collaborator would send.
use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use core_actions::{Action, Typist, dispatch};
use core_config::load_from;
use core_state::{DiaryView, LineBuffer, normalize_line_endings};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};
use std::sync::Once;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

mod render;

/// CLI arguments.
#[derive(Parser, Debug)]
#[command(name = "diary", version, about = "Typewriter-style diary line buffer")]
struct Args {
    /// Optional configuration file path (overrides discovery of `diary.toml`).
    #[arg(long = "config", global = true)]
    config: Option<PathBuf>,
    /// Write logs to this file instead of stderr.
    #[arg(long = "log-file", global = true)]
    log_file: Option<PathBuf>,
    /// What to print once the buffer is built.
    #[arg(long, value_enum, default_value_t = OutputFormat::View, global = true)]
    output: OutputFormat,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Replay keystrokes from SCRIPT (stdin when omitted). DEL / BS delete.
    Type {
        script: Option<PathBuf>,
        /// Load a saved entry before typing.
        #[arg(long)]
        from: Option<PathBuf>,
    },
    /// Load a saved entry.
    Load { path: PathBuf },
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum OutputFormat {
    /// Visible committed lines with opacity, then the active line.
    View,
    /// Committed lines and the active line joined by newlines.
    Full,
}

fn configure_logging(log_file: Option<&Path>) -> Result<Option<WorkerGuard>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let Some(path) = log_file else {
        // Global subscriber may already be installed; keep going without one.
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init();
        return Ok(None);
    };

    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or(Path::new("."));
    let name = path
        .file_name()
        .with_context(|| format!("log file path has no file name: {}", path.display()))?;
    let file_appender = tracing_appender::rolling::never(dir, name);
    let (nb_writer, guard) = tracing_appender::non_blocking(file_appender);
    match tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(nb_writer)
        .try_init()
    {
        Ok(()) => Ok(Some(guard)),
        // Subscriber already installed; drop guard so the writer shuts down.
        Err(_err) => Ok(None),
    }
}

fn install_panic_hook() {
    static HOOK: Once = Once::new();
    HOOK.call_once(|| {
        let default_panic = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            tracing::error!(target: "runtime.panic", ?info, "panic");
            default_panic(info);
        }));
    });
}

fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
        None => {
            let mut s = String::new();
            std::io::stdin()
                .read_to_string(&mut s)
                .context("failed to read stdin")?;
            Ok(s)
        }
    }
}

fn load_entry(buffer: &mut LineBuffer, path: &Path) -> Result<()> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read entry {}", path.display()))?;
    let norm = normalize_line_endings(&content);
    if norm.mixed {
        warn!(target: "io", file = %path.display(), "mixed_line_endings_detected");
    }
    tracing::debug!(
        target: "io",
        file = %path.display(),
        size_bytes = content.len(),
        line_ending = ?norm.original,
        "entry_read_ok"
    );
    dispatch(Action::Load(norm.normalized), buffer);
    Ok(())
}

fn run(args: Args) -> Result<String> {
    let config = load_from(args.config.clone())?;
    let mut buffer = LineBuffer::from_settings(config.wrap_settings());
    let fade = config.fade_table();

    match &args.command {
        Command::Type { script, from } => {
            if let Some(from) = from {
                load_entry(&mut buffer, from)?;
            }
            let keys = read_input(script.as_deref())?;
            let mut typist = Typist::new(&mut buffer);
            typist.type_str(&keys);
            let stats = typist.finish();
            info!(
                target: "runtime",
                keystrokes = stats.keystrokes,
                wraps = stats.wraps,
                merges = stats.merges,
                "replay_complete"
            );
        }
        Command::Load { path } => load_entry(&mut buffer, path)?,
    }

    Ok(match args.output {
        OutputFormat::View => render::view_text(&DiaryView::capture(&buffer, &fade)),
        OutputFormat::Full => buffer.full_text(),
    })
}

fn main() -> Result<()> {
    let args = Args::parse();
    let _log_guard = configure_logging(args.log_file.as_deref())?;
    install_panic_hook();
    info!(target: "runtime", config_override = args.config.is_some(), "startup");

    let out = run(args)?;
    let mut stdout = std::io::stdout().lock();
    stdout.write_all(out.as_bytes())?;
    if !out.ends_with('\n') {
        stdout.write_all(b"\n")?;
    }
    stdout.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_definition_is_valid() {
        use clap::CommandFactory;
        Args::command().debug_assert();
    }

    #[test]
    fn output_flag_parses_after_subcommand() {
        let args = Args::try_parse_from(["diary", "load", "entry.txt", "--output", "full"]).unwrap();
        assert_eq!(args.output, OutputFormat::Full);
        assert!(matches!(args.command, Command::Load { .. }));
    }

    #[test]
    fn type_accepts_from_and_script() {
        let args = Args::try_parse_from(["diary", "type", "--from", "old.txt", "keys.txt"]).unwrap();
        match args.command {
            Command::Type { script, from } => {
                assert_eq!(script, Some(PathBuf::from("keys.txt")));
                assert_eq!(from, Some(PathBuf::from("old.txt")));
            }
            other => panic!("unexpected: {other:?}"),
        }
    }
}
