//! Scripted driver for the placemark engine.
//!
//! ```text
//! pickmark                    # default scene
//! pickmark options.toml       # options file
//! pickmark presets/ busy      # preset `busy` from a preset directory
//! pickmark schema             # write the options JSON schema to stdout
//! ```
//!
//! Reads one command per stdin line (`click X Y`, `hover X Y`, `tap X Y`,
//! `clear [click|hover]`, `close`, `resize L T W H`, `layers`,
//! `layer N [on|off]`) and logs the resulting highlight and panel state.
//! Set `RUST_LOG=info` to see the output.

use std::io::{BufRead, Write};
use std::path::Path;

use pickmark::engine::{EngineCommand, PlacemarkEngine};
use pickmark::error::PickmarkError;
use pickmark::options::Options;

/// Resolve the options named by the command-line arguments.
fn load_options(args: &[String]) -> Result<Options, PickmarkError> {
    match args {
        [] => Ok(Options::default()),
        [path] => Options::load(Path::new(path)),
        [dir, preset] => Options::load_preset(Path::new(dir), preset),
        _ => Err(PickmarkError::Command(
            "usage: pickmark [OPTIONS.toml | PRESET_DIR PRESET | schema]"
                .to_owned(),
        )),
    }
}

/// Write the options JSON schema for settings UIs.
fn write_schema() -> Result<(), PickmarkError> {
    let schema = serde_json::to_string_pretty(&Options::json_schema())
        .map_err(|e| PickmarkError::OptionsParse(e.to_string()))?;
    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{schema}")?;
    Ok(())
}

/// Feed one script line to the engine and log what changed.
fn run_line(engine: &mut PlacemarkEngine, number: usize, line: &str) {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return;
    }

    let command = match line.parse::<EngineCommand>() {
        Ok(command) => command,
        Err(e) => {
            log::warn!("line {number}: {e}; skipped");
            return;
        }
    };

    let redraw = engine.execute(command);
    let highlighted = engine
        .scene()
        .highlighted_ids()
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>();
    log::info!(
        "line {number}: {line} -> redraw={redraw} highlighted=[{}]",
        highlighted.join(", ")
    );
    if engine.panel().is_visible() {
        log::info!("info panel: {}", engine.panel().caption());
    }
}

fn main() {
    env_logger::init();

    let args = std::env::args().skip(1).collect::<Vec<_>>();
    if matches!(args.as_slice(), [cmd] if cmd == "schema") {
        if let Err(e) = write_schema() {
            log::error!("{e}");
            std::process::exit(1);
        }
        return;
    }

    let options = match load_options(&args) {
        Ok(options) => options,
        Err(e) => {
            log::error!("{e}");
            std::process::exit(1);
        }
    };

    let mut engine = PlacemarkEngine::new(options);

    for (index, line) in std::io::stdin().lock().lines().enumerate() {
        match line {
            Ok(line) => run_line(&mut engine, index + 1, &line),
            Err(e) => {
                log::error!("failed to read input: {e}");
                std::process::exit(1);
            }
        }
    }

    let _ = engine.reset();
    log::info!("{} redraw(s) requested", engine.redraw_count());
}
