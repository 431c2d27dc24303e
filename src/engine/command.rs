//! The engine's interactive vocabulary.
//!
//! Every operation a driver can ask for is an [`EngineCommand`]. Commands
//! also parse from the one-line text form the command-line driver reads:
//!
//! ```text
//! click 120 80
//! hover 300.5 42
//! tap 10 10
//! clear            # every stream
//! clear hover      # one stream
//! close            # hide the info panel
//! resize 0 0 800 400
//! layers           # log the layer list
//! layer 7 off      # hide layer 7 (`on` shows it, no argument toggles)
//! ```

use std::str::FromStr;

use super::PlacemarkEngine;
use crate::error::PickmarkError;
use crate::input::{CanvasRect, InputEvent, InputKind, PickStream};
use crate::scene::LayerId;

/// A discrete operation the engine can perform.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EngineCommand {
    /// Feed a pointer or touch event.
    Input(InputEvent),
    /// Clear one stream's highlights.
    ClearStream(PickStream),
    /// Clear every stream and hide the panel.
    ClearAll,
    /// Hide the info panel.
    ClosePanel,
    /// Move or resize the canvas.
    Resize(CanvasRect),
    /// Log every layer with its visibility.
    ListLayers,
    /// Show or hide a layer.
    SetLayerEnabled(LayerId, bool),
    /// Flip a layer's visibility.
    ToggleLayer(LayerId),
}

impl PlacemarkEngine {
    /// Run one command. Returns `true` if a redraw was requested.
    pub fn execute(&mut self, command: EngineCommand) -> bool {
        match command {
            EngineCommand::Input(event) => self.handle_input(event),
            EngineCommand::ClearStream(stream) => self.clear_stream(stream),
            EngineCommand::ClearAll => self.reset(),
            EngineCommand::ClosePanel => {
                self.panel.close();
                false
            }
            EngineCommand::Resize(canvas) => {
                self.resize(canvas);
                true
            }
            EngineCommand::ListLayers => {
                for entry in self.layer_list() {
                    log::info!(
                        "{:>2} [{}] {}",
                        entry.id.0,
                        if entry.enabled { "x" } else { " " },
                        entry.name
                    );
                }
                false
            }
            EngineCommand::SetLayerEnabled(id, enabled) => {
                self.set_layer_enabled(id, enabled)
            }
            EngineCommand::ToggleLayer(id) => self.toggle_layer(id),
        }
    }
}

impl FromStr for EngineCommand {
    type Err = PickmarkError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let Some(verb) = words.next() else {
            return Err(PickmarkError::Command("empty command".to_owned()));
        };
        let args = words.collect::<Vec<_>>();

        match (verb, args.as_slice()) {
            ("click", _) => pointer(InputKind::Click, &args),
            ("hover", _) => pointer(InputKind::Hover, &args),
            ("tap", _) => pointer(InputKind::Tap, &args),
            ("clear", []) => Ok(Self::ClearAll),
            ("clear", ["click"]) => Ok(Self::ClearStream(PickStream::Click)),
            ("clear", ["hover"]) => Ok(Self::ClearStream(PickStream::Hover)),
            ("close", []) => Ok(Self::ClosePanel),
            ("layers", []) => Ok(Self::ListLayers),
            ("layer", [index]) => Ok(Self::ToggleLayer(layer_id(index)?)),
            ("layer", [index, "on"]) => {
                Ok(Self::SetLayerEnabled(layer_id(index)?, true))
            }
            ("layer", [index, "off"]) => {
                Ok(Self::SetLayerEnabled(layer_id(index)?, false))
            }
            ("resize", _) => {
                let [left, top, width, height] = numbers::<4>(verb, &args)?;
                Ok(Self::Resize(CanvasRect::new(left, top, width, height)))
            }
            _ => Err(PickmarkError::Command(format!(
                "unrecognized command '{line}'"
            ))),
        }
    }
}

fn pointer(kind: InputKind, args: &[&str]) -> Result<EngineCommand, PickmarkError> {
    let verb = match kind {
        InputKind::Click => "click",
        InputKind::Hover => "hover",
        InputKind::Tap => "tap",
    };
    let [x, y] = numbers::<2>(verb, args)?;
    Ok(EngineCommand::Input(InputEvent::new(kind, x, y)))
}

fn layer_id(arg: &str) -> Result<LayerId, PickmarkError> {
    arg.parse().map(LayerId).map_err(|_| {
        PickmarkError::Command(format!("'layer': '{arg}' is not a layer index"))
    })
}

fn numbers<const N: usize>(
    verb: &str,
    args: &[&str],
) -> Result<[f32; N], PickmarkError> {
    if args.len() != N {
        return Err(PickmarkError::Command(format!(
            "'{verb}' takes {N} numbers, got {}",
            args.len()
        )));
    }
    let mut out = [0.0; N];
    for (slot, arg) in out.iter_mut().zip(args) {
        *slot = arg.parse().map_err(|_| {
            PickmarkError::Command(format!("'{verb}': '{arg}' is not a number"))
        })?;
    }
    Ok(out)
}
