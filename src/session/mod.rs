//! Script-driven drawing sessions.
//!
//! A session replays a line-based command script against a [`CanvasState`],
//! acting as the thin adapter between a textual event source and the state
//! machine. One command per line; blank lines and `#` comments are ignored.
//!
//! ```text
//! point <x> <y> [hold]    pointer press ("hold" = continue modifier held)
//! move <x> <y>            pointer motion
//! close [loop]            finish the group ("loop" = close it into a loop)
//! undo
//! clear
//! color <index>           set the stroke color by palette index
//! background <index>      set the background color by palette index
//! ```
//!
//! Coordinates may be any integers; they are clamped onto the canvas like
//! every other pointer input.

#[cfg(test)]
mod tests;

use crate::input::{CanvasState, MouseButton};
use anyhow::{Context, Result, bail};
use log::debug;
use std::io::BufRead;

/// A single parsed script command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Pointer press at raw coordinates; `hold` keeps the group open
    Point { x: i32, y: i32, hold: bool },
    /// Pointer motion to raw coordinates
    Move { x: i32, y: i32 },
    /// Finish the in-progress group; `loop_back` closes it into a loop
    Close { loop_back: bool },
    Undo,
    Clear,
    /// Select the stroke color by palette index
    Color { index: usize },
    /// Select the background color by palette index
    Background { index: usize },
}

/// Parses one script line.
///
/// Returns `Ok(None)` for blank lines and comments, and an error naming the
/// problem for anything that is not a well-formed command.
pub fn parse_line(line: &str) -> Result<Option<Command>> {
    let mut tokens = line.split_whitespace();
    let Some(keyword) = tokens.next() else {
        return Ok(None);
    };
    if keyword.starts_with('#') {
        return Ok(None);
    }

    let command = match keyword {
        "point" => {
            let x = parse_coord(tokens.next(), keyword, "x")?;
            let y = parse_coord(tokens.next(), keyword, "y")?;
            let hold = match tokens.next() {
                None => false,
                Some("hold") => true,
                Some(other) => bail!("unexpected token '{other}' after 'point' (only 'hold' is allowed)"),
            };
            Command::Point { x, y, hold }
        }
        "move" => {
            let x = parse_coord(tokens.next(), keyword, "x")?;
            let y = parse_coord(tokens.next(), keyword, "y")?;
            Command::Move { x, y }
        }
        "close" => match tokens.next() {
            None => Command::Close { loop_back: false },
            Some("loop") => Command::Close { loop_back: true },
            Some(other) => bail!("unexpected token '{other}' after 'close' (only 'loop' is allowed)"),
        },
        "undo" => Command::Undo,
        "clear" => Command::Clear,
        "color" | "background" => {
            let token = tokens
                .next()
                .with_context(|| format!("'{keyword}' is missing its <index> argument"))?;
            let index: usize = token
                .parse()
                .with_context(|| format!("invalid palette index '{token}'"))?;
            if keyword == "color" {
                Command::Color { index }
            } else {
                Command::Background { index }
            }
        }
        other => bail!("unknown command '{other}'"),
    };

    if let Some(extra) = tokens.next() {
        bail!("trailing token '{extra}' after '{keyword}' command");
    }
    Ok(Some(command))
}

fn parse_coord(token: Option<&str>, keyword: &str, name: &str) -> Result<i32> {
    let token =
        token.with_context(|| format!("'{keyword}' is missing its <{name}> argument"))?;
    token
        .parse()
        .with_context(|| format!("invalid <{name}> value '{token}'"))
}

/// Applies one command to the canvas.
///
/// Palette index errors from the color commands surface here; every other
/// command is infallible.
pub fn apply(canvas: &mut CanvasState, command: Command) -> Result<()> {
    match command {
        Command::Point { x, y, hold } => {
            canvas.modifiers.shift = hold;
            canvas.on_pointer_press(MouseButton::Left, x, y);
        }
        Command::Move { x, y } => canvas.on_pointer_motion(x, y),
        Command::Close { loop_back } => canvas.close_group(loop_back),
        Command::Undo => canvas.undo(),
        Command::Clear => canvas.clear(),
        Command::Color { index } => canvas.set_active_color(index)?,
        Command::Background { index } => canvas.set_background_color(index)?,
    }
    Ok(())
}

/// Replays a whole script against the canvas.
///
/// Stops at the first malformed or failing command, reporting its line
/// number. The caller exports the resulting state afterwards.
pub fn run_script<R: BufRead>(reader: R, canvas: &mut CanvasState) -> Result<()> {
    let mut commands = 0usize;
    for (number, line) in reader.lines().enumerate() {
        let line = line.with_context(|| format!("failed to read script line {}", number + 1))?;
        let parsed =
            parse_line(&line).with_context(|| format!("script line {}", number + 1))?;
        if let Some(command) = parsed {
            apply(canvas, command).with_context(|| format!("script line {}", number + 1))?;
            commands += 1;
        }
    }
    debug!("replayed {commands} commands");
    Ok(())
}
