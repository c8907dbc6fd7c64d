//! Replay scripts
//!
//! One step per line; `#` starts a comment.
//!
//! ```text
//! press
//! move 120
//! move 260
//! release 260
//! settle
//! dislike
//! frames 10
//! refresh
//! ```

use anyhow::{bail, Context, Result};
use flick_core::DeckInput;

/// One line of a replay script
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Step {
    Input(DeckInput),
    /// Run this many frames
    Frames(u32),
    /// Run frames until nothing is animating
    Settle,
    /// Reload the item list
    Refresh,
}

/// Played when no script file is given: a cancelled drag, a committed drag,
/// and both buttons.
pub const DEMO: &str = "\
press
move 80
move 140
release 140
settle
press
move 180
move 290
release 290
settle
like
settle
dislike
settle
";

pub fn parse(source: &str) -> Result<Vec<Step>> {
    source
        .lines()
        .enumerate()
        .filter_map(|(n, line)| {
            let line = line.split('#').next().unwrap_or("").trim();
            (!line.is_empty()).then_some((n + 1, line))
        })
        .map(|(n, line)| parse_line(line).with_context(|| format!("line {n}: `{line}`")))
        .collect()
}

fn parse_line(line: &str) -> Result<Step> {
    let mut words = line.split_whitespace();
    let command = words.next().unwrap_or_default();
    let argument = words.next();
    if words.next().is_some() {
        bail!("too many arguments");
    }

    let offset = || -> Result<f32> {
        argument
            .context("missing offset")?
            .parse::<f32>()
            .context("offset is not a number")
    };

    let step = match command {
        "press" => Step::Input(DeckInput::PressStart),
        "move" => Step::Input(DeckInput::DragMove { dx: offset()? }),
        "release" => Step::Input(DeckInput::Release { dx: offset()? }),
        "like" => Step::Input(DeckInput::Like),
        "dislike" => Step::Input(DeckInput::Dislike),
        "frames" => Step::Frames(
            argument
                .context("missing frame count")?
                .parse()
                .context("frame count is not a number")?,
        ),
        "settle" => Step::Settle,
        "refresh" => Step::Refresh,
        other => bail!("unknown step `{other}`"),
    };
    Ok(step)
}
