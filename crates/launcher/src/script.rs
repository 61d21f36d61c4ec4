// crates/launcher/src/script.rs

//! Headless play scripts. One command per line:
//!
//! ```text
//! # comments and blank lines are skipped
//! click 4.0 -2.5     # world-space click
//! move 0.5 0.5       # pointer to clip-space position
//! back               # leave the current view
//! slot 0             # hotbar slot, 0-based
//! select card        # select an item directly (`select none` clears)
//! tick 3             # run frames (default 1)
//! ```

use std::str::FromStr;

use engine_core::HeadlessHost;
use engine_shared::HostEvent;
use escape_room::{Game, Item};
use glam::Vec2;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    Click(Vec2),
    Move(Vec2),
    Back,
    Slot(usize),
    Select(Option<Item>),
    Tick(u32),
}

#[derive(Debug, Error, PartialEq)]
#[error("script line {line}: {kind}")]
pub struct ScriptError {
    pub line: usize,
    pub kind: ScriptErrorKind,
}

#[derive(Debug, Error, PartialEq)]
pub enum ScriptErrorKind {
    #[error("unknown command `{0}`")]
    UnknownCommand(String),

    #[error("`{command}` expects {expected}")]
    Arity { command: &'static str, expected: &'static str },

    #[error("`{0}` is not a number")]
    BadNumber(String),

    #[error("unknown item `{0}`")]
    UnknownItem(String),
}

/// A parsed command and the 1-based line it came from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Step {
    pub line: usize,
    pub command: Command,
}

pub fn parse(text: &str) -> Result<Vec<Step>, ScriptError> {
    let mut steps = Vec::new();

    for (index, raw) in text.lines().enumerate() {
        let line = index + 1;
        let code = raw.split('#').next().unwrap_or_default().trim();
        if code.is_empty() {
            continue;
        }

        let command = parse_command(code).map_err(|kind| ScriptError { line, kind })?;
        steps.push(Step { line, command });
    }

    Ok(steps)
}

fn parse_command(code: &str) -> Result<Command, ScriptErrorKind> {
    let mut words = code.split_whitespace();
    let verb = words.next().unwrap_or_default();
    let args: Vec<&str> = words.collect();

    match (verb, args.as_slice()) {
        ("click", [x, y]) => Ok(Command::Click(Vec2::new(number(x)?, number(y)?))),
        ("click", _) => Err(arity("click", "two coordinates")),
        ("move", [x, y]) => Ok(Command::Move(Vec2::new(number(x)?, number(y)?))),
        ("move", _) => Err(arity("move", "two coordinates")),
        ("back", []) => Ok(Command::Back),
        ("back", _) => Err(arity("back", "no arguments")),
        ("slot", [n]) => Ok(Command::Slot(number(n)?)),
        ("slot", _) => Err(arity("slot", "a slot index")),
        ("select", ["none"]) => Ok(Command::Select(None)),
        ("select", [name]) => Item::from_str(name)
            .map(|item| Command::Select(Some(item)))
            .map_err(|_| ScriptErrorKind::UnknownItem((*name).to_string())),
        ("select", _) => Err(arity("select", "an item name")),
        ("tick", []) => Ok(Command::Tick(1)),
        ("tick", [n]) => Ok(Command::Tick(number(n)?)),
        ("tick", _) => Err(arity("tick", "at most one frame count")),
        (other, _) => Err(ScriptErrorKind::UnknownCommand(other.to_string())),
    }
}

fn number<T: FromStr>(text: &str) -> Result<T, ScriptErrorKind> {
    text.parse().map_err(|_| ScriptErrorKind::BadNumber(text.to_string()))
}

fn arity(command: &'static str, expected: &'static str) -> ScriptErrorKind {
    ScriptErrorKind::Arity { command, expected }
}

/// Feeds `steps` to the host. Queued input is only handled by frames, so
/// direct game edits (`select`) first flush whatever is pending, and a final
/// frame runs if anything is left at the end.
pub fn run(host: &mut HeadlessHost<Game>, steps: &[Step]) {
    for step in steps {
        debug!(line = step.line, command = ?step.command, "script");
        match step.command {
            Command::Click(point) => host.push(HostEvent::WorldClick(point)),
            Command::Move(clip) => host.push(HostEvent::PointerMoved { clip }),
            Command::Back => host.push(HostEvent::Back),
            Command::Slot(slot) => host.push(HostEvent::HotbarSlot(slot)),
            Command::Select(item) => {
                flush(host);
                host.game_mut().inventory_mut().set_selected(item);
            }
            Command::Tick(count) => host.frames(count),
        }
    }
    flush(host);
}

fn flush(host: &mut HeadlessHost<Game>) {
    if host.pending_events() > 0 {
        host.frames(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_command() {
        let steps = parse(
            "# warm up\n\
             click 4 -2.5\n\
             move 0.5 0.5   # peek\n\
             \n\
             back\n\
             slot 2\n\
             select tape\n\
             select none\n\
             tick\n\
             tick 10\n",
        )
        .unwrap();

        let commands: Vec<Command> = steps.iter().map(|s| s.command).collect();
        assert_eq!(
            commands,
            vec![
                Command::Click(Vec2::new(4.0, -2.5)),
                Command::Move(Vec2::new(0.5, 0.5)),
                Command::Back,
                Command::Slot(2),
                Command::Select(Some(Item::Tape)),
                Command::Select(None),
                Command::Tick(1),
                Command::Tick(10),
            ]
        );
        assert_eq!(steps[0].line, 2);
        assert_eq!(steps[2].line, 5);
    }

    #[test]
    fn errors_carry_the_line_number() {
        let err = parse("back\n\njump 1 2\n").unwrap_err();
        assert_eq!(err.line, 3);
        assert_eq!(err.kind, ScriptErrorKind::UnknownCommand("jump".into()));
        assert_eq!(err.to_string(), "script line 3: unknown command `jump`");
    }

    #[test]
    fn bad_arguments_are_rejected() {
        assert_eq!(parse("click 1").unwrap_err().kind, arity("click", "two coordinates"));
        assert_eq!(parse("slot x").unwrap_err().kind, ScriptErrorKind::BadNumber("x".into()));
        assert_eq!(parse("tick -1").unwrap_err().kind, ScriptErrorKind::BadNumber("-1".into()));
        assert_eq!(parse("select sword").unwrap_err().kind, ScriptErrorKind::UnknownItem("sword".into()));
    }

    #[test]
    fn demo_playthrough_escapes() {
        let steps = parse(include_str!("../../../demos/playthrough.script")).unwrap();
        let game = Game::new(escape_room::GameConfig::default()).unwrap();
        let mut host = HeadlessHost::new(game).unwrap();

        run(&mut host, &steps);

        assert_eq!(host.pending_events(), 0);
        assert!(host.game().inventory().owns(Item::Blueprint));
        assert!(host.game().escaped());
    }

    #[test]
    fn pointer_moves_reach_the_keyhole() {
        let game = Game::new(escape_room::GameConfig::default()).unwrap();
        let mut host = HeadlessHost::new(game).unwrap();
        let steps = parse("click 0 -0.7\nmove 1 1\ntick\n").unwrap();

        run(&mut host, &steps);

        assert_eq!(host.game().active_view(), Some(escape_room::View::BackRoom));
        assert_eq!(host.pointer().world, Vec2::new(16.0, 9.0));
    }
}
