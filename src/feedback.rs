//! Player-facing feedback: message kinds, their templates, and the log a
//! view layer reads.
//!
//! Templates use `%s` placeholders. [`format_template`] fills them left to
//! right and leaves any placeholder without an argument empty. Each
//! constructor on [`FeedbackMessage`] takes exactly the arguments its
//! template needs.

use alloc::collections::VecDeque;
use alloc::string::{String, ToString};

use crate::coord::Coordinate;

/// Label used for a hit ship, so the message does not reveal its type.
pub const HIT_SUBJECT: &str = "A ship";

/// Outcome category of a feedback message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(rename_all = "kebab-case"))]
pub enum MessageKind {
    GameStarted,
    ShipHit,
    ShipMiss,
    ShipSunk,
    AllShipsSunk,
    CoordinateOutOfBounds,
    CoordinateAlreadyFired,
    GameOver,
}

impl MessageKind {
    pub fn template(self) -> &'static str {
        match self {
            MessageKind::GameStarted => {
                "🚀 Game started! Enter a coordinate (you can type anywhere from A1 to %s%s) to fire at a ship."
            }
            MessageKind::ShipHit => "%s was a hit at %s!",
            MessageKind::ShipMiss => "%s was a miss... Try again!",
            MessageKind::ShipSunk => "You sunk a %s!",
            MessageKind::AllShipsSunk => "🥳 Congratulations! You sank all the ships. You win!",
            MessageKind::CoordinateOutOfBounds => {
                "Invalid coordinate. Please enter a valid coordinate between A1 and %s."
            }
            MessageKind::CoordinateAlreadyFired => "You've already fired at that coordinate.",
            MessageKind::GameOver => "Game over! Feel free to start a new game.",
        }
    }

    /// Short tag a view layer can key styling on.
    pub fn tag(self) -> &'static str {
        match self {
            MessageKind::GameStarted => "game-started",
            MessageKind::ShipHit => "hit",
            MessageKind::ShipMiss => "miss",
            MessageKind::ShipSunk => "sunk",
            MessageKind::AllShipsSunk => "win",
            MessageKind::CoordinateOutOfBounds => "invalid-input",
            MessageKind::CoordinateAlreadyFired => "already-fired",
            MessageKind::GameOver => "game-over",
        }
    }
}

/// Substitute `%s` placeholders in `template` with `args`, in order.
/// Surplus placeholders become empty; surplus arguments are ignored.
pub fn format_template(template: &str, args: &[&str]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut args = args.iter();
    let mut parts = template.split("%s");
    if let Some(first) = parts.next() {
        out.push_str(first);
    }
    for part in parts {
        out.push_str(args.next().copied().unwrap_or(""));
        out.push_str(part);
    }
    out
}

/// A single outcome record.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct FeedbackMessage {
    pub kind: MessageKind,
    pub text: String,
}

impl FeedbackMessage {
    fn render(kind: MessageKind, args: &[&str]) -> Self {
        Self {
            kind,
            text: format_template(kind.template(), args),
        }
    }

    pub fn game_started(max: Coordinate) -> Self {
        let letter = max.column_letter().to_string();
        let rows = (max.row + 1).to_string();
        Self::render(MessageKind::GameStarted, &[&letter, &rows])
    }

    /// `input` is the normalized text the player fired at.
    pub fn ship_hit(input: &str) -> Self {
        Self::render(MessageKind::ShipHit, &[HIT_SUBJECT, input])
    }

    pub fn ship_miss(input: &str) -> Self {
        Self::render(MessageKind::ShipMiss, &[input])
    }

    pub fn ship_sunk(ship: &str) -> Self {
        Self::render(MessageKind::ShipSunk, &[ship])
    }

    pub fn all_ships_sunk() -> Self {
        Self::render(MessageKind::AllShipsSunk, &[])
    }

    pub fn out_of_bounds(max: Coordinate) -> Self {
        Self::render(MessageKind::CoordinateOutOfBounds, &[&max.to_string()])
    }

    pub fn already_fired() -> Self {
        Self::render(MessageKind::CoordinateAlreadyFired, &[])
    }

    pub fn game_over() -> Self {
        Self::render(MessageKind::GameOver, &[])
    }
}

/// Append-only message log, newest first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeedbackLog {
    messages: VecDeque<FeedbackMessage>,
}

impl FeedbackLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `message` as the newest entry. Messages with empty text are
    /// dropped.
    pub fn push(&mut self, message: FeedbackMessage) {
        if message.text.is_empty() {
            return;
        }
        self.messages.push_front(message);
    }

    pub fn clear(&mut self) {
        self.messages.clear();
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Most recent message.
    pub fn latest(&self) -> Option<&FeedbackMessage> {
        self.messages.front()
    }

    /// Oldest message still in the log.
    pub fn earliest(&self) -> Option<&FeedbackMessage> {
        self.messages.back()
    }

    /// Messages, newest first.
    pub fn iter(&self) -> impl Iterator<Item = &FeedbackMessage> {
        self.messages.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    #[test]
    fn fills_placeholders_in_order() {
        assert_eq!(format_template("%s was a hit at %s!", &["A ship", "B4"]), "A ship was a hit at B4!");
    }

    #[test]
    fn missing_arguments_become_empty() {
        assert_eq!(format_template("%s and %s", &["one"]), "one and ");
        assert_eq!(format_template("%s%s", &[]), "");
    }

    #[test]
    fn extra_arguments_are_ignored() {
        assert_eq!(format_template("no placeholders", &["x"]), "no placeholders");
    }

    #[test]
    fn game_started_names_max_coordinate() {
        let msg = FeedbackMessage::game_started(Coordinate::new(9, 7));
        assert_eq!(msg.kind, MessageKind::GameStarted);
        assert!(msg.text.contains("from A1 to H10"));
    }

    #[test]
    fn out_of_bounds_names_max_coordinate() {
        let msg = FeedbackMessage::out_of_bounds(Coordinate::new(7, 7));
        assert_eq!(
            msg.text,
            "Invalid coordinate. Please enter a valid coordinate between A1 and H8."
        );
    }

    #[test]
    fn hit_does_not_reveal_ship_type() {
        let msg = FeedbackMessage::ship_hit("C3");
        assert_eq!(msg.text, "A ship was a hit at C3!");
    }

    #[test]
    fn log_is_newest_first() {
        let mut log = FeedbackLog::new();
        log.push(FeedbackMessage::ship_miss("A1"));
        log.push(FeedbackMessage::ship_hit("A2"));
        assert_eq!(log.len(), 2);
        assert_eq!(log.latest().unwrap().kind, MessageKind::ShipHit);
        assert_eq!(log.earliest().unwrap().kind, MessageKind::ShipMiss);
        let kinds: Vec<_> = log.iter().map(|m| m.kind).collect();
        assert_eq!(kinds, [MessageKind::ShipHit, MessageKind::ShipMiss]);
        log.clear();
        assert!(log.is_empty());
    }

    #[test]
    fn empty_text_is_dropped() {
        let mut log = FeedbackLog::new();
        log.push(FeedbackMessage {
            kind: MessageKind::ShipMiss,
            text: String::new(),
        });
        assert!(log.is_empty());
    }

    #[test]
    fn tags_are_distinct() {
        let kinds = [
            MessageKind::GameStarted,
            MessageKind::ShipHit,
            MessageKind::ShipMiss,
            MessageKind::ShipSunk,
            MessageKind::AllShipsSunk,
            MessageKind::CoordinateOutOfBounds,
            MessageKind::CoordinateAlreadyFired,
            MessageKind::GameOver,
        ];
        let mut tags: Vec<_> = kinds.iter().map(|k| k.tag()).collect();
        tags.sort_unstable();
        tags.dedup();
        assert_eq!(tags.len(), kinds.len());
    }
}
