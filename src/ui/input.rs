//! Terminal commands to game intents

use crate::core::types::Target;

/// Something the player asked for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    Start,
    /// Zero-based index into the shown statements
    SelectStatement(usize),
    Fire(Target),
    Restart,
    Quit,
}

/// Parse a line of terminal input
///
/// Statements are numbered from 1 on screen, so `"1"` selects index 0.
pub fn parse_intent(input: &str) -> Option<Intent> {
    let input = input.trim().to_lowercase();
    let mut words = input.split_whitespace();
    let command = words.next()?;

    let intent = match command {
        "start" | "connect" | "s" => Intent::Start,
        "restart" | "r" => Intent::Restart,
        "quit" | "q" | "exit" => Intent::Quit,
        "fire" | "f" => match words.next()? {
            "me" | "self" | "player" => Intent::Fire(Target::Player),
            "dealer" | "them" | "target" => Intent::Fire(Target::Dealer),
            _ => return None,
        },
        number => {
            let choice: usize = number.parse().ok()?;
            Intent::SelectStatement(choice.checked_sub(1)?)
        }
    };

    if words.next().is_some() {
        return None;
    }
    Some(intent)
}
