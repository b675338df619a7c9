//! Command parsing for player input.

/// The action a command asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verb {
    /// Travel to a connected location.
    Move,
    /// Describe the location or something in it.
    Look,
    /// Pick up an item.
    Take,
    /// List carried items.
    Inventory,
    /// Equip a weapon or armor.
    Equip,
    /// Use a carried item.
    Use,
    /// Talk to a character.
    Talk,
    /// Start a fight.
    Attack,
    /// Show the command reference.
    Help,
    /// Leave the game.
    Quit,
    /// Anything else.
    Unknown,
}

/// Verb synonyms for command parsing.
const MOVE_VERBS: &[&str] = &["go", "move", "travel"];
const LOOK_VERBS: &[&str] = &["look", "examine"];
const TAKE_VERBS: &[&str] = &["take", "get", "pickup"];
const INVENTORY_VERBS: &[&str] = &["inventory", "i", "items"];
const EQUIP_VERBS: &[&str] = &["equip", "wear", "wield"];
const USE_VERBS: &[&str] = &["use", "drink", "consume"];
const TALK_VERBS: &[&str] = &["talk", "speak"];
const ATTACK_VERBS: &[&str] = &["attack", "fight"];
const HELP_VERBS: &[&str] = &["help", "commands"];
const QUIT_VERBS: &[&str] = &["quit", "exit"];

const ALIASES: &[(Verb, &[&str])] = &[
    (Verb::Move, MOVE_VERBS),
    (Verb::Look, LOOK_VERBS),
    (Verb::Take, TAKE_VERBS),
    (Verb::Inventory, INVENTORY_VERBS),
    (Verb::Equip, EQUIP_VERBS),
    (Verb::Use, USE_VERBS),
    (Verb::Talk, TALK_VERBS),
    (Verb::Attack, ATTACK_VERBS),
    (Verb::Help, HELP_VERBS),
    (Verb::Quit, QUIT_VERBS),
];

impl Verb {
    /// Look up a verb by any of its aliases. The word must already be
    /// lower-case.
    pub fn parse(word: &str) -> Self {
        ALIASES
            .iter()
            .find(|(_, words)| words.contains(&word))
            .map_or(Self::Unknown, |(verb, _)| *verb)
    }

    /// Every alias that maps to this verb, canonical form first.
    pub fn aliases(self) -> &'static [&'static str] {
        ALIASES
            .iter()
            .find(|(verb, _)| *verb == self)
            .map(|(_, words)| *words)
            .unwrap_or(&[])
    }
}

/// A normalized player command: a verb and the rest of the line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    /// The dispatched verb.
    pub verb: Verb,
    /// The first word as typed (lower-cased).
    pub word: String,
    /// Remaining words joined with single spaces; may be empty.
    pub target: String,
}

/// Parse a player input string into a command.
///
/// Input is lower-cased and split on whitespace. Returns `None` for blank
/// input.
pub fn parse_command(input: &str) -> Option<Command> {
    let lowered = input.trim().to_lowercase();
    let mut words = lowered.split_whitespace();
    let word = words.next()?.to_string();
    let target = words.collect::<Vec<_>>().join(" ");

    Some(Command {
        verb: Verb::parse(&word),
        word,
        target,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_every_alias() {
        for (verb, words) in ALIASES {
            for word in *words {
                let cmd = parse_command(word).unwrap();
                assert_eq!(cmd.verb, *verb, "alias {word}");
                assert_eq!(cmd.target, "");
            }
        }
    }

    #[test]
    fn parse_normalizes_case_and_spacing() {
        let cmd = parse_command("  GO    Forest   Path ").unwrap();
        assert_eq!(cmd.verb, Verb::Move);
        assert_eq!(cmd.word, "go");
        assert_eq!(cmd.target, "forest path");
    }

    #[test]
    fn parse_empty() {
        assert_eq!(parse_command(""), None);
        assert_eq!(parse_command("   \t "), None);
    }

    #[test]
    fn parse_unknown() {
        let cmd = parse_command("dance wildly").unwrap();
        assert_eq!(cmd.verb, Verb::Unknown);
        assert_eq!(cmd.target, "wildly");
    }

    #[test]
    fn aliases_round_trip() {
        assert_eq!(Verb::Use.aliases(), &["use", "drink", "consume"]);
        assert!(Verb::Unknown.aliases().is_empty());
    }
}
