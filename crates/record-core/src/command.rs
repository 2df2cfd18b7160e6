use crate::exercise::Exercise;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verb {
    Set,
    Get,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    pub verb: Verb,
    pub exercise: Exercise,
    /// Lift token for `set`; `None` for `get`.
    pub argument: Option<String>,
}

/// Prefixes in match order. `set` forms are tried before `get` forms.
const PREFIXES: &[(&str, Verb, Exercise)] = &[
    ("set squat", Verb::Set, Exercise::Squat),
    ("set bench", Verb::Set, Exercise::Bench),
    ("set deadlift", Verb::Set, Exercise::Deadlift),
    ("get squat", Verb::Get, Exercise::Squat),
    ("get bench", Verb::Get, Exercise::Bench),
    ("get deadlift", Verb::Get, Exercise::Deadlift),
];

impl Command {
    /// Parse a message body. Returns `None` when no command prefix matches.
    ///
    /// The body is lower-cased first. For `set`, the argument is the last
    /// whitespace-separated token, so `set squat lift 5x100kg` yields
    /// `5x100kg` and any words in between are ignored.
    pub fn parse(body: &str) -> Option<Command> {
        let body = body.to_lowercase();
        let &(_, verb, exercise) = PREFIXES
            .iter()
            .find(|(prefix, _, _)| body.starts_with(prefix))?;

        let argument = match verb {
            Verb::Set => body.split_whitespace().last().map(str::to_string),
            Verb::Get => None,
        };
        Some(Command {
            verb,
            exercise,
            argument,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_takes_last_token() {
        let cmd = Command::parse("Set Squat lift 5x100KG").unwrap();
        assert_eq!(cmd.verb, Verb::Set);
        assert_eq!(cmd.exercise, Exercise::Squat);
        assert_eq!(cmd.argument.as_deref(), Some("5x100kg"));
    }

    #[test]
    fn set_without_value_falls_back_to_exercise_word() {
        let cmd = Command::parse("set bench").unwrap();
        assert_eq!(cmd.argument.as_deref(), Some("bench"));
    }

    #[test]
    fn get_has_no_argument() {
        let cmd = Command::parse("GET deadlift please").unwrap();
        assert_eq!(cmd.verb, Verb::Get);
        assert_eq!(cmd.exercise, Exercise::Deadlift);
        assert_eq!(cmd.argument, None);
    }

    #[test]
    fn prefix_match_is_literal() {
        assert!(Command::parse("hello").is_none());
        assert!(Command::parse(" set squat 100").is_none());
        assert!(Command::parse("setsquat 100").is_none());
        assert!(Command::parse("").is_none());
    }

    #[test]
    fn longer_words_still_match_prefix() {
        let cmd = Command::parse("set benchpress 90").unwrap();
        assert_eq!(cmd.exercise, Exercise::Bench);
        assert_eq!(cmd.argument.as_deref(), Some("90"));
    }
}
