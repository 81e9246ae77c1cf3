//! Operator responses at the walker prompt.

/// Prompt shown after each presented step.
pub const PROMPT: &str = "\n\n[Enter] to proceed (or \"help\"): ";

/// Help text listing the accepted responses.
pub const HELP: &str = "Options:

[Enter]\t\t\tProceed to the next step
skip\t\t\tSkip this step and its descendants
skipto STEP \tSkip to the given step by absolute name
help\t\t\tPrint this help message";

/// A parsed operator response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OperatorCommand {
    /// Empty line: go on to the next step.
    Proceed,
    /// Show the help text.
    Help,
    /// Skip the current step and all of its descendants.
    Skip,
    /// Skip every step until the one with this absolute name.
    SkipTo(String),
    /// `skipto` without exactly one step name.
    MalformedSkipTo,
    /// Anything else.
    Invalid(String),
}

impl OperatorCommand {
    /// Parse one line of operator input. Surrounding whitespace is ignored.
    pub fn parse(line: &str) -> Self {
        let line = line.trim();
        match line {
            "" => return Self::Proceed,
            "help" => return Self::Help,
            "skip" => return Self::Skip,
            _ => {}
        }

        let mut words = line.split_whitespace();
        if words.next() == Some("skipto") {
            return match (words.next(), words.next()) {
                (Some(target), None) => Self::SkipTo(target.to_string()),
                _ => Self::MalformedSkipTo,
            };
        }

        Self::Invalid(line.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_simple_commands() {
        assert_eq!(OperatorCommand::parse(""), OperatorCommand::Proceed);
        assert_eq!(OperatorCommand::parse("  \n"), OperatorCommand::Proceed);
        assert_eq!(OperatorCommand::parse("help\n"), OperatorCommand::Help);
        assert_eq!(OperatorCommand::parse(" skip "), OperatorCommand::Skip);
    }

    #[test]
    fn parses_skipto_target() {
        assert_eq!(
            OperatorCommand::parse("skipto root.stepC\n"),
            OperatorCommand::SkipTo("root.stepC".to_string())
        );
        assert_eq!(
            OperatorCommand::parse("skipto    root.stepC"),
            OperatorCommand::SkipTo("root.stepC".to_string())
        );
    }

    #[test]
    fn skipto_needs_exactly_one_argument() {
        assert_eq!(OperatorCommand::parse("skipto"), OperatorCommand::MalformedSkipTo);
        assert_eq!(
            OperatorCommand::parse("skipto root.a root.b"),
            OperatorCommand::MalformedSkipTo
        );
    }

    #[test]
    fn anything_else_is_invalid() {
        assert_eq!(
            OperatorCommand::parse("next"),
            OperatorCommand::Invalid("next".to_string())
        );
        assert_eq!(
            OperatorCommand::parse("skiptoroot.a"),
            OperatorCommand::Invalid("skiptoroot.a".to_string())
        );
        assert_eq!(
            OperatorCommand::parse("HELP"),
            OperatorCommand::Invalid("HELP".to_string())
        );
    }
}
