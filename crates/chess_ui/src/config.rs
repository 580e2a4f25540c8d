use chess_core::Rules;
use clap::Parser;

/// Two players enter moves such as e2e4 on stdin, one per line.
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "chess-referee", version, about)]
pub struct Args {
    /// Do not clear the screen before drawing the board
    #[arg(long)]
    pub no_clear: bool,

    /// Refuse moves onto a square held by your own piece
    #[arg(long)]
    pub strict_captures: bool,

    /// Log every move attempt to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerminalConfig {
    pub clear_screen: bool,
    pub verbose: bool,
    pub rules: Rules,
}

impl Default for TerminalConfig {
    fn default() -> Self {
        Self {
            clear_screen: true,
            verbose: false,
            rules: Rules::default(),
        }
    }
}

impl From<&Args> for TerminalConfig {
    fn from(args: &Args) -> Self {
        Self {
            clear_screen: !args.no_clear,
            verbose: args.verbose,
            rules: if args.strict_captures {
                Rules::strict()
            } else {
                Rules::default()
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use chess_core::FriendlyCapture;
    use clap::error::ErrorKind;

    use super::*;

    fn parse(flags: &[&str]) -> Result<Args, clap::Error> {
        Args::try_parse_from(std::iter::once("chess-referee").chain(flags.iter().copied()))
    }

    #[test]
    fn no_flags_gives_defaults() {
        let args = parse(&[]).unwrap();
        let config = TerminalConfig::from(&args);
        assert_eq!(config, TerminalConfig::default());
        assert!(config.clear_screen);
        assert_eq!(config.rules.friendly_capture, FriendlyCapture::Allowed);
    }

    #[test]
    fn flags_combine() {
        let args = parse(&["--no-clear", "--strict-captures", "-v"]).unwrap();
        assert_eq!(
            TerminalConfig::from(&args),
            TerminalConfig {
                clear_screen: false,
                verbose: true,
                rules: Rules::strict(),
            }
        );
        assert!(parse(&["--verbose"]).unwrap().verbose);
    }

    #[test]
    fn unknown_flag_is_rejected() {
        let err = parse(&["--colour"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownArgument);
    }

    #[test]
    fn help_is_requested_through_an_error() {
        let err = parse(&["--help"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DisplayHelp);
        assert!(err.to_string().contains("--strict-captures"));
    }

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Args::command().debug_assert();
    }
}
