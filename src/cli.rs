use clap::Parser;

const EXAMPLES: &str = "\
Examples:
  ssh-push -s                         # Setup SSH configuration
  ssh-push -e                         # Edit existing configuration
  ssh-push blinky.v                   # Push single file
  ssh-push file1.v file2.v            # Push multiple files
  ssh-push --all                      # Push all non-hidden files
  ssh-push -l                         # List remote files
  ssh-push -t                         # Test SSH connection
  ssh-push -c                         # Show configuration
  ssh-push -v blinky.v                # Push with verbose output";

#[derive(Parser, Debug, Default)]
#[command(name = "ssh-push")]
#[command(version)]
#[command(about = "SSH File Push Tool - Push files to remote device")]
#[command(after_help = EXAMPLES)]
pub struct Cli {
    /// Files to push to remote host
    #[arg(value_name = "FILE")]
    pub files: Vec<String>,

    /// Setup SSH configuration
    #[arg(short, long)]
    pub setup: bool,

    /// Edit existing SSH configuration
    #[arg(short, long)]
    pub edit: bool,

    /// Push all non-hidden files in current directory
    #[arg(short, long)]
    pub all: bool,

    /// List files in remote working directory
    #[arg(short, long)]
    pub list: bool,

    /// Test SSH connection
    #[arg(short, long)]
    pub test: bool,

    /// Show current configuration
    #[arg(short, long)]
    pub config: bool,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

/// The one operation a run performs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Setup,
    Edit,
    ShowConfig,
    Test,
    List,
    PushAll,
    Push(Vec<String>),
    Help,
}

impl Cli {
    /// First matching flag wins: setup > edit > config > test > list > all
    /// > files > help.
    pub fn action(&self) -> Action {
        if self.setup {
            Action::Setup
        } else if self.edit {
            Action::Edit
        } else if self.config {
            Action::ShowConfig
        } else if self.test {
            Action::Test
        } else if self.list {
            Action::List
        } else if self.all {
            Action::PushAll
        } else if !self.files.is_empty() {
            Action::Push(self.files.clone())
        } else {
            Action::Help
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("ssh-push").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_precedence() {
        assert_eq!(parse(&["-t", "-l", "-s"]).action(), Action::Setup);
        assert_eq!(parse(&["--list", "--edit"]).action(), Action::Edit);
        assert_eq!(parse(&["-c", "-t"]).action(), Action::ShowConfig);
        assert_eq!(parse(&["-l", "-t"]).action(), Action::Test);
        assert_eq!(parse(&["-a", "-l", "x.v"]).action(), Action::List);
        assert_eq!(parse(&["x.v", "--all"]).action(), Action::PushAll);
        assert_eq!(
            parse(&["-v", "a.v", "b.v"]).action(),
            Action::Push(vec!["a.v".into(), "b.v".into()])
        );
        assert_eq!(parse(&["-v"]).action(), Action::Help);
        assert_eq!(parse(&[]).action(), Action::Help);
    }

    #[test]
    fn test_verbose_flag() {
        let cli = parse(&["-v", "a.v"]);
        assert!(cli.verbose);
        assert!(!parse(&["a.v"]).verbose);
    }
}
