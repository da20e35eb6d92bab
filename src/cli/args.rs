use clap::{Args as ClapArgs, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "gtx")]
#[command(about = "Translate text and user reviews with the Google gtx endpoint")]
#[command(version)]
pub struct Args {
    /// File to translate (reads from stdin if neither FILE nor --text is given)
    #[arg(conflicts_with = "text")]
    pub file: Option<String>,

    /// Text to translate
    #[arg(short = 'x', long)]
    pub text: Option<String>,

    #[command(flatten)]
    pub languages: LanguageArgs,

    /// Suppress status output on stderr
    #[arg(short = 'q', long, global = true)]
    pub quiet: bool,

    /// Print debug diagnostics on stderr
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Overrides shared by every command that talks to the endpoint.
#[derive(ClapArgs, Debug, Clone, Default)]
pub struct LanguageArgs {
    /// Source language code (default: en)
    #[arg(short = 'f', long = "from", global = true)]
    pub from: Option<String>,

    /// Target language code (default: es)
    #[arg(short = 't', long = "to", global = true)]
    pub to: Option<String>,

    /// Translate endpoint base URL
    #[arg(short = 'e', long, global = true)]
    pub endpoint: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Translate the comment of a user review given as JSON
    Review {
        /// JSON file with the review (reads from stdin if not provided)
        file: Option<String>,
    },
    /// Serve /translate and /translateReview over HTTP
    Serve {
        /// Address to bind (default: 127.0.0.1)
        #[arg(long)]
        host: Option<String>,

        /// Port to listen on (default: 8080)
        #[arg(short = 'p', long)]
        port: Option<u16>,
    },
    /// List supported language codes
    Languages,
    /// Edit default settings
    Configure {
        /// Show current configuration
        #[arg(long)]
        show: bool,
    },
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_args_are_consistent() {
        use clap::CommandFactory;
        Args::command().debug_assert();
    }

    #[test]
    fn test_parse_text_with_languages() {
        let args =
            Args::try_parse_from(["gtx", "--text", "hello", "-f", "en", "-t", "fr"]).unwrap();

        assert_eq!(args.text.as_deref(), Some("hello"));
        assert_eq!(args.languages.from.as_deref(), Some("en"));
        assert_eq!(args.languages.to.as_deref(), Some("fr"));
        assert!(args.command.is_none());
    }

    #[test]
    fn test_file_conflicts_with_text() {
        assert!(Args::try_parse_from(["gtx", "notes.txt", "--text", "hi"]).is_err());
    }

    #[test]
    fn test_parse_review_subcommand() {
        let args = Args::try_parse_from(["gtx", "review", "review.json", "--to", "de"]).unwrap();

        assert_eq!(args.languages.to.as_deref(), Some("de"));
        let Some(Command::Review { file }) = args.command else {
            panic!("expected review subcommand");
        };
        assert_eq!(file.as_deref(), Some("review.json"));
    }

    #[test]
    fn test_parse_serve_subcommand() {
        let args = Args::try_parse_from(["gtx", "serve", "--port", "9000", "-q"]).unwrap();

        assert!(args.quiet);
        let Some(Command::Serve { host, port }) = args.command else {
            panic!("expected serve subcommand");
        };
        assert_eq!(host, None);
        assert_eq!(port, Some(9000));
    }
}
