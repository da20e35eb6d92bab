use anyhow::Result;
use clap::Parser;

use gtx_cli::cli::commands::{configure, review, serve, translate};
use gtx_cli::cli::{Args, Command};
use gtx_cli::output::{self, OutputConfig};
use gtx_cli::translation::print_languages;

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    output::init(OutputConfig {
        quiet: args.quiet,
        verbose: args.verbose,
        ..OutputConfig::default()
    });

    match args.command {
        Some(Command::Languages) => {
            print_languages();
        }
        Some(Command::Configure { show }) => {
            configure::run_configure(show)?;
        }
        Some(Command::Review { file }) => {
            let options = review::ReviewOptions {
                file,
                languages: args.languages,
            };
            review::run_review(options).await?;
        }
        Some(Command::Serve { host, port }) => {
            let options = serve::ServeOptions {
                host,
                port,
                languages: args.languages,
            };
            serve::run_serve(options).await?;
        }
        None => {
            let options = translate::TranslateOptions {
                file: args.file,
                text: args.text,
                languages: args.languages,
            };
            translate::run_translate(options).await?;
        }
    }

    Ok(())
}
