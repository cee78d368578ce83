use std::ffi::OsString;
use std::path::PathBuf;

use clap::builder::NonEmptyStringValueParser;
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};

use crate::error::{ScaffoldError, ScaffoldResult};

/// Create an empty layered-architecture project tree.
#[derive(Parser, Debug)]
#[command(name = "layergen", version, about = "Scaffold a layered project directory tree")]
pub struct Cli {
    /// Name of the project directory to create under the working directory.
    #[arg(value_parser = NonEmptyStringValueParser::new())]
    pub project_name: String,
    /// Resolve the project directory against DIR instead of the current directory.
    #[arg(short = 'C', long = "chdir", value_name = "DIR")]
    pub chdir: Option<PathBuf>,
    /// Print the directories that would be created without creating them.
    #[arg(short = 'n', long = "dry-run")]
    pub dry_run: bool,
    /// Also create `docs/` and `docs/adr/`.
    #[arg(long = "with-docs")]
    pub with_docs: bool,
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Parse `std::env::args`. Help and version requests exit through clap.
pub fn parse() -> ScaffoldResult<Cli> {
    parse_from(std::env::args_os())
}

pub fn parse_from<I, T>(args: I) -> ScaffoldResult<Cli>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    Cli::try_parse_from(args).or_else(|err| match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => err.exit(),
        _ => Err(ScaffoldError::Usage(usage())),
    })
}

pub fn usage() -> String {
    Cli::command().render_usage().to_string()
}
