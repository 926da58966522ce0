use anyhow::Result;
use clap::{ArgAction, Parser};
use std::io;
use std::process::ExitCode;

use otoolrecursive::cli::{self, Options, USAGE};
use otoolrecursive::core::PathPrefixes;
use otoolrecursive::inspectors::OtoolLister;

#[derive(Debug, Clone, Parser)]
#[command(
    name = "otoolrecursive",
    version,
    author = "otoolrecursive developers",
    about = "Recursively list the dynamic libraries a Mach-O binary depends on",
    override_usage = "otoolrecursive [-v] [-p] [-r] [-e] [-l] [-o] <dynlib file>",
    disable_help_flag = true,
    disable_version_flag = true
)]
struct Cli {
    #[arg(long, action = ArgAction::Help)]
    help: Option<bool>,

    #[arg(long, action = ArgAction::Version)]
    version: Option<bool>,

    /// -v verbose, -p package manager, -r @rpath, -e @executable_path,
    /// -l @loader_path, -o other libraries; then the library or binary
    #[arg(
        value_name = "ARGS",
        num_args = 1..,
        allow_hyphen_values = true,
        trailing_var_arg = true
    )]
    tokens: Vec<String>,
}

fn main() -> Result<ExitCode> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    run(cli)
}

fn run(cli: Cli) -> Result<ExitCode> {
    let options = match Options::from_tokens(&cli.tokens) {
        Ok(options) => options,
        Err(err) => {
            log::debug!("rejected command line: {}", err);
            eprintln!("{}", USAGE);
            return Ok(ExitCode::FAILURE);
        }
    };

    let prefixes = PathPrefixes::from_env();
    let lister =
        OtoolLister::new(prefixes.inspect_program.clone()).with_args(prefixes.inspect_args.clone());

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match cli::run(&options, lister, prefixes, &mut out) {
        Ok(_) => Ok(ExitCode::SUCCESS),
        Err(err) if is_broken_pipe(&err) => {
            log::debug!("stdout closed early: {}", err);
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => Err(err),
    }
}

/// A reader such as `head` closing stdout is a normal way for a run to end
fn is_broken_pipe(err: &anyhow::Error) -> bool {
    err.chain().any(|cause| {
        cause
            .downcast_ref::<io::Error>()
            .map_or(false, |io_err| io_err.kind() == io::ErrorKind::BrokenPipe)
    })
}
