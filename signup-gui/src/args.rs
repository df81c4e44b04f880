//! Command-line argument parsing.

use std::{error::Error, fmt::Display, path::PathBuf, process};

use crate::dir::SignupDirectory;

/// Parsed command-line argument.
#[derive(Debug, Clone, PartialEq)]
pub enum Arg {
    DatadirPath(SignupDirectory),
    ApiUrl(String),
}

/// Parse command-line arguments.
///
/// # Arguments
/// - `args`: Command-line arguments (including program name at args[0])
/// - `version`: Version to display for --version flag
pub fn parse_args(args: Vec<String>, version: impl Display) -> Result<Vec<Arg>, Box<dyn Error>> {
    let mut res = Vec::new();

    let app_name = args
        .first()
        .and_then(|a| std::path::Path::new(a).file_name())
        .and_then(|s| s.to_str())
        .unwrap_or("signup-gui");

    if args.len() > 1 && (args[1] == "--version" || args[1] == "-v") {
        eprintln!("{}", version);
        process::exit(0);
    }

    if args.len() > 1 && (args[1] == "--help" || args[1] == "-h") {
        eprintln!(
            r#"
Usage: {app_name} [OPTIONS]

Options:
    --datadir <PATH>    Path of the signup datadir
    --api-url <URL>     Base URL of the signup backend, overrides the configuration file
    -v, --version       Display {app_name} version
    -h, --help          Print help
        "#
        );
        process::exit(0);
    }

    let mut iter = args.iter().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--datadir" => {
                let a = iter.next().ok_or("missing arg to --datadir")?;
                res.push(Arg::DatadirPath(SignupDirectory::new(PathBuf::from(a))));
            }
            "--api-url" => {
                let a = iter.next().ok_or("missing arg to --api-url")?;
                res.push(Arg::ApiUrl(a.clone()));
            }
            a => return Err(format!("unknown argument {}", a).into()),
        }
    }

    Ok(res)
}

/// Data directory and backend URL override selected on the command line.
#[derive(Debug, Clone, PartialEq)]
pub struct Options {
    pub datadir: SignupDirectory,
    pub api_url: Option<String>,
}

pub fn args_to_options(args: &[Arg]) -> Result<Options, Box<dyn Error>> {
    let mut datadir = None;
    let mut api_url = None;
    for arg in args {
        match arg {
            Arg::DatadirPath(d) => {
                if datadir.replace(d.clone()).is_some() {
                    return Err("--datadir given twice".into());
                }
            }
            Arg::ApiUrl(u) => {
                if api_url.replace(u.clone()).is_some() {
                    return Err("--api-url given twice".into());
                }
            }
        }
    }
    let datadir = match datadir {
        Some(d) => d,
        None => SignupDirectory::new_default()?,
    };
    Ok(Options { datadir, api_url })
}
