//! # primordial-demo
//!
//! Raises a file-not-found error and catches it, first by its concrete
//! exception type and then by the base exception type.
//!
//! Usage:
//!   primordial-demo [path]
//!   primordial-demo --probe <path>
//!   primordial-demo --json [path]
//!
//! Examples:
//!   primordial-demo                  # always raises for README.md
//!   primordial-demo --probe Cargo.toml
//!   primordial-demo --json missing.txt

use clap::Parser;
use primordial_errors::{
    error_position, Exception, FileNotFoundError, FileNotFoundErrorException, Raise,
};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "primordial-demo")]
#[command(author, version, about = "Raise and catch a file-not-found error")]
struct Cli {
    /// Path reported in the raised error
    #[arg(default_value = "README.md")]
    path: PathBuf,

    /// Only raise when the path does not exist
    #[arg(short, long)]
    probe: bool,

    /// Print the caught error as JSON
    #[arg(short, long)]
    json: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let result = run(&cli.path, cli.probe);
    finish(result, cli.json, &mut io::stderr())
}

fn run(path: &Path, probe: bool) -> primordial_errors::Result<()> {
    if probe && path.exists() {
        println!("found `{}`", path.display());
        return Ok(());
    }
    FileNotFoundError::new(error_position!(), path).raise()
}

/// Map the outcome to an exit code, reporting a caught exception to `out`.
fn finish(result: primordial_errors::Result<()>, json: bool, out: &mut impl Write) -> ExitCode {
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(exception) => {
            // nowhere left to report a failed write to stderr
            let _ = handle(exception, json, out);
            ExitCode::FAILURE
        }
    }
}

/// Handlers are tried in order; the first one whose type matches wins.
fn handle(exception: Exception, json: bool, out: &mut impl Write) -> io::Result<()> {
    let exception = match exception.catch::<FileNotFoundErrorException>() {
        Ok(ex) if json => return print_json(&Exception::from(ex), out),
        Ok(ex) => return writeln!(out, "file_not_found_error_exception: {}", ex),
        Err(other) => other,
    };

    if json {
        print_json(&exception, out)
    } else {
        writeln!(out, "exception: {}", exception)
    }
}

fn print_json(exception: &Exception, out: &mut impl Write) -> io::Result<()> {
    match serde_json::to_string_pretty(&exception.report()) {
        Ok(json) => writeln!(out, "{}", json),
        Err(e) => writeln!(out, "exception: {} (report unavailable: {})", exception, e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use primordial_errors::{ErrorPosition, PermissionDeniedError};

    #[test]
    fn test_run_raises_for_missing_path() {
        let exception = run(Path::new("README.md"), false).unwrap_err();
        assert!(exception.is::<FileNotFoundError>());
        assert!(exception.message().ends_with("file `README.md` not found"));
        assert_eq!(exception.position().file(), file!());
    }

    #[test]
    fn test_probe_succeeds_for_existing_path() {
        let manifest = Path::new(env!("CARGO_MANIFEST_DIR")).join("Cargo.toml");
        assert!(run(&manifest, true).is_ok());
    }

    #[test]
    fn test_probe_raises_for_missing_path() {
        let missing = Path::new(env!("CARGO_MANIFEST_DIR")).join("no-such-file.txt");
        let exception = run(&missing, true).unwrap_err();
        assert!(exception.catch::<FileNotFoundErrorException>().is_ok());
    }

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::parse_from(["primordial-demo"]);
        assert_eq!(cli.path, PathBuf::from("README.md"));
        assert!(!cli.probe);
        assert!(!cli.json);
    }

    fn captured(exception: Exception, json: bool) -> String {
        let mut out = Vec::new();
        handle(exception, json, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_concrete_handler_line() {
        let exception = run(Path::new("README.md"), false).unwrap_err();
        let output = captured(exception, false);

        assert!(output.starts_with("file_not_found_error_exception: file: "));
        assert!(output.ends_with("file `README.md` not found\n"));
    }

    #[test]
    fn test_base_handler_line() {
        let exception = PermissionDeniedError::new(ErrorPosition::new("loader.rs", 12), "secret.key")
            .raise::<()>()
            .unwrap_err();

        assert_eq!(
            captured(exception, false),
            "exception: file: loader.rs,line:12: permission to access `secret.key` denied\n"
        );
    }

    #[test]
    fn test_json_report_fields() {
        let exception = FileNotFoundError::new(ErrorPosition::new("example.cpp", 108), "README.md")
            .raise::<()>()
            .unwrap_err();
        let json: serde_json::Value = serde_json::from_str(&captured(exception, true)).unwrap();

        assert_eq!(json["kind"], "FileNotFound");
        assert_eq!(
            json["message"],
            "file: example.cpp,line:108: file `README.md` not found"
        );
    }

    #[test]
    fn test_exit_codes() {
        let mut out = Vec::new();
        assert_eq!(finish(Ok(()), false, &mut out), ExitCode::SUCCESS);
        assert!(out.is_empty());

        let failed = run(Path::new("README.md"), false);
        assert_eq!(finish(failed, false, &mut out), ExitCode::FAILURE);
        assert!(!out.is_empty());
    }
}
