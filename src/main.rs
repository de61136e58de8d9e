use std::process::ExitCode;

use clap::Parser;

/// Install Git hook scripts into the current project.
///
/// Copies the bundled hook templates into `.git/hooks` and, when hook
/// commands are configured, offers to register them in the project's
/// composer.json manifest.
#[derive(Debug, Parser)]
#[command(name = "githookd", version, about)]
struct Cli {}

fn main() -> ExitCode {
    let _cli = Cli::parse();

    let report = githookd::run();
    if report.failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
