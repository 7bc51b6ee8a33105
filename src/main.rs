use anyhow::Result;
use clap::{CommandFactory, Parser};
use clap_complete::{Generator, generate};
use colored::Colorize;
use dirdiff::cli::Cli;
use dirdiff::output::{self, Verbosity};
use dirdiff::{DirdiffContext, commands};
use std::io;
use std::process;
use tracing_subscriber::EnvFilter;

fn main() {
    if let Err(e) = run() {
        eprintln!("{} {}", "Error:".red().bold(), e);
        process::exit(1);
    }
}

fn run() -> Result<()> {
    // Usage errors exit with status 1 instead of clap's default 2;
    // --help and --version keep status 0.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            process::exit(if e.use_stderr() { 1 } else { 0 });
        }
    };

    init_tracing(cli.verbose);
    if cli.quiet {
        output::set_verbosity(Verbosity::Quiet);
    } else if cli.verbose {
        output::set_verbosity(Verbosity::Verbose);
    }

    if let Some(shell) = cli.completions {
        print_completions(shell, &mut Cli::command());
        return Ok(());
    }

    let (Some(dir_a), Some(dir_b)) = (&cli.dir_a, &cli.dir_b) else {
        anyhow::bail!("Usage: dirdiff <dir-a> <dir-b>");
    };

    let mut ctx = DirdiffContext::new()?;
    if let Some(cmd) = cli.diff_cmd {
        ctx.config.diff.command = Some(cmd);
    }

    commands::compare::execute(&ctx, dir_a, dir_b, cli.brief)
}

/// Install the tracing subscriber, writing to stderr so the report on stdout
/// stays clean. `--verbose` raises the crate's log level to debug.
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("dirdiff=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn print_completions<G: Generator>(g: G, cmd: &mut clap::Command) {
    generate(g, cmd, cmd.get_name().to_string(), &mut io::stdout());
}
