use anyhow::{Context as _, Result};
use clap::Parser;
use colored::Colorize;

use simmer::cli::args::{Cli, Commands};
use simmer::cli::commands::{self, Context};
use simmer::config::Paths;
use simmer::error::SimmerError;
use simmer::logging;

fn main() {
    if let Err(e) = run() {
        if !e
            .downcast_ref::<SimmerError>()
            .is_some_and(SimmerError::is_user_error)
        {
            tracing::error!(error = %e, "Command failed");
        }
        eprintln!("{}: {:#}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    // The terminal UI owns the screen, so it logs to a file.
    let paths = Paths::resolve(cli.data_dir.clone())?;
    match &cli.command {
        Commands::Cook(args) if !args.headless => {
            paths.ensure_dirs()?;
            logging::init_file(&paths.log_file, cli.verbose);
        }
        _ => logging::init_stderr(cli.verbose),
    }

    let ctx = Context::load(cli.data_dir, cli.output).context("Failed to load simmer data")?;
    ctx.config.general.color.apply();

    let output = match cli.command {
        Commands::List(args) => commands::list(&ctx, &args)?,
        Commands::Show { id } => commands::show(&ctx, &id)?,
        Commands::Add(args) => commands::add(&ctx, &args.file)
            .with_context(|| format!("Failed to add recipe from {}", args.file.display()))?,
        Commands::Favorite { id, set } => commands::favorite(&ctx, &id, set)?,
        Commands::Cook(args) => commands::cook(&ctx, &args)?,
        Commands::Completions { shell } => {
            commands::completions(shell);
            String::new()
        }
    };

    if !output.is_empty() {
        println!("{output}");
    }
    Ok(())
}
