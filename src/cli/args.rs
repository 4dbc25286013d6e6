use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use serde::{Deserialize, Serialize};

use crate::recipes::{Difficulty, SortOrder};

#[derive(Parser)]
#[command(name = "simmer")]
#[command(about = "A terminal recipe manager with guided cooking sessions")]
#[command(long_about = "simmer - recipes and guided cooking in your terminal

Keep a catalog of recipes (ingredients and ordered steps), browse and filter
them, and cook along with a step-by-step countdown that moves on by itself
when each step's time is up.

QUICK START:
  simmer add --file soup.yaml     Add a recipe from a YAML file
  simmer list                     Show all recipes, quickest first
  simmer cook                     Open the interactive cooking screen
  simmer cook <id> --headless     Cook a recipe with plain terminal output

OUTPUT FORMATS:
  --output pretty    Human-readable colored output (default)
  --output json      Machine-readable JSON for scripting")]
#[command(version, propagate_version = true)]
pub struct Cli {
    /// Output format for command results
    ///
    /// Defaults to the `general.default_output` config setting.
    #[arg(short, long, value_enum, global = true)]
    pub output: Option<OutputFormat>,

    /// Directory holding the config file and recipe catalog
    #[arg(long, env = "SIMMER_HOME", global = true, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for command results.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable colored output.
    #[default]
    Pretty,
    /// Machine-readable JSON output.
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List recipes
    ///
    /// Recipes are sorted by total cooking time, quickest first unless
    /// `--sort desc` is given.
    ///
    /// # Examples
    ///
    ///   simmer list
    ///   simmer list --difficulty easy --difficulty medium
    ///   simmer list --favorites --sort desc
    #[command(alias = "ls")]
    List(ListArgs),

    /// Show one recipe with its ingredients and steps
    Show {
        /// Recipe ID
        id: String,
    },

    /// Add a recipe from a YAML or JSON file
    ///
    /// # Example file
    ///
    ///   title: Tomato Soup
    ///   cuisine: Italian
    ///   difficulty: Easy
    ///   ingredients:
    ///     - { name: Tomato, quantity: 4, unit: pcs }
    ///   steps:
    ///     - description: Chop the tomatoes
    ///       durationMinutes: 3
    ///       ingredients: [Tomato]
    ///     - description: Simmer
    ///       type: cooking
    ///       durationMinutes: 15
    ///       temperature: 90
    ///       speed: 1
    Add(AddArgs),

    /// Star or unstar a recipe
    ///
    /// Without `--set`, flips the current flag.
    #[command(alias = "fav")]
    Favorite {
        /// Recipe ID
        id: String,

        /// Set the flag explicitly instead of toggling
        #[arg(long)]
        set: Option<bool>,
    },

    /// Run a guided cooking session
    ///
    /// Opens the interactive cooking screen. With a recipe ID the session
    /// starts right away.
    ///
    /// # Keys
    ///
    ///   Recipes:  j/k move | Enter open | c cook | f favorite | d difficulty | s sort
    ///             space pause/resume | x stop | q quit
    ///   Session:  c start | space pause/resume | n next step | x stop | f favorite | Esc back
    Cook(CookArgs),

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Args, Debug, Default)]
pub struct ListArgs {
    /// Only show these difficulties (repeatable)
    #[arg(short, long, value_enum)]
    pub difficulty: Vec<Difficulty>,

    /// Sort direction by total time
    #[arg(short, long, value_enum, default_value = "asc")]
    pub sort: SortOrder,

    /// Only show starred recipes
    #[arg(long)]
    pub favorites: bool,
}

#[derive(Args, Debug)]
pub struct AddArgs {
    /// Recipe file (YAML or JSON)
    #[arg(short, long, value_name = "PATH")]
    pub file: PathBuf,
}

#[derive(Args, Debug, Default)]
pub struct CookArgs {
    /// Recipe to start cooking
    pub id: Option<String>,

    /// Print progress to the terminal instead of opening the interactive screen
    #[arg(long, requires = "id")]
    pub headless: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_list_defaults() {
        let cli = Cli::try_parse_from(["simmer", "list"]).unwrap();
        if let Commands::List(args) = cli.command {
            assert!(args.difficulty.is_empty());
            assert_eq!(args.sort, SortOrder::Asc);
            assert!(!args.favorites);
        } else {
            panic!("Expected List command");
        }
        assert!(cli.output.is_none());
    }

    #[test]
    fn test_cli_list_filters() {
        let cli = Cli::try_parse_from([
            "simmer", "ls", "-d", "easy", "-d", "hard", "--sort", "desc", "--favorites",
        ])
        .unwrap();
        if let Commands::List(args) = cli.command {
            assert_eq!(args.difficulty, [Difficulty::Easy, Difficulty::Hard]);
            assert_eq!(args.sort, SortOrder::Desc);
            assert!(args.favorites);
        } else {
            panic!("Expected List command");
        }
    }

    #[test]
    fn test_cli_favorite_set() {
        let cli = Cli::try_parse_from(["simmer", "favorite", "abc", "--set", "false"]).unwrap();
        if let Commands::Favorite { id, set } = cli.command {
            assert_eq!(id, "abc");
            assert_eq!(set, Some(false));
        } else {
            panic!("Expected Favorite command");
        }
    }

    #[test]
    fn test_cli_cook_headless_requires_id() {
        assert!(Cli::try_parse_from(["simmer", "cook", "--headless"]).is_err());

        let cli = Cli::try_parse_from(["simmer", "cook", "r1", "--headless"]).unwrap();
        if let Commands::Cook(args) = cli.command {
            assert_eq!(args.id.as_deref(), Some("r1"));
            assert!(args.headless);
        } else {
            panic!("Expected Cook command");
        }
    }

    #[test]
    fn test_cli_global_flags() {
        let cli = Cli::try_parse_from([
            "simmer", "show", "r1", "-o", "json", "--data-dir", "/tmp/x", "-vv",
        ])
        .unwrap();
        assert_eq!(cli.output, Some(OutputFormat::Json));
        assert_eq!(cli.data_dir, Some(PathBuf::from("/tmp/x")));
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_output_format_default() {
        assert!(matches!(OutputFormat::default(), OutputFormat::Pretty));
    }
}
