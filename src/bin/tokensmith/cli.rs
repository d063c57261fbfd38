//! CLI definitions using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

/// tokensmith - typed symbols for asset catalog colors and images
#[derive(Parser)]
#[command(name = "tokensmith")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Project config file
    #[arg(long, global = true, default_value = "tokensmith.toml", env = "TOKENSMITH_CONFIG")]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate source constants from a manifest or asset catalog
    Generate(GenerateArgs),

    /// Check that every symbol has an asset in the bundle
    Verify(VerifyArgs),

    /// Resolve one asset for an appearance
    Resolve(ResolveArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[derive(Args)]
pub struct GenerateArgs {
    /// Token manifest (.toml) or asset catalog (.xcassets)
    #[arg(short, long)]
    pub manifest: Option<PathBuf>,

    /// Generated source file
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Output syntax (objc, swift, rust)
    #[arg(short, long)]
    pub target: Option<String>,

    /// Prefix for generated identifiers
    #[arg(long)]
    pub namespace: Option<String>,

    /// Bundle identifier written into the generated file
    #[arg(long)]
    pub bundle_id: Option<String>,

    /// Emit this asset with public visibility (repeatable)
    #[arg(long = "public", value_name = "NAME")]
    pub public: Vec<String>,

    /// Fail if the output is out of date instead of writing it
    #[arg(long)]
    pub check: bool,
}

#[derive(Args)]
pub struct VerifyArgs {
    /// Token manifest (.toml) or asset catalog (.xcassets)
    #[arg(short, long)]
    pub manifest: Option<PathBuf>,

    /// Asset catalog to check against
    #[arg(short, long)]
    pub bundle: Option<PathBuf>,

    /// Bundle identifier (selects the catalog from `[bundles]`)
    #[arg(long)]
    pub bundle_id: Option<String>,

    /// Also fail on assets that have no symbol
    #[arg(long)]
    pub strict: bool,

    /// Output format (human, json)
    #[arg(long, default_value = "human")]
    pub output_format: String,
}

#[derive(Args)]
pub struct ResolveArgs {
    /// Asset name, e.g. `Amber`
    pub name: String,

    /// Asset category (color, image)
    #[arg(short, long, default_value = "color")]
    pub category: String,

    /// Asset catalog to resolve against
    #[arg(short, long)]
    pub bundle: Option<PathBuf>,

    /// Bundle identifier (selects the catalog from `[bundles]`)
    #[arg(long)]
    pub bundle_id: Option<String>,

    /// Resolve for the dark appearance
    #[arg(long)]
    pub dark: bool,

    /// Resolve for increased contrast
    #[arg(long)]
    pub high_contrast: bool,

    /// Print the resolved handle as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: Shell,
}
