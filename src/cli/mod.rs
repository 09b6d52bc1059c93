//! CLI command definitions and handlers

pub mod config;
pub mod handlers;
pub mod output;

use clap::{ArgAction, Args, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use output::OutputFormat;

/// glacier - categorized notes with rich-text content
#[derive(Parser, Debug)]
#[command(name = "glacier", version, about, long_about = None)]
pub struct Cli {
    /// Notes database file (overrides config file)
    #[arg(long, global = true)]
    pub db: Option<PathBuf>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Manage categories
    #[command(subcommand)]
    Category(CategoryCommand),

    /// Manage notes
    #[command(subcommand)]
    Note(NoteCommand),

    /// Show every category with its notes
    Tree(TreeArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

// ===========================================
// category
// ===========================================

#[derive(Subcommand, Debug)]
pub enum CategoryCommand {
    /// List categories by name
    #[command(name = "ls")]
    List(CategoryListArgs),

    /// Create a category
    Add(CategoryAddArgs),

    /// Rename a category
    Rename(CategoryRenameArgs),

    /// Delete a category and all of its notes
    #[command(name = "rm")]
    Remove(CategoryRemoveArgs),
}

/// Arguments for `category ls`
#[derive(Args, Debug)]
pub struct CategoryListArgs {
    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for `category add`
#[derive(Args, Debug)]
pub struct CategoryAddArgs {
    /// Category name (must be unique)
    pub name: String,
}

/// Arguments for `category rename`
#[derive(Args, Debug)]
pub struct CategoryRenameArgs {
    /// Category ID or name
    pub category: String,

    /// New name
    pub new_name: String,
}

/// Arguments for `category rm`
#[derive(Args, Debug)]
pub struct CategoryRemoveArgs {
    /// Category ID or name
    pub category: String,

    /// Confirm deletion of the category and its notes
    #[arg(short, long)]
    pub yes: bool,
}

// ===========================================
// note
// ===========================================

#[derive(Subcommand, Debug)]
pub enum NoteCommand {
    /// List the notes of a category, most recently updated first
    #[command(name = "ls")]
    List(NoteListArgs),

    /// Show a note
    Show(NoteShowArgs),

    /// Create a note
    New(NoteNewArgs),

    /// Change a note's title and/or content
    Edit(NoteEditArgs),

    /// Delete a note
    #[command(name = "rm")]
    Remove(NoteRemoveArgs),
}

/// Arguments for `note ls`
#[derive(Args, Debug)]
pub struct NoteListArgs {
    /// Category ID or name
    pub category: String,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for `note show`
#[derive(Args, Debug)]
pub struct NoteShowArgs {
    /// Note ID
    pub id: String,

    /// Print rich-text content as stored instead of rendering it
    #[arg(long)]
    pub raw: bool,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Where new note content comes from.
#[derive(Args, Debug, Default)]
#[group(multiple = false)]
pub struct ContentArgs {
    /// Note content (plain text or an HTML document)
    #[arg(long)]
    pub content: Option<String>,

    /// Read note content from a file
    #[arg(long, value_name = "PATH")]
    pub content_file: Option<PathBuf>,
}

/// Arguments for `note new`
#[derive(Args, Debug)]
pub struct NoteNewArgs {
    /// Category ID or name
    pub category: String,

    /// Note title
    pub title: String,

    #[command(flatten)]
    pub content: ContentArgs,
}

/// Arguments for `note edit`
#[derive(Args, Debug)]
pub struct NoteEditArgs {
    /// Note ID
    pub id: String,

    /// New title
    #[arg(long)]
    pub title: Option<String>,

    #[command(flatten)]
    pub content: ContentArgs,
}

/// Arguments for `note rm`
#[derive(Args, Debug)]
pub struct NoteRemoveArgs {
    /// Note ID
    pub id: String,
}

// ===========================================
// tree / completions
// ===========================================

/// Arguments for the `tree` command
#[derive(Args, Debug)]
pub struct TreeArgs {
    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the `completions` command
#[derive(Args, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for (bash, zsh, fish)
    #[arg(value_enum)]
    pub shell: Shell,
}
