//! `tree` command handler.

use anyhow::{Context, Result};

use crate::cli::TreeArgs;
use crate::cli::output::{CategoryListing, NoteListing, OutputFormat, print_json};
use crate::repo::NoteRepository;
use crate::store::Store;

pub fn handle_tree(args: &TreeArgs, store: &Store) -> Result<()> {
    let outline = NoteRepository::new(store)
        .outline()
        .context("failed to load categories and notes")?;

    match args.format {
        OutputFormat::Human => {
            if outline.is_empty() {
                println!("No categories found.");
            }
            for (category, notes) in &outline {
                println!("{} ({})", category.name(), category.id());
                for note in notes {
                    println!("  {:>6}  {}", note.id(), note.title());
                }
            }
        }
        OutputFormat::Json => {
            let listings: Vec<CategoryListing> = outline
                .iter()
                .map(|(category, notes)| CategoryListing {
                    notes: Some(notes.iter().map(NoteListing::from).collect()),
                    ..CategoryListing::from(category)
                })
                .collect();
            print_json(listings)?;
        }
    }
    Ok(())
}
