//! `category` command handlers.

use anyhow::{Context, Result, bail};

use super::{resolve_category, truncate_str};
use crate::cli::output::{CategoryListing, OutputFormat, print_json};
use crate::cli::{
    CategoryAddArgs, CategoryCommand, CategoryListArgs, CategoryRemoveArgs, CategoryRenameArgs,
};
use crate::domain::CategoryName;
use crate::repo::{CategoryRepository, NoteRepository};
use crate::store::Store;

pub fn handle_category(command: &CategoryCommand, store: &Store) -> Result<()> {
    match command {
        CategoryCommand::List(args) => list(args, store),
        CategoryCommand::Add(args) => add(args, store),
        CategoryCommand::Rename(args) => rename(args, store),
        CategoryCommand::Remove(args) => remove(args, store),
    }
}

fn list(args: &CategoryListArgs, store: &Store) -> Result<()> {
    let categories = CategoryRepository::new(store)
        .list_all()
        .context("failed to list categories")?;

    match args.format {
        OutputFormat::Human => {
            if categories.is_empty() {
                println!("No categories found.");
            } else {
                println!("{:>6}  {}", "ID", "Name");
                println!("{:>6}  {}", "------", "-".repeat(40));
                for category in &categories {
                    println!("{:>6}  {}", category.id(), truncate_str(category.name(), 40));
                }
            }
        }
        OutputFormat::Json => {
            let listings: Vec<CategoryListing> =
                categories.iter().map(CategoryListing::from).collect();
            print_json(listings)?;
        }
    }
    Ok(())
}

fn add(args: &CategoryAddArgs, store: &Store) -> Result<()> {
    let name = CategoryName::new(&args.name)?;
    let categories = CategoryRepository::new(store);

    let id = match categories.add(&name) {
        Ok(id) => id,
        Err(e) if e.is_constraint() => bail!("category already exists: {}", name),
        Err(e) => return Err(e).context("failed to add category"),
    };

    println!("Created category {} ({})", name, id);
    Ok(())
}

fn rename(args: &CategoryRenameArgs, store: &Store) -> Result<()> {
    let new_name = CategoryName::new(&args.new_name)?;
    let categories = CategoryRepository::new(store);
    let category = resolve_category(&categories, &args.category)?;

    match categories.rename(category.id(), &new_name) {
        Ok(()) => {}
        Err(e) if e.is_constraint() => bail!("category already exists: {}", new_name),
        Err(e) => return Err(e).context("failed to rename category"),
    }

    println!("Renamed category '{}' to '{}'", category.name(), new_name);
    Ok(())
}

fn remove(args: &CategoryRemoveArgs, store: &Store) -> Result<()> {
    let categories = CategoryRepository::new(store);
    let category = resolve_category(&categories, &args.category)?;

    if !args.yes {
        let note_count = NoteRepository::new(store)
            .list_by_category(category.id())
            .context("failed to count notes")?
            .len();
        bail!(
            "deleting category '{}' also deletes its {} note(s); re-run with --yes to confirm",
            category.name(),
            note_count
        );
    }

    let removed = categories
        .delete(category.id())
        .with_context(|| format!("failed to delete category '{}'", category.name()))?;

    println!(
        "Deleted category '{}' and {} note(s)",
        category.name(),
        removed
    );
    Ok(())
}
