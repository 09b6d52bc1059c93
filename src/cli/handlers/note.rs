//! `note` command handlers.

use anyhow::{Context, Result};

use super::{parse_note_id, read_content, resolve_category, truncate_str};
use crate::cli::output::{NoteDetail, NoteListing, OutputFormat, print_json};
use crate::cli::{
    NoteCommand, NoteEditArgs, NoteListArgs, NoteNewArgs, NoteRemoveArgs, NoteShowArgs,
};
use crate::domain::{NoteTitle, NoteUpdate, to_plain_text};
use crate::repo::{CategoryRepository, NoteRepository};
use crate::store::Store;

pub fn handle_note(command: &NoteCommand, store: &Store) -> Result<()> {
    match command {
        NoteCommand::List(args) => list(args, store),
        NoteCommand::Show(args) => show(args, store),
        NoteCommand::New(args) => new(args, store),
        NoteCommand::Edit(args) => edit(args, store),
        NoteCommand::Remove(args) => remove(args, store),
    }
}

fn list(args: &NoteListArgs, store: &Store) -> Result<()> {
    let category = resolve_category(&CategoryRepository::new(store), &args.category)?;
    let notes = NoteRepository::new(store)
        .list_by_category(category.id())
        .with_context(|| format!("failed to list notes in '{}'", category.name()))?;

    match args.format {
        OutputFormat::Human => {
            if notes.is_empty() {
                println!("No notes in '{}'.", category.name());
            } else {
                println!("{:>6}  {}", "ID", "Title");
                println!("{:>6}  {}", "------", "-".repeat(50));
                for note in &notes {
                    println!("{:>6}  {}", note.id(), truncate_str(note.title(), 50));
                }
            }
        }
        OutputFormat::Json => {
            let listings: Vec<NoteListing> = notes.iter().map(NoteListing::from).collect();
            print_json(listings)?;
        }
    }
    Ok(())
}

fn show(args: &NoteShowArgs, store: &Store) -> Result<()> {
    let id = parse_note_id(&args.id)?;
    let note = NoteRepository::new(store).get_by_id(id)?;

    match args.format {
        OutputFormat::Human => {
            let category = CategoryRepository::new(store)
                .get(note.category_id())
                .context("failed to load note category")?;

            println!("{}", note.title());
            println!("category: {}", category.name());
            println!("updated:  {}", note.updated_at());
            println!("format:   {}", note.format());
            println!();
            if args.raw {
                println!("{}", note.content());
            } else {
                println!("{}", to_plain_text(note.content()));
            }
        }
        OutputFormat::Json => print_json(NoteDetail::from(&note))?,
    }
    Ok(())
}

fn new(args: &NoteNewArgs, store: &Store) -> Result<()> {
    let title = NoteTitle::new(&args.title)?;
    let category = resolve_category(&CategoryRepository::new(store), &args.category)?;
    let content = read_content(&args.content)?.unwrap_or_default();

    let id = NoteRepository::new(store)
        .add_with_content(category.id(), &title, &content)
        .context("failed to add note")?;

    println!("Created note {} in '{}': {}", id, category.name(), title);
    Ok(())
}

fn edit(args: &NoteEditArgs, store: &Store) -> Result<()> {
    let id = parse_note_id(&args.id)?;
    let update = NoteUpdate {
        title: args.title.as_deref().map(NoteTitle::new).transpose()?.into(),
        content: read_content(&args.content)?.into(),
    };

    if update.is_empty() {
        println!("Nothing to change.");
        return Ok(());
    }

    NoteRepository::new(store).update(id, &update)?;
    println!("Updated note {}", id);
    Ok(())
}

fn remove(args: &NoteRemoveArgs, store: &Store) -> Result<()> {
    let id = parse_note_id(&args.id)?;
    NoteRepository::new(store).delete(id)?;
    println!("Deleted note {}", id);
    Ok(())
}
