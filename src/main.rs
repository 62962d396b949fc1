use std::path::PathBuf;

use anyhow::{anyhow, bail, Context};
use clap::Parser;

use vibenotes::cli::{Cli, Command};
use vibenotes::config::Config;
use vibenotes::export::export_markdown;
use vibenotes::logging::init_tracing;
use vibenotes::model::NotePatch;
use vibenotes::storage::{JsonFileStorage, MemoryStorage, Persistence};
use vibenotes::store::NotesStore;
use vibenotes::ui::{self, App};

fn main() -> anyhow::Result<()> {
    let Cli {
        config,
        data,
        ephemeral,
        command,
    } = Cli::parse();
    init_tracing();

    let config = match &config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .context("Failed to load configuration")?;

    let storage_path = data.unwrap_or_else(|| config.storage_path());
    let options = config.storage.persist_options();
    let persistence = if ephemeral {
        Persistence::with_options(MemoryStorage::new(), options)
    } else {
        Persistence::with_options(JsonFileStorage::new(storage_path.clone()), options)
    };
    let mut store = NotesStore::open(persistence);

    let Some(command) = command else {
        let app = App::new(store, config.autosave_debounce(), config.export_dir());
        ui::run(app, config.tick_rate()).context("Terminal UI failed")?;
        return Ok(());
    };

    match command {
        Command::List {
            folder,
            uncategorized,
            search,
        } => {
            if let Some(id) = &folder {
                ensure_folder(&store, id)?;
            }
            let mut view = store.state().clone();
            view.active_folder_id = folder;
            view.search_query = search.unwrap_or_default();
            let mut notes = view.filtered_notes();
            if uncategorized {
                notes.retain(|note| note.folder_id.is_none());
            }
            for note in notes {
                let folder = note
                    .folder_id
                    .as_deref()
                    .and_then(|id| view.folder(id))
                    .map(|folder| folder.name.as_str())
                    .unwrap_or("-");
                println!(
                    "{}\t{}\t{}\t{}",
                    note.id,
                    note.updated_at.format("%Y-%m-%d %H:%M"),
                    folder,
                    note.title
                );
            }
        }
        Command::Folders => {
            let state = store.state();
            for folder in &state.folders {
                println!(
                    "{}\t{}\t{}\t{}",
                    folder.id,
                    folder.color,
                    state.folder_note_count(Some(&folder.id)),
                    folder.name
                );
            }
            println!("-\t-\t{}\tUncategorized", state.folder_note_count(None));
        }
        Command::New {
            title,
            folder,
            content,
        } => {
            if let Some(id) = &folder {
                ensure_folder(&store, id)?;
            }
            let note = store.create_note(folder.as_deref());
            let mut patch = NotePatch::default();
            if let Some(title) = title {
                patch = patch.with_title(title);
            }
            if let Some(content) = content {
                patch = patch.with_content(content);
            }
            if !patch.is_empty() {
                store.update_note(&note.id, patch);
            }
            ensure_saved(&store)?;
            println!("{}", note.id);
        }
        Command::NewFolder { name, color } => {
            let name = name.trim();
            if name.is_empty() {
                bail!("Folder name must not be empty");
            }
            let folder = store.create_folder(name, color.as_deref());
            ensure_saved(&store)?;
            println!("{}", folder.id);
        }
        Command::Export { id, out } => {
            let note = store
                .state()
                .note(&id)
                .ok_or_else(|| anyhow!("Note '{}' not found", id))?;
            let dir: PathBuf = out.unwrap_or_else(|| config.export_dir());
            let path = export_markdown(note, &dir)?;
            println!("{}", path.display());
        }
        Command::Path => {
            if ephemeral {
                println!("(in memory)");
            } else {
                println!("{}", storage_path.display());
            }
        }
    }

    Ok(())
}

fn ensure_folder(store: &NotesStore, id: &str) -> anyhow::Result<()> {
    if !store.state().has_folder(id) {
        bail!("Folder '{}' not found", id);
    }
    Ok(())
}

fn ensure_saved(store: &NotesStore) -> anyhow::Result<()> {
    match store.last_persist_error() {
        Some(err) => Err(anyhow!("Failed to save notes: {}", err)),
        None => Ok(()),
    }
}
