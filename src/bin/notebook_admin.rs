// src/bin/notebook_admin.rs
//! Notebook maintenance from the command line — create, verify, list,
//! seed, rekey, version

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use ciphernote::consts::ROOT_ID;
use ciphernote::{load_config, NotebookStore};
use log::info;
use rpassword::read_password;

fn main() -> Result<()> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let command = args.next().unwrap_or_else(|| "help".to_string());
    let db_path = args
        .next()
        .map(PathBuf::from)
        .unwrap_or_else(|| load_config().paths.database.clone());

    match command.as_str() {
        "create" => {
            let password = prompt_password("New master password: ")?;
            NotebookStore::create(&db_path, &password)
                .with_context(|| format!("cannot create notebook at {}", db_path.display()))?;
            println!("Created {}", db_path.display());
        }
        "verify" => {
            let mut store = open(&db_path)?;
            let password = prompt_password("Master password: ")?;
            if store.verify_password(&password)? {
                println!("Password accepted");
            } else {
                bail!("wrong password");
            }
        }
        "list" => {
            let store = unlock(&db_path)?;
            print_tree(&store, ROOT_ID, 0)?;
        }
        "seed" => {
            let store = unlock(&db_path)?;
            store.seed_demo_data()?;
            println!("Seeded demo folders");
        }
        "rekey" => {
            let mut store = unlock(&db_path)?;
            let new_password = prompt_password("New master password: ")?;
            if store.change_password(&new_password)? {
                println!("Password changed");
            } else {
                bail!("password change failed, notebook unchanged");
            }
        }
        "version" => {
            let store = open(&db_path)?;
            println!("{}", store.schema_version()?);
        }
        _ => {
            eprintln!("usage: notebook-admin <create|verify|list|seed|rekey|version> [db-path]");
        }
    }

    Ok(())
}

fn open(path: &Path) -> Result<NotebookStore> {
    NotebookStore::open(path)
        .with_context(|| format!("cannot open notebook at {}", path.display()))
}

fn unlock(path: &Path) -> Result<NotebookStore> {
    let mut store = open(path)?;
    let password = prompt_password("Master password: ")?;
    if !store.verify_password(&password)? {
        bail!("wrong password");
    }
    info!("notebook unlocked");
    Ok(store)
}

fn prompt_password(prompt: &str) -> Result<String> {
    print!("{prompt}");
    std::io::stdout().flush()?;
    Ok(read_password()?.trim_end().to_owned())
}

fn print_tree(store: &NotebookStore, parent_id: u64, depth: usize) -> Result<()> {
    for folder in store.list_folders(parent_id)? {
        println!("{}{}", "  ".repeat(depth), folder.name);
        if let Some(note) = store.note_by_folder(folder.id)? {
            println!(
                "{}[note, edited {}]",
                "  ".repeat(depth + 1),
                note.last_edited_at
            );
        }
        print_tree(store, folder.id, depth + 1)?;
    }
    Ok(())
}
