use std::io::{self, Read};

use crate::api::validation::{
    validate_new_note, validate_note_update, CreateNoteRequest, UpdateNoteRequest,
};
use crate::api::{self, build_service};
use crate::config::Config;
use crate::entity::Note;
use crate::error::{NotesError, Result};
use crate::service::SortKey;

use super::Cli;

/// Environment first, then command-line flags on top.
pub fn resolve_config(cli: &Cli) -> Config {
    let mut config = Config::from_env();
    if let Some(ref path) = cli.data_file {
        config = config.with_data_file(path);
    }
    if cli.strict {
        config = config.strict();
    }
    config
}

fn short_id(note: &Note) -> String {
    note.id.to_string()[..8].to_string()
}

fn read_stdin() -> Result<String> {
    let mut content = String::new();
    io::stdin().read_to_string(&mut content)?;
    Ok(content)
}

pub fn handle_serve(config: Config, bind: Option<String>) -> Result<()> {
    let config = match bind {
        Some(bind) => config.with_bind(bind),
        None => config,
    };

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    runtime.block_on(api::serve(&config))
}

pub fn handle_add(
    config: &Config,
    title: String,
    content: Option<String>,
    stdin: bool,
    json: bool,
) -> Result<()> {
    let content = if stdin { Some(read_stdin()?) } else { content };
    let payload = validate_new_note(CreateNoteRequest {
        title: Some(title),
        content,
    })?;

    let note = build_service(config).create(payload)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&note)?);
    } else {
        println!("Created note ({}) - {}", short_id(&note), note.title);
    }

    Ok(())
}

pub fn handle_list(config: &Config, sort: Option<String>, json: bool) -> Result<()> {
    let key = SortKey::parse_optional(sort.as_deref());
    if key.is_none() {
        if let Some(ref unknown) = sort {
            tracing::warn!(sort = %unknown, "unknown sort key, keeping storage order");
        }
    }

    let notes = build_service(config).find_all(key)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&notes)?);
    } else if notes.is_empty() {
        println!("No notes found.");
    } else {
        println!("Notes:\n");
        for n in notes {
            println!(
                "  ({}) {}  [updated {}]",
                &n.id.to_string()[..8],
                n.title,
                n.updated_at.format("%Y-%m-%d %H:%M")
            );
        }
    }

    Ok(())
}

pub fn handle_get(config: &Config, id: String, json: bool) -> Result<()> {
    let note = build_service(config).find_one(&id)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&note)?);
    } else {
        println!("{}", note.title);
        println!("  id:      {}", note.id);
        println!("  created: {}", note.created_at.to_rfc3339());
        println!("  updated: {}", note.updated_at.to_rfc3339());
        println!();
        println!("{}", note.content);
    }

    Ok(())
}

pub fn handle_update(
    config: &Config,
    id: String,
    title: Option<String>,
    content: Option<String>,
    stdin: bool,
    json: bool,
) -> Result<()> {
    let content = if stdin { Some(read_stdin()?) } else { content };
    let update = validate_note_update(UpdateNoteRequest { title, content })?;

    let note = build_service(config).update(&id, update)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&note)?);
    } else {
        println!("Updated note ({}) - {}", short_id(&note), note.title);
    }

    Ok(())
}

pub fn handle_delete(config: &Config, ids: Vec<String>) -> Result<()> {
    let service = build_service(config);

    if let [id] = ids.as_slice() {
        if !service.remove(id)? {
            return Err(NotesError::NotFound(id.clone()));
        }
        println!("Deleted note {}", id);
        return Ok(());
    }

    if service.remove_many(&ids)? {
        println!("Deleted matching notes");
        Ok(())
    } else {
        Err(NotesError::NotFound(ids.join(", ")))
    }
}
