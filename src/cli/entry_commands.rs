// src/cli/entry_commands.rs
use crate::cli::display::{write_details, write_table};
use crate::cli::error::{CliError, CliResult};
use crate::domain::entry::{BookmarkEntry, EntryDraft};
use crate::domain::query::{CategoryFilter, EntryQuery};
use crate::domain::sort::{SortDirection, SortKey, SortOrder};
use crate::infrastructure::di::ServiceContainer;
use crate::util::helper::{confirm, parse_tag_list};
use crossterm::style::Stylize;
use std::collections::HashSet;
use std::io::Write;
use termcolor::StandardStream;
use tracing::{debug, instrument};

/// Fields of `add` as given on the command line
#[derive(Debug, Default)]
pub struct AddArgs {
    pub url: String,
    pub title: Option<String>,
    pub category: Option<String>,
    pub tags: Option<String>,
    pub comment: Option<String>,
    pub no_web: bool,
}

/// Fields of `edit`; `None` keeps the stored value
#[derive(Debug, Default)]
pub struct EditArgs {
    pub url: Option<String>,
    pub title: Option<String>,
    pub category: Option<String>,
    pub tags: Option<String>,
    pub comment: Option<String>,
    pub fetch_title: bool,
}

/// Options of `list`
#[derive(Debug, Default)]
pub struct ListArgs {
    pub query: Option<String>,
    pub category: Option<String>,
    pub tags: Option<String>,
    pub sort: Option<String>,
    pub asc: bool,
    pub desc: bool,
    pub limit: Option<usize>,
    pub json: bool,
    pub ids_only: bool,
}

#[instrument(skip(services))]
pub fn add(services: &ServiceContainer, args: AddArgs) -> CliResult<()> {
    let config = services.vocabulary_service.get_config();
    let mut draft = EntryDraft::for_new(&config);
    draft.url = args.url;
    if let Some(title) = args.title {
        draft.title = title;
    }
    if let Some(category) = args.category {
        draft.category = category;
    }
    if let Some(tags) = args.tags {
        draft.tags = parse_tag_list(&tags);
    }
    if let Some(comment) = args.comment {
        draft.comment = comment;
    }

    let fetch_title = !args.no_web && draft.title.trim().is_empty();
    let entry = services.entry_service.add_entry(draft, !args.no_web)?;

    if fetch_title && entry.title.is_empty() {
        eprintln!("{}", "No title found, saved without one".yellow());
    }
    eprintln!("Added: {} ({})", entry.title.as_str().green(), entry.url);
    println!("{}", entry.id);
    Ok(())
}

#[instrument(skip(services))]
pub fn edit(services: &ServiceContainer, id: &str, args: EditArgs) -> CliResult<()> {
    let entry = services.entry_service.get_entry(id)?;
    let mut draft = EntryDraft::from_entry(&entry);

    if let Some(url) = args.url {
        draft.url = url;
    }
    if let Some(title) = args.title {
        draft.title = title;
    }
    if let Some(category) = args.category {
        draft.category = category;
    }
    if let Some(tags) = args.tags {
        draft.tags = parse_tag_list(&tags);
    }
    if let Some(comment) = args.comment {
        draft.comment = comment;
    }
    if args.fetch_title {
        let fetched = services.entry_service.fetch_title(&draft.url);
        if !draft.apply_fetched_title(&fetched) {
            eprintln!("{}", "No title found, keeping the current one".yellow());
        }
    }

    let updated = services.entry_service.edit_entry(&entry.id.to_string(), draft)?;
    eprintln!("Updated: {} ({})", updated.title.as_str().green(), updated.url);
    Ok(())
}

/// Resolves selectors to entries, each entry once, in first-mention order
fn resolve_distinct(services: &ServiceContainer, ids: &[String]) -> CliResult<Vec<BookmarkEntry>> {
    let mut seen = HashSet::new();
    let mut entries = Vec::with_capacity(ids.len());
    for id in ids {
        let entry = services.entry_service.get_entry(id)?;
        if seen.insert(entry.id) {
            entries.push(entry);
        }
    }
    Ok(entries)
}

#[instrument(skip(services))]
pub fn delete(services: &ServiceContainer, ids: &[String], yes: bool) -> CliResult<()> {
    let entries = resolve_distinct(services, ids)?;

    for entry in &entries {
        eprintln!("Deleting: {} ({})", entry.title, entry.url);
    }
    if !yes && !confirm("Confirm delete?") {
        eprintln!("Deletion cancelled");
        return Ok(());
    }

    for entry in entries {
        services.entry_service.delete_entry(&entry.id.to_string())?;
        eprintln!("Deleted: {}", entry.short_id());
    }
    Ok(())
}

/// Sort order from the command line, falling back to the saved view state
fn resolve_sort(args: &ListArgs, saved: SortOrder) -> CliResult<SortOrder> {
    let direction = if args.asc {
        Some(SortDirection::Ascending)
    } else if args.desc {
        Some(SortDirection::Descending)
    } else {
        None
    };

    match &args.sort {
        Some(column) => {
            let key: SortKey = column
                .parse()
                .map_err(|e| CliError::InvalidInput(format!("{}", e)))?;
            Ok(SortOrder::new(key, direction.unwrap_or(SortDirection::Ascending)))
        }
        None => Ok(SortOrder::new(saved.key, direction.unwrap_or(saved.direction))),
    }
}

#[instrument(skip(stderr, services))]
pub fn list(stderr: &mut StandardStream, services: &ServiceContainer, args: ListArgs) -> CliResult<()> {
    let sort = resolve_sort(&args, services.view_service.sort_order())?;

    let mut query = EntryQuery::new()
        .with_text(args.query.clone().unwrap_or_default())
        .with_category(CategoryFilter::parse(args.category.as_deref().unwrap_or("")))
        .with_tags(args.tags.as_deref().map(parse_tag_list).unwrap_or_default())
        .with_sort(sort);
    if let Some(limit) = args.limit {
        query = query.with_limit(limit);
    }
    debug!("Query: {:?}", query);

    let entries = services.entry_service.list_entries(&query)?;

    if args.json {
        let json = serde_json::to_string_pretty(&entries)
            .map_err(|e| CliError::CommandFailed(format!("Failed to serialize entries: {}", e)))?;
        println!("{}", json);
        return Ok(());
    }

    if args.ids_only {
        for entry in &entries {
            println!("{}", entry.id);
        }
        return Ok(());
    }

    if entries.is_empty() {
        eprintln!("No entries found");
        return Ok(());
    }

    let columns = services.view_service.columns();
    write_table(stderr, &entries, &columns, Some(sort))?;
    eprintln!("{} entries", entries.len());
    Ok(())
}

#[instrument(skip(stderr, services))]
pub fn show(stderr: &mut StandardStream, services: &ServiceContainer, ids: &[String]) -> CliResult<()> {
    for id in ids {
        let entry = services.entry_service.get_entry(id)?;
        write_details(stderr, &entry)?;
    }
    stderr.flush()?;
    Ok(())
}

/// Only web and file URLs are handed to the system opener
fn openable_url(raw: &str) -> CliResult<url::Url> {
    let parsed = url::Url::parse(raw.trim())
        .map_err(|e| CliError::InvalidInput(format!("Not a valid URL '{}': {}", raw, e)))?;
    match parsed.scheme() {
        "http" | "https" | "file" => Ok(parsed),
        other => Err(CliError::InvalidInput(format!(
            "Refusing to open URL with scheme '{}'",
            other
        ))),
    }
}

#[instrument(skip(services))]
pub fn open(services: &ServiceContainer, id: &str) -> CliResult<()> {
    let entry = services.entry_service.get_entry(id)?;
    let url = openable_url(&entry.url)?;
    open::that(url.as_str())
        .map_err(|e| CliError::CommandFailed(format!("Failed to open {}: {}", url, e)))?;
    eprintln!("Opened: {}", entry.url);
    Ok(())
}

#[instrument(skip(services))]
pub fn copy(services: &ServiceContainer, id: &str) -> CliResult<()> {
    let entry = services.entry_service.get_entry(id)?;
    services.clipboard_service.copy_to_clipboard(&entry.url)?;
    eprintln!("Copied to clipboard: {}", entry.url);
    Ok(())
}

#[instrument(skip(services))]
pub fn fetch_title(services: &ServiceContainer, url: &str) -> CliResult<()> {
    let fetched = services.entry_service.fetch_title(url);
    if fetched.title.is_empty() {
        return Err(CliError::CommandFailed(format!("No title found for {}", fetched.url)));
    }
    println!("{}", fetched.title);
    Ok(())
}
