// src/cli/display.rs
use crate::domain::entry::BookmarkEntry;
use crate::domain::layout::{ResolvedColumn, MAX_COLUMN_WIDTH};
use crate::domain::sort::{SortDirection, SortKey, SortOrder};
use chrono::{DateTime, Local};
use std::io::{self, Write};
use termcolor::{Color, ColorSpec, WriteColor};

const ID_WIDTH: usize = 8;

/// Width used for a column without a saved width
pub fn default_width(key: SortKey) -> usize {
    match key {
        SortKey::Title => 40,
        SortKey::Url => 48,
        SortKey::Category => 12,
        SortKey::Tags => 24,
        SortKey::Comment => 30,
        SortKey::DateSaved => 16,
    }
}

fn color_for(key: SortKey) -> Option<Color> {
    match key {
        SortKey::Title => Some(Color::Green),
        SortKey::Url => Some(Color::Yellow),
        SortKey::Tags => Some(Color::Blue),
        SortKey::DateSaved => Some(Color::Magenta),
        SortKey::Category | SortKey::Comment => None,
    }
}

/// Stored timestamp in local time, minute precision; unparsable values are shown as stored
pub fn format_timestamp(stamp: &str) -> String {
    DateTime::parse_from_rfc3339(stamp)
        .map(|dt| dt.with_timezone(&Local).format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|_| stamp.to_string())
}

fn cell_value(entry: &BookmarkEntry, key: SortKey) -> String {
    match key {
        SortKey::Title => entry.title.clone(),
        SortKey::Url => entry.url.clone(),
        SortKey::Category => entry.category.clone(),
        SortKey::Tags => entry.joined_tags(),
        SortKey::Comment => entry.comment.replace(['\r', '\n'], " "),
        SortKey::DateSaved => format_timestamp(&entry.date_saved),
    }
}

/// Pads or cuts `text` to exactly `width` characters, marking cuts with an ellipsis
pub fn fit(text: &str, width: usize) -> String {
    let len = text.chars().count();
    if len <= width {
        format!("{}{}", text, " ".repeat(width - len))
    } else if width == 0 {
        String::new()
    } else {
        let mut cut: String = text.chars().take(width - 1).collect();
        cut.push('…');
        cut
    }
}

fn header_label(key: SortKey, sort: Option<SortOrder>) -> String {
    match sort {
        Some(order) if order.key == key => {
            let arrow = match order.direction {
                SortDirection::Ascending => '▲',
                SortDirection::Descending => '▼',
            };
            format!("{} {}", key.header(), arrow)
        }
        _ => key.header().to_string(),
    }
}

/// Writes entries as a table with the given columns, marking the active sort column
pub fn write_table<W: WriteColor>(
    out: &mut W,
    entries: &[BookmarkEntry],
    columns: &[ResolvedColumn],
    sort: Option<SortOrder>,
) -> io::Result<()> {
    let widths: Vec<usize> = columns
        .iter()
        .map(|c| {
            c.width
                .unwrap_or_else(|| default_width(c.key))
                .min(MAX_COLUMN_WIDTH)
        })
        .collect();

    out.set_color(ColorSpec::new().set_bold(true))?;
    write!(out, "{}", fit("ID", ID_WIDTH))?;
    for (column, width) in columns.iter().zip(&widths) {
        write!(out, "  {}", fit(&header_label(column.key, sort), *width))?;
    }
    out.reset()?;
    writeln!(out)?;

    for entry in entries {
        out.set_color(ColorSpec::new().set_fg(Some(Color::White)))?;
        write!(out, "{}", fit(&entry.short_id(), ID_WIDTH))?;
        for (column, width) in columns.iter().zip(&widths) {
            out.set_color(ColorSpec::new().set_fg(color_for(column.key)))?;
            write!(out, "  {}", fit(&cell_value(entry, column.key), *width))?;
        }
        out.reset()?;
        writeln!(out)?;
    }
    Ok(())
}

/// Writes every field of an entry
pub fn write_details<W: WriteColor>(out: &mut W, entry: &BookmarkEntry) -> io::Result<()> {
    out.set_color(ColorSpec::new().set_fg(Some(Color::Green)).set_bold(true))?;
    write!(out, "{}", if entry.title.is_empty() { "(no title)" } else { entry.title.as_str() })?;
    out.set_color(ColorSpec::new().set_fg(Some(Color::White)))?;
    writeln!(out, " [{}]", entry.id)?;

    out.set_color(ColorSpec::new().set_fg(Some(Color::Yellow)))?;
    writeln!(out, "  URL:        {}", entry.url)?;
    out.reset()?;
    writeln!(out, "  Category:   {}", entry.category)?;
    out.set_color(ColorSpec::new().set_fg(Some(Color::Blue)))?;
    writeln!(out, "  Tags:       {}", entry.joined_tags())?;
    out.reset()?;
    if !entry.comment.is_empty() {
        writeln!(out, "  Comment:    {}", entry.comment.replace('\n', "\n              "))?;
    }
    out.set_color(ColorSpec::new().set_fg(Some(Color::Magenta)))?;
    writeln!(out, "  Saved:      {}", format_timestamp(&entry.date_saved))?;
    writeln!(out, "  Modified:   {}", format_timestamp(&entry.last_modified))?;
    out.reset()?;
    writeln!(out)?;
    Ok(())
}

/// Writes the column layout, one column per line
pub fn write_columns<W: Write>(out: &mut W, columns: &[ResolvedColumn]) -> io::Result<()> {
    for (position, column) in columns.iter().enumerate() {
        match column.width {
            Some(width) => writeln!(out, "{}. {} ({})", position + 1, column.key, width)?,
            None => writeln!(
                out,
                "{}. {} ({}, default)",
                position + 1,
                column.key,
                default_width(column.key)
            )?,
        }
    }
    Ok(())
}
