//! # Rendering
//!
//! Turns trees into terminal text: the table and grid listings and the
//! detail card. Layout (widths, truncation, padding) is computed on plain
//! text with Unicode display widths; colour is applied to already padded
//! cells so alignment survives ANSI codes.

use arbor::api::{CmdMessage, MessageLevel};
use arbor::model::Tree;
use chrono::{Datelike, NaiveDate};
use colored::Colorize;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const MAX_CELL_WIDTH: usize = 28;
const CARD_WIDTH: usize = 34;
const GRID_COLUMNS: usize = 3;
const GRID_GUTTER: &str = "   ";
const MISSING: &str = "-";

const MONTHS_FR: [&str; 12] = [
    "janvier",
    "février",
    "mars",
    "avril",
    "mai",
    "juin",
    "juillet",
    "août",
    "septembre",
    "octobre",
    "novembre",
    "décembre",
];

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

/// `2024-03-15` → `15/03/2024`; anything unparsable is shown as stored.
pub(super) fn format_date_short(raw: &str) -> String {
    match NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d") {
        Ok(date) => date.format("%d/%m/%Y").to_string(),
        Err(_) => raw.to_string(),
    }
}

/// `2024-03-15` → `15 mars 2024`; anything unparsable is shown as stored.
pub(super) fn format_date_long(raw: &str) -> String {
    match NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d") {
        Ok(date) => format!(
            "{} {} {}",
            date.day(),
            MONTHS_FR[date.month0() as usize],
            date.year()
        ),
        Err(_) => raw.to_string(),
    }
}

/// Whole numbers without a trailing `.0`.
pub(super) fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{:.0}", value)
    } else {
        value.to_string()
    }
}

fn format_coordinates(tree: &Tree) -> Option<String> {
    tree.coordinates()
        .map(|(lat, lon)| format!("{:.4}, {:.4}", lat, lon))
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}

fn pad_to_width(s: &str, width: usize) -> String {
    let padding = width.saturating_sub(s.width());
    format!("{}{}", s, " ".repeat(padding))
}

fn table_row(tree: &Tree) -> Vec<String> {
    let text = |value: &Option<String>| value.clone().unwrap_or_else(|| MISSING.to_string());
    vec![
        tree.id.clone(),
        text(&tree.species_vernacular),
        tree.species_scientific.clone(),
        text(&tree.planter_name),
        text(&tree.area),
        format_coordinates(tree).unwrap_or_else(|| MISSING.to_string()),
        tree.height_cm
            .map(format_number)
            .unwrap_or_else(|| MISSING.to_string()),
        text(&tree.health_status),
        format_date_short(&tree.plantation_date),
    ]
}

pub(super) fn render_table(trees: &[Tree]) -> String {
    let headers = [
        "Id",
        "Name",
        "Species",
        "Planter",
        "Area",
        "Coordinates",
        "Height (cm)",
        "Health",
        "Planted",
    ];

    let rows: Vec<Vec<String>> = trees
        .iter()
        .map(|tree| {
            table_row(tree)
                .into_iter()
                .map(|cell| truncate_to_width(&cell, MAX_CELL_WIDTH))
                .collect()
        })
        .collect();

    let widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(col, header)| {
            rows.iter()
                .map(|row| row[col].width())
                .chain(std::iter::once(header.width()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let mut out = String::new();
    let header_line: Vec<String> = headers
        .iter()
        .zip(&widths)
        .map(|(h, w)| pad_to_width(h, *w).bold().to_string())
        .collect();
    out.push_str(header_line.join("  ").trim_end());
    out.push('\n');

    for row in &rows {
        let line: Vec<String> = row
            .iter()
            .zip(&widths)
            .enumerate()
            .map(|(col, (cell, w))| {
                let padded = pad_to_width(cell, *w);
                match col {
                    0 => padded.yellow().to_string(),
                    2 => padded.italic().to_string(),
                    _ => padded,
                }
            })
            .collect();
        out.push_str(line.join("  ").trim_end());
        out.push('\n');
    }
    out
}

fn card_lines(tree: &Tree) -> Vec<String> {
    let inner = CARD_WIDTH - 2;
    let mut lines = vec![
        format!("{} [{}]", tree.display_name(), tree.id),
        tree.species_scientific.clone(),
    ];
    if let Some(planter) = &tree.planter_name {
        lines.push(format!("Planter: {}", planter));
    }
    if let Some(area) = &tree.area {
        lines.push(format!("Area: {}", area));
    }
    if let Some(height) = tree.height_cm {
        lines.push(format!("Height: {} cm", format_number(height)));
    }
    if let Some(health) = &tree.health_status {
        lines.push(format!("Health: {}", health));
    }
    if let Some(photo) = tree.primary_photo() {
        lines.push(format!("Photo: {}", photo));
    }
    lines
        .iter()
        .map(|line| pad_to_width(&truncate_to_width(line, inner), inner))
        .collect()
}

/// Cards, `GRID_COLUMNS` per row.
pub(super) fn render_grid(trees: &[Tree]) -> String {
    let mut out = String::new();

    for (chunk_index, chunk) in trees.chunks(GRID_COLUMNS).enumerate() {
        if chunk_index > 0 {
            out.push('\n');
        }
        let cards: Vec<Vec<String>> = chunk.iter().map(card_lines).collect();
        let height = cards.iter().map(Vec::len).max().unwrap_or(0);
        let blank = " ".repeat(CARD_WIDTH - 2);
        let border = format!("+{}+", "-".repeat(CARD_WIDTH - 2));

        let borders = vec![border; cards.len()];
        out.push_str(&borders.join(GRID_GUTTER));
        out.push('\n');

        for row in 0..height {
            let line: Vec<String> = cards
                .iter()
                .map(|card| {
                    let content = card.get(row).unwrap_or(&blank);
                    let content = if row == 0 {
                        content.bold().to_string()
                    } else if row == 1 {
                        content.italic().to_string()
                    } else {
                        content.to_string()
                    };
                    format!("|{}|", content)
                })
                .collect();
            out.push_str(&line.join(GRID_GUTTER));
            out.push('\n');
        }

        out.push_str(&borders.join(GRID_GUTTER));
        out.push('\n');
    }
    out
}

pub(super) fn render_detail(tree: &Tree) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{} {}\n",
        tree.species_scientific.bold(),
        format!("[{}]", tree.id).yellow()
    ));
    if let Some(vernacular) = &tree.species_vernacular {
        out.push_str(&format!("\"{}\"\n", vernacular).italic().to_string());
    }
    out.push_str("--------------------------------\n");

    let mut field = |label: &str, value: String| {
        let label = pad_to_width(&format!("{}:", label), 14);
        out.push_str(&format!("{}{}\n", label.dimmed(), value));
    };
    if let Some(planter) = &tree.planter_name {
        field("Planted by", planter.clone());
    }
    field("Planted on", format_date_long(&tree.plantation_date));
    if let Some(area) = &tree.area {
        field("Area", area.clone());
    }
    if let Some(height) = tree.height_cm {
        field("Height", format!("{} cm", format_number(height)));
    }
    if let Some(lat) = tree.latitude {
        field("Latitude", lat.to_string());
    }
    if let Some(lon) = tree.longitude {
        field("Longitude", lon.to_string());
    }
    if let Some(health) = &tree.health_status {
        field("Health", health.clone());
    }

    if let Some(photos) = tree.photos.as_ref().filter(|p| !p.is_empty()) {
        out.push_str("\nPhotos:\n");
        for (i, photo) in photos.iter().enumerate() {
            let marker = if i == 0 { " (primary)" } else { "" };
            out.push_str(&format!("  {}. {}{}\n", i + 1, photo, marker));
        }
    }
    if let Some(notes) = &tree.notes {
        out.push_str("\nNotes:\n");
        out.push_str(notes);
        out.push('\n');
    }
    out
}
