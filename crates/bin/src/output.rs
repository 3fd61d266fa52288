//! Output formatting helpers for human-readable and JSON output.

use photoroll::{Album, Photo};
use serde_json::{Value, json};

/// Output format selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Human,
    Json,
}

/// Print a table with aligned columns in human-readable format.
///
/// `headers` and each row in `rows` must have the same length.
pub fn print_table(headers: &[&str], rows: &[Vec<String>]) {
    if rows.is_empty() {
        return;
    }

    let col_count = headers.len();
    let mut widths: Vec<usize> = headers.iter().map(|h| h.len()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate().take(col_count) {
            widths[i] = widths[i].max(cell.chars().count());
        }
    }

    let format_line = |cells: Vec<&str>| -> String {
        cells
            .iter()
            .enumerate()
            .map(|(i, cell)| format!("{:<width$}", cell, width = widths[i]))
            .collect::<Vec<_>>()
            .join("  ")
            .trim_end()
            .to_string()
    };

    println!("{}", format_line(headers.to_vec()));
    for row in rows {
        println!(
            "{}",
            format_line(row.iter().take(col_count).map(String::as_str).collect())
        );
    }
}

/// Print a JSON value on one line.
pub fn print_json(value: &Value) -> Result<(), serde_json::Error> {
    println!("{}", serde_json::to_string(value)?);
    Ok(())
}

/// Print the outcome of a gesture that produces no data.
pub fn print_done(message: &str, format: OutputFormat) -> Result<(), serde_json::Error> {
    match format {
        OutputFormat::Human => {
            println!("{message}");
            Ok(())
        }
        OutputFormat::Json => print_json(&json!({ "ok": true, "message": message })),
    }
}

/// Print a list of photos as a table or a JSON array.
pub fn print_photos(photos: &[Photo], format: OutputFormat) -> Result<(), serde_json::Error> {
    match format {
        OutputFormat::Human => {
            if photos.is_empty() {
                println!("No photos found.");
                return Ok(());
            }
            let rows: Vec<Vec<String>> = photos
                .iter()
                .map(|p| {
                    vec![
                        p.display_name().to_string(),
                        p.taken_at().format("%Y-%m-%d %H:%M").to_string(),
                        p.caption().to_string(),
                        tag_summary(p),
                    ]
                })
                .collect();
            print_table(&["NAME", "TAKEN", "CAPTION", "TAGS"], &rows);
            Ok(())
        }
        OutputFormat::Json => print_json(&serde_json::to_value(photos)?),
    }
}

/// Print a user's albums with their derived statistics.
pub fn print_albums(albums: &[Album], format: OutputFormat) -> Result<(), serde_json::Error> {
    match format {
        OutputFormat::Human => {
            if albums.is_empty() {
                println!("No albums found.");
                return Ok(());
            }
            let rows: Vec<Vec<String>> = albums
                .iter()
                .map(|a| {
                    let span = a
                        .date_range()
                        .map(|(first, last)| {
                            format!("{} - {}", first.format("%Y-%m-%d"), last.format("%Y-%m-%d"))
                        })
                        .unwrap_or_default();
                    vec![a.name().to_string(), a.photo_count().to_string(), span]
                })
                .collect();
            print_table(&["ALBUM", "PHOTOS", "DATES"], &rows);
            Ok(())
        }
        OutputFormat::Json => {
            let entries: Vec<Value> = albums
                .iter()
                .map(|a| {
                    json!({
                        "name": a.name(),
                        "photos": a.photo_count(),
                        "earliest": a.earliest_date(),
                        "latest": a.latest_date(),
                        "cover": a.cover_photo().map(Photo::path),
                    })
                })
                .collect();
            print_json(&Value::Array(entries))
        }
    }
}

fn tag_summary(photo: &Photo) -> String {
    photo
        .tags()
        .iter()
        .map(|(tag_type, value)| format!("{tag_type}={value}"))
        .collect::<Vec<_>>()
        .join(", ")
}
