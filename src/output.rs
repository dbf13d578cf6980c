//! Output formatting for lookup results

use crate::index::types::{DocRecord, IndexEntry};
use crate::query::decode_key;
use std::io::{self, Write};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

/// Print lookup results to stdout.
///
/// With `heading`, records are grouped under their key; otherwise each
/// record is printed on one tab-separated line.
pub fn print_entries(entries: &[&IndexEntry], color: bool, heading: bool) -> io::Result<()> {
    let choice = if color {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    };
    let mut stdout = StandardStream::stdout(choice);
    write_entries(&mut stdout, entries, heading)
}

/// Write lookup results to any color-capable writer
pub fn write_entries<W: WriteColor>(out: &mut W, entries: &[&IndexEntry], heading: bool) -> io::Result<()> {
    let mut last_key: Option<&str> = None;

    for entry in entries {
        if heading && last_key != Some(entry.key.as_str()) {
            if last_key.is_some() {
                // Add blank line between keys
                writeln!(out)?;
            }

            out.set_color(ColorSpec::new().set_fg(Some(Color::Magenta)).set_bold(true))?;
            writeln!(out, "{}", decode_key(&entry.key))?;
            out.reset()?;

            last_key = Some(entry.key.as_str());
        }

        for record in &entry.records {
            write_record(out, record, heading)?;
        }
    }

    Ok(())
}

fn write_record<W: WriteColor>(out: &mut W, record: &DocRecord, heading: bool) -> io::Result<()> {
    let sep = if heading { "  " } else { "\t" };

    if heading {
        write!(out, "  ")?;
    }

    out.set_color(ColorSpec::new().set_fg(Some(Color::Green)).set_bold(true))?;
    write!(out, "{}", record.label)?;
    out.reset()?;

    if !record.scope_label.is_empty() || !heading {
        write!(out, "{}", sep)?;
        out.set_color(ColorSpec::new().set_fg(Some(Color::Cyan)))?;
        write!(out, "{}", record.scope_label)?;
        out.reset()?;
    }

    write!(out, "{}", sep)?;
    out.set_color(ColorSpec::new().set_fg(Some(Color::Blue)))?;
    write!(out, "{}", record.anchor_path)?;
    out.reset()?;

    writeln!(out)?;
    Ok(())
}

/// Print lookup results as a JSON array of entries
pub fn print_json(entries: &[&IndexEntry]) -> io::Result<()> {
    let stdout = io::stdout();
    let mut lock = stdout.lock();
    serde_json::to_writer_pretty(&mut lock, entries)?;
    writeln!(lock)?;
    Ok(())
}

/// Print only the number of matching records (for `--count`)
pub fn print_count(entries: &[&IndexEntry]) -> io::Result<()> {
    let records: usize = entries.iter().map(|e| e.records.len()).sum();
    writeln!(io::stdout(), "{}", records)
}
