use colored::Colorize;
use notebook::api::{CmdMessage, MessageLevel};
use notebook::Note;
use std::io::{self, Write};

pub(super) fn print_messages<W: Write>(out: &mut W, messages: &[CmdMessage]) -> io::Result<()> {
    for message in messages {
        match message.level {
            MessageLevel::Info => writeln!(out, "{}", message.content.dimmed())?,
            MessageLevel::Success => writeln!(out, "{}", message.content.green())?,
            MessageLevel::Warning => writeln!(out, "{}", message.content.yellow())?,
            MessageLevel::Error => writeln!(out, "{}", message.content.red())?,
        }
    }
    Ok(())
}

/// Writes each note as an `<id>: <tags>` header line followed by its memo.
pub(super) fn print_notes<W: Write>(out: &mut W, notes: &[Note], show_dates: bool) -> io::Result<()> {
    if notes.is_empty() {
        return print_messages(out, &[CmdMessage::info("No notes found.")]);
    }

    for note in notes {
        let id = note.id().to_string();
        if show_dates {
            let date = format!("({})", note.creation_date().format("%Y-%m-%d"));
            writeln!(out, "{}: {} {}", id.yellow(), note.tags, date.dimmed())?;
        } else {
            writeln!(out, "{}: {}", id.yellow(), note.tags)?;
        }
        writeln!(out, "{}", note.memo)?;
    }
    Ok(())
}
