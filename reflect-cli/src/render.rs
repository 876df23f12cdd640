//! Terminal rendering: typing reveal and the reflections list.

use std::io::{self, Write};
use std::time::Duration;

use reflect_core::InteractionRecord;

/// Characters of the answer shown in the reflections list.
pub const ANSWER_PREVIEW_CHARS: usize = 150;

const CURSOR: char = '|';
/// ANSI erase from the cursor to end of line.
const CLEAR_TAIL: &str = "\x1b[K";

/// Writes `text` one character at a time with a trailing cursor, then the final text.
///
/// Each step redraws the whole current line from column 0, so characters wider than one
/// cell (emoji, CJK) leave no stray cursor behind. A zero `delay` writes the text in one go.
pub async fn reveal<W: Write>(out: &mut W, text: &str, delay: Duration) -> io::Result<()> {
    if delay.is_zero() {
        writeln!(out, "{}", text)?;
        return out.flush();
    }

    let mut line = String::new();
    for c in text.chars() {
        if c == '\n' {
            writeln!(out, "\r{}{}", line, CLEAR_TAIL)?;
            line.clear();
            continue;
        }
        line.push(c);
        write!(out, "\r{}{}", line, CURSOR)?;
        out.flush()?;
        tokio::time::sleep(delay).await;
    }
    writeln!(out, "\r{}{}", line, CLEAR_TAIL)?;
    out.flush()
}

/// First [`ANSWER_PREVIEW_CHARS`] characters followed by `...`.
pub fn answer_preview(answer: &str) -> String {
    let preview: String = answer.chars().take(ANSWER_PREVIEW_CHARS).collect();
    format!("{}...", preview)
}

/// One entry of the reflections list: date, question, answer preview, sentiment.
pub fn format_reflection(record: &InteractionRecord) -> String {
    format!(
        "📅 {}\n🧠 {}\n💬 {}\n😶 Sentiment: {}\n---",
        record.date(),
        record.question,
        answer_preview(&record.answer),
        record.sentiment
    )
}

/// Writes `records` (already newest first) under a heading.
pub fn write_reflections<W: Write>(out: &mut W, records: &[InteractionRecord]) -> io::Result<()> {
    writeln!(out, "🗂️ Your Reflections")?;
    if records.is_empty() {
        writeln!(out, "No reflections yet.")?;
    }
    for record in records {
        writeln!(out, "{}", format_reflection(record))?;
    }
    out.flush()
}
