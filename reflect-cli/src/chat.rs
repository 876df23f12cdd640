//! Interactive journaling loop.

use anyhow::Result;
use std::io::Write;
use std::time::Duration;

use reflect_session::{JournalService, Session, SessionError};
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::{info, warn};

use crate::render::{reveal, write_reflections};

/// Entries shown by `/history`.
pub const SIDEBAR_LIMIT: usize = 5;

const HELP: &str = "Commands: /new starts a new session, /history shows recent reflections, /quit exits.";

/// Reads one line without its terminator; `None` at end of input.
async fn read_line<R: AsyncBufRead + Unpin>(input: &mut R) -> Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line).await? == 0 {
        return Ok(None);
    }
    let len = line.trim_end_matches(['\r', '\n']).len();
    line.truncate(len);
    Ok(Some(line))
}

/// Asks for a name until a valid one is entered. `None` when input ends first.
pub async fn prompt_login<R, W>(input: &mut R, out: &mut W) -> Result<Option<Session>>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    loop {
        write!(out, "👤 Please enter your name to begin: ")?;
        out.flush()?;
        let Some(name) = read_line(input).await? else {
            return Ok(None);
        };
        match Session::start(&name) {
            Ok(session) => return Ok(Some(session)),
            Err(e) => writeln!(out, "⚠️ {}", e)?,
        }
    }
}

/// Runs the chat loop until `/quit` or end of input.
pub async fn run_chat<R, W>(
    service: &JournalService,
    session: &mut Session,
    input: &mut R,
    out: &mut W,
    typing_delay: Duration,
) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    writeln!(out, "👋 Hello {}! Start chatting below.", session.display_name())?;
    writeln!(out, "{}", HELP)?;
    info!(user = %session.user(), "Session started");

    loop {
        write!(out, "💬 > ")?;
        out.flush()?;
        let Some(line) = read_line(input).await? else {
            break;
        };

        match line.trim() {
            "" => continue,
            "/quit" | "/exit" => break,
            "/new" => {
                session.reset();
                writeln!(out, "🆕 New session started.")?;
            }
            "/history" => match service.recent_reflections(session.user(), SIDEBAR_LIMIT).await {
                Ok(records) => write_reflections(out, &records)?,
                Err(e) => writeln!(out, "⚠️ {}", e)?,
            },
            "/help" => writeln!(out, "{}", HELP)?,
            _ => match service.reflect(session, &line).await {
                Ok(record) => reveal(out, &record.answer, typing_delay).await?,
                Err(SessionError::Persist { record, source }) => {
                    reveal(out, &record.answer, typing_delay).await?;
                    warn!(error = %source, "Reflection shown but not saved");
                    writeln!(out, "⚠️ Could not save this reflection: {}", source)?;
                }
                Err(e) => writeln!(out, "⚠️ {}", e)?,
            },
        }
    }

    writeln!(out, "👋 Goodbye.")?;
    out.flush()?;
    Ok(())
}
