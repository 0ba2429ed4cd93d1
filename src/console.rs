//! The read-eval-print loop.
//!
//! One line is read, fully processed and fully written before the next one is
//! read. The loop is generic over its input, output and interrupt source so
//! the binary can hand it stdin/stdout/ctrl-c and tests can hand it buffers.

use crate::banner::{BANNER, ENTRY, INTERRUPTED, VICTORY};
use crate::commands::{CommandError, process_command};
use crate::renderer::render_room;
use crate::services::room;
use crate::state::session::Session;
use std::future::Future;
use std::panic::{AssertUnwindSafe, catch_unwind};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

/// Why the loop stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ending {
    /// Player reached the exit
    Won,
    /// Game over without winning (ie: `quit`)
    Quit,
    /// Interrupt signal
    Interrupted,
    /// Input closed
    EndOfInput,
}

pub async fn run<R, W, I>(
    sess: &mut Session,
    mut reader: R,
    w: &mut W,
    interrupt: I,
    prompt: &str,
) -> anyhow::Result<Ending>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
    I: Future<Output = ()>,
{
    tokio::pin!(interrupt);

    w.write_all(BANNER.as_bytes()).await?;
    w.write_all(ENTRY.as_bytes()).await?;

    if !sess.is_over() {
        let rv = room::describe_room(&mut sess.state)?;
        write_block(w, &render_room(&sess.theme, &rv)).await?;
    }

    let mut line = String::new();
    while !sess.is_over() {
        w.write_all(format!("\n{prompt}").as_bytes()).await?;
        w.flush().await?;

        line.clear();
        let n = tokio::select! {
            biased;
            _ = &mut interrupt => {
                tracing::info!("interrupted");
                write_block(w, &format!("\n\n{INTERRUPTED}")).await?;
                return Ok(Ending::Interrupted);
            }
            n = reader.read_line(&mut line) => n?,
        };
        if n == 0 {
            tracing::info!("input closed");
            write_block(w, &format!("\n\n{INTERRUPTED}")).await?;
            return Ok(Ending::EndOfInput);
        }

        let raw = line.trim_matches(['\r', '\n']).trim();
        if raw.is_empty() {
            continue;
        }
        tracing::debug!(%raw, "received line");

        let out = turn(sess, raw);
        write_block(w, &out).await?;
    }

    if sess.state.won {
        write_block(w, &format!("\n{VICTORY}")).await?;
        Ok(Ending::Won)
    } else {
        Ok(Ending::Quit)
    }
}

/// Runs one command and turns whatever happens into text for the player.
/// A panic inside a command is reported and the game goes on.
pub fn turn(sess: &mut Session, raw: &str) -> String {
    match catch_unwind(AssertUnwindSafe(|| process_command(raw, sess))) {
        Ok(Ok(out)) => out.message,
        Ok(Err(CommandError::Internal(e))) => {
            tracing::error!(error = %e, "command failed");
            format!("An error occurred: {e}\nPlease try again.")
        }
        Ok(Err(e)) => e.to_string(),
        Err(panic) => {
            // the panic hook has already logged where it happened
            let msg = panic_message(panic.as_ref());
            tracing::debug!(panic = %msg, %raw, "command panicked, continuing");
            format!("An error occurred: {msg}\nPlease try again.")
        }
    }
}

/// Replaces the default panic output with a single `tracing` event.
///
/// Panics inside a turn are recovered by [`turn`], so they must not dump a
/// crash report over the game text.
pub fn install_panic_hook() {
    std::panic::set_hook(Box::new(|info| {
        let location = info
            .location()
            .map(|l| format!("{}:{}", l.file(), l.line()))
            .unwrap_or_default();
        tracing::error!(panic = %panic_message(info.payload()), %location, "panic");
    }));
}

fn panic_message(panic: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = panic.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown failure".to_string()
    }
}

async fn write_block<W: AsyncWrite + Unpin>(w: &mut W, s: &str) -> std::io::Result<()> {
    if s.is_empty() {
        return Ok(());
    }
    w.write_all(s.as_bytes()).await?;
    if !s.ends_with('\n') {
        w.write_all(b"\n").await?;
    }
    w.flush().await
}
