//! Interactive command loop over a line-oriented reader

use std::io::Write;

use anyhow::Result;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::{debug, warn};

use crate::catalog_view::CatalogView;
use crate::input::{Command, parse_command};
use crate::render;

const HINT: &str = "(type `help` for commands)";

/// Read commands from `input` until `quit` or end of input, writing each view to `out`.
///
/// Lines that are not valid UTF-8 or do not parse are reported and skipped; only
/// I/O failures end the session early.
pub async fn run<R, W>(view: &mut CatalogView, input: R, out: &mut W) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut input = input;
    let mut buffer = Vec::new();

    loop {
        buffer.clear();
        if input.read_until(b'\n', &mut buffer).await? == 0 {
            return Ok(());
        }

        let line = match std::str::from_utf8(&buffer) {
            Ok(line) => line.trim(),
            Err(e) => {
                warn!("Ignoring input that is not valid UTF-8: {}", e);
                writeln!(out, "input is not valid UTF-8 {HINT}")?;
                continue;
            }
        };

        match parse_command(line) {
            Ok(Some(Command::Event(event))) => {
                view.dispatch(&event);
                debug!(
                    "{} products match, page {} of {}",
                    view.visible().len(),
                    view.state().page,
                    view.total_pages()
                );
                writeln!(out, "{}", view.render())?;
            }
            Ok(Some(Command::ShowCategories)) => writeln!(out, "{}", view.render_categories())?,
            Ok(Some(Command::Help)) => writeln!(out, "{}", render::render_help())?,
            Ok(Some(Command::Quit)) => return Ok(()),
            Ok(None) => writeln!(out, "{}", view.render())?,
            Err(e) => {
                warn!("Ignoring input {:?}: {}", line, e);
                writeln!(out, "{e} {HINT}")?;
            }
        }
    }
}
