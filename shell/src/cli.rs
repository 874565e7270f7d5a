//! The two modes of `profile-lookup`, over any input and output.
//!
//! `main` wires these to stdin, stdout and Ctrl-C; tests drive them with
//! in-memory buffers.

use std::future::Future;
use std::io::Write;
use std::sync::Arc;

use anyhow::{bail, Context};
use profile_core::Phase;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::Session;

/// Look up `username` once and write the resulting screen to `output`.
///
/// Fails on empty input (nothing is written) and when the lookup ends in
/// `Phase::Failure` (the screen, error line included, is written first).
pub async fn lookup_once<W: Write>(
    session: &Session,
    username: &str,
    output: &mut W,
) -> anyhow::Result<()> {
    let Some(handle) = session.search(username).await else {
        bail!("username must not be empty");
    };
    handle.await.context("lookup task panicked")?;

    writeln!(output, "{}", session.view().await).context("write screen")?;
    if let Phase::Failure { error, .. } = session.phase().await {
        return Err(anyhow::Error::new(error).context(format!("lookup of {username:?} failed")));
    }
    Ok(())
}

/// Read one username per line from `input` and write the screen to
/// `output` after every change. Blank lines are ignored.
///
/// Returns when `input` ends, after the last lookup has rendered, or when
/// `shutdown` resolves, cancelling whatever is in flight.
pub async fn interactive<R, W, S>(
    session: Session,
    input: R,
    output: Arc<Mutex<W>>,
    shutdown: S,
) -> anyhow::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: Write + Send + 'static,
    S: Future<Output = std::io::Result<()>>,
{
    render(&session, &output).await?;
    let mut lines = input.lines();
    let mut last_render: Option<JoinHandle<anyhow::Result<()>>> = None;
    tokio::pin!(shutdown);

    loop {
        let line = tokio::select! {
            line = lines.next_line() => line.context("read username")?,
            res = &mut shutdown => {
                res.context("wait for shutdown signal")?;
                if session.cancel().await {
                    info!("lookup cancelled");
                }
                return Ok(());
            }
        };
        let Some(line) = line else {
            break;
        };

        let Some(handle) = session.search(&line).await else {
            debug!("ignoring empty username");
            continue;
        };
        render(&session, &output).await?;

        let session = session.clone();
        let output = Arc::clone(&output);
        last_render = Some(tokio::spawn(async move {
            if let Ok(true) = handle.await {
                render(&session, &output).await?;
            }
            Ok(())
        }));
    }

    // Input closed: let the last lookup finish before returning.
    if let Some(render) = last_render {
        render.await.context("render task panicked")??;
    }
    Ok(())
}

async fn render<W: Write>(session: &Session, output: &Mutex<W>) -> anyhow::Result<()> {
    let view = session.view().await;
    let mut output = output.lock().await;
    writeln!(output, "{view}").context("write screen")?;
    output.flush().context("flush screen")
}
