//! Focus slideshow driven by tokio timers

use std::future::Future;
use std::io::Write;
use std::sync::Arc;

use anyhow::Result;
use libvocabox::config::FocusConfig;
use libvocabox::focus::{FocusEvent, FocusSequencer, FocusSettings, FocusSource, FocusWordItem, TokioScheduler};
use libvocabox::{GameRng, VocaboxError, WordPool};
use tokio::runtime::Handle;
use tokio::sync::broadcast::error::RecvError;

/// Play words of `categories` until the queue ends or `shutdown` resolves
pub async fn run<W, F>(
    pool: &WordPool,
    mut rng: GameRng,
    categories: Vec<String>,
    config: &FocusConfig,
    shutdown: F,
    out: &mut W,
) -> Result<()>
where
    W: Write,
    F: Future<Output = ()>,
{
    let scheduler = Arc::new(TokioScheduler::new(Handle::current()));
    let sequencer = FocusSequencer::with_settings(scheduler, FocusSettings::from(config));
    let mut events = sequencer.subscribe();

    sequencer.init_session(FocusSource::Category, categories, Vec::new(), None);
    if sequencer.prepare_queue(pool, &mut rng) == 0 || !sequencer.start() {
        return Err(VocaboxError::InvalidInput("No words to show in the selected categories".to_string()).into());
    }

    tokio::pin!(shutdown);
    let mut stopping = false;
    loop {
        tokio::select! {
            event = events.recv() => match event {
                Ok(FocusEvent::CountdownStarted { seconds }) => {
                    writeln!(out, "Starting in {}s...", seconds)?;
                }
                Ok(FocusEvent::SlideShown { index, total, word_id }) => {
                    slide(&sequencer.state().queue, index, total, &word_id, out)?;
                }
                Ok(FocusEvent::Finished { total }) => {
                    writeln!(out, "\nDone: {} words", total)?;
                    break;
                }
                Ok(FocusEvent::Stopped) => {
                    writeln!(out, "\nStopped")?;
                    break;
                }
                Ok(_) => {}
                Err(RecvError::Lagged(skipped)) => {
                    tracing::warn!(skipped, "focus output fell behind");
                }
                Err(RecvError::Closed) => break,
            },
            _ = &mut shutdown, if !stopping => {
                stopping = true;
                sequencer.stop();
            }
        }
    }
    Ok(())
}

/// Render the slide named by the event, not whatever is current by now
fn slide<W: Write>(queue: &[FocusWordItem], index: usize, total: usize, word_id: &str, out: &mut W) -> Result<()> {
    let Some(item) = queue.iter().find(|item| item.id == word_id) else {
        tracing::warn!(word_id, "slide not in queue");
        return Ok(());
    };
    writeln!(out, "\n[{}/{}] {}  ({})", index + 1, total, item.word, item.category)?;
    writeln!(out, "  {}", item.meaning)?;
    Ok(())
}
