//! Background fetching of puzzle and solution boards.
//!
//! The puzzle service is reached from a worker thread so the UI loop never
//! blocks; results come back over a channel polled once per frame. The
//! puzzle board is delivered as soon as it arrives and the solution follows
//! in a second event, so the rest of the app has to keep working in the gap
//! between the two.

use std::{sync::mpsc, thread};

use log::{debug, warn};
use ninefold_client::PuzzleClient;
use ninefold_core::DigitGrid;

/// An event produced by a background fetch.
#[derive(Debug)]
pub enum FetchEvent {
    /// The fresh puzzle board arrived; play can begin.
    PuzzleReady(DigitGrid),
    /// The solution for the current puzzle arrived.
    SolutionReady(DigitGrid),
    /// The fetch failed; the message is user-presentable.
    Failed(String),
}

struct Envelope {
    generation: u64,
    event: FetchEvent,
}

/// Fetches boards on a worker thread and hands back [`FetchEvent`]s on poll.
///
/// Each [`BoardSource::refresh`] supersedes any fetch still in flight;
/// events from superseded fetches are dropped so a stale board can never
/// overwrite a newer one.
pub struct BoardSource {
    base_url: String,
    tx: mpsc::Sender<Envelope>,
    rx: mpsc::Receiver<Envelope>,
    generation: u64,
}

impl BoardSource {
    /// Creates a source for the puzzle service rooted at `base_url`.
    #[must_use]
    pub fn new(base_url: String) -> Self {
        let (tx, rx) = mpsc::channel();
        Self {
            base_url,
            tx,
            rx,
            generation: 0,
        }
    }

    /// Starts fetching a fresh puzzle and its solution.
    pub fn refresh(&mut self) {
        self.generation += 1;
        let generation = self.generation;
        let tx = self.tx.clone();
        let base_url = self.base_url.clone();
        thread::spawn(move || {
            let client = PuzzleClient::new(base_url);
            run_fetch(&client, generation, &tx);
        });
    }

    /// Drains events from the most recent refresh.
    pub fn poll(&mut self) -> Vec<FetchEvent> {
        let mut events = Vec::new();
        while let Ok(envelope) = self.rx.try_recv() {
            if envelope.generation == self.generation {
                events.push(envelope.event);
            } else {
                debug!(
                    "dropping event from superseded fetch #{}",
                    envelope.generation
                );
            }
        }
        events
    }
}

fn run_fetch(client: &PuzzleClient, generation: u64, tx: &mpsc::Sender<Envelope>) {
    let send = |event| {
        // The receiver is gone when the app is shutting down; nothing to do.
        let _ = tx.send(Envelope { generation, event });
    };

    let puzzle = match client.fetch_random() {
        Ok(puzzle) => puzzle,
        Err(err) => {
            warn!("failed to fetch a fresh board: {err}");
            send(FetchEvent::Failed(format!(
                "Could not fetch a new board: {err}"
            )));
            return;
        }
    };
    send(FetchEvent::PuzzleReady(puzzle.clone()));

    match client.fetch_solution(&puzzle) {
        Ok(solution) => send(FetchEvent::SolutionReady(solution)),
        Err(err) => {
            warn!("failed to fetch the solved board: {err}");
            send(FetchEvent::Failed(format!(
                "Could not fetch the solution: {err}"
            )));
        }
    }
}
