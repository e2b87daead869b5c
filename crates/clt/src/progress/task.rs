//! Progress Task - the background rendering loop
//!
//! # Implementation Note: one writer, one channel
//!
//! Each running indicator owns a dedicated thread that is the *only* thing
//! writing to its output. The caller talks to it exclusively through a
//! rendezvous channel (`sync_channel(0)`):
//!
//! 1. **Updates**: `update`/`increment` hand a [`Signal`] to the task and
//!    return once the task has taken it, so frames are drawn in the order
//!    the caller produced them.
//!
//! 2. **Terminal signals**: `Success`/`Fail` make the task draw its final
//!    frame and return. The caller then joins the thread, so by the time
//!    `success()` returns the last line is on screen and the task is gone.
//!
//! 3. **Disconnection**: if every sender is dropped without a terminal
//!    signal, the task restores the cursor and exits instead of spinning
//!    forever.

use super::render::{Painter, clamp_fraction};
use super::{Kind, LoadingStyle};
use crate::buffer::OutputBuffer;
use std::io::Write;
use std::sync::mpsc::{Receiver, RecvTimeoutError};
use std::time::{Duration, Instant};

/// Messages from the caller to a running task
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum Signal {
    /// Set a bar to this fraction
    Update(f64),
    /// Advance an incremental bar by one step
    Increment,
    /// Finish successfully
    Success,
    /// Finish with a failure
    Fail,
}

/// Run the loop for `kind` until a terminal signal or disconnection, then
/// hand the writer back.
pub(crate) fn run<W: Write>(
    kind: Kind,
    mut out: OutputBuffer<W>,
    rx: &Receiver<Signal>,
    painter: &Painter,
    interval: Duration,
) -> W {
    match kind {
        Kind::Spinner => spin(&mut out, rx, painter, interval),
        Kind::Bar => fill(&mut out, rx, painter, None),
        Kind::IncrementalBar { total } => fill(&mut out, rx, painter, Some(total)),
        Kind::Loading { style, delay } => load(&mut out, rx, painter, style, delay, interval),
    }
    out.into_inner()
}

/// Time-driven: one frame per `interval` until told to stop. Stray
/// signals neither redraw nor delay the next frame.
fn spin<W: Write>(
    out: &mut OutputBuffer<W>,
    rx: &Receiver<Signal>,
    painter: &Painter,
    interval: Duration,
) {
    let mut frames = Frames::new(interval);
    out.frame(&painter.spinner(frames.tick));
    loop {
        if frames.due() {
            frames.advance();
            out.frame(&painter.spinner(frames.tick));
        }
        match rx.recv_timeout(frames.remaining()) {
            Ok(Signal::Success) => return out.final_frame(&painter.spinner_done(true)),
            Ok(Signal::Fail) => return out.final_frame(&painter.spinner_done(false)),
            Ok(Signal::Update(_) | Signal::Increment) | Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => return out.release(),
        }
    }
}

/// Caller-driven: redraws only when a signal arrives. An empty 0% bar is
/// drawn at start so the line is visible before the first update.
fn fill<W: Write>(
    out: &mut OutputBuffer<W>,
    rx: &Receiver<Signal>,
    painter: &Painter,
    total: Option<usize>,
) {
    let mut steps = 0usize;
    out.frame(&painter.bar(0.0));
    loop {
        match rx.recv() {
            Ok(Signal::Update(fraction)) => out.frame(&painter.bar(clamp_fraction(fraction))),
            Ok(Signal::Increment) => {
                let Some(total) = total else {
                    tracing::debug!("increment ignored by a bar without steps");
                    continue;
                };
                steps = (steps + 1).min(total);
                out.frame(&painter.bar(step_fraction(steps, total)));
            }
            Ok(Signal::Success) => return out.final_frame(&painter.bar_done(true)),
            Ok(Signal::Fail) => return out.final_frame(&painter.bar_done(false)),
            Err(_) => return out.release(),
        }
    }
}

/// Silent for `delay`, then animated; erases itself when done.
fn load<W: Write>(
    out: &mut OutputBuffer<W>,
    rx: &Receiver<Signal>,
    painter: &Painter,
    style: LoadingStyle,
    delay: Duration,
    interval: Duration,
) {
    let deadline = Instant::now() + delay;
    loop {
        let remaining = deadline.saturating_duration_since(Instant::now());
        match rx.recv_timeout(remaining) {
            // finished before anything was drawn
            Ok(Signal::Success | Signal::Fail) | Err(RecvTimeoutError::Disconnected) => return,
            Ok(Signal::Update(_) | Signal::Increment) => {}
            Err(RecvTimeoutError::Timeout) => break,
        }
    }

    let mut frames = Frames::new(interval);
    out.frame(&painter.loading(style, frames.tick));
    loop {
        if frames.due() {
            frames.advance();
            out.frame(&painter.loading(style, frames.tick));
        }
        match rx.recv_timeout(frames.remaining()) {
            Ok(Signal::Success | Signal::Fail) | Err(RecvTimeoutError::Disconnected) => {
                return out.erase();
            }
            Ok(Signal::Update(_) | Signal::Increment) | Err(RecvTimeoutError::Timeout) => {}
        }
    }
}

/// Fixed-pace frame clock: the tick advances once per `interval` no matter
/// how many signals arrive in between.
struct Frames {
    tick: usize,
    interval: Duration,
    next: Instant,
}

impl Frames {
    fn new(interval: Duration) -> Self {
        Self {
            tick: 0,
            interval,
            next: Instant::now() + interval,
        }
    }

    fn due(&self) -> bool {
        self.remaining().is_zero()
    }

    /// Time left until the next frame is due
    fn remaining(&self) -> Duration {
        self.next.saturating_duration_since(Instant::now())
    }

    /// Move to the next glyph; the following one is due a full interval
    /// from now.
    fn advance(&mut self) {
        self.tick += 1;
        self.next = Instant::now() + self.interval;
    }
}

fn step_fraction(steps: usize, total: usize) -> f64 {
    if total == 0 {
        1.0
    } else {
        steps as f64 / total as f64
    }
}
