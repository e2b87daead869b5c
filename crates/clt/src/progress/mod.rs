//! Progress Rendering - spinners, bars and loading messages
//!
//! A [`Progress`] draws a single status line that a background task keeps
//! redrawing in place. The lifecycle is `Idle -> Running -> Done`:
//!
//! ```no_run
//! use clt::progress::Progress;
//!
//! let mut progress = Progress::bar("Copying");
//! progress.start();
//! for i in 1..=10 {
//!     progress.update(f64::from(i) / 10.0);
//! }
//! progress.success();
//! ```
//!
//! `success()` and `fail()` block until the final frame is on screen, so any
//! output the caller writes afterwards lands below the status line.

mod render;
mod task;

use crate::buffer::OutputBuffer;
use crate::config::ProgressConfig;
use crate::theme::Theme;
use render::{Painter, clamp_fraction};
use std::io::{Stdout, Write};
use std::sync::mpsc::{self, SyncSender};
use std::thread::{self, JoinHandle};
use std::time::Duration;
use task::Signal;

/// Label-plus-filler width of a spinner line.
pub const SPINNER_DISPLAY_LENGTH: usize = 30;
/// Body width of a bar.
pub const BAR_DISPLAY_LENGTH: usize = 20;
/// Time between animation frames.
pub const FRAME_INTERVAL: Duration = Duration::from_millis(250);

/// Which indicator to draw
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    /// `label.....[|]`, animated on a timer
    Spinner,
    /// `label: [====    ] 50%`, redrawn on each update
    Bar,
    /// A bar advanced one of `total` steps at a time
    IncrementalBar {
        /// Number of increments that make a full bar
        total: usize,
    },
    /// Hidden for `delay`, then animated; erased when finished
    Loading {
        /// Animation frames to use
        style: LoadingStyle,
        /// How long to stay hidden
        delay: Duration,
    },
}

impl Kind {
    fn is_bar(self) -> bool {
        matches!(self, Self::Bar | Self::IncrementalBar { .. })
    }
}

/// Animation for a loading message
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LoadingStyle {
    /// Growing dots: `.`, `..`, `...`
    #[default]
    Dots,
    /// The spinner glyphs
    Spinner,
}

/// Observable lifecycle state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgressState {
    /// Created, not started
    Idle,
    /// Background task drawing
    Running,
    /// Finished; the final frame has been drawn
    Done,
}

#[derive(Debug)]
enum State<W> {
    Idle,
    Running(Running<W>),
    Done,
}

#[derive(Debug)]
struct Running<W> {
    tx: SyncSender<Signal>,
    handle: JoinHandle<W>,
}

/// A status-line progress indicator writing to `W`
#[derive(Debug)]
pub struct Progress<W: Write + Send + 'static = Stdout> {
    label: String,
    kind: Kind,
    display_length: usize,
    interval: Duration,
    theme: Theme,
    output: Option<W>,
    state: State<W>,
}

impl Progress<Stdout> {
    fn with_kind(label: impl Into<String>, kind: Kind, display_length: usize) -> Self {
        Self {
            label: label.into(),
            kind,
            display_length,
            interval: FRAME_INTERVAL,
            theme: Theme::default(),
            output: Some(std::io::stdout()),
            state: State::Idle,
        }
    }

    /// Spinner with a dotted filler up to the display length
    pub fn spinner(label: impl Into<String>) -> Self {
        Self::with_kind(label, Kind::Spinner, SPINNER_DISPLAY_LENGTH)
    }

    /// Bar driven by [`update`](Progress::update)
    pub fn bar(label: impl Into<String>) -> Self {
        Self::with_kind(label, Kind::Bar, BAR_DISPLAY_LENGTH)
    }

    /// Bar driven by [`increment`](Progress::increment), full after `total` steps
    pub fn incremental_bar(total: usize, label: impl Into<String>) -> Self {
        Self::with_kind(label, Kind::IncrementalBar { total }, BAR_DISPLAY_LENGTH)
    }

    /// Message that only appears if the work takes longer than `delay`
    pub fn loading(label: impl Into<String>, style: LoadingStyle, delay: Duration) -> Self {
        Self::with_kind(label, Kind::Loading { style, delay }, 0)
    }
}

impl<W: Write + Send + 'static> Progress<W> {
    /// Draw to `writer` instead. Call before [`start`](Progress::start).
    pub fn with_output<V: Write + Send + 'static>(self, writer: V) -> Progress<V> {
        let state = match self.state {
            State::Idle => State::Idle,
            State::Done => State::Done,
            State::Running(_) => {
                tracing::warn!(label = %self.label, "output replaced while running; indicator stopped");
                State::Done
            }
        };
        Progress {
            label: self.label,
            kind: self.kind,
            display_length: self.display_length,
            interval: self.interval,
            theme: self.theme,
            output: Some(writer),
            state,
        }
    }

    /// Override the spinner filler or bar width
    #[must_use]
    pub fn with_display_length(mut self, display_length: usize) -> Self {
        self.display_length = display_length;
        self
    }

    /// Override the time between animation frames
    #[must_use]
    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    /// Override colors and glyphs
    #[must_use]
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Apply whichever overrides `config` sets
    #[must_use]
    pub fn with_config(mut self, config: &ProgressConfig) -> Self {
        if let Some(len) = config.display_length {
            self.display_length = len;
        }
        if let Some(interval) = config.interval() {
            self.interval = interval;
        }
        if let (Kind::Loading { delay, .. }, Some(configured)) =
            (&mut self.kind, config.loading_delay())
        {
            *delay = configured;
        }
        self
    }

    /// Spawn the background task. No-op unless idle.
    pub fn start(&mut self) {
        if !matches!(self.state, State::Idle) {
            tracing::warn!(label = %self.label, state = ?self.state(), "start ignored");
            return;
        }
        let Some(out) = self.output.take() else {
            tracing::warn!(label = %self.label, "start ignored: no output");
            return;
        };

        let (tx, rx) = mpsc::sync_channel(0);
        let painter = Painter::new(&self.label, self.display_length, &self.theme);
        let (kind, interval) = (self.kind, self.interval);
        let handle = thread::spawn(move || {
            task::run(kind, OutputBuffer::new(out), &rx, &painter, interval)
        });

        tracing::debug!(label = %self.label, ?kind, "progress started");
        self.state = State::Running(Running { tx, handle });
    }

    /// Set a running bar to `fraction` (clamped to `[0, 1]`)
    pub fn update(&self, fraction: f64) {
        if !self.kind.is_bar() {
            tracing::debug!(label = %self.label, "update ignored by a non-bar indicator");
            return;
        }
        self.send(Signal::Update(clamp_fraction(fraction)));
    }

    /// Advance a running incremental bar by one step
    pub fn increment(&self) {
        if !matches!(self.kind, Kind::IncrementalBar { .. }) {
            tracing::debug!(label = %self.label, "increment ignored by an indicator without steps");
            return;
        }
        self.send(Signal::Increment);
    }

    /// A cloneable sender for updating a running bar from other threads.
    /// `None` unless this is a running bar.
    pub fn handle(&self) -> Option<ProgressHandle> {
        match &self.state {
            State::Running(running) if self.kind.is_bar() => Some(ProgressHandle {
                tx: running.tx.clone(),
            }),
            _ => None,
        }
    }

    /// Finish successfully; returns after the final frame is drawn
    pub fn success(&mut self) {
        self.finish(Signal::Success);
    }

    /// Finish with a failure; returns after the final frame is drawn
    pub fn fail(&mut self) {
        self.finish(Signal::Fail);
    }

    fn finish(&mut self, signal: Signal) {
        match std::mem::replace(&mut self.state, State::Done) {
            State::Running(Running { tx, handle }) => {
                // the task may already be gone if it panicked
                let _ = tx.send(signal);
                drop(tx);
                match handle.join() {
                    Ok(out) => self.output = Some(out),
                    Err(_) => tracing::error!(label = %self.label, "progress task panicked"),
                }
                tracing::debug!(label = %self.label, ?signal, "progress finished");
            }
            State::Idle => {
                self.state = State::Idle;
                tracing::warn!(label = %self.label, ?signal, "finish ignored: not started");
            }
            State::Done => {
                tracing::warn!(label = %self.label, ?signal, "finish ignored: already done");
            }
        }
    }

    fn send(&self, signal: Signal) {
        match &self.state {
            State::Running(running) => {
                let _ = running.tx.send(signal);
            }
            _ => tracing::warn!(label = %self.label, ?signal, "signal ignored: not running"),
        }
    }

    /// Current lifecycle state
    pub fn state(&self) -> ProgressState {
        match self.state {
            State::Idle => ProgressState::Idle,
            State::Running(_) => ProgressState::Running,
            State::Done => ProgressState::Done,
        }
    }

    /// Text printed before the indicator
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Indicator variant
    pub fn kind(&self) -> Kind {
        self.kind
    }

    /// Spinner filler or bar width
    pub fn display_length(&self) -> usize {
        self.display_length
    }

    /// The writer, unless a task currently owns it
    pub fn output(&self) -> Option<&W> {
        self.output.as_ref()
    }

    /// Take the writer back, unless a task currently owns it
    pub fn into_output(self) -> Option<W> {
        self.output
    }
}

/// Updates a running bar from any thread
///
/// Signals sent after the indicator finished are dropped.
#[derive(Debug, Clone)]
pub struct ProgressHandle {
    tx: SyncSender<Signal>,
}

impl ProgressHandle {
    /// Set the bar to `fraction` (clamped to `[0, 1]`)
    pub fn update(&self, fraction: f64) {
        let _ = self.tx.send(Signal::Update(clamp_fraction(fraction)));
    }

    /// Advance an incremental bar by one step
    pub fn increment(&self) {
        let _ = self.tx.send(Signal::Increment);
    }
}
