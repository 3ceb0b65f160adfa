// SPDX-License-Identifier: MPL-2.0
//! Runs a [`PlaybackController`] in its own Tokio task.
//!
//! The task owns the controller and serializes three inputs: commands from
//! the screen, events from the player, and the one-shot catalog fetch.
//! Observers read state through the shared [`StateStore`].

use super::controller::PlaybackController;
use super::state::PlaybackState;
use super::store::{StateStore, StateSubscription};
use crate::application::port::{CatalogLoader, Player, PlayerEvent};
use crate::config::Config;
use crate::domain::video::{PlaybackRate, SkipInterval};
use crate::error::{Error, Result};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// Sending half handed to the player adapter.
pub type PlayerEventSender = mpsc::UnboundedSender<PlayerEvent>;

/// Receiving half handed to [`spawn_controller`].
pub type PlayerEventReceiver = mpsc::UnboundedReceiver<PlayerEvent>;

/// Creates the channel a player adapter reports its events on.
#[must_use]
pub fn player_event_channel() -> (PlayerEventSender, PlayerEventReceiver) {
    mpsc::unbounded_channel()
}

/// Commands sent to the controller task.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    LoadVideo(usize),
    SelectVideo { section: usize, row: usize },
    TogglePlayPause,
    Pause,
    EnterBackground,
    BeginSeek,
    /// Commit a drag at this fraction of the duration.
    Seek(f64),
    UpdateSeekPreview(f64),
    SkipForward(f64),
    SkipBackward(f64),
    SetPlaybackRate(PlaybackRate),
    CyclePlaybackRate,
    NextVideo,
    PrevVideo,
}

impl<P: Player> PlaybackController<P> {
    /// Applies one [`Command`].
    pub fn apply(&mut self, command: Command) {
        match command {
            Command::LoadVideo(index) => self.load_video(index),
            Command::SelectVideo { section, row } => self.select_video(section, row),
            Command::TogglePlayPause => self.toggle_play_pause(),
            Command::Pause => self.pause(),
            Command::EnterBackground => self.enter_background(),
            Command::BeginSeek => self.begin_seek(),
            Command::Seek(fraction) => self.seek(fraction),
            Command::UpdateSeekPreview(fraction) => self.update_seek_preview(fraction),
            Command::SkipForward(secs) => self.skip_forward(secs),
            Command::SkipBackward(secs) => self.skip_backward(secs),
            Command::SetPlaybackRate(rate) => self.set_playback_rate(rate),
            Command::CyclePlaybackRate => self.cycle_playback_rate(),
            Command::NextVideo => self.next_video(),
            Command::PrevVideo => self.prev_video(),
        }
    }
}

/// Handle on a running controller task.
///
/// Dropping the handle stops the task once queued commands are processed;
/// the controller then detaches its observers from the player.
#[derive(Debug)]
pub struct PlaybackHandle {
    commands: mpsc::UnboundedSender<Command>,
    store: StateStore,
    skip_interval: SkipInterval,
    task: JoinHandle<()>,
}

/// Spawns the controller task and starts fetching the catalog.
///
/// Must be called from within a Tokio runtime.
pub fn spawn_controller<L, P>(
    loader: L,
    player: P,
    events: PlayerEventReceiver,
    config: &Config,
) -> PlaybackHandle
where
    L: CatalogLoader + 'static,
    P: Player + 'static,
{
    let controller = PlaybackController::new(player, config);
    let store = controller.store().clone();
    let skip_interval = controller.skip_interval();
    let (commands, command_rx) = mpsc::unbounded_channel();

    let task = tokio::spawn(run(controller, loader, command_rx, events));

    PlaybackHandle {
        commands,
        store,
        skip_interval,
        task,
    }
}

async fn run<L, P>(
    mut controller: PlaybackController<P>,
    loader: L,
    mut commands: mpsc::UnboundedReceiver<Command>,
    mut events: PlayerEventReceiver,
) where
    L: CatalogLoader,
    P: Player,
{
    let mut fetch = loader.fetch_catalog();
    let mut fetching = true;
    let mut events_open = true;

    loop {
        tokio::select! {
            result = &mut fetch, if fetching => {
                fetching = false;
                controller.on_catalog_loaded(result);
            }
            command = commands.recv() => match command {
                Some(command) => {
                    tracing::trace!(?command, "controller command");
                    controller.apply(command);
                }
                None => break,
            },
            event = events.recv(), if events_open => match event {
                Some(event) => controller.handle_player_event(event),
                None => {
                    tracing::debug!("player event channel closed");
                    events_open = false;
                }
            },
        }
    }

    tracing::debug!("playback controller stopped");
}

impl PlaybackHandle {
    /// Queues a command for the controller.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ControllerStopped`] once the task has exited.
    pub fn send(&self, command: Command) -> Result<()> {
        self.commands
            .send(command)
            .map_err(|_| Error::ControllerStopped)
    }

    #[must_use]
    pub fn store(&self) -> &StateStore {
        &self.store
    }

    #[must_use]
    pub fn subscribe(&self) -> StateSubscription {
        self.store.subscribe()
    }

    /// Latest published snapshot.
    #[must_use]
    pub fn state(&self) -> PlaybackState {
        self.store.current()
    }

    pub fn load_video(&self, index: usize) -> Result<()> {
        self.send(Command::LoadVideo(index))
    }

    pub fn select_video(&self, section: usize, row: usize) -> Result<()> {
        self.send(Command::SelectVideo { section, row })
    }

    pub fn toggle_play_pause(&self) -> Result<()> {
        self.send(Command::TogglePlayPause)
    }

    pub fn pause(&self) -> Result<()> {
        self.send(Command::Pause)
    }

    pub fn enter_background(&self) -> Result<()> {
        self.send(Command::EnterBackground)
    }

    pub fn begin_seek(&self) -> Result<()> {
        self.send(Command::BeginSeek)
    }

    pub fn seek(&self, fraction: f64) -> Result<()> {
        self.send(Command::Seek(fraction))
    }

    pub fn update_seek_preview(&self, fraction: f64) -> Result<()> {
        self.send(Command::UpdateSeekPreview(fraction))
    }

    pub fn skip_forward(&self, secs: f64) -> Result<()> {
        self.send(Command::SkipForward(secs))
    }

    pub fn skip_backward(&self, secs: f64) -> Result<()> {
        self.send(Command::SkipBackward(secs))
    }

    /// Skips forward by the configured interval.
    pub fn skip_forward_default(&self) -> Result<()> {
        self.skip_forward(self.skip_interval.value())
    }

    /// Skips backward by the configured interval.
    pub fn skip_backward_default(&self) -> Result<()> {
        self.skip_backward(self.skip_interval.value())
    }

    pub fn set_playback_rate(&self, rate: PlaybackRate) -> Result<()> {
        self.send(Command::SetPlaybackRate(rate))
    }

    pub fn cycle_playback_rate(&self) -> Result<()> {
        self.send(Command::CyclePlaybackRate)
    }

    pub fn next_video(&self) -> Result<()> {
        self.send(Command::NextVideo)
    }

    pub fn prev_video(&self) -> Result<()> {
        self.send(Command::PrevVideo)
    }

    /// Stops the task after it drains queued commands, and waits for it.
    pub async fn shutdown(self) {
        let Self { commands, task, .. } = self;
        drop(commands);
        if let Err(err) = task.await {
            tracing::warn!(error = %err, "playback controller task failed");
        }
    }
}
