// SPDX-License-Identifier: MPL-2.0
//! Shared helpers for the integration tests.
#![allow(dead_code)]

use parking_lot::Mutex;
use reelcore::application::port::{
    ItemId, ItemStatus, Player, PlayerEvent, PlayerEventKind, SeekTolerance, SeekToken,
};
use reelcore::video_player::PlayerEventSender;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

/// Duration reported for every item, in seconds.
pub const MEDIA_DURATION_SECS: f64 = 120.0;

pub fn catalog_fixture() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/data/media.json")
}

#[derive(Debug, Default)]
struct Shared {
    attached: Option<ItemId>,
    loaded: Vec<String>,
    seeks: Vec<(f64, SeekTolerance)>,
    rate: f64,
    playing: bool,
    current_time: f64,
    detached: Vec<ItemId>,
}

/// Player that answers like a real pipeline would, on the event channel:
/// items report ready when their observers attach (sources under
/// `/broken/` report a 404 failure) and seeks complete immediately.
#[derive(Debug, Clone)]
pub struct ScriptedPlayer {
    events: PlayerEventSender,
    shared: Arc<Mutex<Shared>>,
}

impl ScriptedPlayer {
    pub fn new(events: PlayerEventSender) -> Self {
        Self {
            events,
            shared: Arc::new(Mutex::new(Shared {
                rate: 1.0,
                ..Shared::default()
            })),
        }
    }

    /// Item whose observers are attached.
    pub fn attached(&self) -> Option<ItemId> {
        self.shared.lock().attached
    }

    pub fn loaded_sources(&self) -> Vec<String> {
        self.shared.lock().loaded.clone()
    }

    pub fn seeks(&self) -> Vec<(f64, SeekTolerance)> {
        self.shared.lock().seeks.clone()
    }

    pub fn detached(&self) -> Vec<ItemId> {
        self.shared.lock().detached.clone()
    }

    pub fn rate(&self) -> f64 {
        self.shared.lock().rate
    }

    pub fn is_playing(&self) -> bool {
        self.shared.lock().playing
    }

    /// Emits `kind` for `item`, whether or not it is still attached.
    pub fn emit_for(&self, item: ItemId, kind: PlayerEventKind) {
        let _ = self.events.send(PlayerEvent::new(item, kind));
    }

    /// Emits `kind` for the attached item.
    pub fn emit(&self, kind: PlayerEventKind) {
        if let Some(item) = self.attached() {
            self.emit_for(item, kind);
        }
    }

    /// Moves the position and reports a periodic time tick.
    pub fn tick(&self, secs: f64) {
        self.shared.lock().current_time = secs;
        self.emit(PlayerEventKind::PeriodicTime(secs));
    }

    /// Plays through to the end.
    pub fn finish(&self) {
        self.shared.lock().current_time = MEDIA_DURATION_SECS;
        self.emit(PlayerEventKind::DidReachEnd);
    }
}

impl Player for ScriptedPlayer {
    fn load(&mut self, source: &str, _item: ItemId) {
        let mut shared = self.shared.lock();
        shared.loaded.push(source.to_string());
        shared.current_time = 0.0;
    }

    fn play(&mut self) {
        self.shared.lock().playing = true;
    }

    fn pause(&mut self) {
        self.shared.lock().playing = false;
    }

    fn seek(&mut self, to_secs: f64, tolerance: SeekTolerance, token: SeekToken) {
        {
            let mut shared = self.shared.lock();
            shared.seeks.push((to_secs, tolerance));
            shared.current_time = to_secs;
        }
        self.emit(PlayerEventKind::SeekCompleted {
            token,
            finished: true,
        });
    }

    fn set_rate(&mut self, rate: f64) {
        self.shared.lock().rate = rate;
    }

    fn current_time(&self) -> f64 {
        self.shared.lock().current_time
    }

    fn duration(&self) -> f64 {
        MEDIA_DURATION_SECS
    }

    fn attach_observers(&mut self, item: ItemId, _interval: Duration) {
        let broken = {
            let mut shared = self.shared.lock();
            shared.attached = Some(item);
            shared
                .loaded
                .last()
                .is_some_and(|source| source.contains("/broken/"))
        };
        let status = if broken {
            ItemStatus::Failed(Some("404".to_string()))
        } else {
            ItemStatus::Ready
        };
        self.emit_for(item, PlayerEventKind::Status(status));
        self.emit_for(item, PlayerEventKind::PlaybackLikelyToKeepUp(true));
    }

    fn detach_observers(&mut self, item: ItemId) {
        let mut shared = self.shared.lock();
        shared.detached.push(item);
        if shared.attached == Some(item) {
            shared.attached = None;
        }
    }
}
