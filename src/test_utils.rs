// SPDX-License-Identifier: MPL-2.0
//! Test utilities for float comparisons and a scripted player.
//!
//! This module re-exports the `approx` crate's assertion macros for float comparison,
//! which properly handle floating-point precision issues that `assert_eq!` cannot.

// Re-export approx macros for convenient use in tests
pub use approx::assert_abs_diff_eq;

use crate::application::port::{ItemId, Player, SeekTolerance, SeekToken};
use crate::domain::catalog::{Catalog, Category, Video};
use parking_lot::Mutex;
use std::sync::Arc;
use std::time::Duration;

/// One command received by [`FakePlayer`].
#[derive(Debug, Clone, PartialEq)]
pub enum PlayerCall {
    Load(String, ItemId),
    Play,
    Pause,
    Seek {
        to: f64,
        tolerance: SeekTolerance,
        token: SeekToken,
    },
    SetRate(f64),
    Attach(ItemId, Duration),
    Detach(ItemId),
}

#[derive(Debug)]
struct FakeState {
    calls: Vec<PlayerCall>,
    current_time: f64,
    duration: f64,
}

/// Player that records every command. Clones share the same log, so a test
/// can keep one clone while the controller owns another.
#[derive(Debug, Clone)]
pub struct FakePlayer {
    state: Arc<Mutex<FakeState>>,
}

impl FakePlayer {
    /// Duration starts unknown (NaN) and position at zero.
    pub fn new() -> Self {
        Self {
            state: Arc::new(Mutex::new(FakeState {
                calls: Vec::new(),
                current_time: 0.0,
                duration: f64::NAN,
            })),
        }
    }

    pub fn set_duration(&self, secs: f64) {
        self.state.lock().duration = secs;
    }

    pub fn set_time(&self, secs: f64) {
        self.state.lock().current_time = secs;
    }

    pub fn calls(&self) -> Vec<PlayerCall> {
        self.state.lock().calls.clone()
    }

    pub fn clear_calls(&self) {
        self.state.lock().calls.clear();
    }

    /// Seeks issued so far, oldest first.
    pub fn seeks(&self) -> Vec<(f64, SeekTolerance, SeekToken)> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                PlayerCall::Seek {
                    to,
                    tolerance,
                    token,
                } => Some((to, tolerance, token)),
                _ => None,
            })
            .collect()
    }

    pub fn count(&self, wanted: &PlayerCall) -> usize {
        self.state
            .lock()
            .calls
            .iter()
            .filter(|call| *call == wanted)
            .count()
    }

    fn record(&self, call: PlayerCall) {
        self.state.lock().calls.push(call);
    }
}

impl Default for FakePlayer {
    fn default() -> Self {
        Self::new()
    }
}

impl Player for FakePlayer {
    fn load(&mut self, source: &str, item: ItemId) {
        self.record(PlayerCall::Load(source.to_string(), item));
    }

    fn play(&mut self) {
        self.record(PlayerCall::Play);
    }

    fn pause(&mut self) {
        self.record(PlayerCall::Pause);
    }

    fn seek(&mut self, to_secs: f64, tolerance: SeekTolerance, token: SeekToken) {
        self.record(PlayerCall::Seek {
            to: to_secs,
            tolerance,
            token,
        });
    }

    fn set_rate(&mut self, rate: f64) {
        self.record(PlayerCall::SetRate(rate));
    }

    fn current_time(&self) -> f64 {
        self.state.lock().current_time
    }

    fn duration(&self) -> f64 {
        self.state.lock().duration
    }

    fn attach_observers(&mut self, item: ItemId, interval: Duration) {
        self.record(PlayerCall::Attach(item, interval));
    }

    fn detach_observers(&mut self, item: ItemId) {
        self.record(PlayerCall::Detach(item));
    }
}

/// Single-category catalog with `count` playable videos named `Video N`,
/// sourced from `https://media.test/N.mp4`.
pub fn sample_catalog(count: usize) -> Catalog {
    let videos = (0..count)
        .map(|i| Video {
            title: format!("Video {i}"),
            subtitle: format!("By Studio {i}"),
            description: format!("Description {i}"),
            thumb: format!("images/{i}.jpg"),
            sources: vec![format!("https://media.test/{i}.mp4")],
        })
        .collect();
    Catalog {
        categories: vec![Category {
            name: "Movies".to_string(),
            videos,
        }],
    }
}
