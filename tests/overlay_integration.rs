// SPDX-License-Identifier: MPL-2.0
//! Control overlay auto-hide driven by a running playback controller.

mod common;

use common::ScriptedPlayer;
use reelcore::config::Config;
use reelcore::domain::catalog::Catalog;
use reelcore::infrastructure::InMemoryCatalogLoader;
use reelcore::ui::state::{AutoHideScheduler, OverlayTimeout, OverlayVisibility};
use reelcore::video_player::{player_event_channel, spawn_controller, PlaybackHandle};
use std::time::Duration;
use tokio::time::sleep;

const CATALOG: &str = include_str!("data/media.json");

async fn start() -> (PlaybackHandle, AutoHideScheduler) {
    let catalog = Catalog::from_json(CATALOG).expect("fixture decodes");
    let (events_tx, events_rx) = player_event_channel();
    let config = Config::default();
    let handle = spawn_controller(
        InMemoryCatalogLoader::new(catalog),
        ScriptedPlayer::new(events_tx),
        events_rx,
        &config,
    );
    handle
        .subscribe()
        .wait_for(|s| s.is_playing && s.is_ready_to_play)
        .await
        .expect("playing");

    let scheduler = AutoHideScheduler::for_store(
        config.overlay_timeout(),
        OverlayVisibility::new(),
        handle.store().clone(),
    );
    (handle, scheduler)
}

async fn pause(handle: &PlaybackHandle) {
    let mut states = handle.subscribe();
    handle.pause().expect("controller running");
    states.wait_for(|s| !s.is_playing).await.expect("paused");
}

#[tokio::test(start_paused = true)]
async fn test_overlay_hides_after_timeout_while_playing() {
    let (_handle, mut scheduler) = start().await;
    let overlay = scheduler.overlay().clone();
    scheduler.on_playing_changed(true);

    sleep(Duration::from_millis(1900)).await;
    assert!(overlay.is_visible());

    sleep(Duration::from_millis(200)).await;
    assert!(!overlay.is_visible());
    assert!(!scheduler.is_pending());
}

#[tokio::test(start_paused = true)]
async fn test_pausing_before_timeout_keeps_overlay() {
    let (handle, mut scheduler) = start().await;
    let overlay = scheduler.overlay().clone();
    scheduler.on_playing_changed(true);

    pause(&handle).await;
    scheduler.on_playing_changed(false);

    sleep(Duration::from_secs(5)).await;
    assert!(overlay.is_visible());
}

#[tokio::test(start_paused = true)]
async fn test_timer_checks_playback_when_it_fires() {
    let (handle, mut scheduler) = start().await;
    let overlay = scheduler.overlay().clone();
    scheduler.schedule();

    // Paused without telling the scheduler.
    pause(&handle).await;

    sleep(Duration::from_secs(3)).await;
    assert!(overlay.is_visible());
}

#[tokio::test(start_paused = true)]
async fn test_drag_holds_overlay_until_release() {
    let (_handle, mut scheduler) = start().await;
    let overlay = scheduler.overlay().clone();
    scheduler.on_playing_changed(true);

    scheduler.on_seek_drag_start();
    sleep(Duration::from_secs(5)).await;
    assert!(overlay.is_visible());

    scheduler.on_seek_drag_end();
    sleep(Duration::from_millis(2100)).await;
    assert!(!overlay.is_visible());
}

#[tokio::test(start_paused = true)]
async fn test_tap_shows_overlay_and_rearms_timer() {
    let (_handle, mut scheduler) = start().await;
    let overlay = scheduler.overlay().clone();

    scheduler.hide_overlay();
    assert!(!overlay.is_visible());

    scheduler.show_overlay();
    assert!(overlay.is_visible());
    assert!(scheduler.is_pending());

    sleep(Duration::from_millis(2100)).await;
    assert!(!overlay.is_visible());
}

#[tokio::test(start_paused = true)]
async fn test_configured_timeout_is_used() {
    let (handle, _default) = start().await;
    let overlay = OverlayVisibility::new();
    let mut scheduler = AutoHideScheduler::for_store(
        OverlayTimeout::new(5),
        overlay.clone(),
        handle.store().clone(),
    );
    scheduler.schedule();

    sleep(Duration::from_secs(4)).await;
    assert!(overlay.is_visible());
    sleep(Duration::from_millis(1100)).await;
    assert!(!overlay.is_visible());
}
