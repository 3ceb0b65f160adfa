// SPDX-License-Identifier: MPL-2.0
//! Settings file handling and its effect on a running controller.

mod common;

use common::{catalog_fixture, ScriptedPlayer};
use reelcore::application::port::SeekTolerance;
use reelcore::config::{self, DEFAULT_SKIP_INTERVAL_SECS};
use reelcore::infrastructure::JsonCatalogLoader;
use reelcore::video_player::{player_event_channel, spawn_controller};
use std::fs;
use std::time::Duration;
use tempfile::tempdir;

#[test]
fn test_settings_file_is_read_from_override_directory() {
    let dir = tempdir().expect("tempdir");
    fs::write(
        dir.path().join("settings.toml"),
        "[playback]\nskip_interval_secs = 15.0\ntime_update_interval_secs = 1.0\n\n\
         [overlay]\nauto_hide_secs = 4\n\n[catalog]\npath = \"assets/media.json\"\n",
    )
    .expect("write settings");

    let (config, warning) = config::load_with_override(Some(dir.path().to_path_buf()));

    assert!(warning.is_none());
    assert!((config.skip_interval().value() - 15.0).abs() < f64::EPSILON);
    assert_eq!(config.time_update_interval(), Duration::from_secs(1));
    assert_eq!(config.overlay_timeout().as_duration(), Duration::from_secs(4));
    assert_eq!(
        JsonCatalogLoader::from_config(&config).path(),
        std::path::Path::new("assets/media.json")
    );
}

#[test]
fn test_out_of_range_settings_are_clamped() {
    let dir = tempdir().expect("tempdir");
    fs::write(
        dir.path().join("settings.toml"),
        "[playback]\nskip_interval_secs = 500.0\ntime_update_interval_secs = 0.0\n\n\
         [overlay]\nauto_hide_secs = 0\n",
    )
    .expect("write settings");

    let (config, _) = config::load_with_override(Some(dir.path().to_path_buf()));

    assert!((config.skip_interval().value() - 60.0).abs() < f64::EPSILON);
    assert_eq!(config.time_update_interval(), Duration::from_millis(100));
    assert_eq!(config.overlay_timeout().as_duration(), Duration::from_secs(1));
}

#[test]
fn test_corrupted_settings_fall_back_with_warning() {
    let dir = tempdir().expect("tempdir");
    fs::write(dir.path().join("settings.toml"), "[playback\nskip = ").expect("write settings");

    let (config, warning) = config::load_with_override(Some(dir.path().to_path_buf()));

    assert!(warning.is_some());
    assert!((config.skip_interval().value() - DEFAULT_SKIP_INTERVAL_SECS).abs() < f64::EPSILON);
}

#[tokio::test]
async fn test_configured_skip_interval_drives_default_skips() {
    let dir = tempdir().expect("tempdir");
    fs::write(
        dir.path().join("settings.toml"),
        "[playback]\nskip_interval_secs = 15.0\n",
    )
    .expect("write settings");
    let (config, _) = config::load_with_override(Some(dir.path().to_path_buf()));

    let (events_tx, events_rx) = player_event_channel();
    let player = ScriptedPlayer::new(events_tx);
    let handle = spawn_controller(
        JsonCatalogLoader::new(catalog_fixture()),
        player.clone(),
        events_rx,
        &config,
    );
    let mut states = handle.subscribe();
    states
        .wait_for(|s| s.is_ready_to_play)
        .await
        .expect("first video ready");

    player.tick(30.0);
    states
        .wait_for(|s| s.current_time_text == "0:30")
        .await
        .expect("tick");
    handle.skip_forward_default().expect("controller running");
    handle.skip_backward_default().expect("controller running");
    handle.pause().expect("controller running");
    states.wait_for(|s| !s.is_playing).await.expect("paused");

    assert_eq!(
        player.seeks(),
        vec![(45.0, SeekTolerance::Default), (30.0, SeekTolerance::Default)]
    );
}
