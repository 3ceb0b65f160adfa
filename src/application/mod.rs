// SPDX-License-Identifier: MPL-2.0
//! Application layer - ports between the playback core and the outside world.
//!
//! - [`port`]: Trait definitions (interfaces) for dependency inversion
//!
//! # Dependency Rule
//!
//! - The application layer depends on the domain layer (uses domain types)
//! - Infrastructure implements application layer ports
//! - The playback engine (`video_player`) only talks to ports

pub mod port;
