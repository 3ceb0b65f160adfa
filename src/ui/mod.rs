// SPDX-License-Identifier: MPL-2.0
//! Screen-side state that lives outside the playback controller.

pub mod state;
