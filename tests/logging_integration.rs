// SPDX-License-Identifier: MPL-2.0
//! Global subscriber installation. Kept in its own test binary so the
//! installed subscriber does not leak into other tests.

use reelcore::config::Config;
use reelcore::logging;

#[test]
fn test_init_installs_once() {
    let config = Config::default();
    assert!(logging::init(&config), "first install succeeds");
    assert!(!logging::init(&config), "second install is a no-op");
    assert!(!logging::init_with_level("debug"));
}
