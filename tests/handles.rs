#![cfg(target_os = "linux")]

use imapviewer_launcher::{
    launcher::{Launcher, APP_DIR, FAILURE_EXIT_CODE, TARGET_NAME},
    report::RecordingReporter
};
use std::{fs, os::unix::fs::PermissionsExt, path::Path};

fn open_fds() -> usize {
    fs::read_dir("/proc/self/fd").map(|dir| dir.count()).unwrap_or(0)
}

fn launch_in(root: &Path) -> i32 {
    let mut reporter = RecordingReporter::new();
    Launcher::with_exe_path(Some(root.join("imapviewer_launcher"))).run(&mut reporter)
}

// Single test in this binary so no other thread opens descriptors meanwhile.
#[test]
fn test_no_descriptors_leak_on_any_path() {
    let root = tempfile::tempdir().unwrap();
    let app_dir = root.path().join(APP_DIR);
    fs::create_dir(&app_dir).unwrap();
    let target = app_dir.join(TARGET_NAME);

    fs::write(&target, "#!/bin/sh\nexit 5\n").unwrap();
    fs::set_permissions(&target, fs::Permissions::from_mode(0o755)).unwrap();

    // Warm up lazily opened descriptors before taking the baseline
    assert_eq!(launch_in(root.path()), 5);
    let baseline = open_fds();

    // Not executable
    fs::set_permissions(&target, fs::Permissions::from_mode(0o644)).unwrap();
    assert_eq!(launch_in(root.path()), FAILURE_EXIT_CODE);
    assert_eq!(open_fds(), baseline);

    // Missing target
    fs::remove_file(&target).unwrap();
    assert_eq!(launch_in(root.path()), FAILURE_EXIT_CODE);
    assert_eq!(open_fds(), baseline);

    fs::write(&target, "#!/bin/sh\nexit 5\n").unwrap();

    // Spawned and waited
    fs::set_permissions(&target, fs::Permissions::from_mode(0o755)).unwrap();
    for _ in 0..3 {
        assert_eq!(launch_in(root.path()), 5);
    }
    assert_eq!(open_fds(), baseline);
}
