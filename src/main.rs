#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use imapviewer_launcher::{i18n, launcher::Launcher, report::DialogReporter};
use tracing::Level;

fn init_tracing() {
    let max_level = if cfg!(debug_assertions) { Level::DEBUG } else { Level::WARN };
    _ = tracing_subscriber::fmt()
        .with_max_level(max_level)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(false)
        .without_time()
        .try_init();
}

fn main() {
    init_tracing();
    i18n::init();

    let exit_code = Launcher::from_current_exe().run(&mut DialogReporter);
    std::process::exit(exit_code);
}
