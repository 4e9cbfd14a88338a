use std::{
    any::Any,
    ffi::OsString,
    io,
    panic::{self, AssertUnwindSafe},
    path::{Path, PathBuf},
    process::Command
};

use tracing::{debug, warn};

use crate::{i18n::t, report::Reporter, utils};

/// Subdirectory of the install root holding the application and its data.
pub const APP_DIR: &str = "app";
/// File name of the application inside [`APP_DIR`], fixed at build time.
pub const TARGET_NAME: &str = env!("LAUNCHER_TARGET_NAME");
pub const FAILURE_EXIT_CODE: i32 = 1;

type ExeResolver = Box<dyn Fn() -> io::Result<PathBuf>>;

pub struct Launcher {
    resolve_exe: ExeResolver,
    args: Vec<OsString>
}

impl Launcher {
    /// The OS is only asked for the executable path once the launch runs, so a
    /// failure there still ends up in [`Launcher::run`]'s report.
    pub fn from_current_exe() -> Launcher {
        let launcher = Self::with_exe_resolver(std::env::current_exe);

        #[cfg(feature = "forward_args")]
        let launcher = launcher.with_args(std::env::args_os().skip(1));

        launcher
    }

    /// Builds a launcher as if it were running from `exe_path`.
    pub fn with_exe_path(exe_path: Option<PathBuf>) -> Launcher {
        Self::with_exe_resolver(move || {
            exe_path
                .clone()
                .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "executable path unavailable"))
        })
    }

    pub fn with_exe_resolver<F>(resolve_exe: F) -> Launcher
    where
        F: Fn() -> io::Result<PathBuf> + 'static
    {
        Launcher {
            resolve_exe: Box::new(resolve_exe),
            args: Vec::new()
        }
    }

    /// Arguments appended after the target path on the child's command line.
    pub fn with_args<I, S>(mut self, args: I) -> Launcher
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>
    {
        self.args = args.into_iter().map(Into::into).collect();
        self
    }

    pub fn install_dir(&self) -> Option<PathBuf> {
        let exe_path = match (self.resolve_exe)() {
            Ok(path) => path,
            Err(e) => {
                warn!(error = %e, "could not resolve the launcher executable path");
                return None;
            }
        };

        exe_path
            .parent()
            .filter(|dir| !dir.as_os_str().is_empty())
            .map(Path::to_path_buf)
    }

    pub fn app_dir(&self) -> Option<PathBuf> {
        Some(self.install_dir()?.join(APP_DIR))
    }

    pub fn target_path(&self) -> Option<PathBuf> {
        Some(self.app_dir()?.join(TARGET_NAME))
    }

    /// Starts the target and blocks until it exits, returning its exit code.
    pub fn launch(&self) -> Result<i32, Error> {
        let Some(app_dir) = self.app_dir() else {
            return Err(Error::TargetNotFound(Path::new(APP_DIR).join(TARGET_NAME)));
        };
        let target = app_dir.join(TARGET_NAME);
        debug!(path = %target.display(), "resolved target");

        if !is_file(&target) {
            return Err(Error::TargetNotFound(target));
        }

        let mut child = Command::new(&target)
            .args(&self.args)
            .current_dir(&app_dir)
            .spawn()
            .map_err(|source| Error::SpawnFailed { path: target.clone(), source })?;
        debug!(pid = child.id(), cwd = %app_dir.display(), "spawned target");

        // The child handle is dropped on both paths below, closing the OS handles.
        let status = child.wait().map_err(Error::WaitFailed)?;
        let code = utils::exit_code(status);
        debug!(code, "target exited");

        Ok(code)
    }

    /// Launches the target and turns every failure into one report plus
    /// [`FAILURE_EXIT_CODE`].
    pub fn run(&self, reporter: &mut dyn Reporter) -> i32 {
        run_guarded(reporter, || self.launch())
    }
}

fn run_guarded<F>(reporter: &mut dyn Reporter, f: F) -> i32
where
    F: FnOnce() -> Result<i32, Error>
{
    let result = panic::catch_unwind(AssertUnwindSafe(f))
        .unwrap_or_else(|payload| Err(Error::Unexpected(panic_message(payload.as_ref()))));

    match result {
        Ok(code) => code,
        Err(e) => {
            warn!(error = ?e, "launch failed");
            reporter.report(&e.to_string());
            FAILURE_EXIT_CODE
        }
    }
}

fn is_file(path: &Path) -> bool {
    std::fs::metadata(path)
        .map(|metadata| metadata.is_file())
        .unwrap_or(false)
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_owned()
    }
    else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    }
    else {
        "unknown panic".to_owned()
    }
}

#[derive(Debug)]
pub enum Error {
    TargetNotFound(PathBuf),
    SpawnFailed {
        path: PathBuf,
        source: io::Error
    },
    WaitFailed(io::Error),
    Unexpected(String)
}

impl Error {
    fn os_code(e: &io::Error) -> String {
        match e.raw_os_error() {
            Some(code) => code.to_string(),
            None => t!("error.unknown_code").into()
        }
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::TargetNotFound(path) => write!(f, "{}", t!("error.target_not_found", path = path.display())),
            Error::SpawnFailed { path, source } => write!(
                f,
                "{}",
                t!("error.spawn_failed", path = path.display(), code = Self::os_code(source))
            ),
            Error::WaitFailed(e) => write!(f, "{}", t!("error.wait_failed", code = Self::os_code(e))),
            Error::Unexpected(details) => write!(f, "{}", t!("error.unexpected", details = details)),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::SpawnFailed { source, .. } => Some(source),
            Error::WaitFailed(e) => Some(e),
            _ => None
        }
    }
}
