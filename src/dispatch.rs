use crate::env::{self, Environment};
use crate::error::Error;
use crate::history::DirectoryHistory;
use crate::vfs::Vfs;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Mutable session state shared between the dispatcher and registered
/// command handlers: the environment, the directory history, and the
/// filesystem the session runs against.
pub struct ShellState {
    pub env: Environment,
    pub history: DirectoryHistory,
    fs: Box<dyn Vfs>,
}

impl ShellState {
    /// Seed the history with the environment's working directory.
    pub fn new(fs: Box<dyn Vfs>, env: Environment) -> Self {
        let history = DirectoryHistory::new(env.current_dir.clone());
        Self { env, history, fs }
    }

    pub fn fs(&self) -> &dyn Vfs {
        self.fs.as_ref()
    }

    /// Change the working directory to `target` (resolved against the
    /// current one when relative). On success the environment is updated to
    /// the canonical path, and the move is appended to the history when
    /// `record` is set; navigation commands pass `record = false` so
    /// revisiting an entry does not grow the log. On failure nothing
    /// changes.
    pub fn change_dir(&mut self, target: &Path, record: bool) -> Result<(), Error> {
        let target = if target.is_absolute() {
            target.to_path_buf()
        } else {
            self.env.current_dir.join(target)
        };

        let changed = |source| Error::ChangeDirFailed {
            path: target.clone(),
            source,
        };
        let canonical = self.fs.canonicalize(&target).map_err(changed)?;
        self.fs.set_current_dir(&canonical).map_err(changed)?;

        self.env.current_dir = canonical.clone();
        if record {
            self.history.add(canonical);
        }
        Ok(())
    }
}

/// A command implemented in-process. Handlers get the session state and the
/// arguments after the command name; any error they raise is reported at the
/// dispatch boundary and never ends the session.
pub type Handler = Box<dyn FnMut(&mut ShellState, &[String]) -> anyhow::Result<()>>;

/// What the session loop should do after a dispatch.
#[derive(Debug, PartialEq, Eq)]
pub enum Control {
    Continue,
    Exit,
}

/// Routes a tokenized command line to a registered handler, a built-in, or
/// an external process, in that order.
#[derive(Default)]
pub struct Dispatcher {
    registry: HashMap<String, Handler>,
}

impl Dispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an in-process command. Registering the same name again
    /// replaces the earlier handler.
    pub fn register<F>(&mut self, name: impl Into<String>, handler: F)
    where
        F: FnMut(&mut ShellState, &[String]) -> anyhow::Result<()> + 'static,
    {
        self.registry.insert(name.into(), Box::new(handler));
    }

    /// Execute one tokenized command line.
    ///
    /// Lookup order: the registry first (so user commands can shadow the
    /// built-ins), then `cd` and `exit`, then external program execution.
    /// Every failure is reported and the session continues; only `exit`
    /// stops the loop.
    pub fn dispatch(&mut self, state: &mut ShellState, argv: &[String]) -> Control {
        let Some((name, args)) = argv.split_first() else {
            return Control::Continue;
        };

        if let Some(handler) = self.registry.get_mut(name) {
            if let Err(err) = handler(state, args) {
                eprintln!("{name}: {err}");
            }
            return Control::Continue;
        }

        match name.as_str() {
            "cd" => {
                let target = args
                    .first()
                    .map(PathBuf::from)
                    .unwrap_or_else(env::home_dir);
                match state.change_dir(&target, true) {
                    Ok(()) => println!("changed directory to {}", state.history.current().display()),
                    Err(err) => eprintln!("{err}"),
                }
                Control::Continue
            }
            "exit" => Control::Exit,
            _ => {
                if let Err(err) = run_external(state, name, args) {
                    eprintln!("{err}");
                }
                Control::Continue
            }
        }
    }
}

/// Spawn an external program with inherited standard streams and block until
/// it terminates. A spawn failure is a diagnostic, not a session error; the
/// child's own exit status is not interpreted.
fn run_external(state: &ShellState, program: &str, args: &[String]) -> Result<(), Error> {
    let spawn_failed = |source| Error::SpawnFailed {
        program: program.to_string(),
        source,
    };
    let mut child = Command::new(program)
        .args(args)
        .current_dir(&state.env.current_dir)
        .spawn()
        .map_err(spawn_failed)?;
    child.wait().map_err(spawn_failed)?;
    Ok(())
}
