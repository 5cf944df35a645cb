use crate::dispatch::{Control, Dispatcher, ShellState};
use crate::env::Environment;
use crate::transform::Transformer;
use crate::vfs::OsFs;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;

/// The interactive loop: read a line, rewrite directives, tokenize,
/// dispatch, repeat.
///
/// Line editing and in-session input history come from `rustyline`; this
/// type only orchestrates. End-of-input or an interrupt cleanly ends the
/// session, as does the `exit` built-in.
pub struct Session {
    state: ShellState,
    dispatcher: Dispatcher,
    limit: usize,
}

impl Session {
    /// Build a session against the real filesystem, with the downward-search
    /// entry budget set to `limit`. The directory history is seeded with the
    /// process working directory.
    pub fn new(limit: usize) -> anyhow::Result<Self> {
        let env = Environment::capture()?;
        Ok(Self {
            state: ShellState::new(Box::new(OsFs), env),
            dispatcher: Dispatcher::new(),
            limit,
        })
    }

    /// Register an in-process command; see [`Dispatcher::register`].
    pub fn register<F>(&mut self, name: impl Into<String>, handler: F)
    where
        F: FnMut(&mut ShellState, &[String]) -> anyhow::Result<()> + 'static,
    {
        self.dispatcher.register(name, handler);
    }

    /// Run until `exit`, end-of-input or an interrupt.
    pub fn run(&mut self) -> anyhow::Result<()> {
        let mut rl = DefaultEditor::new()?;

        loop {
            let prompt = format!("pathsh:{}$ ", self.state.env.current_dir.display());
            match rl.readline(&prompt) {
                Ok(line) => {
                    let line = line.trim();
                    if line.is_empty() {
                        continue;
                    }
                    rl.add_history_entry(line)?;
                    if self.eval(line) == Control::Exit {
                        break;
                    }
                }
                Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
                Err(err) => {
                    eprintln!("error: {err}");
                    break;
                }
            }
        }

        println!("exiting pathsh");
        Ok(())
    }

    /// Transform and dispatch one non-empty input line.
    fn eval(&mut self, line: &str) -> Control {
        let cwd = self.state.env.current_dir.clone();
        let transformed = Transformer::new(self.state.fs(), self.limit).transform(line, &cwd);

        for err in &transformed.errors {
            eprintln!("[find error] {err}");
        }
        if transformed.line != line {
            println!("[transformed] {line} -> {}", transformed.line);
        }

        let argv: Vec<String> = transformed
            .line
            .split_whitespace()
            .map(str::to_string)
            .collect();
        if argv.is_empty() {
            return Control::Continue;
        }
        self.dispatcher.dispatch(&mut self.state, &argv)
    }
}
