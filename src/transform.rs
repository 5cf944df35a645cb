use crate::error::Error;
use crate::search::{downward_search, upward_search};
use crate::vfs::Vfs;
use std::path::Path;

/// Which way a directive searches from the current directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// `<name`: ancestor walk for a subdirectory.
    Upward,
    /// `>pattern`: bounded breadth-first walk for a file suffix.
    Downward,
}

impl Direction {
    fn marker(self) -> char {
        match self {
            Direction::Upward => '<',
            Direction::Downward => '>',
        }
    }
}

/// One path-search token scanned out of the input line.
#[derive(Debug, PartialEq, Eq)]
pub struct Directive {
    pub direction: Direction,
    pub pattern: String,
}

/// A piece of the input line: literal text, or a directive to resolve.
#[derive(Debug, PartialEq, Eq)]
enum Segment {
    Text(String),
    Directive(Directive),
}

/// Characters allowed in a directive pattern. A marker followed by anything
/// else is treated as literal text.
fn is_path_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '-' | '/')
}

/// Split a line into literal text and directive tokens.
///
/// A directive is a `<` or `>` immediately followed by one or more path-safe
/// characters; the scan consumes each token as it is found, so matches cannot
/// overlap. There is no escaping mechanism.
fn scan(line: &str) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut text = String::new();
    let mut chars = line.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch != '<' && ch != '>' {
            text.push(ch);
            continue;
        }

        let mut pattern = String::new();
        while let Some(&next) = chars.peek() {
            if is_path_char(next) {
                pattern.push(next);
                chars.next();
            } else {
                break;
            }
        }

        if pattern.is_empty() {
            // A bare marker is just text.
            text.push(ch);
            continue;
        }

        if !text.is_empty() {
            segments.push(Segment::Text(std::mem::take(&mut text)));
        }
        let direction = if ch == '<' {
            Direction::Upward
        } else {
            Direction::Downward
        };
        segments.push(Segment::Directive(Directive { direction, pattern }));
    }

    if !text.is_empty() {
        segments.push(Segment::Text(text));
    }
    segments
}

/// Result of one transformation pass: the rewritten line and the failures
/// encountered along the way. Failed directives stay verbatim in `line`, so
/// an input without directives comes back character-for-character identical.
pub struct Transformed {
    pub line: String,
    pub errors: Vec<Error>,
}

/// Rewrites path-search directives in a command line into resolved paths.
pub struct Transformer<'f> {
    fs: &'f dyn Vfs,
    limit: usize,
}

impl<'f> Transformer<'f> {
    /// `limit` is the entry budget passed to every downward search.
    pub fn new(fs: &'f dyn Vfs, limit: usize) -> Self {
        Self { fs, limit }
    }

    /// Resolve every directive in `line` against `cwd`, left to right.
    ///
    /// Successful resolutions replace the directive with the absolute path;
    /// failures keep the original token in place and are collected for the
    /// caller to report. Text outside directives is copied unchanged.
    pub fn transform(&self, line: &str, cwd: &Path) -> Transformed {
        let mut out = String::with_capacity(line.len());
        let mut errors = Vec::new();

        for segment in scan(line) {
            match segment {
                Segment::Text(text) => out.push_str(&text),
                Segment::Directive(directive) => {
                    let resolved = match directive.direction {
                        Direction::Upward => upward_search(self.fs, &directive.pattern, cwd),
                        Direction::Downward => {
                            downward_search(self.fs, &directive.pattern, cwd, self.limit)
                        }
                    };
                    match resolved {
                        Ok(path) => out.push_str(&path.to_string_lossy()),
                        Err(err) => {
                            out.push(directive.direction.marker());
                            out.push_str(&directive.pattern);
                            errors.push(err);
                        }
                    }
                }
            }
        }

        Transformed { line: out, errors }
    }
}
