//! Structured command-line building.
//!
//! Commands handed to the shell are strings, so every argument that comes
//! from outside (package names, versions, interpreter paths) is quoted for
//! the target shell dialect instead of being interpolated raw.

use std::borrow::Cow;

/// The shell language a command line is written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellDialect {
    /// POSIX `sh` (bash, zsh, dash).
    Posix,
    /// Windows PowerShell.
    PowerShell,
}

impl ShellDialect {
    /// Quote a single argument so the shell passes it through unchanged.
    ///
    /// # Example
    ///
    /// ```
    /// use python2go::shell::ShellDialect;
    ///
    /// assert_eq!(ShellDialect::Posix.quote("numpy"), "numpy");
    /// assert_eq!(ShellDialect::Posix.quote("it's"), "'it'\\''s'");
    /// assert_eq!(ShellDialect::PowerShell.quote("C:\\Program Files"), "'C:\\Program Files'");
    /// ```
    pub fn quote<'a>(&self, arg: &'a str) -> Cow<'a, str> {
        match self {
            Self::Posix => shell_words::quote(arg),
            Self::PowerShell => {
                if !arg.is_empty() && arg.chars().all(is_powershell_bare) {
                    Cow::Borrowed(arg)
                } else {
                    Cow::Owned(format!("'{}'", arg.replace('\'', "''")))
                }
            }
        }
    }

    /// Prepare a script for embedding inside a PowerShell double-quoted string.
    ///
    /// Line breaks are removed and the characters PowerShell would interpret
    /// inside `"..."` (backtick, `"`, `$`) are backtick-escaped.
    pub fn embed_in_powershell_string(script: &str) -> String {
        let mut out = String::with_capacity(script.len());
        for c in script.chars() {
            match c {
                '\r' | '\n' => {}
                '`' => out.push_str("``"),
                '"' => out.push_str("`\""),
                '$' => out.push_str("`$"),
                other => out.push(other),
            }
        }
        out
    }
}

fn is_powershell_bare(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.' | '/' | ':' | '=' | '+' | '\\')
}

/// A program invocation rendered to a command string per dialect.
///
/// # Example
///
/// ```
/// use python2go::shell::{CommandLine, ShellDialect};
///
/// let line = CommandLine::new("pip").arg("install").args(["requests", "my pkg"]);
/// assert_eq!(line.render(ShellDialect::Posix), "pip install requests 'my pkg'");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandLine {
    program: String,
    args: Vec<String>,
}

impl CommandLine {
    /// Start a command line for `program`.
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    /// Append one argument.
    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Append several arguments.
    pub fn args(mut self, args: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// Append an argument only when `value` is present.
    pub fn arg_opt(self, flag: &str, value: Option<&str>) -> Self {
        match value {
            Some(value) => self.arg(flag).arg(value),
            None => self,
        }
    }

    /// The program name.
    pub fn program(&self) -> &str {
        &self.program
    }

    /// Render to a single command string for `dialect`.
    pub fn render(&self, dialect: ShellDialect) -> String {
        let program = dialect.quote(&self.program);
        // PowerShell treats a quoted string as an expression, not a call.
        let needs_call_operator =
            dialect == ShellDialect::PowerShell && matches!(program, Cow::Owned(_));
        let mut rendered = if needs_call_operator {
            format!("& {}", program)
        } else {
            program.into_owned()
        };
        for arg in &self.args {
            rendered.push(' ');
            rendered.push_str(&dialect.quote(arg));
        }
        rendered
    }
}
