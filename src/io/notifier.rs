use std::io::{self, Write};

use tracing::{debug, warn};

/// Whether desktop notifications may be shown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Permission {
    /// Not asked yet
    Default,
    Granted,
    Denied,
    /// The host cannot show notifications at all
    Unsupported,
}

/// Desktop notification collaborator. Every call is best effort: failures
/// and missing permission are swallowed, never surfaced.
pub trait Notifier {
    fn permission(&self) -> Permission;
    /// Ask for permission. Returns the resulting state.
    fn request_permission(&mut self) -> Permission;
    /// Show a notification. `tag` identifies the subject so the host can
    /// replace an earlier notification with the same tag.
    fn notify(&mut self, title: &str, body: &str, tag: &str);
}

/// Terminals known to turn OSC 9 sequences into desktop notifications
const OSC9_PROGRAMS: &[&str] = &["iTerm.app", "WezTerm", "ghostty", "rio"];
const OSC9_TERMS: &[&str] = &["xterm-kitty", "foot", "foot-extra", "xterm-ghostty"];

/// Decide from `TERM` / `TERM_PROGRAM` whether the terminal shows OSC 9
/// notifications.
pub fn terminal_supports_osc9(term: Option<&str>, term_program: Option<&str>) -> bool {
    term_program.is_some_and(|p| OSC9_PROGRAMS.contains(&p))
        || term.is_some_and(|t| OSC9_TERMS.contains(&t))
}

/// Build the OSC 9 escape sequence for a notification. Control characters
/// in the text would end the sequence early, so they are replaced.
pub fn osc9_sequence(title: &str, body: &str) -> String {
    let clean = |s: &str| -> String {
        s.chars()
            .map(|c| if c.is_control() { ' ' } else { c })
            .collect()
    };
    format!("\x1b]9;{}: {}\x07", clean(title), clean(body))
}

/// Notifier that asks the terminal to raise a desktop notification
pub struct TerminalNotifier<W: Write> {
    out: W,
    permission: Permission,
}

impl TerminalNotifier<io::Stdout> {
    /// Detect support from the environment
    pub fn from_env() -> Self {
        let term = std::env::var("TERM").ok();
        let term_program = std::env::var("TERM_PROGRAM").ok();
        let supported = terminal_supports_osc9(term.as_deref(), term_program.as_deref());
        TerminalNotifier::new(io::stdout(), supported)
    }
}

impl<W: Write> TerminalNotifier<W> {
    pub fn new(out: W, supported: bool) -> Self {
        TerminalNotifier {
            out,
            permission: if supported {
                Permission::Default
            } else {
                Permission::Unsupported
            },
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Notifier for TerminalNotifier<W> {
    fn permission(&self) -> Permission {
        self.permission
    }

    fn request_permission(&mut self) -> Permission {
        // There is no prompt to show in a terminal; a supported host grants.
        if self.permission == Permission::Default {
            self.permission = Permission::Granted;
        }
        self.permission
    }

    fn notify(&mut self, title: &str, body: &str, tag: &str) {
        if self.permission != Permission::Granted {
            debug!(tag, "notification skipped, permission {:?}", self.permission);
            return;
        }
        let seq = osc9_sequence(title, body);
        if let Err(e) = self
            .out
            .write_all(seq.as_bytes())
            .and_then(|()| self.out.flush())
        {
            warn!(tag, error = %e, "could not write notification");
        }
    }
}

/// Notifier for sessions where desktop notifications are turned off
#[derive(Debug, Default)]
pub struct DisabledNotifier;

impl Notifier for DisabledNotifier {
    fn permission(&self) -> Permission {
        Permission::Denied
    }

    fn request_permission(&mut self) -> Permission {
        Permission::Denied
    }

    fn notify(&mut self, _title: &str, _body: &str, _tag: &str) {}
}
