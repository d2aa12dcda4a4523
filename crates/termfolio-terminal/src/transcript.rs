//! Session transcript: the ordered history shown to the user.
//!
//! The store starts with a single banner entry. Each submitted line adds
//! the echoed input and its response; `clear` resets to the banner.

use serde::Serialize;

use crate::interpreter::{CommandOutput, Interpreter, ResponseKind, ResponseRecord};

/// Welcome text shown at session start and after every reset.
pub const BANNER: &str = "Welcome to Terminal v1.0.0\nType 'help' to see available commands";

/// One transcript line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "entry", content = "value", rename_all = "snake_case")]
pub enum TranscriptEntry {
    /// The line exactly as the user typed it.
    Input(String),
    Response(ResponseRecord),
}

impl TranscriptEntry {
    /// A fresh banner entry.
    pub fn banner() -> Self {
        TranscriptEntry::Response(ResponseRecord::text(ResponseKind::Banner, BANNER))
    }

    pub fn is_banner(&self) -> bool {
        matches!(self, TranscriptEntry::Response(r) if r.kind == ResponseKind::Banner)
    }
}

/// Transcript owned by one session.
pub struct TranscriptStore {
    interpreter: Interpreter,
    entries: Vec<TranscriptEntry>,
}

impl TranscriptStore {
    /// Create a store holding only the banner.
    pub fn new(interpreter: Interpreter) -> Self {
        Self {
            interpreter,
            entries: vec![TranscriptEntry::banner()],
        }
    }

    /// Interpret `raw` and record the outcome. Returns the full transcript.
    ///
    /// `clear` resets the transcript without recording the input; every
    /// other line appends exactly two entries.
    pub fn submit(&mut self, raw: &str) -> &[TranscriptEntry] {
        match self.interpreter.interpret(raw) {
            CommandOutput::Clear => self.reset(),
            CommandOutput::Response(record) => {
                self.entries.push(TranscriptEntry::Input(raw.to_string()));
                self.entries.push(TranscriptEntry::Response(record));
            },
        }
        &self.entries
    }

    /// Discard all entries and start over from the banner.
    pub fn reset(&mut self) {
        self.entries.clear();
        self.entries.push(TranscriptEntry::banner());
    }

    pub fn current(&self) -> &[TranscriptEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false: a store holds at least the banner.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpreter::Payload;

    fn store() -> TranscriptStore {
        TranscriptStore::new(Interpreter::with_builtins())
    }

    #[test]
    fn starts_with_banner_only() {
        let s = store();
        assert_eq!(s.len(), 1);
        assert!(!s.is_empty());
        assert!(s.current()[0].is_banner());
        assert_eq!(
            s.current()[0],
            TranscriptEntry::Response(ResponseRecord {
                kind: ResponseKind::Banner,
                payload: Payload::Text(
                    "Welcome to Terminal v1.0.0\nType 'help' to see available commands".into()
                ),
            })
        );
    }

    #[test]
    fn submit_appends_input_then_response() {
        let mut s = store();
        let entries = s.submit("WhoAmI ");
        assert_eq!(entries.len(), 3);
        assert!(entries[0].is_banner());
        assert_eq!(entries[1], TranscriptEntry::Input("WhoAmI ".to_string()));
        match &entries[2] {
            TranscriptEntry::Response(r) => assert_eq!(r.kind, ResponseKind::Identity),
            TranscriptEntry::Input(_) => panic!("expected response"),
        }
    }

    #[test]
    fn unknown_command_still_appends_two() {
        let mut s = store();
        s.submit("");
        s.submit("nope");
        assert_eq!(s.len(), 5);
        assert_eq!(s.current()[3], TranscriptEntry::Input("nope".into()));
    }

    #[test]
    fn clear_resets_to_banner() {
        let mut s = store();
        s.submit("help");
        s.submit("echo hi");
        s.submit("date");
        assert_eq!(s.len(), 7);
        let entries = s.submit(" Clear");
        assert_eq!(entries, [TranscriptEntry::banner()]);
    }

    #[test]
    fn clear_on_fresh_store() {
        let mut s = store();
        s.submit("clear");
        assert_eq!(s.current(), [TranscriptEntry::banner()]);
    }

    #[test]
    fn reset_is_idempotent() {
        let mut s = store();
        s.submit("about");
        s.reset();
        let once = s.current().to_vec();
        s.reset();
        assert_eq!(s.current(), once.as_slice());
        assert_eq!(s.len(), 1);
    }

    #[test]
    fn json_shape() {
        let mut s = store();
        s.submit("echo Hi");
        let json = serde_json::to_value(s.current()).unwrap();
        assert_eq!(json[0]["entry"], "response");
        assert_eq!(json[0]["value"]["kind"], "banner");
        assert_eq!(json[1]["entry"], "input");
        assert_eq!(json[1]["value"], "echo Hi");
        assert_eq!(json[2]["value"]["kind"], "echo");
        assert_eq!(json[2]["value"]["payload"]["text"], "hi");
    }

    #[test]
    fn json_links_payload() {
        let mut s = store();
        s.submit("links");
        let json = serde_json::to_value(s.current()).unwrap();
        let payload = &json[2]["value"]["payload"]["links"];
        assert_eq!(payload["intro"], "Here are my social media links:");
        assert_eq!(payload["links"][2]["label"], "GitHub");
    }

    mod prop {
        use super::*;
        use proptest::prelude::*;

        fn arb_line() -> impl Strategy<Value = String> {
            prop_oneof![
                Just("clear".to_string()),
                Just("help".to_string()),
                Just("whoami".to_string()),
                Just("links".to_string()),
                "echo [a-z ]{0,10}",
                "[A-Za-z ]{0,12}",
            ]
        }

        proptest! {
            #[test]
            fn submit_grows_by_two_or_resets(lines in proptest::collection::vec(arb_line(), 1..30)) {
                let mut s = store();
                for line in &lines {
                    let before = s.len();
                    let is_clear = line.trim().eq_ignore_ascii_case("clear");
                    let after = s.submit(line).len();
                    if is_clear {
                        prop_assert_eq!(after, 1);
                        prop_assert!(s.current()[0].is_banner());
                    } else {
                        prop_assert_eq!(after, before + 2);
                    }
                }
            }
        }
    }
}
