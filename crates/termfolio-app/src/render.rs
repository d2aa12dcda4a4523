//! Console rendering of the transcript.
//!
//! Styling is a function of the entry kind only. The console prints entries
//! it has not shown yet, and redraws from a cleared screen when the
//! transcript shrinks (the `clear` command).

use std::io::{self, Write};

use colored::{Color, ColoredString, Colorize};
use termfolio_terminal::{Payload, ResponseKind, TranscriptEntry};
use termfolio_types::config::ThemeConfig;

/// ANSI: erase display, cursor home.
const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";
/// ANSI: cursor up one line, erase that line.
const ERASE_PREVIOUS_LINE: &str = "\x1b[1A\x1b[2K";

/// Prompt shown before each input line.
pub const PROMPT: &str = "$ ";

/// Resolved colors for each entry style.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub banner: Color,
    pub help: Color,
    pub input: Color,
    pub error: Color,
    pub biography: Color,
    pub links: Color,
    pub text: Color,
}

impl Palette {
    /// Resolve color names from the theme. Unknown names become white.
    pub fn from_theme(theme: &ThemeConfig) -> Self {
        Self {
            banner: parse_color(&theme.banner),
            help: parse_color(&theme.help),
            input: parse_color(&theme.input),
            error: parse_color(&theme.error),
            biography: parse_color(&theme.biography),
            links: parse_color(&theme.links),
            text: parse_color(&theme.text),
        }
    }

    /// Color for a response kind.
    pub fn color_for(&self, kind: ResponseKind) -> Color {
        match kind {
            ResponseKind::Banner => self.banner,
            ResponseKind::Help => self.help,
            ResponseKind::Error => self.error,
            ResponseKind::Biography => self.biography,
            ResponseKind::Links => self.links,
            ResponseKind::Timestamp
            | ResponseKind::Identity
            | ResponseKind::Role
            | ResponseKind::Echo => self.text,
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::from_theme(&ThemeConfig::default())
    }
}

fn parse_color(name: &str) -> Color {
    name.parse().unwrap_or_else(|_| {
        log::warn!("unknown theme color '{name}', using white");
        Color::White
    })
}

/// Format one entry as display lines. Line breaks inside payloads are kept.
pub fn format_entry(entry: &TranscriptEntry, palette: &Palette) -> Vec<ColoredString> {
    match entry {
        TranscriptEntry::Input(raw) => vec![format!("{PROMPT}{raw}").color(palette.input)],
        TranscriptEntry::Response(record) => {
            let color = palette.color_for(record.kind);
            match &record.payload {
                Payload::Text(text) => text
                    .split('\n')
                    .map(|l| l.strip_suffix('\r').unwrap_or(l).color(color))
                    .collect(),
                Payload::Links { intro, links } => {
                    let mut lines = vec![intro.as_str().color(color)];
                    for link in links {
                        let line = format!(
                            "- {}: {}",
                            link.label.color(color),
                            link.url.underline()
                        );
                        lines.push(line.normal());
                    }
                    lines
                },
            }
        },
    }
}

/// Writes transcript updates to a terminal-like sink.
pub struct Console<W: Write> {
    out: W,
    palette: Palette,
    shown: usize,
    erase_echoed_input: bool,
}

impl<W: Write> Console<W> {
    pub fn new(out: W, palette: Palette) -> Self {
        Self {
            out,
            palette,
            shown: 0,
            erase_echoed_input: false,
        }
    }

    /// When the terminal already echoed the typed line after the prompt,
    /// erase it so the transcript shows the input only once.
    pub fn with_erase_echoed_input(mut self, erase: bool) -> Self {
        self.erase_echoed_input = erase;
        self
    }

    /// Print whatever the transcript gained since the last call.
    pub fn render(&mut self, entries: &[TranscriptEntry]) -> io::Result<()> {
        if self.shown > 0 && entries.len() <= self.shown {
            self.out.write_all(CLEAR_SCREEN.as_bytes())?;
            self.shown = 0;
        }
        for entry in &entries[self.shown..] {
            for line in format_entry(entry, &self.palette) {
                writeln!(self.out, "{line}")?;
            }
        }
        self.shown = entries.len();
        self.out.flush()
    }

    pub fn prompt(&mut self) -> io::Result<()> {
        write!(self.out, "{}", PROMPT.color(self.palette.input))?;
        self.out.flush()
    }

    /// Called after a line was read from the user.
    pub fn input_submitted(&mut self) -> io::Result<()> {
        if self.erase_echoed_input {
            self.out.write_all(ERASE_PREVIOUS_LINE.as_bytes())?;
        }
        Ok(())
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }
}
