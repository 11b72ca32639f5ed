use std::io::{self, Write};

use feed_core::VideoId;

use super::constants::ROW_SEPARATOR;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SurfaceCommand {
    Clear,
    Placeholder { text: String },
    Notice { text: String },
    Row { video_id: VideoId, lines: Vec<String> },
    NavBar { text: String },
}

/// Text surface: every render rewrites the whole feed.
pub struct TerminalSurface<W: Write> {
    out: W,
    clear_screen: bool,
}

impl<W: Write> TerminalSurface<W> {
    pub fn new(out: W, clear_screen: bool) -> Self {
        Self { out, clear_screen }
    }

    #[cfg(test)]
    pub fn get_ref(&self) -> &W {
        &self.out
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }

    pub fn apply(&mut self, commands: &[SurfaceCommand]) -> io::Result<()> {
        for command in commands {
            match command {
                SurfaceCommand::Clear => {
                    if self.clear_screen {
                        write!(self.out, "\x1b[2J\x1b[H")?;
                    }
                }
                SurfaceCommand::Placeholder { text } => writeln!(self.out, "{text}")?,
                SurfaceCommand::Notice { text } => {
                    writeln!(self.out, "+{}+", "-".repeat(text.chars().count() + 2))?;
                    writeln!(self.out, "| {text} |")?;
                    writeln!(self.out, "+{}+", "-".repeat(text.chars().count() + 2))?;
                }
                SurfaceCommand::Row { lines, .. } => {
                    for line in lines {
                        writeln!(self.out, "{line}")?;
                    }
                    writeln!(self.out, "{ROW_SEPARATOR}")?;
                }
                SurfaceCommand::NavBar { text } => writeln!(self.out, "{text}")?,
            }
        }
        self.out.flush()
    }
}
