/// Clipboard sinks the picker can copy into.
use std::io::{self, Write};
use std::process::{Command, Stdio};

use anyhow::{Result, anyhow, bail};
use base64::{Engine, engine::general_purpose::STANDARD};
use clap::ValueEnum;

pub trait Clipboard {
    fn copy(&mut self, text: &str) -> Result<()>;
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum ClipboardKind {
    /// Terminal escape sequence (OSC 52), works over SSH
    #[default]
    Osc52,
    /// Platform copy tool (pbcopy, wl-copy, xclip, xsel, clip)
    System,
    /// Keep copies in memory only
    None,
}

pub fn from_kind(kind: ClipboardKind) -> Box<dyn Clipboard> {
    match kind {
        ClipboardKind::Osc52 => Box::new(Osc52::stdout()),
        ClipboardKind::System => Box::new(SystemCommand),
        ClipboardKind::None => Box::new(Memory::default()),
    }
}

/// Writes the text to the terminal as an OSC 52 sequence:
/// `ESC ] 52 ; c ; <base64> BEL`.
pub struct Osc52<W: Write = io::Stdout> {
    out: W,
}

impl Osc52 {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> Osc52<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }
}

impl<W: Write> Clipboard for Osc52<W> {
    fn copy(&mut self, text: &str) -> Result<()> {
        write!(self.out, "\x1b]52;c;{}\x07", STANDARD.encode(text))?;
        self.out.flush()?;
        Ok(())
    }
}

/// Pipes the text into the first platform copy tool that runs.
pub struct SystemCommand;

#[cfg(target_os = "macos")]
const COPY_TOOLS: &[(&str, &[&str])] = &[("pbcopy", &[])];

#[cfg(target_os = "windows")]
const COPY_TOOLS: &[(&str, &[&str])] = &[("clip", &[])];

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
const COPY_TOOLS: &[(&str, &[&str])] = &[
    ("wl-copy", &[]),
    ("xclip", &["-selection", "clipboard"]),
    ("xsel", &["--clipboard", "--input"]),
];

impl Clipboard for SystemCommand {
    fn copy(&mut self, text: &str) -> Result<()> {
        for &(program, args) in COPY_TOOLS {
            match pipe_to(program, args, text) {
                Ok(()) => return Ok(()),
                Err(err) => tracing::debug!(program, %err, "copy tool unavailable"),
            }
        }
        bail!("no clipboard tool found")
    }
}

fn pipe_to(program: &str, args: &[&str], text: &str) -> Result<()> {
    let mut child = Command::new(program)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()?;
    let written = match child.stdin.take() {
        Some(mut stdin) => stdin.write_all(text.as_bytes()).map_err(anyhow::Error::from),
        None => Err(anyhow!("{program}: stdin not captured")),
    };
    if let Err(err) = written {
        // reap the child so a failed write does not leave a zombie
        let _ = child.kill();
        let _ = child.wait();
        return Err(err);
    }
    let status = child.wait()?;
    if !status.success() {
        bail!("{program} exited with {status}");
    }
    Ok(())
}

/// Keeps every copied string.
#[derive(Debug, Default)]
pub struct Memory {
    pub copied: Vec<String>,
}

impl Clipboard for Memory {
    fn copy(&mut self, text: &str) -> Result<()> {
        self.copied.push(text.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_records_copies() {
        let mut clipboard = Memory::default();
        clipboard.copy("#ABCDEF").unwrap();
        clipboard.copy("rgb(1, 2, 3)").unwrap();
        assert_eq!(clipboard.copied, vec!["#ABCDEF", "rgb(1, 2, 3)"]);
    }

    #[test]
    fn osc52_writes_base64_escape() {
        let mut clipboard = Osc52::new(Vec::new());
        clipboard.copy("#DDDEEE").unwrap();
        assert_eq!(clipboard.out, b"\x1b]52;c;I0REREVFRQ==\x07");
    }

    #[test]
    fn osc52_encodes_rgb_text() {
        let mut clipboard = Osc52::new(Vec::new());
        clipboard.copy("rgb(1, 2, 3)").unwrap();
        let expected = format!("\x1b]52;c;{}\x07", STANDARD.encode("rgb(1, 2, 3)"));
        assert_eq!(clipboard.out, expected.into_bytes());
    }

    #[cfg(unix)]
    #[test]
    fn pipe_to_succeeding_tool() {
        assert!(pipe_to("cat", &[], "#DDDEEE").is_ok());
    }

    #[cfg(unix)]
    #[test]
    fn pipe_to_failing_tool_is_an_error() {
        // `false` exits without reading, so the write or the exit status fails
        let text = "x".repeat(1 << 20);
        assert!(pipe_to("false", &[], &text).is_err());
    }

    #[test]
    fn missing_program_is_an_error() {
        assert!(pipe_to("pickr-no-such-copy-tool", &[], "x").is_err());
    }
}
