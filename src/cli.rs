/// CLI argument parsing and command handling.
use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::Level;

use crate::app::CopyMode;
use crate::clipboard::ClipboardKind;
use crate::color::{self, Color};

#[derive(Parser, Debug)]
#[command(
    name = "pickr",
    version,
    about = "Pickr - A terminal-based color picker"
)]
pub struct Cli {
    /// Initial color as a hex code (#RRGGBB or RRGGBB)
    #[arg(short = 'c', long = "color", value_parser = color::parse_color)]
    pub color: Option<Color>,
    /// What the copy action puts on the clipboard
    #[arg(short = 'm', long = "mode", value_enum, default_value_t = CopyMode::Hex)]
    pub mode: CopyMode,
    /// Clipboard backend
    #[arg(long = "clipboard", value_enum, default_value_t = ClipboardKind::Osc52)]
    pub clipboard: ClipboardKind,
    /// Log level (trace, debug, info, warn, error); overrides PICKR_LOG
    #[arg(long = "log-level")]
    pub log_level: Option<Level>,
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Print a random color
    Random,
    /// Print the hex and rgb forms of a hex color
    Convert {
        #[arg(value_parser = color::parse_color)]
        color: Color,
    },
    /// Print the hex form of decimal channels
    Hex { red: u8, green: u8, blue: u8 },
}

/// Execute a one-shot command, printing to stdout.
pub fn run(command: Command) -> Result<()> {
    for line in render(&command) {
        println!("{line}");
    }
    Ok(())
}

fn render(command: &Command) -> Vec<String> {
    match command {
        Command::Random => describe(color::random_color()),
        Command::Convert { color } => describe(*color),
        Command::Hex { red, green, blue } => {
            vec![format!("#{}", Color::new(*red, *green, *blue).hex_code())]
        }
    }
}

fn describe(color: Color) -> Vec<String> {
    vec![format!("#{}", color.hex_code()), color.to_rgb()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_launch_the_picker() {
        let cli = Cli::try_parse_from(["pickr"]).unwrap();
        assert!(cli.command.is_none());
        assert!(cli.color.is_none());
        assert_eq!(cli.mode, CopyMode::Hex);
        assert_eq!(cli.clipboard, ClipboardKind::Osc52);
        assert!(cli.log_level.is_none());
    }

    #[test]
    fn global_options_parse() {
        let cli = Cli::try_parse_from([
            "pickr",
            "--color",
            "#0a0B0c",
            "--mode",
            "rgb",
            "--clipboard",
            "system",
            "--log-level",
            "debug",
        ])
        .unwrap();
        assert_eq!(cli.color, Some(Color::new(10, 11, 12)));
        assert_eq!(cli.mode, CopyMode::Rgb);
        assert_eq!(cli.clipboard, ClipboardKind::System);
        assert_eq!(cli.log_level, Some(Level::DEBUG));
    }

    #[test]
    fn invalid_color_is_rejected() {
        assert!(Cli::try_parse_from(["pickr", "--color", "12345"]).is_err());
        assert!(Cli::try_parse_from(["pickr", "convert", "zzzzzz"]).is_err());
    }

    #[test]
    fn hex_channels_are_bounded() {
        assert!(Cli::try_parse_from(["pickr", "hex", "256", "0", "0"]).is_err());
        let cli = Cli::try_parse_from(["pickr", "hex", "255", "0", "16"]).unwrap();
        assert_eq!(
            cli.command,
            Some(Command::Hex {
                red: 255,
                green: 0,
                blue: 16
            })
        );
    }

    #[test]
    fn convert_prints_both_forms() {
        let lines = render(&Command::Convert {
            color: Color::new(221, 222, 238),
        });
        assert_eq!(lines, vec!["#DDDEEE", "rgb(221, 222, 238)"]);
    }

    #[test]
    fn hex_prints_copyable_hex() {
        let lines = render(&Command::Hex {
            red: 255,
            green: 0,
            blue: 16,
        });
        assert_eq!(lines, vec!["#FF0010"]);
    }

    #[test]
    fn random_prints_consistent_forms() {
        let lines = render(&Command::Random);
        assert_eq!(lines.len(), 2);
        let parsed = color::parse_color(&lines[0]).unwrap();
        assert_eq!(lines[1], parsed.to_rgb());
    }
}
