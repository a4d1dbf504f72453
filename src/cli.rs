/// CLI argument parsing and command handling.
use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::clipboard::{COPY_NOTICE, Clipboard, SystemClipboard};
use crate::color::{ColorMode, ColorSource, RandomSource};

#[derive(Parser)]
#[command(
    name = "randcolor",
    version,
    about = "randcolor - A terminal-based random color generator"
)]
pub struct Cli {
    /// Notation the interactive view starts in, or that `generate` prints.
    #[arg(short, long, global = true, default_value = "hex")]
    pub mode: ColorMode,
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print random colors without starting the interactive view.
    Generate {
        #[arg(short = 'n', long, default_value_t = 1)]
        count: u32,
        /// Copy the last color to the clipboard. On Linux the command keeps
        /// running until another application takes the clipboard over.
        #[arg(short, long)]
        copy: bool,
    },
}

/// Execute a CLI command.
pub fn run(command: Command, mode: ColorMode) -> Result<()> {
    match command {
        Command::Generate { count, copy } => {
            let mut stdout = std::io::stdout().lock();
            let mut clipboard = SystemClipboard::holding();
            handle_generate(mode, count, copy, &mut RandomSource, &mut clipboard, &mut stdout)
        }
    }
}

fn handle_generate(
    mode: ColorMode,
    count: u32,
    copy: bool,
    source: &mut dyn ColorSource,
    clipboard: &mut dyn Clipboard,
    out: &mut dyn std::io::Write,
) -> Result<()> {
    let mut last = None;
    for _ in 0..count {
        let text = source.generate().format(mode);
        writeln!(out, "{text}")?;
        last = Some(text);
    }

    if let (true, Some(text)) = (copy, last) {
        // The write may block until the clipboard changes hands.
        out.flush()?;
        // Same notice whether or not the write went through.
        if let Err(err) = clipboard.write_text(&text) {
            tracing::warn!(%text, "clipboard write failed: {err:#}");
        }
        writeln!(out, "{COPY_NOTICE}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use clap::CommandFactory;

    use super::*;
    use crate::clipboard::tests::Recording;
    use crate::color::Rgb;
    use crate::color::tests::Scripted;

    fn generate(mode: ColorMode, count: u32, copy: bool, clipboard: &mut Recording) -> String {
        let mut source = Scripted::new(&[Rgb::new(255, 0, 16), Rgb::new(1, 2, 3)]);
        let mut out = Vec::new();
        handle_generate(mode, count, copy, &mut source, clipboard, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn mode_defaults_to_hex() {
        let cli = Cli::try_parse_from(["randcolor"]).unwrap();
        assert_eq!(cli.mode, ColorMode::Hex);
        assert!(cli.command.is_none());
    }

    #[test]
    fn generate_parses_flags() {
        let cli = Cli::try_parse_from(["randcolor", "generate", "-m", "rgb", "-n", "3", "--copy"])
            .unwrap();
        match cli.command {
            Some(Command::Generate { count, copy }) => {
                assert_eq!(cli.mode, ColorMode::Rgb);
                assert_eq!(count, 3);
                assert!(copy);
            }
            None => panic!("expected generate"),
        }
    }

    #[test]
    fn mode_applies_to_generate_on_either_side() {
        for args in [
            ["randcolor", "--mode", "rgb", "generate"],
            ["randcolor", "generate", "--mode", "rgb"],
        ] {
            let cli = Cli::try_parse_from(args).unwrap();
            assert_eq!(cli.mode, ColorMode::Rgb);
            assert!(matches!(cli.command, Some(Command::Generate { .. })));
        }
    }

    #[test]
    fn unknown_mode_is_rejected() {
        assert!(Cli::try_parse_from(["randcolor", "--mode", "hsl"]).is_err());
    }

    #[test]
    fn generate_prints_one_color_per_line() {
        let mut clipboard = Recording::default();
        let out = generate(ColorMode::Rgb, 2, false, &mut clipboard);
        assert_eq!(out, "rgb(255, 0, 16)\nrgb(1, 2, 3)\n");
        assert!(clipboard.writes().is_empty());
    }

    #[test]
    fn generate_copy_writes_last_color() {
        let mut clipboard = Recording::default();
        let out = generate(ColorMode::Hex, 2, true, &mut clipboard);
        assert_eq!(clipboard.writes(), vec!["#010203"]);
        assert!(out.ends_with(&format!("{COPY_NOTICE}\n")));
    }

    /// Buffered stdout stand-in; bytes only become visible on flush.
    #[derive(Default)]
    struct Buffered {
        pending: Vec<u8>,
        flushed: Arc<Mutex<Vec<u8>>>,
    }

    impl std::io::Write for Buffered {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.pending.extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            self.flushed.lock().unwrap().append(&mut self.pending);
            Ok(())
        }
    }

    /// Captures what the terminal showed at the moment of the write.
    struct Observing {
        screen: Arc<Mutex<Vec<u8>>>,
        seen: Option<String>,
    }

    impl Clipboard for Observing {
        fn write_text(&mut self, _text: &str) -> Result<()> {
            self.seen = Some(String::from_utf8(self.screen.lock().unwrap().clone())?);
            Ok(())
        }
    }

    #[test]
    fn colors_are_flushed_before_a_blocking_copy() {
        let mut out = Buffered::default();
        let mut clipboard = Observing {
            screen: Arc::clone(&out.flushed),
            seen: None,
        };
        let mut source = Scripted::new(&[Rgb::new(255, 0, 16)]);
        handle_generate(ColorMode::Hex, 1, true, &mut source, &mut clipboard, &mut out).unwrap();

        assert_eq!(clipboard.seen.as_deref(), Some("#ff0010\n"));
    }

    #[test]
    fn generate_copy_failure_prints_same_notice() {
        let mut clipboard = Recording::rejecting();
        let out = generate(ColorMode::Hex, 1, true, &mut clipboard);
        assert_eq!(out, format!("#ff0010\n{COPY_NOTICE}\n"));
    }
}
