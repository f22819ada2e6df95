//! Space Garbage entry point
//!
//! Logging goes to stderr and is controlled with `RUST_LOG`.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use space_garbage::Game;
use space_garbage::Settings;
use space_garbage::assets::{BuiltinFrames, DirFrames, FrameSource};
use space_garbage::platform::TerminalCanvas;

#[derive(Debug, Parser)]
#[command(name = "space-garbage", version)]
#[command(about = "Dodge and shoot falling space garbage while the years fly by")]
struct Cli {
    /// JSON settings file; defaults are used for missing fields
    #[arg(long, value_name = "FILE")]
    settings: Option<PathBuf>,

    /// Directory with `rocket/` and `garbage/` frame files
    #[arg(long, value_name = "DIR")]
    frames: Option<PathBuf>,

    /// RNG seed for a reproducible run
    #[arg(long)]
    seed: Option<u64>,
}

impl Cli {
    /// Load the settings file (if any) and apply command-line overrides
    fn load_settings(&self) -> anyhow::Result<Settings> {
        let mut settings = match &self.settings {
            Some(path) => Settings::load(path)
                .with_context(|| format!("failed to load settings from {}", path.display()))?,
            None => Settings::default(),
        };
        if let Some(dir) = &self.frames {
            settings.frames_dir = Some(dir.clone());
        }
        if let Some(seed) = self.seed {
            settings.seed = Some(seed);
        }
        Ok(settings)
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    log::info!("Space Garbage starting...");

    let settings = cli.load_settings()?;
    let frames: Box<dyn FrameSource> = match &settings.frames_dir {
        Some(dir) => {
            log::info!("Loading frames from {}", dir.display());
            Box::new(DirFrames::new(dir))
        }
        None => Box::new(BuiltinFrames),
    };

    let canvas = TerminalCanvas::new().context("failed to set up the terminal")?;
    let mut game =
        Game::new(canvas, frames.as_ref(), settings).context("failed to start the game")?;
    game.run().context("game loop failed")?;

    log::info!("Space Garbage exited cleanly");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_arguments_uses_defaults() {
        let cli = Cli::try_parse_from(["space-garbage"]).unwrap();
        assert!(cli.settings.is_none());
        assert_eq!(cli.load_settings().unwrap(), Settings::default());
    }

    #[test]
    fn test_frames_flag_overrides_settings() {
        let cli =
            Cli::try_parse_from(["space-garbage", "--frames", "art", "--seed", "9"]).unwrap();
        let settings = cli.load_settings().unwrap();
        assert_eq!(settings.frames_dir, Some(PathBuf::from("art")));
        assert_eq!(settings.seed, Some(9));
    }

    #[test]
    fn test_frames_flag_wins_over_file() {
        let dir = std::env::temp_dir().join(format!("space-garbage-cli-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("settings.json");
        std::fs::write(&path, r#"{ "frames_dir": "from_file", "star_count": 3 }"#).unwrap();

        let path_arg = path.to_str().unwrap();
        let cli = Cli::try_parse_from([
            "space-garbage",
            "--settings",
            path_arg,
            "--frames",
            "from_flag",
        ])
        .unwrap();
        let settings = cli.load_settings().unwrap();
        assert_eq!(settings.star_count, 3);
        assert_eq!(settings.frames_dir, Some(PathBuf::from("from_flag")));

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_help_and_unknown_flags_are_not_paths() {
        let help = Cli::try_parse_from(["space-garbage", "--help"]).unwrap_err();
        assert_eq!(help.kind(), clap::error::ErrorKind::DisplayHelp);

        let unknown = Cli::try_parse_from(["space-garbage", "--bogus"]).unwrap_err();
        assert_eq!(unknown.kind(), clap::error::ErrorKind::UnknownArgument);
    }

    #[test]
    fn test_missing_settings_file_is_an_error() {
        let cli =
            Cli::try_parse_from(["space-garbage", "--settings", "/nonexistent/settings.json"])
                .unwrap();
        assert!(cli.load_settings().is_err());
    }

    #[test]
    fn test_cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
