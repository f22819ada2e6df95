//! Glyph frames
//!
//! A frame is multi-line text drawn cell by cell; spaces are transparent.
//! Frames come from a `FrameSource`: the compiled-in set or a directory laid
//! out as `<root>/<category>/<name>.txt`.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::error::{Error, Result};

/// Category holding the craft animation
pub const ROCKET: &str = "rocket";
/// Category holding falling garbage shapes
pub const GARBAGE: &str = "garbage";

/// Immutable glyph text with its size in cells
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    text: Arc<str>,
    rows: usize,
    columns: usize,
}

impl Frame {
    /// Build a frame from trusted text (built-in art)
    pub fn new(text: &str) -> Self {
        let (rows, columns) = frame_size(text);
        Self {
            text: Arc::from(text),
            rows,
            columns,
        }
    }

    /// Build a frame from untrusted text, rejecting empty or control-laden art
    pub fn parse(category: &str, name: &str, text: &str) -> Result<Self> {
        let malformed = |reason: &str| Error::Asset {
            category: category.to_string(),
            name: name.to_string(),
            reason: reason.to_string(),
        };

        if text.trim().is_empty() {
            return Err(malformed("frame has no visible glyphs"));
        }
        if text
            .chars()
            .any(|c| c.is_control() && c != '\n' && c != '\r')
        {
            return Err(malformed("frame contains control characters"));
        }

        // Normalise CRLF so sizes match what gets drawn
        Ok(Self::new(&text.replace("\r\n", "\n")))
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Height in rows
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Width in columns (longest line)
    pub fn columns(&self) -> usize {
        self.columns
    }
}

/// Height and width of glyph text in cells
pub fn frame_size(text: &str) -> (usize, usize) {
    let rows = text.lines().count();
    let columns = text
        .lines()
        .map(|line| line.chars().count())
        .max()
        .unwrap_or(0);
    (rows, columns)
}

/// Asset provider consumed at startup
pub trait FrameSource {
    /// Names available in a category, sorted
    fn list_available(&self, category: &str) -> Result<Vec<String>>;

    /// Load one frame by category and name
    fn load_frame(&self, category: &str, name: &str) -> Result<Frame>;

    /// Load every frame of a category; an empty category is an error
    fn load_category(&self, category: &str) -> Result<Vec<Frame>> {
        let names = self.list_available(category)?;
        if names.is_empty() {
            return Err(Error::MissingFrames {
                category: category.to_string(),
                root: None,
            });
        }
        names
            .iter()
            .map(|name| self.load_frame(category, name))
            .collect()
    }
}

const ROCKET_FRAMES: [(&str, &str); 2] = [
    (
        "rocket_1",
        "  .\n .'.\n |o|\n.'o'.\n|.-.|\n'   '\n ) (\n",
    ),
    (
        "rocket_2",
        "  .\n .'.\n |o|\n.'o'.\n|.-.|\n'   '\n ( )\n",
    ),
];

const GARBAGE_FRAMES: [(&str, &str); 4] = [
    ("duck", "  __\n<(o )___\n ( ._> /\n  `---'\n"),
    ("hubble", " .---.\n|  O  |===\n '---'\n"),
    ("lamp", "  _\n / \\\n|   |\n \\_/\n  |\n"),
    ("trash_can", " _____\n(_____)\n |   |\n |___|\n"),
];

/// Explosion animation, one frame per tick
pub const EXPLOSION_FRAMES: [&str; 4] = [
    "     (_)\n (  (   (  (\n() (  (  )\n  ( )  ()\n",
    "     (_)\n (  (   (\n   (  (  )\n    )  (\n",
    "      (\n    (   (\n   (     (\n    )  (\n",
    "      (\n        (\n      (\n",
];

/// Caption shown once the craft is destroyed
pub const GAME_OVER: &str = concat!(
    "  ___    _    __  __  ___    ___  __   __ ___  ___ \n",
    " / __|  /_\\  |  \\/  || __|  / _ \\ \\ \\ / /| __|| _ \\\n",
    "| (_ | / _ \\ | |\\/| || _|  | (_) | \\ V / | _| |   /\n",
    " \\___|/_/ \\_\\|_|  |_||___|  \\___/   \\_/  |___||_|_\\\n",
);

/// Compiled-in frames, used when no frames directory is configured
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinFrames;

impl BuiltinFrames {
    fn table(category: &str) -> &'static [(&'static str, &'static str)] {
        match category {
            ROCKET => &ROCKET_FRAMES,
            GARBAGE => &GARBAGE_FRAMES,
            _ => &[],
        }
    }
}

impl FrameSource for BuiltinFrames {
    fn list_available(&self, category: &str) -> Result<Vec<String>> {
        let mut names: Vec<String> = Self::table(category)
            .iter()
            .map(|(name, _)| name.to_string())
            .collect();
        names.sort();
        Ok(names)
    }

    fn load_frame(&self, category: &str, name: &str) -> Result<Frame> {
        Self::table(category)
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, text)| Frame::new(text))
            .ok_or_else(|| Error::Asset {
                category: category.to_string(),
                name: name.to_string(),
                reason: "no such built-in frame".to_string(),
            })
    }
}

/// Frames read from `<root>/<category>/<name>.txt`
#[derive(Debug, Clone)]
pub struct DirFrames {
    root: PathBuf,
}

impl DirFrames {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn category_dir(&self, category: &str) -> PathBuf {
        self.root.join(category)
    }
}

impl FrameSource for DirFrames {
    fn list_available(&self, category: &str) -> Result<Vec<String>> {
        let dir = self.category_dir(category);
        let entries = match fs::read_dir(&dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(Error::MissingFrames {
                    category: category.to_string(),
                    root: Some(self.root.clone()),
                });
            }
            Err(e) => return Err(e.into()),
        };

        let mut names = Vec::new();
        for entry in entries {
            let path = entry?.path();
            if path.extension().is_some_and(|ext| ext == "txt") {
                if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                    names.push(stem.to_string());
                }
            }
        }
        names.sort();
        Ok(names)
    }

    fn load_frame(&self, category: &str, name: &str) -> Result<Frame> {
        let path = self.category_dir(category).join(format!("{name}.txt"));
        let text = fs::read_to_string(&path)?;
        log::debug!("Loaded frame {}", path.display());
        Frame::parse(category, name, &text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_size_uses_longest_line() {
        assert_eq!(frame_size("ab\nabcd\n\nx"), (4, 4));
        assert_eq!(frame_size(""), (0, 0));
    }

    #[test]
    fn test_frame_size_counts_chars_not_bytes() {
        assert_eq!(frame_size("★★\n★"), (2, 2));
    }

    #[test]
    fn test_builtin_categories_load() {
        let rockets = BuiltinFrames.load_category(ROCKET).unwrap();
        assert_eq!(rockets.len(), 2);
        assert!(rockets.iter().all(|f| f.rows() == rockets[0].rows()));

        let garbage = BuiltinFrames.load_category(GARBAGE).unwrap();
        assert_eq!(garbage.len(), 4);
        assert!(garbage.iter().all(|f| f.rows() > 0 && f.columns() > 0));
    }

    #[test]
    fn test_builtin_unknown_category_is_missing() {
        let err = BuiltinFrames.load_category("comets").unwrap_err();
        assert!(matches!(err, Error::MissingFrames { .. }));
    }

    #[test]
    fn test_parse_rejects_blank_and_control_chars() {
        assert!(matches!(
            Frame::parse(GARBAGE, "blank", "   \n  \n"),
            Err(Error::Asset { .. })
        ));
        assert!(matches!(
            Frame::parse(GARBAGE, "bell", "ab\x07"),
            Err(Error::Asset { .. })
        ));
        let frame = Frame::parse(GARBAGE, "crlf", "ab\r\ncd\r\n").unwrap();
        assert_eq!((frame.rows(), frame.columns()), (2, 2));
    }

    #[test]
    fn test_dir_frames_reads_sorted_txt_files() {
        let root =
            std::env::temp_dir().join(format!("space-garbage-frames-{}", std::process::id()));
        let dir = root.join(GARBAGE);
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("b.txt"), "##\n##\n").unwrap();
        fs::write(dir.join("a.txt"), "#\n").unwrap();
        fs::write(dir.join("notes.md"), "ignored").unwrap();

        let source = DirFrames::new(&root);
        assert_eq!(source.list_available(GARBAGE).unwrap(), vec!["a", "b"]);
        let frames = source.load_category(GARBAGE).unwrap();
        assert_eq!((frames[1].rows(), frames[1].columns()), (2, 2));

        let missing = source.list_available(ROCKET).unwrap_err();
        assert!(matches!(missing, Error::MissingFrames { .. }));

        fs::remove_dir_all(&root).unwrap();
    }
}
