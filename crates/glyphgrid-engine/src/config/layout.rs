use std::path::Path;

use anyhow::{anyhow, ensure, Context, Result};
use ::config::{Config, File, FileFormat, Source};
use serde::Deserialize;

use crate::coords::{CellSize, Rgb};

/// Window and grid geometry for one layout, read from an INI-style file:
///
/// ```text
/// # 800x600 window, 8x16 cells
/// width  = 800
/// height = 600
/// cell-w = 8
/// cell-h = 16
/// red = 0
/// green = 0
/// blue = 32
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct LayoutConfig {
    /// Surface width in pixels.
    pub width: u32,
    /// Surface height in pixels.
    pub height: u32,
    pub cell: CellSize,
    pub background: Rgb,
}

/// The file as written; every key is required.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawConfig {
    width: u32,
    height: u32,
    #[serde(rename = "cell-w")]
    cell_w: u32,
    #[serde(rename = "cell-h")]
    cell_h: u32,
    red: u32,
    green: u32,
    blue: u32,
}

impl LayoutConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let source = File::from(path).format(FileFormat::Ini).required(true);
        Self::from_source(source)
            .with_context(|| format!("invalid layout config {}", path.display()))
    }

    pub fn parse(text: &str) -> Result<Self> {
        Self::from_source(File::from_str(text, FileFormat::Ini))
    }

    fn from_source(source: impl Source + Send + Sync + 'static) -> Result<Self> {
        let raw: RawConfig = Config::builder()
            .add_source(source)
            .build()
            .and_then(Config::try_deserialize)?;
        Self::validate(raw)
    }

    /// Grid size in cells as `(columns, rows)`.
    #[inline]
    pub fn grid_size(&self) -> (usize, usize) {
        ((self.width / self.cell.w) as usize, (self.height / self.cell.h) as usize)
    }

    fn validate(raw: RawConfig) -> Result<Self> {
        let channel = |key: &str, v: u32| -> Result<u8> {
            u8::try_from(v).map_err(|_| anyhow!("{key} must be 0..=255, got {v}"))
        };

        let cell = CellSize::new(raw.cell_w, raw.cell_h);
        ensure!(cell.w > 0 && cell.h > 0, "cell size must be non-zero");

        let config = Self {
            width: raw.width,
            height: raw.height,
            cell,
            background: Rgb::new(
                channel("red", raw.red)?,
                channel("green", raw.green)?,
                channel("blue", raw.blue)?,
            ),
        };
        let (cols, rows) = config.grid_size();
        ensure!(
            cols > 0 && rows > 0,
            "a {}x{} surface holds no {}x{} cells",
            config.width,
            config.height,
            cell.w,
            cell.h
        );
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
# editor window
width  = 800
height = 600

cell-w = 8
cell-h = 16
red = 0
green = 0
blue = 32
";

    fn err(text: &str) -> String {
        format!("{:#}", LayoutConfig::parse(text).unwrap_err())
    }

    #[test]
    fn parses_sample() {
        let c = LayoutConfig::parse(SAMPLE).unwrap();
        assert_eq!((c.width, c.height), (800, 600));
        assert_eq!(c.cell, CellSize::new(8, 16));
        assert_eq!(c.background, Rgb::new(0, 0, 32));
        assert_eq!(c.grid_size(), (100, 37));
    }

    #[test]
    fn missing_key() {
        let text = SAMPLE.replace("blue = 32\n", "");
        assert!(err(&text).contains("blue"), "{}", err(&text));
    }

    #[test]
    fn unknown_key() {
        let text = format!("{SAMPLE}depth = 3\n");
        assert!(err(&text).contains("depth"), "{}", err(&text));
    }

    #[test]
    fn non_integer_value() {
        let text = SAMPLE.replace("width  = 800", "width = wide");
        assert!(LayoutConfig::parse(&text).is_err());
    }

    #[test]
    fn zero_cell_size() {
        let text = SAMPLE.replace("cell-w = 8", "cell-w = 0");
        assert!(err(&text).contains("cell size must be non-zero"));
    }

    #[test]
    fn channel_out_of_range() {
        let text = SAMPLE.replace("blue = 32", "blue = 300");
        assert!(err(&text).contains("blue must be 0..=255"));
    }

    #[test]
    fn surface_smaller_than_a_cell() {
        let text = SAMPLE.replace("height = 600", "height = 10");
        assert!(err(&text).contains("holds no 8x16 cells"));
    }

    #[test]
    fn missing_file_names_the_path() {
        let e = LayoutConfig::load("no/such/dir/layout.cfg").unwrap_err();
        assert!(format!("{e:#}").contains("layout.cfg"), "{e:#}");
    }
}
