//! Conversion pipeline: one input JPEG in, four Expo asset PNGs out.

use std::path::{Path, PathBuf};

use image::RgbImage;

use crate::error::{Error, Result};
use crate::image::{load_rgb, resize_exact, save_png, FAVICON_SIZE, ICON_SIZE};

/// Name of the input file the pipeline looks for.
pub const INPUT_NAME: &str = "icon.jpeg";

/// One output artifact: file stem plus target dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputSpec {
    pub name: &'static str,
    pub width: u32,
    pub height: u32,
}

impl OutputSpec {
    const fn square(name: &'static str, size: u32) -> Self {
        Self {
            name,
            width: size,
            height: size,
        }
    }

    /// Output file name, e.g. `icon.png`.
    pub fn file_name(&self) -> String {
        format!("{}.png", self.name)
    }
}

/// The fixed set of artifacts Expo expects, in production order.
pub const OUTPUTS: [OutputSpec; 4] = [
    OutputSpec::square("icon", ICON_SIZE),
    OutputSpec::square("splash-icon", ICON_SIZE),
    OutputSpec::square("adaptive-icon", ICON_SIZE),
    OutputSpec::square("favicon", FAVICON_SIZE),
];

/// Configuration for the conversion pipeline.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory holding `icon.jpeg`; outputs are written next to it.
    pub assets_dir: PathBuf,
}

impl Config {
    pub fn new<P: Into<PathBuf>>(assets_dir: P) -> Self {
        Self {
            assets_dir: assets_dir.into(),
        }
    }

    fn input_path(&self) -> PathBuf {
        self.assets_dir.join(INPUT_NAME)
    }
}

/// Converts `icon.jpeg` into the full set of Expo asset PNGs.
pub struct Converter {
    config: Config,
}

impl Converter {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Run the whole pipeline.
    ///
    /// Steps, in order, each a precondition for the next: verify the input
    /// exists, decode it, normalize to RGB, then resize and write each
    /// artifact in [`OUTPUTS`] order. Identical target dimensions share one
    /// resized buffer, so the three 1024x1024 outputs are pixel-identical.
    ///
    /// # Errors
    ///
    /// Returns an error on a missing input, a decode failure, or any write
    /// failure. Nothing is written before the input decodes successfully; a
    /// failure partway through the writes may leave a subset of outputs.
    pub fn run(&self) -> Result<()> {
        let input = self.config.input_path();
        if !input.exists() {
            return Err(Error::MissingInput { path: input });
        }

        tracing::info!("Reading {}...", input.display());
        let source = load_rgb(&input)?;
        tracing::debug!(
            "Decoded {}x{} RGB source",
            source.width(),
            source.height()
        );

        // Cache of one: OUTPUTS is ordered so the three 1024x1024 artifacts
        // are adjacent and reuse a single resize.
        let mut cached: Option<RgbImage> = None;

        for spec in &OUTPUTS {
            tracing::info!(
                "Creating {} ({}x{})...",
                spec.file_name(),
                spec.width,
                spec.height
            );

            let resized = match cached.take() {
                Some(img) if img.dimensions() == (spec.width, spec.height) => img,
                _ => resize_exact(&source, spec.width, spec.height),
            };

            save_png(&resized, self.config.assets_dir.join(spec.file_name()))?;
            tracing::info!("{} created", spec.file_name());

            cached = Some(resized);
        }

        tracing::info!("Conversion finished successfully");
        tracing::info!(
            "Note: all outputs are fully opaque; edit splash-icon.png and \
             adaptive-icon.png by hand if they need a transparent background"
        );

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    fn test_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "logoconvert-run-{}-{}",
            name,
            std::process::id()
        ));
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    fn write_test_jpeg(dir: &Path, width: u32, height: u32) {
        let img = RgbImage::from_fn(width, height, |x, y| {
            Rgb([(x % 251) as u8, (y % 241) as u8, ((x * y) % 239) as u8])
        });
        img.save(dir.join(INPUT_NAME)).unwrap();
    }

    fn run_in(dir: &Path) -> Result<()> {
        Converter::new(Config::new(dir)).run()
    }

    #[test]
    fn test_missing_input_produces_no_outputs() {
        let dir = test_dir("missing");

        let err = run_in(&dir).unwrap_err();

        assert!(matches!(err, Error::MissingInput { .. }));
        for spec in &OUTPUTS {
            assert!(!dir.join(spec.file_name()).exists());
        }
    }

    #[test]
    fn test_corrupt_input_produces_no_outputs() {
        let dir = test_dir("corrupt");
        std::fs::write(dir.join(INPUT_NAME), b"this is not a jpeg").unwrap();

        let err = run_in(&dir).unwrap_err();

        assert!(matches!(err, Error::ImageLoad { .. }));
        for spec in &OUTPUTS {
            assert!(!dir.join(spec.file_name()).exists());
        }
    }

    #[test]
    fn test_valid_input_produces_all_artifacts() {
        let dir = test_dir("valid");
        write_test_jpeg(&dir, 2000, 1500);

        run_in(&dir).unwrap();

        for spec in &OUTPUTS {
            let img = image::open(dir.join(spec.file_name())).unwrap();
            assert_eq!(
                (img.width(), img.height()),
                (spec.width, spec.height),
                "{}",
                spec.file_name()
            );
        }
    }

    #[test]
    fn test_icon_splash_adaptive_are_pixel_identical() {
        let dir = test_dir("identical");
        write_test_jpeg(&dir, 640, 480);

        run_in(&dir).unwrap();

        let icon = image::open(dir.join("icon.png")).unwrap().into_rgb8();
        let splash = image::open(dir.join("splash-icon.png")).unwrap().into_rgb8();
        let adaptive = image::open(dir.join("adaptive-icon.png"))
            .unwrap()
            .into_rgb8();

        assert_eq!(icon.as_raw(), splash.as_raw());
        assert_eq!(icon.as_raw(), adaptive.as_raw());
    }

    #[test]
    fn test_outputs_are_opaque_rgb() {
        let dir = test_dir("opaque");
        write_test_jpeg(&dir, 512, 512);

        run_in(&dir).unwrap();

        for spec in &OUTPUTS {
            let img = image::open(dir.join(spec.file_name())).unwrap();
            assert!(
                !img.color().has_alpha(),
                "{} should have no alpha channel",
                spec.file_name()
            );
        }
    }

    #[test]
    fn test_reruns_are_deterministic() {
        let dir = test_dir("determinism");
        write_test_jpeg(&dir, 800, 600);

        run_in(&dir).unwrap();
        let first: Vec<Vec<u8>> = OUTPUTS
            .iter()
            .map(|s| std::fs::read(dir.join(s.file_name())).unwrap())
            .collect();

        run_in(&dir).unwrap();
        let second: Vec<Vec<u8>> = OUTPUTS
            .iter()
            .map(|s| std::fs::read(dir.join(s.file_name())).unwrap())
            .collect();

        assert_eq!(first, second);
    }
}
