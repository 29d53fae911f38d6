use anyhow::anyhow;
use lazy_static::lazy_static;
pub use sdl2::ttf::Font;
use sdl2::ttf::Sdl2TtfContext;
use std::{
    env,
    path::{Path, PathBuf},
};

lazy_static! {
    static ref TTF_CONTEXT: Result<Sdl2TtfContext, String> =
        sdl2::ttf::init().map_err(|e| e.to_string());
}

/// The labels are Chinese so this needs to be a font with CJK glyphs.
pub const DEFAULT_FONT_FILE_NAME: &str = "SimHei.ttf";

pub fn load_font(
    path: impl AsRef<Path>,
    pt_size: u16,
) -> anyhow::Result<Font<'static, 'static>> {
    let path = path.as_ref();
    let ttf_context = TTF_CONTEXT.as_ref().map_err(|e| anyhow!("{e}"))?;
    ttf_context
        .load_font(path, pt_size)
        .map_err(|e| anyhow!("{}: {e}", path.display()))
}

/// Places to look for a font, in order of preference: an explicitly requested file, then the
/// default font file in the working directory, then next to the executable.
pub fn font_candidates(explicit: Option<&Path>) -> Vec<PathBuf> {
    let mut candidates = Vec::new();
    if let Some(path) = explicit {
        candidates.push(path.to_path_buf());
    }
    candidates.push(PathBuf::from(DEFAULT_FONT_FILE_NAME));
    if let Some(exe_dir) = env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
    {
        candidates.push(exe_dir.join(DEFAULT_FONT_FILE_NAME));
    }
    candidates
}

/// Loads the first candidate that works. Text can't be drawn without a font but everything else
/// can, so failure is only logged.
pub fn load_first_font(
    candidates: &[PathBuf],
    pt_size: u16,
) -> Option<Font<'static, 'static>> {
    for path in candidates {
        match load_font(path, pt_size) {
            Ok(font) => {
                log::info!("Loaded {}pt font from {}", pt_size, path.display());
                return Some(font);
            }
            Err(e) => log::debug!("Failed to load font: {e}"),
        }
    }
    log::warn!(
        "No usable font among {:?}. Text will not be drawn.",
        candidates
    );
    None
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn explicit_font_comes_first() {
        let candidates = font_candidates(Some(Path::new("/fonts/custom.ttf")));
        assert_eq!(candidates[0], PathBuf::from("/fonts/custom.ttf"));
        assert_eq!(candidates[1], PathBuf::from(DEFAULT_FONT_FILE_NAME));
    }

    #[test]
    fn default_candidates() {
        let candidates = font_candidates(None);
        assert_eq!(candidates[0], PathBuf::from(DEFAULT_FONT_FILE_NAME));
        assert!(
            candidates
                .iter()
                .all(|c| c.file_name().is_some_and(|n| n == DEFAULT_FONT_FILE_NAME))
        );
    }
}
