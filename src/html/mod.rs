//! Page documents served by the dashboard.
//!
//! Both pages are embedded in the binary and talk to the JSON API under
//! `/api`; icons and backgrounds are loaded from `/assets`.

use std::path::{Path, PathBuf};

pub mod form_page;
pub mod map_page;

/// Background images referenced by the pages, relative to the assets root.
pub const BACKGROUND_IMAGES: [&str; 2] = ["fundos/fundo_mapa.png", "fundos/fundo_form.png"];

/// Background images absent from `assets_dir`. The pages still render
/// without them.
pub fn missing_backgrounds(assets_dir: &Path) -> Vec<PathBuf> {
    BACKGROUND_IMAGES
        .iter()
        .map(|relative| assets_dir.join(relative))
        .filter(|path| !path.is_file())
        .collect()
}
