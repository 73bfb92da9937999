//! Image references as seen from the directory a card is written to.

use std::path::{Component, Path, PathBuf};

/// Rewrites image sources into hrefs for documents in one output directory.
///
/// Absolute sources become relative to the output directory when both paths
/// can be canonicalized (`svg/3.svg` referencing `../img/7.png`). Anything
/// else is passed through unchanged.
#[derive(Debug, Clone, Default)]
pub struct HrefResolver {
    base: Option<PathBuf>,
}

impl HrefResolver {
    pub fn relative_to(output_dir: &Path) -> Self {
        Self {
            base: output_dir.canonicalize().ok(),
        }
    }

    /// Passes every source through as-is.
    pub fn verbatim() -> Self {
        Self::default()
    }

    pub fn href(&self, source: &str) -> String {
        let path = Path::new(source);
        if !path.is_absolute() {
            return slashed(path);
        }
        let relative = self.base.as_deref().and_then(|base| {
            let target = path.canonicalize().ok()?;
            relative_path(&target, base)
        });
        match relative {
            Some(relative) => slashed(&relative),
            None => source.to_string(),
        }
    }
}

/// `target` expressed relative to the directory `base`. Both must be absolute.
/// `None` when they share no root (different drives).
fn relative_path(target: &Path, base: &Path) -> Option<PathBuf> {
    let target: Vec<Component> = target.components().collect();
    let base: Vec<Component> = base.components().collect();
    let common = target
        .iter()
        .zip(&base)
        .take_while(|(a, b)| a == b)
        .count();
    if common == 0 {
        return None;
    }

    let mut relative = PathBuf::new();
    for _ in common..base.len() {
        relative.push("..");
    }
    for component in &target[common..] {
        relative.push(component.as_os_str());
    }
    Some(relative)
}

fn slashed(path: &Path) -> String {
    path.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_sibling_directories() {
        let dir = tempdir().unwrap();
        let svg = dir.path().join("svg");
        let img = dir.path().join("img");
        fs::create_dir(&svg).unwrap();
        fs::create_dir(&img).unwrap();
        fs::write(img.join("1.png"), b"").unwrap();

        let resolver = HrefResolver::relative_to(&svg);
        let source = img.join("1.png").canonicalize().unwrap();
        assert_eq!(resolver.href(&source.display().to_string()), "../img/1.png");
    }

    #[test]
    fn test_image_inside_output_dir() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join("symbols")).unwrap();
        fs::write(dir.path().join("symbols").join("4.gif"), b"").unwrap();

        let resolver = HrefResolver::relative_to(dir.path());
        let source = dir.path().join("symbols/4.gif").display().to_string();
        assert_eq!(resolver.href(&source), "symbols/4.gif");
    }

    #[test]
    fn test_relative_sources_pass_through() {
        let resolver = HrefResolver::verbatim();
        assert_eq!(resolver.href("12.png"), "12.png");
        assert_eq!(resolver.href("img/12.png"), "img/12.png");
    }

    #[test]
    fn test_uncanonicalizable_output_dir_keeps_absolute_source() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("2.png"), b"").unwrap();
        let source = dir.path().join("2.png").display().to_string();

        let resolver = HrefResolver::relative_to(&dir.path().join("missing"));
        assert_eq!(resolver.href(&source), source);
    }
}
