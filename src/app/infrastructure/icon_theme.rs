//! Freedesktop icon theme lookup.
//!
//! Resolves a symbolic icon name (`edit-copy`) to an image file by walking
//! the icon theme directories the way desktop toolkits do:
//! active theme, its `Inherits=` chain, `hicolor`, then the pixmaps folder.

use std::collections::{HashSet, VecDeque};
use std::fs;
use std::path::{Path, PathBuf};

pub const FALLBACK_THEME: &str = "hicolor";

const EXTENSIONS: &[&str] = &["png", "svg", "xpm"];

/// Maps an icon name to an image on disk.
///
/// Returning `None` is normal: the icon simply isn't drawn.
pub trait IconResolver {
    fn resolve(&self, name: &str) -> Option<PathBuf>;
}

/// Keys of the `[Icon Theme]` group that the lookup needs.
#[derive(Debug, Default, PartialEq)]
struct ThemeIndex {
    inherits: Vec<String>,
    directories: Vec<String>,
}

fn parse_index_theme(text: &str) -> ThemeIndex {
    let mut index = ThemeIndex::default();
    let mut in_group = false;

    for line in text.lines() {
        let line = line.trim();
        if line.starts_with('[') {
            in_group = line == "[Icon Theme]";
            continue;
        }
        if !in_group {
            continue;
        }
        let Some((key, value)) = line.split_once('=') else {
            continue;
        };
        let list = || {
            value
                .split(',')
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .map(str::to_string)
                .collect::<Vec<_>>()
        };
        match key.trim() {
            "Inherits" => index.inherits = list(),
            "Directories" => index.directories = list(),
            _ => {}
        }
    }

    index
}

/// Nominal size of a theme subdirectory: `48x48/apps`, `apps/48`, `32x32@2/actions`.
fn directory_size(dir: &str) -> Option<u32> {
    dir.split('/').find_map(|part| {
        let head = part.split(['x', '@']).next()?;
        head.parse().ok()
    })
}

/// Order subdirectories for a requested size: exact size first, then
/// scalable, then the remaining sizes by distance.
fn order_directories(dirs: &[String], size: u32) -> Vec<&str> {
    let mut ordered: Vec<&str> = dirs.iter().map(String::as_str).collect();
    ordered.sort_by_key(|dir| match directory_size(dir) {
        Some(n) if n == size => 0,
        Some(n) => 2 + n.abs_diff(size),
        None if dir.contains("scalable") => 1,
        None => u32::MAX,
    });
    ordered
}

/// Two-level listing of a theme directory, for themes without `index.theme`.
fn scan_directories(root: &Path) -> Vec<String> {
    let mut found = Vec::new();
    let Ok(outer) = fs::read_dir(root) else {
        return found;
    };
    for entry in outer.flatten() {
        if !entry.path().is_dir() {
            continue;
        }
        let outer_name = entry.file_name().to_string_lossy().to_string();
        let Ok(inner) = fs::read_dir(entry.path()) else {
            continue;
        };
        for sub in inner.flatten() {
            if sub.path().is_dir() {
                found.push(format!("{}/{}", outer_name, sub.file_name().to_string_lossy()));
            }
        }
    }
    found.sort();
    found
}

fn default_base_dirs() -> Vec<PathBuf> {
    let mut bases = Vec::new();
    if let Some(home) = dirs::home_dir() {
        bases.push(home.join(".icons"));
    }
    if let Some(data) = dirs::data_dir() {
        bases.push(data.join("icons"));
    }

    let data_dirs = std::env::var("XDG_DATA_DIRS")
        .ok()
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| "/usr/local/share:/usr/share".to_string());
    for dir in std::env::split_paths(&data_dirs) {
        bases.push(dir.join("icons"));
    }

    let mut seen = HashSet::new();
    bases.retain(|b| seen.insert(b.clone()));
    bases
}

pub struct ThemeIconResolver {
    theme: String,
    size: u32,
    base_dirs: Vec<PathBuf>,
    pixmap_dirs: Vec<PathBuf>,
    chain: Vec<(String, ThemeIndex)>,
}

impl ThemeIconResolver {
    /// Resolver over the standard XDG icon locations.
    pub fn new(theme: impl Into<String>, size: u32) -> Self {
        Self::with_dirs(
            theme,
            size,
            default_base_dirs(),
            vec![PathBuf::from("/usr/share/pixmaps")],
        )
    }

    pub fn with_dirs(
        theme: impl Into<String>,
        size: u32,
        base_dirs: Vec<PathBuf>,
        pixmap_dirs: Vec<PathBuf>,
    ) -> Self {
        let mut resolver = Self {
            theme: theme.into(),
            size,
            base_dirs,
            pixmap_dirs,
            chain: Vec::new(),
        };
        resolver.chain = resolver.theme_chain();
        log::debug!(
            "Icon theme chain: {:?}",
            resolver.chain.iter().map(|(name, _)| name).collect::<Vec<_>>()
        );
        resolver
    }

    pub fn theme(&self) -> &str {
        &self.theme
    }

    fn theme_roots(&self, theme: &str) -> Vec<PathBuf> {
        self.base_dirs
            .iter()
            .map(|base| base.join(theme))
            .filter(|root| root.is_dir())
            .collect()
    }

    fn load_index(&self, theme: &str) -> Option<ThemeIndex> {
        let roots = self.theme_roots(theme);
        if roots.is_empty() {
            return None;
        }
        let from_file = roots
            .iter()
            .find_map(|root| fs::read_to_string(root.join("index.theme")).ok())
            .map(|text| parse_index_theme(&text));

        Some(match from_file {
            Some(index) if !index.directories.is_empty() => index,
            other => ThemeIndex {
                inherits: other.map(|i| i.inherits).unwrap_or_default(),
                directories: scan_directories(&roots[0]),
            },
        })
    }

    /// Themes to search, breadth-first over `Inherits=`, ending with hicolor.
    fn theme_chain(&self) -> Vec<(String, ThemeIndex)> {
        let mut chain = Vec::new();
        let mut visited = HashSet::new();
        let mut queue = VecDeque::from([self.theme.clone()]);

        while let Some(theme) = queue.pop_front() {
            if !visited.insert(theme.clone()) {
                continue;
            }
            let Some(index) = self.load_index(&theme) else {
                continue;
            };
            queue.extend(index.inherits.iter().cloned());
            chain.push((theme, index));
        }

        if !visited.contains(FALLBACK_THEME) {
            if let Some(index) = self.load_index(FALLBACK_THEME) {
                chain.push((FALLBACK_THEME.to_string(), index));
            }
        }
        chain
    }

    fn lookup_in_theme(&self, theme: &str, index: &ThemeIndex, name: &str) -> Option<PathBuf> {
        let roots = self.theme_roots(theme);
        for dir in order_directories(&index.directories, self.size) {
            for root in &roots {
                if let Some(path) = find_with_extension(&root.join(dir), name) {
                    return Some(path);
                }
            }
        }
        None
    }
}

fn find_with_extension(dir: &Path, name: &str) -> Option<PathBuf> {
    EXTENSIONS
        .iter()
        .map(|ext| dir.join(format!("{}.{}", name, ext)))
        .find(|path| path.is_file())
}

impl IconResolver for ThemeIconResolver {
    fn resolve(&self, name: &str) -> Option<PathBuf> {
        if name.is_empty() || name.contains('/') {
            return None;
        }
        self.chain
            .iter()
            .find_map(|(theme, index)| self.lookup_in_theme(theme, index, name))
            .or_else(|| {
                self.pixmap_dirs
                    .iter()
                    .find_map(|dir| find_with_extension(dir, name))
            })
    }
}
