//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{MenuError, MenuResult};

use super::types::{ColorMode, Config, Verbosity};
use super::ConfigWarning;

/// File name looked up in the working directory.
pub const PROJECT_CONFIG_FILE: &str = "menutree.toml";

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> MenuResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| MenuError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Project config first, then the user config; `None` when neither exists.
pub fn discover(project_root: Option<&Path>) -> Option<PathBuf> {
    if let Some(root) = project_root {
        let project_config = root.join(PROJECT_CONFIG_FILE);
        if project_config.is_file() {
            return Some(project_config);
        }
    }

    let user_config = dirs::config_dir()?.join("menutree/config.toml");
    user_config.is_file().then_some(user_config)
}

/// Apply environment variable overrides (MENUTREE_* prefix)
pub fn with_env_overrides(config: Config) -> Config {
    apply_overrides(config, |key| std::env::var(key).ok())
}

/// Apply overrides from any key lookup (the process environment in practice).
pub fn apply_overrides(mut config: Config, lookup: impl Fn(&str) -> Option<String>) -> Config {
    // MENUTREE_STORE
    if let Some(path) = lookup("MENUTREE_STORE") {
        if !path.trim().is_empty() {
            config.store.path = PathBuf::from(path);
        }
    }

    // MENUTREE_MENU
    if let Some(menu) = lookup("MENUTREE_MENU") {
        if !menu.trim().is_empty() {
            config.store.default_menu = Some(menu);
        }
    }

    // MENUTREE_VERBOSITY
    if let Some(verbosity) = lookup("MENUTREE_VERBOSITY") {
        config.output.verbosity = match verbosity.to_lowercase().as_str() {
            "quiet" => Verbosity::Quiet,
            "verbose" => Verbosity::Verbose,
            "debug" => Verbosity::Debug,
            _ => Verbosity::Normal,
        };
    }

    // MENUTREE_ASCII
    if let Some(val) = lookup("MENUTREE_ASCII") {
        config.render.unicode = val.to_lowercase() == "false" || val == "0";
    }

    // NO_COLOR (https://no-color.org)
    if lookup("NO_COLOR").is_some_and(|v| !v.is_empty()) {
        config.render.color = ColorMode::Never;
    }

    config
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    for (i, line) in content.lines().enumerate() {
        if line.contains(needle) {
            return Some(i + 1);
        }
    }
    None
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "store",
        "path",
        "default_menu",
        "render",
        "unicode",
        "color",
        "indent",
        "output",
        "verbosity",
    ];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] =
                std::cmp::min(std::cmp::min(prev[j + 1] + 1, curr[j] + 1), prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
