//! Project configuration.
//!
//! Handles loading, validating, and merging `blog-assets.toml`. Stock defaults
//! match the blog's layout, so most projects need no config file at all; a
//! file in the project root overrides just the keys it names.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! [paths]
//! content_dir = "src/content/blog"     # Posts (*.md, *.mdx), relative to project root
//! images_dir = "public/images/blog"    # Imported images land in <images_dir>/<post>/
//! public_prefix = "/images/blog"       # URL prefix of images_dir on the built site
//!
//! [images]
//! max_width = 750                      # Wider sources are downsampled to this width
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use crate::imaging::DEFAULT_MAX_WIDTH;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Name of the config file looked up in the project root.
pub const CONFIG_FILE: &str = "blog-assets.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Asset configuration loaded from `blog-assets.toml`.
///
/// All fields have defaults. User config files need only specify the values
/// they want to override. Unknown keys are rejected.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AssetsConfig {
    /// Where posts and images live.
    pub paths: PathsConfig,
    /// Conversion settings.
    pub images: ImagesConfig,
}

/// Project-relative locations.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PathsConfig {
    /// Directory holding the posts.
    pub content_dir: String,
    /// Directory receiving converted images, one subdirectory per post.
    pub images_dir: String,
    /// Public URL prefix under which `images_dir` is served.
    pub public_prefix: String,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            content_dir: "src/content/blog".to_string(),
            images_dir: "public/images/blog".to_string(),
            public_prefix: "/images/blog".to_string(),
        }
    }
}

/// Image conversion settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ImagesConfig {
    /// Maximum output width in pixels. Narrower images are never upscaled.
    pub max_width: u32,
}

impl Default for ImagesConfig {
    fn default() -> Self {
        Self {
            max_width: DEFAULT_MAX_WIDTH,
        }
    }
}

impl AssetsConfig {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.images.max_width == 0 {
            return Err(ConfigError::Validation(
                "images.max_width must be greater than 0".into(),
            ));
        }
        if self.paths.content_dir.is_empty() {
            return Err(ConfigError::Validation(
                "paths.content_dir must not be empty".into(),
            ));
        }
        if self.paths.images_dir.is_empty() {
            return Err(ConfigError::Validation(
                "paths.images_dir must not be empty".into(),
            ));
        }
        if !self.paths.public_prefix.starts_with('/') {
            return Err(ConfigError::Validation(
                "paths.public_prefix must start with '/'".into(),
            ));
        }
        Ok(())
    }

    /// Content directory resolved against `root`.
    pub fn content_dir(&self, root: &Path) -> PathBuf {
        root.join(&self.paths.content_dir)
    }

    /// Images directory resolved against `root`.
    pub fn images_dir(&self, root: &Path) -> PathBuf {
        root.join(&self.paths.images_dir)
    }

    /// Public URL of an imported image: `<public_prefix>/<post>/<file_name>`.
    pub fn public_path(&self, post: &str, file_name: &str) -> String {
        format!(
            "{}/{}/{}",
            self.paths.public_prefix.trim_end_matches('/'),
            post,
            file_name
        )
    }
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
///
/// This is the canonical representation of all default values, used as the
/// base layer for merging user overrides on top.
pub fn stock_defaults_value() -> toml::Value {
    toml::Value::try_from(AssetsConfig::default()).expect("default config must serialize")
}

/// Recursively merge `overlay` on top of `base`.
///
/// - Tables are merged key-by-key (overlay keys override base keys).
/// - Non-table values in overlay replace base values entirely.
/// - Keys in base that are not in overlay are preserved.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Load `blog-assets.toml` from a directory as a raw TOML value.
///
/// Returns `Ok(None)` if the file does not exist.
/// Returns `Err` if the file exists but contains invalid TOML.
pub fn load_raw_config(root: &Path) -> Result<Option<toml::Value>, ConfigError> {
    let config_path = root.join(CONFIG_FILE);
    if !config_path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(&config_path)?;
    let value: toml::Value = toml::from_str(&content)?;
    Ok(Some(value))
}

/// Merge an optional overlay onto a base value, then deserialize and validate.
pub fn resolve_config(
    base: toml::Value,
    overlay: Option<toml::Value>,
) -> Result<AssetsConfig, ConfigError> {
    let merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    let config: AssetsConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Load config from `blog-assets.toml` in the project root.
///
/// Merges user values on top of stock defaults, rejects unknown keys,
/// and validates the result.
pub fn load_config(root: &Path) -> Result<AssetsConfig, ConfigError> {
    let base = stock_defaults_value();
    let overlay = load_raw_config(root)?;
    let config = resolve_config(base, overlay)?;
    tracing::debug!(root = %root.display(), ?config, "loaded config");
    Ok(config)
}

/// Returns a fully-commented stock `blog-assets.toml`.
///
/// Used by the `--gen-config` CLI flag.
pub fn stock_config_toml() -> &'static str {
    r##"# Blog asset configuration
# ========================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults. Paths are relative to the project root.
# Unknown keys will cause an error.

# ---------------------------------------------------------------------------
# Locations
# ---------------------------------------------------------------------------
[paths]
# Directory holding the posts (*.md and *.mdx files, not searched recursively).
content_dir = "src/content/blog"

# Imported images are written to <images_dir>/<post-slug>/<image-slug>.webp
images_dir = "public/images/blog"

# URL prefix under which images_dir is served; used in generated snippets.
public_prefix = "/images/blog"

# ---------------------------------------------------------------------------
# Conversion
# ---------------------------------------------------------------------------
[images]
# Images wider than this (in pixels) are downsampled, preserving aspect ratio.
# Narrower images keep their size.
max_width = 750
"##
}
