//! Site configuration module.
//!
//! Handles loading, validating, and merging the `config.toml` found in the
//! content root. Every knob the engine or the generator consumes lives here:
//! color schemes, the full table of timer constants, particle counts, and
//! the contact-form pattern overrides.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! content_root = "content"  # Path to content directory (root-level only)
//!
//! [colors.light]
//! background = "#ffffff"
//! text = "#111111"
//! text_muted = "#666666"
//! border = "#e0e0e0"
//! link = "#333333"
//! link_hover = "#000000"
//! accent = "#00d4ff"
//!
//! [colors.dark]
//! background = "#0a0a0a"
//! text = "#eeeeee"
//! text_muted = "#999999"
//! border = "#333333"
//! link = "#cccccc"
//! link_hover = "#ffffff"
//! accent = "#00d4ff"
//!
//! [timings]
//! typing_ms = 100                    # One typed character
//! typing_start_delay_ms = 1000       # Pause before the first character
//! typing_hold_ms = 3000              # Fully-typed message on screen
//! typing_restart_ms = 500            # Pause between erase and next message
//! scroll_throttle_ms = 16            # Navbar scroll-styling window
//! spy_throttle_ms = 100              # Scroll-spy window
//! resize_debounce_ms = 300           # Portfolio particle rebuild quiet period
//! entrance_resize_debounce_ms = 250  # Entrance particle rebuild quiet period
//! stagger_step_ms = 100              # Per-item reveal offset
//! skill_fill_delay_ms = 300          # Skill bar fill delay after reveal
//! submit_latency_ms = 2000           # Simulated submission round trip
//! notification_ms = 5000             # Notification auto-dismiss
//! transition_ms = 2000               # Entrance-to-portfolio cover duration
//! ripple_ms = 600                    # Enter-button ripple cleanup
//!
//! [particles]
//! entrance_wide = 80     # Entrance field, viewport wider than breakpoint
//! entrance_narrow = 40
//! portfolio_wide = 50    # Portfolio layer
//! portfolio_narrow = 25
//! breakpoint = 768.0     # Viewport width split (px)
//! shape_count = 5        # Floating decorative shapes on the entrance page
//!
//! [contact]
//! # Regex overrides for the name/email field rules.
//! # name_pattern = "..."
//! # email_pattern = "..."
//! ```
//!
//! ## Partial Configuration
//!
//! Config files are sparse — override just the values you want. Unknown
//! keys are rejected to catch typos early.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Site configuration loaded from `config.toml`.
///
/// All fields have sensible defaults. User config files need only specify
/// the values they want to override. Unknown keys are rejected.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Path to the content root directory (only meaningful at root level).
    #[serde(default = "default_content_root")]
    pub content_root: String,
    /// Color schemes for light and dark modes.
    pub colors: ColorConfig,
    /// Timer constants for every scheduled behavior.
    pub timings: TimingConfig,
    /// Particle counts for the decorative layers.
    pub particles: ParticleConfig,
    /// Contact-form validation overrides.
    pub contact: ContactConfig,
}

fn default_content_root() -> String {
    "content".to_string()
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            content_root: default_content_root(),
            colors: ColorConfig::default(),
            timings: TimingConfig::default(),
            particles: ParticleConfig::default(),
            contact: ContactConfig::default(),
        }
    }
}

impl SiteConfig {
    /// Validate config values are within acceptable ranges.
    ///
    /// A zero typing or transition interval would stall the corresponding
    /// state machine on its own tick, so those are rejected outright.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.timings.typing_ms == 0 {
            return Err(ConfigError::Validation(
                "timings.typing_ms must be non-zero".into(),
            ));
        }
        if self.timings.transition_ms == 0 {
            return Err(ConfigError::Validation(
                "timings.transition_ms must be non-zero".into(),
            ));
        }
        if self.timings.notification_ms == 0 {
            return Err(ConfigError::Validation(
                "timings.notification_ms must be non-zero".into(),
            ));
        }
        if self.particles.breakpoint <= 0.0 {
            return Err(ConfigError::Validation(
                "particles.breakpoint must be positive".into(),
            ));
        }
        let counts = [
            self.particles.entrance_wide,
            self.particles.entrance_narrow,
            self.particles.portfolio_wide,
            self.particles.portfolio_narrow,
        ];
        if counts.iter().any(|&c| c > 500) {
            return Err(ConfigError::Validation(
                "particles counts must be 500 or fewer".into(),
            ));
        }
        Ok(())
    }
}

/// Timer constants, all in milliseconds.
///
/// Stock rhythm: 100 ms per typed character, a 2 s simulated
/// submission round trip, 16 ms scroll throttling.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TimingConfig {
    pub typing_ms: u64,
    pub typing_start_delay_ms: u64,
    pub typing_hold_ms: u64,
    pub typing_restart_ms: u64,
    pub scroll_throttle_ms: u64,
    pub spy_throttle_ms: u64,
    pub resize_debounce_ms: u64,
    pub entrance_resize_debounce_ms: u64,
    pub stagger_step_ms: u64,
    pub skill_fill_delay_ms: u64,
    pub submit_latency_ms: u64,
    pub notification_ms: u64,
    pub transition_ms: u64,
    pub ripple_ms: u64,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            typing_ms: 100,
            typing_start_delay_ms: 1000,
            typing_hold_ms: 3000,
            typing_restart_ms: 500,
            scroll_throttle_ms: 16,
            spy_throttle_ms: 100,
            resize_debounce_ms: 300,
            entrance_resize_debounce_ms: 250,
            stagger_step_ms: 100,
            skill_fill_delay_ms: 300,
            submit_latency_ms: 2000,
            notification_ms: 5000,
            transition_ms: 2000,
            ripple_ms: 600,
        }
    }
}

/// Particle counts for the decorative layers.
///
/// Narrow viewports get roughly half the particles; below the breakpoint
/// the portfolio layer is hidden entirely by the performance manager.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ParticleConfig {
    pub entrance_wide: u32,
    pub entrance_narrow: u32,
    pub portfolio_wide: u32,
    pub portfolio_narrow: u32,
    pub breakpoint: f64,
    pub shape_count: u32,
}

impl Default for ParticleConfig {
    fn default() -> Self {
        Self {
            entrance_wide: 80,
            entrance_narrow: 40,
            portfolio_wide: 50,
            portfolio_narrow: 25,
            breakpoint: 768.0,
            shape_count: 5,
        }
    }
}

/// Contact-form validation overrides.
///
/// When absent, the built-in patterns apply (Unicode letters/spaces/
/// hyphens/apostrophes for `name`, `local@domain.tld` for `email`). An
/// override that fails to compile is reported as a form-manager
/// initialization error, not a panic.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ContactConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name_pattern: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email_pattern: Option<String>,
}

/// Color configuration for light and dark modes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColorConfig {
    /// Light mode color scheme.
    pub light: ColorScheme,
    /// Dark mode color scheme.
    pub dark: ColorScheme,
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self {
            light: ColorScheme::default_light(),
            dark: ColorScheme::default_dark(),
        }
    }
}

/// Individual color scheme (light or dark).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColorScheme {
    /// Background color.
    pub background: String,
    /// Primary text color.
    pub text: String,
    /// Muted/secondary text color (nav links, captions, tech tags).
    pub text_muted: String,
    /// Border color.
    pub border: String,
    /// Link color.
    pub link: String,
    /// Link hover color.
    pub link_hover: String,
    /// Accent color (entrance effects, active filter, skill bars).
    pub accent: String,
}

impl ColorScheme {
    pub fn default_light() -> Self {
        Self {
            background: "#ffffff".to_string(),
            text: "#111111".to_string(),
            text_muted: "#666666".to_string(),
            border: "#e0e0e0".to_string(),
            link: "#333333".to_string(),
            link_hover: "#000000".to_string(),
            accent: "#00d4ff".to_string(),
        }
    }

    pub fn default_dark() -> Self {
        Self {
            background: "#0a0a0a".to_string(),
            text: "#eeeeee".to_string(),
            text_muted: "#999999".to_string(),
            border: "#333333".to_string(),
            link: "#cccccc".to_string(),
            link_hover: "#ffffff".to_string(),
            accent: "#00d4ff".to_string(),
        }
    }
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self::default_light()
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
    toml::Value::try_from(SiteConfig::default()).expect("default config must serialize")
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

/// Load a `config.toml` from a directory as a raw TOML value.
///
/// Returns `Ok(None)` if no `config.toml` exists in the directory.
/// Returns `Err` if the file exists but contains invalid TOML.
pub fn load_raw_config(path: &Path) -> Result<Option<toml::Value>, ConfigError> {
    let config_path = path.join("config.toml");
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
) -> Result<SiteConfig, ConfigError> {
    let merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    let config: SiteConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Load config from `config.toml` in the given directory.
///
/// Merges user values on top of stock defaults, rejects unknown keys,
/// and validates the result.
pub fn load_config(root: &Path) -> Result<SiteConfig, ConfigError> {
    let base = stock_defaults_value();
    let overlay = load_raw_config(root)?;
    resolve_config(base, overlay)
}

/// Returns a fully-commented stock `config.toml` with all keys and explanations.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# Vitrine Configuration
# =====================
# All options are optional; the values shown are the stock defaults.
# Delete anything you do not want to override.

# Path to the content directory, relative to where vitrine runs.
content_root = "content"

# Colors become CSS custom properties on both generated pages. The dark
# block applies under `prefers-color-scheme: dark`.
[colors.light]
background = "#ffffff"
text = "#111111"
text_muted = "#666666"    # Nav links, captions, tech tags
border = "#e0e0e0"
link = "#333333"
link_hover = "#000000"
accent = "#00d4ff"        # Entrance effects, active filter, skill bars

[colors.dark]
background = "#0a0a0a"
text = "#eeeeee"
text_muted = "#999999"
border = "#333333"
link = "#cccccc"
link_hover = "#ffffff"
accent = "#00d4ff"

# Every scheduled behavior reads its interval from this table (all values
# in milliseconds).
[timings]
typing_ms = 100                    # One typed character on the entrance page
typing_start_delay_ms = 1000       # Pause before the first character
typing_hold_ms = 3000              # Fully-typed message held on screen
typing_restart_ms = 500            # Pause between erase and next message
scroll_throttle_ms = 16            # Navbar scroll-styling window
spy_throttle_ms = 100              # Scroll-spy window
resize_debounce_ms = 300           # Portfolio particle rebuild quiet period
entrance_resize_debounce_ms = 250  # Entrance particle rebuild quiet period
stagger_step_ms = 100              # Per-item reveal offset
skill_fill_delay_ms = 300          # Skill bar fill delay after reveal
submit_latency_ms = 2000           # Simulated contact-form round trip
notification_ms = 5000             # Notification auto-dismiss
transition_ms = 2000               # Entrance-to-portfolio cover duration
ripple_ms = 600                    # Enter-button ripple cleanup

# Decorative particle counts. Narrow viewports (below `breakpoint` pixels)
# get the reduced counts; the portfolio layer is hidden there entirely.
[particles]
entrance_wide = 80
entrance_narrow = 40
portfolio_wide = 50
portfolio_narrow = 25
breakpoint = 768.0
shape_count = 5

# Contact-form pattern overrides. The defaults accept Unicode letters,
# spaces, hyphens and apostrophes for names, and the usual
# local@domain.tld shape for emails.
[contact]
# name_pattern = "^[A-Za-z ]+$"
# email_pattern = "^\\S+@\\S+$"
"##
}

/// Generate CSS custom properties from color config.
pub fn generate_color_css(colors: &ColorConfig) -> String {
    format!(
        r#":root {{
    --color-bg: {light_bg};
    --color-text: {light_text};
    --color-text-muted: {light_text_muted};
    --color-border: {light_border};
    --color-link: {light_link};
    --color-link-hover: {light_link_hover};
    --color-accent: {light_accent};
}}

@media (prefers-color-scheme: dark) {{
    :root {{
        --color-bg: {dark_bg};
        --color-text: {dark_text};
        --color-text-muted: {dark_text_muted};
        --color-border: {dark_border};
        --color-link: {dark_link};
        --color-link-hover: {dark_link_hover};
        --color-accent: {dark_accent};
    }}
}}"#,
        light_bg = colors.light.background,
        light_text = colors.light.text,
        light_text_muted = colors.light.text_muted,
        light_border = colors.light.border,
        light_link = colors.light.link,
        light_link_hover = colors.light.link_hover,
        light_accent = colors.light.accent,
        dark_bg = colors.dark.background,
        dark_text = colors.dark.text,
        dark_text_muted = colors.dark.text_muted,
        dark_border = colors.dark.border,
        dark_link = colors.dark.link,
        dark_link_hover = colors.dark.link_hover,
        dark_accent = colors.dark.accent,
    )
}

/// Generate CSS custom properties for the animation timings the stylesheet
/// consumes. The performance manager zeroes the transition variables at
/// runtime on low-memory devices.
pub fn generate_timing_css(timings: &TimingConfig) -> String {
    format!(
        r#":root {{
    --transition-fast: 0.15s;
    --transition-base: 0.3s;
    --transition-slow: 0.6s;
    --reveal-step: {step}ms;
}}"#,
        step = timings.stagger_step_ms,
    )
}
