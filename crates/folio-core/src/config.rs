//! Page configuration
//!
//! Every id, selector, class name and timing the behaviours depend on lives
//! here. Defaults reproduce the stock portfolio markup, so an empty JSON
//! object (or no config at all) yields a working page.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Root configuration for the page behaviours
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FolioConfig {
    pub landmarks: Landmarks,
    pub classes: ClassNames,
    pub selectors: Selectors,
    pub motion: Motion,
    pub focus: FocusRing,
    pub typing: TypingConfig,
    pub lazy_images: LazyImages,
    pub banner: BannerConfig,
    pub logging: LoggingConfig,
}

/// Element ids and selectors for the fixed page chrome
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Landmarks {
    pub navigation_id: String,
    pub mobile_menu_id: String,
    pub menu_icon_id: String,
    /// Clicks outside this region close the mobile menu
    pub nav_region_selector: String,
}

impl Default for Landmarks {
    fn default() -> Self {
        Self {
            navigation_id: "navigation".to_string(),
            mobile_menu_id: "mobile-menu".to_string(),
            menu_icon_id: "menu-icon".to_string(),
            nav_region_selector: ".nav".to_string(),
        }
    }
}

/// CSS class names toggled by the behaviours
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassNames {
    pub menu_active: String,
    pub scrolled: String,
    pub fade_in: String,
    pub lazy: String,
    /// Full class name of the icon while the menu is open
    pub icon_open: String,
    /// Full class name of the icon while the menu is closed
    pub icon_closed: String,
}

impl Default for ClassNames {
    fn default() -> Self {
        Self {
            menu_active: "active".to_string(),
            scrolled: "scrolled".to_string(),
            fade_in: "fade-in".to_string(),
            lazy: "lazy".to_string(),
            icon_open: "fas fa-times".to_string(),
            icon_closed: "fas fa-bars".to_string(),
        }
    }
}

/// Selectors for element groups
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Selectors {
    pub skill_bar: String,
    pub section: String,
    pub lazy_image: String,
    pub deferred_src_attribute: String,
    pub email_link: String,
    pub store_link: String,
    pub scroll_trigger: String,
    pub scroll_trigger_attribute: String,
    pub focusable: String,
    pub hero_title: String,
}

impl Default for Selectors {
    fn default() -> Self {
        Self {
            skill_bar: ".skill-bar-fill".to_string(),
            section: "section".to_string(),
            lazy_image: "img[data-src]".to_string(),
            deferred_src_attribute: "data-src".to_string(),
            email_link: "a[href^=\"mailto:\"]".to_string(),
            store_link: "a[href*=\"play.google.com\"]".to_string(),
            scroll_trigger: "button[onclick*=\"scrollToSection\"]".to_string(),
            scroll_trigger_attribute: "onclick".to_string(),
            focusable: "button, a, [tabindex]".to_string(),
            hero_title: ".hero-title".to_string(),
        }
    }
}

/// Thresholds, breakpoints and delays
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Motion {
    /// The navigation is "scrolled" strictly past this offset
    pub scroll_threshold_px: f64,
    /// Viewport widths at or above this close the mobile menu
    pub desktop_breakpoint_px: f64,
    /// Height of the fixed navigation bar, used by the legacy scroll path
    pub nav_offset_px: f64,
    pub skill_delay_ms: u32,
    pub skill_threshold: f64,
    pub section_threshold: f64,
    pub lazy_threshold: f64,
}

impl Default for Motion {
    fn default() -> Self {
        Self {
            scroll_threshold_px: 100.0,
            desktop_breakpoint_px: 768.0,
            nav_offset_px: 80.0,
            skill_delay_ms: 100,
            skill_threshold: 0.5,
            section_threshold: 0.1,
            lazy_threshold: 0.0,
        }
    }
}

/// Inline outline applied to focused interactive elements
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FocusRing {
    pub outline: String,
    pub outline_offset: String,
}

impl Default for FocusRing {
    fn default() -> Self {
        Self {
            outline: "2px solid #3b82f6".to_string(),
            outline_offset: "2px".to_string(),
        }
    }
}

/// Hero title typing effect. Off unless explicitly enabled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TypingConfig {
    pub enabled: bool,
    pub phrases: Vec<String>,
    pub type_ms: u32,
    pub delete_ms: u32,
    pub hold_ms: u32,
    pub next_phrase_ms: u32,
}

impl Default for TypingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            phrases: vec![
                "Game Developer • App Developer • Web Developer".to_string(),
                "Creating Innovative Mobile Applications".to_string(),
                "10+ Apps Published on Play Store".to_string(),
                "Passionate Student Developer".to_string(),
            ],
            type_ms: 100,
            delete_ms: 50,
            hold_ms: 2000,
            next_phrase_ms: 500,
        }
    }
}

/// Deferred image loading
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LazyImages {
    /// Promote every deferred source at start-up when visibility
    /// observation is unavailable. Off by default: such images stay unloaded.
    pub eager_fallback: bool,
}

/// One styled console line (`console.log("%c...", css)`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BannerLine {
    pub text: String,
    pub css: String,
}

impl BannerLine {
    fn new(text: &str, css: &str) -> Self {
        Self {
            text: text.to_string(),
            css: css.to_string(),
        }
    }
}

/// Console greeting printed at start-up
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BannerConfig {
    pub enabled: bool,
    pub loaded_message: String,
    pub lines: Vec<BannerLine>,
}

impl Default for BannerConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            loaded_message: "Portfolio loaded successfully".to_string(),
            lines: vec![
                BannerLine::new(
                    "%c👋 Hello! Welcome to my portfolio",
                    "color: #3b82f6; font-size: 16px; font-weight: bold;",
                ),
                BannerLine::new(
                    "%c🎮 Game Developer | 📱 App Developer | 💻 Web Developer",
                    "color: #10b981; font-size: 14px;",
                ),
            ],
        }
    }
}

/// Log filter for the console subscriber
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `EnvFilter` directive, e.g. `info` or `folio_web=debug`
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl FolioConfig {
    /// Parse and validate a JSON config document
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigParse`] for malformed JSON and
    /// [`Error::InvalidConfig`] if validation fails.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check value ranges that serde cannot express
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfig`] naming the first offending field.
    pub fn validate(&self) -> Result<()> {
        let motion = &self.motion;
        check_ratio("motion.skill_threshold", motion.skill_threshold)?;
        check_ratio("motion.section_threshold", motion.section_threshold)?;
        check_ratio("motion.lazy_threshold", motion.lazy_threshold)?;
        check_non_negative("motion.scroll_threshold_px", motion.scroll_threshold_px)?;
        check_non_negative("motion.nav_offset_px", motion.nav_offset_px)?;

        if !motion.desktop_breakpoint_px.is_finite() || motion.desktop_breakpoint_px <= 0.0 {
            return Err(Error::invalid_config(
                "motion.desktop_breakpoint_px",
                format!("must be positive, got {}", motion.desktop_breakpoint_px),
            ));
        }

        if self.typing.enabled {
            if self.typing.phrases.is_empty() {
                return Err(Error::invalid_config(
                    "typing.phrases",
                    "at least one phrase is required when typing is enabled",
                ));
            }
            if let Some(index) = self.typing.phrases.iter().position(String::is_empty) {
                return Err(Error::invalid_config(
                    format!("typing.phrases[{index}]"),
                    "phrases must not be empty",
                ));
            }
        }

        Ok(())
    }
}

fn check_ratio(field: &str, value: f64) -> Result<()> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(Error::invalid_config(
            field,
            format!("must be within [0, 1], got {value}"),
        ))
    }
}

fn check_non_negative(field: &str, value: f64) -> Result<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(Error::invalid_config(
            field,
            format!("must be a non-negative number, got {value}"),
        ))
    }
}
