//! Visual constants for the player surface
//!
//! # Usage
//!
//! ```rust
//! use reelkit_core::theme::Theme;
//!
//! let theme = Theme::default();
//! println!("Spinner color: {}", theme.colors.spinner);
//! ```

use serde::Serialize;

/// Color palette used by the three surfaces
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayerColors {
    /// Container behind the video - #000
    pub container: &'static str,
    /// Loading spinner - #002855
    pub spinner: &'static str,
    /// Placeholder background - #f0f0f0
    pub placeholder: &'static str,
    /// Muted placeholder text - #666
    pub placeholder_text: &'static str,
}

impl Default for PlayerColors {
    fn default() -> Self {
        Self {
            container: "#000",
            spinner: "#002855",
            placeholder: "#f0f0f0",
            placeholder_text: "#666",
        }
    }
}

impl PlayerColors {
    /// Overlay backdrop as RGBA with custom alpha
    pub fn overlay_rgba(&self, alpha: f32) -> String {
        format!("rgba(0, 0, 0, {})", alpha)
    }
}

/// Spinner size hint passed to the host's activity indicator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SpinnerSize {
    Small,
    Large,
}

/// Complete surface theme
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Theme {
    pub colors: PlayerColors,
    /// Corner radius of the container
    pub border_radius: u8,
    /// Fixed height of the video frame and the placeholder
    pub frame_height: u16,
    /// Alpha of the loading overlay
    pub overlay_alpha: f32,
    pub spinner_size: SpinnerSize,
    /// Font size of the placeholder message
    pub placeholder_font_size: u8,
    pub placeholder_message: &'static str,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            colors: PlayerColors::default(),
            border_radius: 8,
            frame_height: 200,
            overlay_alpha: 0.5,
            spinner_size: SpinnerSize::Large,
            placeholder_font_size: 16,
            placeholder_message: "Video unavailable",
        }
    }
}

impl Theme {
    /// Overlay backdrop color for this theme
    pub fn overlay_color(&self) -> String {
        self.colors.overlay_rgba(self.overlay_alpha)
    }

    /// Export theme as JSON for the host UI
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_theme() {
        let theme = Theme::default();
        assert_eq!(theme.colors.spinner, "#002855");
        assert_eq!(theme.frame_height, 200);
        assert_eq!(theme.overlay_color(), "rgba(0, 0, 0, 0.5)");
    }

    #[test]
    fn test_theme_json() {
        let json = Theme::default().to_json();
        assert!(json.contains("\"placeholder_message\":\"Video unavailable\""));
        assert!(json.contains("\"spinner_size\":\"large\""));
    }
}
