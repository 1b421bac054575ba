//! Render description derived from the controller phase

use crate::theme::{SpinnerSize, Theme};
use crate::{NativePlayerProps, Phase};
use serde::Serialize;

/// Rounded box the native player is clipped to
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Frame {
    pub background: &'static str,
    pub border_radius: u8,
}

impl Frame {
    pub fn from_theme(theme: &Theme) -> Self {
        Self {
            background: theme.colors.container,
            border_radius: theme.border_radius,
        }
    }
}

/// Semi-transparent layer drawn above the native player while loading
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LoadingOverlay {
    pub backdrop: String,
    pub spinner_color: &'static str,
    pub spinner_size: SpinnerSize,
    /// Progress is indeterminate; the native player reports none while loading
    pub indeterminate: bool,
}

/// Fixed-size box shown instead of the player after a failure
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Placeholder {
    pub message: &'static str,
    pub height: u16,
    pub background: &'static str,
    pub border_radius: u8,
    pub text_color: &'static str,
    pub font_size: u8,
}

/// What the host should draw for one video
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Surface {
    /// Nothing to show yet
    Empty,
    /// Native player mounted, optionally covered by the loading overlay
    Player {
        props: NativePlayerProps,
        frame: Frame,
        overlay: Option<LoadingOverlay>,
    },
    /// Player unmounted, message shown instead
    Placeholder(Placeholder),
}

impl Surface {
    /// Derive the surface for a phase.
    ///
    /// `props` is only consulted for phases that mount the native player.
    pub fn for_phase(phase: Phase, props: Option<&NativePlayerProps>, theme: &Theme) -> Self {
        match (phase, props) {
            (Phase::Error, _) => Surface::Placeholder(Placeholder {
                message: theme.placeholder_message,
                height: theme.frame_height,
                background: theme.colors.placeholder,
                border_radius: theme.border_radius,
                text_color: theme.colors.placeholder_text,
                font_size: theme.placeholder_font_size,
            }),
            (Phase::Loading, Some(props)) => Surface::Player {
                props: props.clone(),
                frame: Frame::from_theme(theme),
                overlay: Some(LoadingOverlay {
                    backdrop: theme.overlay_color(),
                    spinner_color: theme.colors.spinner,
                    spinner_size: theme.spinner_size,
                    indeterminate: true,
                }),
            },
            (Phase::Ready, Some(props)) => Surface::Player {
                props: props.clone(),
                frame: Frame::from_theme(theme),
                overlay: None,
            },
            _ => Surface::Empty,
        }
    }

    /// Whether the native player is mounted
    pub fn has_player(&self) -> bool {
        matches!(self, Surface::Player { .. })
    }

    /// Whether the loading overlay is shown
    pub fn is_loading(&self) -> bool {
        matches!(self, Surface::Player { overlay: Some(_), .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{PlayerConfig, SourceUri};

    fn props() -> NativePlayerProps {
        PlayerConfig::default().native_props(&SourceUri::new("https://cdn.example.com/v.mp4").unwrap())
    }

    #[test]
    fn test_error_surface_has_no_player() {
        let surface = Surface::for_phase(Phase::Error, Some(&props()), &Theme::default());
        assert!(!surface.has_player());
        match surface {
            Surface::Placeholder(p) => {
                assert_eq!(p.message, "Video unavailable");
                assert_eq!(p.height, 200);
                assert_eq!(p.text_color, "#666");
                assert_eq!(p.background, "#f0f0f0");
                assert_eq!(p.border_radius, 8);
            }
            other => panic!("expected placeholder, got {:?}", other),
        }
    }

    #[test]
    fn test_loading_surface_has_overlay() {
        let surface = Surface::for_phase(Phase::Loading, Some(&props()), &Theme::default());
        assert!(surface.has_player());
        assert!(surface.is_loading());
    }

    #[test]
    fn test_ready_surface_has_controls_and_no_overlay() {
        let surface = Surface::for_phase(Phase::Ready, Some(&props()), &Theme::default());
        match surface {
            Surface::Player { props, frame, overlay } => {
                assert!(overlay.is_none());
                assert_eq!(frame, Frame { background: "#000", border_radius: 8 });
                assert!(props.use_native_controls);
                assert!(!props.should_play);
            }
            other => panic!("expected player, got {:?}", other),
        }
    }

    #[test]
    fn test_surface_json_carries_frame_style() {
        let surface = Surface::for_phase(Phase::Loading, Some(&props()), &Theme::default());
        let json = serde_json::to_value(&surface).unwrap();

        assert_eq!(json["kind"], "player");
        assert_eq!(json["frame"]["background"], "#000");
        assert_eq!(json["frame"]["border_radius"], 8);
        assert_eq!(json["overlay"]["backdrop"], "rgba(0, 0, 0, 0.5)");
    }

    #[test]
    fn test_idle_surface_is_empty() {
        assert_eq!(Surface::for_phase(Phase::Idle, None, &Theme::default()), Surface::Empty);
    }
}
