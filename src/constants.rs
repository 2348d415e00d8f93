// constants.rs - Application-wide Constants
//
// Centralized constants for copy, layout metrics, and motion parameters.

/// Static copy shown by the splash screen. These strings never change at
/// runtime, whatever the toggle state.
pub mod strings {
    /// Large title in the center block
    pub const TITLE: &str = "Simple";
    /// Subtitle under the title
    pub const SUBTITLE: &str = "Beautifully Minimal";
    /// Button label while the toggle is off
    pub const LABEL_OFF: &str = "Begin";
    /// Button label while the toggle is on
    pub const LABEL_ON: &str = "Inspired";
}

/// Layout metrics in logical pixels
pub mod layout {
    /// Title font size
    pub const TITLE_SIZE: f32 = 56.0;
    /// Subtitle and button label font size
    pub const BODY_SIZE: f32 = 18.0;
    /// Button icon glyph size
    pub const ICON_SIZE: f32 = 20.0;
    /// Gap between title and subtitle
    pub const TITLE_BLOCK_SPACING: f32 = 16.0;
    /// Gap between icon and label inside the button
    pub const BUTTON_ROW_SPACING: f32 = 12.0;
    /// Horizontal button padding
    pub const BUTTON_PAD_X: f32 = 40.0;
    /// Vertical button padding
    pub const BUTTON_PAD_Y: f32 = 16.0;
    /// Pill border width
    pub const PILL_BORDER_WIDTH: f32 = 1.0;
    /// Fixed spacer below the button
    pub const BOTTOM_SPACER: f32 = 80.0;
    /// Horizontal padding around the whole foreground column
    pub const EDGE_PADDING: f32 = 20.0;
}

/// Motion parameters for the two animations
pub mod motion {
    /// Terminal vertical displacement of the title block
    pub const ENTRANCE_OFFSET: f32 = -20.0;
    /// Entrance ease-out duration in seconds
    pub const ENTRANCE_SECS: f32 = 1.2;
    /// Spring response (period) in seconds
    pub const SPRING_RESPONSE: f32 = 0.4;
    /// Spring damping fraction (under 1.0 overshoots)
    pub const SPRING_DAMPING: f32 = 0.6;
    /// Button scale while the toggle is off
    pub const SCALE_REST: f32 = 1.0;
    /// Button scale while the toggle is on
    pub const SCALE_PRESSED: f32 = 1.05;
    /// Frame tick interval in milliseconds while animating
    pub const TICK_MS: u64 = 16;
}
