// profile.rs - Display Profiles
//
// The two preview window sizes the screen is exercised against: a tall
// flagship-phone shape and a compact one. Picked once at startup from the
// command line; the window is not resizable.

use std::fmt;

/// Window size preset for the splash window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayProfile {
    /// 393x852 logical pixels
    #[default]
    Tall,
    /// 375x667 logical pixels
    Compact,
}

impl DisplayProfile {
    pub fn all() -> &'static [DisplayProfile] {
        &[DisplayProfile::Tall, DisplayProfile::Compact]
    }

    /// Logical window size in pixels.
    pub fn dimensions(&self) -> (f32, f32) {
        match self {
            DisplayProfile::Tall => (393.0, 852.0),
            DisplayProfile::Compact => (375.0, 667.0),
        }
    }

    fn name(&self) -> &'static str {
        match self {
            DisplayProfile::Tall => "tall",
            DisplayProfile::Compact => "compact",
        }
    }

    /// Scans command-line arguments for a profile selection. Unknown or
    /// absent selections fall back to the default profile.
    pub fn from_args<I>(args: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--compact" | "-c" => return DisplayProfile::Compact,
                "--profile" => {
                    if let Some(name) = args.next() {
                        if let Some(profile) = Self::from_name(&name) {
                            return profile;
                        }
                        log::warn!("unknown profile '{name}', using default");
                    }
                }
                _ => {}
            }
        }
        DisplayProfile::default()
    }

    fn from_name(name: &str) -> Option<Self> {
        DisplayProfile::all()
            .iter()
            .copied()
            .find(|p| p.name() == name)
    }
}

impl fmt::Display for DisplayProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (w, h) = self.dimensions();
        write!(f, "{} ({}x{})", self.name(), w, h)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn default_profile_is_tall() {
        assert_eq!(DisplayProfile::from_args(args(&["simple-splash"])), DisplayProfile::Tall);
    }

    #[test]
    fn compact_flag_selects_compact() {
        assert_eq!(
            DisplayProfile::from_args(args(&["simple-splash", "--compact"])),
            DisplayProfile::Compact
        );
        assert_eq!(
            DisplayProfile::from_args(args(&["simple-splash", "-c"])),
            DisplayProfile::Compact
        );
    }

    #[test]
    fn named_profile_selection() {
        assert_eq!(
            DisplayProfile::from_args(args(&["simple-splash", "--profile", "compact"])),
            DisplayProfile::Compact
        );
        assert_eq!(
            DisplayProfile::from_args(args(&["simple-splash", "--profile", "tall"])),
            DisplayProfile::Tall
        );
    }

    #[test]
    fn unknown_profile_falls_back_to_default() {
        assert_eq!(
            DisplayProfile::from_args(args(&["simple-splash", "--profile", "desktop"])),
            DisplayProfile::Tall
        );
    }

    #[test]
    fn profile_dimensions() {
        assert_eq!(DisplayProfile::Tall.dimensions(), (393.0, 852.0));
        assert_eq!(DisplayProfile::Compact.dimensions(), (375.0, 667.0));
    }
}
