//! Parsed representation of an options query string.

use crate::options::{CollageOptions, RatioMode};

/// Option values named in a query string. `None` means "not given".
///
/// Produced by [`crate::query::parse()`], applied with
/// [`apply()`](Self::apply).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[non_exhaustive]
pub struct Overrides {
    /// `max`, `maxvisible`.
    pub max_visible: Option<usize>,
    /// `gap`.
    pub gap: Option<u32>,
    /// `radius`, `cornerradius`.
    pub corner_radius: Option<u32>,
    /// `hero`, `herowidth`, in percent.
    pub hero_width_percent: Option<u8>,
    /// `ratios`, or the `intrinsic` boolean shorthand.
    pub ratio_mode: Option<RatioMode>,
}

impl Overrides {
    /// Create empty overrides.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether no option was given.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Apply onto `base`, coercing values the same way the builder does.
    pub fn apply(&self, base: CollageOptions) -> CollageOptions {
        let mut options = base;
        if let Some(max) = self.max_visible {
            options = options.max_visible(max);
        }
        if let Some(gap) = self.gap {
            options = options.gap(gap);
        }
        if let Some(radius) = self.corner_radius {
            options = options.corner_radius(radius);
        }
        if let Some(pct) = self.hero_width_percent {
            options = options.hero_width_percent(pct);
        }
        if let Some(mode) = self.ratio_mode {
            options = options.ratio_mode(mode);
        }
        options
    }

    /// Apply onto the defaults.
    pub fn to_options(&self) -> CollageOptions {
        self.apply(CollageOptions::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_overrides_keep_base() {
        let base = CollageOptions::new().gap(9);
        assert!(Overrides::new().is_empty());
        assert_eq!(Overrides::new().apply(base.clone()), base);
    }

    #[test]
    fn overrides_replace_only_given_fields() {
        let o = Overrides {
            gap: Some(0),
            ratio_mode: Some(RatioMode::Intrinsic),
            ..Overrides::default()
        };
        let options = o.apply(CollageOptions::new().corner_radius(2));
        assert_eq!(options.gap, 0);
        assert_eq!(options.corner_radius, 2);
        assert_eq!(options.ratio_mode, RatioMode::Intrinsic);
        assert_eq!(options.max_visible, 4);
    }
}
