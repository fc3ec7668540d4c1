#![forbid(unsafe_code)]

//! Responsive group-size policy.
//!
//! A grouped carousel shows G thumbnails at a time; on narrow viewports G
//! shrinks. [`GroupSizePolicy`] selects between a fixed G and a
//! breakpoint-driven one, so the two source variants of the widget become
//! configurations of the same component.

/// Ordered width breakpoints mapping viewport width to a group size.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Breakpoints {
    /// `(min_width, group_size)` steps, sorted ascending by `min_width`.
    steps: Vec<(f32, usize)>,
}

impl Breakpoints {
    /// Create a breakpoint table from `(min_width, group_size)` steps.
    ///
    /// Steps are sorted by `min_width`; a step at `min_width == 0.0` is
    /// required so every width resolves.
    ///
    /// # Panics
    ///
    /// Panics if `steps` is empty, if no step covers width 0, or if any
    /// group size is zero.
    #[must_use]
    pub fn new(steps: impl Into<Vec<(f32, usize)>>) -> Self {
        let mut steps = steps.into();
        assert!(!steps.is_empty(), "breakpoints must have at least one step");
        steps.sort_by(|a, b| a.0.total_cmp(&b.0));
        assert!(
            steps[0].0 == 0.0,
            "breakpoints must include a step at min_width 0"
        );
        assert!(
            steps.iter().all(|&(_, g)| g >= 1),
            "group sizes must be >= 1"
        );
        Self { steps }
    }

    /// Group size for a viewport width: the step with the largest
    /// `min_width <= width`.
    #[must_use]
    pub fn group_size_for(&self, width: f32) -> usize {
        self.steps
            .iter()
            .rev()
            .find(|&&(min, _)| min <= width)
            .map(|&(_, g)| g)
            .unwrap_or(self.steps[0].1)
    }
}

impl Default for Breakpoints {
    /// Two thumbnails on phones, three on tablets, four on desktop.
    fn default() -> Self {
        Self::new([(0.0, 2), (640.0, 3), (1024.0, 4)])
    }
}

/// How the visible-group size is determined.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GroupSizePolicy {
    /// A constant group size, independent of viewport width.
    Fixed(usize),
    /// Group size follows viewport-width breakpoints.
    Responsive(Breakpoints),
}

impl GroupSizePolicy {
    /// Resolve the group size for a viewport width.
    ///
    /// `Fixed` ignores the width.
    #[must_use]
    pub fn resolve(&self, width: f32) -> usize {
        match self {
            Self::Fixed(g) => *g,
            Self::Responsive(bp) => bp.group_size_for(width),
        }
    }
}

impl Default for GroupSizePolicy {
    fn default() -> Self {
        Self::Responsive(Breakpoints::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_breakpoints() {
        let bp = Breakpoints::default();
        assert_eq!(bp.group_size_for(0.0), 2);
        assert_eq!(bp.group_size_for(375.0), 2);
        assert_eq!(bp.group_size_for(640.0), 3);
        assert_eq!(bp.group_size_for(800.0), 3);
        assert_eq!(bp.group_size_for(1024.0), 4);
        assert_eq!(bp.group_size_for(2560.0), 4);
    }

    #[test]
    fn steps_are_sorted_on_construction() {
        let bp = Breakpoints::new([(768.0, 3), (0.0, 1), (1280.0, 5)]);
        assert_eq!(bp.group_size_for(100.0), 1);
        assert_eq!(bp.group_size_for(900.0), 3);
        assert_eq!(bp.group_size_for(1280.0), 5);
    }

    #[test]
    fn boundary_width_takes_larger_step() {
        let bp = Breakpoints::new([(0.0, 2), (640.0, 4)]);
        assert_eq!(bp.group_size_for(639.9), 2);
        assert_eq!(bp.group_size_for(640.0), 4);
    }

    #[test]
    #[should_panic(expected = "step at min_width 0")]
    fn missing_zero_step_panics() {
        let _ = Breakpoints::new([(640.0, 3)]);
    }

    #[test]
    #[should_panic(expected = "at least one step")]
    fn empty_steps_panic() {
        let _ = Breakpoints::new(Vec::new());
    }

    #[test]
    #[should_panic(expected = "group sizes must be >= 1")]
    fn zero_group_size_panics() {
        let _ = Breakpoints::new([(0.0, 0)]);
    }

    #[test]
    fn fixed_policy_ignores_width() {
        let policy = GroupSizePolicy::Fixed(4);
        assert_eq!(policy.resolve(0.0), 4);
        assert_eq!(policy.resolve(320.0), 4);
        assert_eq!(policy.resolve(1920.0), 4);
    }

    #[test]
    fn responsive_policy_follows_breakpoints() {
        let policy = GroupSizePolicy::default();
        assert_eq!(policy.resolve(320.0), 2);
        assert_eq!(policy.resolve(1440.0), 4);
    }
}
