//! Per-axis size constraints.
//!
//! A [`Constraint`] bounds the length a widget may take along one axis. The
//! layout solver seeds every child from [`Constraint::seed`] and then grows it
//! towards [`Constraint::effective_max`].

use std::fmt;

/// Upper bound that never limits growth.
pub const UNBOUNDED: i32 = i32::MAX;

/// Which axis a constraint applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dimension {
    Width,
    Height,
}

/// Bounds on a widget's length along one axis.
///
/// `min` and `max` are never negative. `max` may be below `min`; the solver
/// then treats the effective maximum as `min`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Constraint {
    pub min: i32,
    pub max: i32,
    /// Content-derived length, e.g. measured text plus padding.
    pub preferred: Option<i32>,
}

impl Constraint {
    /// No lower bound, no upper bound.
    pub const AUTO: Self = Constraint {
        min: 0,
        max: UNBOUNDED,
        preferred: None,
    };

    pub fn new(min: i32, max: i32) -> Self {
        Self {
            min: min.max(0),
            max: max.max(0),
            preferred: None,
        }
    }

    /// Exactly `value` long.
    pub fn fixed(value: i32) -> Self {
        Self::new(value, value)
    }

    /// At least `value` long, grows without limit.
    pub fn minimum(value: i32) -> Self {
        Self::new(value, UNBOUNDED)
    }

    /// Starts from zero, grows up to `value`.
    pub fn maximum(value: i32) -> Self {
        Self::new(0, value)
    }

    pub fn auto() -> Self {
        Self::AUTO
    }

    pub fn with_preferred(mut self, preferred: Option<i32>) -> Self {
        self.preferred = preferred.map(|value| value.max(0));
        self
    }

    /// The maximum the solver actually honours.
    #[inline]
    pub fn effective_max(&self) -> i32 {
        self.max.max(self.min)
    }

    /// Starting length before any growth.
    ///
    /// A preferred length is used only when it lies strictly between `min`
    /// and `max`, otherwise the widget starts at `min`.
    #[inline]
    pub fn seed(&self) -> i32 {
        match self.preferred {
            Some(preferred) if preferred > self.min && preferred < self.max => preferred,
            _ => self.min,
        }
    }

    pub fn is_fixed(&self) -> bool {
        self.min == self.max
    }

    pub fn is_unbounded(&self) -> bool {
        self.max == UNBOUNDED
    }
}

impl Default for Constraint {
    fn default() -> Self {
        Self::AUTO
    }
}

impl fmt::Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}..", self.min)?;
        if self.is_unbounded() {
            write!(f, "inf]")?;
        } else {
            write!(f, "{}]", self.max)?;
        }
        if let Some(preferred) = self.preferred {
            write!(f, " pref {}", preferred)?;
        }
        Ok(())
    }
}

/// Width and height constraints of one widget.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct SizeConstraints {
    pub width: Constraint,
    pub height: Constraint,
}

impl SizeConstraints {
    pub fn new(width: Constraint, height: Constraint) -> Self {
        Self { width, height }
    }

    pub fn get(&self, dimension: Dimension) -> Constraint {
        match dimension {
            Dimension::Width => self.width,
            Dimension::Height => self.height,
        }
    }

    pub fn get_mut(&mut self, dimension: Dimension) -> &mut Constraint {
        match dimension {
            Dimension::Width => &mut self.width,
            Dimension::Height => &mut self.height,
        }
    }
}
