//! Box layout solver.
//!
//! Distributes a container's content area among its children. Row and Column
//! run the same algorithm on different axes:
//!
//! 1. Seed every child from its constraint and hand an even share of the free
//!    space to children that seeded at zero.
//! 2. Grow children towards their maxima, then grow the gaps towards the gap
//!    maximum, until the axis is full or nothing can grow.
//! 3. Place children one after another, centred on the cross axis.
//!
//! The solver is a pure function of its input so it can be tested and
//! benchmarked without a widget tree.

use crate::constraint::{Constraint, SizeConstraints};
use trellis_core::geometry::Rect;
use trellis_core::profiling::profile_function;

/// How a container arranges its children.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Left to right.
    #[default]
    Row,
    /// Top to bottom.
    Column,
    /// Every child centred on top of each other.
    Stack,
}

/// Where gaps go along the layout axis.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SpacingPolicy {
    /// Gaps only between adjacent children.
    #[default]
    Between,
    /// Gaps between children and before the first and after the last.
    Around,
}

impl SpacingPolicy {
    /// Number of gaps for `children` laid out items.
    pub fn gap_count(&self, children: usize) -> usize {
        match self {
            SpacingPolicy::Between => children.saturating_sub(1),
            SpacingPolicy::Around => children + 1,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct LayoutInput<'a> {
    /// Area the children are placed in.
    pub content: Rect<i32>,
    pub direction: Direction,
    pub policy: SpacingPolicy,
    pub gap: Constraint,
    pub children: &'a [SizeConstraints],
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LayoutOutput {
    /// One rectangle per child, in input order.
    pub bounds: Vec<Rect<i32>>,
    /// Resolved gap between children.
    pub spacing: i32,
    /// Unclaimed space along the layout axis. Negative when the minimum sizes
    /// already overflow.
    pub space_left: i32,
}

/// Compute child rectangles for one container.
pub fn solve(input: &LayoutInput<'_>) -> LayoutOutput {
    profile_function!();

    if input.children.is_empty() {
        return LayoutOutput {
            bounds: Vec::new(),
            spacing: input.gap.min,
            space_left: 0,
        };
    }

    let output = match input.direction {
        Direction::Stack => stack(input),
        Direction::Row | Direction::Column => linear(input),
    };

    tracing::trace!(
        direction = ?input.direction,
        children = input.children.len(),
        spacing = output.spacing,
        space_left = output.space_left,
        "Solved container layout"
    );
    output
}

fn stack(input: &LayoutInput<'_>) -> LayoutOutput {
    let area = input.content;
    let width = area.width.max(0);
    let height = area.height.max(0);

    let bounds = input
        .children
        .iter()
        .map(|child| {
            let w = width.min(child.width.effective_max());
            let h = height.min(child.height.effective_max());
            Rect::new(
                area.x + (width - w) / 2,
                area.y + (height - h) / 2,
                w,
                h,
            )
        })
        .collect();

    LayoutOutput {
        bounds,
        spacing: input.gap.min,
        space_left: 0,
    }
}

/// One axis worth of growth state.
struct Growth {
    axis_len: i64,
    sizes: Vec<i64>,
    maxima: Vec<i64>,
    spacing: i64,
    gap_max: i64,
    gaps: i64,
}

impl Growth {
    fn content_len(&self) -> i64 {
        self.sizes.iter().sum::<i64>() + self.spacing * self.gaps
    }

    fn space_left(&self) -> i64 {
        self.axis_len - self.content_len()
    }

    /// Hand out an even share of the free space to children with zero seed.
    fn distribute_to_flex(&mut self) {
        let flex = self.sizes.iter().filter(|size| **size == 0).count() as i64;
        if flex == 0 {
            return;
        }
        let average = self.space_left().max(0) / flex;
        for (size, max) in self.sizes.iter_mut().zip(&self.maxima) {
            if *size == 0 {
                *size = average.min(*max);
            }
        }
    }

    fn run(&mut self) {
        let mut can_grow_children = true;
        let mut can_grow_spacing = true;
        let mut space_left = self.space_left();

        while space_left > 0 && (can_grow_children || can_grow_spacing) {
            if can_grow_children {
                can_grow_children = self.grow_children(space_left);
            } else {
                can_grow_spacing = self.grow_spacing(space_left);
            }
            space_left = self.space_left();
        }
    }

    /// Returns whether another round could still grow a child.
    ///
    /// When the share rounds down to zero every child gets at most one unit,
    /// last child first, so the remainder lands on later children.
    fn grow_children(&mut self, space_left: i64) -> bool {
        let count = self.sizes.len();
        let share = space_left / count as i64;
        let (step, order): (i64, Vec<usize>) = if share == 0 {
            (1, (0..count).rev().collect())
        } else {
            (share, (0..count).collect())
        };

        let mut budget = space_left;
        let mut grew = false;
        for index in order {
            if budget <= 0 {
                break;
            }
            let room = self.maxima[index] - self.sizes[index];
            let amount = step.min(room).min(budget);
            if amount <= 0 {
                continue;
            }
            self.sizes[index] += amount;
            budget -= amount;
            grew = true;
        }

        grew && self
            .sizes
            .iter()
            .zip(&self.maxima)
            .any(|(size, max)| size < max)
    }

    /// Returns whether the gaps can still widen.
    fn grow_spacing(&mut self, space_left: i64) -> bool {
        if self.gaps == 0 || self.spacing >= self.gap_max {
            return false;
        }
        let share = space_left / self.gaps;
        if share == 0 {
            return false;
        }
        self.spacing = (self.spacing + share).min(self.gap_max);
        self.spacing < self.gap_max
    }
}

fn linear(input: &LayoutInput<'_>) -> LayoutOutput {
    let area = input.content;
    let horizontal = input.direction == Direction::Row;
    let (main_origin, cross_origin, axis_len, cross_len) = if horizontal {
        (area.x, area.y, area.width.max(0), area.height.max(0))
    } else {
        (area.y, area.x, area.height.max(0), area.width.max(0))
    };

    let (main, cross): (Vec<Constraint>, Vec<Constraint>) = input
        .children
        .iter()
        .map(|child| {
            if horizontal {
                (child.width, child.height)
            } else {
                (child.height, child.width)
            }
        })
        .unzip();

    let mut growth = Growth {
        axis_len: axis_len as i64,
        sizes: main.iter().map(|c| c.seed() as i64).collect(),
        maxima: main.iter().map(|c| c.effective_max() as i64).collect(),
        spacing: input.gap.min as i64,
        gap_max: input.gap.effective_max() as i64,
        gaps: input.policy.gap_count(main.len()) as i64,
    };
    growth.distribute_to_flex();
    growth.run();

    let spacing = growth.spacing;
    let mut cursor = main_origin as i64;
    if input.policy == SpacingPolicy::Around {
        cursor += spacing;
    }

    let bounds = growth
        .sizes
        .iter()
        .zip(&cross)
        .map(|(size, cross_constraint)| {
            let cross_size = cross_len.min(cross_constraint.effective_max());
            let cross_pos = cross_origin + ((cross_len - cross_size) / 2).max(0);
            let main_pos = clamp_i32(cursor);
            let main_size = clamp_i32(*size);
            cursor += size + spacing;
            if horizontal {
                Rect::new(main_pos, cross_pos, main_size, cross_size)
            } else {
                Rect::new(cross_pos, main_pos, cross_size, main_size)
            }
        })
        .collect();

    LayoutOutput {
        bounds,
        spacing: clamp_i32(spacing),
        space_left: clamp_i32(growth.space_left()),
    }
}

fn clamp_i32(value: i64) -> i32 {
    value.clamp(i32::MIN as i64, i32::MAX as i64) as i32
}
