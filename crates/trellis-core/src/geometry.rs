use std::ops::Mul;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Rect<T> {
    pub x: T,
    pub y: T,
    pub width: T,
    pub height: T,
}

impl<T> Rect<T> {
    pub const fn new(x: T, y: T, width: T, height: T) -> Self {
        Rect {
            x,
            y,
            width,
            height,
        }
    }
}

impl Rect<i32> {
    pub const ZERO: Self = Rect::new(0, 0, 0, 0);

    pub fn right(&self) -> i32 {
        self.x.saturating_add(self.width)
    }

    pub fn bottom(&self) -> i32 {
        self.y.saturating_add(self.height)
    }

    pub fn size(&self) -> Size<i32> {
        Size::new(self.width, self.height)
    }

    pub fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }

    /// Shrink by `insets`. Sizes that would go negative are clamped to zero.
    pub fn inset(&self, insets: Insets) -> Self {
        let horizontal = insets.left.saturating_add(insets.right);
        let vertical = insets.top.saturating_add(insets.bottom);
        Rect {
            x: self.x.saturating_add(insets.left),
            y: self.y.saturating_add(insets.top),
            width: self.width.saturating_sub(horizontal).max(0),
            height: self.height.saturating_sub(vertical).max(0),
        }
    }

    /// Strict interior test, points on an edge are outside.
    pub fn contains_point(&self, x: f32, y: f32) -> bool {
        x > self.x as f32
            && x < self.right() as f32
            && y > self.y as f32
            && y < self.bottom() as f32
    }

    /// Whether `other` lies entirely inside `self` (edges may touch).
    pub fn contains_rect(&self, other: &Rect<i32>) -> bool {
        other.x >= self.x
            && other.y >= self.y
            && other.right() <= self.right()
            && other.bottom() <= self.bottom()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Size<T> {
    pub width: T,
    pub height: T,
}

impl<T> Size<T> {
    pub fn new(width: T, height: T) -> Self {
        Size { width, height }
    }

    pub fn cast<U: From<T>>(self) -> Size<U> {
        Size {
            width: U::from(self.width),
            height: U::from(self.height),
        }
    }
}

impl<T: Mul + Copy> Mul<T> for Size<T> {
    type Output = Size<<T as Mul>::Output>;

    fn mul(self, rhs: T) -> Self::Output {
        Size {
            width: self.width * rhs,
            height: self.height * rhs,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Pos<T> {
    pub x: T,
    pub y: T,
}

impl<T> Pos<T> {
    pub fn new(x: T, y: T) -> Self {
        Pos { x, y }
    }
}

/// Padding around a box, one value per edge.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Insets {
    pub left: i32,
    pub right: i32,
    pub top: i32,
    pub bottom: i32,
}

impl Insets {
    pub const ZERO: Self = Insets::new(0, 0, 0, 0);

    /// Negative insets are clamped to zero.
    pub const fn new(left: i32, right: i32, top: i32, bottom: i32) -> Self {
        Insets {
            left: if left < 0 { 0 } else { left },
            right: if right < 0 { 0 } else { right },
            top: if top < 0 { 0 } else { top },
            bottom: if bottom < 0 { 0 } else { bottom },
        }
    }

    pub const fn all(value: i32) -> Self {
        Self::new(value, value, value, value)
    }

    pub const fn symmetric(horizontal: i32, vertical: i32) -> Self {
        Self::new(horizontal, horizontal, vertical, vertical)
    }

    pub fn horizontal(&self) -> i32 {
        self.left + self.right
    }

    pub fn vertical(&self) -> i32 {
        self.top + self.bottom
    }
}
