//! Screen model
//!
//! A snapshot of the attached displays as reported by the platform. The core
//! never caches a snapshot; every launch enumerates exactly once.

use serde::{Deserialize, Serialize};

/// Rectangle in virtual-desktop pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Exclusive right edge
    pub fn right(&self) -> i64 {
        self.x as i64 + self.width as i64
    }

    /// Exclusive bottom edge
    pub fn bottom(&self) -> i64 {
        self.y as i64 + self.height as i64
    }

    /// Smallest rectangle containing both `self` and `other`
    pub fn union(&self, other: &Rect) -> Rect {
        let left = self.x.min(other.x);
        let top = self.y.min(other.y);
        let right = self.right().max(other.right());
        let bottom = self.bottom().max(other.bottom());

        Rect {
            x: left,
            y: top,
            width: (right - left as i64) as u32,
            height: (bottom - top as i64) as u32,
        }
    }

    /// Bounding box of all rectangles, `None` when there are none
    pub fn bounding<'a>(rects: impl IntoIterator<Item = &'a Rect>) -> Option<Rect> {
        rects.into_iter().fold(None, |acc, rect| match acc {
            Some(acc) => Some(acc.union(rect)),
            None => Some(*rect),
        })
    }
}

/// One attached display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenDescriptor {
    pub bounds: Rect,
    pub is_primary: bool,
}

impl ScreenDescriptor {
    pub fn new(bounds: Rect, is_primary: bool) -> Self {
        Self { bounds, is_primary }
    }
}

/// Source of the currently attached displays, in enumeration order
pub trait ScreenEnumerator {
    fn screens(&self) -> anyhow::Result<Vec<ScreenDescriptor>>;
}

impl<T: ScreenEnumerator + ?Sized> ScreenEnumerator for &T {
    fn screens(&self) -> anyhow::Result<Vec<ScreenDescriptor>> {
        (**self).screens()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_union_side_by_side() {
        let a = Rect::new(0, 0, 1920, 1080);
        let b = Rect::new(1920, 0, 1280, 1024);
        assert_eq!(a.union(&b), Rect::new(0, 0, 3200, 1080));
    }

    #[test]
    fn test_union_negative_origin() {
        // Secondary monitor placed left of and above the primary
        let primary = Rect::new(0, 0, 1920, 1080);
        let left = Rect::new(-1280, -200, 1280, 1024);
        assert_eq!(primary.union(&left), Rect::new(-1280, -200, 3200, 1280));
    }

    #[test]
    fn test_bounding_empty() {
        let none: [Rect; 0] = [];
        assert_eq!(Rect::bounding(&none), None);
    }

    #[test]
    fn test_bounding_single() {
        let only = Rect::new(10, 20, 800, 600);
        assert_eq!(Rect::bounding(&[only]), Some(only));
    }
}
