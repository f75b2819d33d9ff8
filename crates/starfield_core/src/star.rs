//! Star storage

use starfield_math::Vec2;

/// A single star
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Star {
    /// World-space offset from the view axis (fixed after creation)
    offset: Vec2,
    /// Distance along the view axis; smaller is closer
    pub(crate) depth: f32,
}

impl Star {
    /// Create a star at `offset` and `depth`
    #[inline]
    pub fn new(offset: Vec2, depth: f32) -> Self {
        Self { offset, depth }
    }

    /// World-space offset from the view axis
    #[inline]
    pub fn offset(&self) -> Vec2 {
        self.offset
    }

    /// Distance along the view axis
    #[inline]
    pub fn depth(&self) -> f32 {
        self.depth
    }
}

/// Fixed-size collection of stars plus a cursor at the furthest one
///
/// Stars are never added or removed after construction. The underlying order
/// is never changed either; back-to-front order is read as a ring starting at
/// [`StarField::furthest_index`].
#[derive(Debug, Clone, PartialEq)]
pub struct StarField {
    stars: Vec<Star>,
    furthest: usize,
}

impl StarField {
    /// Wrap stars that are already sorted furthest-first
    pub(crate) fn from_sorted(stars: Vec<Star>) -> Self {
        Self { stars, furthest: 0 }
    }

    /// Number of stars
    #[inline]
    pub fn len(&self) -> usize {
        self.stars.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.stars.is_empty()
    }

    /// All stars in storage order
    #[inline]
    pub fn stars(&self) -> &[Star] {
        &self.stars
    }

    /// Get a star by storage index
    #[inline]
    pub fn get(&self, index: usize) -> Option<&Star> {
        self.stars.get(index)
    }

    /// Storage index of the star currently nearest the far plane
    #[inline]
    pub fn furthest_index(&self) -> usize {
        self.furthest
    }

    /// Mutable access for the scheduler
    pub(crate) fn stars_mut(&mut self) -> &mut [Star] {
        &mut self.stars
    }

    pub(crate) fn set_furthest(&mut self, index: usize) {
        debug_assert!(index < self.stars.len());
        self.furthest = index;
    }

    /// Ring read starting at the furthest star
    ///
    /// Yields `(slot, star)` where slot `i` holds the star at storage index
    /// `(i + furthest) % len`.
    pub fn ring(&self) -> RingIter<'_> {
        RingIter {
            stars: &self.stars,
            start: self.furthest,
            slot: 0,
        }
    }
}

/// Iterator returned by [`StarField::ring`]
pub struct RingIter<'a> {
    stars: &'a [Star],
    start: usize,
    slot: usize,
}

impl<'a> Iterator for RingIter<'a> {
    type Item = (usize, &'a Star);

    fn next(&mut self) -> Option<Self::Item> {
        let len = self.stars.len();
        if self.slot >= len {
            return None;
        }
        let slot = self.slot;
        self.slot += 1;
        Some((slot, &self.stars[(slot + self.start) % len]))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.stars.len() - self.slot;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for RingIter<'_> {}
