use std::collections::HashMap;

use crate::coords::{CornerRadii, Rect};

use super::{ClosedPath, ShapeFamily, build_path};

/// Bit-exact key over every input of [`build_path`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
struct PathKey {
    family: ShapeFamily,
    bounds: [u32; 4],
    radii: [u32; 4],
    filled: bool,
    stroked: bool,
}

impl PathKey {
    fn new(family: ShapeFamily, bounds: Rect, radii: CornerRadii, filled: bool, stroked: bool) -> Self {
        Self {
            family,
            bounds: [
                bounds.origin.x.to_bits(),
                bounds.origin.y.to_bits(),
                bounds.size.x.to_bits(),
                bounds.size.y.to_bits(),
            ],
            radii: [
                radii.top_left.to_bits(),
                radii.top_right.to_bits(),
                radii.bottom_right.to_bits(),
                radii.bottom_left.to_bits(),
            ],
            filled,
            stroked,
        }
    }
}

/// Memoizes [`build_path`] results.
///
/// `build_path` is pure, so a hit is always identical to a fresh build.
/// The cache is dropped wholesale once it grows past `capacity`; widgets
/// resize rarely enough that an LRU would not pay for itself.
#[derive(Debug)]
pub struct PathCache {
    entries: HashMap<PathKey, ClosedPath>,
    capacity: usize,
    hits: u64,
    misses: u64,
}

impl PathCache {
    pub const DEFAULT_CAPACITY: usize = 256;

    pub fn new() -> Self {
        Self::with_capacity(Self::DEFAULT_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self { entries: HashMap::new(), capacity: capacity.max(1), hits: 0, misses: 0 }
    }

    /// Returns the cached path for these inputs, building it on a miss.
    pub fn get_or_build(
        &mut self,
        family: ShapeFamily,
        bounds: Rect,
        radii: CornerRadii,
        is_filled: bool,
        is_stroked: bool,
    ) -> &ClosedPath {
        let key = PathKey::new(family, bounds, radii, is_filled, is_stroked);

        if self.entries.contains_key(&key) {
            self.hits += 1;
        } else {
            self.misses += 1;
            if self.entries.len() >= self.capacity {
                log::trace!("path cache full ({} entries), clearing", self.entries.len());
                self.entries.clear();
            }
            self.entries.insert(key, build_path(family, bounds, radii, is_filled, is_stroked));
        }

        &self.entries[&key]
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// `(hits, misses)` since creation.
    #[inline]
    pub fn stats(&self) -> (u64, u64) {
        (self.hits, self.misses)
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl Default for PathCache {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hit_returns_same_path_as_fresh_build() {
        let mut cache = PathCache::new();
        let rect = Rect::new(0.0, 0.0, 80.0, 32.0);
        let radii = CornerRadii::all(8.0);

        let first = cache.get_or_build(ShapeFamily::Rounded, rect, radii, true, false).clone();
        let second = cache.get_or_build(ShapeFamily::Rounded, rect, radii, true, false).clone();

        assert_eq!(first, second);
        assert_eq!(first, build_path(ShapeFamily::Rounded, rect, radii, true, false));
        assert_eq!(cache.stats(), (1, 1));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn every_input_is_part_of_the_key() {
        let mut cache = PathCache::new();
        let rect = Rect::new(0.0, 0.0, 80.0, 32.0);
        let radii = CornerRadii::all(8.0);

        cache.get_or_build(ShapeFamily::Rounded, rect, radii, true, false);
        cache.get_or_build(ShapeFamily::Cut, rect, radii, true, false);
        cache.get_or_build(ShapeFamily::Rounded, rect.translate(crate::coords::Vec2::new(1.0, 0.0)), radii, true, false);
        cache.get_or_build(ShapeFamily::Rounded, rect, CornerRadii::all(4.0), true, false);
        cache.get_or_build(ShapeFamily::Rounded, rect, radii, true, true);

        assert_eq!(cache.len(), 5);
        assert_eq!(cache.stats(), (0, 5));
    }

    #[test]
    fn overflow_clears() {
        let mut cache = PathCache::with_capacity(2);
        for i in 0..3 {
            cache.get_or_build(ShapeFamily::Cut, Rect::new(0.0, 0.0, 10.0 + i as f32, 10.0), CornerRadii::zero(), true, false);
        }
        assert_eq!(cache.len(), 1);
    }
}
