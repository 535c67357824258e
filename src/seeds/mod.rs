#[cfg(test)]
mod tests;

use std::cell::Cell;
use std::rc::Rc;

use crate::canvas::{self, PixelPoint, Point, Viewport};

/// Cluster count shared between the session and the click handler.
///
/// The handler must see the value of k at click time, not the value at the
/// moment it was attached, so k lives in a single shared cell that the
/// session updates and the selector dereferences per click.
pub type SharedK = Rc<Cell<usize>>;

/// Captures user-clicked seed points while manual initialization is armed.
///
/// Carries an explicit subscription lifecycle: clicks only register between
/// `activate()` and `deactivate()`, which the session drives from its
/// invalidation logic. Click order is preserved; it determines which seed
/// index each point becomes.
#[derive(Debug)]
pub struct SeedSelector {
    seeds: Vec<Point>,
    k: SharedK,
    active: bool,
}

impl SeedSelector {
    pub fn new(k: SharedK) -> Self {
        Self {
            seeds: Vec::new(),
            k,
            active: false,
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Attach the click subscription.
    pub fn activate(&mut self) {
        self.active = true;
    }

    /// Detach the click subscription.
    pub fn deactivate(&mut self) {
        self.active = false;
    }

    pub fn seeds(&self) -> &[Point] {
        &self.seeds
    }

    pub fn len(&self) -> usize {
        self.seeds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seeds.is_empty()
    }

    pub fn clear(&mut self) {
        self.seeds.clear();
    }

    /// Handle a pointer click. Appends a seed when the subscription is
    /// attached, the mapped point is inside the plotted range, and the set
    /// is under capacity; otherwise the click is ignored. Returns the
    /// appended point, if any.
    pub fn on_click(&mut self, pixel: PixelPoint, viewport: Viewport) -> Option<Point> {
        if !self.active || self.seeds.len() >= self.k.get() {
            return None;
        }

        let point = canvas::to_data(pixel, viewport, canvas::X_RANGE, canvas::Y_RANGE)?;
        self.seeds.push(point);
        Some(point)
    }
}
