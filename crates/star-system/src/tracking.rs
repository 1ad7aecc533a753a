//! Incremental furthest/closest bookkeeping

use tracing::trace;
use units::Length;

/// Indices of the furthest and closest tracked planets
///
/// Positions refer to the owning system's append-only planet list, so they
/// stay valid for the lifetime of the system. Updates happen one insertion at
/// a time and the extremes are never recomputed from scratch. Ties keep the
/// planet that was recorded first.
///
/// Each new planet is compared by the distance it was *given*, against the
/// stored (clamped) distance of the planet currently tracked. A negative input
/// therefore still beats a tracked zero for closest, and a NaN input never
/// replaces an existing extreme.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DistanceExtremes {
    furthest: Option<(usize, Length)>,
    closest: Option<(usize, Length)>,
}

impl DistanceExtremes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a planet at `index` with the distance it was created from (AU)
    ///
    /// The first recorded planet becomes both furthest and closest. Later
    /// planets replace the furthest only when strictly further, and the
    /// closest only when strictly closer.
    pub fn record(&mut self, index: usize, distance: f64) {
        let stored = Length::from_au(distance);
        if self
            .furthest
            .is_none_or(|(_, furthest)| distance > furthest.to_au())
        {
            trace!(index, distance, "new furthest planet");
            self.furthest = Some((index, stored));
        }
        if self
            .closest
            .is_none_or(|(_, closest)| distance < closest.to_au())
        {
            trace!(index, distance, "new closest planet");
            self.closest = Some((index, stored));
        }
    }

    pub fn furthest(&self) -> Option<usize> {
        self.furthest.map(|(index, _)| index)
    }

    pub fn closest(&self) -> Option<usize> {
        self.closest.map(|(index, _)| index)
    }

    /// Whether any planet has been recorded
    pub fn is_empty(&self) -> bool {
        self.furthest.is_none()
    }
}
