/// Mobile Safari keeps honoring a locked viewport until the user actually
/// pinches, so the scale range starts clamped and widens exactly once.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct ScaleBounds {
    pub(crate) min: f32,
    pub(crate) max: f32,
}

pub(crate) const LOCKED_SCALES: ScaleBounds = ScaleBounds { min: 1.0, max: 1.0 };
pub(crate) const PINCH_SCALES: ScaleBounds = ScaleBounds { min: 0.25, max: 1.6 };

pub(crate) fn viewport_content(bounds: ScaleBounds) -> String {
    format!(
        "width=device-width,minimum-scale={},maximum-scale={}",
        bounds.min, bounds.max
    )
}

pub(crate) struct PinchUnlock {
    scales: ScaleBounds,
    unlocked: bool,
}

impl PinchUnlock {
    pub(crate) fn new() -> Self {
        Self {
            scales: LOCKED_SCALES,
            unlocked: false,
        }
    }

    pub(crate) fn content(&self) -> String {
        viewport_content(self.scales)
    }

    /// Widens the scale bounds on the first call and reports the new
    /// content string; later calls return `None`.
    pub(crate) fn unlock(&mut self) -> Option<String> {
        if self.unlocked {
            return None;
        }
        self.unlocked = true;
        self.scales = PINCH_SCALES;
        Some(self.content())
    }
}
