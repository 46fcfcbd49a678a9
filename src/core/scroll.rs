//! Scroll-position publisher and its panel/chapter subscribers.
//!
//! Geometry lives in document scroll space (pixels from the top). Panels own
//! a trigger zone; crossing into it from either direction fires the panel's
//! bound shot. Subscribers are evaluated synchronously in registration
//! (document) order, and when one update fires several panels the last one
//! fired wins.

/// A panel enters when its top reaches this fraction down the viewport.
pub const PANEL_ENTER_FRACTION: f32 = 0.60;
/// A panel exits when its bottom passes this fraction down the viewport.
pub const PANEL_EXIT_FRACTION: f32 = 0.40;
/// Chapters stay pinned for this multiple of their own height.
pub const CHAPTER_PIN_FACTOR: f32 = 1.5;

/// Measured document-space geometry for one panel, taken at refresh time.
#[derive(Clone, Copy, Debug)]
pub struct PanelRect {
    /// Bound index into the shot table.
    pub shot: usize,
    /// Absolute top of the element, px from document top.
    pub top: f32,
    /// Element height, px.
    pub height: f32,
}

#[derive(Clone, Copy, Debug)]
struct PanelTrigger {
    shot: usize,
    /// Scroll position at which the zone begins.
    start: f32,
    /// Scroll position at which the zone ends.
    end: f32,
    inside: bool,
}

impl PanelTrigger {
    fn contains(&self, pos: f32) -> bool {
        pos >= self.start && pos < self.end
    }
}

/// Scroll publisher: holds trigger boundaries and total scrollable height,
/// recomputed by [`ScrollTriggers::refresh`] after any layout change.
#[derive(Default)]
pub struct ScrollTriggers {
    panels: Vec<PanelTrigger>,
    total_scroll: f32,
}

impl ScrollTriggers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuilds all trigger boundaries from freshly measured geometry.
    ///
    /// `total_scroll` is the maximum scroll position (document height minus
    /// viewport height). Zones that were already containing `pos` stay
    /// marked inside so a refresh never re-fires the active panel.
    pub fn refresh(&mut self, panels: &[PanelRect], viewport_h: f32, total_scroll: f32, pos: f32) {
        self.total_scroll = total_scroll.max(0.0);
        self.panels = panels
            .iter()
            .map(|p| {
                let start = p.top - viewport_h * PANEL_ENTER_FRACTION;
                let end = p.top + p.height - viewport_h * PANEL_EXIT_FRACTION;
                let mut t = PanelTrigger {
                    shot: p.shot,
                    start,
                    end: end.max(start),
                    inside: false,
                };
                t.inside = t.contains(pos);
                t
            })
            .collect();
    }

    /// Feeds a new scroll position to every subscriber in document order.
    ///
    /// Returns the shot index of the last panel whose zone was entered since
    /// the previous update, or `None` when no boundary was crossed.
    /// Re-entering an already-inside zone never fires.
    pub fn update(&mut self, pos: f32) -> Option<usize> {
        let mut fired = None;
        for t in &mut self.panels {
            let inside = t.contains(pos);
            if inside && !t.inside {
                fired = Some(t.shot);
            }
            t.inside = inside;
        }
        fired
    }

    /// Page progress in [0, 1] for the rotation coupling.
    pub fn progress(&self, pos: f32) -> f32 {
        if self.total_scroll <= 0.0 {
            0.0
        } else {
            (pos / self.total_scroll).clamp(0.0, 1.0)
        }
    }

}

/// Scroll distance a chapter of `height` px stays pinned for.
#[inline]
pub fn chapter_pin_distance(height: f32) -> f32 {
    height * CHAPTER_PIN_FACTOR
}
