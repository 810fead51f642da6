// Section visibility state.
// Latches driven by display events, plus the navbar's scroll threshold.
// Pure transitions; the caller supplies intersection ratios and ticks.

/// One-way visibility latch for a section. Fires the first time the
/// section's visible ratio meets the threshold and then stays set; `age`
/// counts ticks since firing so item appearance can be staggered.
#[derive(Debug, Clone)]
pub struct RevealLatch {
    threshold: f64,
    visible: bool,
    age: u32,
}

impl RevealLatch {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            visible: false,
            age: 0,
        }
    }

    /// Feed an intersection ratio in `0.0..=1.0`. Returns true when this
    /// event fired the latch.
    pub fn on_intersection(&mut self, ratio: f64) -> bool {
        if !self.visible && ratio >= self.threshold {
            self.visible = true;
            return true;
        }
        false
    }

    /// Advance the animation clock while visible.
    pub fn on_tick(&mut self) {
        if self.visible {
            self.age = self.age.saturating_add(1);
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Ticks elapsed since the latch fired.
    pub fn age(&self) -> u32 {
        self.age
    }

    /// Fraction of a fill animation completed, reaching 1.0 after
    /// `duration` ticks.
    pub fn fill_fraction(&self, duration: u32) -> f64 {
        if !self.visible || duration == 0 {
            return if self.visible { 1.0 } else { 0.0 };
        }
        (f64::from(self.age) / f64::from(duration)).min(1.0)
    }
}

/// Navbar scroll state: flips to "scrolled" styling once the active
/// section's internal offset passes a threshold.
#[derive(Debug, Clone)]
pub struct ScrollState {
    offset: u16,
    threshold: u16,
}

impl ScrollState {
    pub fn new(threshold: u16) -> Self {
        Self {
            offset: 0,
            threshold,
        }
    }

    pub fn on_scroll(&mut self, offset: u16) {
        self.offset = offset;
    }

    pub fn offset(&self) -> u16 {
        self.offset
    }

    pub fn scrolled(&self) -> bool {
        self.offset > self.threshold
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn latch_fires_at_threshold_and_stays_set() {
        let mut latch = RevealLatch::new(0.2);

        assert!(!latch.on_intersection(0.1));
        assert!(!latch.is_visible());

        assert!(latch.on_intersection(0.2));
        assert!(latch.is_visible());

        // Dropping below the threshold never unlatches.
        assert!(!latch.on_intersection(0.0));
        assert!(latch.is_visible());
    }

    #[test]
    fn age_only_advances_after_firing() {
        let mut latch = RevealLatch::new(0.5);
        latch.on_tick();
        assert_eq!(latch.age(), 0);

        latch.on_intersection(1.0);
        latch.on_tick();
        latch.on_tick();
        assert_eq!(latch.age(), 2);
    }

    #[test]
    fn fill_fraction_ramps_to_one() {
        let mut latch = RevealLatch::new(0.5);
        assert_eq!(latch.fill_fraction(10), 0.0);

        latch.on_intersection(1.0);
        for _ in 0..5 {
            latch.on_tick();
        }
        assert!((latch.fill_fraction(10) - 0.5).abs() < f64::EPSILON);

        for _ in 0..20 {
            latch.on_tick();
        }
        assert_eq!(latch.fill_fraction(10), 1.0);
    }

    #[test]
    fn scroll_state_flips_past_threshold() {
        let mut scroll = ScrollState::new(2);

        assert!(!scrolled_at(&mut scroll, 0));
        assert!(!scrolled_at(&mut scroll, 2));
        assert!(scrolled_at(&mut scroll, 3));
        assert!(!scrolled_at(&mut scroll, 1));
    }

    fn scrolled_at(scroll: &mut ScrollState, offset: u16) -> bool {
        scroll.on_scroll(offset);
        scroll.scrolled()
    }
}
