//! Extremum trackers fed by `add`.

/// The two largest radii seen among added particles.
///
/// Collision search sizes its search radius from these. A radius equal
/// to the current maximum still cascades: the old maximum moves to second
/// place and the new value takes first.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MaxRadius {
    largest: [f64; 2],
}

impl MaxRadius {
    /// Fold a new radius into the tracker.
    pub fn observe(&mut self, r: f64) {
        if r >= self.largest[0] {
            self.largest[1] = self.largest[0];
            self.largest[0] = r;
        } else if r >= self.largest[1] {
            self.largest[1] = r;
        }
    }

    /// Largest radius seen.
    pub fn first(&self) -> f64 {
        self.largest[0]
    }

    /// Second-largest radius seen.
    pub fn second(&self) -> f64 {
        self.largest[1]
    }

    /// Both values, largest first.
    pub fn as_array(&self) -> [f64; 2] {
        self.largest
    }
}

/// Smallest mass seen among added particles (GRAPE gravity only).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MinimumMass(Option<f64>);

impl MinimumMass {
    /// Fold a new mass into the tracker.
    pub fn observe(&mut self, m: f64) {
        match self.0 {
            Some(current) if m >= current => {}
            _ => self.0 = Some(m),
        }
    }

    /// Smallest mass seen, if any particle was observed.
    pub fn get(&self) -> Option<f64> {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn radius_cascades_in_order() {
        let mut t = MaxRadius::default();
        t.observe(1.0);
        t.observe(3.0);
        t.observe(2.0);
        assert_eq!(t.as_array(), [3.0, 2.0]);
        t.observe(0.5);
        assert_eq!(t.as_array(), [3.0, 2.0]);
    }

    #[test]
    fn equal_radius_cascades_old_max() {
        let mut t = MaxRadius::default();
        t.observe(2.0);
        t.observe(1.0);
        t.observe(2.0);
        assert_eq!(t.first(), 2.0);
        assert_eq!(t.second(), 2.0);
    }

    #[test]
    fn minimum_mass_tracks_smallest() {
        let mut m = MinimumMass::default();
        assert_eq!(m.get(), None);
        m.observe(3.0);
        m.observe(5.0);
        m.observe(1.5);
        assert_eq!(m.get(), Some(1.5));
    }
}
