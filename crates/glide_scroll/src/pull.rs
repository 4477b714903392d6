//! Rubber-band pull tracking
//!
//! While a drag pushes the content past a bound, the raw excess is run through
//! a [`RubberBand`] so the content follows with increasing resistance.
//!
//! The band is asymmetric: resistance only applies while the over-pull grows.
//! Dragging back toward the bound moves the content by the full delta, then
//! the raw excess is re-derived through the inverse curve so a later push
//! continues smoothly from where the content is drawn.

use glide_animation::RubberBand;

/// Per-axis rubber-band state; exists only while content is held past a bound
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PullState {
    /// Bound the content is pulled away from
    bound: f64,
    /// Unresisted distance past the bound (signed)
    raw: f64,
    /// Displayed distance past the bound (signed, never zero)
    pulled: f64,
}

impl PullState {
    /// Start a pull from a raw excess past `bound`
    pub fn from_excess(bound: f64, excess: f64, band: &RubberBand) -> Self {
        Self {
            bound,
            raw: excess,
            pulled: band.pulled(excess),
        }
    }

    /// Resume a pull from content already displayed `displaced` past `bound`
    pub fn from_displacement(bound: f64, displaced: f64, band: &RubberBand) -> Self {
        Self {
            bound,
            raw: displaced.signum() * band.inverse(displaced.abs()),
            pulled: displaced,
        }
    }

    pub fn bound(&self) -> f64 {
        self.bound
    }

    /// Displayed distance past the bound
    pub fn pulled(&self) -> f64 {
        self.pulled
    }

    pub fn raw_excess(&self) -> f64 {
        self.raw
    }

    /// Offset the content is drawn at
    pub fn offset(&self) -> f64 {
        self.bound + self.pulled
    }

    /// Apply a drag delta. Returns `Err(remainder)` when the drag brings the
    /// content back inside: `remainder` is how far past the bound, toward the
    /// inside, the content ends up.
    pub fn apply(&mut self, delta: f64, band: &RubberBand) -> Result<(), f64> {
        let direction = self.pulled.signum();

        if delta * direction > 0.0 {
            self.raw += delta;
            self.pulled = band.pulled(self.raw);
            return Ok(());
        }

        let next = self.pulled + delta;
        if next * direction <= 0.0 {
            return Err(next);
        }
        self.pulled = next;
        self.raw = direction * band.inverse(next.abs());
        Ok(())
    }
}

/// Result of feeding one drag delta through the tracker
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragStep {
    pub offset: f64,
    pub pull: Option<PullState>,
}

/// Turns drag deltas into offsets on one axis, entering and leaving pulls
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PullTracker {
    /// Resistance constant `k`
    pub resistance: f64,
}

impl PullTracker {
    pub fn new(resistance: f64) -> Self {
        Self { resistance }
    }

    /// Rubber band for an axis whose visible extent is `extent`
    pub fn band(&self, extent: f64) -> RubberBand {
        RubberBand::new(self.resistance, extent)
    }

    /// Feed a drag `delta` on one axis
    ///
    /// `offset` is the current (possibly out-of-bounds) offset, `pull` the
    /// active pull if any, and `allow_pull` whether this axis may rubber band.
    pub fn step(
        &self,
        offset: f64,
        (min, max): (f64, f64),
        extent: f64,
        pull: Option<PullState>,
        delta: f64,
        allow_pull: bool,
    ) -> DragStep {
        let band = self.band(extent);

        let mut pull = pull;
        if pull.is_none() {
            let clamped = offset.clamp(min, max);
            if clamped != offset && allow_pull {
                pull = Some(PullState::from_displacement(clamped, offset - clamped, &band));
            }
        }

        let base = match pull {
            Some(mut state) => match state.apply(delta, &band) {
                Ok(()) => {
                    return DragStep {
                        offset: state.offset(),
                        pull: Some(state),
                    }
                }
                Err(remainder) => {
                    tracing::trace!("pull released inside bound at {:.2}", state.bound());
                    return self.free_step(state.bound(), (min, max), &band, 0.0, remainder, allow_pull);
                }
            },
            None => offset.clamp(min, max),
        };

        self.free_step(base, (min, max), &band, delta, 0.0, allow_pull)
    }

    fn free_step(
        &self,
        base: f64,
        (min, max): (f64, f64),
        band: &RubberBand,
        delta: f64,
        carry: f64,
        allow_pull: bool,
    ) -> DragStep {
        let target = base + delta + carry;
        let clamped = target.clamp(min, max);

        if clamped == target || !allow_pull {
            return DragStep {
                offset: clamped,
                pull: None,
            };
        }

        let state = PullState::from_excess(clamped, target - clamped, band);
        tracing::trace!(
            "pull started at bound {:.1}: excess {:.2} -> pulled {:.2}",
            clamped,
            state.raw_excess(),
            state.pulled()
        );
        DragStep {
            offset: state.offset(),
            pull: Some(state),
        }
    }
}
