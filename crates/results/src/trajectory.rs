//! Piecewise-constant sample paths.

use chainsim_model::StateCode;

use crate::error::ResultError;

/// A jump point: from `time` onward the chain is in `state`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Knot {
    /// Simulation time of the jump.
    pub time: f64,
    /// State entered at `time`.
    pub state: StateCode,
}

impl Knot {
    /// Creates a knot.
    pub fn new(time: f64, state: StateCode) -> Self {
        Self { time, state }
    }
}

/// One simulated run over a closed window `[time_start, time_end]`.
///
/// The knots describe a right-continuous step function: the state of a
/// knot holds until the next knot's time. The first knot sits at the
/// window start, the last at the window end; the last knot repeats the
/// state before it so the final holding period is closed.
#[derive(Debug, Clone, PartialEq)]
pub struct Trajectory {
    knots: Vec<Knot>,
    failure_time: Option<f64>,
}

impl Trajectory {
    /// Builds a trajectory from its knots.
    ///
    /// # Errors
    ///
    /// Returns [`ResultError::InvalidTrajectory`] if there are fewer than two
    /// knots, any time is non-finite, times decrease, the window is empty,
    /// the last knot does not repeat the state before it, or
    /// `failure_time` is not the time of one of the knots.
    pub fn new(knots: Vec<Knot>, failure_time: Option<f64>) -> Result<Self, ResultError> {
        if knots.len() < 2 {
            return Err(ResultError::InvalidTrajectory {
                reason: format!("need at least 2 knots, got {}", knots.len()),
            });
        }
        if let Some(k) = knots.iter().find(|k| !k.time.is_finite()) {
            return Err(ResultError::InvalidTrajectory {
                reason: format!("knot time {} is not finite", k.time),
            });
        }
        if let Some(w) = knots.windows(2).find(|w| w[1].time < w[0].time) {
            return Err(ResultError::InvalidTrajectory {
                reason: format!("knot times decrease: {} then {}", w[0].time, w[1].time),
            });
        }
        let (start, end) = (knots[0].time, knots[knots.len() - 1].time);
        if start >= end {
            return Err(ResultError::InvalidTrajectory {
                reason: format!("empty window [{start}, {end}]"),
            });
        }
        let n = knots.len();
        if knots[n - 1].state != knots[n - 2].state {
            return Err(ResultError::InvalidTrajectory {
                reason: format!(
                    "final knot changes state from {} to {}",
                    knots[n - 2].state,
                    knots[n - 1].state
                ),
            });
        }
        if let Some(t) = failure_time {
            if !(start..=end).contains(&t) {
                return Err(ResultError::InvalidTrajectory {
                    reason: format!("failure time {t} outside [{start}, {end}]"),
                });
            }
            if !knots.iter().any(|k| k.time == t) {
                return Err(ResultError::InvalidTrajectory {
                    reason: format!("failure time {t} is not a knot time"),
                });
            }
        }
        Ok(Self {
            knots,
            failure_time,
        })
    }

    /// Returns the knots in time order.
    pub fn knots(&self) -> &[Knot] {
        &self.knots
    }

    /// Returns the number of knots.
    pub fn len(&self) -> usize {
        self.knots.len()
    }

    /// Always `false`: a valid trajectory has at least two knots.
    pub fn is_empty(&self) -> bool {
        self.knots.is_empty()
    }

    /// Time of the first knot.
    pub fn time_start(&self) -> f64 {
        self.knots[0].time
    }

    /// Time of the last knot.
    pub fn time_end(&self) -> f64 {
        self.knots[self.knots.len() - 1].time
    }

    /// `(time_start, time_end)`.
    pub fn window(&self) -> (f64, f64) {
        (self.time_start(), self.time_end())
    }

    /// State at the window start.
    pub fn initial_state(&self) -> StateCode {
        self.knots[0].state
    }

    /// State held when the window closes.
    pub fn final_state(&self) -> StateCode {
        self.knots[self.knots.len() - 1].state
    }

    /// First time the run entered a failure state, if it did.
    pub fn failure_time(&self) -> Option<f64> {
        self.failure_time
    }

    /// Number of jumps between distinct knots, excluding the closing knot.
    pub fn n_jumps(&self) -> usize {
        self.knots.len() - 2
    }

    /// State in effect at time `t`.
    ///
    /// Uses previous-knot-wins lookup: the state of the last knot at or
    /// before `t`. Times before the first knot clamp to the first state,
    /// times at or after the last knot to the last state.
    pub fn state_at(&self, t: f64) -> StateCode {
        let idx = self.knots.partition_point(|k| k.time <= t);
        if idx == 0 {
            self.knots[0].state
        } else {
            self.knots[idx - 1].state
        }
    }

    /// Samples the step function at every point of an ascending `grid`.
    pub fn resample(&self, grid: &[f64]) -> Vec<StateCode> {
        let mut out = Vec::with_capacity(grid.len());
        let mut seen = 0;
        for &t in grid {
            while seen < self.knots.len() && self.knots[seen].time <= t {
                seen += 1;
            }
            let knot = if seen == 0 {
                &self.knots[0]
            } else {
                &self.knots[seen - 1]
            };
            out.push(knot.state);
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn s(c: u32) -> StateCode {
        StateCode::new(c)
    }

    fn sample() -> Trajectory {
        Trajectory::new(
            vec![
                Knot::new(0.0, s(0)),
                Knot::new(1.0, s(1)),
                Knot::new(2.5, s(2)),
                Knot::new(4.0, s(2)),
            ],
            Some(2.5),
        )
        .unwrap()
    }

    #[test]
    fn accessors() {
        let t = sample();
        assert_eq!(t.window(), (0.0, 4.0));
        assert_eq!(t.initial_state(), s(0));
        assert_eq!(t.final_state(), s(2));
        assert_eq!(t.failure_time(), Some(2.5));
        assert_eq!(t.n_jumps(), 2);
        assert_eq!(t.len(), 4);
    }

    #[test]
    fn state_at_is_right_continuous() {
        let t = sample();
        assert_eq!(t.state_at(-1.0), s(0));
        assert_eq!(t.state_at(0.0), s(0));
        assert_eq!(t.state_at(0.999), s(0));
        assert_eq!(t.state_at(1.0), s(1));
        assert_eq!(t.state_at(2.5), s(2));
        assert_eq!(t.state_at(10.0), s(2));
    }

    #[test]
    fn resample_matches_state_at() {
        let t = sample();
        let grid = [-0.5, 0.0, 0.5, 1.0, 2.0, 2.5, 3.0, 4.0, 5.0];
        let walked = t.resample(&grid);
        let looked_up: Vec<StateCode> = grid.iter().map(|&g| t.state_at(g)).collect();
        assert_eq!(walked, looked_up);
    }

    #[test]
    fn rejects_short() {
        let err = Trajectory::new(vec![Knot::new(0.0, s(0))], None).unwrap_err();
        assert!(matches!(err, ResultError::InvalidTrajectory { .. }));
    }

    #[test]
    fn rejects_decreasing_times() {
        let knots = vec![Knot::new(0.0, s(0)), Knot::new(2.0, s(1)), Knot::new(1.0, s(1))];
        assert!(Trajectory::new(knots, None).is_err());
    }

    #[test]
    fn rejects_state_change_at_window_end() {
        let knots = vec![Knot::new(0.0, s(0)), Knot::new(10.0, s(1))];
        let err = Trajectory::new(knots, None).unwrap_err();
        assert_eq!(
            err,
            ResultError::InvalidTrajectory {
                reason: "final knot changes state from 0 to 1".into()
            }
        );
    }

    #[test]
    fn rejects_failure_between_knots() {
        let knots = vec![Knot::new(0.0, s(0)), Knot::new(2.0, s(1)), Knot::new(4.0, s(1))];
        assert!(Trajectory::new(knots.clone(), Some(3.0)).is_err());
        assert!(Trajectory::new(knots, Some(2.0)).is_ok());
    }

    #[test]
    fn rejects_empty_window() {
        let knots = vec![Knot::new(1.0, s(0)), Knot::new(1.0, s(0))];
        assert!(Trajectory::new(knots, None).is_err());
    }

    #[test]
    fn rejects_failure_outside_window() {
        let knots = vec![Knot::new(0.0, s(0)), Knot::new(1.0, s(0))];
        assert!(Trajectory::new(knots, Some(1.5)).is_err());
    }

    #[test]
    fn rejects_non_finite() {
        let knots = vec![Knot::new(0.0, s(0)), Knot::new(f64::INFINITY, s(0))];
        assert!(Trajectory::new(knots, None).is_err());
    }
}
