//! Fixed-timestep accumulation.
//!
//! The event loop polls input at whatever rate the platform delivers
//! it, while the simulation advances in fixed increments. The
//! accumulator below converts irregular wall-clock elapsed time into
//! a whole number of pending ticks, carrying the remainder.

use std::time::Duration;

/// The fixed simulation timestep.
pub const TICK: Duration = Duration::from_millis(10);

pub struct FixedTimestep {
    step: Duration,
    acc: Duration,
}

impl FixedTimestep {
    pub fn new(step: Duration) -> FixedTimestep {
        FixedTimestep { step, acc: Duration::from_secs(0) }
    }

    /// Account for elapsed wall-clock time, returning the number of
    /// fixed ticks now due. The caller runs that many simulation
    /// ticks; leftover time is carried into the next call.
    pub fn advance(&mut self, elapsed: Duration) -> u32 {
        self.acc += elapsed;
        let mut ticks = 0;
        while self.acc >= self.step {
            self.acc -= self.step;
            ticks += 1;
        }
        ticks
    }
}

impl Default for FixedTimestep {
    fn default() -> FixedTimestep {
        FixedTimestep::new(TICK)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_steps_accumulate() {
        let mut ts = FixedTimestep::new(Duration::from_millis(10));
        assert_eq!(ts.advance(Duration::from_millis(4)), 0);
        assert_eq!(ts.advance(Duration::from_millis(4)), 0);
        assert_eq!(ts.advance(Duration::from_millis(4)), 1);
        assert_eq!(ts.advance(Duration::from_millis(8)), 1);
    }

    #[test]
    fn jitter_does_not_change_total_ticks() {
        let mut even = FixedTimestep::new(Duration::from_millis(10));
        let mut jittery = FixedTimestep::new(Duration::from_millis(10));

        let total: u32 = (0..10).map(|_| even.advance(Duration::from_millis(10))).sum();
        let jittered: u32 = [1, 25, 3, 17, 9, 11, 2, 24, 6, 2].iter()
            .map(|&ms| jittery.advance(Duration::from_millis(ms)))
            .sum();
        assert_eq!(total, 10);
        assert_eq!(jittered, 10);
    }

    #[test]
    fn long_stall_pays_out_many_ticks() {
        let mut ts = FixedTimestep::default();
        assert_eq!(ts.advance(Duration::from_millis(100)), 10);
    }
}
