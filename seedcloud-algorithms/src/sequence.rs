//! Sine-based seeded sequence

/// Deterministic pseudo-random sequence of values in `[0, 1)`.
///
/// Each draw takes the fractional part of `sin(counter) * 10000` and then
/// increments the counter, which starts at the constructor seed. The output is
/// bit-stable for a given seed on IEEE-754 double precision `sin`, which is all
/// the layout needs. It is not suitable for anything security related.
///
/// The type is deliberately not `Clone`: every generation pass builds its own
/// instance so draws are never shared between passes.
#[derive(Debug)]
pub struct SeededSequence {
    counter: f64,
}

impl SeededSequence {
    pub fn new(seed: u32) -> Self {
        Self {
            counter: f64::from(seed),
        }
    }

    /// Draw the next value in `[0, 1)`
    pub fn next_value(&mut self) -> f64 {
        let x = self.counter.sin() * 10000.0;
        self.counter += 1.0;
        let fract = x - x.floor();
        // x - floor(x) can round up to exactly 1.0 for tiny negative x
        if fract >= 1.0 {
            0.0
        } else {
            fract
        }
    }

    /// Current counter, i.e. the argument of the next `sin`
    pub fn counter(&self) -> f64 {
        self.counter
    }
}

impl Iterator for SeededSequence {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        Some(self.next_value())
    }
}
