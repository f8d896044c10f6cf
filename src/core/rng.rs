use rand::Rng;

/// Uniform random source consumed by the card's components.
///
/// Every `rand::Rng` is a `RandomSource`, so the browser shell hands in a
/// `StdRng` seeded from the platform while tests substitute scripted
/// sequences.
pub trait RandomSource {
    /// Next sample in `[0, 1)`.
    fn next_unit(&mut self) -> f32;

    /// Uniform sample in `[min, max]`.
    fn range(&mut self, min: f32, max: f32) -> f32 {
        let u = self.next_unit().clamp(0.0, 1.0);
        (min + (max - min) * u).clamp(min, max)
    }

    /// Uniform index in `0..len`. `len` must be non-zero.
    fn index(&mut self, len: usize) -> usize {
        let i = (self.next_unit() * len as f32) as usize;
        i.min(len - 1)
    }
}

impl<R: Rng> RandomSource for R {
    #[inline]
    fn next_unit(&mut self) -> f32 {
        self.gen::<f32>()
    }
}
