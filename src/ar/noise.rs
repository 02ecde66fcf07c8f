use rand::{rngs::StdRng, rngs::ThreadRng, Rng, SeedableRng};

/// A provider of the noise sequence `v(n)` driving the AR process.
pub trait NoiseSource {
    /// Overwrites every element of `buffer` with a new noise sample.
    fn fill(&mut self, buffer: &mut [f64]);
}

enum UniformRng {
    Thread(ThreadRng),
    Seeded(StdRng),
}

/// Uniformly distributed noise in `[0, 1)`.
pub struct UniformNoise {
    rng: UniformRng,
}

impl UniformNoise {
    /// Unseeded noise. Every run draws different samples.
    pub fn new() -> Self {
        UniformNoise {
            rng: UniformRng::Thread(rand::thread_rng()),
        }
    }

    /// Reproducible noise. The same seed always yields the same sequence.
    pub fn seeded(seed: u64) -> Self {
        UniformNoise {
            rng: UniformRng::Seeded(StdRng::seed_from_u64(seed)),
        }
    }
}

impl Default for UniformNoise {
    fn default() -> Self {
        UniformNoise::new()
    }
}

impl NoiseSource for UniformNoise {
    fn fill(&mut self, buffer: &mut [f64]) {
        // gen::<f64>() samples the half open interval [0, 1)
        match &mut self.rng {
            UniformRng::Thread(rng) => {
                for sample in buffer.iter_mut() {
                    *sample = rng.gen::<f64>();
                }
            }
            UniformRng::Seeded(rng) => {
                for sample in buffer.iter_mut() {
                    *sample = rng.gen::<f64>();
                }
            }
        }
    }
}

/// Replays a predefined noise sequence. Used to make runs deterministic.
pub struct FixedNoise<'a> {
    samples: &'a [f64],
}

impl<'a> FixedNoise<'a> {
    pub fn new(samples: &'a [f64]) -> Self {
        FixedNoise { samples }
    }
}

impl<'a> NoiseSource for FixedNoise<'a> {
    /// Copies the first `buffer.len()` predefined samples into `buffer`.
    ///
    /// # Panics
    ///
    /// Panics if fewer samples than requested were provided.
    fn fill(&mut self, buffer: &mut [f64]) {
        if self.samples.len() < buffer.len() {
            panic!(
                "Fixed noise has {} samples, {} requested.",
                self.samples.len(),
                buffer.len()
            )
        }
        buffer.copy_from_slice(&self.samples[..buffer.len()]);
    }
}
