//! Sampling - Random draws for the demo and the waveform

use butter_domain::DemoSample;
use rand::Rng;

/// Draw the three independent samples one demo run needs
pub fn demo_sample<R: Rng + ?Sized>(rng: &mut R) -> DemoSample {
    DemoSample::new(rng.gen(), rng.gen(), rng.gen())
}

/// `count` noise samples in `[0, 1)`
pub fn noise<R: Rng + ?Sized>(rng: &mut R, count: usize) -> Vec<f64> {
    (0..count).map(|_| rng.gen::<f64>()).collect()
}
