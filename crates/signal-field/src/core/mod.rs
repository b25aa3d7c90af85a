pub mod clock;
pub mod rng;
