//! Frame-driven pulse clock.
//!
//! The cluster map modulates node size and opacity with a shared oscillator
//! derived from elapsed frames. The phase accumulator wraps modulo TAU so the
//! value never grows without bound, keeping sine precision stable over
//! long-running sessions.

use std::f32::consts::TAU;

/// Accumulates a per-frame phase and derives per-particle pulse factors.
#[derive(Debug, Clone)]
pub struct PulseClock {
    phase: f32,
}

impl PulseClock {
    /// Phase advance per frame (the source stepped its timer by 0.01).
    pub const STEP: f32 = 0.01;

    pub fn new() -> Self {
        Self { phase: 0.0 }
    }

    /// Advance one frame. Called once per tick before rendering.
    pub fn advance(&mut self) {
        self.phase += Self::STEP;
        if self.phase >= TAU {
            self.phase -= TAU;
        }
    }

    /// Current wrapped phase in [0, TAU).
    pub fn phase(&self) -> f32 {
        self.phase
    }

    /// Oscillating pulse factor for the particle at `index`, in [0.4, 1.0].
    /// `sin(phase * 2 + index) * 0.3 + 0.7`, offset per particle so the
    /// nodes breathe out of sync.
    pub fn pulse(&self, index: usize) -> f32 {
        (self.phase * 2.0 + index as f32).sin() * 0.3 + 0.7
    }
}

impl Default for PulseClock {
    fn default() -> Self {
        Self::new()
    }
}
