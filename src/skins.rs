//! Cosmetic target skins
//!
//! Skins are presentation hints: the renderer picks sprites and destroy
//! chimes from them, the physics never reads them. Assignment draws from
//! the session's seeded RNG, so two sessions with the same seed paint the
//! grid identically and physics tests stay deterministic either way.

use rand::Rng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

/// Cosmetic variant painted on a target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TargetSkin {
    Fox,
    Owl,
    Toad,
    Boar,
}

impl TargetSkin {
    pub const ALL: [TargetSkin; 4] = [
        TargetSkin::Fox,
        TargetSkin::Owl,
        TargetSkin::Toad,
        TargetSkin::Boar,
    ];

    /// Draw a skin from the session RNG
    pub fn roll(rng: &mut Pcg32) -> Self {
        Self::ALL[rng.random_range(0..Self::ALL.len())]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TargetSkin::Fox => "fox",
            TargetSkin::Owl => "owl",
            TargetSkin::Toad => "toad",
            TargetSkin::Boar => "boar",
        }
    }

    /// Sprite sheet key for the renderer
    pub fn sprite(&self) -> &'static str {
        match self {
            TargetSkin::Fox => "fox.png",
            TargetSkin::Owl => "owl.png",
            TargetSkin::Toad => "toad.png",
            TargetSkin::Boar => "boar.png",
        }
    }
}
