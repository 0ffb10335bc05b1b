//! Pre-built reading scenarios with known outcomes
//!
//! Every scenario runs on a quiet session (noise term zero, spoilage jitter
//! at its midpoint), so the expected score is exact.

use freshguard_core::{QualityVerdict, SimulationMode};

/// One profile/mode combination and what a single reading must score
pub struct Scenario {
    pub name: &'static str,
    pub profile: &'static str,
    pub mode: SimulationMode,
    pub expected_score: u32,
    pub expected_verdict: QualityVerdict,
}

impl Scenario {
    pub fn all() -> Vec<Self> {
        vec![
            Self::normal("fruit"),
            Self::normal("pasteurized-milk"),
            Self::normal("raw-meat"),
            Self::normal("eggs"),
            Self::normal("vegetables"),
            // alcohol 60 > 50 (3); ethylene 70 and temp 23 stay under
            Self {
                name: "ripening fruit",
                profile: "fruit",
                mode: SimulationMode::Spoilage,
                expected_score: 3,
                expected_verdict: QualityVerdict::Unsafe,
            },
            // temp 9 > 7 (3), ammonia 60 > 10 (1), turbidity 70 > 50 (2)
            Self {
                name: "sour milk",
                profile: "pasteurized-milk",
                mode: SimulationMode::Spoilage,
                expected_score: 6,
                expected_verdict: QualityVerdict::Unsafe,
            },
            // ammonia 62 > 25 (3), h2s 60 > 2 (3), temp 7 > 5 (2)
            Self {
                name: "rotting meat",
                profile: "raw-meat",
                mode: SimulationMode::Spoilage,
                expected_score: 8,
                expected_verdict: QualityVerdict::Unsafe,
            },
            // h2s 60 > 5 (3), ammonia 60 > 15 (2)
            Self {
                name: "bad eggs",
                profile: "eggs",
                mode: SimulationMode::Spoilage,
                expected_score: 5,
                expected_verdict: QualityVerdict::Unsafe,
            },
            // temp lands exactly on max 10 and voc 90 is under 200
            Self {
                name: "wilting vegetables",
                profile: "vegetables",
                mode: SimulationMode::Spoilage,
                expected_score: 0,
                expected_verdict: QualityVerdict::Safe,
            },
        ]
    }

    fn normal(profile: &'static str) -> Self {
        Self {
            name: "fresh",
            profile,
            mode: SimulationMode::Normal,
            expected_score: 0,
            expected_verdict: QualityVerdict::Safe,
        }
    }
}
