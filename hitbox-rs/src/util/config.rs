use serde::{Deserialize, Serialize};

///Configuration of the random point sampling
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct SamplingConfig {
    ///Maximum number of candidates drawn from the bounding rectangle of a polygon
    ///before rejection sampling gives up
    pub max_polygon_attempts: usize,
}

impl Default for SamplingConfig {
    fn default() -> Self {
        Self {
            max_polygon_attempts: 10_000,
        }
    }
}
