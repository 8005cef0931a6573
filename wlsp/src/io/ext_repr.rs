use serde::{Deserialize, Serialize};

/// Weighted strip packing instance
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtInstance {
    /// The name of the instance
    #[serde(default)]
    pub name: String,
    /// Width of the strip
    pub recipient_length: f64,
    /// Set of rectangles to be assigned to levels
    pub rects: Vec<ExtRect>,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct ExtRect {
    pub length: f64,
    pub height: f64,
    pub weight: f64,
}

/// Weighted strip packing solution
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtSolution {
    /// Weighted sum of the base heights of all items
    pub cost: f64,
    /// Summed height of all levels
    pub total_height: f64,
    /// Whether every level respects the recipient length
    pub feasible: bool,
    /// Levels, bottom one first
    pub levels: Vec<ExtLevel>,
    /// The time it took to generate the solution in seconds
    pub run_time_sec: u64,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtLevel {
    /// Summed height of all levels below this one
    pub base_height: f64,
    /// Height of the tallest item
    pub height: f64,
    /// Summed length of the items
    pub used_length: f64,
    /// Ids of the items on this level
    pub items: Vec<usize>,
}
