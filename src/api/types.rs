// The computation service contract.
use serde::{Deserialize, Serialize};

use crate::canvas::Point;

/// How the algorithm picks its initial cluster centers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InitMethod {
    #[serde(rename = "random")]
    Random,
    #[serde(rename = "farthest")]
    FarthestFirst,
    #[serde(rename = "kmeans++")]
    KMeansPlusPlus,
    /// Seeds are supplied by the user clicking on the chart.
    #[serde(rename = "manual")]
    Manual,
}

#[derive(Debug, Serialize)]
pub struct KMeansRequest {
    pub k: usize,
    #[serde(rename = "initMethod")]
    pub init_method: InitMethod,
    pub data: Vec<Point>,
    /// User-picked seeds, in click order. Empty unless `init_method` is
    /// manual; order is significant, it fixes each seed's cluster index.
    #[serde(rename = "selectedPoints")]
    pub selected_points: Vec<Point>,
}

#[derive(Debug, Deserialize)]
pub struct KMeansResponse {
    /// Cluster centers per iteration, each of length k.
    pub centers: Vec<Vec<Point>>,
    /// Cluster index per data point per iteration, parallel to `centers`.
    pub assignments: Vec<Vec<usize>>,
}
