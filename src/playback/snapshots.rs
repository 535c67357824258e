use thiserror::Error;

use crate::canvas::Point;

/// Cluster centers after one algorithm iteration, length k.
pub type CentersSnapshot = Vec<Point>;

/// Cluster index per data point after the same iteration, parallel to the
/// dataset, each value in [0, k).
pub type AssignmentSnapshot = Vec<usize>;

#[derive(Debug, Error)]
pub enum ShapeError {
    #[error("response contains no iterations")]
    Empty,

    #[error("centers ({centers}) and assignments ({assignments}) differ in iteration count")]
    IterationMismatch { centers: usize, assignments: usize },

    #[error("iteration {iteration}: {got} assignments for {expected} data points")]
    AssignmentLength {
        iteration: usize,
        got: usize,
        expected: usize,
    },

    #[error("iteration {iteration}: cluster index {index} out of range for k={k}")]
    ClusterIndex {
        iteration: usize,
        index: usize,
        k: usize,
    },
}

/// Index-aligned per-iteration snapshots from one computation run.
///
/// Element i of `centers` and element i of `assignments` describe the same
/// iteration; the constructors reject any response where the two halves
/// disagree, so a constructed sequence always holds equal-length halves.
#[derive(Debug, Clone)]
pub struct SnapshotSequence {
    centers: Vec<CentersSnapshot>,
    assignments: Vec<AssignmentSnapshot>,
}

impl SnapshotSequence {
    /// Build a sequence, checking only that the two halves are index-aligned.
    pub fn new(
        centers: Vec<CentersSnapshot>,
        assignments: Vec<AssignmentSnapshot>,
    ) -> Result<Self, ShapeError> {
        if centers.len() != assignments.len() {
            return Err(ShapeError::IterationMismatch {
                centers: centers.len(),
                assignments: assignments.len(),
            });
        }
        Ok(Self {
            centers,
            assignments,
        })
    }

    /// Build a sequence from a service response, additionally checking each
    /// iteration against the dataset size and cluster count it was computed
    /// for.
    pub fn from_run(
        centers: Vec<CentersSnapshot>,
        assignments: Vec<AssignmentSnapshot>,
        dataset_len: usize,
        k: usize,
    ) -> Result<Self, ShapeError> {
        let sequence = Self::new(centers, assignments)?;
        if sequence.is_empty() {
            return Err(ShapeError::Empty);
        }

        for (iteration, assignment) in sequence.assignments.iter().enumerate() {
            if assignment.len() != dataset_len {
                return Err(ShapeError::AssignmentLength {
                    iteration,
                    got: assignment.len(),
                    expected: dataset_len,
                });
            }
            if let Some(&index) = assignment.iter().find(|&&index| index >= k) {
                return Err(ShapeError::ClusterIndex {
                    iteration,
                    index,
                    k,
                });
            }
        }

        Ok(sequence)
    }

    /// Number of iterations the algorithm took.
    pub fn len(&self) -> usize {
        self.centers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.centers.is_empty()
    }

    pub fn get(&self, iteration: usize) -> Option<(&CentersSnapshot, &AssignmentSnapshot)> {
        Some((
            self.centers.get(iteration)?,
            self.assignments.get(iteration)?,
        ))
    }
}
