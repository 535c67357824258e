// Public API exports
pub mod api;
pub mod canvas;
pub mod palette;
pub mod playback;
pub mod seeds;
pub mod session;

// Re-export main types for convenience
pub use api::{ApiError, InitMethod, KMeansClient, KMeansRequest, KMeansResponse, DEFAULT_ENDPOINT};

pub use canvas::{to_data, AxisRange, PixelPoint, Point, Viewport, X_RANGE, Y_RANGE};

pub use palette::{cluster_colors, Hsl};

pub use playback::{
    AssignmentSnapshot, CentersSnapshot, CursorPlacement, PlaybackController, ShapeError,
    SnapshotSequence,
};

pub use seeds::{SeedSelector, SharedK};

pub use session::{Frame, Session, SessionError};
