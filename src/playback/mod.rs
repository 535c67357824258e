mod snapshots;


pub use snapshots::{AssignmentSnapshot, CentersSnapshot, ShapeError, SnapshotSequence};

/// Where the cursor lands when a snapshot sequence is installed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorPlacement {
    /// Step semantics: show the first iteration.
    First,
    /// Convergence semantics: jump straight to the terminal iteration.
    Last,
}

/// Owns the buffered per-iteration snapshots and the step cursor.
///
/// The cursor is `None` until a run produces snapshots ("no run started"),
/// then an index into the sequence. It only ever moves forward between a
/// run's start and its invalidation, and never past the terminal iteration.
#[derive(Debug, Default)]
pub struct PlaybackController {
    snapshots: Option<SnapshotSequence>,
    cursor: Option<usize>,
}

impl PlaybackController {
    pub fn new() -> Self {
        Self::default()
    }

    /// True when no run has produced snapshots yet.
    pub fn is_idle(&self) -> bool {
        self.snapshots.is_none()
    }

    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.snapshots.as_ref().map_or(0, SnapshotSequence::len)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Centers and assignments at the cursor, if a run is being played back.
    pub fn current(&self) -> Option<(&CentersSnapshot, &AssignmentSnapshot)> {
        let snapshots = self.snapshots.as_ref()?;
        snapshots.get(self.cursor?)
    }

    /// Adopt a freshly computed sequence and place the cursor.
    pub fn install(&mut self, snapshots: SnapshotSequence, placement: CursorPlacement) {
        let terminal = snapshots.len().saturating_sub(1);
        self.cursor = Some(match placement {
            CursorPlacement::First => 0,
            CursorPlacement::Last => terminal,
        });
        self.snapshots = Some(snapshots);
    }

    /// Move one iteration forward. No-op at the terminal iteration or when
    /// idle. Returns whether the cursor moved.
    pub fn advance(&mut self) -> bool {
        match (self.cursor, self.len()) {
            (Some(at), len) if at + 1 < len => {
                self.cursor = Some(at + 1);
                true
            }
            _ => false,
        }
    }

    /// Jump to the terminal iteration. No-op when idle or already there.
    pub fn jump_to_end(&mut self) -> bool {
        match (self.cursor, self.len()) {
            (Some(at), len) if at + 1 < len => {
                self.cursor = Some(len - 1);
                true
            }
            _ => false,
        }
    }

    /// Drop the sequence and return the cursor to "no run started".
    pub fn clear(&mut self) {
        self.snapshots = None;
        self.cursor = None;
    }
}
