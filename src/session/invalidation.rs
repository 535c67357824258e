//! Rule table clearing derived state after configuration changes.
//!
//! Every event that can invalidate seeds, snapshots or the in-flight
//! request context routes through [`Session::apply`], so the effects are
//! applied synchronously with the triggering event and the click
//! subscription is re-synced on every exit path.

use tracing::debug;

use super::Session;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Invalidation {
    KChanged,
    InitMethodChanged,
    DatasetReplaced,
    Reset,
    /// A computation response was accepted; the seeds it consumed are not
    /// reusable for the next run.
    RunStarted,
}

impl Session {
    pub(crate) fn apply(&mut self, event: Invalidation) {
        debug!(?event, "applying invalidation");
        match event {
            Invalidation::KChanged | Invalidation::InitMethodChanged => {
                self.selector.clear();
            }
            Invalidation::DatasetReplaced | Invalidation::Reset => {
                self.selector.clear();
                self.playback.clear();
                // A response issued against the previous dataset or run must
                // not be applied when it eventually arrives.
                self.epoch += 1;
            }
            Invalidation::RunStarted => {
                self.selector.clear();
            }
        }
        self.sync_selector();
    }

    /// Attach or detach the click subscription to match the activity
    /// condition: manual initialization and no run started.
    fn sync_selector(&mut self) {
        if self.manual_selection_armed() {
            self.selector.activate();
        } else {
            self.selector.deactivate();
        }
    }
}
