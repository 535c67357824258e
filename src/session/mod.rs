mod invalidation;


use std::cell::Cell;
use std::rc::Rc;

use thiserror::Error;
use tracing::{debug, warn};

use crate::api::{ApiError, InitMethod, KMeansClient, KMeansRequest, KMeansResponse};
use crate::canvas::{PixelPoint, Point, Viewport};
use crate::palette::{cluster_colors, Hsl};
use crate::playback::{CursorPlacement, PlaybackController, SnapshotSequence};
use crate::seeds::{SeedSelector, SharedK};

pub(crate) use invalidation::Invalidation;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("k must be at least 1 (got {0})")]
    InvalidK(usize),

    #[error("manual initialization needs at least {needed} seeds (have {have})")]
    NotEnoughSeeds { needed: usize, have: usize },

    #[error("a computation request is already in flight")]
    RunInFlight,

    #[error(transparent)]
    Api(#[from] ApiError),
}

/// Centers, assignments and derived colors for the iteration under the
/// cursor, ready for the chart layer.
#[derive(Debug, Clone, Copy)]
pub struct Frame<'a> {
    pub centers: &'a [Point],
    pub assignments: &'a [usize],
    pub colors: &'a [Hsl],
}

/// One interactive clustering session: configuration, the fetched dataset,
/// the buffered run and its cursor, and manual seed capture.
///
/// All mutation happens in response to discrete events (setter calls,
/// pointer clicks, response arrival); configuration changes route through
/// the invalidation table so no stale combination of k, seeds and colors is
/// ever observable. At most one computation request is in flight at a time.
pub struct Session {
    client: KMeansClient,
    k: SharedK,
    init_method: InitMethod,
    dataset: Vec<Point>,
    playback: PlaybackController,
    selector: SeedSelector,
    colors: Vec<Hsl>,
    /// Bumped by reset and dataset replacement; a response whose issue-time
    /// epoch no longer matches is discarded instead of applied.
    epoch: u64,
    run_in_flight: bool,
}

impl Session {
    pub fn new(endpoint: impl Into<String>) -> Self {
        let k: SharedK = Rc::new(Cell::new(1));
        Self {
            client: KMeansClient::new(endpoint),
            k: Rc::clone(&k),
            init_method: InitMethod::Random,
            dataset: Vec::new(),
            playback: PlaybackController::new(),
            selector: SeedSelector::new(k),
            colors: Vec::new(),
            epoch: 0,
            run_in_flight: false,
        }
    }

    /// Construct a session and fetch the initial dataset, like the app does
    /// on startup.
    pub async fn connect(endpoint: impl Into<String>) -> Result<Self, SessionError> {
        let mut session = Self::new(endpoint);
        session.generate_dataset().await?;
        Ok(session)
    }

    // --- configuration -----------------------------------------------------

    pub fn k(&self) -> usize {
        self.k.get()
    }

    pub fn set_k(&mut self, k: usize) {
        if self.k.get() == k {
            return;
        }
        self.k.set(k);
        self.apply(Invalidation::KChanged);
    }

    pub fn init_method(&self) -> InitMethod {
        self.init_method
    }

    pub fn set_init_method(&mut self, method: InitMethod) {
        if self.init_method == method {
            return;
        }
        self.init_method = method;
        self.apply(Invalidation::InitMethodChanged);
    }

    /// Discard the buffered run and any picked seeds. The dataset is kept.
    pub fn reset(&mut self) {
        self.apply(Invalidation::Reset);
    }

    // --- dataset -----------------------------------------------------------

    pub fn dataset(&self) -> &[Point] {
        &self.dataset
    }

    /// Replace the dataset with a freshly generated one from `GET /data`.
    /// On failure the previous dataset and run are left untouched.
    pub async fn generate_dataset(&mut self) -> Result<(), SessionError> {
        let dataset = self.client.fetch_data().await?;
        self.adopt_dataset(dataset);
        Ok(())
    }

    pub(crate) fn adopt_dataset(&mut self, dataset: Vec<Point>) {
        self.dataset = dataset;
        self.apply(Invalidation::DatasetReplaced);
    }

    // --- playback ----------------------------------------------------------

    pub fn cursor(&self) -> Option<usize> {
        self.playback.cursor()
    }

    pub fn iteration_count(&self) -> usize {
        self.playback.len()
    }

    /// 1-based (current, total) step position for display, once a run has
    /// started.
    pub fn step_label(&self) -> Option<(usize, usize)> {
        let at = self.playback.cursor()?;
        Some((at + 1, self.playback.len()))
    }

    pub fn current_frame(&self) -> Option<Frame<'_>> {
        let (centers, assignments) = self.playback.current()?;
        Some(Frame {
            centers,
            assignments,
            colors: &self.colors,
        })
    }

    /// Marker color per data point for the iteration under the cursor.
    pub fn point_colors(&self) -> Option<Vec<Hsl>> {
        let frame = self.current_frame()?;
        Some(
            frame
                .assignments
                .iter()
                .map(|&cluster| frame.colors[cluster])
                .collect(),
        )
    }

    /// Advance one iteration; when no run has started yet, issue the
    /// computation request and land on the first iteration.
    pub async fn step(&mut self) -> Result<(), SessionError> {
        if self.playback.is_idle() {
            self.begin_run(CursorPlacement::First).await
        } else {
            self.playback.advance();
            Ok(())
        }
    }

    /// Jump to the terminal iteration; when no run has started yet, issue
    /// the computation request and land on the terminal iteration.
    pub async fn run_to_convergence(&mut self) -> Result<(), SessionError> {
        if self.playback.is_idle() {
            self.begin_run(CursorPlacement::Last).await
        } else {
            self.playback.jump_to_end();
            Ok(())
        }
    }

    // --- seeds -------------------------------------------------------------

    pub fn seeds(&self) -> &[Point] {
        self.selector.seeds()
    }

    /// Route a pointer click from the chart. Registers a seed only while
    /// manual selection is armed (manual init, no run started); all other
    /// clicks are ignored.
    pub fn on_chart_click(&mut self, pixel: PixelPoint, viewport: Viewport) -> Option<Point> {
        self.selector.on_click(pixel, viewport)
    }

    // --- run issue path ----------------------------------------------------

    async fn begin_run(&mut self, placement: CursorPlacement) -> Result<(), SessionError> {
        let request = self.build_request()?;
        if self.run_in_flight {
            return Err(SessionError::RunInFlight);
        }

        self.run_in_flight = true;
        let issued_epoch = self.epoch;
        let result = self.client.run_kmeans(&request).await;
        self.run_in_flight = false;

        match result {
            Ok(response) => self.complete_run(issued_epoch, request.k, response, placement),
            Err(error) => {
                warn!(%error, "computation request failed; run not started");
                Err(error.into())
            }
        }
    }

    /// Validate the configuration and assemble the request body. Rejected
    /// configurations never reach the network.
    pub(crate) fn build_request(&self) -> Result<KMeansRequest, SessionError> {
        let k = self.k.get();
        if k < 1 {
            return Err(SessionError::InvalidK(k));
        }
        if self.init_method == InitMethod::Manual && self.selector.len() < k {
            return Err(SessionError::NotEnoughSeeds {
                needed: k,
                have: self.selector.len(),
            });
        }

        Ok(KMeansRequest {
            k,
            init_method: self.init_method,
            data: self.dataset.clone(),
            // Invalidation keeps this empty outside manual mode.
            selected_points: self.selector.seeds().to_vec(),
        })
    }

    /// Apply a computation response, unless the context it was issued under
    /// has since been invalidated, in which case it is discarded.
    pub(crate) fn complete_run(
        &mut self,
        issued_epoch: u64,
        k: usize,
        response: KMeansResponse,
        placement: CursorPlacement,
    ) -> Result<(), SessionError> {
        if issued_epoch != self.epoch {
            debug!(issued_epoch, current_epoch = self.epoch, "discarding stale computation response");
            return Ok(());
        }

        let snapshots =
            SnapshotSequence::from_run(response.centers, response.assignments, self.dataset.len(), k)
                .map_err(|error| ApiError::MalformedResponse(error.to_string()))?;

        self.playback.install(snapshots, placement);
        self.colors = cluster_colors(k);
        self.apply(Invalidation::RunStarted);
        Ok(())
    }

    fn manual_selection_armed(&self) -> bool {
        self.init_method == InitMethod::Manual && self.playback.is_idle()
    }
}
