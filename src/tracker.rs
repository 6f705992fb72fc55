use crate::chart::{Chart, ChartCanvas};
use crate::client::Backend;
use crate::models::Product;
use crate::sort::{SortColumn, sort_descending};
use crate::view::{self, ChartSeries, TableRow, UrlLink};
use chrono::Local;
use serde::Serialize;
use std::collections::HashSet;
use std::sync::atomic::{AtomicUsize, Ordering};
use tokio::sync::Mutex;
use tracing::{debug, error, info};

pub const DUPLICATE_WARNING: &str = "Duplicate URL rejected!";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    /// Plain-text payload of a drag-and-drop, taken as-is.
    Dropped(String),
    /// Contents of the URL text field.
    Typed(String),
}

impl Submission {
    /// Dropped payloads are forwarded untouched unless empty. Typed text is
    /// trimmed and ignored when nothing is left.
    pub fn into_url(self) -> Option<String> {
        let url = match self {
            Submission::Dropped(text) => text,
            Submission::Typed(text) => text.trim().to_string(),
        };
        if url.is_empty() { None } else { Some(url) }
    }
}

/// Result of the local checks that run before any backend call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Ignore,
    Duplicate,
    Forward(String),
}

impl Verdict {
    pub fn status(&self) -> &'static str {
        match self {
            Verdict::Ignore => "ignored",
            Verdict::Duplicate => "duplicate",
            Verdict::Forward(_) => "new",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Added,
    Duplicate { message: &'static str },
    Ignored,
    Failed,
}

impl SubmitOutcome {
    pub fn status(&self) -> &'static str {
        match self {
            SubmitOutcome::Added => "added",
            SubmitOutcome::Duplicate { .. } => "duplicate",
            SubmitOutcome::Ignored => "ignored",
            SubmitOutcome::Failed => "failed",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResetOutcome {
    Cleared,
    Failed,
}

impl ResetOutcome {
    pub fn status(self) -> &'static str {
        match self {
            ResetOutcome::Cleared => "cleared",
            ResetOutcome::Failed => "failed",
        }
    }
}

/// What the page currently shows.
#[derive(Debug, Clone, Serialize)]
pub struct Screen {
    pub table: Vec<TableRow>,
    pub chart: Option<ChartSeries>,
    pub chart_id: Option<u64>,
    pub links: Vec<UrlLink>,
    pub loading: bool,
    pub synced_at: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Repaint {
    All,
    TableAndChart,
}

#[derive(Debug, Default)]
struct TrackerState {
    products: Vec<Product>,
    urls: HashSet<String>,
    table: Vec<TableRow>,
    links: Vec<UrlLink>,
    chart: Option<Chart>,
    synced_at: Option<String>,
}

impl TrackerState {
    fn repaint(&mut self, canvas: &ChartCanvas, scope: Repaint) {
        let view = view::render(&self.products);
        self.table = view.table;

        // The old chart has to go before its replacement is mounted.
        if let Some(old) = self.chart.take() {
            old.destroy();
        }
        if !view.chart.is_empty() {
            self.chart = Some(canvas.mount(view.chart));
        }

        if scope == Repaint::All {
            self.links = view.links;
        }
    }

    fn mark_synced(&mut self) {
        self.synced_at = Some(Local::now().format("%H:%M:%S").to_string());
    }
}

struct LoadingGuard<'a>(&'a AtomicUsize);

impl<'a> LoadingGuard<'a> {
    fn begin(counter: &'a AtomicUsize) -> Self {
        counter.fetch_add(1, Ordering::SeqCst);
        Self(counter)
    }
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        self.0.fetch_sub(1, Ordering::SeqCst);
    }
}

/// Session controller: holds the product list, the tracked URLs and the
/// live chart, and keeps them in step with the backend.
///
/// The state lock is never held across a backend call. Overlapping adds
/// therefore resolve last-response-wins, and the duplicate check is not
/// repeated once a response arrives.
pub struct Tracker<B> {
    backend: B,
    canvas: ChartCanvas,
    state: Mutex<TrackerState>,
    in_flight: AtomicUsize,
}

impl<B: Backend> Tracker<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            canvas: ChartCanvas::new(),
            state: Mutex::new(TrackerState::default()),
            in_flight: AtomicUsize::new(0),
        }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn canvas(&self) -> &ChartCanvas {
        &self.canvas
    }

    /// True while an add is waiting on the backend.
    pub fn is_loading(&self) -> bool {
        self.in_flight.load(Ordering::SeqCst) > 0
    }

    pub async fn init(&self) {
        match self.backend.get_products().await {
            Ok(products) => {
                let mut state = self.state.lock().await;
                state.urls = products.iter().map(|p| p.url.clone()).collect();
                state.products = products;
                state.mark_synced();
                state.repaint(&self.canvas, Repaint::All);
                info!(count = state.products.len(), "loaded tracked products");
            }
            Err(err) => error!(error = %err, "error fetching initial data"),
        }
    }

    /// Runs capture and the duplicate guard without contacting the backend.
    pub async fn vet(&self, submission: Submission) -> Verdict {
        let Some(url) = submission.into_url() else {
            debug!("ignoring empty submission");
            return Verdict::Ignore;
        };
        let tracked = {
            let state = self.state.lock().await;
            state.urls.contains(&url)
        };
        if tracked {
            info!(%url, "duplicate url rejected");
            Verdict::Duplicate
        } else {
            Verdict::Forward(url)
        }
    }

    pub async fn submit(&self, submission: Submission) -> SubmitOutcome {
        match self.vet(submission).await {
            Verdict::Ignore => SubmitOutcome::Ignored,
            Verdict::Duplicate => SubmitOutcome::Duplicate {
                message: DUPLICATE_WARNING,
            },
            Verdict::Forward(url) => self.add_product(url).await,
        }
    }

    async fn add_product(&self, url: String) -> SubmitOutcome {
        let _loading = LoadingGuard::begin(&self.in_flight);
        match self.backend.add_product(&url).await {
            Ok(products) => {
                let mut state = self.state.lock().await;
                state.products = products;
                state.urls.insert(url);
                state.mark_synced();
                state.repaint(&self.canvas, Repaint::All);
                info!(count = state.products.len(), "product added");
                SubmitOutcome::Added
            }
            Err(err) => {
                error!(error = %err, %url, "error adding product");
                SubmitOutcome::Failed
            }
        }
    }

    /// Re-orders the held list without contacting the backend. The URL list
    /// keeps its previous order.
    pub async fn sort(&self, column: SortColumn) {
        let mut state = self.state.lock().await;
        sort_descending(&mut state.products, column);
        state.repaint(&self.canvas, Repaint::TableAndChart);
        debug!(?column, "products re-sorted");
    }

    pub async fn reset(&self) -> ResetOutcome {
        match self.backend.reset().await {
            Ok(()) => {
                let mut state = self.state.lock().await;
                state.products.clear();
                state.urls.clear();
                state.mark_synced();
                state.repaint(&self.canvas, Repaint::All);
                info!("tracker reset");
                ResetOutcome::Cleared
            }
            Err(err) => {
                error!(error = %err, "error resetting data");
                ResetOutcome::Failed
            }
        }
    }

    pub async fn teardown(&self) {
        let mut state = self.state.lock().await;
        if let Some(chart) = state.chart.take() {
            chart.destroy();
        }
        *state = TrackerState::default();
        info!("tracker torn down");
    }

    pub async fn screen(&self) -> Screen {
        let state = self.state.lock().await;
        Screen {
            table: state.table.clone(),
            chart: state.chart.as_ref().map(|chart| chart.series().clone()),
            chart_id: state.chart.as_ref().map(Chart::id),
            links: state.links.clone(),
            loading: self.is_loading(),
            synced_at: state.synced_at.clone(),
        }
    }

    pub async fn products(&self) -> Vec<Product> {
        self.state.lock().await.products.clone()
    }

    pub async fn is_tracked(&self, url: &str) -> bool {
        self.state.lock().await.urls.contains(url)
    }
}
