use crate::view::ChartSeries;
use std::sync::{
    Arc,
    atomic::{AtomicU64, AtomicUsize, Ordering},
};
use tracing::debug;

/// Mints chart instances and keeps count of the ones still alive.
#[derive(Debug, Default)]
pub struct ChartCanvas {
    live: Arc<AtomicUsize>,
    next_id: AtomicU64,
}

impl ChartCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mount(&self, series: ChartSeries) -> Chart {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
        self.live.fetch_add(1, Ordering::SeqCst);
        debug!(chart_id = id, bars = series.labels.len(), "chart mounted");
        Chart {
            id,
            series,
            live: Arc::clone(&self.live),
        }
    }

    pub fn live_instances(&self) -> usize {
        self.live.load(Ordering::SeqCst)
    }
}

/// A rendered bar chart. Dropping it releases its slot on the canvas.
#[derive(Debug)]
pub struct Chart {
    id: u64,
    series: ChartSeries,
    live: Arc<AtomicUsize>,
}

impl Chart {
    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn series(&self) -> &ChartSeries {
        &self.series
    }

    pub fn destroy(self) {
        debug!(chart_id = self.id, "chart destroyed");
    }
}

impl Drop for Chart {
    fn drop(&mut self) {
        self.live.fetch_sub(1, Ordering::SeqCst);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::CHART_TITLE;

    fn series(labels: &[&str]) -> ChartSeries {
        ChartSeries {
            title: CHART_TITLE,
            labels: labels.iter().map(|l| l.to_string()).collect(),
            values: labels.iter().map(|_| 1.0).collect(),
        }
    }

    #[test]
    fn mount_and_destroy_track_live_instances() {
        let canvas = ChartCanvas::new();
        assert_eq!(canvas.live_instances(), 0);

        let chart = canvas.mount(series(&["a"]));
        assert_eq!(canvas.live_instances(), 1);
        assert_eq!(chart.series().labels, vec!["a".to_string()]);

        chart.destroy();
        assert_eq!(canvas.live_instances(), 0);
    }

    #[test]
    fn each_mount_gets_a_fresh_id() {
        let canvas = ChartCanvas::new();
        let first = canvas.mount(series(&["a"]));
        let first_id = first.id();
        first.destroy();
        let second = canvas.mount(series(&["b"]));
        assert!(second.id() > first_id);
        assert_eq!(canvas.live_instances(), 1);
    }
}
