//! Staggered progress-bar animation.
//!
//! Bars start at `0%` and grow to their `data-width` one after another:
//! bar `i` is set at `initial_delay + i * stagger` from the start of the run.

use crate::dom::NodeId;
use crate::page::Page;
use std::time::Duration;
use tokio::time::{sleep_until, Instant};
use tracing::{debug, instrument};

const BAR_SELECTOR: &str = ".skill-progress";
const WIDTH_ATTRIBUTE: &str = "data-width";

/// A bar waiting for its target width.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduledBar {
    /// Bar node.
    pub node: NodeId,
    /// Width it grows to.
    pub width: String,
    /// Offset from the start of the run.
    pub delay: Duration,
}

/// One bar reaching its width.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnimationStep {
    /// Bar node.
    pub node: NodeId,
    /// Width applied.
    pub width: String,
    /// Time since the run started.
    pub elapsed: Duration,
}

/// Steps of a finished run, in order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnimationReport {
    /// Completed steps.
    pub steps: Vec<AnimationStep>,
}

impl AnimationReport {
    /// Number of bars animated.
    #[must_use]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Whether no bar was animated.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

/// Grows skill bars to their widths on a staggered schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressAnimator {
    initial_delay: Duration,
    stagger: Duration,
}

impl Default for ProgressAnimator {
    fn default() -> Self {
        Self::new(Duration::from_millis(100), Duration::from_millis(150))
    }
}

impl ProgressAnimator {
    /// Animator with the given timing.
    #[must_use]
    pub const fn new(initial_delay: Duration, stagger: Duration) -> Self {
        Self {
            initial_delay,
            stagger,
        }
    }

    /// Offset of bar `index` from the start of the run.
    #[must_use]
    pub fn delay_for(&self, index: usize) -> Duration {
        let steps = u32::try_from(index).unwrap_or(u32::MAX);
        self.initial_delay
            .saturating_add(self.stagger.saturating_mul(steps))
    }

    /// Resets every bar carrying a `data-width` to `0%` and returns them in
    /// document order with their delays. Bars without a width are left alone.
    pub fn schedule(&self, page: &mut Page) -> Vec<ScheduledBar> {
        let bars: Vec<(NodeId, String)> = page
            .document()
            .query_all(BAR_SELECTOR)
            .into_iter()
            .filter_map(|node| {
                let width = page.document().attr(node, WIDTH_ATTRIBUTE)?;
                Some((node, width.to_string()))
            })
            .collect();

        let document = page.document_mut();
        bars.into_iter()
            .enumerate()
            .map(|(index, (node, width))| {
                document.set_style_property(node, "width", "0%");
                ScheduledBar {
                    node,
                    width,
                    delay: self.delay_for(index),
                }
            })
            .collect()
    }

    /// Schedules the bars and sets each one's width when its delay is due.
    #[instrument(skip(self, page))]
    pub async fn run(&self, page: &mut Page) -> AnimationReport {
        let bars = self.schedule(page);
        debug!(bars = bars.len(), "progress animation started");

        let start = Instant::now();
        let mut report = AnimationReport::default();
        for bar in bars {
            sleep_until(start + bar.delay).await;
            page.document_mut()
                .set_style_property(bar.node, "width", &bar.width);
            report.steps.push(AnimationStep {
                node: bar.node,
                width: bar.width,
                elapsed: start.elapsed(),
            });
        }

        debug!(bars = report.len(), "progress animation finished");
        report
    }
}
