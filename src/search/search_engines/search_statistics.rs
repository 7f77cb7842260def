use crate::search::heuristics::HeuristicValue;
use std::time::{Duration, Instant};
use tracing::info;

#[derive(Debug)]
pub struct SearchStatistics {
    /// Number of states taken off the frontier and expanded
    expanded_nodes: usize,
    /// Number of neighbours generated
    generated_nodes: usize,
    /// Number of states recorded with a new or better score
    explored_states: usize,
    /// Number of expanded states put back on the frontier
    reopened_nodes: usize,
    /// Number of neighbours dropped because they were already expanded
    skipped_nodes: usize,
    /// Best score taken off the frontier so far
    best_score: Option<HeuristicValue>,
    /// Time when the search started
    search_start_time: Instant,
    /// Time when the last log was printed, used for periodic logging
    last_log_time: Instant,
}

impl Default for SearchStatistics {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchStatistics {
    pub fn new() -> Self {
        info!("starting search");
        Self {
            expanded_nodes: 0,
            generated_nodes: 0,
            explored_states: 0,
            reopened_nodes: 0,
            skipped_nodes: 0,
            best_score: None,
            search_start_time: Instant::now(),
            last_log_time: Instant::now(),
        }
    }

    pub fn register_score(&mut self, score: HeuristicValue) {
        if self.best_score.map_or(true, |best| score < best) {
            self.best_score = Some(score);
            info!(best_score = score);
        }
    }

    pub fn increment_expanded_nodes(&mut self) {
        self.expanded_nodes += 1;
        self.log_if_needed();
    }

    pub fn increment_generated_nodes(&mut self) {
        self.generated_nodes += 1;
        self.log_if_needed();
    }

    pub fn increment_explored_states(&mut self) {
        self.explored_states += 1;
        self.log_if_needed();
    }

    pub fn increment_reopened_nodes(&mut self) {
        self.reopened_nodes += 1;
        self.log_if_needed();
    }

    pub fn increment_skipped_nodes(&mut self) {
        self.skipped_nodes += 1;
        self.log_if_needed();
    }

    pub fn expanded_nodes(&self) -> usize {
        self.expanded_nodes
    }

    pub fn generated_nodes(&self) -> usize {
        self.generated_nodes
    }

    pub fn explored_states(&self) -> usize {
        self.explored_states
    }

    pub fn reopened_nodes(&self) -> usize {
        self.reopened_nodes
    }

    pub fn skipped_nodes(&self) -> usize {
        self.skipped_nodes
    }

    pub fn elapsed(&self) -> Duration {
        self.search_start_time.elapsed()
    }

    fn log_if_needed(&mut self) {
        if self.last_log_time.elapsed().as_secs() > 10 {
            self.last_log_time = Instant::now();
            self.log();
        }
    }

    fn log(&self) {
        info!(
            expanded_nodes = self.expanded_nodes,
            generated_nodes = self.generated_nodes,
            explored_states = self.explored_states,
            reopened_nodes = self.reopened_nodes,
            skipped_nodes = self.skipped_nodes,
            best_score = self.best_score,
        );
    }

    pub fn finalise_search(&self) {
        info!("finalising search");
        self.log();
        info!(search_duration = self.elapsed().as_secs_f64());
    }
}
