//! Episode progress tracking with automatic batching for large runs

use crate::io::configuration::MAX_INDIVIDUAL_PROGRESS_BARS;
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::sync::LazyLock;

/// Coordinates progress display for batch snake simulation
///
/// Shows individual tick bars for small episode counts and adds a single
/// batch bar on top once the count grows past the individual-bar threshold.
pub struct ProgressManager {
    multi_progress: MultiProgress,
    batch_bar: Option<ProgressBar>,
    episode_bars: Vec<ProgressBar>,
    /// Stores (`label`, `current_tick`, `max_ticks`) for rolling display
    episode_states: Vec<(String, usize, usize)>,
}

static TICK_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("{msg} [{bar:30.cyan/blue}] {prefix}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("[{elapsed_precise}] Episodes: [{bar:40.cyan/blue}] {pos}/{len}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
});

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressManager {
    /// Create a new progress manager
    pub fn new() -> Self {
        Self {
            multi_progress: MultiProgress::new(),
            batch_bar: None,
            episode_bars: Vec::new(),
            episode_states: Vec::new(),
        }
    }

    /// Initialize progress bars for the given episode count
    pub fn initialize(&mut self, episodes: usize) {
        // Switch to batch mode for long runs to avoid terminal spam
        if episodes > MAX_INDIVIDUAL_PROGRESS_BARS + 1 {
            let batch_bar = ProgressBar::new(episodes as u64);
            batch_bar.set_style(BATCH_STYLE.clone());
            self.batch_bar = Some(self.multi_progress.add(batch_bar));
        }

        let bars_to_create = episodes.min(MAX_INDIVIDUAL_PROGRESS_BARS);
        for _ in 0..bars_to_create {
            let pb = ProgressBar::new(0);
            pb.set_style(TICK_STYLE.clone());
            self.episode_bars.push(self.multi_progress.add(pb));
        }
    }

    /// Configure the display for a new episode
    pub fn start_episode(&mut self, index: usize, max_ticks: usize) {
        let label = format!("episode {}", index + 1);
        if index >= self.episode_states.len() {
            self.episode_states.resize(index + 1, (String::new(), 0, 0));
        }
        if let Some(state) = self.episode_states.get_mut(index) {
            *state = (label, 0, max_ticks);
        }
        self.update_bars();
    }

    /// Report the episode's current tick
    pub fn update_tick(&mut self, index: usize, tick: usize) {
        if let Some(state) = self.episode_states.get_mut(index) {
            state.1 = tick;
        }
        self.update_bars();
    }

    /// Mark an episode as finished with its final score
    pub fn complete_episode(&mut self, index: usize, score: usize) {
        if let Some(ref batch_bar) = self.batch_bar {
            batch_bar.inc(1);
        }
        if let Some(state) = self.episode_states.get_mut(index) {
            let max_ticks = state.2;
            state.0 = format!("✓ {} (score {score})", state.0);
            state.1 = max_ticks;
        }
        self.update_bars();
    }

    /// Clean up all progress displays
    pub fn finish(&self) {
        if let Some(ref batch_bar) = self.batch_bar {
            batch_bar.finish_with_message("All episodes finished");
        }
        let _ = self.multi_progress.clear();
    }

    /// Update all bars to show the last N active episodes
    fn update_bars(&self) {
        let active: Vec<_> = self
            .episode_states
            .iter()
            .filter(|(label, _, _)| !label.is_empty())
            .cloned()
            .collect();

        let start_idx = active.len().saturating_sub(MAX_INDIVIDUAL_PROGRESS_BARS);
        let visible = active.get(start_idx..).unwrap_or(&[]);

        for (bar_idx, (label, current, max)) in visible.iter().enumerate() {
            if let Some(bar) = self.episode_bars.get(bar_idx) {
                bar.set_length(*max as u64);
                bar.set_position(*current as u64);
                let max_width = max.to_string().len();
                bar.set_message(format!("{current:>max_width$}/{max}"));
                bar.set_prefix(label.clone());
            }
        }

        for bar_idx in visible.len()..self.episode_bars.len() {
            if let Some(bar) = self.episode_bars.get(bar_idx) {
                bar.set_length(0);
                bar.set_position(0);
                bar.set_message(String::new());
                bar.set_prefix(String::new());
            }
        }
    }
}
