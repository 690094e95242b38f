//! Numeric model behind the progress screen.
//!
//! Progress is kept unrounded; only the displayed percentage is rounded.
//! Stage decisions always read the raw value.

use std::time::Duration;

use crate::defaults::Defaults;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Stage {
    Analyzing,
    Generating,
    Finalizing,
}

impl Stage {
    pub fn for_progress(progress: f64) -> Self {
        if progress >= Defaults::STAGE_FINALIZING_AT {
            Stage::Finalizing
        } else if progress >= Defaults::STAGE_GENERATING_AT {
            Stage::Generating
        } else {
            Stage::Analyzing
        }
    }

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn message(self) -> &'static str {
        match self {
            Stage::Analyzing => "시나리오 분석 중...",
            Stage::Generating => "영상 생성 중...",
            Stage::Finalizing => "마무리 중...",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Running(Stage),
    /// Reported once, on the tick that reaches 100.
    Completed,
}

#[derive(Debug, Clone)]
pub struct ProgressSim {
    progress: f64,
    increment: f64,
    stage: Stage,
    completed: bool,
}

impl ProgressSim {
    pub fn new(total: Duration, tick: Duration) -> Self {
        let total_ns = total.as_nanos() as f64;
        let tick_ns = tick.as_nanos() as f64;
        let increment = if total_ns > 0.0 { 100.0 * tick_ns / total_ns } else { 100.0 };
        Self { progress: 0.0, increment, stage: Stage::Analyzing, completed: false }
    }

    pub fn step(&mut self) -> Step {
        if self.completed {
            return Step::Running(self.stage);
        }
        self.progress = (self.progress + self.increment).min(100.0);
        self.stage = self.stage.max(Stage::for_progress(self.progress));
        if self.progress >= 100.0 {
            self.completed = true;
            Step::Completed
        } else {
            Step::Running(self.stage)
        }
    }

    pub fn progress(&self) -> f64 {
        self.progress
    }

    pub fn elapsed_fraction(&self) -> f64 {
        self.progress / 100.0
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    pub fn display_percent(&self) -> u8 {
        self.progress.round() as u8
    }
}

impl Default for ProgressSim {
    fn default() -> Self {
        Self::new(Defaults::PROGRESS_TOTAL, Defaults::PROGRESS_TICK)
    }
}
