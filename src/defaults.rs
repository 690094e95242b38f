//! Central place for all product constants.
//! Timings are fixed; only presentation knobs are exposed on the CLI.

use std::time::Duration;

pub struct Template {
    pub emoji: &'static str,
    pub text: &'static str,
}

pub struct Defaults;

impl Defaults {
    /* Intro */
    pub const INTRO_DURATION: Duration = Duration::from_millis(3000);
    pub const INTRO_LOGO_DELAY: Duration = Duration::from_millis(500);
    pub const INTRO_SUBTITLE_DELAY: Duration = Duration::from_millis(1500);

    /* Prompt input */
    pub const AUTO_DEMO_DELAY: Duration = Duration::from_millis(5000);
    pub const TYPING_TICK: Duration = Duration::from_millis(80);
    pub const PLACEHOLDER: &'static str = "예: 매일 30분 운동을 시작했더라면...";
    pub const TEMPLATES: &'static [Template] = &[
        Template { emoji: "📱", text: "매일 30분 운동을 시작했더라면..." },
        Template { emoji: "📚", text: "매일 1시간씩 책을 읽었더라면..." },
        Template { emoji: "🎸", text: "대학 때 기타를 계속 쳤더라면..." },
        Template { emoji: "💼", text: "그때 창업을 시작했더라면..." },
    ];

    /* Progress */
    pub const PROGRESS_TOTAL: Duration = Duration::from_millis(5000);
    pub const PROGRESS_TICK: Duration = Duration::from_millis(50);
    pub const PROGRESS_SETTLE: Duration = Duration::from_millis(1000);
    pub const BURST_DURATION: Duration = Duration::from_millis(800);
    pub const STAGE_GENERATING_AT: f64 = 34.0;
    pub const STAGE_FINALIZING_AT: f64 = 67.0;

    /* Result */
    pub const USERS_TARGET: u32 = 3247;
    pub const USERS_STEP: u32 = 50;
    pub const USERS_TICK: Duration = Duration::from_millis(20);
    pub const RATING_TARGET_TENTHS: u32 = 48;
    pub const RATING_STEP_TENTHS: u32 = 1;
    pub const RATING_TICK: Duration = Duration::from_millis(50);

    /* Runtime */
    pub const FPS: u16 = 30;
    pub const STARS: usize = 50;
    pub const MAX_STARS: usize = 1000;
    pub const LOG_LEVEL: &'static str = "info";
}
