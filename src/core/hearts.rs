use super::constants::{
    HEART_COUNT, HEART_DELAY_STEP_SEC, HEART_DURATION_BASE_SEC, HEART_DURATION_RANGE,
    HEART_LEFT_STEP_PCT, HEART_PEAK_OPACITY, HEART_SIZE_BASE_PX, HEART_SIZE_RANGE,
};

/// A rising background heart. All fields derive from `id`.
#[derive(Clone, Debug, PartialEq)]
pub struct Heart {
    pub id: usize,
    pub left_pct: u32,
    pub size_px: u32,
    pub duration_sec: f32,
    pub delay_sec: f32,
}

impl Heart {
    pub fn from_index(i: usize) -> Self {
        Self {
            id: i,
            left_pct: ((i * HEART_LEFT_STEP_PCT) % 100) as u32,
            size_px: HEART_SIZE_BASE_PX + (i % HEART_SIZE_RANGE) as u32,
            duration_sec: HEART_DURATION_BASE_SEC + (i % HEART_DURATION_RANGE) as f32,
            delay_sec: i as f32 * HEART_DELAY_STEP_SEC,
        }
    }

    /// Inline style for the heart's wrapper. Motion comes from the `rise`
    /// keyframes in the page stylesheet.
    pub fn css_style(&self) -> String {
        format!(
            "left:{}%;width:{}px;height:{}px;animation:rise {:.1}s linear {:.1}s infinite;",
            self.left_pct, self.size_px, self.size_px, self.duration_sec, self.delay_sec
        )
    }
}

pub fn generate_hearts() -> Vec<Heart> {
    (0..HEART_COUNT).map(Heart::from_index).collect()
}

/// Opacity over one rise cycle: keyframes 0, peak, peak, 0 at even spacing.
pub fn rise_opacity(progress: f32) -> f32 {
    let p = progress.clamp(0.0, 1.0) * 3.0;
    if p < 1.0 {
        p * HEART_PEAK_OPACITY
    } else if p < 2.0 {
        HEART_PEAK_OPACITY
    } else {
        (3.0 - p) * HEART_PEAK_OPACITY
    }
}
