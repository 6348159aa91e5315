// Centralized magic numbers & default values
pub const DEFAULT_BODY_FONT_SIZE: u32 = 16;
pub const DEFAULT_TITLE_FONT_SIZE: u32 = 32;
pub const MIN_BODY_FONT_SIZE: u32 = 12;
pub const MAX_BODY_FONT_SIZE: u32 = 24;
pub const MIN_TITLE_FONT_SIZE: u32 = 20;
pub const MAX_TITLE_FONT_SIZE: u32 = 64;

// Capacity-estimation policy, calibrated against a 375px wide 9:16 card
pub const CONTAINER_WIDTH_PX: f64 = 320.0;
pub const CHAR_WIDTH_FACTOR: f64 = 0.6;
pub const PAGE_HEIGHT_PX: f64 = 450.0;
pub const LINE_HEIGHT_FACTOR: f64 = 1.5;
pub const HEADING_VISUAL_LINES: usize = 3;

pub const DEFAULT_EXPORT_PREFIX: &str = "rednote-card";
pub const DECK_FORMAT_VERSION: &str = "1";
pub const PREVIEW_MIN_WIDTH: usize = 24;
