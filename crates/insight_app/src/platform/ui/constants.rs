use ratatui::style::Color;

/// Smallest container interior able to host the chart canvas. Anything
/// smaller is a frame-structure defect, reported in the log only.
pub const MIN_CANVAS_WIDTH: u16 = 24;
pub const MIN_CANVAS_HEIGHT: u16 = 6;

/// Bar geometry for the grouped chart. Bars are wide enough to print a
/// value with its unit suffix.
pub const BAR_WIDTH: u16 = 9;
pub const BAR_GAP: u16 = 1;
pub const GROUP_GAP: u16 = 3;

/// Series colors: word counts vs tip counts.
pub const WORDS_COLOR: Color = Color::Blue;
pub const TIPS_COLOR: Color = Color::Magenta;
