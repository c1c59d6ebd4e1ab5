//! Color palette for the picker widgets
//!
//! Muted, cohesive colors; accents are reserved for matches and the active model.

use ratatui::style::Color;

// UI Chrome
/// Borders of panels and the drawer
pub const BORDER: Color = Color::Rgb(100, 110, 130);
/// Background of the highlighted row
pub const SURFACE_HIGHLIGHT: Color = Color::Rgb(50, 55, 70);

// Text
/// Regular text
pub const TEXT_PRIMARY: Color = Color::Rgb(220, 220, 230);
/// Secondary text such as labels and counts
pub const TEXT_DIM: Color = Color::Rgb(130, 135, 150);
/// Hints and unavailable models
pub const TEXT_MUTED: Color = Color::Rgb(90, 95, 110);

// Drawer
/// Drawer background
pub const DRAWER_BG: Color = Color::Rgb(25, 27, 35);
/// Search box background
pub const INPUT_BG: Color = Color::Rgb(35, 40, 50);

// Accents
/// The active model's check mark
pub const ACCENT_POSITIVE: Color = Color::Rgb(120, 180, 120);
/// Error messages
pub const ACCENT_NEGATIVE: Color = Color::Rgb(200, 100, 100);
/// Search matches inside labels
pub const MATCH: Color = Color::Rgb(200, 160, 80);
