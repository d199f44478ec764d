use eframe::egui::{Color32, CornerRadius, Frame, Margin, Stroke};

pub use crate::ui::ui_text::UI_TEXT;

/// UI Colors for consistent theming
#[derive(Clone, Copy, Default)]
pub struct UiColors {
    pub label: Color32,
    pub heading: Color32,
    pub subsection_heading: Color32,
    pub central_panel: Color32,
    pub side_panel: Color32,
    pub section: Color32,
    pub card: Color32,
    pub card_border: Color32,
    pub positive: Color32,
    pub negative: Color32,
    pub neutral: Color32,
    pub error: Color32,
}

/// Main UI configuration struct that holds all UI-related settings
#[derive(Default, Clone, Copy)]
pub struct UiConfig {
    pub colors: UiColors,
}

/// Global UI configuration instance
pub static UI_CONFIG: UiConfig = UiConfig {
    colors: UiColors {
        label: Color32::GRAY,     // This sets every label globally to this color
        heading: Color32::YELLOW, // Sets every heading
        subsection_heading: Color32::ORANGE, // Sets every subsection heading
        central_panel: Color32::from_rgb(18, 18, 24),
        side_panel: Color32::from_rgb(25, 25, 25),
        section: Color32::from_rgb(30, 30, 38),
        card: Color32::from_rgb(40, 40, 50),
        card_border: Color32::from_rgb(70, 70, 85),
        positive: Color32::from_rgb(46, 204, 113),
        negative: Color32::from_rgb(231, 76, 60),
        neutral: Color32::LIGHT_GRAY,
        error: Color32::from_rgb(255, 99, 71),
    },
};

impl UiConfig {
    /// Frame for the Top Toolbar (Standard padding)
    pub fn top_panel_frame(&self) -> Frame {
        Frame {
            fill: self.colors.side_panel,
            stroke: Stroke::NONE,
            inner_margin: Margin::same(8),
            ..Default::default()
        }
    }

    pub fn central_panel_frame(&self) -> Frame {
        Frame {
            fill: self.colors.central_panel,
            stroke: Stroke::NONE,
            inner_margin: Margin::symmetric(16, 8),
            ..Default::default()
        }
    }

    /// Rounded box around the highlights block and the table.
    pub fn section_frame(&self) -> Frame {
        Frame {
            fill: self.colors.section,
            stroke: Stroke::new(1.0, self.colors.card_border),
            inner_margin: Margin::same(12),
            corner_radius: CornerRadius::same(6),
            ..Default::default()
        }
    }

    pub fn card_frame(&self) -> Frame {
        Frame {
            fill: self.colors.card,
            stroke: Stroke::new(1.0, self.colors.card_border),
            inner_margin: Margin::same(4),
            corner_radius: CornerRadius::same(4),
            ..Default::default()
        }
    }
}
