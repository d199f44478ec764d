pub struct HighlightsConfig {
    /// Cards shown per highlight list before "Show More".
    pub initial_count: usize,
    /// Card names longer than this get an ellipsis.
    pub card_name_chars: usize,
    pub card_size: f32,
    pub card_icon_size: f32,
}

pub struct TableConfig {
    pub icon_size: f32,
    pub row_spacing: f32,
    pub search_width: f32,
}

pub struct OverlayConfig {
    pub width: f32,
    pub icon_size: f32,
}

pub struct DashboardConfig {
    pub title: &'static str,
    pub highlights: HighlightsConfig,
    pub table: TableConfig,
    pub overlay: OverlayConfig,
}

pub const DASHBOARD: DashboardConfig = DashboardConfig {
    title: "Crypto Dashboard",
    highlights: HighlightsConfig {
        initial_count: 5,
        card_name_chars: 10,
        card_size: 90.0,
        card_icon_size: 32.0,
    },
    table: TableConfig {
        icon_size: 20.0,
        row_spacing: 6.0,
        search_width: 220.0,
    },
    overlay: OverlayConfig {
        width: 360.0,
        icon_size: 48.0,
    },
};
