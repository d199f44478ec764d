mod highlights;
mod overlay;
mod table;

pub use {
    highlights::{
        HighlightKind, HighlightList, Highlights, highest_volume, top_gainers, top_losers,
    },
    overlay::{CloseReason, DetailOverlay},
    table::{
        SortDirection, SortKey, TableRow, TableState, filter_coins, matches_query, sort_coins,
    },
};
