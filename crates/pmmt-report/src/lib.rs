//! Aggregation helpers for the dashboard charts: per-city equipment
//! combination, status breakdowns, waterfall balances, and per-command
//! personnel strength totals.

pub mod equipment;
pub mod personnel;

pub use equipment::{
    WaterfallRow, cautela_breakdown, combine_city_equipment, stock_breakdown, waterfall_balances,
};
pub use personnel::command_strengths;
