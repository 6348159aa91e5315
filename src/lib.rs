pub mod cli;
pub mod config;
pub mod constants;
pub mod deck;
pub mod io;
pub mod layout;
pub mod output;
pub mod pipeline;
pub mod render;
pub mod ui;

pub use deck::{Card, CardDeck};
pub use layout::{ContentData, LayoutMetrics, LineKind, PageBreakConfig, paginate};
