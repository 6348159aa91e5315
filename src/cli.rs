use crate::constants::{
    DEFAULT_BODY_FONT_SIZE, DEFAULT_EXPORT_PREFIX, DEFAULT_TITLE_FONT_SIZE, MAX_BODY_FONT_SIZE,
    MAX_TITLE_FONT_SIZE, MIN_BODY_FONT_SIZE, MIN_TITLE_FONT_SIZE,
};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "card-pager")]
#[command(
    about = "Split a long text body into fixed-size social cards (cover + pages), \
                   print them as XML, copy to clipboard, or export one file per card."
)]
pub struct Cli {
    /// Body text file; "-" reads stdin.
    #[arg(default_value = "-")]
    pub input: String,

    /// Cover title.
    #[arg(long = "title", default_value = "")]
    pub title: String,

    /// Date / volume line.
    #[arg(long = "subtitle", default_value = "")]
    pub subtitle: String,

    /// Author / tag badge.
    #[arg(long = "tag", default_value = "")]
    pub tag: String,

    /// Body font size in px.
    #[arg(
        short = 'f',
        long = "body-size",
        default_value_t = DEFAULT_BODY_FONT_SIZE,
        value_parser = clap::value_parser!(u32).range(i64::from(MIN_BODY_FONT_SIZE)..=i64::from(MAX_BODY_FONT_SIZE))
    )]
    pub body_size: u32,

    /// Title font size in px (cover only).
    #[arg(
        short = 't',
        long = "title-size",
        default_value_t = DEFAULT_TITLE_FONT_SIZE,
        value_parser = clap::value_parser!(u32).range(i64::from(MIN_TITLE_FONT_SIZE)..=i64::from(MAX_TITLE_FONT_SIZE))
    )]
    pub title_size: u32,

    /// Do not copy to clipboard.
    #[arg(short = 'n', long = "no-clipboard")]
    pub no_clipboard: bool,

    /// Print XML output to stdout.
    #[arg(short = 'o', long = "stdout")]
    pub stdout: bool,

    /// Only emit this content page (1-based, cover excluded).
    #[arg(short = 'p', long = "page", value_parser = clap::value_parser!(usize))]
    pub page: Option<usize>,

    /// Escape <, > and & inside page bodies.
    #[arg(long = "escape-xml")]
    pub escape_xml: bool,

    /// Write one preview file per card into this directory.
    #[arg(short = 'e', long = "export")]
    pub export: Option<PathBuf>,

    /// File name prefix for exported cards.
    #[arg(long = "prefix", default_value = DEFAULT_EXPORT_PREFIX, requires = "export")]
    pub prefix: String,

    /// Browse the cards in a terminal preview.
    #[arg(short = 'i', long = "interactive", conflicts_with_all = ["page", "stdout"])]
    pub interactive: bool,

    /// Print the estimated load of each page to stderr.
    #[arg(long = "stats")]
    pub stats: bool,
}
