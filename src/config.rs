use crate::cli::Cli;
use crate::layout::{ContentData, PageBreakConfig};
use anyhow::{Context, Result};
use clap::Parser;
use std::io::Read;
use std::path::PathBuf;

/// Application configuration derived from CLI arguments
#[derive(Debug, Clone)]
pub struct Config {
    pub input: String,
    pub title: String,
    pub subtitle: String,
    pub tag: String,
    pub body_size: u32,
    pub title_size: u32,
    pub no_clipboard: bool,
    pub stdout: bool,
    pub page: Option<usize>,
    pub escape_xml: bool,
    pub export: Option<PathBuf>,
    pub prefix: String,
    pub interactive: bool,
    pub stats: bool,
}

impl Config {
    /// Parse CLI arguments into a Config
    pub fn from_cli() -> Result<Self> {
        Ok(Self::from(Cli::parse()))
    }

    pub fn page_break_config(&self) -> PageBreakConfig {
        PageBreakConfig::new(f64::from(self.body_size))
            .with_title_font_size(f64::from(self.title_size))
    }

    /// Reads the body (file or stdin) and combines it with the cover fields.
    pub fn load_content(&self) -> Result<ContentData> {
        let body = if self.input == "-" {
            let mut s = String::new();
            std::io::stdin()
                .read_to_string(&mut s)
                .context("cannot read body from stdin")?;
            s
        } else {
            std::fs::read_to_string(&self.input)
                .with_context(|| format!("cannot read body from {}", self.input))?
        };
        Ok(ContentData {
            title: self.title.clone(),
            subtitle: self.subtitle.clone(),
            tag: self.tag.clone(),
            body: normalize_newlines(body),
        })
    }
}

impl From<Cli> for Config {
    fn from(cli: Cli) -> Self {
        Config {
            input: cli.input,
            title: cli.title,
            subtitle: cli.subtitle,
            tag: cli.tag,
            body_size: cli.body_size,
            title_size: cli.title_size,
            no_clipboard: cli.no_clipboard,
            stdout: cli.stdout,
            page: cli.page,
            escape_xml: cli.escape_xml,
            export: cli.export,
            prefix: cli.prefix,
            interactive: cli.interactive,
            stats: cli.stats,
        }
    }
}

// Editors on Windows hand us CRLF; a textarea never does. The final
// line terminator of a file is not an empty last line.
fn normalize_newlines(body: String) -> String {
    let mut body = if body.contains('\r') {
        body.replace("\r\n", "\n")
    } else {
        body
    };
    if body.ends_with('\n') {
        body.pop();
    }
    body
}
