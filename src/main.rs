use anyhow::Result;
use card_pager::config::Config;
use card_pager::io::clipboard;
use card_pager::output::PageOutOfRange;
use card_pager::pipeline::Pipeline;
use card_pager::ui;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) if e.downcast_ref::<PageOutOfRange>().is_some() => {
            eprintln!("error: {e}");
            ExitCode::from(3)
        }
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    let config = Config::from_cli()?;
    let content = config.load_content()?;

    let mut pipeline = Pipeline::new();
    pipeline.build_deck(content, config.page_break_config());

    if config.stats {
        eprint!("{}", pipeline.stats_report()?);
    }

    if config.interactive {
        return ui::preview_deck_tui(pipeline.deck()?);
    }

    pipeline.build_xml(&config.prefix, config.escape_xml, config.page)?;
    let xml = pipeline.xml_output().unwrap_or_default();
    if config.stdout {
        print!("{xml}");
    }
    if !config.no_clipboard {
        clipboard::copy_to_clipboard(xml);
    }

    if let Some(dir) = &config.export {
        let report = pipeline.export_to_dir(dir, &config.prefix)?;
        eprintln!("OK exported {} cards to {}", report.files.len(), dir.display());
    } else {
        let deck = pipeline.deck()?;
        eprintln!("OK {} pages + cover", deck.total_pages());
    }
    Ok(())
}
