//! ywview - Quick viewer for yWriter projects

use std::collections::HashMap;
use std::process::ExitCode;

use clap::{ArgAction, Parser, ValueEnum};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use ywview::display::{DisplaySurface, MarkdownPane, TextPane};
use ywview::i18n::Catalog;
use ywview::{
    LegacyChapterRule, MarkupMode, Session, ViewBuilder, ViewBundle, ViewConfig, ViewKind,
    read_project,
};

#[derive(Parser)]
#[command(name = "ywview")]
#[command(version, about = "Quick viewer for yWriter projects", long_about = None)]
#[command(after_help = "EXAMPLES:
    ywview novel.yw7                          Show the project description
    ywview novel.yw7 --view scene-titles      Show chapter and scene titles
    ywview novel.yw7 --all -f markdown        Print every view as Markdown
    ywview -i novel.yw7                       Show project info and statistics")]
struct Cli {
    /// Project file (.yw7)
    #[arg(value_name = "INPUT")]
    input: String,

    /// View to print: project-description, chapter-titles, chapter-descriptions,
    /// scene-titles, scene-descriptions, scene-contents
    #[arg(long, default_value = "project-description")]
    view: ViewKind,

    /// Print all views
    #[arg(short, long, conflicts_with = "view")]
    all: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Show project title, author and statistics only
    #[arg(short, long)]
    info: bool,

    /// Drop legacy chapters when either type code is set (default: both)
    #[arg(long)]
    either_field_rule: bool,

    /// JSON file mapping English messages to translations
    #[arg(long, value_name = "FILE")]
    catalog: Option<String>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Suppress status output and warnings
    #[arg(short, long)]
    quiet: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    /// Plain text, styles dropped
    Text,
    /// Markdown, with yWriter markup converted
    Markdown,
    /// Fragments with style tags as JSON
    Json,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: u8, quiet: bool) {
    let level = if quiet {
        "error"
    } else {
        match verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: &Cli) -> Result<(), String> {
    let project = read_project(&cli.input).map_err(|e| e.to_string())?;
    let builder = make_builder(cli)?;

    if cli.info {
        show_info(&cli.input, &builder.build(&project));
        return Ok(());
    }

    let kinds: Vec<ViewKind> = if cli.all {
        ViewKind::ALL.to_vec()
    } else {
        vec![cli.view]
    };

    match cli.format {
        OutputFormat::Text => {
            let mut session = Session::with_builder(builder, TextPane::new());
            session.open_project(&project);
            print_views(&mut session, &kinds, cli.quiet, |pane| pane.text().to_string());
        }
        OutputFormat::Markdown => {
            let mut session = Session::with_builder(builder, MarkdownPane::new());
            session.open_project(&project);
            print_views(&mut session, &kinds, cli.quiet, MarkdownPane::as_markdown);
        }
        OutputFormat::Json => {
            let bundle = builder.build(&project);
            let json = if cli.all {
                serde_json::to_string_pretty(&bundle)
            } else {
                serde_json::to_string_pretty(bundle.get(cli.view))
            }
            .map_err(|e| e.to_string())?;
            println!("{json}");
        }
    }

    Ok(())
}

fn make_builder(cli: &Cli) -> Result<ViewBuilder, String> {
    let mode = match cli.format {
        OutputFormat::Markdown => MarkupMode::Markdown,
        OutputFormat::Text | OutputFormat::Json => MarkupMode::Styled,
    };
    let rule = if cli.either_field_rule {
        LegacyChapterRule::EitherField
    } else {
        LegacyChapterRule::RequireBoth
    };
    let builder = ViewBuilder::with_config(
        ViewConfig::default()
            .with_mode(mode)
            .with_chapter_rule(rule),
    );

    match &cli.catalog {
        Some(path) => Ok(builder.with_translator(load_catalog(path)?)),
        None => Ok(builder),
    }
}

fn load_catalog(path: &str) -> Result<Catalog, String> {
    let text = std::fs::read_to_string(path).map_err(|e| format!("{path}: {e}"))?;
    let messages: HashMap<String, String> =
        serde_json::from_str(&text).map_err(|e| format!("{path}: {e}"))?;
    let catalog: Catalog = messages.into_iter().collect();
    if catalog.is_empty() {
        warn!(path, "message catalog is empty");
    } else {
        info!(path, entries = catalog.len(), "loaded message catalog");
    }
    Ok(catalog)
}

fn print_views<S: DisplaySurface>(
    session: &mut Session<S>,
    kinds: &[ViewKind],
    quiet: bool,
    output: impl Fn(&S) -> String,
) {
    let titled = kinds.len() > 1;
    for (i, kind) in kinds.iter().enumerate() {
        session.show(*kind);
        if titled {
            if i > 0 {
                println!();
            }
            println!("==> {kind} <==");
        }
        print!("{}", terminated(output(session.surface())));
    }
    if !quiet {
        eprintln!("{}", session.status());
    }
}

/// Text ending in a line break, so the next line starts fresh.
fn terminated(mut text: String) -> String {
    if !text.is_empty() && !text.ends_with('\n') {
        text.push('\n');
    }
    text
}

fn show_info(path: &str, bundle: &ViewBundle) {
    println!("File: {path}");
    println!("Title: {}", bundle.title);
    if let Some(ref author) = bundle.author {
        println!("Author: {author}");
    }
    println!("Chapters: {}", bundle.statistics.chapters);
    println!("Scenes: {}", bundle.statistics.scenes);
    println!("Words: {}", bundle.statistics.words);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholder_output_gets_line_break() {
        let mut session = Session::new(TextPane::new());
        session.open_project(&ywview::Project::new());

        let text = terminated(session.surface().text().to_string());
        assert_eq!(text, "(No project description available)\n");
    }

    #[test]
    fn test_terminated_keeps_existing_break() {
        assert_eq!(terminated("a\n".to_string()), "a\n");
        assert_eq!(terminated(String::new()), "");
    }
}
