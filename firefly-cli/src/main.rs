//! firefly CLI
//!
//! Classifies an F# source file and renders embedded lit-html templates
//! with distinct colors on the terminal.

mod lexer;

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use owo_colors::OwoColorize;

use firefly_classify::{ClassifiedSpan, ClassifierRegistry, DocumentId, SpanCategory};
use firefly_style::{FormatMap, Rgb, Theme};

/// Highlight lit-html templates embedded in F# strings.
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// F# source file to classify
    file: PathBuf,

    /// Color theme to render with
    #[arg(long, value_enum, default_value_t = ThemeArg::Dark)]
    theme: ThemeArg,

    /// Dump the classified span list instead of rendering
    #[arg(long)]
    spans: bool,

    /// JSON file overriding the default format map
    #[arg(long)]
    format_map: Option<PathBuf>,
}

/// Theme choice on the command line.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum ThemeArg {
    /// Light backgrounds.
    Light,
    /// Dark backgrounds.
    Dark,
}

impl From<ThemeArg> for Theme {
    fn from(theme: ThemeArg) -> Self {
        match theme {
            ThemeArg::Light => Self::Light,
            ThemeArg::Dark => Self::Dark,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let source = fs::read_to_string(&cli.file)
        .with_context(|| format!("cannot read {}", cli.file.display()))?;
    let formats = match &cli.format_map {
        Some(path) => FormatMap::load(path)
            .with_context(|| format!("cannot load format map {}", path.display()))?,
        None => FormatMap::default(),
    };

    let host_spans = lexer::lex(&source);
    let mut registry = ClassifierRegistry::new();
    let classifier = registry.classifier_for(DocumentId(0));
    let spans = classifier.classify_range(&source, 0, source.len(), &host_spans);

    if cli.spans {
        for span in &spans {
            println!("{span}");
        }
        return Ok(());
    }

    render(&source, &spans, &formats, cli.theme.into());
    Ok(())
}

/// Print the document, coloring the classified spans and leaving the gaps
/// (host code outside templates) untouched.
fn render(source: &str, spans: &[ClassifiedSpan], formats: &FormatMap, theme: Theme) {
    let mut cursor = 0;
    for span in spans {
        if span.offset > cursor {
            print!("{}", &source[cursor..span.offset]);
        }
        let text = &source[span.offset..span.end()];
        match span.category {
            SpanCategory::Html(category) => {
                let Rgb { r, g, b } = formats.definition(category).color(theme);
                print!("{}", text.truecolor(r, g, b));
            }
            SpanCategory::Host(_) => print!("{text}"),
        }
        cursor = span.end();
    }
    print!("{}", &source[cursor..]);
}
