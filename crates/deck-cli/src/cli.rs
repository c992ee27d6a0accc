use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use clap::Parser;
use miette::IntoDiagnostic;

use deck_render::{Options, SlideShow};

/// Query parameter that selects the deck, as in `?slide=<name>`.
const SLIDE_PARAM: &str = "slide";

#[derive(Parser, Debug)]
#[command(name = "mdeck")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(after_help = "Examples:\n\n\
    To render the deck selected by a query string:\n\
    $ mdeck '?slide=category-theory'\n\n\
    To render the default deck:\n\
    $ mdeck\n\n\
    To write the rendered deck to a file:\n\
    $ mdeck '?slide=monads' -o monads.html")]
#[command(
    about = "mdeck renders the markdown slide deck selected by a query string.",
    long_about = None
)]
pub struct Cli {
    /// Query string selecting the deck, e.g. "?slide=category-theory"
    query: Option<String>,

    /// Resolve the deck path relative to this directory
    #[arg(short = 'L', long = "directory")]
    directory: Option<PathBuf>,

    /// Output to the specified file
    #[clap(short = 'o', long = "output", value_name = "FILE")]
    output_file: Option<PathBuf>,
}

impl Cli {
    /// Runs the loader once: compute the deck path, render it, write it out.
    pub fn run(&self) -> miette::Result<()> {
        let search = self.query.as_deref().unwrap_or("");
        let path = slide_path(search);
        let source_url = match &self.directory {
            Some(directory) => directory.join(&path).to_string_lossy().into_owned(),
            None => path,
        };

        tracing::info!("Loading slide deck from {}", source_url);
        let slide_show = deck_render::create(Options { source_url }).into_diagnostic()?;

        self.write(&slide_show)
    }

    fn write(&self, slide_show: &SlideShow) -> miette::Result<()> {
        match &self.output_file {
            Some(file) => fs::write(file, slide_show.to_html()).into_diagnostic(),
            None => {
                let stdout = io::stdout();
                let mut writer = BufWriter::new(stdout.lock());
                writer
                    .write_all(slide_show.to_html().as_bytes())
                    .into_diagnostic()?;
                writer.flush().into_diagnostic()
            }
        }
    }
}

/// Builds the relative deck path from the query string: `slides/<value>.md`,
/// where `<value>` comes from the `slide` parameter or the default deck.
pub fn slide_path(search: &str) -> String {
    format!("slides/{}.md", deck_query::extract(search, SLIDE_PARAM))
}
