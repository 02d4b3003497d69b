//! The subcommands, as functions from arguments to output text.

use literate_analysis::{xref, HeadlessHost, LiterateView, LoadOutcome, RecordingWidget};
use literate_babel::dom::{self, parse_html, serialize_document};
use literate_babel::page::{build_segments, find_source};
use literate_babel::render::CODE_CLASS;
use literate_babel::{to_literate, ComrakConverter, RenderError};
use literate_config::{Loader, LiterateConfig};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info, warn};
use url::Url;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("cannot read `{}`: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("cannot write `{}`: {source}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("`{}` has no file URI", path.display())]
    Location { path: PathBuf },

    #[error("configuration: {0}")]
    Config(#[from] config::ConfigError),

    #[error(transparent)]
    Render(#[from] RenderError),

    #[error(transparent)]
    View(#[from] literate_analysis::ViewError),

    #[error("JSON output: {0}")]
    Json(#[from] serde_json::Error),
}

pub struct InputArgs {
    pub path: PathBuf,
    pub config: Option<PathBuf>,
}

pub struct ConvertArgs {
    pub input: InputArgs,
    pub output: Option<PathBuf>,
    pub title: Option<String>,
    pub highlight: Option<String>,
    pub framed: bool,
}

fn load_config(args: &InputArgs, title: Option<&str>) -> Result<LiterateConfig, CliError> {
    let mut loader = Loader::new();
    if let Some(path) = &args.config {
        loader = loader.with_file(path);
    }
    if let Some(title) = title {
        loader = loader.set_override("render.fallback_title", title)?;
    }
    Ok(loader.build()?)
}

fn read_page(path: &Path) -> Result<String, CliError> {
    fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// The `file://` location a page is shown at, with the deep link applied.
fn page_location(path: &Path, highlight: Option<&str>) -> Result<String, CliError> {
    let absolute = fs::canonicalize(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let mut url = Url::from_file_path(&absolute).map_err(|_| CliError::Location {
        path: absolute.clone(),
    })?;
    if let Some(id) = highlight {
        url.query_pairs_mut().append_pair("id", id);
    }
    Ok(url.into())
}

pub fn convert(args: &ConvertArgs) -> Result<(), CliError> {
    let config = load_config(&args.input, args.title.as_deref())?;
    let page = parse_html(&read_page(&args.input.path)?);
    let host = if args.framed {
        HeadlessHost::framed(page_location(&args.input.path, args.highlight.as_deref())?)
    } else {
        HeadlessHost::top_level(page_location(&args.input.path, args.highlight.as_deref())?)
    };

    let mut view = LiterateView::load(
        &page,
        host,
        RecordingWidget::default(),
        &config.view_options(),
        &ComrakConverter::new(&config.markdown),
    )?;
    match view.load_outcome().clone() {
        // no animation to wait for
        LoadOutcome::Scrolling(ticket) => {
            view.scroll_finished(ticket);
        }
        LoadOutcome::Redirected(uri) => {
            info!(uri = %uri, "top-level deep link redirects; use --framed to highlight")
        }
        LoadOutcome::Idle => {
            if let Some(id) = &args.highlight {
                warn!(id = %id, "no element with this id");
            }
        }
    }
    debug!(sections = view.page().sections, "rendered");

    let html = serialize_document(&page)?;
    match &args.output {
        Some(path) => fs::write(path, html).map_err(|source| CliError::Write {
            path: path.clone(),
            source,
        }),
        None => {
            print!("{}", html);
            Ok(())
        }
    }
}

#[derive(Debug, Serialize)]
struct SegmentSummary {
    comment: String,
    code_nodes: Vec<String>,
    markup: String,
}

pub fn segments(args: &InputArgs) -> Result<String, CliError> {
    let config = load_config(args, None)?;
    let page = parse_html(&read_page(&args.path)?);
    let source = find_source(&page, &config.render)?;
    let segments = build_segments(
        &source,
        &config.render,
        &ComrakConverter::new(&config.markdown),
    );

    let summaries = segments
        .iter()
        .map(|segment| {
            Ok(SegmentSummary {
                comment: segment.comment.clone(),
                code_nodes: segment
                    .code
                    .iter()
                    .map(|node| dom::outer_html(node.handle()))
                    .collect::<Result<_, _>>()?,
                markup: segment.markup_str().to_string(),
            })
        })
        .collect::<Result<Vec<_>, RenderError>>()?;
    Ok(serde_json::to_string_pretty(&summaries)?)
}

pub fn xref(args: &InputArgs) -> Result<String, CliError> {
    let config = load_config(args, None)?;
    let page = parse_html(&read_page(&args.path)?);
    to_literate(
        &page,
        &config.render,
        &ComrakConverter::new(&config.markdown),
    )?;
    let entries = xref::index(&page.document, &format!(".{} code [id]", CODE_CLASS))?;
    Ok(serde_json::to_string_pretty(&entries)?)
}
