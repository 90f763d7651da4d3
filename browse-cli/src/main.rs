//! Browse CLI
//!
//! Parses an HTML file (or an inline string) and prints the resulting
//! document tree.

use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use browse_dom::{DomTree, NodeId, NodeSnapshot};
use browse_html::{HtmlParser, ParseIssue};
use browse_layout::{ApproximateFontMetrics, LayoutContext, RenderOp, render_from};
use clap::Parser;
use log::debug;
use owo_colors::OwoColorize;

/// Deepest snapshot `--json` will serialize.
const MAX_JSON_DEPTH: usize = 1024;

/// Browse: parse an HTML document and print its tree
#[derive(Parser, Debug)]
#[command(name = "browse")]
#[command(author, version, about, long_about = None)]
#[command(after_help = r#"EXAMPLES:
    # Print the indented tree of a file
    browse index.html

    # Parse inline markup
    browse --html '<p>Hello &amp; welcome</p>'

    # Only the subtrees matching a selector, as JSON
    browse --select .note --json index.html

    # Text layout wrapped at 600px, with recovered parse issues
    browse --layout 600 --issues index.html
"#)]
struct Cli {
    /// Path to an HTML file
    #[arg(value_name = "PATH", required_unless_present = "html", conflicts_with = "html")]
    path: Option<PathBuf>,

    /// Parse this HTML string instead of a file
    #[arg(long, value_name = "MARKUP")]
    html: Option<String>,

    /// Print a JSON snapshot instead of the indented tree
    #[arg(long)]
    json: bool,

    /// Print text layout draw instructions, wrapping at WIDTH pixels (0 disables wrapping)
    #[arg(long, value_name = "WIDTH", allow_negative_numbers = true)]
    layout: Option<i32>,

    /// Report recovered parse issues on standard error
    #[arg(long)]
    issues: bool,

    /// Only print the subtrees matching `#id`, `.class` or a tag name
    #[arg(long, value_name = "SELECTOR")]
    select: Option<String>,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let (tree, issues) = load_document(&cli)?;
    if cli.issues {
        report_issues(&issues);
    }

    let roots = match &cli.select {
        Some(selector) => tree.query_selector_all(NodeId::ROOT, selector),
        None => vec![NodeId::ROOT],
    };
    debug!("{} nodes parsed, {} selected", tree.len(), roots.len());

    let mut out = io::stdout().lock();
    if let Some(width) = cli.layout {
        print_layout(&mut out, &tree, &roots, width, cli.json)?;
    } else if cli.json {
        print_snapshot(&mut out, &tree, &roots, cli.select.is_some())?;
    } else {
        for &root in &roots {
            write!(out, "{}", tree.pretty_from(root))?;
        }
    }
    out.flush()?;
    Ok(())
}

/// Parse the input named on the command line, keeping every recovered issue.
fn load_document(cli: &Cli) -> Result<(DomTree, Vec<ParseIssue>)> {
    if let Some(markup) = &cli.html {
        return HtmlParser::new(markup.as_bytes())
            .parse_with_issues()
            .context("failed to parse inline markup");
    }
    let Some(path) = &cli.path else {
        anyhow::bail!("a PATH or --html is required");
    };
    parse_file(path)
}

fn parse_file(path: &Path) -> Result<(DomTree, Vec<ParseIssue>)> {
    let file = File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
    HtmlParser::new(BufReader::new(file))
        .parse_with_issues()
        .with_context(|| format!("failed to read {}", path.display()))
}

fn report_issues(issues: &[ParseIssue]) {
    for issue in issues {
        eprintln!("{} {issue}", "warning:".yellow().bold());
    }
    if !issues.is_empty() {
        eprintln!("{} parse issue(s) recovered", issues.len());
    }
}

/// One snapshot for the whole document, or an array with one per match.
fn print_snapshot(
    out: &mut impl Write,
    tree: &DomTree,
    roots: &[NodeId],
    as_list: bool,
) -> Result<()> {
    let snapshots: Vec<NodeSnapshot> = roots.iter().filter_map(|&id| tree.snapshot(id)).collect();
    check_json_depth(&snapshots)?;
    if as_list {
        serde_json::to_writer_pretty(&mut *out, &snapshots)?;
    } else if let Some(snapshot) = snapshots.first() {
        serde_json::to_writer_pretty(&mut *out, snapshot)?;
    }
    writeln!(out)?;
    Ok(())
}

/// JSON serialization recurses once per level of nesting.
fn check_json_depth(snapshots: &[NodeSnapshot]) -> Result<()> {
    if let Some(depth) = snapshots
        .iter()
        .map(NodeSnapshot::depth)
        .find(|&depth| depth > MAX_JSON_DEPTH)
    {
        anyhow::bail!(
            "document nests {depth} levels deep; JSON output supports at most {MAX_JSON_DEPTH}"
        );
    }
    Ok(())
}

/// Each selected subtree is laid out below the previous one.
fn print_layout(
    out: &mut impl Write,
    tree: &DomTree,
    roots: &[NodeId],
    width: i32,
    json: bool,
) -> Result<()> {
    let metrics = ApproximateFontMetrics;
    let ctx = LayoutContext::new(width, &metrics);

    let mut ops: Vec<RenderOp> = Vec::new();
    let mut height = 0;
    for &root in roots {
        let (subtree_ops, subtree_height) = render_from(tree, root, &ctx, &metrics);
        ops.extend(subtree_ops.into_iter().map(|op| RenderOp {
            y: op.y + height,
            ..op
        }));
        height += subtree_height;
    }

    if json {
        serde_json::to_writer_pretty(&mut *out, &ops)?;
        writeln!(out)?;
    } else {
        for op in &ops {
            writeln!(out, "{:>6} {:>4}  {:?}", op.y, op.x, op.text)?;
        }
        writeln!(out, "height: {height}")?;
    }
    Ok(())
}
