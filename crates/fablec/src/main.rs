#![doc = include_str!("../README.md")]

use crate::args::Args;
use clap::Parser;
use eyre::WrapErr;
use fable_ast::visitor::{walk_node, Visitor};
use fable_ast::Node;
use fable_parsing::{nest_blocks, parse, tokenize};
use fable_tokens::spanned::Spanned;
use fable_tokens::token::Token;
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;
use std::convert::Infallible;
use std::fmt::Write as _;
use std::io::{stderr, Read};
use std::path::Path;
use tracing::level_filters::LevelFilter;
use tracing::{debug, info, trace};
use tracing_error::ErrorLayer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::{Layer, Registry};

mod args;

fn main() -> eyre::Result<()> {
    color_eyre::install()?;
    let args = Args::parse();
    init_logging(args.log_level_filter())?;
    trace!("starting fablec with args: {args:?}");
    debug!("fablec version: {}", env!("CARGO_PKG_VERSION"));

    let source = match args.source_file() {
        Some(path) => read_source(path)?,
        None => {
            let mut source = String::new();
            std::io::stdin()
                .read_to_string(&mut source)
                .wrap_err("could not read source from stdin")?;
            source
        }
    };
    print!("{}", render(&source, args.tokens, args.nest)?);
    Ok(())
}

fn read_source(path: &Path) -> eyre::Result<String> {
    info!("reading {path:?}");
    std::fs::read_to_string(path).wrap_err_with(|| format!("could not read {path:?}"))
}

/// Tokenizes and parses the source, rendering the tokens if requested followed by the tree
fn render(source: &str, show_tokens: bool, nest: bool) -> eyre::Result<String> {
    let mut output = String::new();
    let tokens = tokenize(source);
    if show_tokens {
        for token in &tokens {
            writeln!(output, "{}", render_token(token))?;
        }
        writeln!(output)?;
    }

    let mut program = parse(&tokens);
    if nest {
        program = nest_blocks(program).wrap_err("could not nest blocks")?;
    }
    let mut counter = NodeCounter::default();
    counter.visit_node(&program)?;
    debug!(
        "{} statements, {} nodes in total",
        program.children().len(),
        counter.0
    );
    write!(output, "{program}")?;
    Ok(output)
}

fn render_token(token: &Token) -> String {
    let span = token.span();
    format!(
        "{:<8} {:>5}..{:<5} {:?}",
        token
            .kind()
            .if_supports_color(Stdout, |kind| kind.cyan())
            .to_string(),
        span.offset(),
        span.end().offset(),
        token.text()
    )
}

/// Counts every node of a tree
#[derive(Default)]
struct NodeCounter(usize);

impl Visitor for NodeCounter {
    type Err = Infallible;

    fn visit_node(&mut self, node: &Node) -> Result<(), Self::Err> {
        self.0 += 1;
        walk_node(self, node)
    }
}

fn init_logging(level_filter: LevelFilter) -> eyre::Result<()> {
    let registry = Registry::default()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(stderr)
                .with_filter(level_filter),
        )
        .with(ErrorLayer::default());

    tracing::subscriber::set_global_default(registry)?;

    Ok(())
}
