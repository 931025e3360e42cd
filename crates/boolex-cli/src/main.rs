mod render;
mod shell;

use std::io::{self, IsTerminal};
use std::process::ExitCode;

use anyhow::{Context, Result};
use boolex_core::Evaluator;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::render::Painter;
use crate::shell::{exit_status, session_limits, Options, Shell};

/// Evaluate Boolean expressions over T and F with & (AND), | (OR),
/// @ (NAND), $ (XOR) and ! (NOT).
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Evaluate this expression and exit instead of starting the shell.
    expression: Option<String>,

    /// Print the postfix form of each expression before its result.
    #[arg(short, long)]
    postfix: bool,

    /// Read expressions in postfix form, e.g. `T F & !`.
    #[arg(short, long, conflicts_with = "postfix")]
    rpn: bool,

    /// Disable colored output.
    #[arg(long)]
    no_color: bool,

    /// Skip the banner in interactive mode.
    #[arg(short, long)]
    quiet: bool,

    /// Reject expressions longer than this many bytes
    /// [default: 512 interactive, 4096 single-shot].
    #[arg(long)]
    max_len: Option<usize>,

    /// Reject expressions nesting parentheses deeper than this
    /// [default: 32 interactive, 256 single-shot].
    #[arg(long)]
    max_depth: Option<usize>,
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(env_filter)
        .init();
}

fn main() -> Result<ExitCode> {
    init_tracing();
    let args = Args::parse();

    let interactive = args.expression.is_none();
    let evaluator =
        Evaluator::with_limits(session_limits(interactive, args.max_len, args.max_depth));
    let options = Options {
        show_postfix: args.postfix,
        rpn: args.rpn,
    };
    let color = !args.no_color && io::stdout().is_terminal();
    let painter = Painter::detect(color);
    tracing::debug!(?args, limits = ?evaluator.limits(), color, "starting");

    let mut shell = Shell::new(evaluator, options, painter, io::stdout(), io::stderr());

    if let Some(expression) = args.expression {
        let outcome = shell
            .eval_line(&expression)
            .context("failed to write result")?;
        return Ok(ExitCode::from(exit_status(&outcome)));
    }

    if !args.quiet {
        shell.print_banner().context("failed to write banner")?;
    }
    shell
        .run(io::stdin().lock())
        .context("interactive session failed")?;

    Ok(ExitCode::SUCCESS)
}
