//! Read-evaluate-print loop around the core evaluator.

use std::io::{self, BufRead, Write};

use boolex_core::{evaluate_postfix, EvalError, Evaluator, Limits};
use tracing::{debug, info};

use crate::render::Painter;

/// Per-line behaviour selected on the command line.
#[derive(Debug, Clone, Copy, Default)]
pub struct Options {
    /// Print the postfix form before the result.
    pub show_postfix: bool,
    /// Input lines are postfix text rather than infix.
    pub rpn: bool,
}

/// What happened to one input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Quit,
    Skipped,
    Evaluated(bool),
    Failed(EvalError),
}

/// Limits for one session.
///
/// Interactive sessions start from [`Limits::strict`], a single expression
/// from [`Limits::default`]. Values given on the command line replace either.
pub fn session_limits(
    interactive: bool,
    max_len: Option<usize>,
    max_depth: Option<usize>,
) -> Limits {
    let base = if interactive {
        Limits::strict()
    } else {
        Limits::default()
    };
    Limits::new(
        max_len.unwrap_or(base.max_len),
        max_depth.unwrap_or(base.max_depth),
    )
}

/// Process exit status for a single expression: 1 if it failed, else 0.
pub fn exit_status(outcome: &Outcome) -> u8 {
    match outcome {
        Outcome::Failed(_) => 1,
        Outcome::Quit | Outcome::Skipped | Outcome::Evaluated(_) => 0,
    }
}

/// Interactive shell writing results to `out` and errors to `err`.
pub struct Shell<O: Write, E: Write> {
    evaluator: Evaluator,
    options: Options,
    painter: Painter,
    out: O,
    err: E,
}

impl<O: Write, E: Write> Shell<O, E> {
    pub fn new(evaluator: Evaluator, options: Options, painter: Painter, out: O, err: E) -> Self {
        Self {
            evaluator,
            options,
            painter,
            out,
            err,
        }
    }

    pub fn print_banner(&mut self) -> io::Result<()> {
        writeln!(self.out, "{}", self.painter.banner())
    }

    /// Prompt for lines until `q`, `Q` or end of input.
    pub fn run<R: BufRead>(&mut self, mut input: R) -> io::Result<()> {
        let mut line = String::new();
        loop {
            write!(self.out, "\nInput: ")?;
            self.out.flush()?;

            line.clear();
            if input.read_line(&mut line)? == 0 {
                info!("end of input");
                return Ok(());
            }

            if self.eval_line(&line)? == Outcome::Quit {
                writeln!(self.out, "Exiting program...")?;
                return Ok(());
            }
        }
    }

    /// Evaluate one line and report the result.
    ///
    /// Evaluation errors are written to the error stream and returned as
    /// [`Outcome::Failed`]; only I/O failures are `Err`.
    pub fn eval_line(&mut self, line: &str) -> io::Result<Outcome> {
        let line = line.trim();
        match line {
            "q" | "Q" => return Ok(Outcome::Quit),
            "" => return Ok(Outcome::Skipped),
            _ => {}
        }

        match self.evaluate(line)? {
            Ok(value) => {
                writeln!(self.out, "{}", self.painter.separator())?;
                writeln!(self.out, "{}", self.painter.result(value))?;
                Ok(Outcome::Evaluated(value))
            }
            Err(err) => {
                debug!(input = line, error = ?err, "rejected");
                writeln!(self.err, "{}", self.painter.error(&err))?;
                Ok(Outcome::Failed(err))
            }
        }
    }

    fn evaluate(&mut self, line: &str) -> io::Result<Result<bool, EvalError>> {
        if self.options.rpn {
            return Ok(self.evaluator.evaluate_postfix_str(line));
        }
        if !self.options.show_postfix {
            return Ok(self.evaluator.evaluate(line));
        }
        match self.evaluator.postfix(line) {
            Ok(postfix) => {
                writeln!(self.out, "Postfix: {postfix}")?;
                Ok(evaluate_postfix(&postfix))
            }
            Err(err) => Ok(Err(err)),
        }
    }

    /// Consume the shell, returning its output streams.
    #[cfg(test)]
    pub fn into_streams(self) -> (O, E) {
        (self.out, self.err)
    }
}
