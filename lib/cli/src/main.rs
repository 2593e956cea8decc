use std::io;
use std::io::BufRead;
use std::path::PathBuf;

use clap::Parser;
use elapsed::measure_time;
use log::{debug, info};
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};

use truth_nexus_core::{evaluate_formula, Formula, Options, DEFAULT_OPTIONS};

use crate::parsing::{formula_line, read_lines};
use crate::render::{render_summary, render_table};
use crate::report::Report;

mod parsing;
mod render;
mod report;

#[derive(Parser, Debug)]
#[clap(author, version)]
struct Cli {
    /// Formula to evaluate. When absent, formulas are read one per line.
    #[clap(value_name = "FORMULA")]
    formula: Option<String>,

    /// Read formulas from a file instead of stdin.
    #[clap(short, long, parse(from_os_str), value_name = "FILE", conflicts_with = "formula")]
    file: Option<PathBuf>,

    /// Only show the formula column, without subexpressions.
    #[clap(long)]
    no_subexpressions: bool,

    /// Maximum number of distinct variables.
    #[clap(long, value_name = "NUM", default_value_t = DEFAULT_OPTIONS.max_variables)]
    max_vars: usize,

    /// Skip the duplicate-operator and missing-operator checks.
    #[clap(long)]
    no_prevalidate: bool,

    /// Print the postfix sequence and the fully parenthesized formula.
    #[clap(long)]
    explain: bool,

    /// Print a JSON report instead of a text table.
    #[clap(long)]
    json: bool,

    /// Increase log verbosity (-v, -vv, -vvv).
    #[clap(short, long, parse(from_occurrences))]
    verbose: u64,
}

impl Cli {
    fn options(&self) -> Options {
        Options {
            include_subexpressions: !self.no_subexpressions,
            max_variables: self.max_vars,
        }
    }
}

fn log_level(verbose: u64) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    TermLogger::init(log_level(cli.verbose), Config::default(), TerminalMode::Stderr, ColorChoice::Auto)?;
    info!("cli = {:?}", cli);

    let options = cli.options();
    info!("options = {:?}", options);

    if let Some(formula) = &cli.formula {
        if let Err(e) = submit(&cli, &options, formula) {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
        return Ok(());
    }

    let lines: Box<dyn Iterator<Item = io::Result<String>>> = match &cli.file {
        Some(path) => {
            info!("Reading formulas from '{}'", path.display());
            Box::new(read_lines(path)?)
        }
        None => Box::new(io::stdin().lock().lines()),
    };

    for line in lines {
        if let Some(formula) = formula_line(line)? {
            if let Err(e) = submit(&cli, &options, &formula) {
                eprintln!("error: {}", e);
            }
        }
    }

    Ok(())
}

/// Process one formula from scratch and print everything computed for it.
fn submit(cli: &Cli, options: &Options, input: &str) -> color_eyre::Result<()> {
    if input.trim().is_empty() {
        debug!("Empty input, nothing to show");
        return Ok(());
    }

    if !cli.no_prevalidate {
        expr_parser::validate(&expr_parser::normalize(input))?;
    }

    let (elapsed, table) = measure_time(|| evaluate_formula(input, options));
    let table = table?;
    info!("Evaluated {:?} in {}", table.formula(), elapsed);

    let forms = table.normal_forms()?;

    if cli.json {
        let report = Report::new(input, &table, &forms);
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("Formula: {}", table.formula());
    if cli.explain {
        let formula = Formula::parse(input)?;
        println!("Postfix: {}", formula.postfix());
        println!("Grouped: {}", formula.to_expr()?);
    }
    println!("{}", render_table(&table));
    println!("{}", render_summary(table.classify(), &forms));
    println!();

    Ok(())
}
