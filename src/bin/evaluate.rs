//! One-shot layout scoring CLI.
//!
//! Reads a layout JSON document and prints its metrics record as JSON.
//! In batch mode the input is JSONL, one layout per line, scored in
//! parallel; each output line is a report or `{"error": "..."}`.
//!
//! Usage:
//!   cargo run --release --bin evaluate -- [OPTIONS]
//!
//! Options:
//!   --input FILE        Layout file (default: stdin)
//!   --output FILE       Output file path (default: stdout)
//!   --policy FILE       JSON object of desired-size fractions per type
//!   --desired TYPE=F    Set one desired-size fraction (repeatable)
//!   --batch             Treat input as JSONL, one layout per line
//!   --threads N         Worker threads for batch mode (default: rayon's)
//!   --pretty            Pretty-print single reports

use std::env;
use std::fs::{self, File};
use std::io::{self, BufWriter, Read, Write};
use std::path::PathBuf;
use std::process;

use tracing_subscriber::EnvFilter;

use floorscore::{evaluate_batch, evaluate_with_policy, Layout, PlanError, SizePolicy};

struct Options {
    input: Option<PathBuf>,
    output: Option<PathBuf>,
    policy: SizePolicy,
    batch: bool,
    threads: Option<usize>,
    pretty: bool,
}

fn fail(msg: &str) -> ! {
    eprintln!("evaluate: {}", msg);
    process::exit(1);
}

/// Returns the value following flag `args[*i]`, advancing `i`.
fn flag_value<'a>(args: &'a [String], i: &mut usize) -> &'a str {
    let flag = &args[*i];
    *i += 1;
    match args.get(*i) {
        Some(v) => v.as_str(),
        None => fail(&format!("missing value for {}", flag)),
    }
}

fn parse_args(args: &[String]) -> Options {
    let mut opts = Options {
        input: None,
        output: None,
        policy: SizePolicy::default(),
        batch: false,
        threads: None,
        pretty: false,
    };

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--input" => {
                opts.input = Some(PathBuf::from(flag_value(args, &mut i)));
            }
            "--output" => {
                opts.output = Some(PathBuf::from(flag_value(args, &mut i)));
            }
            "--policy" => {
                let path = PathBuf::from(flag_value(args, &mut i));
                opts.policy = SizePolicy::load(&path).unwrap_or_else(|e| fail(&e.to_string()));
            }
            "--desired" => {
                let assignment = flag_value(args, &mut i);
                if let Err(e) = opts.policy.apply_assignment(assignment) {
                    fail(&e.to_string());
                }
            }
            "--batch" => {
                opts.batch = true;
            }
            "--threads" => {
                let v = flag_value(args, &mut i);
                match v.parse::<usize>() {
                    Ok(n) if n > 0 => opts.threads = Some(n),
                    _ => fail(&format!("invalid --threads value: '{}'", v)),
                }
            }
            "--pretty" => {
                opts.pretty = true;
            }
            "--help" | "-h" => {
                print_usage();
                process::exit(0);
            }
            other => {
                eprintln!("Unknown argument: {}", other);
                print_usage();
                process::exit(1);
            }
        }
        i += 1;
    }
    opts
}

fn read_input(path: &Option<PathBuf>) -> io::Result<String> {
    match path {
        Some(p) => fs::read_to_string(p),
        None => {
            let mut s = String::new();
            io::stdin().lock().read_to_string(&mut s)?;
            Ok(s)
        }
    }
}

/// Scores every non-empty input line, keeping input order.
fn run_batch(input: &str, opts: &Options, out: &mut dyn Write) -> io::Result<usize> {
    let parsed: Vec<Result<Layout, PlanError>> = input
        .lines()
        .filter(|l| !l.trim().is_empty())
        .map(Layout::from_json)
        .collect();
    let layouts: Vec<Layout> = parsed.iter().filter_map(|r| r.as_ref().ok().cloned()).collect();

    let scored = match opts.threads {
        Some(n) => {
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(n)
                .build()
                .map_err(|e| io::Error::new(io::ErrorKind::Other, e.to_string()))?;
            pool.install(|| evaluate_batch(&layouts, &opts.policy))
        }
        None => evaluate_batch(&layouts, &opts.policy),
    };

    let mut scored = scored.into_iter();
    let mut failures = 0;
    for p in parsed {
        let result = p.and_then(|_| {
            scored
                .next()
                .unwrap_or(Err(PlanError::Json("missing batch result".to_string())))
        });
        let line = match result {
            Ok(report) => serde_json::to_string(&report)?,
            Err(e) => {
                failures += 1;
                serde_json::json!({ "error": e.to_string() }).to_string()
            }
        };
        writeln!(out, "{}", line)?;
    }
    Ok(failures)
}

fn run_single(input: &str, opts: &Options, out: &mut dyn Write) -> io::Result<()> {
    let report = Layout::from_json(input)
        .and_then(|layout| evaluate_with_policy(&layout, &opts.policy))
        .unwrap_or_else(|e| fail(&e.to_string()));
    let json = if opts.pretty {
        serde_json::to_string_pretty(&report)?
    } else {
        serde_json::to_string(&report)?
    };
    writeln!(out, "{}", json)
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args: Vec<String> = env::args().collect();
    let opts = parse_args(&args);

    let input = read_input(&opts.input).unwrap_or_else(|e| fail(&format!("failed to read input: {}", e)));

    let mut writer: BufWriter<Box<dyn Write>> = match &opts.output {
        Some(path) => match File::create(path) {
            Ok(f) => BufWriter::new(Box::new(f) as Box<dyn Write>),
            Err(e) => fail(&format!("failed to create {}: {}", path.display(), e)),
        },
        None => BufWriter::new(Box::new(io::stdout()) as Box<dyn Write>),
    };

    let written = if opts.batch {
        run_batch(&input, &opts, &mut writer).map(|failures| {
            if failures > 0 {
                eprintln!("evaluate: {} layout(s) rejected", failures);
            }
        })
    } else {
        run_single(&input, &opts, &mut writer)
    };

    if let Err(e) = written.and_then(|_| writer.flush()) {
        fail(&format!("failed to write output: {}", e));
    }
}

fn print_usage() {
    eprintln!("Usage: evaluate [OPTIONS]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --input FILE       Layout file (default: stdin)");
    eprintln!("  --output FILE      Output file path (default: stdout)");
    eprintln!("  --policy FILE      JSON object of desired-size fractions per type");
    eprintln!("  --desired TYPE=F   Set one desired-size fraction (repeatable)");
    eprintln!("  --batch            Treat input as JSONL, one layout per line");
    eprintln!("  --threads N        Worker threads for batch mode");
    eprintln!("  --pretty           Pretty-print single reports");
    eprintln!("  --help             Show this help");
}
