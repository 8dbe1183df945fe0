use clap::{Parser, Subcommand};
use fuzzilla::index::TrigramIndex;
use fuzzilla::query::parse_query_line;
use fuzzilla::util::truncate_chars;
use serde_json::Value;
use std::fs::File;
use std::io::{BufRead, BufReader};
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(version, about)]
struct Cli {
    #[command(subcommand)]
    cmd: Cmd,
}

#[derive(Subcommand)]
enum Cmd {
    /// Ingest a JSONL file into an in-memory index; optional REPL to query
    Ingest {
        path: String,
        /// JSON field holding the text to index
        #[arg(long, default_value = "text")]
        field: String,
        /// Start interactive REPL after ingest
        #[arg(long)]
        repl: bool,
    },
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();
    match cli.cmd {
        Cmd::Ingest { path, field, repl } => run_ingest(path, field, repl)?,
    }
    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = fmt().with_env_filter(filter).with_target(false).try_init();
}

fn run_ingest(path: String, field: String, repl: bool) -> anyhow::Result<()> {
    let f = File::open(&path)?;
    let br = BufReader::new(f);

    let mut items: Vec<Value> = Vec::new();
    for line in br.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        items.push(serde_json::from_str(&line)?);
    }

    let mut idx = TrigramIndex::new();
    idx.add_all(
        |v: &Value| {
            v.get(&field)
                .and_then(|x| x.as_str())
                .unwrap_or_default()
                .to_string()
        },
        items,
    );
    tracing::info!(docs = idx.len(), grams = idx.gram_count(), "ingested");

    if repl {
        run_repl(&idx);
    }
    Ok(())
}

fn run_repl(idx: &TrigramIndex<Value>) {
    use std::io::{stdin, stdout, Write};
    let mut input = String::new();
    loop {
        input.clear();
        print!("query> ");
        stdout().flush().ok();
        if stdin().read_line(&mut input).is_err() {
            break;
        }
        let s = input.trim();
        if s.is_empty() || s == ":q" || s == ":quit" {
            break;
        }

        let (query, opts) = parse_query_line(s);
        let hits = idx.search(&query, opts);
        if hits.is_empty() {
            println!("no matches");
            continue;
        }
        for (rank, h) in hits.iter().enumerate() {
            println!(
                "{}\t{:.3}\t{}",
                rank + 1,
                h.score,
                truncate_chars(&h.item.to_string(), 80)
            );
        }
    }
}
