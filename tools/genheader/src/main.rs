// genheader: expand header templates with the generated zhuyin lookup tables.
//
// Two table families are produced: the pinyin parser tables (canonical
// content table plus four indexes) and the per-layout keyboard symbol/tone
// tables. Each subcommand expands one template; the built-in templates are
// used unless --template points at another.

use std::fs;
use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use zhuyin_tables::{correct, render, Layout, TableSet};

const PINYIN_TEMPLATE: &str = include_str!("../templates/pinyin_parser_table.h.in");
const BOPOMOFO_TEMPLATE: &str = include_str!("../templates/chewing_table.h.in");

#[derive(Parser)]
#[command(name = "genheader", about = "Generate zhuyin lookup-table headers")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate the pinyin parser table header.
    Pinyin {
        /// Template file; defaults to the built-in one.
        #[arg(long)]
        template: Option<PathBuf>,
        /// Output file; defaults to stdout.
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Generate the keyboard symbol/tone table header.
    Bopomofo {
        #[arg(long)]
        template: Option<PathBuf>,
        #[arg(long)]
        output: Option<PathBuf>,
    },
}

fn pinyin_block(tables: &TableSet, name: &str) -> Option<String> {
    match name {
        "CONTENT_TABLE" => Some(render::content_table(tables)),
        "HANYU_PINYIN_INDEX" => Some(render::index_table(&tables.hanyu_index)),
        "LUOMA_PINYIN_INDEX" => Some(render::index_table(&tables.luoma_index)),
        "BOPOMOFO_INDEX" => Some(render::index_table(&tables.bopomofo_index)),
        "SECONDARY_BOPOMOFO_INDEX" => Some(render::index_table(&tables.second_index)),
        _ => None,
    }
}

fn bopomofo_block(name: &str) -> Option<String> {
    let (scheme, part) = name.split_once('_')?;
    let layout = Layout::from_name(scheme)?;
    match part {
        "SYMBOLS" => Some(render::keyboard_symbols(layout)),
        "TONES" => Some(render::keyboard_tones(layout)),
        _ => None,
    }
}

fn load_template(path: Option<&PathBuf>, builtin: &str) -> Result<String> {
    match path {
        Some(p) => {
            fs::read_to_string(p).with_context(|| format!("reading template {}", p.display()))
        }
        None => Ok(builtin.to_string()),
    }
}

fn emit(text: &str, output: Option<&PathBuf>) -> Result<()> {
    match output {
        Some(p) => {
            fs::write(p, text).with_context(|| format!("writing {}", p.display()))
        }
        None => {
            std::io::stdout()
                .write_all(text.as_bytes())
                .context("writing to stdout")
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Command::Pinyin { template, output } => {
            let tables = TableSet::build().context("building pinyin tables")?;
            let template = load_template(template.as_ref(), PINYIN_TEMPLATE)?;
            let text = render::expand_template(&template, |name| pinyin_block(&tables, name))
                .context("expanding pinyin template")?;
            emit(&text, output.as_ref())
        }
        Command::Bopomofo { template, output } => {
            correct::validate_all().context("validating correction rules")?;
            let template = load_template(template.as_ref(), BOPOMOFO_TEMPLATE)?;
            let text = render::expand_template(&template, bopomofo_block)
                .context("expanding keyboard template")?;
            emit(&text, output.as_ref())
        }
    }
}
