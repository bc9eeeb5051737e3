//! wikitables CLI
//!
//! Command-line tool for reading wiki markup tables into JSON and CSV.

mod logger;

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use wikitables_core::{
    import_article, import_tables, parse_title, Catalog, DirectorySource, Error, ReadContext,
    ReaderOptions, Table,
};

#[derive(Parser)]
#[command(name = "wikitables")]
#[command(about = "Import tables from wiki markup as JSON or CSV", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Language of the articles and of localized names
    #[arg(long, global = true, default_value = "en")]
    lang: String,

    /// Reader options file (JSON)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Directory of `<lang>.json` name catalogs
    #[arg(long, global = true)]
    locales: Option<PathBuf>,

    /// Log debug output to stderr
    #[arg(long, global = true)]
    debug: bool,
}

/// Where article wikitext comes from
#[derive(Args)]
#[group(required = true, multiple = false)]
struct Input {
    /// Read wikitext from a file
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Directory of `<title>.wiki` articles
    #[arg(short, long)]
    source: Option<PathBuf>,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Csv,
    Json,
}

impl Format {
    fn extension(self) -> &'static str {
        match self {
            Format::Csv => "csv",
            Format::Json => "json",
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Print an article's tables as JSON
    Show {
        /// Article title or URL
        article: String,

        #[command(flatten)]
        input: Input,

        /// Only show the table at this index
        #[arg(short, long)]
        table: Option<usize>,

        /// Replacement header for the selected table (JSON list)
        #[arg(long, requires = "table")]
        head: Option<String>,

        /// Pretty-print the JSON
        #[arg(short, long)]
        pretty: bool,
    },

    /// List an article's tables with their sizes
    Tables {
        /// Article title or URL
        article: String,

        #[command(flatten)]
        input: Input,
    },

    /// Write each table of an article to its own file
    Export {
        /// Article title or URL
        article: String,

        #[command(flatten)]
        input: Input,

        /// Output directory
        #[arg(short, long)]
        output: PathBuf,

        /// Output format
        #[arg(long, value_enum, default_value = "csv")]
        format: Format,
    },

    /// Export every article of a directory source
    Batch {
        /// Directory of `<title>.wiki` articles
        #[arg(short, long)]
        source: PathBuf,

        /// Output directory
        #[arg(short, long)]
        output: PathBuf,

        /// Output format
        #[arg(long, value_enum, default_value = "csv")]
        format: Format,
    },
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> wikitables_core::Result<()> {
    let cli = Cli::parse();
    logger::init(cli.debug);
    let ctx = build_context(&cli)?;

    match &cli.command {
        Commands::Show {
            article,
            input,
            table,
            head,
            pretty,
        } => cmd_show(&ctx, article, input, *table, head.as_deref(), *pretty),
        Commands::Tables { article, input } => cmd_tables(&ctx, article, input),
        Commands::Export {
            article,
            input,
            output,
            format,
        } => cmd_export(&ctx, article, input, output, *format),
        Commands::Batch {
            source,
            output,
            format,
        } => cmd_batch(&ctx, source, output, *format),
    }
}

fn build_context(cli: &Cli) -> wikitables_core::Result<ReadContext> {
    let mut ctx = ReadContext::new(&cli.lang);
    if let Some(path) = &cli.config {
        ctx = ctx.with_options(ReaderOptions::load(path)?);
    }
    if let Some(dir) = &cli.locales {
        ctx = ctx.with_catalog(Catalog::load(dir, &cli.lang)?);
    }
    Ok(ctx)
}

fn load_tables(ctx: &ReadContext, article: &str, input: &Input) -> wikitables_core::Result<Vec<Table>> {
    match (&input.file, &input.source) {
        (Some(path), _) => {
            let body = fs::read_to_string(path).map_err(|e| Error::FileRead {
                path: path.clone(),
                source: e,
            })?;
            import_tables(&parse_title(article), &body, ctx)
        }
        (None, Some(root)) => {
            let source = DirectorySource::new(root).with_lang(ctx.lang());
            import_article(&source, article, ctx)
        }
        (None, None) => Err(Error::ArticleNotFound(article.to_string())),
    }
}

fn cmd_show(
    ctx: &ReadContext,
    article: &str,
    input: &Input,
    index: Option<usize>,
    head: Option<&str>,
    pretty: bool,
) -> wikitables_core::Result<()> {
    let mut tables = load_tables(ctx, article, input)?;

    if let Some(idx) = index {
        let name = format!("{}[{}]", parse_title(article), idx);
        if idx >= tables.len() {
            return Err(Error::TableNotFound(name));
        }
        let mut table = tables.swap_remove(idx);
        if let Some(head) = head {
            table.set_head_json(&serde_json::from_str(head)?)?;
        }
        tables = vec![table];
    }

    let mut out = serde_json::Map::new();
    for table in &tables {
        out.insert(table.name().to_string(), serde_json::to_value(table)?);
    }
    let out = serde_json::Value::Object(out);

    if pretty {
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        println!("{}", serde_json::to_string(&out)?);
    }

    Ok(())
}

fn cmd_tables(ctx: &ReadContext, article: &str, input: &Input) -> wikitables_core::Result<()> {
    let tables = load_tables(ctx, article, input)?;

    println!("Tables ({}):", tables.len());
    println!();

    for table in &tables {
        println!(
            "  {} ({} columns, {} rows)",
            table.name(),
            table.column_count(),
            table.row_count()
        );
        if !table.head().is_empty() {
            println!("    {}", table.head().join(" | "));
        }
    }

    Ok(())
}

fn cmd_export(
    ctx: &ReadContext,
    article: &str,
    input: &Input,
    output: &Path,
    format: Format,
) -> wikitables_core::Result<()> {
    let tables = load_tables(ctx, article, input)?;
    let written = export_tables(&tables, output, format)?;

    println!("Exported {} tables to {}", written, output.display());

    Ok(())
}

fn cmd_batch(
    ctx: &ReadContext,
    root: &Path,
    output: &Path,
    format: Format,
) -> wikitables_core::Result<()> {
    let source = DirectorySource::new(root).with_lang(ctx.lang());
    let titles = source.titles()?;

    println!("Running batch over {} articles", titles.len());
    println!("Source: {}", root.display());
    println!("Output: {}", output.display());
    println!();

    let mut total_tables = 0;
    let mut errors = Vec::new();

    for title in &titles {
        let tables = match import_article(&source, title, ctx) {
            Ok(t) => t,
            Err(e) => {
                errors.push((title.clone(), e.to_string()));
                continue;
            }
        };

        match export_tables(&tables, output, format) {
            Ok(written) => {
                total_tables += written;
                println!("  {}: wrote {} tables", title, written);
            }
            Err(e) => errors.push((title.clone(), e.to_string())),
        }
    }

    println!();
    println!("Batch complete:");
    println!("  {} total tables written", total_tables);

    if !errors.is_empty() {
        println!("\nErrors ({}):", errors.len());
        for (title, error) in &errors {
            println!("  {}: {}", title, error);
        }
    }

    Ok(())
}

/// Write one file per table, returning how many were written
fn export_tables(tables: &[Table], output: &Path, format: Format) -> wikitables_core::Result<usize> {
    fs::create_dir_all(output)?;

    for table in tables {
        let path = output.join(format!("{}.{}", file_stem(table.name()), format.extension()));
        let mut writer = BufWriter::new(File::create(&path)?);

        match format {
            Format::Csv => table.write_csv(&mut writer)?,
            Format::Json => writeln!(writer, "{}", table.to_json_pretty()?)?,
        }
        writer.flush()?;
        log::debug!("{}: wrote {}", table.name(), path.display());
    }

    Ok(tables.len())
}

/// Table name made safe for use as a file name
fn file_stem(name: &str) -> String {
    name.chars()
        .map(|c| match c {
            '/' | '\\' | ':' | ' ' => '_',
            c => c,
        })
        .collect()
}
