// src/cli.rs
use std::{env, error::Error, fs, io::{self, Write}, path::PathBuf};

use log::LevelFilter;

use crate::config::consts::{DEFAULT_LOG_FILE, SIMILARITY_THRESHOLD};
use crate::config::options::{AppOptions, ExportFormat, MatchMode};
use crate::core::net::HttpFetcher;
use crate::direction::Direction;
use crate::error::ScrapeError;
use crate::progress::Progress;
use crate::record::Query;
use crate::scrape::Scraper;

pub enum Command {
    Help,
    Run(CliArgs),
}

#[derive(Debug, Default)]
pub struct CliArgs {
    pub options: AppOptions,
    /// From -t/-a pairs, in order.
    pub queries: Vec<Query>,
    /// CSV/TSV of title[,artist]; appended after -t queries.
    pub input: Option<PathBuf>,
}

pub fn run() -> Result<(), Box<dyn Error>> {
    let args = match parse_args(env::args().skip(1))? {
        Command::Help => {
            eprintln!(include_str!("cli_help.txt"));
            return Ok(());
        }
        Command::Run(a) => a,
    };
    let opts = &args.options;

    match &opts.log.file {
        Some(path) => crate::logging::init_file(path, opts.log.level)?,
        None => crate::logging::init_console(opts.log.level)?,
    }

    let mut queries = args.queries.clone();
    if let Some(path) = &args.input {
        let text = fs::read_to_string(path)
            .map_err(|e| format!("Cannot read {}: {}", path.display(), e))?;
        queries.extend(crate::csv::read_queries(&text, ExportFormat::from_path(path).delim()));
    }
    if queries.is_empty() {
        return Err("No queries: use -t/--track or -i/--input (see --help)".into());
    }

    let scraper = Scraper::new(HttpFetcher::new(&opts.net), opts.scrape.clone());
    let mut progress = ConsoleProgress::default();
    let records = scraper.scrape(&queries, Some(&mut progress));

    match &opts.export.out {
        Some(path) => {
            let written = crate::file::write_export(path, &records, &opts.export)?;
            eprintln!("Wrote {} record(s) to {}", records.len(), written.display());
        }
        None => {
            let stdout = io::stdout();
            let mut out = stdout.lock();
            crate::csv::write_records(&mut out, &records, opts.export.format.delim(), opts.export.include_headers)?;
            out.flush()?;
        }
    }

    if progress.failed > 0 {
        eprintln!("{} of {} quer(ies) failed; see log", progress.failed, queries.len());
    }
    Ok(())
}

pub fn parse_args<I: IntoIterator<Item = String>>(args: I) -> Result<Command, Box<dyn Error>> {
    let mut a = CliArgs::default();
    let opts = &mut a.options;
    let mut args = args.into_iter();

    while let Some(arg) = args.next() {
        match arg.as_str()
        {
            "-t" | "--track" => {
                let v = args.next().ok_or("Missing value for --track")?;
                a.queries.push(Query::new(v, None)); }
            "-a" | "--artist" => {
                let v = args.next().ok_or("Missing value for --artist")?;
                let last = a.queries.last_mut().ok_or("--artist must follow a --track")?;
                *last = Query::new(last.title.clone(), Some(v.as_str())); }
            "-i" | "--input" => a.input = Some(PathBuf::from(args.next().ok_or("Missing input path")?)),
            "--direction" => {
                let v = args.next().ok_or("Missing value for --direction")?;
                opts.scrape.directions = match v.to_ascii_lowercase().as_str() {
                    "both" | "all" => Direction::ALL.to_vec(),
                    other => vec![other.parse::<Direction>()?],
                }; }
            "--match" => {
                let v = args.next().ok_or("Missing value for --match")?;
                opts.scrape.matching = parse_match(&v)?; }
            "--base-url" => opts.scrape.base_url = args.next().ok_or("Missing value for --base-url")?,
            "--page-threshold" => {
                let v: usize = args.next().ok_or("Missing value for --page-threshold")?.parse()?;
                if v == 0 { return Err("--page-threshold must be at least 1".into()); }
                opts.scrape.page_threshold = v; }
            "--retries" => opts.net.retries = args.next().ok_or("Missing value for --retries")?.parse()?,
            "--pause-ms" => opts.net.pause_ms = args.next().ok_or("Missing value for --pause-ms")?.parse()?,
            "--format" => {
                let v = args.next().ok_or("Missing value for --format")?;
                opts.export.format = match v.to_ascii_lowercase().as_str() {
                    "csv" => ExportFormat::Csv,
                    "tsv" => ExportFormat::Tsv,
                    other => return Err(format!("Unknown format: {}", other).into()),
                }; }
            "-o" | "--out" => opts.export.out = Some(PathBuf::from(args.next().ok_or("Missing output path")?)),
            "--no-headers" => opts.export.include_headers = false,
            "--log-file" => opts.log.file = Some(PathBuf::from(args.next().ok_or("Missing log file path")?)),
            "--dump-pages" => opts.scrape.dump_dir = Some(PathBuf::from(args.next().ok_or("Missing dump directory")?)),
            "--debug" => {
                opts.log.level = LevelFilter::Debug;
                opts.log.file.get_or_insert_with(|| PathBuf::from(DEFAULT_LOG_FILE)); }
            "-v" | "--verbose" => opts.log.level = LevelFilter::Debug,
            "-h" | "--help" => return Ok(Command::Help),
            _ => return Err(format!("Unknown arg: {}", arg).into()),
        }
    }

    Ok(Command::Run(a))
}

/// "first" | "similar" | "similar:0.9"
fn parse_match(s: &str) -> Result<MatchMode, Box<dyn Error>> {
    let s = s.trim().to_ascii_lowercase();
    if s == "first" {
        return Ok(MatchMode::First);
    }
    match s.split_once(':') {
        None if s == "similar" => Ok(MatchMode::Similarity(SIMILARITY_THRESHOLD)),
        Some(("similar", t)) => {
            let t: f64 = t.parse()?;
            if !(0.0..=1.0).contains(&t) {
                return Err(format!("Similarity threshold out of range (0..1): {}", t).into());
            }
            Ok(MatchMode::Similarity(t))
        }
        _ => Err(format!("Unknown match mode: {}", s).into()),
    }
}

/// Status lines on stderr so stdout stays clean for records.
#[derive(Default)]
struct ConsoleProgress {
    total: usize,
    failed: usize,
}

impl Progress for ConsoleProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
    }
    fn item_done(&mut self, index: usize, query: &Query, records: usize) {
        eprintln!("[{}/{}] {}: {} record(s)", index + 1, self.total, query.describe(), records);
    }
    fn item_failed(&mut self, index: usize, query: &Query, error: &ScrapeError) {
        self.failed += 1;
        eprintln!("[{}/{}] {}: FAILED ({})", index + 1, self.total, query.describe(), error);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> CliArgs {
        match parse_args(list.iter().map(|s| s.to_string())).unwrap() {
            Command::Run(a) => a,
            Command::Help => panic!("unexpected help"),
        }
    }

    #[test]
    fn tracks_pair_with_following_artist() {
        let a = args(&["-t", "Halftime", "-a", "Nas", "--track", "Paid in Full"]);
        assert_eq!(a.queries, vec![Query::new("Halftime", Some("Nas")), Query::new("Paid in Full", None)]);
    }

    #[test]
    fn artist_without_track_is_rejected() {
        assert!(parse_args(vec![s!("-a"), s!("Nas")]).is_err());
    }

    #[test]
    fn direction_and_match_modes() {
        let a = args(&["-t", "x", "--direction", "sampled", "--match", "similar:0.9", "--format", "tsv"]);
        assert_eq!(a.options.scrape.directions, vec![Direction::WasSampledIn]);
        assert_eq!(a.options.scrape.matching, MatchMode::Similarity(0.9));
        assert_eq!(a.options.export.format, ExportFormat::Tsv);
        assert!(parse_match("similar:2").is_err());
        assert_eq!(parse_match("similar").unwrap(), MatchMode::Similarity(SIMILARITY_THRESHOLD));
    }

    #[test]
    fn dump_pages_goes_to_scrape_options() {
        let a = args(&["-t", "x", "--dump-pages", ".store/pages", "--log-file", "run.log"]);
        assert_eq!(a.options.scrape.dump_dir, Some(PathBuf::from(".store/pages")));
        assert_eq!(a.options.log.file, Some(PathBuf::from("run.log")));
    }

    #[test]
    fn debug_defaults_log_file() {
        let a = args(&["--debug"]);
        assert_eq!(a.options.log.level, LevelFilter::Debug);
        assert_eq!(a.options.log.file, Some(PathBuf::from(DEFAULT_LOG_FILE)));
        assert!(matches!(parse_args(vec![s!("--help")]).unwrap(), Command::Help));
    }
}
