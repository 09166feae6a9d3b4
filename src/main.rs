use std::io;
use std::io::Write;

use menagerie::config::DemoConfig;
use menagerie::config::default_map_entries;
use menagerie::data_file;
use menagerie::demo::Demonstrator;
use menagerie::demo::ListDemo;
use menagerie::demo::MapDemo;
use menagerie::demo::QueueDemo;
use menagerie::demo::SetDemo;
use menagerie::demo::run_demo;
use menagerie::error::DemoError;
use menagerie::linked_map::LinkedMap;
use menagerie::timing::Transcript;
use menagerie::Record;
use rustc_hash::FxHashMap;
use tracing_subscriber::EnvFilter;

/// Log filter from `RUST_LOG`-style directives, `info` when unset or invalid.
fn log_filter(directives: Option<&str>) -> EnvFilter {
    return directives
        .filter(|directives| !directives.trim().is_empty())
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new("info"));
}

/// Run one demonstrator. A failed snapshot save is logged and the run goes
/// on; a failed transcript write ends it.
fn attempt<D: Demonstrator, W: Write>(demo: &mut D, out: &mut Transcript<W>) -> anyhow::Result<()> {
    return match run_demo(demo, out) {
        Ok(()) => Ok(()),
        Err(DemoError::DataFile(error)) => {
            tracing::warn!(demo = %demo.name(), %error, "could not save sorted snapshot");
            Ok(())
        }
        Err(error) => Err(error.into()),
    };
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(log_filter(std::env::var(EnvFilter::DEFAULT_ENV).ok().as_deref()))
        .init();

    let config = DemoConfig::from_env();
    tracing::info!(
        data = %config.data_path.display(),
        target = %config.char_target,
        "loading character data"
    );

    let chars: Vec<char> = match data_file::load(&config.data_path) {
        Ok(chars) => chars,
        Err(error) => {
            tracing::error!(%error, "could not load character data, continuing with none");
            Vec::new()
        }
    };

    let stdout = io::stdout();
    let mut out = Transcript::new(stdout.lock());

    let mut list = ListDemo::new(config.char_target, chars.clone(), config.snapshot_path.clone());
    attempt(&mut list, &mut out)?;

    let mut queue = QueueDemo::new(config.char_target, chars.clone(), config.snapshot_path.clone());
    attempt(&mut queue, &mut out)?;

    let mut set = SetDemo::new(config.char_target, chars, config.snapshot_path.clone());
    attempt(&mut set, &mut out)?;

    let mut hash_map: MapDemo<FxHashMap<Record, String>> =
        MapDemo::new(default_map_entries(), config.map.clone());
    attempt(&mut hash_map, &mut out)?;

    let mut linked_map: MapDemo<LinkedMap<Record, String>> =
        MapDemo::new(default_map_entries(), config.map.clone());
    attempt(&mut linked_map, &mut out)?;

    let summary = out.report();
    out.line(format_args!("\n{}", summary))?;
    return Ok(());
}
