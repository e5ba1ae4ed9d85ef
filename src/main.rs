//! wikidoc — generate MediaWiki documentation pages from annotated Lua modules.
//!
//! Two modes:
//!
//! - **single module**: `wikidoc Array` (or `wikidoc path/to/Array.lua`)
//! - **all modules**: `wikidoc` processes every file matching the configured
//!   pattern in the source directory
//!
//! Settings come from `wikidoc.toml` (see [`config::Config`]) and flags.

mod config;
mod hierarchy;
mod model;
mod parser;
mod render;
mod text;
mod toc;

use anyhow::{bail, Context, Result};
use clap::{ArgAction, Parser};
use config::Config;
use render::{Format, Renderer};
use std::fs;
use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "wikidoc",
    version,
    about = "Generate MediaWiki documentation pages from annotated Lua modules"
)]
struct Cli {
    /// Module name (looked up as <source>/<MODULE>.lua) or path to a Lua file.
    /// If omitted, every module in the source directory is processed.
    module: Option<String>,

    /// Config file (default: ./wikidoc.toml when present)
    #[arg(short = 'c', long)]
    config: Option<PathBuf>,

    /// Source directory containing Lua modules
    #[arg(short = 's', long)]
    source: Option<PathBuf>,

    /// Output directory
    #[arg(short = 'o', long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short = 'f', long, value_enum)]
    format: Option<Format>,

    /// Output file extension (e.g. wiki, html)
    #[arg(short = 'e', long)]
    extension: Option<String>,

    /// Print rendered pages to stdout instead of writing files
    #[arg(long)]
    stdout: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long, action = ArgAction::Count)]
    verbose: u8,

    /// Only log errors
    #[arg(short = 'q', long, conflicts_with = "verbose")]
    quiet: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    let mut config = Config::load(cli.config.as_deref())?;
    apply_overrides(&mut config, &cli);

    let generator = Generator::new(&config, cli.stdout);
    if !cli.stdout {
        fs::create_dir_all(&config.output_dir).with_context(|| {
            format!(
                "failed to create output directory: {}",
                config.output_dir.display()
            )
        })?;
    }

    match cli.module.as_deref() {
        Some(module) => {
            let path = resolve_module(&config.source_dir, module);
            generator.generate(&path)?;
            Ok(())
        }
        None => run_all(&generator, &config),
    }
}

/// `RUST_LOG` wins over the flags when set.
fn init_logging(verbose: u8, quiet: bool) {
    let level = if quiet {
        "error"
    } else {
        match verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .without_time()
        .init();
}

fn apply_overrides(config: &mut Config, cli: &Cli) {
    if let Some(ref source) = cli.source {
        config.source_dir = source.clone();
    }
    if let Some(ref output) = cli.output {
        config.output_dir = output.clone();
    }
    if let Some(format) = cli.format {
        config.format = format;
    }
    if let Some(ref ext) = cli.extension {
        config.extension = Some(ext.clone());
    }
}

/// What happened to one module.
#[derive(Debug, PartialEq, Eq)]
enum Outcome {
    Written,
    Printed,
    /// No documented functions; nothing emitted
    Empty,
}

/// One configured parse → sort → render → write pipeline.
struct Generator<'a> {
    config: &'a Config,
    renderer: Box<dyn Renderer>,
    extension: String,
    to_stdout: bool,
}

impl<'a> Generator<'a> {
    fn new(config: &'a Config, to_stdout: bool) -> Self {
        let renderer = render::create_renderer(config.format, &config.template);
        let extension = config
            .extension
            .clone()
            .unwrap_or_else(|| renderer.file_extension().to_string());
        Self {
            config,
            renderer,
            extension,
            to_stdout,
        }
    }

    fn generate(&self, path: &Path) -> Result<Outcome> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let name = module_name(path);

        let mut module = parser::parse(&name, &content, self.config.lookahead);
        if module.functions.is_empty() {
            tracing::warn!(module = %name, "no documented functions found, skipping");
            return Ok(Outcome::Empty);
        }
        hierarchy::sort(&mut module);

        let output = self.renderer.render(&module)?;
        if self.to_stdout {
            print!("{}", output);
            return Ok(Outcome::Printed);
        }

        let out_path = self
            .config
            .output_dir
            .join(format!("{}.{}", name, self.extension));
        fs::write(&out_path, &output)
            .with_context(|| format!("failed to write {}", out_path.display()))?;
        tracing::info!(
            module = %name,
            functions = module.functions.len(),
            path = %out_path.display(),
            "wrote documentation"
        );
        Ok(Outcome::Written)
    }
}

/// Process every module; per-module failures are logged and counted.
fn run_all(generator: &Generator, config: &Config) -> Result<()> {
    let files = discover_modules(&config.source_dir, &config.pattern)?;
    if files.is_empty() {
        tracing::warn!(
            source = %config.source_dir.display(),
            pattern = %config.pattern,
            "no modules matched"
        );
        return Ok(());
    }

    let mut written = 0;
    let mut empty = 0;
    let mut failed = 0;
    for path in &files {
        match generator.generate(path) {
            Ok(Outcome::Written | Outcome::Printed) => written += 1,
            Ok(Outcome::Empty) => empty += 1,
            Err(e) => {
                tracing::error!("{:#}", e);
                failed += 1;
            }
        }
    }
    tracing::info!(written, empty, failed, "done");

    if failed > 0 {
        bail!("{} of {} modules failed", failed, files.len());
    }
    Ok(())
}

/// Expand `pattern` inside `source_dir` into a sorted list of files.
fn discover_modules(source_dir: &Path, pattern: &str) -> Result<Vec<PathBuf>> {
    if !source_dir.is_dir() {
        bail!("source directory not found: {}", source_dir.display());
    }
    let full = source_dir.join(pattern);
    let full = full.to_string_lossy();
    let mut files: Vec<PathBuf> = glob::glob(&full)
        .with_context(|| format!("invalid glob pattern: {}", pattern))?
        .filter_map(|r| r.ok())
        .filter(|p| p.is_file())
        .collect();
    // Sort for deterministic output
    files.sort();
    files.dedup();
    Ok(files)
}

/// A module argument is either a path to an existing file or a bare name
/// looked up in the source directory.
fn resolve_module(source_dir: &Path, module: &str) -> PathBuf {
    let direct = Path::new(module);
    if direct.is_file() {
        return direct.to_path_buf();
    }
    if module.ends_with(".lua") {
        source_dir.join(module)
    } else {
        source_dir.join(format!("{}.lua", module))
    }
}

/// Module name from a source path: "lua/Array.lua" → "Array".
fn module_name(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| path.to_string_lossy().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn module_name_from_lua() {
        assert_eq!(module_name(Path::new("lua/Array.lua")), "Array");
        assert_eq!(module_name(Path::new("Array.lua")), "Array");
    }

    #[test]
    fn module_name_no_extension() {
        assert_eq!(module_name(Path::new("Functools")), "Functools");
    }

    #[test]
    fn resolve_bare_name() {
        let dir = TempDir::new().unwrap();
        assert_eq!(
            resolve_module(dir.path(), "Array"),
            dir.path().join("Array.lua")
        );
        assert_eq!(
            resolve_module(dir.path(), "Array.lua"),
            dir.path().join("Array.lua")
        );
    }

    #[test]
    fn resolve_existing_path() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("Mod.lua");
        fs::write(&file, "").unwrap();
        let arg = file.to_string_lossy().to_string();
        assert_eq!(resolve_module(Path::new("elsewhere"), &arg), file);
    }

    #[test]
    fn discover_sorted_lua_files() {
        let dir = TempDir::new().unwrap();
        for name in ["b.lua", "a.lua", "notes.txt"] {
            fs::write(dir.path().join(name), "").unwrap();
        }
        fs::create_dir(dir.path().join("sub.lua")).unwrap();

        let files = discover_modules(dir.path(), "*.lua").unwrap();
        assert_eq!(
            files,
            vec![dir.path().join("a.lua"), dir.path().join("b.lua")]
        );
    }

    #[test]
    fn discover_missing_source_dir() {
        let err = discover_modules(Path::new("/nonexistent/lua"), "*.lua").unwrap_err();
        assert!(err.to_string().contains("source directory not found"));
    }

    #[test]
    fn empty_module_is_not_written() {
        let dir = TempDir::new().unwrap();
        let src = dir.path().join("Empty.lua");
        fs::write(&src, "local M = {}\nreturn M\n").unwrap();
        let config = Config {
            output_dir: dir.path().join("out"),
            ..Config::default()
        };
        fs::create_dir_all(&config.output_dir).unwrap();

        let outcome = Generator::new(&config, false).generate(&src).unwrap();
        assert_eq!(outcome, Outcome::Empty);
        assert!(!config.output_dir.join("Empty.wiki").exists());
    }

    #[test]
    fn extension_override() {
        let dir = TempDir::new().unwrap();
        let src = dir.path().join("M.lua");
        fs::write(&src, "--- Doc.\nfunction M.f() end\n").unwrap();
        let config = Config {
            output_dir: dir.path().to_path_buf(),
            extension: Some("html".to_string()),
            ..Config::default()
        };

        let outcome = Generator::new(&config, false).generate(&src).unwrap();
        assert_eq!(outcome, Outcome::Written);
        let page = fs::read_to_string(dir.path().join("M.html")).unwrap();
        assert!(page.starts_with("{{Documentation}}"));
    }
}
