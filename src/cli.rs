//! CLI: load JSON objects as enums, then inspect | merge | slice | lookup
use std::fmt;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{ArgGroup, Args, Parser, Subcommand};
use ordered_enum::{Enum, EnumBuilder, Fetch};
use serde::{Deserialize, Serialize};
use serde_json::Value;

// ————————————————————————————————————————————————————————————————————————————
// TYPES
// ————————————————————————————————————————————————————————————————————————————

/// treat JSON objects as ordered enums of named constants
#[derive(Parser, Debug)]
pub struct CommandLineInterface {
    #[command(subcommand)]
    cmd: Command,

    /// debugging: print the parsed arguments and exit
    #[arg(long, global = true)]
    no_op: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// render each input document as an enum
    Inspect(InspectOut),
    /// merge all input documents, left to right, into one JSON object
    Merge(MergeOut),
    /// project every input document onto the given keys
    Slice(SliceOut),
    /// look up a value by key, or a key by value
    Lookup(LookupOut),
}

#[derive(Args, Debug, Clone)]
struct InputSettings {
    /// JSON Pointer to select a subnode in each document (e.g. /data/statuses)
    #[arg(long)]
    json_pointer: Option<String>,

    /// JQ pre-process filter for each document. Every output becomes an enum.
    #[arg(long)]
    jq_expr: Option<String>,

    /// One or more inputs. May be literal paths or quoted glob patterns
    #[arg(long, short, num_args = 1.., required = true)]
    input: Vec<String>,
}

#[derive(clap::Parser, Debug)]
struct InspectOut {
    #[command(flatten)]
    input_settings: InputSettings,

    /// display name for the rendered enums
    #[arg(long)]
    name: Option<String>,

    /// wrap one member per line past this many columns
    #[arg(long)]
    width: Option<usize>,

    /// output file (stdout if omitted)
    #[arg(short, long)]
    out: Option<PathBuf>,
}

#[derive(clap::Parser, Debug)]
struct MergeOut {
    #[command(flatten)]
    input_settings: InputSettings,

    /// snake_case the merged keys
    #[arg(long)]
    attribute: bool,

    /// output .json file (stdout if omitted)
    #[arg(short, long)]
    out: Option<PathBuf>,
}

#[derive(clap::Parser, Debug)]
struct SliceOut {
    #[command(flatten)]
    input_settings: InputSettings,

    /// keys to keep, in output order
    #[arg(long, short, num_args = 1.., required = true)]
    key: Vec<String>,

    /// output NDJSON file (stdout if omitted)
    #[arg(short, long)]
    out: Option<PathBuf>,
}

#[derive(clap::Parser, Debug)]
#[command(group(ArgGroup::new("query").required(true).args(["key", "value"])))]
struct LookupOut {
    #[command(flatten)]
    input_settings: InputSettings,

    /// member name to fetch
    #[arg(long, short)]
    key: Option<String>,

    /// JSON value to find the first key of
    #[arg(long)]
    value: Option<String>,

    /// JSON value to print when --key is missing
    #[arg(long, requires = "key")]
    default: Option<String>,
}

/// A JSON value that renders as JSON text inside an enum.
#[derive(Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
struct Json(Value);

impl fmt::Debug for Json {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ————————————————————————————————————————————————————————————————————————————
// IMPLEMENTATION
// ————————————————————————————————————————————————————————————————————————————

impl InputSettings {
    fn load_enums(&self) -> Result<Vec<Enum<Json>>> {
        let mut enums = Vec::new();
        for source_path in resolve_file_path_patterns(&self.input)? {
            let source_path_str = source_path.to_string_lossy().to_string();
            let source = std::fs::read_to_string(&source_path)
                .with_context(|| format!("failed to read source file ({source_path_str})"))?;
            let document = ordered_enum::path_de::from_str_with_path::<Value>(&source)
                .with_context(|| format!("failed to parse JSON source file ({source_path_str})"))?;
            for value in self.preprocess(document, &source_path_str)? {
                let parsed = Enum::<Json>::from_json_value(value)
                    .with_context(|| format!("not an enum object ({source_path_str})"))?;
                enums.push(parsed);
            }
            tracing::debug!(path = %source_path_str, total = enums.len(), "loaded input");
        }
        Ok(enums)
    }

    fn preprocess(&self, document: Value, source_path_str: &str) -> Result<Vec<Value>> {
        let selected = match self.json_pointer.as_deref() {
            None => document,
            Some(pointer) => select_pointer(document, pointer)
                .with_context(|| format!("in source file ({source_path_str})"))?,
        };
        match self.jq_expr.as_deref() {
            None => Ok(vec![selected]),
            Some(jq_expr) => crate::jq_exec::run_jaq(jq_expr, &selected).with_context(|| {
                format!("failed to apply jq expression to source file ({source_path_str})")
            }),
        }
    }
}

impl CommandLineInterface {
    pub fn load() -> Self {
        Self::parse()
    }

    pub fn run(&self) -> Result<()> {
        // debug path
        if self.no_op {
            eprintln!("{self:#?}");
            return Ok(());
        }
        match &self.cmd {
            Command::Inspect(target) => {
                let enums = target.input_settings.load_enums()?;
                let rendered = render_enums(&enums, target.name.as_deref(), target.width)?;
                write_output(target.out.as_deref(), &rendered)
            }
            Command::Merge(target) => {
                let enums = target.input_settings.load_enums()?;
                let merged = merge_enums(&enums, target.attribute)?;
                write_output(target.out.as_deref(), &merged)
            }
            Command::Slice(target) => {
                let enums = target.input_settings.load_enums()?;
                let sliced = slice_enums(&enums, &target.key)?;
                write_output(target.out.as_deref(), &sliced)
            }
            Command::Lookup(target) => {
                let enums = target.input_settings.load_enums()?;
                let query = match (&target.key, &target.value) {
                    (Some(key), _) => {
                        let default = parse_json_arg(target.default.as_deref())?;
                        Query::Key { key, default }
                    }
                    (None, Some(value)) => Query::Value(Json(parse_json(value)?)),
                    (None, None) => bail!("one of --key or --value is required"),
                };
                let found = lookup_enums(&enums, &query)?;
                write_output(None, &found)
            }
        }
    }
}

// ————————————————————————————————————————————————————————————————————————————
// SUBCOMMANDS
// ————————————————————————————————————————————————————————————————————————————

fn render_enums(enums: &[Enum<Json>], name: Option<&str>, width: Option<usize>) -> Result<String> {
    let mut lines = Vec::with_capacity(enums.len());
    for parsed in enums {
        let parsed = match name {
            Some(name) => rename(parsed, name)?,
            None => parsed.clone(),
        };
        lines.push(match width {
            Some(width) => parsed.pretty(width),
            None => parsed.inspect(),
        });
    }
    Ok(lines.join("\n"))
}

fn rename(parsed: &Enum<Json>, name: &str) -> Result<Enum<Json>> {
    let mut builder = EnumBuilder::<Json>::new().named(name);
    for (key, value) in parsed.pairs() {
        builder.constant(key, value.clone())?;
    }
    Ok(builder.build())
}

fn merge_enums(enums: &[Enum<Json>], attribute: bool) -> Result<String> {
    let Some((first, rest)) = enums.split_first() else {
        bail!("no input documents to merge");
    };
    let merged = first.merge(rest);
    let merged = if attribute {
        serde_json::to_string_pretty(&merged.to_attribute())?
    } else {
        serde_json::to_string_pretty(&merged.as_json()?)?
    };
    Ok(merged)
}

fn slice_enums(enums: &[Enum<Json>], keys: &[String]) -> Result<String> {
    let mut lines = Vec::with_capacity(enums.len());
    for (index, parsed) in enums.iter().enumerate() {
        let sliced = parsed
            .slice(keys)
            .with_context(|| format!("failed to slice input document #{index}"))?;
        lines.push(sliced.to_json()?);
    }
    Ok(lines.join("\n"))
}

enum Query<'a> {
    Key { key: &'a str, default: Option<Json> },
    Value(Json),
}

fn lookup_enums(enums: &[Enum<Json>], query: &Query<'_>) -> Result<String> {
    let mut lines = Vec::with_capacity(enums.len());
    for (index, parsed) in enums.iter().enumerate() {
        let context = || format!("lookup failed in input document #{index}");
        let line = match query {
            Query::Key { key, default } => {
                let fallback = match default {
                    Some(default) => Fetch::new().or(default.clone()),
                    None => Fetch::new(),
                };
                let found = parsed.fetch_with(key, fallback).with_context(context)?;
                found.0.to_string()
            }
            Query::Value(value) => parsed.key(value).with_context(context)?.to_string(),
        };
        lines.push(line);
    }
    Ok(lines.join("\n"))
}

// ————————————————————————————————————————————————————————————————————————————
// INTERNAL HELPERS
// ————————————————————————————————————————————————————————————————————————————

fn parse_json(src: &str) -> Result<Value> {
    ordered_enum::path_de::from_str_with_path(src)
        .with_context(|| format!("invalid JSON argument: {src}"))
}

fn parse_json_arg(src: Option<&str>) -> Result<Option<Json>> {
    src.map(|src| parse_json(src).map(Json)).transpose()
}

fn select_pointer(mut document: Value, pointer: &str) -> Result<Value> {
    match document.pointer_mut(pointer) {
        Some(selected) => Ok(selected.take()),
        None => bail!("JSON pointer {pointer} selects nothing"),
    }
}

fn write_output(out: Option<&Path>, text: &str) -> Result<()> {
    match out {
        Some(out) => {
            if let Some(parent) = out.parent() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("failed to create {}", parent.display()))?;
            }
            std::fs::write(out, text).with_context(|| format!("failed to write {}", out.display()))
        }
        None => {
            println!("{text}");
            Ok(())
        }
    }
}

fn resolve_file_path_patterns<I>(patterns: I) -> Result<Vec<PathBuf>>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    fn has_glob_chars(s: &str) -> bool {
        // Minimal glob detection for the `glob` crate syntax.
        s.bytes().any(|b| matches!(b, b'*' | b'?' | b'[' | b'{'))
    }

    let mut out = Vec::<PathBuf>::new();

    for raw in patterns {
        let pattern = raw.as_ref();

        if has_glob_chars(pattern) {
            let mut matched_any = false;
            let entries =
                glob::glob(pattern).with_context(|| format!("bad glob pattern: {pattern}"))?;
            for entry in entries {
                out.push(entry?);
                matched_any = true;
            }
            if !matched_any {
                // Pattern was explicitly a glob but matched nothing -> surface as an error
                bail!("glob pattern matched no files: {pattern}");
            }
        } else {
            out.push(PathBuf::from(pattern));
        }
    }

    Ok(out)
}

// ————————————————————————————————————————————————————————————————————————————
// TESTS
// ————————————————————————————————————————————————————————————————————————————
