use anyhow::{Context, Result};
use std::{
    borrow::Cow,
    fs,
    path::{Path, PathBuf},
};
use tracing::{debug, info, warn};

pub const SOURCE_DELIMITER: char = '|';
pub const TARGET_DELIMITER: char = ',';

/// Characters dropped from the end of every line in `TrimMode::FixedOffset`:
/// the trailing delimiter and the line terminator.
const FIXED_TRIM: usize = 2;

#[derive(Debug, Default, PartialEq, Eq, Clone, Copy)]
pub enum TrimMode {
    /// Drop the last two characters of each line, whatever they are.
    /// Matches the output of the original preprocessing step byte for byte.
    #[default]
    FixedOffset,
    /// Drop the line terminator, then one trailing delimiter if present.
    /// Differs from `FixedOffset` on short lines and on a last line without
    /// terminator.
    TrailingDelimiter,
}

#[derive(Debug, Default, PartialEq, Eq, Clone)]
pub struct FileStats {
    pub lines: usize,
    /// Lines with fewer than two characters, clamped to an empty line.
    /// Only `TrimMode::FixedOffset` clamps.
    pub short_lines: usize,
    pub unterminated_last_line: bool,
}

#[derive(Debug, PartialEq, Eq, Clone)]
pub struct ConvertedFile {
    pub file_name: String,
    pub path: PathBuf,
    pub stats: FileStats,
}

/// Text-mode newline handling: `\r\n` and a lone `\r` both read as `\n`.
pub fn normalize_newlines(text: &str) -> Cow<'_, str> {
    if !text.contains('\r') {
        return Cow::Borrowed(text);
    }
    Cow::Owned(text.replace("\r\n", "\n").replace('\r', "\n"))
}

fn drop_last_chars(s: &str, n: usize) -> &str {
    if n == 0 {
        return s;
    }
    match s.char_indices().rev().nth(n - 1) {
        Some((idx, _)) => &s[..idx],
        None => "",
    }
}

/// Converts a single line, terminator included, into its comma-delimited
/// form. The result always ends with exactly one `\n`.
pub fn convert_line(line: &str, mode: TrimMode) -> String {
    let mut target = [0; 4];
    let replaced = line.replace(SOURCE_DELIMITER, TARGET_DELIMITER.encode_utf8(&mut target));
    let body = match mode {
        TrimMode::FixedOffset => drop_last_chars(&replaced, FIXED_TRIM),
        TrimMode::TrailingDelimiter => {
            let body = replaced.strip_suffix('\n').unwrap_or(&replaced);
            body.strip_suffix(TARGET_DELIMITER).unwrap_or(body)
        }
    };

    let mut out = String::with_capacity(body.len() + 1);
    out.push_str(body);
    out.push('\n');
    out
}

/// Converts the full content of a file, line by line, in order.
pub fn convert_text(text: &str, mode: TrimMode) -> (String, FileStats) {
    let text = normalize_newlines(text);
    let mut output = String::with_capacity(text.len());
    let mut stats = FileStats::default();

    for line in text.split_inclusive('\n') {
        stats.lines += 1;
        if mode == TrimMode::FixedOffset && line.chars().count() < FIXED_TRIM {
            stats.short_lines += 1;
        }
        output.push_str(&convert_line(line, mode));
    }
    stats.unterminated_last_line = !text.is_empty() && !text.ends_with('\n');

    (output, stats)
}

/// Rewrites `path` in place. The file is read completely before it is
/// truncated; there is no backup and no atomic rename.
pub fn convert_file<P: AsRef<Path>>(path: P, mode: TrimMode) -> Result<FileStats> {
    let path = path.as_ref();
    let input =
        fs::read_to_string(path).with_context(|| format!("reading `{}`", path.display()))?;

    let (output, stats) = convert_text(&input, mode);
    if stats.short_lines > 0 {
        warn!(
            "{}: {} line(s) shorter than {} characters written as empty lines",
            path.display(),
            stats.short_lines,
            FIXED_TRIM
        );
    }
    if stats.unterminated_last_line && mode == TrimMode::FixedOffset {
        warn!(
            "{}: last line has no terminator, its final characters were dropped",
            path.display()
        );
    }

    fs::write(path, &output).with_context(|| format!("writing `{}`", path.display()))?;
    debug!(
        "{}: {} bytes in, {} bytes out",
        path.display(),
        input.len(),
        output.len()
    );

    Ok(stats)
}

/// Converts each file of `file_names`, resolved against `dir`, one after the
/// other. Stops at the first failure; files already converted stay converted.
pub fn convert_all<P: AsRef<Path>>(
    dir: P,
    file_names: &[&str],
    mode: TrimMode,
) -> Result<Vec<ConvertedFile>> {
    let dir = dir.as_ref();
    let mut converted = Vec::with_capacity(file_names.len());

    for &file_name in file_names {
        let path = dir.join(file_name);
        let stats = convert_file(&path, mode)
            .with_context(|| format!("converting table file {}", file_name))?;
        info!("converted {} ({} lines)", path.display(), stats.lines);
        converted.push(ConvertedFile {
            file_name: file_name.to_owned(),
            path,
            stats,
        });
    }

    Ok(converted)
}
