//! White-space processing for text values.
//!
//! Follows <https://drafts.csswg.org/css-text/#white-space-phase-1> for
//! `white-space: normal`, minus the East Asian Width and writing-system
//! segment break rules.

use std::borrow::Cow;

use crate::patterns::{BIDI_CONTROL, TAB_OR_SPACES};
use crate::whitespace::Whitespace;

const ZERO_WIDTH_SPACE: char = '\u{200B}';

/// Compute the rendered text of a text value under `whitespace`.
///
/// Non-normal modes return the value unchanged. Under `normal`:
///
/// - bidi control characters are ignored,
/// - spaces and tabs next to a segment break (line feed) are removed,
/// - other runs of spaces and tabs collapse to one space, except a run at the
///   very start (or end) of the value, which is removed when `break_before`
///   (or `break_after`) is set,
/// - segment breaks collapse into one space, or into nothing when a
///   zero-width space is on either side.
#[must_use]
pub fn collect_text(
    value: &str,
    whitespace: Whitespace,
    break_before: bool,
    break_after: bool,
) -> String {
    if !whitespace.is_normal() {
        return value.to_string();
    }

    let line_count = value.split('\n').count();
    let mut result = String::with_capacity(value.len());

    for (index, line) in value.split('\n').enumerate() {
        let line = BIDI_CONTROL.replace_all(line, "");
        let keep_leading = index == 0 && !break_before;
        let keep_trailing = index + 1 == line_count && !break_after;
        let collapsed = collapse_spaces_and_tabs(&line, keep_leading, keep_trailing);
        let line = collapsed.as_ref();

        // Any collapsible segment break immediately following another one is
        // removed, so empty lines contribute nothing.
        if line.is_empty() {
            continue;
        }

        if index > 0 && !result.is_empty() && needs_space(&result, line) {
            result.push(' ');
        }
        result.push_str(line);
    }

    result
}

/// Whether a collapsed segment break between `before` and `after` becomes a space.
fn needs_space(before: &str, after: &str) -> bool {
    !(before.ends_with(ZERO_WIDTH_SPACE) || after.starts_with(ZERO_WIDTH_SPACE))
}

/// Collapse every run of spaces and tabs in a line to one space.
///
/// A run touching the start of the line survives only when `keep_leading`,
/// one touching the end only when `keep_trailing`, and a run filling the whole
/// line only when both hold.
fn collapse_spaces_and_tabs(line: &str, keep_leading: bool, keep_trailing: bool) -> Cow<'_, str> {
    if !TAB_OR_SPACES.is_match(line) {
        return Cow::Borrowed(line);
    }

    let mut result = String::with_capacity(line.len());
    let mut last = 0;

    for run in TAB_OR_SPACES.find_iter(line) {
        result.push_str(&line[last..run.start()]);

        let leading = run.start() == 0;
        let trailing = run.end() == line.len();
        let keep = match (leading, trailing) {
            (false, false) => true,
            (true, false) => keep_leading,
            (false, true) => keep_trailing,
            (true, true) => keep_leading && keep_trailing,
        };
        if keep {
            result.push(' ');
        }

        last = run.end();
    }

    result.push_str(&line[last..]);
    Cow::Owned(result)
}
