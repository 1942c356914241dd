/// Normalizes description text for use in generated comments.
///
/// Line endings and literal `\n` escapes become newlines, every line is
/// trimmed, and leading or trailing blank lines are dropped. Blank input
/// yields `None`.
#[must_use]
pub(crate) fn extract_comment(input: Option<&str>) -> Option<String> {
  let text = input?.replace("\r\n", "\n").replace('\r', "\n").replace("\\n", "\n");
  let lines: Vec<&str> = text.lines().map(str::trim).collect();

  let first = lines.iter().position(|line| !line.is_empty())?;
  let last = lines.iter().rposition(|line| !line.is_empty())?;

  Some(lines[first..=last].join("\n"))
}

#[inline]
#[must_use]
pub(crate) fn doc_lines(input: &str) -> Vec<String> {
  extract_comment(Some(input))
    .map(|text| text.lines().map(String::from).collect())
    .unwrap_or_default()
}
