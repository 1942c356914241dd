use std::{collections::BTreeSet, sync::LazyLock};

use any_ascii::any_ascii;
use regex::Regex;

static INVALID_CHARS_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^A-Za-z0-9_]+").unwrap());
static MULTI_UNDERSCORE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"_+").unwrap());
static IDENTIFIER_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[A-Za-z_$][A-Za-z0-9_$]*$").unwrap());
static WORD_SEPARATOR_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^A-Za-z0-9]+").unwrap());
static WORD_BOUNDARY_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"([a-z0-9])([A-Z])").unwrap());

/// Transliterates to ASCII, replaces invalid characters with underscores,
/// collapses consecutive underscores, and trims leading and trailing ones.
pub(crate) fn sanitize(input: &str) -> String {
  if input.is_empty() {
    return String::new();
  }

  let ascii = any_ascii(input);
  let replaced = INVALID_CHARS_RE.replace_all(&ascii, "_");
  let collapsed = MULTI_UNDERSCORE_RE.replace_all(&replaced, "_");

  collapsed.trim_matches('_').to_string()
}

/// Converts an enum literal into a `CONSTANT_CASE` symbol name.
///
/// Empty results become `EMPTY`, names starting with a digit get a `_` prefix.
pub(crate) fn to_symbol_name(input: &str) -> String {
  let sanitized = sanitize(input);
  if sanitized.is_empty() {
    return "EMPTY".to_string();
  }

  let mut ident = WORD_BOUNDARY_RE.replace_all(&sanitized, "${1}_${2}").to_uppercase();
  prefix_if_digit_start(&mut ident, '_');
  ident
}

/// True when `name` can be used unquoted as a member or type name.
pub(crate) fn is_plain_identifier(name: &str) -> bool {
  IDENTIFIER_RE.is_match(name)
}

/// Uppercases the first character and leaves the rest untouched.
pub(crate) fn capitalize_first(value: &str) -> String {
  let mut chars = value.chars();
  match chars.next() {
    Some(first) => first.to_uppercase().chain(chars).collect(),
    None => String::new(),
  }
}

/// Splits text into words at separators, lower-to-upper case changes, the end
/// of an acronym, and the edges of digit runs.
///
/// ```text
/// "pets.json"   => ["pets", "json"]
/// "user2Id"     => ["user", "2", "Id"]
/// "HTTPServer"  => ["HTTP", "Server"]
/// ```
fn split_words(input: &str) -> Vec<String> {
  let ascii = any_ascii(input);
  let mut words = Vec::new();

  for piece in WORD_SEPARATOR_RE.split(&ascii).filter(|piece| !piece.is_empty()) {
    let chars: Vec<char> = piece.chars().collect();
    let mut word = String::new();

    for (index, &ch) in chars.iter().enumerate() {
      if let Some(prev) = word.chars().last() {
        let next_is_lower = chars.get(index + 1).is_some_and(char::is_ascii_lowercase);
        let boundary = ch.is_ascii_digit() != prev.is_ascii_digit()
          || (ch.is_ascii_uppercase() && prev.is_ascii_lowercase())
          || (ch.is_ascii_uppercase() && prev.is_ascii_uppercase() && next_is_lower);
        if boundary {
          words.push(std::mem::take(&mut word));
        }
      }
      word.push(ch);
    }
    words.push(word);
  }

  words
}

/// Joins the words of `input` as a camel-case identifier: the first word
/// lowercased, every later word capitalized.
///
/// ```text
/// "pet-store"  => "petStore"
/// "user_id"    => "userId"
/// "orders.xml" => "ordersXml"
/// "v2beta"     => "v2Beta"
/// "Orders"     => "orders"
/// ```
pub(crate) fn to_camel_identifier(input: &str) -> String {
  split_words(input)
    .iter()
    .enumerate()
    .map(|(index, word)| {
      let lower = word.to_ascii_lowercase();
      if index == 0 { lower } else { capitalize_first(&lower) }
    })
    .collect()
}

/// Ensures a name is unique within a set of used names, appending a numeric suffix if needed.
pub(crate) fn ensure_unique(base_name: &str, used_names: &BTreeSet<String>) -> String {
  if !used_names.contains(base_name) {
    return base_name.to_string();
  }
  let mut i = 2;
  loop {
    let new_name = format!("{base_name}{i}");
    if !used_names.contains(&new_name) {
      return new_name;
    }
    i += 1;
  }
}

fn prefix_if_digit_start(ident: &mut String, prefix: char) {
  if ident.starts_with(|c: char| c.is_ascii_digit()) {
    ident.insert(0, prefix);
  }
}
