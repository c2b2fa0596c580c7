//! Minimal reader/writer for Java-style properties files
//!
//! The contribution manager consumes `library.properties` files and library
//! authors maintain `release.properties` by hand, so the subset supported
//! here is the subset those files actually use: `key=value` and `key: value`
//! lines, `#`/`!` comments, blank lines, and trailing-backslash line
//! continuations. Escape sequences are passed through untouched, and key
//! order is preserved.

/// Parse properties text into ordered key/value pairs
pub fn parse(content: &str) -> Vec<(String, String)> {
  let mut pairs = Vec::new();
  let mut lines = content.lines();

  while let Some(line) = lines.next() {
    let trimmed = line.trim_start();
    if trimmed.is_empty() || trimmed.starts_with('#') || trimmed.starts_with('!') {
      continue;
    }

    // Join continuation lines before splitting key from value
    let mut logical = trimmed.to_string();
    while logical.ends_with('\\') {
      logical.pop();
      match lines.next() {
        Some(next) => logical.push_str(next.trim_start()),
        None => break,
      }
    }

    let Some(sep) = logical.find(['=', ':']) else {
      // A bare key with no separator maps to the empty value
      pairs.push((logical.trim_end().to_string(), String::new()));
      continue;
    };

    let key = logical[..sep].trim().to_string();
    let value = logical[sep + 1..].trim_start().to_string();
    pairs.push((key, value));
  }

  pairs
}

/// Format ordered pairs as `key=value` lines
pub fn format(pairs: &[(String, String)]) -> String {
  let mut out = String::new();
  for (key, value) in pairs {
    out.push_str(key);
    out.push('=');
    out.push_str(value);
    out.push('\n');
  }
  out
}

/// Look up a key in parsed pairs
pub fn get<'a>(pairs: &'a [(String, String)], key: &str) -> Option<&'a str> {
  pairs.iter().find(|(k, _)| k == key).map(|(_, v)| v.as_str())
}
