//! Decoders turning raw proc sources into field lists.
//!
//! Every source is first split into a list of text fields so the record
//! builders only ever see tokens, whatever separator the source used.

use std::collections::BTreeMap;

use super::source::ProcSource;

/// Index of the state letter in the tokenized stat line.
const STATE_FIELD: usize = 2;
/// Index of the parenthesized command name.
const NAME_FIELD: usize = 1;

/// Untrusted bytes become text with U+FFFD for each invalid sequence.
pub fn decode(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}

pub fn split_fields(source: ProcSource, bytes: &[u8]) -> Vec<String> {
    match source {
        ProcSource::Cmdline | ProcSource::Environ => split_nul(&decode(bytes)),
        ProcSource::Stat => tokenize_stat(&decode(bytes)),
    }
}

fn split_nul(text: &str) -> Vec<String> {
    text.split('\0').map(str::to_string).collect()
}

/// Splits `pid (name) state ...` keeping the name whole.
///
/// The name runs from the first `(` to the last `)`, so names holding spaces
/// or parentheses of their own survive as one field.
fn tokenize_stat(text: &str) -> Vec<String> {
    let text = text.trim_end();
    let (Some(open), Some(close)) = (text.find('('), text.rfind(')')) else {
        return text.split_whitespace().map(str::to_string).collect();
    };
    if close < open {
        return text.split_whitespace().map(str::to_string).collect();
    }

    let mut fields = text[..open]
        .split_whitespace()
        .map(str::to_string)
        .collect::<Vec<_>>();
    fields.push(text[open + 1..close].to_string());
    fields.extend(text[close + 1..].split_whitespace().map(str::to_string));
    fields
}

/// Trailing empty tokens come from the terminating NUL; inner ones are real
/// empty arguments.
pub fn argv(fields: &[String]) -> Vec<String> {
    let end = fields
        .iter()
        .rposition(|field| !field.is_empty())
        .map_or(0, |idx| idx + 1);
    fields[..end].to_vec()
}

/// Entries without `=` are dropped.
pub fn environment(fields: &[String]) -> BTreeMap<String, String> {
    fields
        .iter()
        .filter_map(|entry| entry.split_once('='))
        .map(|(name, value)| (name.to_string(), value.to_string()))
        .collect()
}

pub fn state_code(fields: &[String]) -> Option<String> {
    fields
        .get(STATE_FIELD)
        .and_then(|field| field.chars().next())
        .map(String::from)
}

pub fn process_name(fields: &[String]) -> Option<String> {
    fields.get(NAME_FIELD).cloned()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stat(line: &str) -> Vec<String> {
        split_fields(ProcSource::Stat, line.as_bytes())
    }

    #[test]
    fn stat_plain_name() {
        let fields = stat("1234 (bash) S 1 1234 1234 0 -1\n");
        assert_eq!(fields[0], "1234");
        assert_eq!(process_name(&fields).as_deref(), Some("bash"));
        assert_eq!(state_code(&fields).as_deref(), Some("S"));
        assert_eq!(fields.len(), 8);
    }

    #[test]
    fn stat_name_with_spaces_and_parens() {
        let fields = stat("77 (Web (Content) x) R 1 77");
        assert_eq!(process_name(&fields).as_deref(), Some("Web (Content) x"));
        assert_eq!(state_code(&fields).as_deref(), Some("R"));
        assert_eq!(fields[3], "1");
    }

    #[test]
    fn stat_name_with_unbalanced_paren() {
        let fields = stat("9 (a) b)) Z 0");
        assert_eq!(process_name(&fields).as_deref(), Some("a) b)"));
        assert_eq!(state_code(&fields).as_deref(), Some("Z"));
    }

    #[test]
    fn stat_without_name_falls_back_to_whitespace() {
        let fields = stat("9 x D");
        assert_eq!(state_code(&fields).as_deref(), Some("D"));
        assert!(state_code(&stat("")).is_none());
    }

    #[test]
    fn argv_strips_only_trailing_empties() {
        let fields = split_fields(ProcSource::Cmdline, b"ls\0\0-l\0\0");
        assert_eq!(argv(&fields), vec!["ls", "", "-l"]);
    }

    #[test]
    fn argv_of_empty_blob_is_empty() {
        let fields = split_fields(ProcSource::Cmdline, b"");
        assert!(argv(&fields).is_empty());
    }

    #[test]
    fn invalid_bytes_are_replaced() {
        let fields = split_fields(ProcSource::Cmdline, b"caf\xff\0x\0");
        assert_eq!(argv(&fields), vec!["caf\u{fffd}", "x"]);
    }

    #[test]
    fn environment_drops_malformed_entries() {
        let fields = split_fields(
            ProcSource::Environ,
            b"HOME=/root\0garbage\0PATH=/bin:/usr/bin\0EQ=a=b\0EMPTY=\0",
        );
        let env = environment(&fields);
        assert_eq!(env.len(), 4);
        assert_eq!(env["HOME"], "/root");
        assert_eq!(env["EQ"], "a=b");
        assert_eq!(env["EMPTY"], "");
        assert!(!env.contains_key("garbage"));
    }
}
