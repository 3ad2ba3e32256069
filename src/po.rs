// Copyright 2025 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//      http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Textual manipulation of Gettext PO files.
//!
//! A catalog handled here is only ever patched in place: entries which are
//! not touched keep their exact bytes, including comments, layout, and
//! ordering. That rules out a parse/serialize round trip, so untranslated
//! messages are located with a regular expression over the raw file
//! contents and the replacement `msgstr` is spliced directly into the
//! text. Only single-line messages are handled; entries with multi-line
//! strings are left alone.

use anyhow::Context;
use regex::Regex;
use std::fs;
use std::path::Path;
use std::sync::OnceLock;

/// A message whose `msgstr` is empty.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Untranslated {
    /// The msgid exactly as written in the file, escape sequences
    /// included.
    pub msgid: String,
    /// The message text with PO escape sequences resolved.
    pub text: String,
}

/// A PO file held in memory as raw text.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PoFile {
    content: String,
}

impl PoFile {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }

    /// Read a PO file from `path`.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Could not read {path:?}"))?;
        Ok(Self { content })
    }

    /// Write the file back to `path`.
    pub fn write(&self, path: &Path) -> anyhow::Result<()> {
        fs::write(path, &self.content).with_context(|| format!("Could not write {path:?}"))
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    /// Find all untranslated messages, in file order.
    ///
    /// An untranslated message is a single-line `msgid` directly followed
    /// by `msgstr ""`. The header (empty msgid) does not count, and
    /// neither does an entry whose `msgstr ""` opens a multi-line
    /// translation on the following lines.
    ///
    /// # Examples
    ///
    /// ```
    /// use po_translate_helpers::po::PoFile;
    ///
    /// let po = PoFile::new("msgid \"Hello\"\nmsgstr \"\"\n");
    /// let messages = po.untranslated();
    /// assert_eq!(messages.len(), 1);
    /// assert_eq!(messages[0].text, "Hello");
    /// ```
    pub fn untranslated(&self) -> Vec<Untranslated> {
        let re = untranslated_regex();
        let mut messages = Vec::new();
        for cap in re.captures_iter(&self.content) {
            let (Some(whole), Some(msgid)) = (cap.get(0), cap.get(1)) else {
                continue;
            };
            if opens_multiline_msgstr(&self.content[whole.end()..]) {
                continue;
            }
            messages.push(Untranslated {
                msgid: msgid.as_str().to_string(),
                text: unescape(msgid.as_str()),
            });
        }
        messages
    }

    /// Fill in the translation for `msgid`.
    ///
    /// `msgid` is the raw text as it appears in the file; `translation` is
    /// plain text and is escaped before splicing. Only the first matching
    /// untranslated entry is patched (msgids are unique within a
    /// catalog). Returns false when `translation` is empty, when the
    /// message is missing or already translated, or when its `msgstr ""`
    /// opens a multi-line translation.
    pub fn fill(&mut self, msgid: &str, translation: &str) -> bool {
        if translation.is_empty() {
            return false;
        }
        let needle = format!("msgid \"{msgid}\"\nmsgstr \"\"");
        let mut search_from = 0;
        while let Some(offset) = self.content[search_from..].find(&needle) {
            let start = search_from + offset;
            let end = start + needle.len();
            let at_line_start = start == 0 || self.content.as_bytes()[start - 1] == b'\n';
            if at_line_start && !opens_multiline_msgstr(&self.content[end..]) {
                let replacement =
                    format!("msgid \"{msgid}\"\nmsgstr \"{}\"", escape(translation));
                self.content.replace_range(start..end, &replacement);
                return true;
            }
            search_from = end;
        }
        false
    }

    /// Rewrite the `PO-Revision-Date` header field.
    ///
    /// Returns false when the header line is missing, in which case the
    /// file is unchanged.
    pub fn set_revision_date(&mut self, date: &str) -> bool {
        static RE: OnceLock<Regex> = OnceLock::new();
        let re = RE.get_or_init(|| {
            Regex::new(r#"(?m)^"PO-Revision-Date: [^"]*\\n"$"#).expect("well-formed regex")
        });
        match re.find(&self.content) {
            Some(m) => {
                let replacement = format!("\"PO-Revision-Date: {date}\\n\"");
                self.content.replace_range(m.range(), &replacement);
                true
            }
            None => false,
        }
    }
}

fn untranslated_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        // The msgid part matches PO escape sequences, so messages
        // containing \" are picked up in full.
        Regex::new(r#"(?m)^msgid "((?:[^"\\]|\\.)+)"\nmsgstr ""$"#).expect("well-formed regex")
    })
}

/// True when `rest`, the text directly after a `msgstr ""`, continues
/// with another string line. Such an entry holds a multi-line
/// translation and must not be treated as untranslated.
fn opens_multiline_msgstr(rest: &str) -> bool {
    rest.strip_prefix('\n').is_some_and(|r| r.starts_with('"'))
}

/// Escape `text` for embedding in a PO string.
///
/// # Examples
///
/// ```
/// use po_translate_helpers::po::escape;
///
/// assert_eq!(escape("line\nbreak"), r"line\nbreak");
/// assert_eq!(escape("a \"quote\""), r#"a \"quote\""#);
/// ```
pub fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '"' => escaped.push_str("\\\""),
            '\n' => escaped.push_str("\\n"),
            '\t' => escaped.push_str("\\t"),
            '\r' => escaped.push_str("\\r"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Resolve PO escape sequences in `text`.
///
/// Unknown sequences are kept verbatim: catalogs extracted from Markdown
/// contain things like `\-` which are not PO escapes.
///
/// # Examples
///
/// ```
/// use po_translate_helpers::po::unescape;
///
/// assert_eq!(unescape(r"line\nbreak"), "line\nbreak");
/// assert_eq!(unescape(r"literal\-dash"), r"literal\-dash");
/// ```
pub fn unescape(text: &str) -> String {
    let mut unescaped = String::with_capacity(text.len());
    let mut chars = text.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            unescaped.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => unescaped.push('\n'),
            Some('t') => unescaped.push('\t'),
            Some('r') => unescaped.push('\r'),
            Some('"') => unescaped.push('"'),
            Some('\\') => unescaped.push('\\'),
            Some(other) => {
                unescaped.push('\\');
                unescaped.push(other);
            }
            None => unescaped.push('\\'),
        }
    }
    unescaped
}
