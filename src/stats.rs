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

//! Statistics about the translation status of a PO file.

use regex::Regex;
use std::fmt::{self, Display, Formatter};
use std::sync::OnceLock;

use crate::po::PoFile;

/// Counts of message translation statuses.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct MessageStats {
    /// The `Language` header field, empty when missing.
    pub language: String,
    pub translated_count: u32,
    pub untranslated_count: u32,
    /// Messages carrying the `fuzzy` flag.
    pub fuzzy_count: u32,
}

impl MessageStats {
    /// Returns the total number of messages.
    pub fn total(&self) -> u32 {
        self.translated_count + self.untranslated_count
    }

    /// Percentage of messages translated, rounded down.
    pub fn translated_percent(&self) -> u32 {
        if self.total() == 0 {
            100
        } else {
            self.translated_count * 100 / self.total()
        }
    }

    /// Counts messages in `po`.
    ///
    /// Counting follows the same conventions as
    /// [`PoFile::untranslated`]: only single-line msgids are considered
    /// and the header entry is not a message.
    pub fn for_po(po: &PoFile) -> Self {
        static MSGID: OnceLock<Regex> = OnceLock::new();
        static FUZZY: OnceLock<Regex> = OnceLock::new();
        static LANGUAGE: OnceLock<Regex> = OnceLock::new();
        let msgid = MSGID.get_or_init(|| {
            Regex::new(r#"(?m)^msgid "(?:[^"\\]|\\.)+""#).expect("well-formed regex")
        });
        let fuzzy =
            FUZZY.get_or_init(|| Regex::new(r"(?m)^#, fuzzy").expect("well-formed regex"));
        let language = LANGUAGE.get_or_init(|| {
            Regex::new(r#""Language: ([^"\\]+)\\n""#).expect("well-formed regex")
        });

        let total = msgid.find_iter(po.content()).count() as u32;
        let untranslated_count = po.untranslated().len() as u32;
        MessageStats {
            language: language
                .captures(po.content())
                .map(|cap| cap[1].to_string())
                .unwrap_or_default(),
            translated_count: total - untranslated_count,
            untranslated_count,
            fuzzy_count: fuzzy.find_iter(po.content()).count() as u32,
        }
    }
}

impl Display for MessageStats {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(
            f,
            "{}: {} / {} translated ({}%), {} untranslated, {} fuzzy",
            self.language,
            self.translated_count,
            self.total(),
            self.translated_percent(),
            self.untranslated_count,
            self.fuzzy_count,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample_catalog() -> &'static str {
        "msgid \"\"\n\
         msgstr \"\"\n\
         \"Language: zh_CN\\n\"\n\
         \n\
         msgid \"Quick Start\"\n\
         msgstr \"快速开始\"\n\
         \n\
         msgid \"Installation\"\n\
         msgstr \"\"\n\
         \n\
         msgid \"A longer paragraph\"\n\
         msgstr \"\"\n\
         \"一段\"\n\
         \"很长的翻译\"\n\
         \n\
         #, fuzzy\n\
         msgid \"Configuration\"\n\
         msgstr \"配置?\"\n"
    }

    #[test]
    fn test_for_po() {
        let po = PoFile::new(sample_catalog());
        let stats = MessageStats::for_po(&po);
        assert_eq!(
            stats,
            MessageStats {
                language: "zh_CN".to_string(),
                translated_count: 3,
                untranslated_count: 1,
                fuzzy_count: 1,
            }
        );
        assert_eq!(stats.total(), 4);
        assert_eq!(stats.translated_percent(), 75);
    }

    #[test]
    fn test_missing_language_header() {
        let po = PoFile::new("msgid \"Note\"\nmsgstr \"\"\n");
        let stats = MessageStats::for_po(&po);
        assert_eq!(stats.language, "");
        assert_eq!(stats.untranslated_count, 1);
    }

    #[test]
    fn test_empty_catalog_is_fully_translated() {
        let stats = MessageStats::for_po(&PoFile::new(""));
        assert_eq!(stats.total(), 0);
        assert_eq!(stats.translated_percent(), 100);
    }

    #[test]
    fn test_display() {
        let stats = MessageStats {
            language: "zh_CN".to_string(),
            translated_count: 3,
            untranslated_count: 1,
            fuzzy_count: 1,
        };
        assert_eq!(
            stats.to_string(),
            "zh_CN: 3 / 4 translated (75%), 1 untranslated, 1 fuzzy"
        );
    }
}
