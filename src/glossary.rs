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

//! Glossary substitution for recurring documentation terms.
//!
//! Machine translation is overkill for chapter titles and boilerplate
//! terms which should always be translated the same way. A glossary maps
//! such msgids to fixed translations. Terms are written in the raw PO
//! form, so a term only ever fills a whole untranslated message, never a
//! substring of a longer one.

use anyhow::Context;
use log::info;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use crate::po::PoFile;

const BUILTIN_ZH_CN: &str = include_str!("../glossaries/zh-CN.toml");

/// Fixed translations for recurring source messages.
#[derive(Debug, Default, Deserialize, Eq, PartialEq)]
pub struct Glossary {
    terms: BTreeMap<String, String>,
}

impl Glossary {
    /// The builtin English to Simplified Chinese glossary.
    pub fn builtin_zh_cn() -> Self {
        toml::from_str(BUILTIN_ZH_CN).expect("well-formed builtin glossary")
    }

    /// Load a glossary from a TOML file with a `[terms]` table.
    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Could not read {path:?}"))?;
        toml::from_str(&content).with_context(|| format!("Could not parse {path:?} as a glossary"))
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Fill every untranslated message whose msgid equals a glossary
    /// term. Returns the number of messages filled.
    pub fn apply(&self, po: &mut PoFile) -> usize {
        let mut applied = 0;
        for (term, translation) in &self.terms {
            if po.fill(term, translation) {
                info!("{term} -> {translation}");
                applied += 1;
            }
        }
        applied
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    #[test]
    fn test_builtin_glossary_parses() {
        let glossary = Glossary::builtin_zh_cn();
        assert!(!glossary.is_empty());
        assert_eq!(
            glossary.terms.get("Installation").map(String::as_str),
            Some("安装")
        );
    }

    #[test]
    fn test_apply_fills_only_matching_untranslated_entries() {
        let glossary = Glossary::builtin_zh_cn();
        let mut po = PoFile::new(
            "msgid \"Installation\"\n\
             msgstr \"\"\n\
             \n\
             msgid \"Quick Start\"\n\
             msgstr \"已翻译\"\n\
             \n\
             msgid \"Something project specific\"\n\
             msgstr \"\"\n",
        );
        assert_eq!(glossary.apply(&mut po), 1);
        assert_eq!(
            po.content(),
            "msgid \"Installation\"\n\
             msgstr \"安装\"\n\
             \n\
             msgid \"Quick Start\"\n\
             msgstr \"已翻译\"\n\
             \n\
             msgid \"Something project specific\"\n\
             msgstr \"\"\n"
        );
    }

    #[test]
    fn test_apply_matches_raw_msgid_form() {
        // Glossary terms use the raw PO representation, Markdown escapes
        // included.
        let glossary = Glossary::builtin_zh_cn();
        let mut po = PoFile::new("msgid \"Introduction\\- Chapter 1\"\nmsgstr \"\"\n");
        assert_eq!(glossary.apply(&mut po), 1);
        assert_eq!(
            po.content(),
            "msgid \"Introduction\\- Chapter 1\"\nmsgstr \"简介\"\n"
        );
    }

    #[test]
    fn test_from_file() -> anyhow::Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("de.toml");
        fs::write(&path, "[terms]\n\"Note\" = \"Hinweis\"\n")?;

        let glossary = Glossary::from_file(&path)?;
        assert_eq!(glossary.len(), 1);

        let mut po = PoFile::new("msgid \"Note\"\nmsgstr \"\"\n");
        assert_eq!(glossary.apply(&mut po), 1);
        assert_eq!(po.content(), "msgid \"Note\"\nmsgstr \"Hinweis\"\n");
        Ok(())
    }

    #[test]
    fn test_from_file_rejects_malformed_glossary() -> anyhow::Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("broken.toml");
        fs::write(&path, "terms = 3\n")?;
        assert!(Glossary::from_file(&path).is_err());
        Ok(())
    }
}
