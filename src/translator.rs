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

//! Batched machine translation through the Microsoft Translator v3 API.

use anyhow::Context;
use log::{info, warn};
use serde::Deserialize;
use serde_json::json;
use std::thread;
use std::time::Duration;
use uuid::Uuid;

use crate::po::PoFile;

/// API endpoint for a global Translator resource.
pub const DEFAULT_ENDPOINT: &str = "https://api.cognitive.microsofttranslator.com";

/// Client for the Translator `/translate` call.
pub struct Translator {
    client: reqwest::blocking::Client,
    endpoint: String,
    api_key: String,
    region: Option<String>,
    source_lang: String,
    target_lang: String,
}

#[derive(Debug, Deserialize)]
struct TranslateItem {
    #[serde(default)]
    translations: Vec<Translation>,
}

#[derive(Debug, Deserialize)]
struct Translation {
    text: String,
}

impl Translator {
    /// `region` identifies the Azure resource region and is only needed
    /// for non-global resources.
    pub fn new(
        endpoint: String,
        api_key: String,
        region: Option<String>,
        source_lang: String,
        target_lang: String,
    ) -> Self {
        Self {
            client: reqwest::blocking::Client::new(),
            endpoint,
            api_key,
            region,
            source_lang,
            target_lang,
        }
    }

    /// Translate a batch of texts, preserving order.
    ///
    /// Texts the service returned no translation for come back as empty
    /// strings.
    pub fn translate_batch(&self, texts: &[String]) -> anyhow::Result<Vec<String>> {
        if texts.is_empty() {
            return Ok(Vec::new());
        }
        let body = texts
            .iter()
            .map(|text| json!({ "text": text }))
            .collect::<Vec<_>>();
        let url = format!("{}/translate", self.endpoint);
        let mut request = self
            .client
            .post(&url)
            .query(&[
                ("api-version", "3.0"),
                ("from", self.source_lang.as_str()),
                ("to", self.target_lang.as_str()),
            ])
            .header("Ocp-Apim-Subscription-Key", self.api_key.as_str())
            .header("X-ClientTraceId", Uuid::new_v4().to_string())
            .json(&body);
        if let Some(region) = &self.region {
            request = request.header("Ocp-Apim-Subscription-Region", region.as_str());
        }

        let response = request
            .send()
            .and_then(reqwest::blocking::Response::error_for_status)
            .context("Translation request failed")?;
        let items: Vec<TranslateItem> = response
            .json()
            .context("Could not parse translation response")?;

        let mut translations = items
            .into_iter()
            .map(|item| {
                item.translations
                    .into_iter()
                    .next()
                    .map(|translation| translation.text)
                    .unwrap_or_default()
            })
            .collect::<Vec<_>>();
        // A short response leaves the tail untranslated rather than
        // misaligning the batch.
        translations.resize(texts.len(), String::new());
        Ok(translations)
    }
}

/// Outcome of a fill run.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct FillSummary {
    /// Messages that received a translation.
    pub filled: usize,
    /// Untranslated messages found at the start of the run.
    pub total: usize,
}

impl FillSummary {
    /// Percentage of messages filled, rounded down.
    pub fn percent(&self) -> usize {
        if self.total == 0 {
            100
        } else {
            self.filled * 100 / self.total
        }
    }
}

/// Fill every untranslated message in `po`, `batch_size` messages per
/// `translate` call, sleeping `delay` between calls to stay under the
/// service rate limits.
///
/// `translate` maps a batch of message texts to translations in the same
/// order. A failed call is logged and its batch left untranslated, so one
/// bad batch does not abort the run. Empty translations are skipped too.
pub fn fill_untranslated<F>(
    po: &mut PoFile,
    batch_size: usize,
    delay: Duration,
    mut translate: F,
) -> FillSummary
where
    F: FnMut(&[String]) -> anyhow::Result<Vec<String>>,
{
    let untranslated = po.untranslated();
    let mut summary = FillSummary {
        filled: 0,
        total: untranslated.len(),
    };
    let batch_size = batch_size.max(1);
    let batch_count = untranslated.len().div_ceil(batch_size);

    for (idx, batch) in untranslated.chunks(batch_size).enumerate() {
        if idx > 0 && !delay.is_zero() {
            thread::sleep(delay);
        }
        info!(
            "Translating batch {}/{batch_count} ({} messages)",
            idx + 1,
            batch.len()
        );
        let texts = batch
            .iter()
            .map(|message| message.text.clone())
            .collect::<Vec<_>>();
        let translations = match translate(&texts) {
            Ok(translations) => translations,
            Err(err) => {
                warn!("Batch {}/{batch_count} failed: {err:#}", idx + 1);
                continue;
            }
        };
        for (message, translation) in batch.iter().zip(&translations) {
            if po.fill(&message.msgid, translation) {
                summary.filled += 1;
            }
        }
    }
    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn catalog(msgids: &[&str]) -> PoFile {
        let mut content = String::new();
        for msgid in msgids {
            content.push_str(&format!("msgid \"{msgid}\"\nmsgstr \"\"\n\n"));
        }
        PoFile::new(content)
    }

    #[test]
    fn test_fill_untranslated_batches_and_fills() {
        let mut po = catalog(&["alpha", "bravo", "charlie", "delta", "echo"]);
        let mut batch_sizes = Vec::new();
        let summary = fill_untranslated(&mut po, 2, Duration::ZERO, |texts| {
            batch_sizes.push(texts.len());
            Ok(texts.iter().map(|text| text.to_uppercase()).collect())
        });

        assert_eq!(batch_sizes, vec![2, 2, 1]);
        assert_eq!(summary, FillSummary { filled: 5, total: 5 });
        for translation in ["ALPHA", "BRAVO", "CHARLIE", "DELTA", "ECHO"] {
            assert!(po.content().contains(&format!("msgstr \"{translation}\"")));
        }
    }

    #[test]
    fn test_fill_untranslated_continues_after_failed_batch() {
        let mut po = catalog(&["alpha", "bravo", "charlie"]);
        let mut calls = 0;
        let summary = fill_untranslated(&mut po, 2, Duration::ZERO, |texts| {
            calls += 1;
            if calls == 1 {
                anyhow::bail!("service unavailable");
            }
            Ok(texts.iter().map(|text| text.to_uppercase()).collect())
        });

        assert_eq!(calls, 2);
        assert_eq!(summary, FillSummary { filled: 1, total: 3 });
        assert!(po.content().contains("msgid \"alpha\"\nmsgstr \"\""));
        assert!(po.content().contains("msgid \"charlie\"\nmsgstr \"CHARLIE\""));
    }

    #[test]
    fn test_fill_untranslated_skips_empty_translations() {
        let mut po = catalog(&["alpha", "bravo"]);
        let summary = fill_untranslated(&mut po, 10, Duration::ZERO, |texts| {
            Ok(texts
                .iter()
                .map(|text| {
                    if text == "alpha" {
                        String::new()
                    } else {
                        text.to_uppercase()
                    }
                })
                .collect())
        });

        assert_eq!(summary, FillSummary { filled: 1, total: 2 });
        assert!(po.content().contains("msgid \"alpha\"\nmsgstr \"\""));
        assert!(po.content().contains("msgid \"bravo\"\nmsgstr \"BRAVO\""));
    }

    #[test]
    fn test_fill_untranslated_empty_catalog() {
        let mut po = PoFile::new("msgid \"done\"\nmsgstr \"finished\"\n");
        let mut calls = 0;
        let summary = fill_untranslated(&mut po, 10, Duration::ZERO, |_| {
            calls += 1;
            Ok(Vec::new())
        });

        assert_eq!(calls, 0);
        assert_eq!(summary, FillSummary { filled: 0, total: 0 });
        assert_eq!(summary.percent(), 100);
    }

    #[test]
    fn test_fill_untranslated_sends_unescaped_text() {
        let mut po = PoFile::new("msgid \"Say \\\"hi\\\"\"\nmsgstr \"\"\n");
        let mut seen = Vec::new();
        fill_untranslated(&mut po, 10, Duration::ZERO, |texts| {
            seen.extend(texts.to_vec());
            Ok(vec!["说\"嗨\"".to_string()])
        });

        assert_eq!(seen, vec!["Say \"hi\"".to_string()]);
        assert!(po
            .content()
            .contains("msgid \"Say \\\"hi\\\"\"\nmsgstr \"说\\\"嗨\\\"\""));
    }

    #[test]
    fn test_percent_rounds_down() {
        let summary = FillSummary { filled: 2, total: 3 };
        assert_eq!(summary.percent(), 66);
    }
}
