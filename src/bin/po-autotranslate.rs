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

//! Fill untranslated messages in a PO file through the Microsoft
//! Translator API.
//!
//! Collects every msgid with an empty `msgstr`, translates them in
//! batches with a fixed pause between calls, and rewrites the file in
//! place. The subscription key is taken from the `AZURE_TRANSLATOR_KEY`
//! environment variable unless `--api-key` is given.

use clap::Parser;
use log::info;
use std::path::PathBuf;
use std::time::Duration;

use po_translate_helpers::po::PoFile;
use po_translate_helpers::translator::{fill_untranslated, Translator, DEFAULT_ENDPOINT};

#[derive(Debug, Parser)]
#[command(about = "Fill untranslated messages in a PO file via the Microsoft Translator API")]
struct Args {
    /// The PO file to update in place.
    #[arg(id = "language.po")]
    po_file: PathBuf,
    /// Source language.
    #[arg(long, default_value = "en")]
    from: String,
    /// Target language.
    #[arg(long, default_value = "zh-Hans")]
    to: String,
    /// Messages per API call (the service accepts at most 100).
    #[arg(long, default_value_t = 25)]
    batch_size: usize,
    /// Seconds to sleep between API calls.
    #[arg(long, default_value_t = 1.0)]
    delay: f64,
    /// Translator API endpoint.
    #[arg(long, default_value = DEFAULT_ENDPOINT)]
    endpoint: String,
    /// Azure Translator subscription key.
    #[arg(long, env = "AZURE_TRANSLATOR_KEY", hide_env_values = true)]
    api_key: String,
    /// Azure resource region, only needed for non-global resources.
    #[arg(long, env = "AZURE_TRANSLATOR_REGION")]
    region: Option<String>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init_from_env(env_logger::Env::default().filter_or("RUST_LOG", "info"));
    let args = Args::parse();

    let mut po = PoFile::load(&args.po_file)?;
    let untranslated = po.untranslated();
    if untranslated.is_empty() {
        info!("All messages in {:?} are already translated", args.po_file);
        return Ok(());
    }
    info!(
        "Found {} untranslated messages in {:?}",
        untranslated.len(),
        args.po_file
    );

    let translator = Translator::new(args.endpoint, args.api_key, args.region, args.from, args.to);
    let delay = Duration::from_secs_f64(args.delay.max(0.0));
    let summary = fill_untranslated(&mut po, args.batch_size, delay, |texts| {
        translator.translate_batch(texts)
    });

    if summary.filled > 0 {
        po.set_revision_date(&chrono::Local::now().format("%Y-%m-%d %H:%M%z").to_string());
        po.write(&args.po_file)?;
    }
    info!(
        "Translated {}/{} messages ({}%)",
        summary.filled,
        summary.total,
        summary.percent()
    );
    Ok(())
}
