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

//! Fill untranslated messages in a PO file from a static glossary.
//!
//! Chapter titles and boilerplate terms recur in every documentation
//! book; translating them from a glossary keeps them consistent and
//! avoids burning API quota. Without `--glossary` the builtin English to
//! Simplified Chinese table is used.

use clap::Parser;
use log::info;
use std::path::PathBuf;

use po_translate_helpers::glossary::Glossary;
use po_translate_helpers::po::PoFile;

#[derive(Debug, Parser)]
#[command(about = "Fill untranslated PO messages from a static glossary")]
struct Args {
    /// The PO file to update in place.
    #[arg(id = "language.po")]
    po_file: PathBuf,
    /// Glossary TOML file with a `[terms]` table; defaults to the
    /// builtin English-to-Chinese glossary.
    #[arg(long)]
    glossary: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init_from_env(env_logger::Env::default().filter_or("RUST_LOG", "info"));
    let args = Args::parse();

    let glossary = match &args.glossary {
        Some(path) => Glossary::from_file(path)?,
        None => Glossary::builtin_zh_cn(),
    };

    let mut po = PoFile::load(&args.po_file)?;
    let applied = glossary.apply(&mut po);
    if applied > 0 {
        po.set_revision_date(&chrono::Local::now().format("%Y-%m-%d %H:%M%z").to_string());
        po.write(&args.po_file)?;
    }
    info!("{applied} translations added to {:?}", args.po_file);
    Ok(())
}
