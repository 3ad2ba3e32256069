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

//! Print translation statistics for a set of PO files, one line each.

use clap::Parser;
use std::path::PathBuf;

use po_translate_helpers::po::PoFile;
use po_translate_helpers::stats::MessageStats;

#[derive(Debug, Parser)]
#[command(about = "Report translated/untranslated message counts for PO files")]
struct Args {
    /// The PO files to summarize.
    #[arg(id = "language.po", required = true)]
    po_files: Vec<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    for path in &args.po_files {
        let po = PoFile::load(path)?;
        let mut stats = MessageStats::for_po(&po);
        if stats.language.is_empty() {
            stats.language = path.display().to_string();
        }
        println!("{stats}");
    }
    Ok(())
}
