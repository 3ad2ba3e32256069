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

//! Helpers for filling in missing translations in Gettext PO files.
//!
//! These utilities support a documentation translation workflow where a
//! book's catalog is mostly machine-populated: every message with an
//! empty `msgstr` is either sent to the Microsoft Translator API in
//! batches (`po-autotranslate`) or filled from a fixed glossary of
//! recurring documentation terms (`po-glossary`). `po-stats` reports how
//! much of a catalog is translated.
//!
//! Catalogs are always patched textually: an entry that is not filled in
//! keeps its exact bytes, so a translator's hand-edited formatting and
//! comments survive every run.

pub mod glossary;
pub mod po;
pub mod stats;
pub mod translator;
