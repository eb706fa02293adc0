// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

//! Element extraction from genomic sequences.
//!
//! Sequences are treated as raw bytes: no case folding, no alphabet
//! filtering, and no reverse-complement canonicalization. Extracted
//! elements borrow from the input sequence.
//!
//! # Usage
//!
//! ```rust
//! # use genosketch::kmer::kmers;
//! let seq = b"ACGTAC";
//! let all: Vec<&[u8]> = kmers(seq, 3).collect();
//! assert_eq!(all, [b"ACG", b"CGT", b"GTA", b"TAC"]);
//! ```

mod minimizer;
pub use self::minimizer::minimizers;

/// Iterate over every k-mer (length-`k` substring) of `sequence`.
///
/// A sequence shorter than `k` yields nothing.
///
/// # Panics
///
/// If `k` is 0
pub fn kmers(sequence: &[u8], k: usize) -> impl Iterator<Item = &[u8]> {
    assert!(k >= 1, "k-mer length must be at least 1, got {k}");
    sequence.windows(k)
}
