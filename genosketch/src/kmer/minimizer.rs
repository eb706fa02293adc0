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

//! Minimizer selection over sliding windows.

/// Collect the minimizers of `sequence`: for each window of `w` consecutive
/// bytes, the lexicographically smallest k-mer inside the window.
///
/// Consecutive windows sharing a minimizer report it once; a minimizer
/// recurring later in the sequence is reported again. A sequence shorter
/// than `w` yields nothing.
///
/// # Panics
///
/// If `k` is 0 or `w` is smaller than `k`
pub fn minimizers(sequence: &[u8], k: usize, w: usize) -> Vec<&[u8]> {
    assert!(k >= 1, "k-mer length must be at least 1, got {k}");
    assert!(
        w >= k,
        "window length must be at least the k-mer length {k}, got {w}"
    );

    let mut out: Vec<&[u8]> = Vec::new();
    for window in sequence.windows(w) {
        if let Some(minimizer) = window.windows(k).min() {
            if out.last() != Some(&minimizer) {
                out.push(minimizer);
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn picks_smallest_kmer_per_window() {
        // Windows of 4: CABD -> AB, ABDA -> AB (suppressed),
        // BDAC -> AC, DACB -> AC (suppressed).
        let found = minimizers(b"CABDACB", 2, 4);
        assert_eq!(found, [b"AB", b"AC"]);
    }

    #[test]
    fn repeated_minimizer_is_reported_when_not_consecutive() {
        let found = minimizers(b"ABABAB", 2, 2);
        assert_eq!(found, [b"AB", b"BA", b"AB", b"BA", b"AB"]);
    }

    #[test]
    fn sequence_shorter_than_window_yields_nothing() {
        assert!(minimizers(b"ACGT", 2, 5).is_empty());
    }

    #[test]
    fn window_equal_to_sequence_yields_one_minimizer() {
        let found = minimizers(b"GATTACA", 3, 7);
        assert_eq!(found, [b"ACA"]);
    }

    #[test]
    #[should_panic(expected = "window length must be at least the k-mer length")]
    fn window_smaller_than_k_panics() {
        let _ = minimizers(b"ACGTACGT", 5, 4);
    }
}
