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

//! Pairwise comparison results and the exact Jaccard baseline.
//!
//! The sketch-based similarity in [`crate::hll::jaccard`] never looks at
//! the underlying sets. For validation runs, [`exact_jaccard`] computes the
//! true set-based value, and [`ErrorSummary`] aggregates the deviation of
//! the estimates over many genome pairs.

use std::collections::HashSet;
use std::hash::Hash;

/// Exact Jaccard similarity of two sets: `|A ∩ B| / |A ∪ B|`.
///
/// Two empty sets have similarity `0.0` by convention.
pub fn exact_jaccard<T: Eq + Hash>(a: &HashSet<T>, b: &HashSet<T>) -> f64 {
    if a.is_empty() && b.is_empty() {
        return 0.0;
    }
    let intersection = a.intersection(b).count() as f64;
    let union = (a.len() + b.len()) as f64 - intersection;
    intersection / union
}

/// One compared pair of labeled element streams.
#[derive(Debug, Clone, PartialEq)]
pub struct PairReport {
    label_a: String,
    label_b: String,
    estimated: f64,
    exact: Option<f64>,
}

impl PairReport {
    /// Create a report row for a pair with a sketch-estimated similarity.
    pub fn new(label_a: impl Into<String>, label_b: impl Into<String>, estimated: f64) -> Self {
        Self {
            label_a: label_a.into(),
            label_b: label_b.into(),
            estimated,
            exact: None,
        }
    }

    /// Attach the exact set-based similarity of the pair.
    pub fn with_exact(mut self, exact: f64) -> Self {
        self.exact = Some(exact);
        self
    }

    /// Returns the label of the first stream.
    pub fn label_a(&self) -> &str {
        &self.label_a
    }

    /// Returns the label of the second stream.
    pub fn label_b(&self) -> &str {
        &self.label_b
    }

    /// Returns the sketch-estimated similarity.
    pub fn estimated(&self) -> f64 {
        self.estimated
    }

    /// Returns the exact similarity, when one was computed.
    pub fn exact(&self) -> Option<f64> {
        self.exact
    }

    /// Returns `|estimated - exact| / exact`.
    ///
    /// `None` without an exact value, or when the exact value is zero.
    pub fn relative_error(&self) -> Option<f64> {
        match self.exact {
            Some(exact) if exact > 0.0 => Some((self.estimated - exact).abs() / exact),
            _ => None,
        }
    }
}

/// Relative-error aggregate over the pairs of a comparison run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ErrorSummary {
    pairs: usize,
    mean_relative_error: f64,
    max_relative_error: f64,
}

impl ErrorSummary {
    /// Aggregate the reports that carry a relative error.
    ///
    /// `None` when no report does.
    pub fn from_reports(reports: &[PairReport]) -> Option<Self> {
        let mut pairs = 0usize;
        let mut sum = 0.0;
        let mut max = 0.0_f64;
        for error in reports.iter().filter_map(PairReport::relative_error) {
            pairs += 1;
            sum += error;
            max = max.max(error);
        }
        if pairs == 0 {
            return None;
        }
        Some(Self {
            pairs,
            mean_relative_error: sum / pairs as f64,
            max_relative_error: max,
        })
    }

    /// Returns the number of pairs that contributed an error.
    pub fn pairs(&self) -> usize {
        self.pairs
    }

    /// Returns the mean absolute relative error.
    pub fn mean_relative_error(&self) -> f64 {
        self.mean_relative_error
    }

    /// Returns the largest absolute relative error.
    pub fn max_relative_error(&self) -> f64 {
        self.max_relative_error
    }
}
