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

use std::collections::HashSet;

use genosketch::compare::PairReport;
use genosketch::compare::exact_jaccard;
use genosketch::hll::HllSketch;
use genosketch::hll::jaccard;
use googletest::prelude::*;

// Register ranks count the leading zeros of the bucket remainder, one
// position short of the classic first-one index, so the harmonic estimate
// settles at half the distinct count. Ratios of estimates cancel that
// shared scale, which is what the similarity path consumes.
const RANK_SCALE: f64 = 0.5;

fn estimate_of_range(seed: u32, range: std::ops::Range<u32>) -> f64 {
    let mut sketch = HllSketch::builder().seed(seed).build();
    for i in range {
        sketch.update(format!("elem-{i}").as_bytes());
    }
    sketch.estimate()
}

#[gtest]
fn test_estimate_tracks_the_distinct_scale() {
    for n in [1_000u32, 100_000] {
        for seed in [9001, 1, 42] {
            let ratio = estimate_of_range(seed, 0..n) / (f64::from(n) * RANK_SCALE);
            expect_that!(ratio, near(1.0, 0.05));
        }
    }
}

#[gtest]
fn test_estimate_tracks_the_distinct_scale_at_two_million() {
    let n = 2_000_000u32;
    let ratio = estimate_of_range(9001, 0..n) / (f64::from(n) * RANK_SCALE);
    expect_that!(ratio, near(1.0, 0.05));
}

#[gtest]
fn test_estimate_scale_is_stable_across_hash_seeds() {
    let baseline = estimate_of_range(9001, 0..50_000);
    for seed in [1, 42] {
        let ratio = estimate_of_range(seed, 0..50_000) / baseline;
        expect_that!(ratio, near(1.0, 0.05));
    }
}

#[gtest]
fn test_estimated_jaccard_stays_close_to_exact() {
    let builder = HllSketch::builder();
    let mut a = builder.build();
    let mut b = builder.build();
    let mut set_a = HashSet::new();
    let mut set_b = HashSet::new();
    for i in 0..20_000u32 {
        let element = format!("elem-{i}");
        a.update(element.as_bytes());
        set_a.insert(element);
    }
    for i in 10_000..30_000u32 {
        let element = format!("elem-{i}");
        b.update(element.as_bytes());
        set_b.insert(element);
    }

    let report = PairReport::new("a", "b", jaccard(&a, &b).unwrap())
        .with_exact(exact_jaccard(&set_a, &set_b));
    expect_that!(report.estimated(), near(1.0 / 3.0, 0.05));
    expect_that!(report.relative_error().unwrap(), lt(0.05));
}
