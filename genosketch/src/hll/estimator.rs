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

//! Cardinality estimation from a register array.
//!
//! The raw harmonic-mean estimate is corrected piecewise: linear counting
//! while empty buckets remain and the raw value is small, a collision
//! correction near the top of the 32-bit hash range, and the raw value
//! otherwise. The classic extra alpha terms for fewer than 128 buckets are
//! not applied; precisions at the low end of the supported range carry more
//! bias as a result.

const TWO_POW_32: f64 = 4_294_967_296.0;

/// Bias-correction factor for `m` buckets.
fn alpha(num_buckets: f64) -> f64 {
    0.7213 / (1.0 + 1.079 / num_buckets)
}

/// Estimate the number of distinct inserted elements from `registers`.
///
/// `num_zeros` must be the count of registers still holding rank 0.
pub(crate) fn estimate(registers: &[u8], num_zeros: u32) -> f64 {
    let m = registers.len() as f64;

    let mut harmonic_sum = 0.0;
    for &rank in registers {
        harmonic_sum += 1.0 / (1u64 << rank) as f64;
    }
    let raw = alpha(m) * m * m / harmonic_sum;

    if raw <= 2.5 * m {
        // Small range: count empty buckets instead. An all-zero sketch
        // lands here and yields ln(1) = 0.
        if num_zeros > 0 {
            return m * (m / f64::from(num_zeros)).ln();
        }
    } else if raw > TWO_POW_32 / 30.0 {
        // Large range: undo 32-bit hash collisions near saturation.
        return -TWO_POW_32 * (1.0 - raw / TWO_POW_32).ln();
    }

    raw
}
