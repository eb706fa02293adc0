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

//! Set similarity from pairs of sketches.

use crate::error::Error;
use crate::hash::Hasher32;
use crate::hll::HllSketch;

/// Estimate the Jaccard similarity of the element streams behind `a` and `b`.
///
/// Computed by inclusion-exclusion over the two cardinality estimates and
/// the estimate of their union sketch, then clamped to `[0, 1]`: estimation
/// noise can push the plain ratio slightly below zero for near-disjoint
/// inputs and slightly above one for near-identical inputs. Two empty
/// sketches have similarity `0.0` by convention.
///
/// # Errors
///
/// [`ErrorKind::IncompatibleSketches`](crate::ErrorKind) when the two
/// sketches differ in precision or hash seed.
pub fn jaccard<H>(a: &HllSketch<H>, b: &HllSketch<H>) -> Result<f64, Error>
where
    H: Hasher32 + Clone,
{
    let estimate_a = a.estimate();
    let estimate_b = b.estimate();
    let estimate_union = a.union(b)?.estimate();

    if estimate_union == 0.0 {
        return Ok(0.0);
    }

    let ratio = (estimate_a + estimate_b - estimate_union) / estimate_union;
    Ok(ratio.clamp(0.0, 1.0))
}
