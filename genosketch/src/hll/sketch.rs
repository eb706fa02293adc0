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

//! HyperLogLog-style sketch over 32-bit hashes.

use crate::error::Error;
use crate::hash::DEFAULT_UPDATE_SEED;
use crate::hash::Hasher32;
use crate::hash::Murmur3;
use crate::hll::estimator;

/// Smallest supported precision.
pub const MIN_PRECISION: u8 = 4;
/// Largest supported precision.
pub const MAX_PRECISION: u8 = 18;
/// Default precision (2^14 buckets).
pub const DEFAULT_PRECISION: u8 = 14;

/// Fixed-memory sketch estimating the number of distinct elements fed to it.
///
/// A sketch with precision `p` keeps `2^p` one-byte buckets. Each update
/// hashes the element to 32 bits, routes it to a bucket by the top `p` bits,
/// and records the leading-zero count of the remaining bits if it exceeds
/// the bucket's current rank. Bucket ranks never decrease, so sketches form
/// a join-semilattice under [`HllSketch::merge`].
///
/// Sketches are only combinable when they share precision and hash
/// configuration; build every sketch of a comparison session from one
/// [`HllSketchBuilder`].
#[derive(Debug, Clone, PartialEq)]
pub struct HllSketch<H = Murmur3> {
    precision: u8,
    seed: u32,
    hasher: H,
    /// One byte per bucket: registers[bucket] = maximum observed rank.
    registers: Box<[u8]>,
    /// Count of buckets still at rank 0.
    num_zeros: u32,
}

impl HllSketch<Murmur3> {
    /// Create a new builder for `HllSketch`.
    pub fn builder() -> HllSketchBuilder {
        HllSketchBuilder::default()
    }
}

impl<H: Hasher32> HllSketch<H> {
    fn new(precision: u8, seed: u32, hasher: H) -> Self {
        let num_buckets = 1usize << precision;
        Self {
            precision,
            seed,
            hasher,
            registers: vec![0u8; num_buckets].into_boxed_slice(),
            num_zeros: num_buckets as u32,
        }
    }

    /// Feed one element into the sketch.
    ///
    /// Any byte sequence is a valid element, including the empty one.
    /// Feeding the same element again leaves the sketch unchanged.
    pub fn update(&mut self, element: &[u8]) {
        let hash = self.hasher.hash32(element, self.seed);
        let bucket = (hash >> (32 - self.precision)) as usize;
        let remainder = hash << self.precision;
        // leading_zeros(0) is 32 in Rust; clip to the largest rank a
        // bucket of this precision can represent.
        let max_rank = 32 - self.precision;
        let rank = (remainder.leading_zeros() as u8).min(max_rank);
        self.raise_bucket(bucket, rank);
    }

    /// Estimate the number of distinct elements fed to this sketch.
    ///
    /// Returns exactly `0.0` for a sketch with no recorded rank. The
    /// relative spread of the estimate narrows as `1.04 / sqrt(2^p)`.
    pub fn estimate(&self) -> f64 {
        estimator::estimate(&self.registers, self.num_zeros)
    }

    /// Fold `other` into this sketch, bucket by bucket.
    ///
    /// After a successful merge this sketch summarizes the union of both
    /// input streams. Merging is commutative, associative, and idempotent.
    ///
    /// # Errors
    ///
    /// [`ErrorKind::IncompatibleSketches`](crate::ErrorKind) when the two
    /// sketches differ in precision or hash seed.
    pub fn merge(&mut self, other: &Self) -> Result<(), Error> {
        self.ensure_compatible(other)?;
        for (bucket, &rank) in other.registers.iter().enumerate() {
            self.raise_bucket(bucket, rank);
        }
        Ok(())
    }

    /// Return a new sketch summarizing the union of both input streams,
    /// leaving both operands untouched.
    ///
    /// # Errors
    ///
    /// [`ErrorKind::IncompatibleSketches`](crate::ErrorKind) when the two
    /// sketches differ in precision or hash seed.
    pub fn union(&self, other: &Self) -> Result<Self, Error>
    where
        H: Clone,
    {
        let mut merged = self.clone();
        merged.merge(other)?;
        Ok(merged)
    }

    /// Return the configured precision.
    pub fn precision(&self) -> u8 {
        self.precision
    }

    /// Return the configured hash seed.
    pub fn seed(&self) -> u32 {
        self.seed
    }

    /// Return the number of buckets (`2^precision`).
    pub fn num_buckets(&self) -> usize {
        self.registers.len()
    }

    /// Return the bucket array.
    pub fn registers(&self) -> &[u8] {
        &self.registers
    }

    /// Whether no update has recorded a nonzero rank yet.
    pub fn is_empty(&self) -> bool {
        self.num_zeros as usize == self.registers.len()
    }

    #[inline]
    fn raise_bucket(&mut self, bucket: usize, rank: u8) {
        let current = self.registers[bucket];
        if rank > current {
            if current == 0 {
                self.num_zeros -= 1;
            }
            self.registers[bucket] = rank;
        }
    }

    fn ensure_compatible(&self, other: &Self) -> Result<(), Error> {
        if self.precision != other.precision {
            return Err(Error::incompatible_sketches(format!(
                "precision mismatch: {} vs {}",
                self.precision, other.precision
            )));
        }
        if self.seed != other.seed {
            return Err(Error::incompatible_sketches(format!(
                "hash seed mismatch: {} vs {}",
                self.seed, other.seed
            )));
        }
        Ok(())
    }
}

/// Builder for [`HllSketch`].
///
/// The builder is the configuration of a whole comparison session: every
/// sketch built from the same builder shares precision, seed, and hash
/// implementation, which is exactly what [`HllSketch::merge`] and
/// [`crate::hll::jaccard`] require of their operands.
#[derive(Debug, Clone)]
pub struct HllSketchBuilder<H = Murmur3> {
    precision: u8,
    seed: u32,
    hasher: H,
}

impl Default for HllSketchBuilder<Murmur3> {
    fn default() -> Self {
        Self {
            precision: DEFAULT_PRECISION,
            seed: DEFAULT_UPDATE_SEED,
            hasher: Murmur3,
        }
    }
}

impl<H> HllSketchBuilder<H> {
    /// Set the precision. The sketch keeps `2^precision` one-byte buckets.
    ///
    /// # Panics
    ///
    /// If `precision` is not in range [4, 18]
    pub fn precision(mut self, precision: u8) -> Self {
        assert!(
            (MIN_PRECISION..=MAX_PRECISION).contains(&precision),
            "precision must be in [{}, {}], got {}",
            MIN_PRECISION,
            MAX_PRECISION,
            precision
        );
        self.precision = precision;
        self
    }

    /// Set the hash seed.
    pub fn seed(mut self, seed: u32) -> Self {
        self.seed = seed;
        self
    }

    /// Replace the hash implementation.
    pub fn hasher<H2: Hasher32>(self, hasher: H2) -> HllSketchBuilder<H2> {
        HllSketchBuilder {
            precision: self.precision,
            seed: self.seed,
            hasher,
        }
    }

    /// Build an empty sketch with this configuration.
    ///
    /// The builder is reusable; call `build` once per input stream of a
    /// comparison session.
    pub fn build(&self) -> HllSketch<H>
    where
        H: Hasher32 + Clone,
    {
        HllSketch::new(self.precision, self.seed, self.hasher.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Hash returning a fixed value regardless of input.
    #[derive(Debug, Clone, Copy)]
    struct FixedHash(u32);

    impl Hasher32 for FixedHash {
        fn hash32(&self, _data: &[u8], _seed: u32) -> u32 {
            self.0
        }
    }

    #[test]
    fn new_sketch_is_empty() {
        let sketch = HllSketch::builder().precision(6).build();
        assert!(sketch.is_empty());
        assert_eq!(sketch.num_buckets(), 64);
        assert_eq!(sketch.estimate(), 0.0);
        assert!(sketch.registers().iter().all(|&rank| rank == 0));
    }

    #[test]
    fn builder_defaults() {
        let sketch = HllSketch::builder().build();
        assert_eq!(sketch.precision(), DEFAULT_PRECISION);
        assert_eq!(sketch.seed(), DEFAULT_UPDATE_SEED);
        assert_eq!(sketch.num_buckets(), 1 << DEFAULT_PRECISION);
    }

    #[test]
    #[should_panic(expected = "precision must be in [4, 18], got 3")]
    fn precision_below_range_panics() {
        let _ = HllSketch::builder().precision(3);
    }

    #[test]
    #[should_panic(expected = "precision must be in [4, 18], got 19")]
    fn precision_above_range_panics() {
        let _ = HllSketch::builder().precision(19);
    }

    #[test]
    fn update_routes_top_bits_to_bucket() {
        // 0x3040_0000: top 4 bits pick bucket 3, the shifted remainder
        // 0x0400_0000 carries 5 leading zeros.
        let builder = HllSketch::builder().precision(4).hasher(FixedHash(0x3040_0000));
        let mut sketch = builder.build();
        sketch.update(b"anything");
        assert_eq!(sketch.registers()[3], 5);
    }

    #[test]
    fn zero_remainder_is_clipped_to_max_rank() {
        // 0x3000_0000 shifts to an all-zero remainder at precision 4; the
        // rank must be the representable maximum 32 - 4, not 32.
        let builder = HllSketch::builder().precision(4).hasher(FixedHash(0x3000_0000));
        let mut sketch = builder.build();
        sketch.update(b"anything");
        assert_eq!(sketch.registers()[3], 28);
    }

    #[test]
    fn empty_element_is_valid() {
        let mut sketch = HllSketch::builder().precision(10).build();
        sketch.update(b"");
        let snapshot = sketch.registers().to_vec();
        sketch.update(b"");
        assert_eq!(sketch.registers(), snapshot.as_slice());
    }
}
