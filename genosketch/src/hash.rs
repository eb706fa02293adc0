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

//! Seeded 32-bit hashing for sketch updates.
//!
//! Sketches index their buckets and derive ranks from a 32-bit hash of each
//! element. Every sketch taking part in one comparison must use the same
//! hash implementation and seed; see [`crate::hll::HllSketchBuilder`].

/// Default seed used by sketch updates.
pub const DEFAULT_UPDATE_SEED: u32 = 9001;

/// A seeded hash from a byte sequence to a 32-bit value.
///
/// Implementations must be deterministic for a given `(data, seed)` pair and
/// should mix well over the full 32-bit range for short keys.
pub trait Hasher32 {
    /// Hash `data` under `seed`.
    fn hash32(&self, data: &[u8], seed: u32) -> u32;
}

/// MurmurHash3, x86 32-bit variant.
///
/// The default hash for sketches in this crate. Not a cryptographic hash.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Murmur3;

impl Hasher32 for Murmur3 {
    fn hash32(&self, data: &[u8], seed: u32) -> u32 {
        murmur3_x86_32(data, seed)
    }
}

const C1: u32 = 0xcc9e_2d51;
const C2: u32 = 0x1b87_3593;

fn mix_k1(k1: u32) -> u32 {
    k1.wrapping_mul(C1).rotate_left(15).wrapping_mul(C2)
}

fn fmix32(mut h: u32) -> u32 {
    h ^= h >> 16;
    h = h.wrapping_mul(0x85eb_ca6b);
    h ^= h >> 13;
    h = h.wrapping_mul(0xc2b2_ae35);
    h ^= h >> 16;
    h
}

pub(crate) fn murmur3_x86_32(data: &[u8], seed: u32) -> u32 {
    let mut h1 = seed;

    let mut blocks = data.chunks_exact(4);
    for block in blocks.by_ref() {
        let k1 = u32::from_le_bytes([block[0], block[1], block[2], block[3]]);
        h1 ^= mix_k1(k1);
        h1 = h1.rotate_left(13);
        h1 = h1.wrapping_mul(5).wrapping_add(0xe654_6b64);
    }

    let tail = blocks.remainder();
    if !tail.is_empty() {
        let mut k1 = 0u32;
        for (i, &byte) in tail.iter().enumerate() {
            k1 |= u32::from(byte) << (8 * i);
        }
        h1 ^= mix_k1(k1);
    }

    h1 ^= data.len() as u32;
    fmix32(h1)
}
