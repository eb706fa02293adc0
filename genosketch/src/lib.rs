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

//! Probabilistic sketching for genome similarity.
//!
//! Genomes are compared by the Jaccard similarity of their k-mer (or
//! minimizer) sets. Materializing those sets is impractical at genome
//! scale, so this crate summarizes each one in a fixed-memory
//! [`hll::HllSketch`] and estimates similarity from sketch cardinalities
//! alone.
//!
//! * [`kmer`] extracts k-mers and window minimizers from raw sequences.
//! * [`hll`] holds the sketch, its estimator, and [`hll::jaccard`].
//! * [`hash`] provides the seeded 32-bit hashing behind sketch updates.
//! * [`compare`] carries comparison reports and the exact baseline used
//!   to validate estimates.
//!
//! # Usage
//!
//! ```rust
//! use genosketch::hll::HllSketch;
//! use genosketch::hll::jaccard;
//! use genosketch::kmer::minimizers;
//!
//! let left = b"GATTACAGATTACAGATTACA";
//! let right = b"GATTACAGATTACAGATTACC";
//!
//! // One builder per comparison session keeps the sketches compatible.
//! let builder = HllSketch::builder().precision(12);
//! let mut a = builder.build();
//! let mut b = builder.build();
//! for minimizer in minimizers(left, 4, 8) {
//!     a.update(minimizer);
//! }
//! for minimizer in minimizers(right, 4, 8) {
//!     b.update(minimizer);
//! }
//!
//! let similarity = jaccard(&a, &b)?;
//! assert!((0.0..=1.0).contains(&similarity));
//! # Ok::<(), genosketch::Error>(())
//! ```

pub mod compare;
mod error;
pub mod hash;
pub mod hll;
pub mod kmer;

pub use self::error::Error;
pub use self::error::ErrorKind;
