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

//! HyperLogLog-style sketches for distinct counting and Jaccard similarity.
//!
//! A sketch summarizes an arbitrarily large stream of elements in `2^p`
//! one-byte buckets and answers approximate distinct-count queries. Two
//! sketches built with the same configuration merge bucket-wise, and
//! [`jaccard`] combines a pair with their union into a similarity estimate
//! in `[0, 1]`.
//!
//! # Usage
//!
//! ```rust
//! # use genosketch::hll::HllSketch;
//! let mut sketch = HllSketch::builder().precision(10).build();
//! sketch.update(b"GTACGTACGA");
//! sketch.update(b"ACGTACGTAC");
//! sketch.update(b"GTACGTACGA");
//! assert!(sketch.estimate() > 0.0);
//! ```
//!
//! Sketches taking part in one comparison must come from the same builder:
//!
//! ```rust
//! # use genosketch::hll::HllSketch;
//! # use genosketch::hll::jaccard;
//! let builder = HllSketch::builder().precision(12);
//! let mut a = builder.build();
//! let mut b = builder.build();
//! for window in b"GATTACAGATTACA".windows(4) {
//!     a.update(window);
//! }
//! for window in b"GATTACAGATTACC".windows(4) {
//!     b.update(window);
//! }
//! let similarity = jaccard(&a, &b)?;
//! assert!((0.0..=1.0).contains(&similarity));
//! # Ok::<(), genosketch::Error>(())
//! ```

mod estimator;

mod sketch;
pub use self::sketch::DEFAULT_PRECISION;
pub use self::sketch::HllSketch;
pub use self::sketch::HllSketchBuilder;
pub use self::sketch::MAX_PRECISION;
pub use self::sketch::MIN_PRECISION;

mod similarity;
pub use self::similarity::jaccard;
