// Copyright 2026 Pierre Talbot (IRCAM)

// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at

//     http://www.apache.org/licenses/LICENSE-2.0

// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! This library provides open-ended ranges, that is ranges bounded on exactly one side such as `<=512` or `>1024`. The bound can be of any totally ordered type. Operations on ranges (membership, complement) are implemented through the traits of the [gcollections](https://crates.io/crates/gcollections) library so generic algorithms can work on them.
//!
//! # Examples
//!
//! ```rust
//! use open_range::*;
//!
//! let small = less_or_equal(512);
//! assert!(small.contains(&0));
//! assert!(small.contains(&512));
//! assert!(!small.contains(&1024));
//! assert_eq!(small.to_string(), "<=512");
//!
//! let big = more_than(1024);
//! assert_eq!(big.to_string(), ">1024");
//! ```
//!
//! For more examples see the [range module](range/index.html).

extern crate gcollections;
extern crate num_traits;

pub mod range;

pub use crate::range::{OpenRange, less_or_equal, less_than, more_or_equal, more_than};
