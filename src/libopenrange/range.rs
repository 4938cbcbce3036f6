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

//! Open-ended range over a totally ordered bound.
//!
//! A range is described by its bound, a direction and whether the bound belongs to the range. Downward ranges cover the values below the bound, upward ranges the values above it. Ranges are built with one of the four functions [less_or_equal](fn.less_or_equal.html), [less_than](fn.less_than.html), [more_or_equal](fn.more_or_equal.html) and [more_than](fn.more_than.html).
//!
//! # Examples
//!
//! ```rust
//! use open_range::*;
//!
//! let range = less_than(512);
//! assert!(range.contains(&0));
//! assert!(!range.contains(&512));
//! assert!(!range.contains(&1024));
//! assert_eq!(format!("{}", range), "<512");
//!
//! let range = more_or_equal(512);
//! assert!(!range.contains(&0));
//! assert!(range.contains(&512));
//! assert!(range.contains(&1024));
//! assert_eq!(format!("{}", range), ">=512");
//! ```
//!
//! The complement of an open range is an open range, and a range can be used wherever a `RangeBounds` is expected:
//!
//! ```rust
//! use open_range::*;
//! use gcollections::ops::*;
//! use std::collections::BTreeMap;
//!
//! let at_most_two = less_or_equal(2);
//! assert_eq!(at_most_two.complement(), more_than(2));
//!
//! let map: BTreeMap<i32, &str> = vec![(1, "a"), (2, "b"), (3, "c")].into_iter().collect();
//! let keys: Vec<i32> = map.range(at_most_two).map(|(k, _)| *k).collect();
//! assert_eq!(keys, vec![1, 2]);
//! ```

use gcollections::kind::*;
use gcollections::ops::*;
use num_traits::Bounded as NumBounded;
use num_traits::PrimInt;
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Bound, RangeBounds, RangeFrom, RangeTo, RangeToInclusive};

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct OpenRange<T> {
  value: T,
  downward: bool,
  inclusive: bool
}

/// Range covering `max_inclusive` and every value below it.
pub fn less_or_equal<T: Ord>(max_inclusive: T) -> OpenRange<T> {
  OpenRange::new(max_inclusive, true, true)
}

/// Range covering every value strictly below `max_exclusive`.
pub fn less_than<T: Ord>(max_exclusive: T) -> OpenRange<T> {
  OpenRange::new(max_exclusive, true, false)
}

/// Range covering `min_inclusive` and every value above it.
pub fn more_or_equal<T: Ord>(min_inclusive: T) -> OpenRange<T> {
  OpenRange::new(min_inclusive, false, true)
}

/// Range covering every value strictly above `min_exclusive`.
pub fn more_than<T: Ord>(min_exclusive: T) -> OpenRange<T> {
  OpenRange::new(min_exclusive, false, false)
}

impl<T> OpenRange<T>
{
  fn new(value: T, downward: bool, inclusive: bool) -> OpenRange<T> {
    OpenRange { value, downward, inclusive }
  }

  pub fn value(&self) -> &T {
    &self.value
  }

  pub fn is_downward(&self) -> bool {
    self.downward
  }

  pub fn is_upward(&self) -> bool {
    !self.downward
  }

  pub fn is_inclusive(&self) -> bool {
    self.inclusive
  }
}

impl<T: Ord> OpenRange<T>
{
  /// Checks whether `value` belongs to the range.
  pub fn contains(&self, value: &T) -> bool {
    match self.value.cmp(value) {
      Ordering::Less => !self.downward,
      Ordering::Greater => self.downward,
      Ordering::Equal => self.inclusive
    }
  }
}

impl<T> Collection for OpenRange<T>
{
  type Item = T;
}

impl<T: Ord> Contains for OpenRange<T>
{
  fn contains(&self, value: &T) -> bool {
    OpenRange::contains(self, value)
  }
}

impl<T: Ord + Clone> Complement for OpenRange<T>
{
  fn complement(&self) -> OpenRange<T> {
    OpenRange::new(self.value.clone(), !self.downward, !self.inclusive)
  }
}

/// Only meaningful for bounded domains: `<min` and `>max` are the two empty ranges.
impl<T: Ord + NumBounded> IsEmpty for OpenRange<T>
{
  fn is_empty(&self) -> bool {
    !self.inclusive && self.value == self.extremum()
  }
}

/// On integers, `<min+1` and `>max-1` hold a single value as well as `<=min` and `>=max`.
impl<T: PrimInt> IsSingleton for OpenRange<T>
{
  fn is_singleton(&self) -> bool {
    let extremum = self.extremum();
    if self.inclusive { self.value == extremum }
    else if self.value == extremum { false }
    else if self.downward { self.value - T::one() == extremum }
    else { self.value + T::one() == extremum }
  }
}

impl<T: NumBounded> OpenRange<T>
{
  // Smallest value for a downward range, largest for an upward one.
  fn extremum(&self) -> T {
    if self.downward { T::min_value() }
    else { T::max_value() }
  }
}

impl<T> RangeBounds<T> for OpenRange<T>
{
  fn start_bound(&self) -> Bound<&T> {
    if self.downward { Bound::Unbounded }
    else { self.bound() }
  }

  fn end_bound(&self) -> Bound<&T> {
    if self.downward { self.bound() }
    else { Bound::Unbounded }
  }
}

impl<T> OpenRange<T>
{
  fn bound(&self) -> Bound<&T> {
    if self.inclusive { Bound::Included(&self.value) }
    else { Bound::Excluded(&self.value) }
  }
}

impl<T: Ord> From<RangeToInclusive<T>> for OpenRange<T>
{
  fn from(range: RangeToInclusive<T>) -> OpenRange<T> {
    less_or_equal(range.end)
  }
}

impl<T: Ord> From<RangeTo<T>> for OpenRange<T>
{
  fn from(range: RangeTo<T>) -> OpenRange<T> {
    less_than(range.end)
  }
}

impl<T: Ord> From<RangeFrom<T>> for OpenRange<T>
{
  fn from(range: RangeFrom<T>) -> OpenRange<T> {
    more_or_equal(range.start)
  }
}

impl<T: fmt::Display> fmt::Display for OpenRange<T>
{
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let direction = if self.downward { "<" } else { ">" };
    let inclusive = if self.inclusive { "=" } else { "" };
    f.pad(&format!("{}{}{}", direction, inclusive, self.value))
  }
}
