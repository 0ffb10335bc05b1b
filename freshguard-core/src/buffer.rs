//! Fixed-Length Rolling Window for Trend History
//!
//! ## Overview
//!
//! A ring buffer that is *always full*. It is created with N points and
//! every push overwrites the oldest one, so its length never changes. Trend
//! charts can draw it immediately after a profile switch without waiting for
//! N live readings.
//!
//! ### Memory Layout
//!
//! ```text
//! HistoryWindow<5> seeded with S1..S5, then two live pushes:
//! ┌─────┬─────┬─────┬─────┬─────┐
//! │ L6  │ L7  │ S3  │ S4  │ S5  │  ← physical slots (S = seeded, L = live)
//! └─────┴─────┴─────┴─────┴─────┘
//!                ↑
//!                └── write_pos = 2 (oldest point, next to be overwritten)
//!
//! Logical view (oldest → newest): S3 S4 S5 L6 L7
//! ```
//!
//! ### Seeded vs Live
//!
//! Each point remembers where it came from. Seeded points are a display
//! affordance synthesized on profile switch; live points are real reading
//! cycles. Tests and renderers use [`PointOrigin`] to tell them apart.
//!
//! ## Usage Example
//!
//! ```rust
//! use freshguard_core::buffer::{HistoryWindow, PointOrigin};
//!
//! let mut window: HistoryWindow<3> = HistoryWindow::filled(4.0);
//! window.push(4.3);
//!
//! assert_eq!(window.len(), 3);
//! assert_eq!(window.values(), vec![4.0, 4.0, 4.3]);
//! assert_eq!(window.last().origin, PointOrigin::Live);
//! ```

use serde::Serialize;

/// Where a history point came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PointOrigin {
    /// Synthesized when the window was (re)initialized
    Seeded,
    /// Appended from a reading cycle
    Live,
}

/// One value in a history window
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HistoryPoint {
    /// Reading value
    pub value: f64,
    /// Where the value came from
    pub origin: PointOrigin,
}

impl HistoryPoint {
    /// Point synthesized on (re)seed
    pub const fn seeded(value: f64) -> Self {
        Self {
            value,
            origin: PointOrigin::Seeded,
        }
    }

    /// Point from a reading cycle
    pub const fn live(value: f64) -> Self {
        Self {
            value,
            origin: PointOrigin::Live,
        }
    }
}

/// Always-full ring buffer of N points
///
/// ## Internal Invariants
///
/// - `N > 0` (checked when the window is built)
/// - every slot holds a point (no `Option`, no partial fill)
/// - `write_pos < N` and points at the oldest point
/// - logical order is `write_pos, write_pos+1, …` modulo N
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryWindow<const N: usize> {
    data: [HistoryPoint; N],
    write_pos: usize,
}

impl<const N: usize> HistoryWindow<N> {
    const NON_EMPTY: () = assert!(N > 0, "HistoryWindow needs at least one slot");

    /// Window seeded from points given oldest first
    ///
    /// A zero-length window is rejected at compile time:
    ///
    /// ```compile_fail
    /// use freshguard_core::buffer::HistoryWindow;
    ///
    /// let window: HistoryWindow<0> = HistoryWindow::filled(1.0);
    /// ```
    pub fn from_points(data: [HistoryPoint; N]) -> Self {
        let () = Self::NON_EMPTY;
        Self { data, write_pos: 0 }
    }

    /// Window of N seeded copies of one value
    pub fn filled(value: f64) -> Self {
        Self::from_points([HistoryPoint::seeded(value); N])
    }

    /// Append a live value, evicting the oldest
    pub fn push(&mut self, value: f64) {
        self.push_point(HistoryPoint::live(value));
    }

    /// Append a point, evicting the oldest
    pub fn push_point(&mut self, point: HistoryPoint) {
        self.data[self.write_pos] = point;
        self.write_pos = (self.write_pos + 1) % N;
    }

    /// Always N
    pub const fn len(&self) -> usize {
        N
    }

    /// Always false
    pub const fn is_empty(&self) -> bool {
        N == 0
    }

    /// Most recent point
    pub fn last(&self) -> &HistoryPoint {
        let idx = if self.write_pos == 0 { N - 1 } else { self.write_pos - 1 };
        &self.data[idx]
    }

    /// Oldest point
    pub fn first(&self) -> &HistoryPoint {
        &self.data[self.write_pos]
    }

    /// Point by logical index (0 = oldest, N-1 = newest)
    pub fn get(&self, index: usize) -> Option<&HistoryPoint> {
        if index >= N {
            return None;
        }
        self.data.get((self.write_pos + index) % N)
    }

    /// Iterate oldest to newest
    pub fn iter(&self) -> HistoryWindowIter<'_, N> {
        HistoryWindowIter {
            window: self,
            index: 0,
        }
    }

    /// Values oldest to newest
    pub fn values(&self) -> Vec<f64> {
        self.iter().map(|p| p.value).collect()
    }

    /// Number of points appended by reading cycles
    pub fn live_count(&self) -> usize {
        self.iter()
            .filter(|p| p.origin == PointOrigin::Live)
            .count()
    }
}

/// Iterator over a window, oldest first
pub struct HistoryWindowIter<'a, const N: usize> {
    window: &'a HistoryWindow<N>,
    index: usize,
}

impl<'a, const N: usize> Iterator for HistoryWindowIter<'a, N> {
    type Item = &'a HistoryPoint;

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.window.get(self.index)?;
        self.index += 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = N.saturating_sub(self.index);
        (remaining, Some(remaining))
    }
}

impl<'a, const N: usize> ExactSizeIterator for HistoryWindowIter<'a, N> {}

impl<'a, const N: usize> IntoIterator for &'a HistoryWindow<N> {
    type Item = &'a HistoryPoint;
    type IntoIter = HistoryWindowIter<'a, N>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<const N: usize> Serialize for HistoryWindow<N> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}
