// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file,
// You can obtain one at <https://mozilla.org/MPL/2.0/>.

/// Counts consecutive clicks on the same target.
///
/// Every click is reported as a tap; the second click landing on the same target within the
/// interval is additionally a double tap, after which counting starts over.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TapRecognizer<T> {
    interval: f32,
    last: Option<(T, f32)>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TapCount {
    Single,
    Double,
}

impl<T: Copy + PartialEq> TapRecognizer<T> {
    pub fn new(interval: f32) -> Self {
        Self {
            interval,
            last: None,
        }
    }

    pub fn click(&mut self, target: T, now: f32) -> TapCount {
        match self.last {
            Some((previous, at)) if previous == target && now - at <= self.interval => {
                self.last = None;
                TapCount::Double
            }
            _ => {
                self.last = Some((target, now));
                TapCount::Single
            }
        }
    }
}


// End of File
