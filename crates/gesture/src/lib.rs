// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file,
// You can obtain one at <https://mozilla.org/MPL/2.0/>.

//! # Gesture-to-transform mapping
//!
//! The state machines behind Touchy Volumes' interactions, free of any windowing, picking or
//! rendering concerns.  Pointer deltas become fixed-size Y rotation steps (with a per-node sign
//! correction for bodies on the far side of a rotated view), double-taps cycle through discrete
//! scales, pinches set the scale directly, taps toggle a shader effect whose asynchronous
//! updates are sequenced, and long presses gate a per-frame side effect.
//!
//! The [`GestureTransformController`] ties these together and owns all per-node state, keyed by
//! node identity.

mod controller;
pub mod effect;
mod long_press;
mod pinch;
mod rotation;
mod scale;
mod space;
mod tap;

pub use controller::{ControllerConfig, GestureKind, GestureTransformController};
pub use long_press::LongPress;
pub use pinch::{MagnifyTracker, PinchScale};
pub use rotation::{DragRotation, FrameInversion, RotationStep, DEFAULT_ROTATION_STEP_DEGREES};
pub use scale::{ScaleCycle, ScaleCyclePolicy, DEFAULT_SCALE_LEVELS};
pub use space::{CoordinateSpace, PointerSample};
pub use tap::{TapCount, TapRecognizer};

/// A module which is typically glob imported.
pub mod prelude {
    pub use super::{
        effect::{EffectError, EffectPreset, EffectRequest, PulseParameters},
        CoordinateSpace, FrameInversion, GestureKind, GestureTransformController, PointerSample,
    };
}

// End of File
