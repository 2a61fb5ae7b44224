//! Input adapters: pointer samples, hand landmarks and confirm gestures.

mod gesture;
pub(crate) mod landmarks;

pub use gesture::{InputGestureMapper, MappedInput, PointerSample};
pub use landmarks::{
    classifier_for, FistClassifier, GestureClassifier, HandLandmarks, Landmark, PinchClassifier,
    LANDMARK_COUNT,
};
