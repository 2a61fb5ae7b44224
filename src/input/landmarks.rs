//! Hand landmark input and pluggable confirm-gesture classifiers.

use super::gesture::PointerSample;
use crate::config::{EngineConfig, GestureKind};
use serde::{Deserialize, Serialize};

/// Number of points in a tracked hand.
pub const LANDMARK_COUNT: usize = 21;

const THUMB_TIP: usize = 4;
const INDEX_TIP: usize = 8;

/// (tip, pip) joint pairs of the index, middle, ring and little fingers.
const FINGERS: [(usize, usize); 4] = [(8, 6), (12, 10), (16, 14), (20, 18)];

/// One normalised landmark, `y` growing downward.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Landmark {
    /// Horizontal position.
    pub x: f32,
    /// Vertical position.
    pub y: f32,
}

impl Landmark {
    /// Creates a landmark.
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    fn distance(self, other: Landmark) -> f32 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// The 21 landmarks of one tracked hand, wrist first.
#[derive(Debug, Clone, PartialEq)]
pub struct HandLandmarks {
    points: [Landmark; LANDMARK_COUNT],
}

impl HandLandmarks {
    /// Wraps a full set of landmarks.
    pub fn new(points: [Landmark; LANDMARK_COUNT]) -> Self {
        Self { points }
    }

    /// Builds a hand from a slice, `None` unless it has exactly 21 points.
    pub fn from_slice(points: &[Landmark]) -> Option<Self> {
        points.try_into().ok().map(Self::new)
    }

    /// Landmark by index.
    pub fn point(&self, index: usize) -> Option<Landmark> {
        self.points.get(index).copied()
    }

    /// The index fingertip as a board pointer.
    pub fn pointer(&self) -> PointerSample {
        let tip = self.points[INDEX_TIP];
        PointerSample::new(tip.x, tip.y)
    }

    fn finger_open(&self, tip: usize, pip: usize) -> bool {
        self.points[tip].y < self.points[pip].y
    }
}

/// Decides whether a hand pose confirms the hovered cell.
pub trait GestureClassifier: Send + Sync + std::fmt::Debug {
    /// True while the confirm pose is held.
    fn is_confirm(&self, hand: &HandLandmarks) -> bool;
}

/// Confirms when every finger is curled: each tip sits at or below its
/// middle joint.
#[derive(Debug, Clone, Copy, Default)]
pub struct FistClassifier;

impl GestureClassifier for FistClassifier {
    fn is_confirm(&self, hand: &HandLandmarks) -> bool {
        FINGERS.iter().all(|&(tip, pip)| !hand.finger_open(tip, pip))
    }
}

/// Confirms when the thumb tip and index fingertip touch.
#[derive(Debug, Clone, Copy)]
pub struct PinchClassifier {
    threshold: f32,
}

impl PinchClassifier {
    /// Creates a classifier with the given maximum tip distance.
    pub fn new(threshold: f32) -> Self {
        Self { threshold }
    }
}

impl GestureClassifier for PinchClassifier {
    fn is_confirm(&self, hand: &HandLandmarks) -> bool {
        hand.points[THUMB_TIP].distance(hand.points[INDEX_TIP]) <= self.threshold
    }
}

/// Classifier selected by the configuration.
pub fn classifier_for(config: &EngineConfig) -> Box<dyn GestureClassifier> {
    match config.gesture() {
        GestureKind::Fist => Box::new(FistClassifier),
        GestureKind::Pinch => Box::new(PinchClassifier::new(*config.pinch_threshold())),
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// A hand with every fingertip at `(x, y)`, curled when `fist` is set.
    pub(crate) fn hand_at(x: f32, y: f32, fist: bool) -> HandLandmarks {
        let mut points = [Landmark::new(x, y + 0.3); LANDMARK_COUNT];
        for (tip, pip) in FINGERS {
            points[tip] = Landmark::new(x, y);
            points[pip] = Landmark::new(x, if fist { y - 0.05 } else { y + 0.05 });
        }
        points[THUMB_TIP] = Landmark::new(x + 0.2, y + 0.1);
        HandLandmarks::new(points)
    }

    #[test]
    fn test_open_hand_is_not_fist() {
        assert!(!FistClassifier.is_confirm(&hand_at(0.5, 0.5, false)));
    }

    #[test]
    fn test_curled_hand_is_fist() {
        assert!(FistClassifier.is_confirm(&hand_at(0.5, 0.5, true)));
    }

    #[test]
    fn test_one_open_finger_breaks_fist() {
        let mut hand = hand_at(0.5, 0.5, true);
        hand.points[12] = Landmark::new(0.5, 0.0);
        assert!(!FistClassifier.is_confirm(&hand));
    }

    #[test]
    fn test_pinch() {
        let classifier = PinchClassifier::new(0.05);
        let mut hand = hand_at(0.5, 0.5, false);
        assert!(!classifier.is_confirm(&hand));
        hand.points[THUMB_TIP] = Landmark::new(0.52, 0.51);
        assert!(classifier.is_confirm(&hand));
    }

    #[test]
    fn test_pointer_is_index_tip() {
        let hand = hand_at(0.1, 0.9, false);
        assert_eq!(hand.pointer(), PointerSample::new(0.1, 0.9));
    }

    #[test]
    fn test_from_slice_requires_21_points() {
        assert!(HandLandmarks::from_slice(&[Landmark::default(); 20]).is_none());
        assert!(HandLandmarks::from_slice(&[Landmark::default(); LANDMARK_COUNT]).is_some());
    }

    #[test]
    fn test_classifier_for_config() {
        let config = EngineConfig::default().with_gesture(GestureKind::Pinch);
        let classifier = classifier_for(&config);
        let mut hand = hand_at(0.5, 0.5, true);
        hand.points[THUMB_TIP] = hand.points[INDEX_TIP];
        assert!(classifier.is_confirm(&hand));
    }
}
