use crate::transform::RigidTransform;
use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Number of sampled points on a curved mouth polyline.
const MOUTH_CURVE_SAMPLES: usize = 21;

/// A straight stroke between two points.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub start: DVec2,
    pub end: DVec2,
}

impl Segment {
    pub const fn new(start: DVec2, end: DVec2) -> Self {
        Self { start, end }
    }
}

/// Mouth shape selected by the smile/frown gestures.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum MouthExpression {
    #[default]
    Neutral,
    Smile,
    Frown,
}

/// Non-geometric visual attributes, distinct from the rigid transform.
///
/// Each field is owned by whichever gesture currently animates it and reverts
/// to its default here when that gesture's lifecycle ends.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ExpressiveState {
    /// When false, the eyes/eyebrows/nose/mouth are hidden (blink, sneeze).
    /// The head circle itself is always drawn.
    pub face_visible: bool,

    /// Current mouth shape.
    pub mouth: MouthExpression,

    /// Text floated above the head (speech, or the sneeze exclamation).
    pub overlay_text: Option<String>,

    /// Extra rotation (radians) added to the right arm's rest angle (wave).
    pub right_arm_extra_angle: f64,
}

impl Default for ExpressiveState {
    fn default() -> Self {
        Self {
            face_visible: true,
            mouth: MouthExpression::Neutral,
            overlay_text: None,
            right_arm_extra_angle: 0.0,
        }
    }
}

/// The figure's reference geometry in its local, unrotated, untranslated frame.
///
/// Constructed once from design-time coordinates and never mutated. The two
/// derived scalars let gestures redirect the right arm by angle about the
/// shoulder instead of translating its endpoint.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RestPose {
    pub head_center: DVec2,
    pub head_radius: f64,
    pub torso: Segment,
    pub left_arm: Segment,
    pub right_arm: Segment,
    pub left_leg: Segment,
    pub right_leg: Segment,

    /// The fixed point about which the whole figure rotates.
    pub pivot: DVec2,

    /// Angle of the rest right-arm vector (shoulder to hand), radians.
    pub right_arm_angle: f64,

    /// Magnitude of the rest right-arm vector.
    pub right_arm_length: f64,

    // Face feature anchors.
    pub left_eye: DVec2,
    pub right_eye: DVec2,
    pub eye_half_extents: DVec2,
    pub left_brow: Segment,
    pub right_brow: Segment,
    pub nose: Segment,

    /// Endpoints of the mouth; the neutral mouth is this straight segment.
    pub mouth: Segment,

    /// Quadratic Bézier control point bowing the mouth downward on screen.
    pub smile_control: DVec2,

    /// Control point bowing the mouth upward.
    pub frown_control: DVec2,
}

impl Default for RestPose {
    fn default() -> Self {
        let right_arm = Segment::new(DVec2::new(200.0, 220.0), DVec2::new(230.0, 260.0));
        let reach = right_arm.end - right_arm.start;

        Self {
            head_center: DVec2::new(200.0, 180.0),
            head_radius: 20.0,
            torso: Segment::new(DVec2::new(200.0, 200.0), DVec2::new(200.0, 300.0)),
            left_arm: Segment::new(DVec2::new(200.0, 220.0), DVec2::new(170.0, 260.0)),
            right_arm,
            left_leg: Segment::new(DVec2::new(200.0, 300.0), DVec2::new(180.0, 350.0)),
            right_leg: Segment::new(DVec2::new(200.0, 300.0), DVec2::new(220.0, 350.0)),
            pivot: DVec2::new(200.0, 250.0),
            right_arm_angle: reach.to_angle(),
            right_arm_length: reach.length(),
            left_eye: DVec2::new(193.0, 175.0),
            right_eye: DVec2::new(207.0, 175.0),
            eye_half_extents: DVec2::new(5.0, 3.0),
            left_brow: Segment::new(DVec2::new(188.0, 168.0), DVec2::new(198.0, 168.0)),
            right_brow: Segment::new(DVec2::new(202.0, 168.0), DVec2::new(212.0, 168.0)),
            nose: Segment::new(DVec2::new(200.0, 180.0), DVec2::new(200.0, 186.0)),
            mouth: Segment::new(DVec2::new(195.0, 190.0), DVec2::new(205.0, 190.0)),
            smile_control: DVec2::new(200.0, 195.0),
            frown_control: DVec2::new(200.0, 185.0),
        }
    }
}

impl RestPose {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolves the rest pose against the current placement and expressive
    /// state into a fully transformed draw list.
    ///
    /// This is the render-facing entry point: every anchor below passes
    /// through [`RigidTransform::apply`] with the pose's pivot, so the whole
    /// figure shares one rotation/translation composition.
    pub fn resolve(&self, placement: &RigidTransform, expressive: &ExpressiveState) -> FigureFrame {
        let place = |p: DVec2| placement.apply(p, self.pivot);
        let place_segment = |s: Segment| Segment::new(place(s.start), place(s.end));

        // The right arm is re-derived from its rest angle plus the gesture's
        // extra angle, then placed like any other anchor.
        let arm_angle = self.right_arm_angle + expressive.right_arm_extra_angle;
        let hand = self.right_arm.start + self.right_arm_length * DVec2::from_angle(arm_angle);

        let face = if expressive.face_visible {
            Some(FaceFrame {
                left_eye: place(self.left_eye),
                right_eye: place(self.right_eye),
                eye_half_extents: self.eye_half_extents,
                left_brow: place_segment(self.left_brow),
                right_brow: place_segment(self.right_brow),
                nose: place_segment(self.nose),
                mouth: self
                    .mouth_points(expressive.mouth)
                    .into_iter()
                    .map(|p| place(p))
                    .collect(),
            })
        } else {
            None
        };

        FigureFrame {
            head_center: place(self.head_center),
            head_radius: self.head_radius,
            torso: place_segment(self.torso),
            left_arm: place_segment(self.left_arm),
            right_arm: Segment::new(place(self.right_arm.start), place(hand)),
            left_leg: place_segment(self.left_leg),
            right_leg: place_segment(self.right_leg),
            face,
            overlay_text: expressive.overlay_text.clone(),
        }
    }

    /// Mouth polyline in the rest frame: a 2-point segment when neutral,
    /// otherwise a sampled quadratic Bézier through the matching control point.
    fn mouth_points(&self, expression: MouthExpression) -> Vec<DVec2> {
        let control = match expression {
            MouthExpression::Neutral => return vec![self.mouth.start, self.mouth.end],
            MouthExpression::Smile => self.smile_control,
            MouthExpression::Frown => self.frown_control,
        };

        (0..MOUTH_CURVE_SAMPLES)
            .map(|i| {
                let t = i as f64 / (MOUTH_CURVE_SAMPLES - 1) as f64;
                quadratic_bezier(self.mouth.start, control, self.mouth.end, t)
            })
            .collect()
    }
}

/// Evaluates a quadratic Bézier at parameter `t` in `[0, 1]`.
fn quadratic_bezier(start: DVec2, control: DVec2, end: DVec2, t: f64) -> DVec2 {
    let u = 1.0 - t;
    u * u * start + 2.0 * u * t * control + t * t * end
}

/// Face features, present only while the face is visible.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FaceFrame {
    /// Placed eye centers; the ellipse extents are not rotated.
    pub left_eye: DVec2,
    pub right_eye: DVec2,
    pub eye_half_extents: DVec2,
    pub left_brow: Segment,
    pub right_brow: Segment,
    pub nose: Segment,

    /// Mouth polyline, already placed. Two points when neutral, a sampled
    /// curve when smiling or frowning.
    pub mouth: Vec<DVec2>,
}

/// One frame's complete, engine-agnostic draw list.
///
/// Every coordinate is already placed (rotated about the pivot, then
/// translated); a renderer only issues primitive calls from it. No other
/// state crosses the render boundary.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FigureFrame {
    pub head_center: DVec2,
    pub head_radius: f64,
    pub torso: Segment,
    pub left_arm: Segment,
    pub right_arm: Segment,
    pub left_leg: Segment,
    pub right_leg: Segment,

    /// `None` while the face is hidden (blink, sneeze).
    pub face: Option<FaceFrame>,

    /// Text to float above the head, if any.
    pub overlay_text: Option<String>,
}
