//! The gesture library: one deterministic per-tick update rule per gesture,
//! plus the command dispatcher that turns free text into gesture triggers.
//!
//! Every gesture is a pure function of its frame counter and countdown timer.
//! There is no randomness and no wall-clock dependence, so a fixed sequence of
//! ticks always produces the same sequence of states regardless of the host's
//! frame rate.

use crate::figure::{ExpressiveState, MouthExpression};
use crate::transform::RigidTransform;
use serde::{Deserialize, Serialize};
use std::f64::consts::TAU;

/// Overlay shown while sneezing.
const SNEEZE_OVERLAY: &str = "Achoo!";

/// Configuration for gesture timing and amplitudes.
///
/// Budgets count animated frames; timers count ticks. The defaults are the
/// stock choreography.
#[derive(Clone, Debug)]
pub struct AnimationConfig {
    /// Animated frames in a wave.
    pub wave_frames: u32,
    /// Peak extra arm angle (radians) while waving.
    pub wave_amplitude: f64,
    /// Radians advanced per frame through the wave's sine cycle.
    pub wave_rate: f64,
    /// Animated frames in a jump; ascent covers the first half.
    pub jump_frames: u32,
    /// Vertical pixels gained per ascent frame.
    pub jump_step: f64,
    /// Animated frames in one dance sway cycle.
    pub dance_frames: u32,
    /// Peak horizontal sway in pixels.
    pub dance_amplitude: f64,
    /// Animated frames in one full spin revolution.
    pub spin_frames: u32,
    /// Ticks a smile or frown is held.
    pub expression_ticks: u32,
    /// Ticks the sneeze overlay is held after the first tick.
    pub sneeze_ticks: u32,
    /// Ticks a speech overlay is held.
    pub speech_ticks: u32,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            wave_frames: 50,
            wave_amplitude: 0.3,
            wave_rate: 0.3,
            jump_frames: 20,
            jump_step: 5.0,
            dance_frames: 20,
            dance_amplitude: 10.0,
            spin_frames: 36,
            expression_ticks: 60,
            sneeze_ticks: 30,
            speech_ticks: 120,
        }
    }
}

/// The closed set of gesture behaviors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GestureKind {
    /// Oscillate the right arm about the shoulder.
    Wave,
    /// Rise and fall vertically, symmetric about the peak.
    Jump,
    /// Hide the face for a single tick.
    Blink,
    /// Sway horizontally through one sine cycle.
    Dance,
    /// Rotate the whole figure through one revolution about the pivot.
    Spin,
    /// Hold a smiling mouth.
    Smile,
    /// Hold a frowning mouth.
    Frown,
    /// Hide the face and flash the sneeze overlay.
    Sneeze,
    /// Hold caller-supplied text above the head.
    Speak,
}

/// A parsed command: either a recognized gesture name or free speech.
///
/// Parsing never fails; unrecognized input is reinterpreted as speech rather
/// than rejected.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Command {
    Gesture(GestureKind),
    Speak(String),
}

impl Command {
    /// Maps one line of user text to a command.
    ///
    /// Matching is done on the trimmed, case-folded token; the speak fallback
    /// keeps the trimmed text in its original case.
    pub fn parse(input: &str) -> Self {
        let trimmed = input.trim();
        match trimmed.to_lowercase().as_str() {
            "wave" => Self::Gesture(GestureKind::Wave),
            "jump" => Self::Gesture(GestureKind::Jump),
            "blink" => Self::Gesture(GestureKind::Blink),
            "dance" => Self::Gesture(GestureKind::Dance),
            "spin" => Self::Gesture(GestureKind::Spin),
            "smile" => Self::Gesture(GestureKind::Smile),
            "frown" => Self::Gesture(GestureKind::Frown),
            "sneeze" => Self::Gesture(GestureKind::Sneeze),
            _ => Self::Speak(trimmed.to_owned()),
        }
    }
}

impl From<&str> for Command {
    fn from(input: &str) -> Self {
        Self::parse(input)
    }
}

/// Outcome of one gesture tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepOutcome {
    /// The gesture continues next tick.
    Running,
    /// The gesture applied its completion resets and is finished.
    Done,
}

/// Bookkeeping for the one currently running gesture.
///
/// Every gesture shares this record: a kind, a frame counter incremented once
/// per tick, and a countdown timer for the hold-style gestures. The counter
/// never exceeds the gesture's budget.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GestureRun {
    pub kind: GestureKind,
    pub frame: u32,
    pub timer: u32,
}

impl GestureRun {
    pub fn new(kind: GestureKind, timer: u32) -> Self {
        Self {
            kind,
            frame: 0,
            timer,
        }
    }

    /// Advances this gesture by one tick, writing the pose parameters it owns.
    ///
    /// On [`StepOutcome::Done`] every field the gesture touched has already
    /// been returned to its neutral value.
    pub fn step(
        &mut self,
        placement: &mut RigidTransform,
        expressive: &mut ExpressiveState,
        config: &AnimationConfig,
    ) -> StepOutcome {
        match self.kind {
            GestureKind::Wave => {
                if self.frame >= config.wave_frames {
                    expressive.right_arm_extra_angle = 0.0;
                    return StepOutcome::Done;
                }
                expressive.right_arm_extra_angle =
                    config.wave_amplitude * (self.frame as f64 * config.wave_rate).sin();
                self.frame += 1;
                StepOutcome::Running
            }

            GestureKind::Jump => {
                let total = config.jump_frames;
                if self.frame >= total {
                    // Neutral cleanup frame.
                    placement.translation.y = 0.0;
                    return StepOutcome::Done;
                }
                placement.translation.y = if self.frame < total / 2 {
                    -config.jump_step * (self.frame + 1) as f64
                } else {
                    -config.jump_step * (total - self.frame) as f64
                };
                self.frame += 1;
                StepOutcome::Running
            }

            GestureKind::Blink => match self.frame {
                0 => {
                    expressive.face_visible = true;
                    self.frame = 1;
                    StepOutcome::Running
                }
                1 => {
                    expressive.face_visible = false;
                    self.frame = 2;
                    StepOutcome::Running
                }
                _ => {
                    expressive.face_visible = true;
                    StepOutcome::Done
                }
            },

            GestureKind::Dance => {
                placement.translation.x = config.dance_amplitude
                    * (TAU * self.frame as f64 / config.dance_frames as f64).sin();
                self.frame += 1;
                if self.frame >= config.dance_frames {
                    placement.translation.x = 0.0;
                    StepOutcome::Done
                } else {
                    StepOutcome::Running
                }
            }

            GestureKind::Spin => {
                placement.rotation = TAU * self.frame as f64 / config.spin_frames as f64;
                self.frame += 1;
                if self.frame >= config.spin_frames {
                    placement.rotation = 0.0;
                    StepOutcome::Done
                } else {
                    StepOutcome::Running
                }
            }

            GestureKind::Smile | GestureKind::Frown => {
                self.timer = self.timer.saturating_sub(1);
                if self.timer == 0 {
                    expressive.mouth = MouthExpression::Neutral;
                    StepOutcome::Done
                } else {
                    StepOutcome::Running
                }
            }

            GestureKind::Sneeze => {
                if self.frame == 0 {
                    expressive.face_visible = false;
                    expressive.overlay_text = Some(SNEEZE_OVERLAY.to_owned());
                    self.timer = config.sneeze_ticks;
                    self.frame = 1;
                    return StepOutcome::Running;
                }
                self.timer = self.timer.saturating_sub(1);
                if self.timer == 0 {
                    expressive.face_visible = true;
                    expressive.overlay_text = None;
                    StepOutcome::Done
                } else {
                    StepOutcome::Running
                }
            }

            GestureKind::Speak => {
                self.timer = self.timer.saturating_sub(1);
                if self.timer == 0 {
                    expressive.overlay_text = None;
                    StepOutcome::Done
                } else {
                    StepOutcome::Running
                }
            }
        }
    }
}
