//! The animation controller: a single-active-gesture state machine.
//!
//! The entry point is [`AnimationController`]. Configure it with an
//! [`AnimationConfig`], feed it parsed [`Command`]s via
//! [`start`](AnimationController::start), tick it once per host frame with
//! [`update`](AnimationController::update), and read the resulting
//! [`FigureFrame`] from [`frame`](AnimationController::frame).

use crate::figure::{ExpressiveState, FigureFrame, MouthExpression, RestPose};
use crate::gesture::{AnimationConfig, Command, GestureKind, GestureRun, StepOutcome};
use crate::transform::RigidTransform;

/// Owns all mutable animation state and enforces the admission rule:
/// at most one gesture runs at a time, and a `start` issued while busy is
/// silently dropped rather than queued.
#[derive(Clone, Debug)]
pub struct AnimationController {
    config: AnimationConfig,
    rest: RestPose,
    placement: RigidTransform,
    expressive: ExpressiveState,
    run: Option<GestureRun>,
}

impl Default for AnimationController {
    fn default() -> Self {
        Self::new(AnimationConfig::default())
    }
}

impl AnimationController {
    /// Creates an idle controller with the default rest pose.
    pub fn new(config: AnimationConfig) -> Self {
        Self {
            config,
            rest: RestPose::default(),
            placement: RigidTransform::default(),
            expressive: ExpressiveState::default(),
            run: None,
        }
    }

    /// Replaces the rest pose (builder pattern).
    pub fn with_rest_pose(mut self, rest: RestPose) -> Self {
        self.rest = rest;
        self
    }

    /// Admits a new gesture if the controller is idle.
    ///
    /// While a gesture is running this is a no-op: the request is dropped,
    /// the running gesture keeps its frame counter, and nothing is queued.
    /// A request to restart the currently running gesture is dropped too.
    ///
    /// Speech and expression payloads take effect at admission, not on the
    /// first tick: `Speak` installs its overlay immediately, and smile/frown
    /// fix the mouth for their whole duration.
    pub fn start(&mut self, command: Command) {
        if self.run.is_some() {
            return;
        }

        self.run = Some(match command {
            Command::Gesture(GestureKind::Smile) => {
                self.expressive.mouth = MouthExpression::Smile;
                GestureRun::new(GestureKind::Smile, self.config.expression_ticks)
            }
            Command::Gesture(GestureKind::Frown) => {
                self.expressive.mouth = MouthExpression::Frown;
                GestureRun::new(GestureKind::Frown, self.config.expression_ticks)
            }
            Command::Speak(text) => {
                self.expressive.overlay_text = Some(text);
                GestureRun::new(GestureKind::Speak, self.config.speech_ticks)
            }
            Command::Gesture(kind) => GestureRun::new(kind, 0),
        });
    }

    /// Parses `input` and forwards the result to [`start`](Self::start).
    pub fn handle_input(&mut self, input: &str) {
        self.start(Command::parse(input));
    }

    /// Advances the active gesture by one tick, if any.
    ///
    /// When the gesture's completion condition holds, its owned fields have
    /// been reset by the step rule and the controller returns to idle. Idle
    /// ticks have no effect; settled state simply persists.
    pub fn update(&mut self) {
        let Some(mut run) = self.run else { return };
        let outcome = run.step(&mut self.placement, &mut self.expressive, &self.config);
        self.run = match outcome {
            StepOutcome::Running => Some(run),
            StepOutcome::Done => None,
        };
    }

    /// True when no gesture is running.
    pub fn is_idle(&self) -> bool {
        self.run.is_none()
    }

    /// The kind of the running gesture, if any.
    pub fn active_gesture(&self) -> Option<GestureKind> {
        self.run.map(|r| r.kind)
    }

    /// The running gesture's bookkeeping record, if any.
    pub fn active_run(&self) -> Option<&GestureRun> {
        self.run.as_ref()
    }

    /// Current rigid placement of the figure.
    pub fn placement(&self) -> &RigidTransform {
        &self.placement
    }

    /// Current expressive state.
    pub fn expressive(&self) -> &ExpressiveState {
        &self.expressive
    }

    /// The figure's reference geometry.
    pub fn rest_pose(&self) -> &RestPose {
        &self.rest
    }

    /// Resolves the current state into a placed draw list for the renderer.
    pub fn frame(&self) -> FigureFrame {
        self.rest.resolve(&self.placement, &self.expressive)
    }
}
