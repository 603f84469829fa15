//! # gesticulate
//!
//! A sovereign procedural animation core for a 2-D stick figure: a finite set
//! of timed gestures driving a kinematic transform pipeline, plus the command
//! dispatcher that turns free text into gesture triggers.
//!
//! It decouples the *choreography* (deterministic per-tick gesture rules) from
//! the *presentation* (drawing), producing a [`FigureFrame`] draw list that
//! can be ingested by game engines (Bevy), immediate-mode canvases, or
//! software renderers. The core is single-threaded and synchronous: one
//! [`AnimationController::update`] followed by one render read per host frame.

pub mod controller;
pub mod figure;
pub mod gesture;
pub mod transform;

pub use controller::*;
pub use figure::*;
pub use gesture::*;
pub use transform::*;
