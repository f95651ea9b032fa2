//! `uai-behavior` — response curves, considerations and scored behaviors.
//!
//! # Crate layout
//!
//! | Module            | Contents                                                   |
//! |-------------------|------------------------------------------------------------|
//! | [`curve`]         | `ResponseCurve`, `Keyframe`, `CurveMode`                   |
//! | [`consideration`] | `Consideration`: one property read through one curve       |
//! | [`action`]        | `Action` trait, `NoopAction`                               |
//! | [`behavior`]      | `Behavior`, `BehaviorBuilder`                              |
//! | [`error`]         | `BehaviorError`, `BehaviorResult<T>`                       |
//!
//! # Scoring
//!
//! ```text
//! consideration = curve(property.normalized_value())
//! behavior      = mean(consideration for each enabled consideration)
//!               = 0 when no consideration is enabled
//! ```
//!
//! Using the mean (not a sum or product) keeps behaviors with different
//! consideration counts on the same `[0, 1]` scale, provided their curves
//! stay in `[0, 1]`.

pub mod action;
pub mod behavior;
pub mod consideration;
pub mod curve;
pub mod error;


pub use action::{Action, NoopAction};
pub use behavior::{Behavior, BehaviorBuilder};
pub use consideration::Consideration;
pub use curve::{CurveMode, Keyframe, ResponseCurve};
pub use error::{BehaviorError, BehaviorResult};
