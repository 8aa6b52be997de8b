//! Damped spring joints between point masses, with configurable break behaviour.
//!
//! `tether` computes the force of a 2D spring joint (frequency / damping-ratio
//! parameterisation) outside of any particular physics engine, so the force
//! law and what happens when the joint snaps stay under your control.
//!
//! # Features
//!
//! - **Pure force law**: [`evaluate`] takes two body states and returns a force or a break
//! - **Break semantics**: distance and force thresholds, `Destroy` / `Disable` / `DoNothing`
//! - **Reciprocal forces**: the connected body always receives the exact negation
//! - **Reference host**: [`JointSet`] integrates bodies and carries out break intents
//! - **Observable**: Monitor forces and breaks via the [`JointObserver`] trait
//! - **`no_std` compatible**: Works in embedded and WASM environments
//!
//! ```
//! use tether::{evaluate, Body, SpringParams, StepResult, Vec2};
//!
//! let body = Body::new(Vec2::new(1.0f32, 0.0), 1.0);
//! let anchor = Body::fixed(Vec2::new(0.0, 0.0));
//! let params = SpringParams::new().with_distance(0.3).with_frequency(2.0);
//!
//! match evaluate(&body, Some(&anchor), &params) {
//!     StepResult::Applied(force) => assert!(force.x < 0.0),
//!     StepResult::Broken(_) => unreachable!(),
//! }
//! ```

#![no_std]

extern crate alloc;

pub mod float;
pub mod vec;
pub mod body;
pub mod config;
pub mod joint;
pub mod world;
pub mod observer;
pub mod error;

// Re-export primary API
pub use float::Float;
pub use vec::{Vec, Vec2};
pub use body::Body;
pub use config::{SpringParams, StepConfig, StiffnessModel};
pub use joint::{evaluate, world_anchors, BreakAction, JointState, SpringJoint, StepResult};
pub use joint::{Body2D, SpringJoint2D, SpringParams2D};
pub use world::JointSet;
pub use observer::{JointObserver, NoOpObserver};
pub use error::PhysicsError;
