//! Damped spring joint between two bodies, with break handling.
//!
//! [`evaluate`] is the whole force law: a pure function of two body states
//! and a [`SpringParams`]. [`SpringJoint`] wraps it with the break state
//! machine a host needs to decide whether to keep calling it.

use crate::body::Body;
use crate::config::{has_positive_frequency, SpringParams};
use crate::error::PhysicsError;
use crate::float::Float;
use crate::vec::{Vec, Vec2};

/// What happens to the joint and its bodies once a break threshold is exceeded.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum BreakAction {
    /// Remove the owning body and the connected body (if any) from the simulation.
    Destroy,
    /// Stop evaluating the joint until it is re-enabled.
    Disable,
    /// Ignore the threshold and keep applying force.
    DoNothing,
}

/// Outcome of evaluating a joint for one step.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum StepResult<V: Vec> {
    /// Apply `+force` to the owning body and `-force` to the connected body.
    Applied(V),
    /// A break threshold was exceeded; no force was computed.
    Broken(BreakAction),
}

impl<V: Vec> StepResult<V> {
    /// Force on the owning body, if one was computed.
    pub fn force(&self) -> Option<V> {
        match *self {
            StepResult::Applied(f) => Some(f),
            StepResult::Broken(_) => None,
        }
    }

    /// Reaction force on the connected body.
    pub fn force_on_connected(&self) -> Option<V> {
        self.force().map(|f| -f)
    }

    pub fn is_broken(&self) -> bool {
        matches!(self, StepResult::Broken(_))
    }
}

/// Break state of a [`SpringJoint`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum JointState {
    Active,
    Broken(BreakAction),
}

/// World-space anchor positions `(self, connected)`.
///
/// An absent connected body sits at the origin, so its anchor is just
/// `connected_anchor`.
pub fn world_anchors<V: Vec>(
    body: &Body<V>,
    connected: Option<&Body<V>>,
    params: &SpringParams<V>,
) -> (V, V) {
    let self_anchor = body.position + params.anchor;
    let connected_origin = connected.map(|c| c.position).unwrap_or_else(V::zero);
    (self_anchor, connected_origin + params.connected_anchor)
}

/// Compute the spring force for one step, or report a break.
///
/// The break check runs before any force computation and is skipped
/// entirely for [`BreakAction::DoNothing`]. Coincident anchors produce no
/// spring term, only damping.
pub fn evaluate<V: Vec>(
    body: &Body<V>,
    connected: Option<&Body<V>>,
    params: &SpringParams<V>,
) -> StepResult<V> {
    let (self_anchor, connected_anchor) = world_anchors(body, connected, params);
    let delta = self_anchor - connected_anchor;
    let current_distance = delta.length();
    let stretch = current_distance - params.distance;
    let stiffness = params.stiffness(body.mass);

    if params.break_action != BreakAction::DoNothing
        && exceeds_break(params, current_distance, stiffness * stretch)
    {
        return StepResult::Broken(params.break_action);
    }

    // normalize() yields zero for coincident anchors
    let displacement = delta.normalize().scale(stretch);
    let connected_velocity = connected.map(|c| c.velocity).unwrap_or_else(V::zero);
    let relative_velocity = body.velocity - connected_velocity;
    let damping = params.damping(body.mass);

    StepResult::Applied(-(displacement.scale(stiffness) + relative_velocity.scale(damping)))
}

fn exceeds_break<V: Vec>(params: &SpringParams<V>, distance: V::Scalar, spring_force: V::Scalar) -> bool {
    if distance > params.break_distance {
        return true;
    }
    params.break_force.is_finite() && spring_force.abs() > params.break_force
}

/// A spring joint with its break state.
///
/// The joint never touches bodies: [`SpringJoint::step`] reads their state
/// and returns what the host should do. Forces go into the host's
/// accumulators; `Destroy` and `Disable` are intents for the host's entity
/// layer.
#[derive(Clone, Debug)]
pub struct SpringJoint<V: Vec> {
    params: SpringParams<V>,
    state: JointState,
    enabled: bool,
}

impl<V: Vec> SpringJoint<V> {
    /// Create an active joint. Out-of-range parameters are tolerated and
    /// guarded at evaluation time; use [`SpringJoint::try_new`] to reject them.
    pub fn new(params: SpringParams<V>) -> Self {
        warn_degenerate(&params);
        SpringJoint {
            params,
            state: JointState::Active,
            enabled: true,
        }
    }

    pub fn try_new(params: SpringParams<V>) -> Result<Self, PhysicsError> {
        params.validate()?;
        Ok(Self::new(params))
    }

    /// Evaluate for one step. Returns `None` if the joint is broken or disabled.
    ///
    /// A `Broken` result moves the joint into [`JointState::Broken`]; for
    /// `Disable` it also stops further evaluation until [`SpringJoint::enable`].
    pub fn step(&mut self, body: &Body<V>, connected: Option<&Body<V>>) -> Option<StepResult<V>> {
        if !self.is_active() {
            return None;
        }
        let result = evaluate(body, connected, &self.params);
        if let StepResult::Broken(action) = result {
            log::debug!(
                "spring joint broke ({:?}) at distance {:?}",
                action,
                self.current_distance(body, connected)
            );
            self.state = JointState::Broken(action);
            if action == BreakAction::Disable {
                self.enabled = false;
            }
        }
        Some(result)
    }

    /// Re-enable after a `Disable` break or a manual [`SpringJoint::disable`].
    ///
    /// Returns `false` for a joint destroyed by a `Destroy` break, which
    /// cannot come back.
    pub fn enable(&mut self) -> bool {
        match self.state {
            JointState::Broken(BreakAction::Destroy) => false,
            _ => {
                self.state = JointState::Active;
                self.enabled = true;
                true
            }
        }
    }

    pub fn disable(&mut self) {
        self.enabled = false;
    }

    pub fn is_active(&self) -> bool {
        self.enabled && self.state == JointState::Active
    }

    pub fn is_enabled(&self) -> bool { self.enabled }
    pub fn state(&self) -> JointState { self.state }
    pub fn params(&self) -> &SpringParams<V> { &self.params }

    /// Mutable access; changes take effect on the next step.
    pub fn params_mut(&mut self) -> &mut SpringParams<V> { &mut self.params }

    pub fn set_params(&mut self, params: SpringParams<V>) {
        warn_degenerate(&params);
        self.params = params;
    }

    /// Current distance between the two world anchors.
    pub fn current_distance(&self, body: &Body<V>, connected: Option<&Body<V>>) -> V::Scalar {
        let (a, b) = world_anchors(body, connected, &self.params);
        a.distance(b)
    }
}

fn warn_degenerate<V: Vec>(params: &SpringParams<V>) {
    if !has_positive_frequency(params) {
        log::warn!(
            "spring frequency {:?} is not positive; joint will have zero stiffness",
            params.frequency
        );
    }
}

pub type SpringJoint2D<F> = SpringJoint<Vec2<F>>;
pub type SpringParams2D<F> = SpringParams<Vec2<F>>;
pub type Body2D<F> = Body<Vec2<F>>;
