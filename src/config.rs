//! Spring joint parameters.

use crate::error::PhysicsError;
use crate::float::Float;
use crate::joint::BreakAction;
use crate::vec::Vec;

/// How frequency and damping ratio are converted into spring coefficients.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum StiffnessModel {
    /// Treat every body as unit mass: `k = (2πf)²`, `c = 2·√k·ζ`.
    ///
    /// This is a simplification; heavier bodies respond more sluggishly
    /// than `frequency` suggests.
    #[default]
    UnitMass,
    /// Scale by the owning body's mass: `k = (2πf)²·m`, `c = 2·√(k·m)·ζ`.
    SelfMass,
}

/// Configuration for a [`SpringJoint`](crate::joint::SpringJoint).
///
/// Parameters may be changed between steps; the new values apply on the
/// next evaluation.
///
/// # Builder Pattern
/// ```
/// use tether::config::SpringParams;
/// use tether::joint::BreakAction;
/// use tether::vec::Vec2;
///
/// let params: SpringParams<Vec2<f32>> = SpringParams::new()
///     .with_distance(1.5)
///     .with_frequency(4.0)
///     .with_damping_ratio(0.3)
///     .with_break_distance(5.0)
///     .with_break_action(BreakAction::Disable);
/// assert!(params.validate().is_ok());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct SpringParams<V: Vec> {
    /// Attachment point in the owning body's local space. Default: zero.
    pub anchor: V,
    /// Attachment point in the connected body's local space. Default: zero.
    pub connected_anchor: V,
    /// Rest distance between the two anchors. Default: 0.3.
    pub distance: V::Scalar,
    /// Damping ratio, 0 = undamped, 1 = critical. Default: 0.
    pub damping_ratio: V::Scalar,
    /// Oscillation frequency in Hz. Default: 2.
    pub frequency: V::Scalar,
    /// Anchor separation above which the joint breaks. Default: infinity.
    pub break_distance: V::Scalar,
    /// Spring force magnitude above which the joint breaks. Default: infinity.
    pub break_force: V::Scalar,
    /// What happens when a break threshold is exceeded. Default: `Destroy`.
    pub break_action: BreakAction,
    /// Default: `UnitMass`.
    pub stiffness_model: StiffnessModel,
}

impl<V: Vec> SpringParams<V> {
    /// Create params with default values.
    pub fn new() -> Self {
        SpringParams {
            anchor: V::zero(),
            connected_anchor: V::zero(),
            distance: V::Scalar::from_f32(0.3),
            damping_ratio: V::Scalar::zero(),
            frequency: V::Scalar::two(),
            break_distance: V::Scalar::infinity(),
            break_force: V::Scalar::infinity(),
            break_action: BreakAction::Destroy,
            stiffness_model: StiffnessModel::UnitMass,
        }
    }

    pub fn with_anchor(mut self, anchor: V) -> Self {
        self.anchor = anchor;
        self
    }

    pub fn with_connected_anchor(mut self, anchor: V) -> Self {
        self.connected_anchor = anchor;
        self
    }

    pub fn with_distance(mut self, distance: V::Scalar) -> Self {
        self.distance = distance;
        self
    }

    pub fn with_damping_ratio(mut self, ratio: V::Scalar) -> Self {
        self.damping_ratio = ratio;
        self
    }

    pub fn with_frequency(mut self, frequency_hz: V::Scalar) -> Self {
        self.frequency = frequency_hz;
        self
    }

    pub fn with_break_distance(mut self, distance: V::Scalar) -> Self {
        self.break_distance = distance;
        self
    }

    pub fn with_break_force(mut self, force: V::Scalar) -> Self {
        self.break_force = force;
        self
    }

    pub fn with_break_action(mut self, action: BreakAction) -> Self {
        self.break_action = action;
        self
    }

    pub fn with_stiffness_model(mut self, model: StiffnessModel) -> Self {
        self.stiffness_model = model;
        self
    }

    /// Check every parameter against its valid range.
    pub fn validate(&self) -> Result<(), PhysicsError> {
        let zero = V::Scalar::zero();
        if !self.anchor.is_finite() || !self.connected_anchor.is_finite() {
            return Err(PhysicsError::InvalidAnchor);
        }
        if !self.distance.is_finite() || self.distance < zero {
            return Err(PhysicsError::InvalidDistance);
        }
        if !self.damping_ratio.is_finite() || self.damping_ratio < zero {
            return Err(PhysicsError::InvalidDampingRatio);
        }
        if !self.frequency.is_finite() || self.frequency <= zero {
            return Err(PhysicsError::InvalidFrequency);
        }
        // infinity is the "no limit" value
        let bad = |t: V::Scalar| t.is_nan() || t < zero;
        if bad(self.break_distance) || bad(self.break_force) {
            return Err(PhysicsError::InvalidBreakThreshold);
        }
        Ok(())
    }

    /// Spring stiffness for an owning body of mass `self_mass`.
    ///
    /// Non-positive or NaN frequencies yield zero stiffness.
    pub fn stiffness(&self, self_mass: V::Scalar) -> V::Scalar {
        if !has_positive_frequency(self) {
            return V::Scalar::zero();
        }
        let omega = V::Scalar::two() * V::Scalar::pi() * self.frequency;
        let k = omega * omega;
        match self.stiffness_model {
            StiffnessModel::UnitMass => k,
            StiffnessModel::SelfMass => k * self_mass,
        }
    }

    /// Damping coefficient matching [`SpringParams::stiffness`].
    pub fn damping(&self, self_mass: V::Scalar) -> V::Scalar {
        let k = self.stiffness(self_mass);
        let scaled = match self.stiffness_model {
            StiffnessModel::UnitMass => k,
            StiffnessModel::SelfMass => k * self_mass,
        };
        V::Scalar::two() * scaled.max(V::Scalar::zero()).sqrt() * self.damping_ratio
    }
}

pub(crate) fn has_positive_frequency<V: Vec>(params: &SpringParams<V>) -> bool {
    params.frequency > V::Scalar::zero()
}

impl<V: Vec> Default for SpringParams<V> {
    fn default() -> Self {
        Self::new()
    }
}

/// Configuration for stepping a [`JointSet`](crate::world::JointSet).
///
/// # Builder Pattern
/// ```
/// use tether::config::StepConfig;
/// use tether::vec::Vec2;
///
/// let config: StepConfig<Vec2<f32>> = StepConfig::new()
///     .with_gravity(Vec2::new(0.0, -9.81))
///     .with_sub_steps(4);
/// ```
#[derive(Clone, Debug)]
pub struct StepConfig<V: Vec> {
    /// Gravity acceleration vector. Default: zero (no gravity).
    pub gravity: V,
    /// Number of sub-steps per frame. Joints are re-evaluated every
    /// sub-step. Default: 1.
    pub sub_steps: usize,
}

impl<V: Vec> StepConfig<V> {
    pub fn new() -> Self {
        StepConfig {
            gravity: V::zero(),
            sub_steps: 1,
        }
    }

    pub fn with_gravity(mut self, gravity: V) -> Self {
        self.gravity = gravity;
        self
    }

    pub fn with_sub_steps(mut self, sub_steps: usize) -> Self {
        self.sub_steps = sub_steps.max(1);
        self
    }
}

impl<V: Vec> Default for StepConfig<V> {
    fn default() -> Self {
        Self::new()
    }
}
