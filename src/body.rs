//! Point-mass bodies that joints connect.

use crate::error::PhysicsError;
use crate::float::Float;
use crate::vec::Vec;

/// A point mass: position, velocity and a force accumulator.
///
/// A joint only reads `position` and `velocity`. The accumulator and
/// [`Body::integrate`] exist for hosts that do not bring their own
/// integrator, such as [`JointSet`](crate::world::JointSet).
#[derive(Clone, Debug)]
pub struct Body<V: Vec> {
    pub position: V,
    pub velocity: V,
    pub mass: V::Scalar,
    pub inv_mass: V::Scalar,
    force: V,
}

impl<V: Vec> Body<V> {
    /// Dynamic body at rest. A near-zero mass yields a body that ignores forces.
    pub fn new(position: V, mass: V::Scalar) -> Self {
        let inv_mass = if mass.is_near_zero(V::Scalar::from_f32(1e-10)) {
            V::Scalar::zero()
        } else {
            V::Scalar::one() / mass
        };
        Body {
            position,
            velocity: V::zero(),
            mass,
            inv_mass,
            force: V::zero(),
        }
    }

    /// Like [`Body::new`] but rejects non-positive or non-finite masses.
    pub fn try_new(position: V, mass: V::Scalar) -> Result<Self, PhysicsError> {
        if !mass.is_finite() || mass <= V::Scalar::zero() {
            return Err(PhysicsError::InvalidMass);
        }
        Ok(Self::new(position, mass))
    }

    /// Immovable body. Forces are discarded and it never integrates.
    pub fn fixed(position: V) -> Self {
        Body {
            position,
            velocity: V::zero(),
            mass: V::Scalar::zero(),
            inv_mass: V::Scalar::zero(),
            force: V::zero(),
        }
    }

    pub fn with_velocity(mut self, velocity: V) -> Self {
        self.velocity = velocity;
        self
    }

    pub fn is_fixed(&self) -> bool {
        self.inv_mass == V::Scalar::zero()
    }

    pub fn apply_force(&mut self, force: V) {
        if !self.is_fixed() {
            self.force += force;
        }
    }

    /// Semi-implicit Euler: velocity first, then position from the new velocity.
    /// `acceleration` is added on top of the accumulated force (e.g. gravity).
    pub fn integrate(&mut self, dt: V::Scalar, acceleration: V) {
        if self.is_fixed() {
            self.force = V::zero();
            return;
        }
        let accel = self.force.scale(self.inv_mass) + acceleration;
        self.velocity = self.velocity + accel.scale(dt);
        self.position = self.position + self.velocity.scale(dt);
        self.force = V::zero();
    }
}
