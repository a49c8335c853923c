use num_traits::Zero;

/// Write access to the static parameters of one rotor actuator.
///
/// The frame builder parameterizes each handle exactly once at vehicle
/// construction time.
pub trait RotorActuator<T> {
    /// Set the thrust at full command (in N).
    fn set_full_thrust(&mut self, thrust: T);

    /// Set the reaction torque at full thrust (in Nm), signed by spin direction.
    fn set_full_torque(&mut self, torque: T);

    /// Set the first order spin-up time constant (in seconds).
    fn set_time_constant(&mut self, time_constant: T);
}

impl<T, U> RotorActuator<U> for &mut T
where
    T: RotorActuator<U> + ?Sized,
{
    fn set_full_thrust(&mut self, thrust: U) {
        (&mut **self).set_full_thrust(thrust)
    }

    fn set_full_torque(&mut self, torque: U) {
        (&mut **self).set_full_torque(torque)
    }

    fn set_time_constant(&mut self, time_constant: U) {
        (&mut **self).set_time_constant(time_constant)
    }
}

/// Static parameters of one rotor, for vehicles that keep actuator state as
/// plain data.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RotorParams<T> {
    /// Thrust at full command (in N).
    pub full_thrust: T,

    /// Reaction torque at full thrust (in Nm), signed by spin direction.
    pub full_torque: T,

    /// First order spin-up time constant (in seconds).
    pub time_constant: T,
}

impl<T: Zero> Default for RotorParams<T> {
    fn default() -> Self {
        Self {
            full_thrust: T::zero(),
            full_torque: T::zero(),
            time_constant: T::zero(),
        }
    }
}

impl<T> RotorActuator<T> for RotorParams<T> {
    fn set_full_thrust(&mut self, thrust: T) {
        self.full_thrust = thrust;
    }

    fn set_full_torque(&mut self, torque: T) {
        self.full_torque = torque;
    }

    fn set_time_constant(&mut self, time_constant: T) {
        self.time_constant = time_constant;
    }
}
