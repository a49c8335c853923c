use crate::orientation::{Orientation, ParseOrientationError};
use crate::rotor::RotorActuator;
use core::fmt;
use nalgebra::{RealField, Rotation3, Vector3};
use num_traits::FromPrimitive;

/// A frame construction error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The orientation tag matched neither recognized form.
    Orientation(ParseOrientationError),
}

impl From<ParseOrientationError> for Error {
    fn from(parse_error: ParseOrientationError) -> Self {
        Error::Orientation(parse_error)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Orientation(parse_error) => write!(f, "{}", parse_error),
        }
    }
}

/// Geometry and full-scale actuator parameters shared by every rotor of a
/// symmetric frame.
pub struct FrameConfig<T> {
    /// Distance from the frame center to each rotor hub (in meters).
    pub arm_length: T,

    /// Offset of the rotor plane center from the vehicle reference origin,
    /// e.g. the true center of gravity (in meters).
    pub rotors_offset: Vector3<T>,

    /// Thrust of one rotor at full command (in N).
    pub rotor_thrust: T,

    /// Reaction torque of one rotor at full thrust (in Nm).
    pub rotor_torque: T,

    /// First order spin-up time constant of one rotor (in seconds).
    pub rotor_time_constant: T,
}

/// Rotor positions of a symmetric cross frame, one per actuator handle.
///
/// Rotor 0 sits on the body +Y arm and the remaining rotors follow every
/// `2π / N` radians toward +X, so the four-rotor cross is `+Y, +X, -Y, -X`
/// for indices `0..4`. Positions are computed once at construction and fixed
/// for the life of the vehicle.
#[derive(Debug, Clone)]
pub struct RotorFrame<T, const N: usize> {
    positions: [Vector3<T>; N],
}

/// A four-rotor frame.
pub type QuadFrame<T> = RotorFrame<T, 4>;

/// A six-rotor frame.
pub type HexFrame<T> = RotorFrame<T, 6>;

/// An eight-rotor frame.
pub type OctoFrame<T> = RotorFrame<T, 8>;

impl<T, const N: usize> RotorFrame<T, N>
where
    T: RealField + FromPrimitive + Copy,
{
    /// Build the frame from an orientation tag and parameterize the vehicle's
    /// rotor handles, one handle per computed position.
    ///
    /// The tag is validated before any handle is touched, so a failed
    /// construction leaves every rotor as it was.
    ///
    /// ```
    /// use multicopter_frame::{FrameConfig, QuadFrame, RotorParams};
    /// use nalgebra::Vector3;
    ///
    /// let config = FrameConfig {
    ///     arm_length: 0.33,
    ///     rotors_offset: Vector3::zeros(),
    ///     rotor_thrust: 4.0,
    ///     rotor_torque: 0.05,
    ///     rotor_time_constant: 0.005,
    /// };
    ///
    /// let mut rotors = [RotorParams::default(); 4];
    /// let frame = QuadFrame::new("x", &config, &mut rotors)?;
    ///
    /// assert_eq!(frame.rotor_count(), 4);
    /// assert!(rotors[0].full_torque < 0.0);
    /// # Ok::<(), multicopter_frame::Error>(())
    /// ```
    pub fn new<R>(
        orientation: &str,
        config: &FrameConfig<T>,
        rotors: &mut [R; N],
    ) -> Result<Self, Error>
    where
        R: RotorActuator<T>,
    {
        let orientation = orientation.parse()?;
        Ok(Self::with_orientation(orientation, config, rotors))
    }

    /// Build the frame from an already validated orientation.
    pub fn with_orientation<R>(
        orientation: Orientation,
        config: &FrameConfig<T>,
        rotors: &mut [R; N],
    ) -> Self
    where
        R: RotorActuator<T>,
    {
        for (i, rotor) in rotors.iter_mut().enumerate() {
            rotor.set_full_thrust(config.rotor_thrust);
            // Adjacent rotors spin in opposite directions, so reaction
            // torques cancel at matched thrust.
            let torque = if i % 2 == 0 {
                -config.rotor_torque
            } else {
                config.rotor_torque
            };
            rotor.set_full_torque(torque);
            rotor.set_time_constant(config.rotor_time_constant);
        }

        Self {
            positions: layout(orientation, config),
        }
    }

    /// The position of rotor `index` in the vehicle body frame (in meters).
    ///
    /// Index order matches the handle array used during construction.
    pub fn position(&self, index: usize) -> Vector3<T> {
        self.positions[index]
    }

    /// All rotor positions in handle order.
    pub fn positions(&self) -> &[Vector3<T>; N] {
        &self.positions
    }

    /// The number of rotors on this frame.
    pub const fn rotor_count(&self) -> usize {
        N
    }
}

/// Compute the rotor positions of a symmetric cross layout.
///
/// The `X` orientation yaws the whole cross by `-π / N`, placing the rotors
/// on the diagonals instead of the body axes (`-45°` for a quad).
fn layout<T, const N: usize>(
    orientation: Orientation,
    config: &FrameConfig<T>,
) -> [Vector3<T>; N]
where
    T: RealField + FromPrimitive + Copy,
{
    let count = T::from_usize(N).unwrap();
    let step = T::two_pi() / count;
    let yaw = match orientation {
        Orientation::Cross => None,
        Orientation::X => Some(Rotation3::from_axis_angle(
            &Vector3::z_axis(),
            -T::pi() / count,
        )),
    };

    let mut positions = [Vector3::zeros(); N];
    for (i, position) in positions.iter_mut().enumerate() {
        let azimuth = step * T::from_usize(i).unwrap();
        let arm = Vector3::new(
            azimuth.sin() * config.arm_length,
            azimuth.cos() * config.arm_length,
            T::zero(),
        );
        *position = match &yaw {
            Some(rotation) => rotation * arm,
            None => arm,
        } + config.rotors_offset;
    }

    positions
}
