//! # multicopter-frame
//! Frame geometry and static actuator parameters for symmetric multi-rotor vehicles
//!
//! [`RotorFrame`] derives the rotor positions of a symmetric cross frame from an
//! [`Orientation`] tag and a [`FrameConfig`], and parameterizes the vehicle's
//! rotor handles through the [`RotorActuator`] seam
//! (see [`QuadFrame`] for the four-rotor class).
//!
//! Everything is computed once, at vehicle construction time; the dynamic rotor
//! model behind each handle is owned by the vehicle itself.

#![no_std]

pub mod frame;
pub use frame::{Error, FrameConfig, HexFrame, OctoFrame, QuadFrame, RotorFrame};

pub mod orientation;
pub use orientation::{Orientation, ParseOrientationError};

pub mod rotor;
pub use rotor::{RotorActuator, RotorParams};
