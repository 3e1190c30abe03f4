// ABOUTME: Zone calculation algorithms selected by ZoneMethod
// ABOUTME: Jack Daniels VDOT and critical velocity, both pure functions over race samples

//! Algorithm Selection Module
//!
//! Each [`ZoneMethod`](crate::models::ZoneMethod) maps onto one module here.
//! The zone calculator dispatches on the method enum; the algorithms
//! themselves hold no state.

pub mod critical_velocity;
pub mod vdot;
