//! Numerical primitives for the reactor CEvNS model.

pub mod interp;
pub mod quadrature;
