//! Card transform math and interpolation helpers.

pub mod card;
pub mod linear;
