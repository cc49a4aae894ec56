pub mod airfoil;
pub mod errors;
pub mod serialize;
