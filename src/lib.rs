mod rational;
pub use crate::rational::Rational;

mod problem;
pub use crate::problem::Problem;
