//! Topic generators grouped by question family.
//!
//! Every random generator follows the same shape:
//!
//! ```ignore
//! pub fn gen_<name><R: Rng>(rng: &mut R, difficulty: Difficulty) -> Question
//! ```
//!
//! and draws its operands before delegating to a pure builder
//! (`add(a, b)`, `ln(x, difficulty)`, `coin(n, k)`, ...) that can be called
//! with fixed operands. The generator dispatches to these via `generator.rs`.

/// addition, subtraction, multiplication, division, decimals, square, cube
pub mod arithmetic;
/// sqrt, ln, exp, inverse, logret
pub mod approximation;
/// coin, urn, interval, conditional
pub mod probability;
