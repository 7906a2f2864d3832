//! Compiles textual math expressions over one variable into callable functions.
//!
//! ```
//! use secant_expr::compile;
//!
//! let f = compile("x^2 - 2", "x").expect("valid expression");
//! assert_eq!(f.eval(3.0), 7.0);
//! assert_eq!(f.eval_many(&[0.0, 1.0]), vec![-2.0, -1.0]);
//! ```
//!
//! # Grammar
//!
//! - Binary operators `+ - * /` and power `^` (also written `**`).
//!   Power is right-associative and binds tighter than unary minus, so
//!   `-x^2` is `-(x^2)` and `2^3^2` is `2^9`.
//! - Numbers: `3`, `0.5`, `.5`, `5.`, `1e-3`, `2.5E+4`.
//! - Constants: `pi`, `π`, and `E` (Euler's number).
//! - Functions: `sin cos tan asin acos atan sinh cosh tanh exp log ln sqrt abs`.
//!   `log(x, b)` takes an optional base.
//!
//! Implicit multiplication such as `2x` is rejected, and so is nesting deeper
//! than [`MAX_DEPTH`] levels.
//!
//! Evaluation follows IEEE arithmetic: `log(-1)` is NaN and `1/0` is infinite.
//! Deciding what to do with non-finite values is left to the caller.

mod ast;
mod builtin;
mod compiled;
mod error;
mod parser;
mod token;

pub use compiled::{CompiledFunction, DEFAULT_VARIABLE, compile};
pub use error::{ParseError, ParseErrorKind};
pub use parser::MAX_DEPTH;
