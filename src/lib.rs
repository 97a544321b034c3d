#![doc = include_str!("../README.md")]

extern crate alloc;

mod error;
mod inspect;
pub mod ops;
mod outcome;

pub use self::{
    error::UnwrapMismatch,
    inspect::{Inspect, InspectOptions, Style, Stylize, colored_stylize, log_sink, plain_stylize},
    outcome::{Iter, Outcome},
};
