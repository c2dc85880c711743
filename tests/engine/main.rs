#![allow(clippy::float_cmp, clippy::cast_precision_loss)]

mod errors;
mod policies;
mod scenarios;
mod trajectory;
