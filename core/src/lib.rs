//! commission-core: deterministic sales-commission simulation.
//!
//! One generation pass samples an achievement percentage and a target
//! tier for each of `n_reps` independent trials, then derives actual
//! sales and a tiered commission. Everything is in-memory and
//! single-threaded; all randomness flows through a caller-owned,
//! explicitly seeded [`rng::SimRng`].

pub mod commission;
pub mod config;
pub mod error;
pub mod generator;
pub mod rng;
pub mod trial;
