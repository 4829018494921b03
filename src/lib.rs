//! # u-queueing
//!
//! Processing-time moment analysis for pipeline stages under classical and
//! neutrosophic queueing models.
//!
//! A stage that must complete `k` subtasks at processing rate `θ_L` has an
//! Erlang-distributed processing time with mean `k/θ_L` and variance `k/θ_L²`.
//! The neutrosophic variant scales the effective rate by an indeterminacy
//! factor `I_N ∈ [0, 1)`, modeling unquantified disruption, and yields
//! mean `k/(θ_L(1+I_N))` and variance `k/(θ_L²(1+I_N)²)`. This crate computes
//! both sets of moments, tabulates them across pipeline stages, and renders
//! the comparison as a text table and a grouped bar chart.
//!
//! ## Modules
//!
//! - [`params`] — Validated stage parameters (`k`, `θ_L`, `I_N`)
//! - [`moments`] — Classical and neutrosophic moment computation
//! - [`comparison`] — Per-stage comparison rows and builder
//! - [`report`] — Text table and bar chart rendering
//!
//! ## Design Philosophy
//!
//! - **Pure computation**: every operation is a total, stateless function of
//!   its inputs — no hidden global state, no sampling
//! - **Validate at the boundary**: out-of-domain scalars are rejected when
//!   [`params::StageParameters`] is constructed, so the moment functions
//!   themselves never fail
//! - **Fixed precision**: all reported moments carry exactly 4 decimal
//!   digits so tabulated values compare exactly
//!
//! ## References
//!
//! - Smarandache, F. (1998). *Neutrosophy: Neutrosophic Probability, Set,
//!   and Logic*. American Research Press.
//! - Zeina, M.B. (2020). "Erlang Service Queueing Model with Neutrosophic
//!   Parameters", *International Journal of Neutrosophic Science* 6(2),
//!   pp. 106-112.
//! - Kleinrock, L. (1975). *Queueing Systems, Volume 1: Theory*. Wiley.

pub mod comparison;
pub mod moments;
pub mod params;
pub mod report;
