//! # climadash-domain
//!
//! Pure domain model for the climadash device dashboard.
//!
//! ## Responsibilities
//! - Foundational types: error conventions, timestamps and time labels
//! - Define **Status Readings** (one temperature/humidity/fan/lamp sample from the device)
//! - Define **Actuators** and the on/off **Commands** sent to them
//! - Define the **Rolling buffer** of recent samples that feeds the chart
//! - Define the **Dashboard** aggregate (display fields, buffer, sensor flag)
//! - Contain all invariant enforcement and domain logic
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod time;

pub mod actuator;
pub mod dashboard;
pub mod history;
pub mod reading;
