//! # climadash-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve a **server-side-rendered HTML dashboard** that works with
//!   **zero JavaScript**: status fields, an inline SVG chart of the rolling
//!   buffer, and plain `<form>` controls for the fan, the lamp and the sensors
//! - Serve a small **JSON API** (`/api/dashboard`, `/api/actuators/…`,
//!   `/api/sensors/toggle`) and a **Server-Sent Events** stream of snapshots
//! - Map HTTP requests into application service calls (driving adapter)
//!
//! ## No-JS dashboard approach
//! - The page is rendered server-side as complete HTML.
//! - Controls are `<form>` elements that POST back to the server and
//!   redirect (PRG pattern).
//! - `<meta http-equiv="refresh">` reloads the page once per poll interval.
//!
//! ## Dependency rule
//! Depends on `climadash-app` (for port traits and services) and
//! `climadash-domain` (for the snapshot types). Never leaks axum types into
//! the domain.

pub mod api;
pub mod dashboard;
pub mod error;
pub mod router;
pub mod state;

#[cfg(test)]
mod test_support;
