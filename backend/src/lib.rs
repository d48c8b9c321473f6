//! Demo data seeding service for the student achievement platform.
//!
//! The library is split along a hexagonal boundary: `domain` holds the
//! seeding orchestration, the persistence gateway, and the store port;
//! `outbound` holds the Diesel/PostgreSQL adapter; `demo_data` holds the
//! environment-driven configuration and the startup hook.

pub mod demo_data;
pub mod domain;
pub mod outbound;
