//! Zantaku Site Tools - affiliate profile data access and build tooling
//!
//! This crate backs the Zantaku website with a typed query layer over the
//! Supabase affiliate tables, an advisory scanner for production build output
//! and a WebP conversion pass for raster assets.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
pub mod telemetry;
