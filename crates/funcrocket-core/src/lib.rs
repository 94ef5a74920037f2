//! Core types and definitions for the rocket navigation exercise.
//!
//! This crate defines the vocabulary shared by the steering decision and the
//! level catalog: geometric types, the turn command, physics tunables, and
//! tuning constants. It has no dependency on any rendering or runtime
//! framework — the simulation loop lives outside this workspace.

pub mod commands;
pub mod constants;
pub mod types;
