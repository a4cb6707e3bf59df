//! Landmark Guide - landmark identification with freemium access control.
//!
//! Identifies landmarks in photos through a remote vision endpoint, gates
//! each analysis behind a free quota, trial or subscription, and keeps a
//! short follow-up chat per landmark.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
