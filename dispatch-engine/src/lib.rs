//! Nearest-available-officer dispatch for the campus dispatcher.
//!
//! This crate provides [`DispatchEngine`], which answers an emergency by
//! ranking zones on travel distance from their anchors to the incident,
//! deploying the first available officer from the nearest zone that has one,
//! and planning the equipment that officer carries.
//!
//! The engine is generic over the two collaborator boundaries defined in
//! `dispatch_core`: a [`DistanceProvider`](dispatch_core::DistanceProvider)
//! and a [`LoadoutPlanner`](dispatch_core::LoadoutPlanner). Distance failures
//! never fail a dispatch; they exclude the affected zone and are reported as
//! [`DispatchWarning::ZoneExcluded`].
//!
//! Selection is nearest-zone-first rather than globally nearest officer:
//! officers carry no position of their own, so every officer in a zone is
//! treated as standing at the zone anchor.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod engine;
mod error;
mod outcome;
mod ranking;

pub use engine::DispatchEngine;
pub use error::DispatchError;
pub use outcome::{DispatchResult, DispatchWarning};
pub use ranking::{ExcludedZone, RankedZone, ZoneRanking, rank_zones};
