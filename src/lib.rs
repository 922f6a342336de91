//! Seven S Sim - Organizational alignment simulator
//!
//! This crate models a company through the McKinsey 7S framework, lets a
//! caller make strategic decisions and resolve tensions between elements,
//! and recomputes the overall alignment score after every change.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
