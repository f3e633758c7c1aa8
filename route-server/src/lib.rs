//! Rail route finder server.
//!
//! A web application that answers: "Which trains can take me from this city
//! to that one, through these cities, within this much time?"

pub mod config;
pub mod domain;
pub mod graph;
pub mod network;
pub mod planner;
pub mod web;
