//! Budget trip planner server.
//!
//! A web application that answers: "if I travel this route with these
//! transport and hotel choices for this many days, what will it cost, and
//! does it fit my budget?"

pub mod catalogue;
pub mod config;
pub mod domain;
pub mod planner;
pub mod web;
