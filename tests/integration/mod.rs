//! Integration tests for the Mohtion demo
//!
//! These tests verify that the player, ticker, widgets and binary work together.

#[path = "../common/mod.rs"]
pub mod common;

pub mod app_flow;
pub mod cli;
pub mod render;
