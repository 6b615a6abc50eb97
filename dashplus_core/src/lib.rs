// Copyright (C) 2025 aidan-es. Licensed under the GNU AGPLv3.
//! Embeds the ESP-DashboardPlus web page into a firmware header.
pub mod error;
pub mod generator;
pub mod header;
pub mod layout;

pub use error::GenerateError;
