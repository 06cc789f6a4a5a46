// SPDX-License-Identifier: MPL-2.0
//! Centralized styles for the sheet widgets.

pub mod container;
