// SPDX-License-Identifier: MPL-2.0
//! UI building blocks shared by the application shell.

pub mod theming;
pub mod toast;
