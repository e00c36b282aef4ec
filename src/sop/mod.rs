// Copyright (c) The sop-min Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

mod caches;
mod display;
mod sop_impl;
mod urp;

pub use display::*;
pub use sop_impl::*;
pub use urp::*;
