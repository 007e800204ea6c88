// This file is part of Horizon.

// Copyright (C) 2023 Haderech Pte. Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <http://www.gnu.org/licenses/>.

//! Ante decorators authenticating Cosmos transactions.
//!
//! Decorators run in a fixed order before any message executes. Each one receives the
//! [`Context`](ante_types::Context) by value and passes a derivative on, and the first
//! error aborts the chain. [`ante::new_ante_handler`] assembles the default chain.

pub mod ante;
pub mod basic;
pub mod fee;
pub mod keeper;
pub mod params;
pub mod sigverify;

#[cfg(test)]
mod mock;

pub use ante::{new_ante_handler, AnteDecorator, AnteHandler, HandlerOptions};
pub use params::Params;
