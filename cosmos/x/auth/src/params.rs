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

use serde::{Deserialize, Serialize};

pub const DEFAULT_MAX_MEMO_CHARACTERS: u64 = 256;
pub const DEFAULT_TX_SIG_LIMIT: u64 = 7;
pub const DEFAULT_TX_SIZE_COST_PER_BYTE: u64 = 10;
pub const DEFAULT_SIG_VERIFY_COST_ED25519: u64 = 590;
pub const DEFAULT_SIG_VERIFY_COST_SECP256K1: u64 = 1000;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ParamsError {
	#[error("invalid {0}: must be positive")]
	NotPositive(&'static str),
}

/// Auth module parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Params {
	pub max_memo_characters: u64,
	pub tx_sig_limit: u64,
	pub tx_size_cost_per_byte: u64,
	pub sig_verify_cost_ed25519: u64,
	pub sig_verify_cost_secp256k1: u64,
}

impl Default for Params {
	fn default() -> Self {
		Self {
			max_memo_characters: DEFAULT_MAX_MEMO_CHARACTERS,
			tx_sig_limit: DEFAULT_TX_SIG_LIMIT,
			tx_size_cost_per_byte: DEFAULT_TX_SIZE_COST_PER_BYTE,
			sig_verify_cost_ed25519: DEFAULT_SIG_VERIFY_COST_ED25519,
			sig_verify_cost_secp256k1: DEFAULT_SIG_VERIFY_COST_SECP256K1,
		}
	}
}

impl Params {
	/// Secp256r1 verification costs one and a half secp256k1 verifications.
	pub fn sig_verify_cost_secp256r1(&self) -> u64 {
		self.sig_verify_cost_secp256k1 / 2 * 3
	}

	pub fn validate(&self) -> Result<(), ParamsError> {
		let fields = [
			("max memo characters", self.max_memo_characters),
			("tx signature limit", self.tx_sig_limit),
			("tx size cost per byte", self.tx_size_cost_per_byte),
			("ED25519 signature verification cost", self.sig_verify_cost_ed25519),
			("SECP256k1 signature verification cost", self.sig_verify_cost_secp256k1),
		];

		match fields.into_iter().find(|(_, value)| *value == 0) {
			Some((name, _)) => Err(ParamsError::NotPositive(name)),
			None => Ok(()),
		}
	}
}
