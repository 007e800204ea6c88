// This file is part of Horizon.

// Copyright (C) 2023 Haderech Pte. Ltd.
// SPDX-License-Identifier: Apache-2.0

// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// 	http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use parity_scale_codec::{Decode, Encode};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Encode, Decode, Serialize, Deserialize)]
pub struct Coin {
	pub denom: String,
	pub amount: u128,
}

impl Coin {
	pub fn new(amount: u128, denom: impl Into<String>) -> Self {
		Self { denom: denom.into(), amount }
	}
}

impl core::fmt::Display for Coin {
	fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
		write!(f, "{}{}", self.amount, self.denom)
	}
}

impl From<&Coin> for cosmos_sdk_proto::cosmos::base::v1beta1::Coin {
	fn from(coin: &Coin) -> Self {
		Self { denom: coin.denom.clone(), amount: coin.amount.to_string() }
	}
}

impl TryFrom<&cosmos_sdk_proto::cosmos::base::v1beta1::Coin> for Coin {
	type Error = core::num::ParseIntError;

	fn try_from(coin: &cosmos_sdk_proto::cosmos::base::v1beta1::Coin) -> Result<Self, Self::Error> {
		Ok(Self { denom: coin.denom.clone(), amount: coin.amount.parse::<u128>()? })
	}
}

/// Format coins the way the Cosmos SDK does in events, e.g. `1000uatom,25acdt`.
pub fn amount_to_string(amount: &[Coin]) -> String {
	amount.iter().map(ToString::to_string).collect::<Vec<_>>().join(",")
}

pub fn is_zero(amount: &[Coin]) -> bool {
	amount.iter().all(|coin| coin.amount == 0)
}
