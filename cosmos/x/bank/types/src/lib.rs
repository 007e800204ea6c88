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

pub mod msgs;

use cosmos_sdk_proto::cosmos::base::v1beta1::Coin;
use serde_json::{Map, Value};

/// Amino JSON form of a coin list. Keys are emitted in sorted order.
pub fn coins_to_value(coins: &[Coin]) -> Value {
	let coins = coins
		.iter()
		.map(|amt| {
			let mut coin = Map::new();
			coin.insert("amount".to_string(), Value::String(amt.amount.clone()));
			coin.insert("denom".to_string(), Value::String(amt.denom.clone()));
			Value::Object(coin)
		})
		.collect();

	Value::Array(coins)
}
