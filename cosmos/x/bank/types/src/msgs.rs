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

pub mod msg_send {
	use crate::coins_to_value;
	use cosmos_sdk_proto::cosmos::bank::v1beta1::MsgSend;
	use serde_json::{Map, Value};

	pub const TYPE_URL: &str = "/cosmos.bank.v1beta1.MsgSend";
	const AMINO_NAME: &str = "cosmos-sdk/MsgSend";

	pub fn get_sign_bytes(msg: &MsgSend) -> Value {
		let mut value = Map::new();
		value.insert("from_address".to_string(), Value::String(msg.from_address.clone()));
		value.insert("to_address".to_string(), Value::String(msg.to_address.clone()));
		value.insert("amount".to_string(), coins_to_value(&msg.amount));

		let mut legacy_msg = Map::new();
		legacy_msg.insert("type".to_string(), Value::String(AMINO_NAME.to_string()));
		legacy_msg.insert("value".to_string(), Value::Object(value));

		Value::Object(legacy_msg)
	}

	pub fn get_signers(msg: &MsgSend) -> Vec<String> {
		vec![msg.from_address.clone()]
	}
}

pub mod msg_multi_send {
	use crate::coins_to_value;
	use cosmos_sdk_proto::cosmos::bank::v1beta1::MsgMultiSend;
	use serde_json::{Map, Value};

	pub const TYPE_URL: &str = "/cosmos.bank.v1beta1.MsgMultiSend";
	const AMINO_NAME: &str = "cosmos-sdk/MsgMultiSend";

	fn io_value(address: &str, coins: &[cosmos_sdk_proto::cosmos::base::v1beta1::Coin]) -> Value {
		let mut io = Map::new();
		io.insert("address".to_string(), Value::String(address.to_string()));
		io.insert("coins".to_string(), coins_to_value(coins));
		Value::Object(io)
	}

	pub fn get_sign_bytes(msg: &MsgMultiSend) -> Value {
		let inputs = msg.inputs.iter().map(|i| io_value(&i.address, &i.coins)).collect();
		let outputs = msg.outputs.iter().map(|o| io_value(&o.address, &o.coins)).collect();

		let mut value = Map::new();
		value.insert("inputs".to_string(), Value::Array(inputs));
		value.insert("outputs".to_string(), Value::Array(outputs));

		let mut legacy_msg = Map::new();
		legacy_msg.insert("type".to_string(), Value::String(AMINO_NAME.to_string()));
		legacy_msg.insert("value".to_string(), Value::Object(value));

		Value::Object(legacy_msg)
	}

	/// Input addresses in order of first appearance.
	pub fn get_signers(msg: &MsgMultiSend) -> Vec<String> {
		let mut signers = Vec::<String>::new();
		for input in msg.inputs.iter() {
			if !signers.contains(&input.address) {
				signers.push(input.address.clone());
			}
		}
		signers
	}
}
