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

pub const EVENT_TYPE_TX: &str = "tx";

pub const ATTRIBUTE_KEY_FEE: &str = "fee";
pub const ATTRIBUTE_KEY_FEE_PAYER: &str = "fee_payer";
pub const ATTRIBUTE_KEY_ACC_SEQ: &str = "acc_seq";
pub const ATTRIBUTE_KEY_SIGNATURE: &str = "signature";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CosmosEvent {
	pub r#type: String,
	pub attributes: Vec<EventAttribute>,
}

impl CosmosEvent {
	pub fn new(r#type: impl Into<String>) -> Self {
		Self { r#type: r#type.into(), attributes: Vec::new() }
	}

	pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
		self.attributes.push(EventAttribute { key: key.into(), value: value.into() });
		self
	}
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EventAttribute {
	pub key: String,
	pub value: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EventManager {
	events: Vec<CosmosEvent>,
}

impl EventManager {
	pub fn emit_event(&mut self, event: CosmosEvent) {
		self.events.push(event);
	}

	pub fn emit_events(&mut self, events: impl IntoIterator<Item = CosmosEvent>) {
		self.events.extend(events);
	}

	pub fn events(&self) -> &[CosmosEvent] {
		&self.events
	}
}
