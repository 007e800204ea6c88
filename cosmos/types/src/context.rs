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

use crate::{events::EventManager, store::BasicGasMeter};

/// Execution context threaded through the ante chain. Decorators take it by value and
/// hand back a derivative.
#[derive(Clone, Debug)]
pub struct Context {
	chain_id: String,
	block_height: u64,
	check_tx: bool,
	recheck_tx: bool,
	sigverify_tx: bool,
	tx_bytes: Vec<u8>,
	gas_meter: BasicGasMeter,
	event_manager: EventManager,
}

impl Default for Context {
	fn default() -> Self {
		Self {
			chain_id: String::new(),
			block_height: 0,
			check_tx: false,
			recheck_tx: false,
			sigverify_tx: true,
			tx_bytes: Vec::new(),
			gas_meter: BasicGasMeter::infinite(),
			event_manager: EventManager::default(),
		}
	}
}

impl Context {
	pub fn new(chain_id: impl Into<String>, block_height: u64) -> Self {
		Self { chain_id: chain_id.into(), block_height, ..Default::default() }
	}

	pub fn chain_id(&self) -> &str {
		&self.chain_id
	}

	pub fn block_height(&self) -> u64 {
		self.block_height
	}

	pub fn is_check_tx(&self) -> bool {
		self.check_tx
	}

	pub fn is_recheck_tx(&self) -> bool {
		self.recheck_tx
	}

	pub fn is_sigverify_tx(&self) -> bool {
		self.sigverify_tx
	}

	pub fn is_genesis(&self) -> bool {
		self.block_height == 0
	}

	pub fn tx_bytes(&self) -> &[u8] {
		&self.tx_bytes
	}

	pub fn gas_meter(&self) -> &BasicGasMeter {
		&self.gas_meter
	}

	pub fn gas_meter_mut(&mut self) -> &mut BasicGasMeter {
		&mut self.gas_meter
	}

	pub fn event_manager(&self) -> &EventManager {
		&self.event_manager
	}

	pub fn event_manager_mut(&mut self) -> &mut EventManager {
		&mut self.event_manager
	}

	pub fn with_chain_id(mut self, chain_id: impl Into<String>) -> Self {
		self.chain_id = chain_id.into();
		self
	}

	pub fn with_block_height(mut self, block_height: u64) -> Self {
		self.block_height = block_height;
		self
	}

	pub fn with_is_check_tx(mut self, check_tx: bool) -> Self {
		self.check_tx = check_tx;
		self
	}

	/// Recheck implies check.
	pub fn with_is_recheck_tx(mut self, recheck_tx: bool) -> Self {
		if recheck_tx {
			self.check_tx = true;
		}
		self.recheck_tx = recheck_tx;
		self
	}

	pub fn with_is_sigverify_tx(mut self, sigverify_tx: bool) -> Self {
		self.sigverify_tx = sigverify_tx;
		self
	}

	pub fn with_tx_bytes(mut self, tx_bytes: Vec<u8>) -> Self {
		self.tx_bytes = tx_bytes;
		self
	}

	pub fn with_gas_meter(mut self, gas_meter: BasicGasMeter) -> Self {
		self.gas_meter = gas_meter;
		self
	}
}
