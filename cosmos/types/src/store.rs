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

pub type Gas = u64;

#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum GasError {
	#[error("gas overflow; gasWanted overflowed while consuming {descriptor}")]
	GasOverflow { descriptor: String },
	#[error("out of gas in location: {descriptor}; gasWanted: {limit}, gasUsed: {used}")]
	OutOfGas { descriptor: String, limit: Gas, used: Gas },
}

pub trait GasMeter {
	fn new(limit: Gas) -> Self;
	fn consumed_gas(&self) -> Gas;
	fn gas_remaining(&self) -> Gas;
	fn limit(&self) -> Gas;
	fn consume_gas(&mut self, amount: Gas, descriptor: &str) -> Result<Gas, GasError>;
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BasicGasMeter {
	pub limit: Gas,
	pub consumed: Gas,
}

impl BasicGasMeter {
	pub fn infinite() -> Self {
		Self::new(Gas::MAX)
	}

	pub fn is_infinite(&self) -> bool {
		self.limit == Gas::MAX
	}
}

impl Default for BasicGasMeter {
	fn default() -> Self {
		Self::infinite()
	}
}

impl GasMeter for BasicGasMeter {
	fn new(limit: Gas) -> Self {
		Self { limit, consumed: 0 }
	}

	fn consumed_gas(&self) -> Gas {
		self.consumed
	}

	fn gas_remaining(&self) -> Gas {
		self.limit.saturating_sub(self.consumed)
	}

	fn limit(&self) -> Gas {
		self.limit
	}

	/// Charge `amount`. A failed charge leaves `consumed` untouched.
	fn consume_gas(&mut self, amount: Gas, descriptor: &str) -> Result<Gas, GasError> {
		let consumed = self
			.consumed
			.checked_add(amount)
			.ok_or_else(|| GasError::GasOverflow { descriptor: descriptor.into() })?;
		if consumed > self.limit {
			return Err(GasError::OutOfGas {
				descriptor: descriptor.into(),
				limit: self.limit,
				used: consumed,
			});
		}

		self.consumed = consumed;
		Ok(self.consumed)
	}
}

/// Nested write scopes over the state touched by the ante chain.
pub trait TransactionalStore {
	fn start_transaction(&mut self);
	fn commit_transaction(&mut self);
	fn rollback_transaction(&mut self);
}
