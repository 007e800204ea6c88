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

use crate::params::Params;
use ante_types::{coin::Coin, BaseAccount};
use sp_core::H160;

pub const FEE_COLLECTOR_NAME: &str = "fee_collector";

pub trait AccountKeeper {
	fn get_account(&self, address: &H160) -> Option<BaseAccount>;
	fn set_account(&mut self, account: BaseAccount);
	/// Create an account with the next free account number. The account is not stored.
	fn new_account_with_address(&mut self, address: &H160) -> BaseAccount;
	fn bech32_prefix(&self) -> &str;
}

pub trait ParamsKeeper {
	fn get_params(&self) -> Params;
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum BankError {
	#[error("spendable balance {balance}{denom} is smaller than {required}{denom}")]
	InsufficientFunds { denom: String, balance: u128, required: u128 },
	#[error("module account {0} does not exist")]
	UnknownModule(String),
}

pub trait BankKeeper {
	fn send_coins_from_account_to_module(
		&mut self,
		sender: &H160,
		recipient_module: &str,
		amount: &[Coin],
	) -> Result<(), BankError>;
}
