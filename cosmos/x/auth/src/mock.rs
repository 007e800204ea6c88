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

use crate::{
	keeper::{AccountKeeper, BankError, BankKeeper, ParamsKeeper, FEE_COLLECTOR_NAME},
	params::Params,
};
use ante_types::{
	address::address_to_bech32,
	coin::Coin,
	store::TransactionalStore,
	tx::{Any, AuthInfo, Body, Fee, ModeInfo, SignMode, SignerInfo},
	BaseAccount, PublicKey, Tx,
};
use ante_x_auth_signing::{
	HandlerMap, Metadata, SignModeHandler, SignModeHandlerOptions, SignerData,
};
use ante_x_bank_types::msgs::msg_send;
use cosmos_sdk_proto::{cosmos::bank::v1beta1::MsgSend, prost::Message};
use p256::ecdsa::signature::Signer;
use secp256k1::{Secp256k1, SecretKey};
use sp_core::H160;
use std::collections::BTreeMap;

pub const CHAIN_ID: &str = "horizon-test";
pub const BECH32_PREFIX: &str = "cosmos";
pub const FEE_DENOM: &str = "atom";
pub const TEST_GAS_LIMIT: u64 = 200_000;

#[derive(Clone, Debug, Default)]
struct State {
	accounts: BTreeMap<H160, BaseAccount>,
	balances: BTreeMap<(H160, String), u128>,
	module_balances: BTreeMap<(String, String), u128>,
	next_account_number: u64,
}

/// In-memory account, bank and params store with nested snapshots.
#[derive(Debug, Default)]
pub struct MockStore {
	state: State,
	snapshots: Vec<State>,
	pub params: Params,
}

impl MockStore {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn create_account(&mut self, address: H160, account_number: u64) -> BaseAccount {
		let mut acc = self.new_account_with_address(&address);
		acc.account_number = account_number;
		self.set_account(acc.clone());
		acc
	}

	pub fn fund(&mut self, address: H160, coin: Coin) {
		*self.state.balances.entry((address, coin.denom)).or_default() += coin.amount;
	}

	pub fn balance(&self, address: &H160, denom: &str) -> u128 {
		self.state.balances.get(&(*address, denom.to_string())).copied().unwrap_or_default()
	}

	pub fn module_balance(&self, module: &str, denom: &str) -> u128 {
		self.state
			.module_balances
			.get(&(module.to_string(), denom.to_string()))
			.copied()
			.unwrap_or_default()
	}

	pub fn depth(&self) -> usize {
		self.snapshots.len()
	}
}

impl AccountKeeper for MockStore {
	fn get_account(&self, address: &H160) -> Option<BaseAccount> {
		self.state.accounts.get(address).cloned()
	}

	fn set_account(&mut self, account: BaseAccount) {
		self.state.accounts.insert(account.address, account);
	}

	fn new_account_with_address(&mut self, address: &H160) -> BaseAccount {
		let account_number = self.state.next_account_number;
		self.state.next_account_number += 1;
		BaseAccount::new(*address, account_number)
	}

	fn bech32_prefix(&self) -> &str {
		BECH32_PREFIX
	}
}

impl ParamsKeeper for MockStore {
	fn get_params(&self) -> Params {
		self.params.clone()
	}
}

impl BankKeeper for MockStore {
	fn send_coins_from_account_to_module(
		&mut self,
		sender: &H160,
		recipient_module: &str,
		amount: &[Coin],
	) -> Result<(), BankError> {
		if recipient_module != FEE_COLLECTOR_NAME {
			return Err(BankError::UnknownModule(recipient_module.to_string()));
		}
		for coin in amount {
			let balance = self.balance(sender, &coin.denom);
			if balance < coin.amount {
				return Err(BankError::InsufficientFunds {
					denom: coin.denom.clone(),
					balance,
					required: coin.amount,
				});
			}
		}

		for coin in amount {
			*self.state.balances.entry((*sender, coin.denom.clone())).or_default() -= coin.amount;
			*self
				.state
				.module_balances
				.entry((recipient_module.to_string(), coin.denom.clone()))
				.or_default() += coin.amount;
		}

		Ok(())
	}
}

impl TransactionalStore for MockStore {
	fn start_transaction(&mut self) {
		self.snapshots.push(self.state.clone());
	}

	fn commit_transaction(&mut self) {
		self.snapshots.pop();
	}

	fn rollback_transaction(&mut self) {
		if let Some(state) = self.snapshots.pop() {
			self.state = state;
		}
	}
}

#[derive(Clone)]
pub enum PrivKey {
	Secp256k1(SecretKey),
	Secp256r1(p256::ecdsa::SigningKey),
	/// Only the public half exists. Signing yields zeroes.
	Ed25519([u8; 32]),
	/// A secp256k1 key whose x coordinate exceeds the field modulus.
	Secp256k1NotOnCurve,
}

impl PrivKey {
	pub fn secp256k1(seed: u8) -> Self {
		PrivKey::Secp256k1(SecretKey::from_slice(&[seed; 32]).unwrap())
	}

	pub fn secp256r1(seed: u8) -> Self {
		PrivKey::Secp256r1(p256::ecdsa::SigningKey::from_slice(&[seed; 32]).unwrap())
	}

	pub fn pub_key(&self) -> PublicKey {
		match self {
			PrivKey::Secp256k1(sk) =>
				PublicKey::Secp256k1(sk.public_key(&Secp256k1::signing_only()).serialize()),
			PrivKey::Secp256r1(sk) => {
				let point = sk.verifying_key().to_encoded_point(true);
				PublicKey::Secp256r1(point.as_bytes().try_into().unwrap())
			},
			PrivKey::Ed25519(key) => PublicKey::Ed25519(*key),
			PrivKey::Secp256k1NotOnCurve => {
				let mut key = [0xffu8; 33];
				key[0] = 0x02;
				PublicKey::Secp256k1(key)
			},
		}
	}

	pub fn address(&self) -> H160 {
		self.pub_key().address()
	}

	pub fn sign(&self, msg: &[u8]) -> Vec<u8> {
		match self {
			PrivKey::Secp256k1(sk) => {
				let digest = hp_crypto::sha2_256(msg);
				let message = secp256k1::Message::from_digest_slice(&digest).unwrap();
				Secp256k1::signing_only().sign_ecdsa(&message, sk).serialize_compact().to_vec()
			},
			PrivKey::Secp256r1(sk) => {
				let sig: p256::ecdsa::Signature = sk.sign(msg);
				sig.normalize_s().unwrap_or(sig).to_bytes().to_vec()
			},
			PrivKey::Ed25519(_) | PrivKey::Secp256k1NotOnCurve => vec![0u8; 64],
		}
	}
}

pub type TestSignModeHandler = HandlerMap<fn(&str) -> Option<Metadata>>;

fn no_metadata(_denom: &str) -> Option<Metadata> {
	None
}

pub fn sign_mode_handler() -> TestSignModeHandler {
	HandlerMap::new(SignModeHandlerOptions::new(
		BECH32_PREFIX,
		no_metadata as fn(&str) -> Option<Metadata>,
	))
}

pub fn bech32(address: &H160) -> String {
	address_to_bech32(BECH32_PREFIX, address).unwrap()
}

/// A bank send signed by `from`.
pub fn test_msg(from: &H160) -> Any {
	let msg = MsgSend {
		from_address: bech32(from),
		to_address: bech32(&H160::repeat_byte(0xee)),
		amount: vec![],
	};
	Any { type_url: msg_send::TYPE_URL.into(), value: msg.encode_to_vec() }
}

pub fn test_fee() -> Fee {
	Fee {
		amount: vec![Coin::new(150, FEE_DENOM)],
		gas_limit: TEST_GAS_LIMIT,
		payer: None,
		granter: None,
	}
}

/// Build and sign a transaction. Keys are embedded in signer infos and each key signs
/// over the given account number and sequence.
pub fn create_test_tx<H: SignModeHandler>(
	handler: &H,
	msgs: Vec<Any>,
	privs: &[PrivKey],
	acc_nums: &[u64],
	acc_seqs: &[u64],
	mode: SignMode,
) -> Tx {
	let signer_infos = privs
		.iter()
		.enumerate()
		.map(|(i, key)| SignerInfo {
			public_key: Some(key.pub_key()),
			mode_info: ModeInfo::Single { mode },
			sequence: acc_seqs[i],
			account_number: acc_nums[i],
		})
		.collect();

	let mut tx = Tx {
		body: Body { messages: msgs, memo: String::new(), timeout_height: 0 },
		auth_info: AuthInfo { signer_infos, fee: test_fee() },
		signatures: vec![Vec::new(); privs.len()],
	};

	let signatures = privs
		.iter()
		.enumerate()
		.map(|(i, key)| {
			let data = SignerData {
				address: bech32(&key.address()),
				chain_id: CHAIN_ID.to_string(),
				account_number: acc_nums[i],
				sequence: acc_seqs[i],
				pub_key: Some(key.pub_key()),
			};
			key.sign(&handler.get_sign_bytes(mode, &data, &tx).unwrap())
		})
		.collect();
	tx.signatures = signatures;

	tx
}
