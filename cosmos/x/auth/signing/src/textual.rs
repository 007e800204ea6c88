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

//! TEXTUAL sign mode: the transaction rendered as a list of human readable screens.
//!
//! Screens are encoded as a JSON array. Every screen has a title and a content line;
//! expert screens carry data a hardware wallet may hide by default. The final screen
//! hashes the protobuf body and auth info so the screens commit to every byte.

use crate::sign_mode_handler::{CoinMetadataQuery, SignModeHandlerError, SignerData};
use ante_types::{
	address::address_to_bech32,
	coin::Coin,
	tx::{Any, Tx},
};
use ante_x_bank_types::msgs::{msg_multi_send, msg_send};
use base64::{engine::general_purpose::STANDARD, Engine};
use cosmos_sdk_proto::{
	cosmos::bank::v1beta1::{MsgMultiSend, MsgSend},
	prost::Message,
};
use serde::Serialize;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Screen {
	pub title: String,
	pub content: String,
	#[serde(skip_serializing_if = "is_zero")]
	pub indent: u32,
	#[serde(skip_serializing_if = "is_false")]
	pub expert: bool,
}

fn is_zero(v: &u32) -> bool {
	*v == 0
}

fn is_false(v: &bool) -> bool {
	!*v
}

impl Screen {
	fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
		Self { title: title.into(), content: content.into(), indent: 0, expert: false }
	}

	fn indent(mut self, indent: u32) -> Self {
		self.indent = indent;
		self
	}

	fn expert(mut self) -> Self {
		self.expert = true;
		self
	}
}

pub struct Renderer<'a, Q> {
	coin_metadata: &'a Q,
	bech32_prefix: &'a str,
}

impl<'a, Q: CoinMetadataQuery> Renderer<'a, Q> {
	pub fn new(coin_metadata: &'a Q, bech32_prefix: &'a str) -> Self {
		Self { coin_metadata, bech32_prefix }
	}

	pub fn render(
		&self,
		data: &SignerData,
		tx: &Tx,
		body_bytes: &[u8],
		auth_info_bytes: &[u8],
	) -> Result<Vec<Screen>, SignModeHandlerError> {
		let mut screens = vec![
			Screen::new("Chain id", data.chain_id.clone()),
			Screen::new("Account number", data.account_number.to_string()),
			Screen::new("Sequence", data.sequence.to_string()),
			Screen::new("Address", data.address.clone()),
		];

		if let Some(pub_key) = &data.pub_key {
			screens.push(Screen::new("Public key", pub_key.type_url()).expert());
			screens.push(Screen::new("Key", STANDARD.encode(pub_key.to_bytes())).indent(1).expert());
		}

		let total = tx.body.messages.len();
		for (i, message) in tx.body.messages.iter().enumerate() {
			screens.push(Screen::new(
				format!("Message ({}/{})", i + 1, total),
				message.type_url.trim_start_matches('/'),
			));
			screens.extend(self.render_message(message)?);
		}
		screens.push(Screen::new("End of Message", ""));

		if !tx.memo().is_empty() {
			screens.push(Screen::new("Memo", tx.memo()));
		}

		let fee = tx.fee();
		screens.push(Screen::new("Fees", self.format_coins(&fee.amount)));
		if let Some(payer) = &fee.payer {
			screens.push(Screen::new("Fee payer", address_to_bech32(self.bech32_prefix, payer)?).expert());
		}
		if let Some(granter) = &fee.granter {
			screens
				.push(Screen::new("Fee granter", address_to_bech32(self.bech32_prefix, granter)?).expert());
		}
		screens.push(Screen::new("Gas limit", format_integer(fee.gas_limit as u128)).expert());
		if tx.body.timeout_height != 0 {
			screens.push(Screen::new("Timeout height", tx.body.timeout_height.to_string()).expert());
		}

		let mut raw = body_bytes.to_vec();
		raw.extend_from_slice(auth_info_bytes);
		screens.push(Screen::new("Hash of raw bytes", hex::encode(hp_crypto::sha2_256(&raw))).expert());

		Ok(screens)
	}

	fn render_message(&self, message: &Any) -> Result<Vec<Screen>, SignModeHandlerError> {
		let invalid = |_| SignModeHandlerError::InvalidMsg(message.type_url.clone());

		let screens = match message.type_url.as_str() {
			msg_send::TYPE_URL => {
				let msg = MsgSend::decode(&*message.value).map_err(invalid)?;
				vec![
					Screen::new("From address", msg.from_address).indent(1),
					Screen::new("To address", msg.to_address).indent(1),
					Screen::new("Amount", self.format_proto_coins(&msg.amount, &message.type_url)?)
						.indent(1),
				]
			},
			msg_multi_send::TYPE_URL => {
				let msg = MsgMultiSend::decode(&*message.value).map_err(invalid)?;
				let mut screens = Vec::new();
				for input in msg.inputs {
					screens.push(Screen::new("Input address", input.address).indent(1));
					screens.push(
						Screen::new("Coins", self.format_proto_coins(&input.coins, &message.type_url)?)
							.indent(2),
					);
				}
				for output in msg.outputs {
					screens.push(Screen::new("Output address", output.address).indent(1));
					screens.push(
						Screen::new("Coins", self.format_proto_coins(&output.coins, &message.type_url)?)
							.indent(2),
					);
				}
				screens
			},
			_ => vec![Screen::new("Bytes", hex::encode(&message.value)).indent(1).expert()],
		};

		Ok(screens)
	}

	fn format_proto_coins(
		&self,
		coins: &[cosmos_sdk_proto::cosmos::base::v1beta1::Coin],
		type_url: &str,
	) -> Result<String, SignModeHandlerError> {
		let coins = coins
			.iter()
			.map(Coin::try_from)
			.collect::<Result<Vec<_>, _>>()
			.map_err(|_| SignModeHandlerError::InvalidMsg(type_url.to_string()))?;

		Ok(self.format_coins(&coins))
	}

	pub fn format_coins(&self, coins: &[Coin]) -> String {
		if coins.is_empty() {
			return "zero".to_string();
		}

		coins.iter().map(|coin| self.format_coin(coin)).collect::<Vec<_>>().join(", ")
	}

	fn format_coin(&self, coin: &Coin) -> String {
		let raw = || format!("{} {}", format_integer(coin.amount), coin.denom);

		let Some(metadata) = self.coin_metadata.get_metadata(&coin.denom) else {
			return raw();
		};
		let exponent_of = |denom: &str| {
			metadata.denom_units.iter().find(|unit| unit.denom == denom).map(|unit| unit.exponent)
		};

		match (exponent_of(&coin.denom), exponent_of(&metadata.display)) {
			(Some(coin_exp), Some(display_exp)) if display_exp >= coin_exp =>
				format_decimal(coin.amount, display_exp - coin_exp)
					.map(|amount| format!("{} {}", amount, metadata.display))
					.unwrap_or_else(raw),
			_ => raw(),
		}
	}
}

/// Group digits by thousands with `'`, e.g. `1'000'000`.
fn format_integer(value: u128) -> String {
	let digits = value.to_string();
	let mut out = String::with_capacity(digits.len() + digits.len() / 3);
	for (i, c) in digits.chars().enumerate() {
		if i > 0 && (digits.len() - i) % 3 == 0 {
			out.push('\'');
		}
		out.push(c);
	}
	out
}

fn format_decimal(amount: u128, exponent: u32) -> Option<String> {
	let unit = 10u128.checked_pow(exponent)?;
	let mut out = format_integer(amount / unit);

	let fraction = amount % unit;
	if fraction != 0 {
		let fraction = format!("{:0width$}", fraction, width = exponent as usize);
		out.push('.');
		out.push_str(fraction.trim_end_matches('0'));
	}

	Some(out)
}
