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

use crate::{stdsign::StdSignDoc, textual};
use ante_types::{
	address::AddressError,
	coin::Coin,
	public_key::PublicKey,
	tx::{SignMode, Tx},
};
use ante_x_bank_types::{
	coins_to_value,
	msgs::{msg_multi_send, msg_send},
};
use cosmos_sdk_proto::{
	cosmos::{
		bank::v1beta1::{MsgMultiSend, MsgSend},
		tx::v1beta1::SignDoc,
	},
	prost::Message,
};
use serde_json::{Map, Value};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SignerData {
	/// Bech32 address of the signer.
	pub address: String,
	pub chain_id: String,
	pub account_number: u64,
	pub sequence: u64,
	pub pub_key: Option<PublicKey>,
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SignModeHandlerError {
	#[error("sign mode {0} is not enabled")]
	UnsupportedMode(&'static str),
	#[error("cannot render message {0}")]
	InvalidMsg(String),
	#[error(transparent)]
	Address(#[from] AddressError),
	#[error("failed to serialize sign document: {0}")]
	Serialize(String),
}

/// Produces the bytes a signer commits to under a given sign mode.
pub trait SignModeHandler {
	fn default_mode(&self) -> SignMode;

	fn get_sign_bytes(
		&self,
		mode: SignMode,
		data: &SignerData,
		tx: &Tx,
	) -> Result<Vec<u8>, SignModeHandlerError>;
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DenomUnit {
	pub denom: String,
	pub exponent: u32,
}

/// Bank denomination metadata, as registered for a base denom.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Metadata {
	pub base: String,
	pub display: String,
	pub denom_units: Vec<DenomUnit>,
}

/// Looks up denomination metadata for TEXTUAL rendering.
pub trait CoinMetadataQuery {
	fn get_metadata(&self, denom: &str) -> Option<Metadata>;
}

impl<F> CoinMetadataQuery for F
where
	F: Fn(&str) -> Option<Metadata>,
{
	fn get_metadata(&self, denom: &str) -> Option<Metadata> {
		self(denom)
	}
}

pub struct SignModeHandlerOptions<Q> {
	pub enabled_modes: Vec<SignMode>,
	pub default_mode: SignMode,
	pub bech32_prefix: String,
	pub coin_metadata: Q,
}

impl<Q> SignModeHandlerOptions<Q> {
	/// DIRECT, TEXTUAL and LEGACY_AMINO_JSON enabled, DIRECT by default.
	pub fn new(bech32_prefix: impl Into<String>, coin_metadata: Q) -> Self {
		Self {
			enabled_modes: vec![SignMode::Direct, SignMode::Textual, SignMode::LegacyAminoJson],
			default_mode: SignMode::Direct,
			bech32_prefix: bech32_prefix.into(),
			coin_metadata,
		}
	}
}

/// Default handler dispatching to the enabled sign modes.
pub struct HandlerMap<Q> {
	enabled_modes: Vec<SignMode>,
	default_mode: SignMode,
	bech32_prefix: String,
	coin_metadata: Q,
}

impl<Q: CoinMetadataQuery> HandlerMap<Q> {
	pub fn new(options: SignModeHandlerOptions<Q>) -> Self {
		let SignModeHandlerOptions { enabled_modes, default_mode, bech32_prefix, coin_metadata } =
			options;
		Self { enabled_modes, default_mode, bech32_prefix, coin_metadata }
	}

	pub fn modes(&self) -> &[SignMode] {
		&self.enabled_modes
	}

	fn direct_sign_bytes(&self, data: &SignerData, tx: &Tx) -> Result<Vec<u8>, SignModeHandlerError> {
		Ok(SignDoc {
			body_bytes: tx.body_to_proto().encode_to_vec(),
			auth_info_bytes: tx.auth_info_to_proto(&self.bech32_prefix)?.encode_to_vec(),
			chain_id: data.chain_id.clone(),
			account_number: data.account_number,
		}
		.encode_to_vec())
	}

	fn legacy_amino_json_sign_bytes(
		&self,
		data: &SignerData,
		tx: &Tx,
	) -> Result<Vec<u8>, SignModeHandlerError> {
		let fee = tx.fee();
		let amount: Vec<cosmos_sdk_proto::cosmos::base::v1beta1::Coin> =
			fee.amount.iter().map(Into::into).collect();

		let mut std_fee = Map::new();
		std_fee.insert("gas".to_string(), Value::String(fee.gas_limit.to_string()));
		std_fee.insert("amount".to_string(), coins_to_value(&amount));
		if let Some(payer) = &fee.payer {
			let payer = ante_types::address::address_to_bech32(&self.bech32_prefix, payer)?;
			std_fee.insert("payer".to_string(), Value::String(payer));
		}
		if let Some(granter) = &fee.granter {
			let granter = ante_types::address::address_to_bech32(&self.bech32_prefix, granter)?;
			std_fee.insert("granter".to_string(), Value::String(granter));
		}

		let msgs = tx
			.body
			.messages
			.iter()
			.map(|message| match message.type_url.as_str() {
				msg_send::TYPE_URL => MsgSend::decode(&*message.value)
					.map(|msg| msg_send::get_sign_bytes(&msg))
					.map_err(|_| SignModeHandlerError::InvalidMsg(message.type_url.clone())),
				msg_multi_send::TYPE_URL => MsgMultiSend::decode(&*message.value)
					.map(|msg| msg_multi_send::get_sign_bytes(&msg))
					.map_err(|_| SignModeHandlerError::InvalidMsg(message.type_url.clone())),
				_ => Err(SignModeHandlerError::InvalidMsg(message.type_url.clone())),
			})
			.collect::<Result<Vec<_>, _>>()?;

		let timeout_height = tx.body.timeout_height;
		let sign_doc = StdSignDoc {
			account_number: data.account_number.to_string(),
			chain_id: data.chain_id.clone(),
			fee: Value::Object(std_fee),
			memo: tx.memo().to_string(),
			msgs,
			sequence: data.sequence.to_string(),
			timeout_height: (timeout_height != 0).then(|| timeout_height.to_string()),
		};

		let value = serde_json::to_value(sign_doc)
			.map_err(|e| SignModeHandlerError::Serialize(e.to_string()))?;
		Ok(value.to_string().into_bytes())
	}

	fn textual_sign_bytes(&self, data: &SignerData, tx: &Tx) -> Result<Vec<u8>, SignModeHandlerError> {
		let body_bytes = tx.body_to_proto().encode_to_vec();
		let auth_info_bytes = tx.auth_info_to_proto(&self.bech32_prefix)?.encode_to_vec();

		let screens = textual::Renderer::new(&self.coin_metadata, &self.bech32_prefix)
			.render(data, tx, &body_bytes, &auth_info_bytes)?;

		serde_json::to_vec(&screens).map_err(|e| SignModeHandlerError::Serialize(e.to_string()))
	}

	/// Human readable rendering of `coins` using the registered display units.
	pub fn format_coins(&self, coins: &[Coin]) -> String {
		textual::Renderer::new(&self.coin_metadata, &self.bech32_prefix).format_coins(coins)
	}
}

impl<Q: CoinMetadataQuery> SignModeHandler for HandlerMap<Q> {
	fn default_mode(&self) -> SignMode {
		self.default_mode
	}

	fn get_sign_bytes(
		&self,
		mode: SignMode,
		data: &SignerData,
		tx: &Tx,
	) -> Result<Vec<u8>, SignModeHandlerError> {
		if !self.enabled_modes.contains(&mode) {
			return Err(SignModeHandlerError::UnsupportedMode(mode.as_str_name()));
		}

		tracing::trace!(target: "ante::signing", mode = mode.as_str_name(), signer = %data.address, "get sign bytes");

		match mode {
			SignMode::Direct => self.direct_sign_bytes(data, tx),
			SignMode::LegacyAminoJson => self.legacy_amino_json_sign_bytes(data, tx),
			SignMode::Textual => self.textual_sign_bytes(data, tx),
			SignMode::Unspecified => Err(SignModeHandlerError::UnsupportedMode(mode.as_str_name())),
		}
	}
}
