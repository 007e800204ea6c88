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

//! Domain transaction as carried on the wire (SCALE encoded) and its protobuf view used
//! to build DIRECT sign documents.

use crate::{
	address::{address_to_bech32, AddressError},
	coin::Coin,
	multisig::CompactBitArray,
	public_key::PublicKey,
};
use cosmos_sdk_proto::cosmos::tx::v1beta1 as proto;
use parity_scale_codec::{Decode, DecodeLimit, Encode};
use sp_core::H160;

#[derive(Clone, Debug, PartialEq, Eq, Encode, Decode)]
pub struct Any {
	pub type_url: String,
	pub value: Vec<u8>,
}

impl From<&Any> for cosmos_sdk_proto::Any {
	fn from(any: &Any) -> Self {
		Self { type_url: any.type_url.clone(), value: any.value.clone() }
	}
}

impl From<cosmos_sdk_proto::Any> for Any {
	fn from(any: cosmos_sdk_proto::Any) -> Self {
		Self { type_url: any.type_url, value: any.value }
	}
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Encode, Decode)]
pub struct Body {
	pub messages: Vec<Any>,
	pub memo: String,
	pub timeout_height: u64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Encode, Decode)]
pub enum SignMode {
	#[codec(index = 0)]
	Unspecified,
	#[codec(index = 1)]
	Direct,
	#[codec(index = 2)]
	Textual,
	#[codec(index = 127)]
	LegacyAminoJson,
}

impl SignMode {
	pub fn as_i32(&self) -> i32 {
		match self {
			SignMode::Unspecified => 0,
			SignMode::Direct => 1,
			SignMode::Textual => 2,
			SignMode::LegacyAminoJson => 127,
		}
	}

	pub fn as_str_name(&self) -> &'static str {
		match self {
			SignMode::Unspecified => "SIGN_MODE_UNSPECIFIED",
			SignMode::Direct => "SIGN_MODE_DIRECT",
			SignMode::Textual => "SIGN_MODE_TEXTUAL",
			SignMode::LegacyAminoJson => "SIGN_MODE_LEGACY_AMINO_JSON",
		}
	}
}

#[derive(Clone, Debug, PartialEq, Eq, Encode, Decode)]
pub enum ModeInfo {
	Single { mode: SignMode },
	Multi { bitarray: CompactBitArray, mode_infos: Vec<ModeInfo> },
}

impl From<&ModeInfo> for proto::ModeInfo {
	fn from(mode_info: &ModeInfo) -> Self {
		use proto::mode_info::{Multi, Single, Sum};

		let sum = match mode_info {
			ModeInfo::Single { mode } => Sum::Single(Single { mode: mode.as_i32() }),
			ModeInfo::Multi { bitarray, mode_infos } => Sum::Multi(Multi {
				bitarray: Some(bitarray.into()),
				mode_infos: mode_infos.iter().map(Into::into).collect(),
			}),
		};

		proto::ModeInfo { sum: Some(sum) }
	}
}

#[derive(Clone, Debug, PartialEq, Eq, Encode, Decode)]
pub struct SignerInfo {
	pub public_key: Option<PublicKey>,
	pub mode_info: ModeInfo,
	pub sequence: u64,
	/// Account number the signer committed to.
	pub account_number: u64,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Encode, Decode)]
pub struct Fee {
	pub amount: Vec<Coin>,
	pub gas_limit: u64,
	pub payer: Option<H160>,
	pub granter: Option<H160>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Encode, Decode)]
pub struct AuthInfo {
	pub signer_infos: Vec<SignerInfo>,
	pub fee: Fee,
}

/// Nesting allowed while decoding a transaction. Multisig keys and mode infos nest
/// inside themselves, so untrusted bytes must not recurse without bound.
pub const MAX_TX_DEPTH: u32 = 32;

#[derive(Clone, Debug, Default, PartialEq, Eq, Encode, Decode)]
pub struct Tx {
	pub body: Body,
	pub auth_info: AuthInfo,
	pub signatures: Vec<Vec<u8>>,
}

impl Tx {
	pub fn from_bytes(mut bytes: &[u8]) -> Result<Self, parity_scale_codec::Error> {
		Self::decode_with_depth_limit(MAX_TX_DEPTH, &mut bytes)
	}

	pub fn to_bytes(&self) -> Vec<u8> {
		self.encode()
	}

	pub fn memo(&self) -> &str {
		&self.body.memo
	}

	pub fn fee(&self) -> &Fee {
		&self.auth_info.fee
	}

	pub fn gas(&self) -> u64 {
		self.auth_info.fee.gas_limit
	}

	pub fn body_to_proto(&self) -> proto::TxBody {
		proto::TxBody {
			messages: self.body.messages.iter().map(Into::into).collect(),
			memo: self.body.memo.clone(),
			timeout_height: self.body.timeout_height,
			..Default::default()
		}
	}

	/// Protobuf auth info. Fee payer and granter are rendered with the chain's `hrp`.
	pub fn auth_info_to_proto(&self, hrp: &str) -> Result<proto::AuthInfo, AddressError> {
		let fee = &self.auth_info.fee;
		let bech32 = |address: &Option<H160>| -> Result<String, AddressError> {
			address.as_ref().map(|a| address_to_bech32(hrp, a)).transpose().map(Option::unwrap_or_default)
		};

		Ok(proto::AuthInfo {
			signer_infos: self
				.auth_info
				.signer_infos
				.iter()
				.map(|info| proto::SignerInfo {
					public_key: info.public_key.as_ref().map(PublicKey::to_any),
					mode_info: Some((&info.mode_info).into()),
					sequence: info.sequence,
				})
				.collect(),
			fee: Some(proto::Fee {
				amount: fee.amount.iter().map(Into::into).collect(),
				gas_limit: fee.gas_limit,
				payer: bech32(&fee.payer)?,
				granter: bech32(&fee.granter)?,
			}),
			..Default::default()
		})
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::public_key::LegacyAminoPubKey;
	use cosmos_sdk_proto::prost::Message;

	fn sample_tx() -> Tx {
		Tx {
			body: Body {
				messages: vec![Any { type_url: "/cosmos.bank.v1beta1.MsgSend".into(), value: vec![1, 2] }],
				memo: "memo".into(),
				timeout_height: 10,
			},
			auth_info: AuthInfo {
				signer_infos: vec![SignerInfo {
					public_key: Some(PublicKey::Secp256k1([2u8; 33])),
					mode_info: ModeInfo::Single { mode: SignMode::Direct },
					sequence: 3,
					account_number: 7,
				}],
				fee: Fee {
					amount: vec![Coin::new(150, "uatom")],
					gas_limit: 200_000,
					payer: Some(H160::repeat_byte(1)),
					granter: None,
				},
			},
			signatures: vec![vec![0u8; 64]],
		}
	}

	#[test]
	fn decodes_what_it_encodes() {
		let tx = sample_tx();
		assert_eq!(Tx::from_bytes(&tx.to_bytes()).unwrap(), tx);
		assert!(Tx::from_bytes(&[0xff, 0x01]).is_err());
	}

	fn nested_multisig(depth: usize) -> PublicKey {
		(0..depth).fold(PublicKey::Secp256k1([2u8; 33]), |key, _| {
			PublicKey::LegacyAminoMultisig(LegacyAminoPubKey::new(1, vec![key]))
		})
	}

	#[test]
	fn decode_depth_is_bounded() {
		let mut tx = sample_tx();
		tx.auth_info.signer_infos[0].public_key = Some(nested_multisig(2));
		assert_eq!(Tx::from_bytes(&tx.to_bytes()).unwrap(), tx);

		tx.auth_info.signer_infos[0].public_key = Some(nested_multisig(MAX_TX_DEPTH as usize));
		assert!(Tx::from_bytes(&tx.to_bytes()).is_err());
	}

	#[test]
	fn protobuf_auth_info_carries_bech32_payer() {
		let tx = sample_tx();
		let auth_info = tx.auth_info_to_proto("cosmos").unwrap();

		let fee = auth_info.fee.unwrap();
		assert!(fee.payer.starts_with("cosmos1"));
		assert!(fee.granter.is_empty());
		assert_eq!(fee.amount[0].amount, "150");
		assert_eq!(auth_info.signer_infos[0].sequence, 3);

		let body = tx.body_to_proto();
		assert_eq!(body.timeout_height, 10);
		assert!(!body.encode_to_vec().is_empty());
	}

	#[test]
	fn sign_mode_matches_protobuf_values() {
		use cosmos_sdk_proto::cosmos::tx::signing::v1beta1::SignMode as ProtoSignMode;

		assert_eq!(SignMode::Direct.as_i32(), ProtoSignMode::Direct as i32);
		assert_eq!(SignMode::Textual.as_i32(), ProtoSignMode::Textual as i32);
		assert_eq!(SignMode::LegacyAminoJson.as_i32(), ProtoSignMode::LegacyAminoJson as i32);
	}
}
