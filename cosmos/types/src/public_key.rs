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

use crate::address::ADDRESS_LENGTH;
use cosmos_sdk_proto::{
	cosmos::crypto::{ed25519, multisig, secp256k1},
	prost::Message,
	Any,
};
use hp_crypto::{ripemd160, sha2_256};
use parity_scale_codec::{Decode, Encode};
use sp_core::H160;

pub const ED25519_TYPE_URL: &str = "/cosmos.crypto.ed25519.PubKey";
pub const SECP256K1_TYPE_URL: &str = "/cosmos.crypto.secp256k1.PubKey";
pub const SECP256R1_TYPE_URL: &str = "/cosmos.crypto.secp256r1.PubKey";
pub const LEGACY_AMINO_MULTISIG_TYPE_URL: &str = "/cosmos.crypto.multisig.LegacyAminoPubKey";

const SECP256R1_NAME: &str = "cosmos.crypto.secp256r1.PubKey";

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum KeyError {
	#[error("unrecognized public key type: {0}")]
	UnsupportedKeyType(String),
	#[error("invalid public key length: {0}")]
	InvalidLength(usize),
	#[error("failed to decode public key: {0}")]
	Decode(String),
}

/// Public key kinds accepted in a signer info. The set is fixed by protocol.
#[derive(Clone, Debug, PartialEq, Eq, Encode, Decode)]
pub enum PublicKey {
	Ed25519([u8; 32]),
	Secp256k1([u8; 33]),
	Secp256r1([u8; 33]),
	LegacyAminoMultisig(LegacyAminoPubKey),
}

/// Threshold multisig key: any `threshold` of `public_keys` must sign.
#[derive(Clone, Debug, PartialEq, Eq, Encode, Decode)]
pub struct LegacyAminoPubKey {
	pub threshold: u32,
	pub public_keys: Vec<PublicKey>,
}

impl LegacyAminoPubKey {
	pub fn new(threshold: u32, public_keys: Vec<PublicKey>) -> Self {
		Self { threshold, public_keys }
	}

	fn to_proto(&self) -> multisig::LegacyAminoPubKey {
		multisig::LegacyAminoPubKey {
			threshold: self.threshold,
			public_keys: self.public_keys.iter().map(PublicKey::to_any).collect(),
		}
	}
}

impl PublicKey {
	pub fn type_url(&self) -> &'static str {
		match self {
			PublicKey::Ed25519(_) => ED25519_TYPE_URL,
			PublicKey::Secp256k1(_) => SECP256K1_TYPE_URL,
			PublicKey::Secp256r1(_) => SECP256R1_TYPE_URL,
			PublicKey::LegacyAminoMultisig(_) => LEGACY_AMINO_MULTISIG_TYPE_URL,
		}
	}

	/// Raw key bytes. Multisig keys are represented by their protobuf encoding.
	pub fn to_bytes(&self) -> Vec<u8> {
		match self {
			PublicKey::Ed25519(key) => key.to_vec(),
			PublicKey::Secp256k1(key) | PublicKey::Secp256r1(key) => key.to_vec(),
			PublicKey::LegacyAminoMultisig(key) => key.to_proto().encode_to_vec(),
		}
	}

	pub fn address(&self) -> H160 {
		match self {
			PublicKey::Secp256k1(key) => ripemd160(&sha2_256(key)).into(),
			PublicKey::Ed25519(key) => H160::from_slice(&sha2_256(key)[..ADDRESS_LENGTH]),
			PublicKey::Secp256r1(key) => {
				let mut preimage = sha2_256(SECP256R1_NAME.as_bytes()).to_vec();
				preimage.extend_from_slice(key);
				H160::from_slice(&sha2_256(&preimage)[..ADDRESS_LENGTH])
			},
			PublicKey::LegacyAminoMultisig(_) =>
				H160::from_slice(&sha2_256(&self.to_bytes())[..ADDRESS_LENGTH]),
		}
	}

	/// Whether every elliptic curve point in the key decodes. Ed25519 points are not
	/// checked because the key kind is rejected before any verification happens.
	pub fn is_on_curve(&self) -> bool {
		match self {
			PublicKey::Ed25519(_) => true,
			PublicKey::Secp256k1(key) => hp_crypto::secp256k1_pubkey_is_valid(key),
			PublicKey::Secp256r1(key) => hp_crypto::secp256r1_pubkey_is_valid(key),
			PublicKey::LegacyAminoMultisig(key) => key.public_keys.iter().all(Self::is_on_curve),
		}
	}

	/// Number of signatures this key accounts for against the tx signature limit.
	pub fn count_sub_keys(&self) -> u64 {
		match self {
			PublicKey::LegacyAminoMultisig(key) =>
				key.public_keys.iter().map(Self::count_sub_keys).fold(0u64, u64::saturating_add),
			_ => 1,
		}
	}

	/// Verify a single-key signature over `msg`.
	///
	/// Secp256k1 signatures cover the SHA-256 digest of `msg`; secp256r1 hashes inside the
	/// verifier. Ed25519 and multisig keys cannot be verified here.
	pub fn verify_signature(&self, msg: &[u8], sig: &[u8]) -> Result<bool, KeyError> {
		match self {
			PublicKey::Secp256k1(key) =>
				Ok(hp_crypto::secp256k1_ecdsa_verify(sig, &sha2_256(msg), key)),
			PublicKey::Secp256r1(key) => Ok(hp_crypto::secp256r1_ecdsa_verify(sig, msg, key)),
			PublicKey::Ed25519(_) =>
				Err(KeyError::UnsupportedKeyType("ED25519 public keys are unsupported".into())),
			PublicKey::LegacyAminoMultisig(_) =>
				Err(KeyError::UnsupportedKeyType(LEGACY_AMINO_MULTISIG_TYPE_URL.into())),
		}
	}

	pub fn to_any(&self) -> Any {
		let value = match self {
			PublicKey::Ed25519(key) => ed25519::PubKey { key: key.to_vec() }.encode_to_vec(),
			PublicKey::Secp256k1(key) => secp256k1::PubKey { key: key.to_vec() }.encode_to_vec(),
			// cosmos.crypto.secp256r1.PubKey has the same single `bytes key = 1` field.
			PublicKey::Secp256r1(key) => secp256k1::PubKey { key: key.to_vec() }.encode_to_vec(),
			PublicKey::LegacyAminoMultisig(key) => key.to_proto().encode_to_vec(),
		};

		Any { type_url: self.type_url().into(), value }
	}
}

fn fixed_key<const N: usize>(key: &[u8]) -> Result<[u8; N], KeyError> {
	key.try_into().map_err(|_| KeyError::InvalidLength(key.len()))
}

impl TryFrom<&Any> for PublicKey {
	type Error = KeyError;

	fn try_from(any: &Any) -> Result<Self, Self::Error> {
		let decode_err = |e: cosmos_sdk_proto::prost::DecodeError| KeyError::Decode(e.to_string());

		match any.type_url.as_str() {
			ED25519_TYPE_URL => {
				let key = ed25519::PubKey::decode(&*any.value).map_err(decode_err)?;
				Ok(PublicKey::Ed25519(fixed_key(&key.key)?))
			},
			SECP256K1_TYPE_URL => {
				let key = secp256k1::PubKey::decode(&*any.value).map_err(decode_err)?;
				Ok(PublicKey::Secp256k1(fixed_key(&key.key)?))
			},
			SECP256R1_TYPE_URL => {
				let key = secp256k1::PubKey::decode(&*any.value).map_err(decode_err)?;
				Ok(PublicKey::Secp256r1(fixed_key(&key.key)?))
			},
			LEGACY_AMINO_MULTISIG_TYPE_URL => {
				let key = multisig::LegacyAminoPubKey::decode(&*any.value).map_err(decode_err)?;
				let public_keys = key
					.public_keys
					.iter()
					.map(PublicKey::try_from)
					.collect::<Result<Vec<_>, _>>()?;
				Ok(PublicKey::LegacyAminoMultisig(LegacyAminoPubKey::new(key.threshold, public_keys)))
			},
			other => Err(KeyError::UnsupportedKeyType(other.into())),
		}
	}
}
