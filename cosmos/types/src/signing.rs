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

use crate::{
	multisig::CompactBitArray,
	public_key::PublicKey,
	tx::{ModeInfo, SignMode},
};
use cosmos_sdk_proto::{cosmos::crypto::multisig::v1beta1::MultiSignature, prost::Message};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SignatureData {
	Single { mode: SignMode, signature: Vec<u8> },
	Multi { bitarray: CompactBitArray, signatures: Vec<SignatureData> },
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SignatureDecodeError {
	#[error("failed to decode multisignature: {0}")]
	Decode(String),
	#[error("expected {expected} signatures in multisignature, got {got}")]
	CountMismatch { expected: usize, got: usize },
}

impl SignatureData {
	/// Expand raw signature bytes following the signer's mode info. Multisignatures are
	/// protobuf `MultiSignature` messages holding one entry per set bit.
	pub fn from_mode_info(mode_info: &ModeInfo, signature: &[u8]) -> Result<Self, SignatureDecodeError> {
		match mode_info {
			ModeInfo::Single { mode } =>
				Ok(SignatureData::Single { mode: *mode, signature: signature.to_vec() }),
			ModeInfo::Multi { bitarray, mode_infos } => {
				let multi = MultiSignature::decode(signature)
					.map_err(|e| SignatureDecodeError::Decode(e.to_string()))?;
				if multi.signatures.len() != mode_infos.len() {
					return Err(SignatureDecodeError::CountMismatch {
						expected: mode_infos.len(),
						got: multi.signatures.len(),
					});
				}

				let signatures = mode_infos
					.iter()
					.zip(multi.signatures.iter())
					.map(|(mode_info, sig)| Self::from_mode_info(mode_info, sig))
					.collect::<Result<Vec<_>, _>>()?;

				Ok(SignatureData::Multi { bitarray: bitarray.clone(), signatures })
			},
		}
	}
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SignatureV2 {
	pub pub_key: Option<PublicKey>,
	pub data: SignatureData,
	pub sequence: u64,
	pub account_number: u64,
}

/// Encode sub-signatures as a protobuf `MultiSignature`.
pub fn encode_multi_signature(signatures: Vec<Vec<u8>>) -> Vec<u8> {
	MultiSignature { signatures }.encode_to_vec()
}
