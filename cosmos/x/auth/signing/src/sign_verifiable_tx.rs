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

use ante_types::{
	address::{address_from_bech32, AddressError},
	public_key::PublicKey,
	signing::{SignatureData, SignatureDecodeError, SignatureV2},
	tx::Tx,
};
use ante_x_bank_types::msgs::{msg_multi_send, msg_send};
use cosmos_sdk_proto::{
	cosmos::bank::v1beta1::{MsgMultiSend, MsgSend},
	prost::Message,
};
use sp_core::H160;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SigVerifiableTxError {
	#[error("tx has no signers")]
	EmptySigners,
	#[error("invalid message {0}")]
	InvalidMsg(String),
	#[error("unsupported message type {0}")]
	UnsupportedMsg(String),
	#[error("invalid signer address: {0}")]
	InvalidSigner(#[from] AddressError),
	#[error("invalid signature: {0}")]
	InvalidSignature(#[from] SignatureDecodeError),
	#[error("the number of signatures {signatures} doesn't match the number of signer infos {signer_infos}")]
	SignatureCountMismatch { signatures: usize, signer_infos: usize },
}

/// Access to the parts of a transaction that signature checks need.
pub trait SigVerifiableTx {
	/// Message signers in order of first appearance, followed by the fee payer when it
	/// is not already one of them.
	fn get_signers(&self) -> Result<Vec<H160>, SigVerifiableTxError>;
	/// The explicit fee payer, or the first signer.
	fn fee_payer(&self) -> Result<H160, SigVerifiableTxError>;
	fn get_pub_keys(&self) -> Vec<Option<PublicKey>>;
	fn get_signatures_v2(&self) -> Result<Vec<SignatureV2>, SigVerifiableTxError>;
}

fn msg_signers(type_url: &str, value: &[u8]) -> Result<Vec<String>, SigVerifiableTxError> {
	let invalid = |_| SigVerifiableTxError::InvalidMsg(type_url.to_string());

	match type_url {
		msg_send::TYPE_URL => MsgSend::decode(value).map(|msg| msg_send::get_signers(&msg)).map_err(invalid),
		msg_multi_send::TYPE_URL =>
			MsgMultiSend::decode(value).map(|msg| msg_multi_send::get_signers(&msg)).map_err(invalid),
		_ => Err(SigVerifiableTxError::UnsupportedMsg(type_url.to_string())),
	}
}

impl SigVerifiableTx for Tx {
	fn get_signers(&self) -> Result<Vec<H160>, SigVerifiableTxError> {
		let mut signers = Vec::<H160>::new();

		for msg in self.body.messages.iter() {
			for msg_signer in msg_signers(&msg.type_url, &msg.value)? {
				let signer = address_from_bech32(&msg_signer)?;
				if !signers.contains(&signer) {
					signers.push(signer);
				}
			}
		}

		if let Some(fee_payer) = self.auth_info.fee.payer {
			if !signers.contains(&fee_payer) {
				signers.push(fee_payer);
			}
		}

		Ok(signers)
	}

	fn fee_payer(&self) -> Result<H160, SigVerifiableTxError> {
		match self.auth_info.fee.payer {
			Some(payer) => Ok(payer),
			None => self.get_signers()?.first().copied().ok_or(SigVerifiableTxError::EmptySigners),
		}
	}

	fn get_pub_keys(&self) -> Vec<Option<PublicKey>> {
		self.auth_info.signer_infos.iter().map(|info| info.public_key.clone()).collect()
	}

	fn get_signatures_v2(&self) -> Result<Vec<SignatureV2>, SigVerifiableTxError> {
		let signer_infos = &self.auth_info.signer_infos;
		if self.signatures.len() != signer_infos.len() {
			return Err(SigVerifiableTxError::SignatureCountMismatch {
				signatures: self.signatures.len(),
				signer_infos: signer_infos.len(),
			});
		}

		signer_infos
			.iter()
			.zip(self.signatures.iter())
			.map(|(info, sig)| {
				Ok(SignatureV2 {
					pub_key: info.public_key.clone(),
					data: SignatureData::from_mode_info(&info.mode_info, sig)?,
					sequence: info.sequence,
					account_number: info.account_number,
				})
			})
			.collect()
	}
}
