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
	ante::{bech32, get_signer_acc, signer_error, AnteDecorator},
	keeper::{AccountKeeper, ParamsKeeper},
	params::Params,
};
use ante_types::{
	events::{CosmosEvent, ATTRIBUTE_KEY_ACC_SEQ, ATTRIBUTE_KEY_SIGNATURE, EVENT_TYPE_TX},
	public_key::{KeyError, LegacyAminoPubKey},
	signing::{SignatureData, SignatureV2},
	AnteError, BaseAccount, BasicGasMeter, Context, GasMeter, PublicKey, Tx,
};
use ante_x_auth_signing::{SigVerifiableTx, SignModeHandler, SignerData};
use base64::{engine::general_purpose::STANDARD, Engine};

/// Stands in for a missing key while simulating so gas estimates cover the most
/// expensive supported verification.
pub const SIM_SECP256K1_PUBKEY: [u8; 33] = [
	0x03, 0x5a, 0xd6, 0x81, 0x0a, 0x47, 0xf0, 0x73, 0x55, 0x3f, 0xf3, 0x0d, 0x2f, 0xcc, 0x7e,
	0x0d, 0x3b, 0x1c, 0x0b, 0x74, 0xb6, 0x1a, 0x1a, 0xaa, 0x25, 0x82, 0x34, 0x40, 0x37, 0x15,
	0x1e, 0x14, 0x3a,
];

/// Charges gas for verifying one signature.
pub type SignatureVerificationGasConsumer =
	fn(&mut BasicGasMeter, &SignatureV2, &Params) -> Result<(), AnteError>;

/// Account number a signer commits to. Genesis transactions sign over zero.
fn signing_account_number(ctx: &Context, acc: &BaseAccount) -> u64 {
	if ctx.is_genesis() {
		0
	} else {
		acc.account_number
	}
}

fn check_sequence(index: usize, acc: &BaseAccount, sequence: u64) -> Result<(), AnteError> {
	if sequence != acc.sequence {
		return Err(AnteError::WrongSequence { index, expected: acc.sequence, got: sequence });
	}
	Ok(())
}

fn check_account_number(
	ctx: &Context,
	index: usize,
	acc: &BaseAccount,
	account_number: u64,
) -> Result<(), AnteError> {
	let expected = signing_account_number(ctx, acc);
	if account_number != expected {
		return Err(AnteError::WrongAccountNumber { index, expected, got: account_number });
	}
	Ok(())
}

fn signature_data_to_bytes(data: &SignatureData) -> Vec<Vec<u8>> {
	match data {
		SignatureData::Single { signature, .. } => vec![signature.clone()],
		SignatureData::Multi { signatures, .. } =>
			signatures.iter().flat_map(signature_data_to_bytes).collect(),
	}
}

/// Stores the public keys carried in signer infos on accounts that have none yet.
pub struct SetPubKeyDecorator;

impl<S: AccountKeeper> AnteDecorator<S> for SetPubKeyDecorator {
	fn ante_handle(
		&self,
		mut ctx: Context,
		store: &mut S,
		tx: &Tx,
		simulate: bool,
	) -> Result<Context, AnteError> {
		let pub_keys = tx.get_pub_keys();
		let signers = tx.get_signers().map_err(signer_error)?;

		for (i, pk) in pub_keys.iter().enumerate() {
			// key omitted because it is already stored
			let Some(pk) = pk else { continue };
			let Some(signer) = signers.get(i) else { break };

			let mut acc = get_signer_acc(store, signer)?;
			if acc.pub_key.is_some() {
				continue;
			}

			if !pk.is_on_curve() {
				return Err(AnteError::PubKeyNotOnCurve { index: i });
			}
			if !simulate && pk.address() != *signer {
				return Err(AnteError::AddressMismatch { index: i, address: bech32(store, signer)? });
			}

			tracing::trace!(target: "ante::sigverify", signer = ?signer, key = pk.type_url(), "set pubkey");
			acc.pub_key = Some(pk.clone());
			store.set_account(acc);
		}

		let sigs = tx.get_signatures_v2().map_err(signer_error)?;
		let mut events = Vec::new();
		for (sig, signer) in sigs.iter().zip(signers.iter()) {
			let address = bech32(store, signer)?;
			events.push(
				CosmosEvent::new(EVENT_TYPE_TX)
					.with_attribute(ATTRIBUTE_KEY_ACC_SEQ, format!("{}/{}", address, sig.sequence)),
			);
			for sig_bytes in signature_data_to_bytes(&sig.data) {
				events.push(
					CosmosEvent::new(EVENT_TYPE_TX)
						.with_attribute(ATTRIBUTE_KEY_SIGNATURE, STANDARD.encode(sig_bytes)),
				);
			}
		}
		ctx.event_manager_mut().emit_events(events);

		Ok(ctx)
	}
}

/// Rejects transactions whose keys hold more signatures than allowed.
pub struct ValidateSigCountDecorator;

impl<S: ParamsKeeper> AnteDecorator<S> for ValidateSigCountDecorator {
	fn ante_handle(
		&self,
		ctx: Context,
		store: &mut S,
		tx: &Tx,
		_simulate: bool,
	) -> Result<Context, AnteError> {
		let limit = store.get_params().tx_sig_limit;

		let mut sig_count = 0u64;
		for pk in tx.get_pub_keys().iter().flatten() {
			sig_count = sig_count.saturating_add(pk.count_sub_keys());
			if sig_count > limit {
				return Err(AnteError::TooManySignatures { limit, got: sig_count });
			}
		}

		Ok(ctx)
	}
}

/// Default signature cost model.
///
/// Ed25519 is charged and then rejected. Multisig keys are charged for the
/// sub-keys that actually signed.
pub fn default_sig_verification_gas_consumer(
	meter: &mut BasicGasMeter,
	sig: &SignatureV2,
	params: &Params,
) -> Result<(), AnteError> {
	match &sig.pub_key {
		Some(PublicKey::Ed25519(_)) => {
			meter.consume_gas(params.sig_verify_cost_ed25519, "ante verify: ed25519")?;
			Err(AnteError::UnsupportedKeyType("ED25519 public keys are unsupported".into()))
		},
		Some(PublicKey::Secp256k1(_)) => {
			meter.consume_gas(params.sig_verify_cost_secp256k1, "ante verify: secp256k1")?;
			Ok(())
		},
		Some(PublicKey::Secp256r1(_)) => {
			meter.consume_gas(params.sig_verify_cost_secp256r1(), "ante verify: secp256r1")?;
			Ok(())
		},
		Some(PublicKey::LegacyAminoMultisig(pub_key)) => {
			let SignatureData::Multi { bitarray, signatures } = &sig.data else {
				return Err(AnteError::InvalidType(
					"expected MultiSignatureData, got SingleSignatureData".into(),
				));
			};
			consume_multisignature_verification_gas(meter, bitarray, signatures, pub_key, params, sig)
		},
		None => Err(AnteError::UnsupportedKeyType("unrecognized public key type".into())),
	}
}

fn consume_multisignature_verification_gas(
	meter: &mut BasicGasMeter,
	bitarray: &ante_types::multisig::CompactBitArray,
	signatures: &[SignatureData],
	pub_key: &LegacyAminoPubKey,
	params: &Params,
	sig: &SignatureV2,
) -> Result<(), AnteError> {
	let mut sig_index = 0;
	for (i, sub_key) in pub_key.public_keys.iter().enumerate() {
		if !bitarray.get_index(i) {
			continue;
		}
		let data = signatures.get(sig_index).ok_or_else(|| {
			AnteError::InvalidMultisig(format!(
				"{} signatures for {} set bits",
				signatures.len(),
				bitarray.true_bits()
			))
		})?;

		let sub_sig = SignatureV2 {
			pub_key: Some(sub_key.clone()),
			data: data.clone(),
			sequence: sig.sequence,
			account_number: sig.account_number,
		};
		default_sig_verification_gas_consumer(meter, &sub_sig, params)?;
		sig_index += 1;
	}

	Ok(())
}

/// Charges signature verification gas ahead of the verification itself.
pub struct SigGasConsumeDecorator {
	sig_gas_consumer: SignatureVerificationGasConsumer,
}

impl SigGasConsumeDecorator {
	pub fn new(sig_gas_consumer: SignatureVerificationGasConsumer) -> Self {
		Self { sig_gas_consumer }
	}
}

impl Default for SigGasConsumeDecorator {
	fn default() -> Self {
		Self::new(default_sig_verification_gas_consumer)
	}
}

impl<S> AnteDecorator<S> for SigGasConsumeDecorator
where
	S: AccountKeeper + ParamsKeeper,
{
	fn ante_handle(
		&self,
		mut ctx: Context,
		store: &mut S,
		tx: &Tx,
		simulate: bool,
	) -> Result<Context, AnteError> {
		let params = store.get_params();
		let sigs = tx.get_signatures_v2().map_err(signer_error)?;
		let signers = tx.get_signers().map_err(signer_error)?;

		for (i, sig) in sigs.iter().enumerate() {
			let signer = signers
				.get(i)
				.ok_or(AnteError::SignerCountMismatch { expected: signers.len(), got: sigs.len() })?;
			let acc = get_signer_acc(store, signer)?;

			let pub_key = match acc.pub_key.clone() {
				None if simulate => Some(PublicKey::Secp256k1(SIM_SECP256K1_PUBKEY)),
				pub_key => pub_key,
			};

			check_sequence(i, &acc, sig.sequence)?;
			check_account_number(&ctx, i, &acc, sig.account_number)?;

			let sig = SignatureV2 { pub_key, ..sig.clone() };
			(self.sig_gas_consumer)(ctx.gas_meter_mut(), &sig, &params)?;
		}

		tracing::trace!(target: "ante::sigverify", consumed = ctx.gas_meter().consumed_gas(), "signature gas charged");

		Ok(ctx)
	}
}

/// Verifies every signature against the sign bytes of its declared mode.
pub struct SigVerificationDecorator<H> {
	sign_mode_handler: H,
}

impl<H> SigVerificationDecorator<H> {
	pub fn new(sign_mode_handler: H) -> Self {
		Self { sign_mode_handler }
	}
}

impl<H: SignModeHandler> SigVerificationDecorator<H> {
	fn verify_signature(
		&self,
		index: usize,
		pub_key: &PublicKey,
		signer_data: &SignerData,
		data: &SignatureData,
		tx: &Tx,
	) -> Result<bool, AnteError> {
		match (pub_key, data) {
			(PublicKey::LegacyAminoMultisig(multisig), SignatureData::Multi { bitarray, signatures }) => {
				if bitarray.count() != multisig.public_keys.len() {
					return Ok(false);
				}
				let true_bits = bitarray.true_bits();
				if true_bits < multisig.threshold as usize || signatures.len() != true_bits {
					return Ok(false);
				}

				let mut sig_index = 0;
				for (i, sub_key) in multisig.public_keys.iter().enumerate() {
					if !bitarray.get_index(i) {
						continue;
					}
					if !self.verify_signature(index, sub_key, signer_data, &signatures[sig_index], tx)? {
						return Ok(false);
					}
					sig_index += 1;
				}

				Ok(true)
			},
			(PublicKey::LegacyAminoMultisig(_), SignatureData::Single { .. }) =>
				Err(AnteError::InvalidType("expected MultiSignatureData, got SingleSignatureData".into())),
			(_, SignatureData::Multi { .. }) =>
				Err(AnteError::InvalidType("expected SingleSignatureData, got MultiSignatureData".into())),
			(pub_key, SignatureData::Single { mode, signature }) => {
				if !pub_key.is_on_curve() {
					return Err(AnteError::PubKeyNotOnCurve { index });
				}

				let sign_bytes = self
					.sign_mode_handler
					.get_sign_bytes(*mode, signer_data, tx)
					.map_err(|e| AnteError::SignMode(e.to_string()))?;

				pub_key.verify_signature(&sign_bytes, signature).map_err(|e| match e {
					KeyError::UnsupportedKeyType(reason) => AnteError::UnsupportedKeyType(reason),
					other => AnteError::InvalidType(other.to_string()),
				})
			},
		}
	}
}

impl<S, H> AnteDecorator<S> for SigVerificationDecorator<H>
where
	S: AccountKeeper,
	H: SignModeHandler,
{
	fn ante_handle(
		&self,
		ctx: Context,
		store: &mut S,
		tx: &Tx,
		simulate: bool,
	) -> Result<Context, AnteError> {
		let sigs = tx.get_signatures_v2().map_err(signer_error)?;
		let signers = tx.get_signers().map_err(signer_error)?;

		if sigs.len() != signers.len() {
			return Err(AnteError::SignerCountMismatch { expected: signers.len(), got: sigs.len() });
		}

		let verify = !simulate && !ctx.is_recheck_tx() && ctx.is_sigverify_tx();

		for (i, (sig, signer)) in sigs.iter().zip(signers.iter()).enumerate() {
			let acc = get_signer_acc(store, signer)?;

			let pub_key = match (&acc.pub_key, simulate) {
				(Some(pub_key), _) => Some(pub_key),
				(None, true) => None,
				(None, false) => return Err(AnteError::MissingPubKey { index: i }),
			};

			check_sequence(i, &acc, sig.sequence)?;

			let (Some(pub_key), true) = (pub_key, verify) else { continue };

			check_account_number(&ctx, i, &acc, sig.account_number)?;

			let signer_data = SignerData {
				address: bech32(store, signer)?,
				chain_id: ctx.chain_id().to_string(),
				account_number: signing_account_number(&ctx, &acc),
				sequence: acc.sequence,
				pub_key: Some(pub_key.clone()),
			};

			if !self.verify_signature(i, pub_key, &signer_data, &sig.data, tx)? {
				tracing::debug!(target: "ante::sigverify", index = i, signer = %signer_data.address, "signature verification failed");
				return Err(AnteError::InvalidSignature {
					index: i,
					account_number: signer_data.account_number,
					sequence: signer_data.sequence,
					chain_id: signer_data.chain_id,
				});
			}
		}

		Ok(ctx)
	}
}

/// Bumps every signer's sequence by one.
pub struct IncrementSequenceDecorator;

impl<S: AccountKeeper> AnteDecorator<S> for IncrementSequenceDecorator {
	fn ante_handle(
		&self,
		ctx: Context,
		store: &mut S,
		tx: &Tx,
		_simulate: bool,
	) -> Result<Context, AnteError> {
		for signer in tx.get_signers().map_err(signer_error)? {
			let mut acc = get_signer_acc(store, &signer)?;
			acc.sequence = acc.sequence.saturating_add(1);
			store.set_account(acc);
		}

		Ok(ctx)
	}
}
