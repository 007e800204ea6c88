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
	basic::{
		ConsumeTxSizeGasDecorator, SetUpContextDecorator, TxTimeoutHeightDecorator,
		ValidateBasicDecorator, ValidateMemoDecorator,
	},
	fee::DeductFeeDecorator,
	keeper::AccountKeeper,
	sigverify::{
		default_sig_verification_gas_consumer, IncrementSequenceDecorator, SetPubKeyDecorator,
		SigGasConsumeDecorator, SigVerificationDecorator, SignatureVerificationGasConsumer,
		ValidateSigCountDecorator,
	},
};
use ante_types::{
	address::address_to_bech32, store::TransactionalStore, AnteError, BaseAccount, Context, Gas,
	GasMeter, Tx,
};
use ante_x_auth_signing::{SigVerifiableTx, SigVerifiableTxError};
use sp_core::H160;
use sp_runtime::transaction_validity::{TransactionValidity, ValidTransaction};

/// One step of the ante chain. `S` is the state the step reads and writes.
pub trait AnteDecorator<S> {
	fn ante_handle(
		&self,
		ctx: Context,
		store: &mut S,
		tx: &Tx,
		simulate: bool,
	) -> Result<Context, AnteError>;
}

#[impl_trait_for_tuples::impl_for_tuples(1, 12)]
#[tuple_types_no_default_trait_bound]
impl<S> AnteDecorator<S> for Tuple {
	for_tuples!( where #( Tuple: AnteDecorator<S> )* );

	fn ante_handle(
		&self,
		ctx: Context,
		store: &mut S,
		tx: &Tx,
		simulate: bool,
	) -> Result<Context, AnteError> {
		for_tuples!( #( let ctx = Tuple.ante_handle(ctx, store, tx, simulate)?; )* );
		Ok(ctx)
	}
}

/// Runs a decorator chain inside a store transaction.
pub struct AnteHandler<D> {
	decorators: D,
}

impl<D> AnteHandler<D> {
	pub fn new(decorators: D) -> Self {
		Self { decorators }
	}

	/// Writes are committed on success and discarded on error. Simulation never commits.
	pub fn run<S>(
		&self,
		ctx: Context,
		store: &mut S,
		tx: &Tx,
		simulate: bool,
	) -> Result<Context, AnteError>
	where
		D: AnteDecorator<S>,
		S: TransactionalStore,
	{
		store.start_transaction();
		let result = self.decorators.ante_handle(ctx, store, tx, simulate);

		match &result {
			Ok(_) if !simulate => store.commit_transaction(),
			Ok(_) => store.rollback_transaction(),
			Err(e) => {
				tracing::debug!(target: "ante", error = %e, code = e.code() as u32, "ante handler rejected tx");
				store.rollback_transaction();
			},
		}

		result
	}

	/// Gas the chain consumes for `tx`, leaving state untouched.
	pub fn simulate<S>(&self, ctx: Context, store: &mut S, tx: &Tx) -> Result<Gas, AnteError>
	where
		D: AnteDecorator<S>,
		S: TransactionalStore,
	{
		self.run(ctx, store, tx, true).map(|ctx| ctx.gas_meter().consumed_gas())
	}

	/// Mempool admission. Each signer provides its `(address, sequence)` tag.
	pub fn check_tx<S>(&self, ctx: Context, store: &mut S, tx_bytes: &[u8]) -> TransactionValidity
	where
		D: AnteDecorator<S>,
		S: TransactionalStore,
	{
		let tx = Tx::from_bytes(tx_bytes).map_err(|e| AnteError::TxDecode(e.to_string()))?;
		let signers = tx.get_signers().map_err(signer_error)?;

		let ctx = ctx.with_is_check_tx(true).with_tx_bytes(tx_bytes.to_vec());
		self.run(ctx, store, &tx, false)?;

		signers
			.iter()
			.zip(tx.auth_info.signer_infos.iter())
			.fold(ValidTransaction::with_tag_prefix("Cosmos"), |builder, (signer, info)| {
				builder.and_provides((signer, info.sequence))
			})
			.longevity(u64::MAX)
			.propagate(true)
			.build()
	}
}

pub struct HandlerOptions<H> {
	pub sign_mode_handler: H,
	pub sig_gas_consumer: SignatureVerificationGasConsumer,
}

impl<H> HandlerOptions<H> {
	pub fn new(sign_mode_handler: H) -> Self {
		Self { sign_mode_handler, sig_gas_consumer: default_sig_verification_gas_consumer }
	}
}

pub type DefaultAnteDecorators<H> = (
	SetUpContextDecorator,
	ValidateBasicDecorator,
	TxTimeoutHeightDecorator,
	ValidateMemoDecorator,
	ConsumeTxSizeGasDecorator,
	DeductFeeDecorator,
	SetPubKeyDecorator,
	ValidateSigCountDecorator,
	SigGasConsumeDecorator,
	SigVerificationDecorator<H>,
	IncrementSequenceDecorator,
);

/// The standard chain: context set up, basic checks, fees, then signatures. The
/// sequence increment comes last.
pub fn new_ante_handler<H>(options: HandlerOptions<H>) -> AnteHandler<DefaultAnteDecorators<H>> {
	AnteHandler::new((
		SetUpContextDecorator,
		ValidateBasicDecorator,
		TxTimeoutHeightDecorator,
		ValidateMemoDecorator,
		ConsumeTxSizeGasDecorator,
		DeductFeeDecorator,
		SetPubKeyDecorator,
		ValidateSigCountDecorator,
		SigGasConsumeDecorator::new(options.sig_gas_consumer),
		SigVerificationDecorator::new(options.sign_mode_handler),
		IncrementSequenceDecorator,
	))
}

pub(crate) fn signer_error(e: SigVerifiableTxError) -> AnteError {
	match e {
		SigVerifiableTxError::InvalidSigner(e) => AnteError::InvalidAddress(e.to_string()),
		SigVerifiableTxError::SignatureCountMismatch { signatures, signer_infos } =>
			AnteError::SignerCountMismatch { expected: signer_infos, got: signatures },
		SigVerifiableTxError::UnsupportedMsg(type_url) => AnteError::InvalidType(type_url),
		other => AnteError::TxDecode(other.to_string()),
	}
}

pub(crate) fn bech32<S: AccountKeeper>(store: &S, address: &H160) -> Result<String, AnteError> {
	address_to_bech32(store.bech32_prefix(), address)
		.map_err(|e| AnteError::InvalidAddress(e.to_string()))
}

pub(crate) fn get_signer_acc<S: AccountKeeper>(
	store: &S,
	address: &H160,
) -> Result<BaseAccount, AnteError> {
	store.get_account(address).ok_or_else(|| AnteError::UnknownAddress {
		address: bech32(store, address).unwrap_or_else(|_| format!("{address:?}")),
	})
}
