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
	keeper::{AccountKeeper, BankKeeper, FEE_COLLECTOR_NAME},
};
use ante_types::{
	coin::{amount_to_string, is_zero},
	events::{CosmosEvent, ATTRIBUTE_KEY_FEE, ATTRIBUTE_KEY_FEE_PAYER, EVENT_TYPE_TX},
	AnteError, Context, Tx,
};
use ante_x_auth_signing::SigVerifiableTx;

/// Moves the fee from the fee payer to the fee collector.
pub struct DeductFeeDecorator;

impl<S> AnteDecorator<S> for DeductFeeDecorator
where
	S: AccountKeeper + BankKeeper,
{
	fn ante_handle(
		&self,
		mut ctx: Context,
		store: &mut S,
		tx: &Tx,
		simulate: bool,
	) -> Result<Context, AnteError> {
		let fee = tx.fee();
		if !simulate && !ctx.is_genesis() && fee.gas_limit == 0 {
			return Err(AnteError::InvalidGasLimit("must provide positive gas".into()));
		}

		// TODO: Support fee grants once a feegrant keeper exists.
		if fee.granter.is_some() {
			return Err(AnteError::NotSupported("fee grants are not enabled".into()));
		}

		let fee_payer = tx.fee_payer().map_err(signer_error)?;
		get_signer_acc(store, &fee_payer)?;
		let fee_payer_address = bech32(store, &fee_payer)?;

		if !is_zero(&fee.amount) {
			store
				.send_coins_from_account_to_module(&fee_payer, FEE_COLLECTOR_NAME, &fee.amount)
				.map_err(|e| AnteError::InsufficientFunds(e.to_string()))?;
		}

		let fee_amount = amount_to_string(&fee.amount);
		tracing::debug!(target: "ante::fee", payer = %fee_payer_address, fee = %fee_amount, "deducted fee");

		ctx.event_manager_mut().emit_event(
			CosmosEvent::new(EVENT_TYPE_TX)
				.with_attribute(ATTRIBUTE_KEY_FEE, fee_amount)
				.with_attribute(ATTRIBUTE_KEY_FEE_PAYER, fee_payer_address),
		);

		Ok(ctx)
	}
}
