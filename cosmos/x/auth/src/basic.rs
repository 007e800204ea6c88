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

use crate::{ante::AnteDecorator, keeper::ParamsKeeper};
use ante_types::{AnteError, BasicGasMeter, Context, GasMeter, Tx};

/// Largest gas limit a transaction may request.
pub const MAX_GAS_WANTED: u64 = (1 << 63) - 1;

/// Installs the transaction's gas meter. Simulation and genesis run unmetered.
pub struct SetUpContextDecorator;

impl<S> AnteDecorator<S> for SetUpContextDecorator {
	fn ante_handle(
		&self,
		ctx: Context,
		_store: &mut S,
		tx: &Tx,
		simulate: bool,
	) -> Result<Context, AnteError> {
		let gas_meter = if simulate || ctx.is_genesis() {
			BasicGasMeter::infinite()
		} else {
			BasicGasMeter::new(tx.gas())
		};

		Ok(ctx.with_gas_meter(gas_meter))
	}
}

pub struct ValidateBasicDecorator;

impl<S> AnteDecorator<S> for ValidateBasicDecorator {
	fn ante_handle(
		&self,
		ctx: Context,
		_store: &mut S,
		tx: &Tx,
		_simulate: bool,
	) -> Result<Context, AnteError> {
		// no need to validate basic on recheck tx
		if ctx.is_recheck_tx() {
			return Ok(ctx);
		}

		if tx.signatures.is_empty() {
			return Err(AnteError::NoSignatures);
		}
		if tx.auth_info.signer_infos.len() != tx.signatures.len() {
			return Err(AnteError::SignerCountMismatch {
				expected: tx.auth_info.signer_infos.len(),
				got: tx.signatures.len(),
			});
		}
		if tx.gas() > MAX_GAS_WANTED {
			return Err(AnteError::InvalidGasLimit(format!(
				"invalid gas supplied; {} > {}",
				tx.gas(),
				MAX_GAS_WANTED
			)));
		}

		Ok(ctx)
	}
}

pub struct TxTimeoutHeightDecorator;

impl<S> AnteDecorator<S> for TxTimeoutHeightDecorator {
	fn ante_handle(
		&self,
		ctx: Context,
		_store: &mut S,
		tx: &Tx,
		_simulate: bool,
	) -> Result<Context, AnteError> {
		let timeout = tx.body.timeout_height;
		if timeout > 0 && ctx.block_height() > timeout {
			return Err(AnteError::TxTimeoutHeight { height: ctx.block_height(), timeout });
		}

		Ok(ctx)
	}
}

pub struct ValidateMemoDecorator;

impl<S: ParamsKeeper> AnteDecorator<S> for ValidateMemoDecorator {
	fn ante_handle(
		&self,
		ctx: Context,
		store: &mut S,
		tx: &Tx,
		_simulate: bool,
	) -> Result<Context, AnteError> {
		let limit = store.get_params().max_memo_characters;
		let memo_length = tx.memo().chars().count() as u64;
		if memo_length > limit {
			return Err(AnteError::MemoTooLarge { limit, got: memo_length });
		}

		Ok(ctx)
	}
}

/// Charges for the raw transaction size. Without raw bytes in the context the
/// re-encoded transaction is measured.
pub struct ConsumeTxSizeGasDecorator;

impl<S: ParamsKeeper> AnteDecorator<S> for ConsumeTxSizeGasDecorator {
	fn ante_handle(
		&self,
		mut ctx: Context,
		store: &mut S,
		tx: &Tx,
		_simulate: bool,
	) -> Result<Context, AnteError> {
		let params = store.get_params();
		let size = match ctx.tx_bytes() {
			[] => tx.to_bytes().len(),
			bytes => bytes.len(),
		};
		let size = size as u64;
		ctx.gas_meter_mut()
			.consume_gas(params.tx_size_cost_per_byte.saturating_mul(size), "txSize")?;

		Ok(ctx)
	}
}
