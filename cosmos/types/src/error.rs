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

use crate::store::GasError;
use sp_runtime::transaction_validity::{
	InvalidTransaction, TransactionValidityError, UnknownTransaction,
};

pub const CODESPACE: &str = "sdk";

/// ABCI codes of the `sdk` codespace.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CosmosErrorCode {
	// ErrTxDecode is returned if we cannot parse a transaction.
	ErrTxDecode = 2,
	// ErrInvalidSequence is used when the sequence number (nonce) is incorrect.
	ErrInvalidSequence = 3,
	// ErrUnauthorized is used whenever a request without sufficient
	// authorization is handled.
	ErrUnauthorized = 4,
	// ErrInsufficientFunds is used when the account cannot pay requested amount.
	ErrInsufficientFunds = 5,
	// ErrInvalidAddress to doc
	ErrInvalidAddress = 7,
	// ErrInvalidPubKey defines an error when an invalid pubkey is encountered.
	ErrInvalidPubKey = 8,
	// ErrUnknownAddress to doc
	ErrUnknownAddress = 9,
	// ErrOutOfGas to doc
	ErrOutOfGas = 11,
	// ErrMemoTooLarge to doc
	ErrMemoTooLarge = 12,
	// ErrTooManySignatures to doc
	ErrTooManySignatures = 14,
	// ErrNoSignatures to doc
	ErrNoSignatures = 15,
	// ErrInvalidRequest defines an ABCI typed error where the request contains
	// invalid data.
	ErrInvalidRequest = 18,
	// ErrInvalidType defines an error an invalid type.
	ErrInvalidType = 29,
	// ErrTxTimeoutHeight defines an error for when a tx is rejected out due to an
	// explicitly set timeout height.
	ErrTxTimeoutHeight = 30,
	// ErrWrongSequence defines an error where the account sequence defined in
	// the signer info doesn't match the account's actual sequence number.
	ErrWrongSequence = 32,
	// ErrNotSupported is returned when we call a branch of a code which is currently not
	// supported.
	ErrNotSupported = 37,
	// ErrInvalidGasLimit defines an error when an invalid GasWanted value is
	// supplied.
	ErrInvalidGasLimit = 41,
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum AnteError {
	#[error("tx parse error: {0}")]
	TxDecode(String),
	#[error("no signatures supplied")]
	NoSignatures,
	#[error("invalid number of signer; expected: {expected}, got {got}")]
	SignerCountMismatch { expected: usize, got: usize },
	#[error("signatures: {got}, limit: {limit}: too many signatures")]
	TooManySignatures { limit: u64, got: u64 },
	#[error("{0}: invalid address")]
	InvalidAddress(String),
	#[error("account {address} does not exist: unknown address")]
	UnknownAddress { address: String },
	#[error("pubKey does not match signer address {address} with signer index: {index}: invalid pubkey")]
	AddressMismatch { index: usize, address: String },
	#[error("pubkey on account is not set: invalid pubkey")]
	MissingPubKey { index: usize },
	#[error("pubkey is not on curve at signer index {index}: invalid pubkey")]
	PubKeyNotOnCurve { index: usize },
	#[error("{0}: unsupported key type")]
	UnsupportedKeyType(String),
	#[error("account sequence mismatch, expected {expected}, got {got}: incorrect account sequence")]
	WrongSequence { index: usize, expected: u64, got: u64 },
	#[error("account number mismatch, expected {expected}, got {got}: unauthorized")]
	WrongAccountNumber { index: usize, expected: u64, got: u64 },
	#[error("signature verification failed; please verify account number ({account_number}), sequence ({sequence}) and chain-id ({chain_id}): unauthorized")]
	InvalidSignature { index: usize, account_number: u64, sequence: u64, chain_id: String },
	#[error("{0}: out of gas")]
	OutOfGas(#[from] GasError),
	#[error("maximum number of characters is {limit} but received {got} characters: memo too large")]
	MemoTooLarge { limit: u64, got: u64 },
	#[error("block height: {height}, timeout height: {timeout}: tx timeout height")]
	TxTimeoutHeight { height: u64, timeout: u64 },
	#[error("{0}: invalid gas limit")]
	InvalidGasLimit(String),
	#[error("{0}: insufficient funds")]
	InsufficientFunds(String),
	#[error("{0}: feature not supported")]
	NotSupported(String),
	#[error("{0}: invalid type")]
	InvalidType(String),
	#[error("{0}: invalid multisignature")]
	InvalidMultisig(String),
	#[error("{0}: invalid sign mode")]
	SignMode(String),
}

impl AnteError {
	pub fn code(&self) -> CosmosErrorCode {
		use CosmosErrorCode::*;

		match self {
			AnteError::TxDecode(_) => ErrTxDecode,
			AnteError::NoSignatures => ErrNoSignatures,
			AnteError::SignerCountMismatch { .. } => ErrUnauthorized,
			AnteError::TooManySignatures { .. } => ErrTooManySignatures,
			AnteError::InvalidAddress(_) => ErrInvalidAddress,
			AnteError::UnknownAddress { .. } => ErrUnknownAddress,
			AnteError::AddressMismatch { .. } |
			AnteError::MissingPubKey { .. } |
			AnteError::PubKeyNotOnCurve { .. } => ErrInvalidPubKey,
			AnteError::UnsupportedKeyType(_) => ErrInvalidPubKey,
			AnteError::WrongSequence { .. } => ErrWrongSequence,
			AnteError::WrongAccountNumber { .. } | AnteError::InvalidSignature { .. } =>
				ErrUnauthorized,
			AnteError::OutOfGas(_) => ErrOutOfGas,
			AnteError::MemoTooLarge { .. } => ErrMemoTooLarge,
			AnteError::TxTimeoutHeight { .. } => ErrTxTimeoutHeight,
			AnteError::InvalidGasLimit(_) => ErrInvalidGasLimit,
			AnteError::InsufficientFunds(_) => ErrInsufficientFunds,
			AnteError::NotSupported(_) => ErrNotSupported,
			AnteError::InvalidType(_) => ErrInvalidType,
			AnteError::InvalidMultisig(_) | AnteError::SignMode(_) => ErrInvalidRequest,
		}
	}

	pub fn codespace(&self) -> &'static str {
		CODESPACE
	}
}

impl From<AnteError> for TransactionValidityError {
	fn from(error: AnteError) -> Self {
		let invalid = match error {
			AnteError::UnknownAddress { .. } =>
				return TransactionValidityError::Unknown(UnknownTransaction::CannotLookup),
			AnteError::WrongSequence { expected, got, .. } if got < expected =>
				InvalidTransaction::Stale,
			AnteError::WrongSequence { .. } => InvalidTransaction::Future,
			AnteError::OutOfGas(_) => InvalidTransaction::ExhaustsResources,
			AnteError::InsufficientFunds(_) => InvalidTransaction::Payment,
			AnteError::InvalidSignature { .. } => InvalidTransaction::BadProof,
			AnteError::SignerCountMismatch { .. } |
			AnteError::AddressMismatch { .. } |
			AnteError::MissingPubKey { .. } |
			AnteError::PubKeyNotOnCurve { .. } |
			AnteError::UnsupportedKeyType(_) |
			AnteError::WrongAccountNumber { .. } => InvalidTransaction::BadSigner,
			ref other => InvalidTransaction::Custom(other.code() as u8),
		};

		TransactionValidityError::Invalid(invalid)
	}
}
