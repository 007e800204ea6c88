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

use bech32::{FromBase32, ToBase32, Variant};
use sp_core::H160;

pub const ADDRESS_LENGTH: usize = 20;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum AddressError {
	#[error("decoding bech32 failed: {0}")]
	Bech32(String),
	#[error("invalid address length {0}, expected {ADDRESS_LENGTH}")]
	InvalidLength(usize),
}

impl From<bech32::Error> for AddressError {
	fn from(e: bech32::Error) -> Self {
		AddressError::Bech32(e.to_string())
	}
}

pub fn acc_address_from_bech32(address: &str) -> Result<(String, Vec<u8>), AddressError> {
	let (hrp, data, _) = bech32::decode(address)?;
	let address_raw = Vec::<u8>::from_base32(&data)?;

	Ok((hrp, address_raw))
}

/// Decode a bech32 account address of any human readable part into its 20 raw bytes.
pub fn address_from_bech32(address: &str) -> Result<H160, AddressError> {
	let (_hrp, address_raw) = acc_address_from_bech32(address)?;
	if address_raw.len() != ADDRESS_LENGTH {
		return Err(AddressError::InvalidLength(address_raw.len()));
	}

	Ok(H160::from_slice(&address_raw))
}

pub fn address_to_bech32(hrp: &str, address: &H160) -> Result<String, AddressError> {
	Ok(bech32::encode(hrp, address.as_bytes().to_base32(), Variant::Bech32)?)
}
