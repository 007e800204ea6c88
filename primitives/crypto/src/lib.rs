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

//! Cryptographic primitives used to authenticate Cosmos transactions.

#![warn(missing_docs)]

mod secp256k1;
mod secp256r1;

pub use crate::{
	secp256k1::{secp256k1_ecdsa_verify, secp256k1_pubkey_is_valid},
	secp256r1::{secp256r1_ecdsa_verify, secp256r1_pubkey_is_valid},
};
pub use sp_core::hashing::sha2_256;

use ripemd::{Digest, Ripemd160};

/// Hash with ripemd160.
pub fn ripemd160(msg: &[u8]) -> [u8; 20] {
	let mut hasher = Ripemd160::new();
	hasher.update(msg);
	hasher.finalize().into()
}
