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

use p256::ecdsa::{signature::Verifier, Signature, VerifyingKey};

/// Verify a secp256r1 (NIST P-256) ECDSA signature over `msg`.
///
/// The message is hashed with SHA-256 by the verifier. High-S signatures are rejected
/// so that a signature has a single valid encoding.
pub fn secp256r1_ecdsa_verify(sig: &[u8], msg: &[u8], pub_key: &[u8]) -> bool {
	let sig = match Signature::from_slice(sig) {
		Ok(v) => v,
		Err(_) => return false,
	};
	if sig.normalize_s().is_some() {
		return false;
	}
	let pub_key = match VerifyingKey::from_sec1_bytes(pub_key) {
		Ok(v) => v,
		Err(_) => return false,
	};

	pub_key.verify(msg, &sig).is_ok()
}

/// Returns `true` if `pub_key` is a SEC1 encoded point on the P-256 curve.
pub fn secp256r1_pubkey_is_valid(pub_key: &[u8]) -> bool {
	VerifyingKey::from_sec1_bytes(pub_key).is_ok()
}
