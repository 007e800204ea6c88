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

use crate::public_key::PublicKey;
use parity_scale_codec::{Decode, Encode};
use sp_core::H160;

#[derive(Clone, Debug, Default, PartialEq, Eq, Encode, Decode)]
pub struct BaseAccount {
	pub address: H160,
	pub pub_key: Option<PublicKey>,
	pub account_number: u64,
	pub sequence: u64,
}

impl BaseAccount {
	pub fn new(address: H160, account_number: u64) -> Self {
		Self { address, pub_key: None, account_number, sequence: 0 }
	}
}
