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

use parity_scale_codec::{Decode, Encode};

/// Space efficient bit array used by multisig mode infos and signatures.
///
/// `extra_bits_stored` is the number of meaningful bits in the last byte; zero means all
/// eight bits are in use.
#[derive(Clone, Debug, Default, PartialEq, Eq, Encode, Decode)]
pub struct CompactBitArray {
	pub extra_bits_stored: u32,
	pub elems: Vec<u8>,
}

impl CompactBitArray {
	pub fn new(bits: usize) -> Self {
		Self { extra_bits_stored: (bits % 8) as u32, elems: vec![0u8; (bits + 7) / 8] }
	}

	/// Number of bits the array holds.
	pub fn count(&self) -> usize {
		if self.elems.is_empty() {
			0
		} else if self.extra_bits_stored == 0 {
			self.elems.len() * 8
		} else {
			(self.elems.len() - 1) * 8 + self.extra_bits_stored as usize
		}
	}

	pub fn get_index(&self, i: usize) -> bool {
		if i >= self.count() {
			return false;
		}
		self.elems.get(i >> 3).map_or(false, |elem| elem & (1 << (7 - (i % 8))) > 0)
	}

	/// Sets bit `i`. Returns `false` when `i` is out of range.
	pub fn set_index(&mut self, i: usize, v: bool) -> bool {
		if i >= self.count() {
			return false;
		}
		let Some(elem) = self.elems.get_mut(i >> 3) else {
			return false;
		};
		if v {
			*elem |= 1 << (7 - (i % 8));
		} else {
			*elem &= !(1 << (7 - (i % 8)));
		}
		true
	}

	/// Number of set bits strictly before `index`.
	pub fn num_true_bits_before(&self, index: usize) -> usize {
		(0..index.min(self.count())).filter(|i| self.get_index(*i)).count()
	}

	pub fn true_bits(&self) -> usize {
		self.num_true_bits_before(self.count())
	}
}

impl From<&CompactBitArray> for cosmos_sdk_proto::cosmos::crypto::multisig::v1beta1::CompactBitArray {
	fn from(bitarray: &CompactBitArray) -> Self {
		Self { extra_bits_stored: bitarray.extra_bits_stored, elems: bitarray.elems.clone() }
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use proptest::prelude::*;

	#[test]
	fn count_follows_extra_bits() {
		assert_eq!(CompactBitArray::new(0).count(), 0);
		assert_eq!(CompactBitArray::new(5).count(), 5);
		assert_eq!(CompactBitArray::new(8).count(), 8);
		assert_eq!(CompactBitArray::new(13).count(), 13);
	}

	#[test]
	fn set_and_get_index() {
		let mut bitarray = CompactBitArray::new(10);
		assert!(bitarray.set_index(0, true));
		assert!(bitarray.set_index(9, true));
		assert!(!bitarray.set_index(10, true));

		assert!(bitarray.get_index(0));
		assert!(!bitarray.get_index(1));
		assert!(bitarray.get_index(9));
		assert!(!bitarray.get_index(10));
		assert_eq!(bitarray.elems, vec![0b1000_0000, 0b0100_0000]);

		assert!(bitarray.set_index(0, false));
		assert_eq!(bitarray.true_bits(), 1);
	}

	proptest! {
		#[test]
		fn true_bits_match_the_bits_set(bits in proptest::collection::vec(any::<bool>(), 1..64)) {
			let mut bitarray = CompactBitArray::new(bits.len());
			for (i, bit) in bits.iter().enumerate() {
				bitarray.set_index(i, *bit);
			}

			prop_assert_eq!(bitarray.count(), bits.len());
			prop_assert_eq!(bitarray.true_bits(), bits.iter().filter(|b| **b).count());
			for i in 0..bits.len() {
				prop_assert_eq!(
					bitarray.num_true_bits_before(i),
					bits[..i].iter().filter(|b| **b).count()
				);
			}
		}
	}
}
