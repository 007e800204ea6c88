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

//! Core types shared by the Horizon Cosmos ante handler crates.

pub mod account;
pub mod address;
pub mod coin;
pub mod context;
pub mod error;
pub mod events;
pub mod multisig;
pub mod public_key;
pub mod signing;
pub mod store;
pub mod tx;

pub use account::BaseAccount;
pub use context::Context;
pub use error::AnteError;
pub use public_key::PublicKey;
pub use store::{BasicGasMeter, Gas, GasMeter};
pub use tx::Tx;
