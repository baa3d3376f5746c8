//! Defines the core traits that establish the fundamental contracts of the Parley exchange.
//!
//! This module aggregates the essential traits that define the capabilities and interactions
//! within the Parley ask/answer system. These traits ensure composability and provide a clear
//! interface for keys, values, and the broker's wait/answer protocol.
//!
//! # Key Traits
//!
//! *   [`ExchangeKey`]: A marker trait required for all types used as keys within the system.
//!     Ensures keys are hashable, comparable, `Send`, `Sync`, `Clone`, and `Debug`.
//! *   [`ExchangeValue`]: A marker trait required for all types carried as answer payloads.
//!     Ensures values can be cloned per listener and moved across tasks.
//! *   [`Exchange`]: Defines the ask/answer protocol itself, implemented by
//!     [`ExchangeBroker`](crate::common::ExchangeBroker).

/*
 * Copyright (c) 2024. Govcraft
 *
 * Licensed under either of
 *   * Apache License, Version 2.0 (the "License");
 *     you may not use this file except in compliance with the License.
 *     You may obtain a copy of the License at http://www.apache.org/licenses/LICENSE-2.0
 *   * MIT license: http://opensource.org/licenses/MIT
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under the License is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 * See the applicable License for the specific language governing permissions and
 * limitations under that License.
 */

// --- Public Re-exports ---
pub use exchange::Exchange;
pub use exchange_key::ExchangeKey;
pub use exchange_value::ExchangeValue;

// --- Submodules ---

/// Defines the [`Exchange`] trait for the ask/answer protocol.
mod exchange;
/// Defines the [`ExchangeKey`] marker trait.
mod exchange_key;
/// Defines the [`ExchangeValue`] marker trait.
mod exchange_value;
