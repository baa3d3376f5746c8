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

#![forbid(unsafe_code)]
#![forbid(missing_docs)] // Keep this to enforce coverage

//! # Parley
//!
//! This crate provides a keyed ask/answer exchange built on top of Tokio: a
//! producer eventually answers a named key, and every consumer waiting on
//! that key at that instant receives the answer exactly once.
//!
//! ## Key Concepts
//!
//! - **Exchange (`ExchangeBroker`)**: The shared broker holding the
//!   key-to-listeners registry. Cheaply cloneable; construct it once and
//!   hand clones to every task that asks or answers.
//! - **Asking**: `ask` waits indefinitely; `ask_with_timeout` races a
//!   deadline; `ask_with_timeout_and_callback` runs a callback once the
//!   listener is registered, closing the register-then-trigger race.
//! - **Answering**: `answer` hands the outcome to every currently registered
//!   listener, resets the key, and reports how many listeners received it.
//! - **Delivery contract**: at-most-once per listener, best-effort — a
//!   consumer that already timed out is skipped silently.
//! - **Traits**: [`Exchange`](prelude::Exchange) defines the protocol;
//!   [`ExchangeKey`](prelude::ExchangeKey) and
//!   [`ExchangeValue`](prelude::ExchangeValue) bound what keys and payloads
//!   must support.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use parley::prelude::*;
//!
//! let broker: ExchangeBroker<&str, u64> = ExchangeBroker::new();
//!
//! let producer = broker.clone();
//! tokio::spawn(async move {
//!     let delivered = producer.answer(&"block:1042", Ok(42));
//!     println!("{delivered} listener(s) received the answer");
//! });
//!
//! let value = broker.ask("block:1042").await?;
//! ```

/// Prelude module for convenient imports.
///
/// Re-exports the exchange broker, the protocol traits, the reply and
/// outcome aliases, and the configuration handle from `parley-core`.
pub mod prelude {
    pub use parley_core::prelude::*;
}
