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
//! Parley Core Library
//!
//! This library provides the core functionality for the Parley ask/answer
//! exchange. It includes the keyed broker, the listener registry, message
//! envelopes, trait definitions, and prelude exports.

/// Common utilities and structures used throughout the Parley exchange.
pub(crate) mod common;

pub(crate) mod message;
/// Trait definitions used in the Parley exchange.
pub(crate) mod traits;

/// Prelude module for convenient imports.
///
/// This module re-exports commonly used items from the `common`, `message`,
/// and `traits` modules, as well as the `async_trait` crate.
pub mod prelude {
    pub use async_trait;

    pub use crate::common::{AnswerOutcome, ExchangeBroker, ParleyConfig, Reply, CONFIG};
    pub use crate::message::{Answer, AskError};
    pub use crate::traits::{Exchange, ExchangeKey, ExchangeValue};
}
