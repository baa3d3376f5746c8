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

//! Defines common internal type aliases and supporting structures used within `parley-core`.
//!
//! This module centralizes type definitions for the listener registry and the
//! one-shot delivery channels to improve code readability and maintainability.
//! It also defines the public type aliases that make up the exchange's
//! producer- and consumer-facing vocabulary.

use std::sync::Arc;

use dashmap::DashMap;
use tokio::sync::oneshot;

use crate::message::{Answer, AskError};

/// Crate-internal: the sender half of a listener's one-shot delivery slot.
pub(crate) type AnswerSender<V> = oneshot::Sender<Answer<V>>;

/// Crate-internal: the receiver half of a listener's one-shot delivery slot,
/// held by exactly one waiting consumer.
pub(crate) type AnswerReceiver<V> = oneshot::Receiver<Answer<V>>;

/// Crate-internal: the ordered sequence of listeners currently registered
/// under a single key.
pub(crate) type ListenerSeq<V> = Vec<AnswerSender<V>>;

/// Crate-internal: the shared key -> listener-sequence registry
/// (`Key` -> `ListenerSeq`). A key whose sequence is empty has been answered
/// before; a key absent from the map has never been subscribed to.
pub(crate) type Registry<K, V> = Arc<DashMap<K, ListenerSeq<V>>>;

// --- Public Type Aliases ---

/// What every wait operation on the exchange resolves to: the producer's
/// value, or an [`AskError`] describing why no value arrived.
pub type Reply<V> = Result<V, AskError>;

/// What a producer hands to [`answer`](crate::traits::Exchange::answer): a
/// value for the waiting listeners, or the error they should observe instead.
pub type AnswerOutcome<V> = Result<V, anyhow::Error>;
