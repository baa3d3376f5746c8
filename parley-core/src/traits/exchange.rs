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

use std::fmt::Debug;
use std::time::Duration;

use async_trait::async_trait;

use crate::common::{AnswerOutcome, Reply};
use crate::traits::{ExchangeKey, ExchangeValue};

/// The ask/answer protocol of a keyed future exchange.
///
/// A consumer registers interest in a key and waits; a producer that does not
/// know the consumer answers the key, and every listener registered at that
/// instant receives the answer exactly once. The documented idiom is
/// *register before triggering the producer*: an answer only reaches
/// listeners whose registration completed before the answer ran.
#[async_trait]
pub trait Exchange<K, V>: Clone + Debug
where
    K: ExchangeKey,
    V: ExchangeValue,
{
    /// Waits for an answer for the provided key, indefinitely.
    ///
    /// The only ways to unblock are a matching [`answer`](Exchange::answer)
    /// call or every clone of the exchange being dropped.
    async fn ask(&self, key: K) -> Reply<V>;

    /// Waits for an answer for the provided key until the timeout elapses,
    /// which returns the `Timeout` variant of
    /// [`AskError`](crate::message::AskError).
    ///
    /// A listener that times out stays registered under its key; a late
    /// answer finds no one receiving and skips it silently.
    async fn ask_with_timeout(&self, key: K, timeout: Duration) -> Reply<V>;

    /// [`ask_with_timeout`](Exchange::ask_with_timeout) with the deadline
    /// taken from the loaded configuration's `timeouts.default_ask_timeout_ms`.
    async fn ask_with_default_timeout(&self, key: K) -> Reply<V>;

    /// Waits for an answer for the provided key until the timeout elapses;
    /// the callback is called right after the subscription is done, and the
    /// timeout window starts only once the callback has returned.
    ///
    /// This is the race-free way to ask for something the caller itself must
    /// trigger: by the time the callback runs, the listener is guaranteed to
    /// be registered. The callback MUST BE NON-BLOCKING and must not ask on
    /// the same exchange from within.
    async fn ask_with_timeout_and_callback<F>(
        &self,
        key: K,
        timeout: Duration,
        post_subscription_callback: F,
    ) -> Reply<V>
    where
        F: FnOnce() + Send;

    /// Sends an answer to every listener currently registered under the key,
    /// then resets the key's listener sequence to empty.
    ///
    /// Delivery is best-effort and never blocks: a listener whose consumer
    /// has stopped receiving is skipped. Returns how many listeners actually
    /// received the answer — `0` when the key has never been subscribed to.
    fn answer(&self, key: &K, outcome: AnswerOutcome<V>) -> usize;
}
