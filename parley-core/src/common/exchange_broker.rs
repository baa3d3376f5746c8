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

use std::mem;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use dashmap::DashMap;
use static_assertions::assert_impl_all;
use tokio::sync::oneshot;
use tokio::time;
use tracing::*;

use crate::common::{
    AnswerOutcome, AnswerReceiver, ParleyConfig, Registry, Reply, CONFIG,
};
use crate::message::Answer;
use crate::traits::{Exchange, ExchangeKey, ExchangeValue};

/// A broker that manages keyed listeners and broadcasts answers to them.
///
/// The `ExchangeBroker` struct is responsible for maintaining the sequence of
/// listeners waiting on each key and for handing each of them an answer
/// exactly once when a producer answers that key.
///
/// The broker is cheaply cloneable — every clone shares the same registry —
/// and is meant to be constructed once and passed to every task that asks or
/// answers. It holds no hidden process-wide state.
#[derive(Debug, Clone)]
pub struct ExchangeBroker<K, V>
where
    K: ExchangeKey,
    V: ExchangeValue,
{
    /// A thread-safe map of listener sequences, keyed by exchange key.
    ///
    /// Each entry holds the one-shot sender halves of every consumer
    /// currently waiting on that key. An entry with an empty sequence marks
    /// a key that has been answered before; a missing entry marks a key that
    /// has never been subscribed to.
    listeners: Registry<K, V>,
    /// Deadline used by `ask_with_default_timeout`.
    default_ask_timeout: Duration,
    /// Listener count per key above which subscription logs a warning.
    listener_high_water_mark: usize,
    /// Whether a failed hand-off during broadcast is logged.
    warn_on_missed_delivery: bool,
}

impl<K, V> Default for ExchangeBroker<K, V>
where
    K: ExchangeKey,
    V: ExchangeValue,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> ExchangeBroker<K, V>
where
    K: ExchangeKey,
    V: ExchangeValue,
{
    /// Creates an empty broker tuned by the loaded configuration.
    pub fn new() -> Self {
        Self::with_config(&CONFIG)
    }

    /// Creates an empty broker tuned by an explicit configuration handle.
    pub fn with_config(config: &ParleyConfig) -> Self {
        Self {
            listeners: Arc::new(DashMap::new()),
            default_ask_timeout: config.default_ask_timeout(),
            listener_high_water_mark: config.limits.listener_high_water_mark,
            warn_on_missed_delivery: config.behavior.warn_on_missed_delivery,
        }
    }

    /// Registers a fresh one-shot listener under the key and returns the
    /// receiving half for the caller to await.
    ///
    /// The append happens under the registry's entry lock for that key, so
    /// registration is visible to any `answer` call that runs after this
    /// method returns.
    #[instrument(skip(self))]
    pub(crate) fn subscribe(&self, key: K) -> AnswerReceiver<V> {
        let (listener, pending_answer) = oneshot::channel();

        let mut waiting = self.listeners.entry(key).or_default();
        waiting.push(listener);
        trace!(listeners = waiting.len(), "listener registered");
        if waiting.len() > self.listener_high_water_mark {
            warn!(
                listeners = waiting.len(),
                high_water_mark = self.listener_high_water_mark,
                "listener count for key exceeds the configured high-water mark"
            );
        }

        pending_answer
    }

    /// Returns how many listeners are currently registered under the key.
    pub fn listener_count(&self, key: &K) -> usize {
        self.listeners.get(key).map_or(0, |waiting| waiting.len())
    }

    /// Returns whether the key has ever been subscribed to.
    ///
    /// Stays `true` after an answer resets the key's listener sequence.
    pub fn is_known(&self, key: &K) -> bool {
        self.listeners.contains_key(key)
    }

    /// Returns the deadline used by `ask_with_default_timeout`.
    pub const fn default_ask_timeout(&self) -> Duration {
        self.default_ask_timeout
    }

    /// Awaits a registered listener, racing it against a deadline.
    async fn await_with_deadline(
        pending_answer: AnswerReceiver<V>,
        deadline: Duration,
    ) -> Reply<V> {
        match time::timeout(deadline, pending_answer).await {
            Ok(Ok(answer)) => answer.into_reply(),
            Ok(Err(closed)) => Err(closed.into()),
            Err(elapsed) => Err(elapsed.into()),
        }
    }
}

#[async_trait]
impl<K, V> Exchange<K, V> for ExchangeBroker<K, V>
where
    K: ExchangeKey,
    V: ExchangeValue,
{
    #[instrument(skip(self))]
    async fn ask(&self, key: K) -> Reply<V> {
        let pending_answer = self.subscribe(key);

        match pending_answer.await {
            Ok(answer) => answer.into_reply(),
            Err(closed) => Err(closed.into()),
        }
    }

    #[instrument(skip(self))]
    async fn ask_with_timeout(&self, key: K, timeout: Duration) -> Reply<V> {
        let pending_answer = self.subscribe(key);

        Self::await_with_deadline(pending_answer, timeout).await
    }

    async fn ask_with_default_timeout(&self, key: K) -> Reply<V> {
        self.ask_with_timeout(key, self.default_ask_timeout).await
    }

    #[instrument(skip(self, post_subscription_callback))]
    async fn ask_with_timeout_and_callback<F>(
        &self,
        key: K,
        timeout: Duration,
        post_subscription_callback: F,
    ) -> Reply<V>
    where
        F: FnOnce() + Send,
    {
        let pending_answer = self.subscribe(key);

        // The listener is registered; the caller may now trigger whatever
        // produces the answer. The timeout window starts after the callback
        // returns.
        post_subscription_callback();

        Self::await_with_deadline(pending_answer, timeout).await
    }

    #[instrument(skip(self, outcome))]
    fn answer(&self, key: &K, outcome: AnswerOutcome<V>) -> usize {
        let message = Answer::from_outcome(outcome);

        // Existence check, take, and reset all happen under the same entry
        // lock that subscribe appends under. The sequence is left empty
        // rather than removed so the key stays distinguishable from one that
        // was never asked about.
        let waiting = if let Some(mut entry) = self.listeners.get_mut(key) {
            mem::take(entry.value_mut())
        } else {
            trace!("no listener sequence exists for key");
            return 0;
        };

        let total = waiting.len();
        let mut written = 0;
        for listener in waiting {
            if listener.send(message.clone()).is_ok() {
                written += 1;
            } else if self.warn_on_missed_delivery {
                warn!("listener was no longer receiving; answer dropped");
            }
        }
        trace!(total, written, "answer broadcast complete");

        written
    }
}

// Ensures the broker can be shared freely across Tokio tasks.
assert_impl_all!(ExchangeBroker<String, u32>: Send, Sync);
