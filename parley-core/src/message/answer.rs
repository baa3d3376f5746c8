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

use std::sync::Arc;

use derive_new::new;
use static_assertions::assert_impl_all;

use crate::common::{AnswerOutcome, Reply};
use crate::message::AskError;

/// The envelope broadcast to every listener registered under a key.
///
/// An `Answer` is created once per `answer` call and cloned per delivery.
/// A producer-supplied error is wrapped in an `Arc` so that the same error
/// can fan out to any number of listeners.
#[derive(new, Debug, Clone)]
pub struct Answer<V> {
    /// The producer's outcome: the value itself, or the error the waiting
    /// consumers should observe instead.
    pub(crate) outcome: Result<V, Arc<anyhow::Error>>,
}

impl<V> Answer<V> {
    /// Wraps a producer outcome for broadcast, moving any error behind an `Arc`.
    pub(crate) fn from_outcome(outcome: AnswerOutcome<V>) -> Self {
        Self::new(outcome.map_err(Arc::new))
    }

    /// Converts the delivered envelope into what the waiting consumer returns.
    pub(crate) fn into_reply(self) -> Reply<V> {
        match self.outcome {
            Ok(value) => Ok(value),
            Err(error) => Err(AskError::Rejected(error)),
        }
    }
}

// Ensures that Answer implements the Send trait.
assert_impl_all!(Answer<u32>: Send);
