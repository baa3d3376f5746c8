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

/// Represents the ways a wait on the exchange can end without a value.
#[derive(Debug, Clone)]
pub enum AskError {
    /// Indicates that a timed wait's deadline elapsed before an answer arrived.
    Timeout,
    /// Indicates that the producer answered the key with an error instead of a value.
    Rejected(Arc<anyhow::Error>),
    /// Indicates that every holder of the exchange was dropped while the wait was pending.
    Disconnected,
}

impl std::fmt::Display for AskError {
    /// Formats the `AskError` for display.
    ///
    /// # Parameters
    /// - `f`: The formatter used for writing formatted output.
    ///
    /// # Returns
    /// A result indicating whether the formatting was successful.
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            AskError::Timeout => write!(f, "timeout exceeded"),
            AskError::Rejected(err) => write!(f, "answered with error: {}", err),
            AskError::Disconnected => write!(f, "exchange dropped while waiting"),
        }
    }
}

impl std::error::Error for AskError {}

/// Converts an elapsed timer from Tokio's timeout into an `AskError`.
impl From<tokio::time::error::Elapsed> for AskError {
    fn from(_: tokio::time::error::Elapsed) -> Self {
        AskError::Timeout
    }
}

/// Converts a closed one-shot delivery slot into an `AskError`.
impl From<tokio::sync::oneshot::error::RecvError> for AskError {
    fn from(_: tokio::sync::oneshot::error::RecvError) -> Self {
        AskError::Disconnected
    }
}
