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
use std::hash::Hash;

/// Trait for exchange keys, correlating a producer's answer with its waiting consumers.
///
/// Keys must be comparable and hashable so they can index the listener
/// registry, and cloneable so a caller can keep its own copy while the
/// registry holds another. An absent or non-comparable key is a usage bug,
/// and these bounds make it unrepresentable rather than a runtime abort.
pub trait ExchangeKey: Eq + Hash + Clone + Debug + Send + Sync + 'static {}

impl<T> ExchangeKey for T where T: Eq + Hash + Clone + Debug + Send + Sync + 'static {}
