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
use std::time::Duration;

use tracing_subscriber::EnvFilter;

use parley::prelude::*;

/// Asking for something the caller itself must trigger is racy if the
/// trigger fires before the listener is registered. The callback variant
/// closes that race: by the time the callback runs, registration is done.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let broker: ExchangeBroker<&str, i64> = ExchangeBroker::new();

    // Answering before anyone asked reaches nothing; there is no replay.
    let written = broker.answer(&"order:42", Ok(11));
    println!("premature answer reached {written} listener(s)");

    // With the callback variant the trigger cannot come too early.
    let producer = broker.clone();
    let value = broker
        .ask_with_timeout_and_callback("order:42", Duration::from_secs(1), move || {
            let written = producer.answer(&"order:42", Ok(99));
            println!("triggered producer; answer reached {written} listener(s)");
        })
        .await?;
    println!("order:42 resolved to {value}");

    Ok(())
}
