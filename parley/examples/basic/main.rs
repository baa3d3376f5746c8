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

use tokio::time::sleep;
use tracing_subscriber::EnvFilter;

use parley::prelude::*;

/// A producer and a consumer that know nothing about each other rendezvous
/// through the key `"one"`; a second key nobody answers shows the timeout
/// path; an answer with no audience shows the delivered count.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let broker: ExchangeBroker<&str, i64> = ExchangeBroker::new();

    // The producer answers "one" a little later, from its own task.
    let producer = broker.clone();
    tokio::spawn(async move {
        sleep(Duration::from_millis(200)).await;
        let written = producer.answer(&"one", Ok(1));
        println!("answer(\"one\") reached {written} listener(s)");
    });

    let value = broker.ask("one").await?;
    println!("ask(\"one\") resolved to {value}");

    // Nobody ever answers "two"; the deadline unblocks the consumer.
    match broker
        .ask_with_timeout("two", Duration::from_millis(300))
        .await
    {
        Ok(value) => println!("ask(\"two\") resolved to {value}"),
        Err(error) => println!("ask(\"two\") failed: {error}"),
    }

    // Answering a key with no one registered reaches nothing.
    let written = broker.answer(&"idle", Ok(0));
    println!("answer(\"idle\") reached {written} listener(s)");

    Ok(())
}
