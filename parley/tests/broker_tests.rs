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

use anyhow::anyhow;
use tracing::*;

use parley::prelude::*;

use crate::setup::*;

mod setup;

#[tokio::test(flavor = "multi_thread")]
async fn test_ask_then_answer() -> anyhow::Result<()> {
    initialize_tracing();
    let broker: ExchangeBroker<&str, i32> = ExchangeBroker::new();

    let producer = broker.clone();
    let delivery = tokio::spawn(async move {
        // hold the answer until the consumer's registration is visible
        while producer.listener_count(&"one") == 0 {
            tokio::time::sleep(Duration::from_millis(5)).await;
        }
        producer.answer(&"one", Ok(33))
    });

    let value = broker.ask("one").await?;
    info!("SUCCESS! received {value}");
    assert_eq!(value, 33, "what is answered and received should match");
    assert_eq!(
        delivery.await?,
        1,
        "one listener should have received the answer"
    );

    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn test_answer_with_no_listeners() -> anyhow::Result<()> {
    initialize_tracing();
    let broker: ExchangeBroker<&str, &str> = ExchangeBroker::new();

    assert_eq!(
        broker.answer(&"two", Ok("x")),
        0,
        "an unasked key must reach nobody"
    );
    assert!(
        !broker.is_known(&"two"),
        "answering must not create registry state for the key"
    );

    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn test_broadcast_reaches_every_waiting_listener() -> anyhow::Result<()> {
    initialize_tracing();
    let broker: ExchangeBroker<&str, i32> = ExchangeBroker::new();

    let mut consumers = Vec::new();
    for _ in 0..4 {
        let consumer = broker.clone();
        consumers.push(tokio::spawn(async move { consumer.ask("flight-42").await }));
    }

    while broker.listener_count(&"flight-42") < 4 {
        tokio::time::sleep(Duration::from_millis(5)).await;
    }

    let written = broker.answer(&"flight-42", Ok(7));
    assert_eq!(written, 4, "every registered listener should be counted");

    for consumer in consumers {
        assert_eq!(consumer.await??, 7);
    }

    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn test_second_answer_finds_no_listeners() -> anyhow::Result<()> {
    initialize_tracing();
    let broker: ExchangeBroker<&str, i32> = ExchangeBroker::new();

    let consumer = broker.clone();
    let waiting = tokio::spawn(async move { consumer.ask("once").await });
    while broker.listener_count(&"once") == 0 {
        tokio::time::sleep(Duration::from_millis(5)).await;
    }

    assert_eq!(broker.answer(&"once", Ok(1)), 1);
    assert_eq!(
        broker.answer(&"once", Ok(2)),
        0,
        "the broadcast must have reset the key's listener sequence"
    );

    // the key stays in the registry, distinguishing it from one never asked
    assert!(broker.is_known(&"once"));
    assert_eq!(broker.listener_count(&"once"), 0);

    assert_eq!(waiting.await??, 1, "only the first answer is ever observed");

    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn test_rejected_answer_surfaces_to_every_waiter() -> anyhow::Result<()> {
    initialize_tracing();
    let broker: ExchangeBroker<&str, i32> = ExchangeBroker::new();

    let mut consumers = Vec::new();
    for _ in 0..2 {
        let consumer = broker.clone();
        consumers.push(tokio::spawn(async move { consumer.ask("doomed").await }));
    }
    while broker.listener_count(&"doomed") < 2 {
        tokio::time::sleep(Duration::from_millis(5)).await;
    }

    let written = broker.answer(&"doomed", Err(anyhow!("upstream unavailable")));
    assert_eq!(written, 2, "an error outcome is still a delivery");

    for consumer in consumers {
        match consumer.await? {
            Err(AskError::Rejected(reason)) => {
                assert!(reason.to_string().contains("upstream unavailable"));
            }
            other => panic!("expected a rejected reply, got {other:?}"),
        }
    }

    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn test_answers_do_not_cross_keys() -> anyhow::Result<()> {
    initialize_tracing();
    let broker: ExchangeBroker<String, i32> = ExchangeBroker::new();

    let left = broker.clone();
    let right = broker.clone();
    let first = tokio::spawn(async move { left.ask("left".to_string()).await });
    let second = tokio::spawn(async move { right.ask("right".to_string()).await });

    while broker.listener_count(&"left".to_string()) == 0
        || broker.listener_count(&"right".to_string()) == 0
    {
        tokio::time::sleep(Duration::from_millis(5)).await;
    }

    assert_eq!(broker.answer(&"left".to_string(), Ok(1)), 1);
    assert_eq!(broker.answer(&"right".to_string(), Ok(2)), 1);

    assert_eq!(first.await??, 1);
    assert_eq!(second.await??, 2);

    Ok(())
}
