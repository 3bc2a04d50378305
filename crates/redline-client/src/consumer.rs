//! Incremental consumption of a streamed response body.

use std::pin::pin;

use bytes::Bytes;
use futures::{Stream, StreamExt};

use crate::decode::StreamDecoder;
use crate::error::StreamAborted;

/// Read a body stream to completion, invoking `publish` with the full
/// accumulated text after every decoded increment.
///
/// Chunks are decoded with a stateful decoder, so fragment and chunk
/// boundaries never corrupt multi-byte characters. An empty stream
/// resolves to an empty value without ever publishing. A transport error
/// carries the text accumulated so far; the caller decides what becomes
/// visible.
pub async fn consume_body<S, E>(
    chunks: S,
    mut publish: impl FnMut(&str),
) -> Result<String, StreamAborted>
where
    S: Stream<Item = Result<Bytes, E>>,
    E: std::fmt::Display,
{
    let mut chunks = pin!(chunks);
    let mut decoder = StreamDecoder::new();
    let mut accumulated = String::new();

    while let Some(chunk) = chunks.next().await {
        match chunk {
            Ok(bytes) => {
                let text = decoder.decode(&bytes);
                if !text.is_empty() {
                    accumulated.push_str(&text);
                    publish(&accumulated);
                }
            }
            Err(err) => {
                return Err(StreamAborted {
                    partial: accumulated,
                    reason: err.to_string(),
                });
            }
        }
    }

    let tail = decoder.finish();
    if !tail.is_empty() {
        accumulated.push_str(&tail);
        publish(&accumulated);
    }

    Ok(accumulated)
}
