/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 12/3/26
******************************************************************************/

use rangeseq_rs::utils::setup_logger;
use rangeseq_rs::{IntSequence, SequenceConfig, SequenceError};

#[cfg(test)]
mod tests {
    use super::*;
    use tokio_util::sync::CancellationToken;

    // --- public API surface ---

    #[test]
    fn test_public_constructors() {
        setup_logger();

        let seq = IntSequence::new(SequenceConfig::new().with_stop(10));
        assert!(seq.error().is_none());

        let (seq, start) = IntSequence::new_with_start(
            SequenceConfig::new().with_start(2).with_stop(8),
        );
        assert_eq!(start, 2);
        assert!(seq.error().is_none());
    }

    #[test]
    fn test_materialize_concrete_cases() {
        let cases: Vec<(i64, i64, i64, Vec<i64>)> = vec![
            (1, 10, 2, vec![1, 3, 5, 7, 9]),
            (0, 10, 1, (0..10).collect()),
            (10, 1, -2, vec![10, 8, 6, 4, 2]),
            (10, -11, -5, vec![10, 5, 0, -5, -10]),
        ];

        for (start, stop, step, expected) in cases {
            let mut seq = IntSequence::new(
                SequenceConfig::new().with_start(start).with_stop(stop).with_step(step),
            );
            assert_eq!(seq.all(), expected, "case ({start}, {stop}, {step})");
            assert!(seq.error().is_none());
        }
    }

    #[test]
    fn test_invalid_definition_reports_error_and_yields_nothing() {
        let mut seq = IntSequence::new(SequenceConfig::new().with_start(5));
        assert_eq!(seq.error(), Some(SequenceError::InvalidSequence));
        assert!(!seq.has_more());
        assert!(seq.all().is_empty());
    }

    #[tokio::test]
    async fn test_stream_consumed_from_spawned_task() {
        let rx = IntSequence::new(
            SequenceConfig::new().with_start(1).with_stop(10).with_step(2),
        )
        .into_stream();

        let consumer = tokio::spawn(async move {
            let mut rx = rx;
            let mut values = Vec::new();
            while let Some(n) = rx.recv().await {
                values.push(n);
            }
            values
        });

        let values = consumer.await.expect("consumer task panicked");
        assert_eq!(values, vec![1, 3, 5, 7, 9]);
    }

    #[tokio::test]
    async fn test_cancellation_token_shared_with_caller() {
        let token = CancellationToken::new();
        let mut rx = IntSequence::new(
            SequenceConfig::new().with_stop(1_000_000).with_cancel(token.clone()),
        )
        .into_stream();

        token.cancel();

        let mut count = 0usize;
        while rx.recv().await.is_some() {
            count += 1;
        }

        // bounded prefix at most; the producer stops at its next send
        assert!(count <= 1_000_000);
    }
}
