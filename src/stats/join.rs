//! Both-or-neither joins of fallible futures.

use std::future::Future;

/// Run two fallible futures concurrently and return both results.
///
/// Resolves to the first error as soon as either future fails, without
/// waiting for the other; a partial result is never produced.
pub async fn both<A, B, T, U, E>(a: A, b: B) -> Result<(T, U), E>
where
    A: Future<Output = Result<T, E>>,
    B: Future<Output = Result<U, E>>,
{
    futures::future::try_join(a, b).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::future::{pending, ready};

    #[test]
    fn test_both_succeed() {
        let joined = tokio_test::block_on(both(
            ready(Ok::<_, &str>(1)),
            ready(Ok::<_, &str>("one")),
        ));
        assert_eq!(joined, Ok((1, "one")));
    }

    #[test]
    fn test_either_failure_fails_the_join() {
        let left = tokio_test::block_on(both(
            ready(Err::<u8, _>("left")),
            ready(Ok::<u8, _>(2)),
        ));
        assert_eq!(left, Err("left"));

        let right = tokio_test::block_on(both(
            ready(Ok::<u8, _>(1)),
            ready(Err::<u8, _>("right")),
        ));
        assert_eq!(right, Err("right"));
    }

    #[test]
    fn test_failure_does_not_wait_for_the_other_side() {
        // The second future never resolves; the join must still settle
        let joined = tokio_test::block_on(both(
            ready(Err::<u8, _>("down")),
            pending::<Result<u8, &str>>(),
        ));
        assert_eq!(joined, Err("down"));
    }
}
