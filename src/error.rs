/// A broken link invariant, as found by [`Deque::validate`](crate::Deque::validate).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("forward walk from the front sentinel took {walked} steps, expected {expected}")]
    ForwardWalk { expected: usize, walked: usize },
    #[error("backward walk from the back sentinel took {walked} steps, expected {expected}")]
    BackwardWalk { expected: usize, walked: usize },
    #[error("links around position {position} are not symmetric")]
    Asymmetric { position: usize },
    #[error("count is {count} but the sentinels disagree about emptiness")]
    EmptyState { count: usize },
}

pub type IResult<T> = Result<T, Error>;
