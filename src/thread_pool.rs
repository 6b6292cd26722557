//! Thread pool selection for parallel trials.
//!
//! Trials run on a shared rayon pool with a larger per-thread stack unless the
//! caller caps the worker count, in which case a dedicated pool is built for
//! that experiment.

#[cfg(feature = "parallel")]
use rayon::ThreadPool;

#[cfg(feature = "parallel")]
use std::sync::OnceLock;

#[cfg(feature = "parallel")]
static THREAD_POOL: OnceLock<Option<ThreadPool>> = OnceLock::new();

#[cfg(feature = "parallel")]
const STACK_SIZE: usize = 8 * 1024 * 1024;

/// Shared pool with 8 MB stacks, one thread per logical CPU.
///
/// `None` if the pool could not be built; callers fall back to rayon's
/// global pool.
#[cfg(feature = "parallel")]
fn shared_pool() -> Option<&'static ThreadPool> {
    THREAD_POOL
        .get_or_init(|| {
            rayon::ThreadPoolBuilder::new()
                .stack_size(STACK_SIZE)
                .build()
                .ok()
        })
        .as_ref()
}

/// Run `op` on the pool selected by `threads`.
///
/// `Some(k)` builds a dedicated `k`-thread pool; `None` uses the shared one.
#[cfg(feature = "parallel")]
pub fn install<OP, R>(threads: Option<usize>, op: OP) -> R
where
    OP: FnOnce() -> R + Send,
    R: Send,
{
    if let Some(k) = threads {
        let dedicated = rayon::ThreadPoolBuilder::new()
            .num_threads(k.max(1))
            .stack_size(STACK_SIZE)
            .build();
        match dedicated {
            Ok(pool) => return pool.install(op),
            Err(err) => eprintln!("[percolation] falling back to shared pool: {}", err),
        }
    }

    match shared_pool() {
        Some(pool) => pool.install(op),
        None => op(),
    }
}

#[cfg(not(feature = "parallel"))]
pub fn install<OP, R>(_threads: Option<usize>, op: OP) -> R
where
    OP: FnOnce() -> R,
{
    op()
}
