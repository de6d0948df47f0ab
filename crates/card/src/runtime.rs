//! Detached dispatch for fire-and-forget mutation requests.
//!
//! The card never awaits a mutation; requests run on the ambient tokio
//! runtime when one exists, or on a small shared fallback runtime
//! otherwise, and their handles are dropped immediately.

use std::future::Future;
use std::sync::OnceLock;

fn runtime_handle() -> tokio::runtime::Handle {
	if let Ok(handle) = tokio::runtime::Handle::try_current() {
		return handle;
	}

	static GLOBAL_RT: OnceLock<tokio::runtime::Runtime> = OnceLock::new();
	let runtime = GLOBAL_RT.get_or_init(|| {
		tokio::runtime::Builder::new_multi_thread()
			.enable_all()
			.worker_threads(1)
			.thread_name("corkboard-dispatch")
			.build()
			.expect("failed to build corkboard dispatch runtime")
	});
	runtime.handle().clone()
}

/// Spawns `fut` and forgets it.
pub(crate) fn spawn_detached<F>(fut: F)
where
	F: Future<Output = ()> + Send + 'static,
{
	tracing::trace!("card.dispatch");
	drop(runtime_handle().spawn(fut));
}
