//! A recomputation guard over [`dispatch`].
//!
//! Hosts re-render far more often than their inputs change. Dispatching is
//! a deterministic pure function, so caching it on the input tuple is a
//! performance discipline only: recomputing unconditionally yields the same
//! instruction. Payload identity is a content digest, so equal payloads
//! share an entry regardless of where they were allocated.

use std::num::NonZeroUsize;
use std::sync::Mutex;

use lru::LruCache;
use sha1::Digest;
use sha1::Sha1;

use crate::dispatch::RenderInstruction;
use crate::dispatch::ResultPayload;
use crate::dispatch::dispatch;
use crate::truncation::LayoutBudget;

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
struct RenderKey {
    payload_digest: [u8; 20],
    terminal_width: u16,
    available_height: Option<u16>,
    render_markdown: bool,
    is_alternate_buffer: bool,
}

pub struct RenderCache {
    inner: Mutex<LruCache<RenderKey, RenderInstruction>>,
}

impl RenderCache {
    #[must_use]
    pub fn new(capacity: NonZeroUsize) -> Self {
        Self {
            inner: Mutex::new(LruCache::new(capacity)),
        }
    }

    /// Returns the cached instruction for this input tuple, or computes and
    /// caches it.
    pub fn render(
        &self,
        payload: &ResultPayload,
        budget: LayoutBudget,
        render_markdown: bool,
        is_alternate_buffer: bool,
    ) -> RenderInstruction {
        let key = RenderKey {
            payload_digest: payload_digest(payload),
            terminal_width: budget.terminal_width,
            available_height: budget.available_height,
            render_markdown,
            is_alternate_buffer,
        };
        let mut guard = match self.inner.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        if let Some(hit) = guard.get(&key) {
            return hit.clone();
        }
        let computed = dispatch(payload, budget, render_markdown, is_alternate_buffer);
        guard.put(key, computed.clone());
        computed
    }

    pub fn clear(&self) {
        let mut guard = match self.inner.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        guard.clear();
    }
}

/// Content digest of a payload. Variants are tagged so a plain-text payload
/// and a diff with identical bytes never collide.
fn payload_digest(payload: &ResultPayload) -> [u8; 20] {
    let mut hasher = Sha1::new();
    match payload {
        ResultPayload::PlainText(text) => {
            hasher.update([0u8]);
            hasher.update(text.as_bytes());
        }
        ResultPayload::FileDiff { content, filename } => {
            hasher.update([1u8]);
            hasher.update(content.as_bytes());
            hasher.update([0u8]);
            hasher.update(filename.as_bytes());
        }
        ResultPayload::TodoMarker => hasher.update([2u8]),
        ResultPayload::Styled(document) => {
            hasher.update([3u8]);
            for line in document.lines() {
                hasher.update(format!("{line:?}\n").as_bytes());
            }
        }
    }
    let digest = hasher.finalize();
    let mut out = [0u8; 20];
    out.copy_from_slice(&digest);
    out
}
