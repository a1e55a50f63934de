use memchr::memchr;
use memchr::memmem;

use crate::domain::model::{CleanResult, TrailingMarker, Truncation};

/// 垃圾內容接在規則結尾之後的標記
pub const BRACE_STAR_MARKER: &[u8] = b"}*";
/// 垃圾內容以 outline 除錯規則開頭的標記
pub const OUTLINE_MARKER: &[u8] = b"* { outline";

/// 移除緩衝區中所有的 null byte，回傳清理後內容與移除數量
pub fn strip_null_bytes(bytes: &[u8]) -> (Vec<u8>, usize) {
    if memchr(0, bytes).is_none() {
        return (bytes.to_vec(), 0);
    }

    let mut cleaned = Vec::with_capacity(bytes.len());
    let mut rest = bytes;
    while let Some(pos) = memchr(0, rest) {
        cleaned.extend_from_slice(&rest[..pos]);
        rest = &rest[pos + 1..];
    }
    cleaned.extend_from_slice(rest);

    let removed = bytes.len() - cleaned.len();
    (cleaned, removed)
}

/// 在第一個垃圾標記處截斷緩衝區。
///
/// `}*` 優先於 `* { outline`，即使後者出現得更早；截斷在 `}*` 時補回
/// 結尾的 `}` 與換行，截斷在 `* { outline` 時只保留前綴。
pub fn truncate_trailing_garbage(bytes: Vec<u8>) -> (Vec<u8>, Option<Truncation>) {
    if let Some(offset) = memmem::find(&bytes, BRACE_STAR_MARKER) {
        let bytes_dropped = bytes.len() - offset;
        let mut kept = bytes;
        kept.truncate(offset);
        kept.extend_from_slice(b"}\n");
        let truncation = Truncation {
            marker: TrailingMarker::BraceStar,
            offset,
            bytes_dropped,
        };
        return (kept, Some(truncation));
    }

    if let Some(offset) = memmem::find(&bytes, OUTLINE_MARKER) {
        let bytes_dropped = bytes.len() - offset;
        let mut kept = bytes;
        kept.truncate(offset);
        let truncation = Truncation {
            marker: TrailingMarker::OutlineRule,
            offset,
            bytes_dropped,
        };
        return (kept, Some(truncation));
    }

    (bytes, None)
}

/// 完整清理：先移除 null byte，再截斷尾端垃圾。
/// 順序不可對調，標記的位元組可能被 null byte 打散。
pub fn clean(bytes: &[u8]) -> CleanResult {
    let (stripped, nulls_removed) = strip_null_bytes(bytes);
    let (cleaned, truncation) = truncate_trailing_garbage(stripped);

    CleanResult {
        cleaned,
        nulls_removed,
        truncation,
    }
}
