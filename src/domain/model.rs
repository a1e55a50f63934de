/// 標記尾端垃圾內容開頭的位元組序列
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrailingMarker {
    /// 垃圾接在前一條規則的結尾大括號之後 (`}*`)
    BraceStar,
    /// 垃圾以 outline 除錯規則開頭 (`* { outline`)
    OutlineRule,
}

impl TrailingMarker {
    pub fn as_str(&self) -> &'static str {
        match self {
            TrailingMarker::BraceStar => "}*",
            TrailingMarker::OutlineRule => "* { outline",
        }
    }
}

/// 截斷詳情：在哪個標記、哪個位置、丟掉多少位元組
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Truncation {
    pub marker: TrailingMarker,
    pub offset: usize,
    pub bytes_dropped: usize,
}

/// 清理結果：輸出內容加上移除統計
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleanResult {
    pub cleaned: Vec<u8>,
    pub nulls_removed: usize,
    pub truncation: Option<Truncation>,
}

impl CleanResult {
    /// 是否有任何內容被移除
    pub fn is_dirty(&self) -> bool {
        self.nulls_removed > 0 || self.truncation.is_some()
    }
}
