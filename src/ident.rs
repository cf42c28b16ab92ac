//! 标识符生成
//!
//! 传说书 ID 与词条 UID 的生成规则沿用前端的格式，保证迁移后的数据
//! 与浏览器侧生成的历史数据可以混存。

use chrono::Utc;
use uuid::Uuid;

/// 当前 Unix 时间戳（毫秒）
pub fn now_ms() -> i64 {
    Utc::now().timestamp_millis()
}

/// 生成传说书 ID
///
/// 可读、基本唯一：毫秒时间戳 + 6 位随机十六进制后缀。
pub fn new_lorebook_id() -> String {
    let suffix = Uuid::new_v4().simple().to_string();
    format!("book_{}_{}", now_ms(), &suffix[..6])
}

/// 生成词条 UID
///
/// 数值型 UID，取当前毫秒时间戳。同一毫秒内连续生成会碰撞，
/// 这是沿用前端的已知限制。
pub fn new_entry_uid() -> i64 {
    now_ms()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lorebook_id_format() {
        let id = new_lorebook_id();
        assert!(id.starts_with("book_"));

        let parts: Vec<&str> = id.splitn(3, '_').collect();
        assert_eq!(parts.len(), 3);
        assert!(parts[1].parse::<i64>().is_ok());
        assert_eq!(parts[2].len(), 6);
    }

    #[test]
    fn test_lorebook_id_is_url_safe() {
        let id = new_lorebook_id();
        assert!(
            id.chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_')
        );
    }

    #[test]
    fn test_entry_uid_is_positive() {
        assert!(new_entry_uid() > 0);
    }

    #[test]
    fn test_now_ms_is_millisecond_scale() {
        // 2020-01-01 之后，毫秒精度
        assert!(now_ms() > 1_577_836_800_000);
    }
}
