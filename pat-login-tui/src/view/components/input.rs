//! 单行输入框的文本处理

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// 光标符号
pub const CURSOR: &str = "▎";

/// 掩码符号
const MASK: char = '•';

/// 输入框要显示的文本：密文按字符数替换为掩码
pub fn display_value(value: &str, masked: bool) -> String {
    if masked {
        std::iter::repeat_n(MASK, value.chars().count()).collect()
    } else {
        value.to_string()
    }
}

/// 截取末尾能放进 `width` 列的部分，光标总在末尾，所以保留尾部
pub fn fit_tail(text: &str, width: usize) -> &str {
    if text.width() <= width {
        return text;
    }

    let mut used = 0;
    let mut start = text.len();
    for (idx, ch) in text.char_indices().rev() {
        let w = ch.width().unwrap_or(0);
        if used + w > width {
            break;
        }
        used += w;
        start = idx;
    }
    &text[start..]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_value_masks_per_char() {
        assert_eq!(display_value("abc", true), "•••");
        assert_eq!(display_value("é", true), "•");
        assert_eq!(display_value("abc", false), "abc");
    }

    #[test]
    fn test_fit_tail_keeps_end() {
        assert_eq!(fit_tail("github.com", 20), "github.com");
        assert_eq!(fit_tail("github.com", 3), "com");
        assert_eq!(fit_tail("", 3), "");
    }

    #[test]
    fn test_fit_tail_wide_chars() {
        // 每个汉字占两列
        assert_eq!(fit_tail("令牌令牌", 5), "令牌");
        assert_eq!(fit_tail("令牌令牌", 4), "令牌");
    }
}
