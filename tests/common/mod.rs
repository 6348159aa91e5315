#![allow(dead_code)]
use card_pager::ContentData;

/// `n` short numbered lines, one visual line each at any UI font size.
pub fn numbered_lines(n: usize) -> String {
    (1..=n)
        .map(|i| format!("line{i}"))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn sample_content(body: &str) -> ContentData {
    ContentData {
        title: "最重要的任务永远只有一个".into(),
        subtitle: "VOL.01 | 2025".into(),
        tag: "超级全！快收藏！".into(),
        body: body.into(),
    }
}
