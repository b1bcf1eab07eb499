//! 時系列トレースログ
//! 検索・ウォッチリスト操作とエラーを記録し、後から確認できるようにする

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

const MAX_LOG_ENTRIES: usize = 500;
const STORAGE_KEY: &str = "eiga_watchlist_log_trace";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogEntry {
    pub timestamp: String,
    pub level: String,    // "info", "warn", "error"
    pub category: String, // "search", "watchlist", "ui", etc.
    pub message: String,
}

pub struct LogTrace {
    logs: VecDeque<LogEntry>,
}

impl LogTrace {
    fn new() -> Self {
        let mut trace = LogTrace {
            logs: VecDeque::with_capacity(MAX_LOG_ENTRIES),
        };
        trace.load_from_storage();
        trace
    }

    fn log(&mut self, level: &str, category: &str, message: &str) {
        let timestamp = js_sys::Date::new_0()
            .to_iso_string()
            .as_string()
            .unwrap_or_default();

        // コンソールにも出力
        match level {
            "error" => web_sys::console::error_1(&format!("[{}] {}", category, message).into()),
            "warn" => web_sys::console::warn_1(&format!("[{}] {}", category, message).into()),
            _ => web_sys::console::log_1(&format!("[{}] {}", category, message).into()),
        }

        if self.logs.len() >= MAX_LOG_ENTRIES {
            self.logs.pop_front();
        }
        self.logs.push_back(LogEntry {
            timestamp,
            level: level.to_string(),
            category: category.to_string(),
            message: message.to_string(),
        });

        self.save_to_storage();
    }

    fn get_logs_json(&self) -> String {
        let logs: Vec<&LogEntry> = self.logs.iter().collect();
        serde_json::to_string_pretty(&logs).unwrap_or_else(|_| "[]".to_string())
    }

    fn clear(&mut self) {
        self.logs.clear();
        self.save_to_storage();
    }

    fn load_from_storage(&mut self) {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                if let Ok(Some(json_str)) = storage.get_item(STORAGE_KEY) {
                    if let Ok(logs) = serde_json::from_str::<Vec<LogEntry>>(&json_str) {
                        self.logs = logs.into_iter().collect();
                    }
                }
            }
        }
    }

    fn save_to_storage(&self) {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                let entries: Vec<&LogEntry> = self.logs.iter().collect();
                let json_str =
                    serde_json::to_string(&entries).unwrap_or_else(|_| "[]".to_string());
                let _ = storage.set_item(STORAGE_KEY, &json_str);
            }
        }
    }
}

// グローバルなログトレースインスタンス
thread_local! {
    static LOG_TRACE: std::cell::RefCell<LogTrace> = std::cell::RefCell::new(LogTrace::new());
}

pub fn log_info(category: &str, message: &str) {
    LOG_TRACE.with(|trace| {
        trace.borrow_mut().log("info", category, message);
    });
}

pub fn log_warn(category: &str, message: &str) {
    LOG_TRACE.with(|trace| {
        trace.borrow_mut().log("warn", category, message);
    });
}

pub fn log_error(category: &str, message: &str) {
    LOG_TRACE.with(|trace| {
        trace.borrow_mut().log("error", category, message);
    });
}

pub fn clear_logs() {
    LOG_TRACE.with(|trace| {
        trace.borrow_mut().clear();
    });
}

pub fn get_logs_json() -> String {
    LOG_TRACE.with(|trace| trace.borrow().get_logs_json())
}

pub async fn copy_logs_to_clipboard_async() -> Result<(), String> {
    let json_str = get_logs_json();

    if let Some(window) = web_sys::window() {
        let clipboard = window.navigator().clipboard();
        let promise = clipboard.write_text(&json_str);
        match wasm_bindgen_futures::JsFuture::from(promise).await {
            Ok(_) => {
                log_info("log-trace", "ログをクリップボードにコピーしました");
                Ok(())
            }
            Err(e) => {
                let error_msg = format!("クリップボードへのコピー失敗: {:?}", e);
                log_error("log-trace", &error_msg);
                Err(error_msg)
            }
        }
    } else {
        Err("windowが利用できません".to_string())
    }
}
