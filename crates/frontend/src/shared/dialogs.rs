/// Блокирующее подтверждение через браузер; `false`, если окна нет
pub fn confirm(message: &str) -> bool {
    if let Some(win) = web_sys::window() {
        win.confirm_with_message(message).unwrap_or(false)
    } else {
        false
    }
}
