/// Creates a single [`ConversationTurn`](crate::ConversationTurn) from a role shorthand.
///
/// ```rust
/// use flipbazzar::{TurnRole, fb_turn};
///
/// let turn = fb_turn!(assistant => "Welcome to FlipBazzar!");
/// assert_eq!(turn.role, TurnRole::Assistant);
/// assert_eq!(turn.text, "Welcome to FlipBazzar!");
/// ```
#[macro_export]
macro_rules! fb_turn {
    (user => $text:expr $(,)?) => {
        $crate::ConversationTurn::user($text)
    };
    (assistant => $text:expr $(,)?) => {
        $crate::ConversationTurn::assistant($text)
    };
    ($role:ident => $text:expr $(,)?) => {
        compile_error!("unsupported role: use user or assistant");
    };
}

/// Creates a `Vec<ConversationTurn>` from role/text pairs.
///
/// ```rust
/// use flipbazzar::{TurnRole, fb_history};
///
/// let history = fb_history![
///     assistant => "Welcome!",
///     user => "Show me laptops.",
/// ];
///
/// assert_eq!(history.len(), 2);
/// assert_eq!(history[1].role, TurnRole::User);
/// ```
#[macro_export]
macro_rules! fb_history {
    () => {
        Vec::<$crate::ConversationTurn>::new()
    };
    ($($role:ident => $text:expr),+ $(,)?) => {
        vec![$($crate::fb_turn!($role => $text)),+]
    };
}
