/// Creates a single transcript [`Message`](crate::Message) from a role shorthand.
///
/// ```rust
/// use musing::{Role, mu_msg};
///
/// let message = mu_msg!(assistant => "How was your day?");
/// assert_eq!(message.role, Role::Assistant);
/// assert_eq!(message.content, "How was your day?");
/// ```
#[macro_export]
macro_rules! mu_msg {
    (user => $content:expr $(,)?) => {
        $crate::Message::new($crate::Role::User, $content)
    };
    (assistant => $content:expr $(,)?) => {
        $crate::Message::new($crate::Role::Assistant, $content)
    };
    ($role:ident => $content:expr $(,)?) => {
        compile_error!("unsupported role: use user or assistant");
    };
}

/// Creates a `Vec<Message>` transcript from role/content pairs, oldest first.
///
/// ```rust
/// use musing::{Role, mu_transcript};
///
/// let transcript = mu_transcript![
///     assistant => "How was your day?",
///     user => "Got promoted!",
/// ];
///
/// assert_eq!(transcript.len(), 2);
/// assert_eq!(transcript[0].role, Role::Assistant);
/// assert_eq!(transcript[1].role, Role::User);
/// ```
#[macro_export]
macro_rules! mu_transcript {
    () => {
        Vec::<$crate::Message>::new()
    };
    ($($role:ident => $content:expr),+ $(,)?) => {
        vec![$($crate::mu_msg!($role => $content)),+]
    };
}
