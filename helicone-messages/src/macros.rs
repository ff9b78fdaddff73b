/// Build a message from a template with named substitutions.
///
/// ```
/// use helicone_messages::{msg, MESSAGES};
///
/// let line = msg!(MESSAGES.create_success, dir = "my-app");
/// assert!(line.contains("my-app"));
/// ```
#[macro_export]
macro_rules! msg {
    ($template:expr) => {
        $crate::builder::MessageBuilder::new($template).build()
    };
    ($template:expr, $($key:ident = $value:expr),+ $(,)?) => {
        {
            let mut builder = $crate::builder::MessageBuilder::new($template);
            $(
                builder = builder.var(stringify!($key), $value);
            )+
            builder.build()
        }
    };
}
