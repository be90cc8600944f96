//! Shared macros for the backend crate.

/// Generate a `fmt::Debug` implementation that hides credentials.
///
/// Each field is prefixed with a keyword:
///
/// - `show field_name` prints the value normally
/// - `redact_option field_name` prints `Some("[REDACTED]")` or `None`
///
/// Connection strings carry passwords, so `Config` uses this instead of
/// `#[derive(Debug)]`.
///
/// ```ignore
/// redacted_debug!(Config {
///     show bind_address,
///     redact_option database_url,
/// });
/// ```
macro_rules! redacted_debug {
    ($name:ident { $( $kind:ident $field:ident ),* $(,)? }) => {
        impl ::std::fmt::Debug for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                let mut s = f.debug_struct(stringify!($name));
                $( redacted_debug!(@field s, self, $kind, $field); )*
                s.finish_non_exhaustive()
            }
        }
    };
    (@field $s:ident, $self:ident, show, $field:ident) => {
        $s.field(stringify!($field), &$self.$field);
    };
    (@field $s:ident, $self:ident, redact_option, $field:ident) => {
        $s.field(stringify!($field), &$self.$field.as_ref().map(|_| "[REDACTED]"));
    };
}
