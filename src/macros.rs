/// Builds an [`IniDocument`](crate::IniDocument) from a literal description.
///
/// Section and field names are string literals; values are any expression
/// convertible into an [`IniValue`](crate::IniValue) (strings, booleans,
/// integers, floats, chars).
///
/// # Examples
///
/// ```rust
/// use ini_codec::ini;
///
/// let document = ini! {
///     "Server" => {
///         "host" => "localhost",
///         "port" => 8080,
///         "secure" => true,
///     },
///     "Limits" => {
///         "timeout" => 2.5,
///     },
/// };
///
/// assert_eq!(document["Server"]["port"].as_int(), Ok(8080));
/// assert_eq!(document["Limits"]["timeout"].as_float(), Ok(2.5));
/// ```
#[macro_export]
macro_rules! ini {
    // Empty document
    () => {
        $crate::IniDocument::new()
    };

    // One or more sections, each with zero or more fields
    ( $( $section:literal => { $( $field:literal => $value:expr ),* $(,)? } ),* $(,)? ) => {{
        let mut document = $crate::IniDocument::new();
        $(
            let _ = &mut document[$section];
            $(
                document[$section].insert($field, $value);
            )*
        )*
        document
    }};
}
