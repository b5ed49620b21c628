/// The runtime value type.
///
/// Defines the `Value` enum with its kind tags and the uniform "inspect"
/// display used for user-visible output.
pub mod core;
/// Hash key computation.
///
/// Defines `HashKey`, the key under which Integer, Boolean and String values
/// are stored in a `Value::Hash`, and the FNV-1a hash used for strings.
pub mod hash_key;
/// Callable values.
///
/// Defines user functions (closures over an environment) and native builtins.
pub mod function;
