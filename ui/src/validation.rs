/// Core validation trait shared by the theme and font layers.
///
/// Validators are small stateless structs that check one kind of input and
/// report a typed error. They can be composed by calling one from another.
///
/// # Type Parameters
///
/// * `T` - The type of data being validated (can be unsized like `str` or `Path`)
///
/// # Examples
///
/// ```
/// use lumen::validation::Validator;
///
/// struct NonEmpty;
/// impl Validator<str> for NonEmpty {
///     type Error = String;
///
///     fn validate(&self, input: &str) -> Result<(), Self::Error> {
///         if input.is_empty() {
///             Err("Input cannot be empty".to_string())
///         } else {
///             Ok(())
///         }
///     }
/// }
/// ```
pub trait Validator<T: ?Sized> {
    type Error;

    /// Validate the input and return Ok(()) if valid, or Err with validation error
    fn validate(&self, input: &T) -> Result<(), Self::Error>;
}
