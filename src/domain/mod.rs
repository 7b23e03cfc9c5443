//! Domain layer: strong types with validation and invariants (no I/O).

mod reason;
mod response;
mod validation;
mod value;

pub use reason::{Reason, reason_string};
pub use response::ValidationResult;
pub use validation::ValidationError;
pub use value::{CodePrefix, CountryCode, DiscountCode, SanitizedDomain};
