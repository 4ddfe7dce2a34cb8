//! Adds convenience functions to some structs.
//!
//! # Example
//! ```
//! use calendrical::LocalDate;
//! use calendrical::convenience::Today;
//!
//! let today: LocalDate = LocalDate::today().unwrap();
//! ```

use crate::cal::date::LocalDate;
use crate::cal::datetime::LocalDateTime;
use crate::error::Result;

/// Adds `LocalDate::today() -> Result<LocalDate>`
pub trait Today: Sized {
    fn today() -> Result<Self>;
}

impl Today for LocalDate {
    fn today() -> Result<Self> {
        Ok(LocalDateTime::now()?.into_parts().0)
    }
}
